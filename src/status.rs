//! Status records published to the remote observer.

use crate::game::GameState;

/// The `state` field of a status record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum StatusState {
    Idle,
    WaitingForInput,
    GameOver,
    /// The sequence is being shown. Answers are not accepted yet.
    DisplayingPattern,
}

impl StatusState {
    /// Display string used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            StatusState::Idle => "IDLE",
            StatusState::WaitingForInput => "WAITING_FOR_INPUT",
            StatusState::GameOver => "GAME_OVER",
            StatusState::DisplayingPattern => "DISPLAYING_PATTERN",
        }
    }
}

impl From<GameState> for StatusState {
    fn from(state: GameState) -> Self {
        match state {
            GameState::Idle => StatusState::Idle,
            GameState::Playing => StatusState::WaitingForInput,
            GameState::GameOver => StatusState::GameOver,
        }
    }
}

impl core::fmt::Display for StatusState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status notification, e.g. `{"state": "WAITING_FOR_INPUT", "score": 2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Status {
    pub state: StatusState,
    /// Completed rounds. Absent on the interim `DISPLAYING_PATTERN` record.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub score: Option<u32>,
}

impl Status {
    /// Regular state notification with a score.
    pub fn game(state: GameState, score: u32) -> Self {
        Self {
            state: state.into(),
            score: Some(score),
        }
    }

    /// Interim notification sent when a sequence playback begins.
    pub const fn displaying_pattern() -> Self {
        Self {
            state: StatusState::DisplayingPattern,
            score: None,
        }
    }
}
