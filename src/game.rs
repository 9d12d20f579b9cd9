//! Game engine: sequence generation, answer validation and round bookkeeping.
//!
//! [`Game`] is a pure state machine. It knows nothing about time or output
//! lines; the controller decides what to display based on the [`Verdict`]
//! each answer produces.

use crate::color::{Color, ColorSource};
use heapless::Vec;

/// Default maximum sequence length.
pub const DEFAULT_CAPACITY: usize = 64;

/// The state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    /// No game running. Waiting for a start command.
    Idle,
    /// A game is running and answers are accepted.
    Playing,
    /// The last game ended with a wrong answer.
    GameOver,
}

/// Outcome of validating one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    /// Answer matched, more answers are needed for this round.
    Correct,
    /// Answer matched and finished the round.
    RoundComplete,
    /// Answer did not match, or no answer was expected. The game is over.
    Wrong,
}

/// Errors reported by the game engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameError {
    /// The sequence reached its capacity and cannot grow further.
    SequenceFull {
        /// Maximum sequence length.
        capacity: usize,
    },
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::SequenceFull { capacity } => {
                write!(f, "sequence is full ({} colors)", capacity)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// A Simon game.
///
/// # Type Parameters
/// * `C` - Source of new sequence colors
/// * `N` - Maximum sequence length
pub struct Game<C: ColorSource, const N: usize = DEFAULT_CAPACITY> {
    colors: C,
    state: GameState,
    sequence: Vec<Color, N>,
    cursor: usize,
}

impl<C: ColorSource, const N: usize> Game<C, N> {
    /// Creates an idle game drawing colors from `colors`.
    ///
    /// A game must hold at least one color, so `N == 0` fails to build:
    ///
    /// ```compile_fail
    /// use simon_kernel::{Game, RandomColors};
    ///
    /// let mut game = Game::<_, 0>::new(RandomColors::seeded(7));
    /// game.start_game();
    /// ```
    pub fn new(colors: C) -> Self {
        const { assert!(N > 0, "a game needs room for at least one color") };
        Self {
            colors,
            state: GameState::Idle,
            sequence: Vec::new(),
            cursor: 0,
        }
    }

    /// Starts a new game with a one-color sequence.
    ///
    /// Returns `false` and changes nothing if a game is already being played.
    /// Starting from [`GameState::GameOver`] is allowed.
    pub fn start_game(&mut self) -> bool {
        if self.state == GameState::Playing {
            return false;
        }

        self.sequence.clear();
        self.cursor = 0;
        self.state = GameState::Playing;

        // Cannot fail: the sequence is empty and N > 0 is checked in `new`.
        let _ = self.next_round();
        true
    }

    /// Appends one random color and rewinds the input cursor.
    ///
    /// Returns the full sequence to display.
    ///
    /// # Errors
    /// * `SequenceFull` - The sequence is at capacity. Nothing changes; the
    ///   round stays complete, so the next answer ends the game.
    pub fn next_round(&mut self) -> Result<&[Color], GameError> {
        if self.sequence.is_full() {
            return Err(GameError::SequenceFull { capacity: N });
        }

        let color = self.colors.next_color();
        // Capacity was checked above.
        let _ = self.sequence.push(color);
        self.cursor = 0;
        Ok(self.sequence.as_slice())
    }

    /// Checks `answer` against the next expected color.
    ///
    /// An answer given outside [`GameState::Playing`], against an empty
    /// sequence, or after the round is already complete counts as wrong.
    pub fn validate(&mut self, answer: Color) -> Verdict {
        match self.expected() {
            Some(expected) if expected == answer => {
                self.cursor += 1;
                if self.cursor == self.sequence.len() {
                    Verdict::RoundComplete
                } else {
                    Verdict::Correct
                }
            }
            _ => self.game_over(),
        }
    }

    /// Handles an answer that names no palette color.
    ///
    /// Such an answer never matches, so it always ends the game.
    pub fn reject(&mut self) -> Verdict {
        self.game_over()
    }

    /// Returns to [`GameState::Idle`] and forgets the sequence.
    pub fn reset_to_idle(&mut self) {
        self.state = GameState::Idle;
        self.sequence.clear();
        self.cursor = 0;
    }

    fn expected(&self) -> Option<Color> {
        if self.state != GameState::Playing {
            return None;
        }
        self.sequence.get(self.cursor).copied()
    }

    fn game_over(&mut self) -> Verdict {
        self.state = GameState::GameOver;
        Verdict::Wrong
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the sequence generated so far.
    pub fn sequence(&self) -> &[Color] {
        &self.sequence
    }

    /// Returns the number of rounds played, equal to the sequence length.
    pub fn round(&self) -> usize {
        self.sequence.len()
    }

    /// Returns how many answers of the current round were confirmed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the number of completed rounds.
    pub fn score(&self) -> u32 {
        self.round().saturating_sub(1) as u32
    }
}
