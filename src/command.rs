//! Commands received from the remote player.

use crate::color::Color;

/// Command message as delivered by the transport, e.g.
/// `{"action": "input", "value": "red"}`.
///
/// Both fields are optional on the wire; [`Command::parse`] decides what a
/// message means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct CommandMessage<'a> {
    #[cfg_attr(feature = "serde", serde(borrow, default))]
    pub action: Option<&'a str>,
    #[cfg_attr(feature = "serde", serde(borrow, default))]
    pub value: Option<&'a str>,
}

impl<'a> CommandMessage<'a> {
    /// Creates a message without a value.
    pub const fn action(action: &'a str) -> Self {
        Self {
            action: Some(action),
            value: None,
        }
    }

    /// Creates a message with a value.
    pub const fn with_value(action: &'a str, value: &'a str) -> Self {
        Self {
            action: Some(action),
            value: Some(value),
        }
    }
}

/// A recognized command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Start a new game.
    Start,
    /// Answer with a color. `None` means the value named no palette color,
    /// which is always a wrong answer.
    Input(Option<Color>),
}

impl Command {
    /// Action name that starts a game.
    pub const START: &'static str = "start";

    /// Action name that submits an answer.
    pub const INPUT: &'static str = "input";

    /// Interprets a command message.
    ///
    /// Returns `None` for messages that carry no command: a missing or
    /// unknown action, or an `input` without a value.
    pub fn parse(message: &CommandMessage<'_>) -> Option<Command> {
        match message.action? {
            Command::START => Some(Command::Start),
            Command::INPUT => message
                .value
                .map(|value| Command::Input(Color::from_name(value))),
            _ => None,
        }
    }
}
