//! Output lines, one per palette color.
//!
//! Defines the [`Light`] trait for hardware abstraction and [`LightBoard`],
//! which holds exactly one line per [`Color`] so a lookup can never miss.

use crate::color::Color;

/// Trait for abstracting a single on/off output line.
///
/// Implement this for a GPIO pin, a PWM channel, an LED driver channel, etc.
/// Handle any hardware errors internally - this method cannot fail.
pub trait Light {
    /// Switches the line on (`true`) or off (`false`).
    fn set(&mut self, on: bool);
}

/// Errors found while wiring up a [`LightBoard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardError {
    /// A line was given a name outside the palette.
    UnknownName,
    /// Two lines were given the same color.
    DuplicateLine(Color),
    /// No line was given for a color.
    MissingLine(Color),
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::UnknownName => {
                write!(f, "output line name is not a palette color")
            }
            BoardError::DuplicateLine(color) => {
                write!(f, "more than one output line for {}", color)
            }
            BoardError::MissingLine(color) => {
                write!(f, "no output line for {}", color)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// The four output lines of the game, indexed by [`Color`].
pub struct LightBoard<L: Light> {
    lines: [L; Color::COUNT],
}

impl<L: Light> LightBoard<L> {
    /// Creates a board from lines ordered like [`Color::ALL`]. All lines are
    /// switched off.
    pub fn new(lines: [L; Color::COUNT]) -> Self {
        let mut board = Self { lines };
        board.set_all(false);
        board
    }

    /// Creates a board from `(name, line)` pairs, e.g. `[("red", pin23), ...]`.
    ///
    /// Every palette color must appear exactly once.
    ///
    /// # Errors
    /// * `UnknownName` - A name is not a palette color
    /// * `DuplicateLine` - A color appears twice
    /// * `MissingLine` - A color does not appear
    pub fn from_named<'a>(
        named: impl IntoIterator<Item = (&'a str, L)>,
    ) -> Result<Self, BoardError> {
        let mut slots: [Option<L>; Color::COUNT] = core::array::from_fn(|_| None);

        for (name, line) in named {
            let color = Color::from_name(name).ok_or(BoardError::UnknownName)?;
            let slot = &mut slots[color.index()];
            if slot.is_some() {
                return Err(BoardError::DuplicateLine(color));
            }
            *slot = Some(line);
        }

        match slots {
            [Some(red), Some(green), Some(blue), Some(yellow)] => {
                Ok(Self::new([red, green, blue, yellow]))
            }
            slots => {
                let index = slots.iter().position(Option::is_none).unwrap_or_default();
                Err(BoardError::MissingLine(Color::ALL[index]))
            }
        }
    }

    /// Switches the line of one color.
    #[inline]
    pub fn set(&mut self, color: Color, on: bool) {
        self.lines[color.index()].set(on);
    }

    /// Switches every line together.
    pub fn set_all(&mut self, on: bool) {
        for line in &mut self.lines {
            line.set(on);
        }
    }

    /// Returns the line of one color.
    pub fn line(&self, color: Color) -> &L {
        &self.lines[color.index()]
    }

    /// Consumes the board and returns its lines ordered like [`Color::ALL`].
    pub fn into_lines(self) -> [L; Color::COUNT] {
        self.lines
    }
}
