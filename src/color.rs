//! The four-color game palette and the source of random colors.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// A color token of the fixed game palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    /// Number of colors in the palette.
    pub const COUNT: usize = 4;

    /// Every palette color, ordered by [`Color::index`].
    pub const ALL: [Color; Color::COUNT] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    /// Stable position of this color in [`Color::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Green => 1,
            Color::Blue => 2,
            Color::Yellow => 3,
        }
    }

    /// Inverse of [`Color::index`]. Returns `None` for indices outside the palette.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Color> {
        if index < Color::COUNT {
            Some(Color::ALL[index])
        } else {
            None
        }
    }

    /// Lowercase name used on the wire (`"red"`, `"green"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
        }
    }

    /// Looks up a color by its wire name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Color> {
        Color::ALL.into_iter().find(|color| color.name() == name)
    }
}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Supplies the colors appended to the game sequence.
///
/// Implement this to control where new rounds come from. The game engine
/// expects independent, uniformly distributed draws with replacement.
pub trait ColorSource {
    /// Draws the next color.
    fn next_color(&mut self) -> Color;
}

/// Uniform color draws backed by any [`RngCore`].
#[derive(Debug, Clone)]
pub struct RandomColors<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RandomColors<R> {
    /// Wraps an already seeded random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomColors<SmallRng> {
    /// Creates a source from a seed.
    ///
    /// On a microcontroller, take the seed from the hardware RNG or an
    /// unconnected ADC pin so every power-up plays a different game.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Creates a source seeded from the operating system.
    #[cfg(feature = "std")]
    pub fn from_os_rng() -> Self {
        Self::new(SmallRng::from_os_rng())
    }
}

impl<R: RngCore> ColorSource for RandomColors<R> {
    fn next_color(&mut self) -> Color {
        let index = self.rng.random_range(0..Color::COUNT);
        Color::ALL[index]
    }
}
