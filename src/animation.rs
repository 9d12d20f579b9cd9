//! Non-blocking light animations.
//!
//! Provides [`Animator`], which drives a [`LightBoard`] through one of three
//! mutually exclusive timed patterns. Each call to [`Animator::service`]
//! compares the given instant against the time of the last step and either
//! performs the next step or returns immediately. Nothing here ever waits.

use crate::color::Color;
use crate::lights::{Light, LightBoard};
use crate::time::TimeInstant;

/// Gap before each color of a sequence playback lights up, in milliseconds.
pub const SEQUENCE_GAP_MS: u64 = 250;

/// How long each color of a sequence playback stays lit, in milliseconds.
pub const SEQUENCE_ON_MS: u64 = 800;

/// Half-cycle length of the win flourish, in milliseconds.
pub const WIN_HALF_CYCLE_MS: u64 = 100;

/// Number of steps of the win flourish (three on/off cycles).
pub const WIN_STEPS: usize = 6;

/// How long the lose light stays on, in milliseconds.
pub const LOSE_HOLD_MS: u64 = 1000;

/// The line lit by the lose animation.
pub const LOSE_COLOR: Color = Color::Red;

/// Which animation is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationKind {
    /// Nothing is playing. Commands are accepted.
    None,
    /// The game sequence is being replayed.
    Sequence,
    /// All lines flash together.
    Win,
    /// The lose line is held on.
    Lose,
}

/// Notable moments reported by [`Animator::service`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationEvent {
    /// Sequence playback finished. The player may answer now.
    SequenceFinished,
}

#[derive(Debug, Clone, Copy)]
enum Active<I> {
    None,
    Sequence { step: usize, last_step: I },
    Win { step: usize, last_step: I, then_sequence: bool },
    Lose { started: I },
}

/// Plays the game's light animations.
///
/// # Type Parameters
/// * `I` - Time instant type
/// * `L` - Output line type
pub struct Animator<I: TimeInstant, L: Light> {
    lights: LightBoard<L>,
    active: Active<I>,
}

impl<I: TimeInstant, L: Light> Animator<I, L> {
    /// Creates an idle animator driving `lights`.
    pub fn new(lights: LightBoard<L>) -> Self {
        Self {
            lights,
            active: Active::None,
        }
    }

    /// Starts replaying the sequence passed to later [`Animator::service`] calls.
    ///
    /// Replaces whatever was playing. Callers are expected to only start an
    /// animation while [`Animator::is_idle`] holds.
    pub fn start_sequence(&mut self, now: I) {
        debug!("animation: sequence");
        self.active = Active::Sequence {
            step: 0,
            last_step: now,
        };
    }

    /// Starts the win flourish.
    pub fn start_win(&mut self, now: I) {
        debug!("animation: win");
        self.active = Active::Win {
            step: 0,
            last_step: now,
            then_sequence: false,
        };
    }

    /// Starts the win flourish followed directly by a sequence playback.
    ///
    /// The playback begins on the service call that ends the flourish.
    pub fn start_win_then_sequence(&mut self, now: I) {
        debug!("animation: win, then sequence");
        self.active = Active::Win {
            step: 0,
            last_step: now,
            then_sequence: true,
        };
    }

    /// Starts the lose animation. The lose line lights up immediately.
    pub fn start_lose(&mut self, now: I) {
        debug!("animation: lose");
        self.lights.set(LOSE_COLOR, true);
        self.active = Active::Lose { started: now };
    }

    /// Advances the running animation to `now`.
    ///
    /// `sequence` is the game's current sequence; it is only read while a
    /// sequence playback is running. Performs at most one step per call.
    pub fn service(&mut self, now: I, sequence: &[Color]) -> Option<AnimationEvent> {
        match self.active {
            Active::None => None,

            Active::Sequence { step, last_step } => {
                // Two steps per color: on, then off.
                if step >= sequence.len() * 2 {
                    trace!("animation: sequence done after {} steps", step);
                    self.active = Active::None;
                    return Some(AnimationEvent::SequenceFinished);
                }

                let lighting = step % 2 == 0;
                let interval = if lighting {
                    SEQUENCE_GAP_MS
                } else {
                    SEQUENCE_ON_MS
                };

                if now.elapsed_beyond(last_step, interval) {
                    self.lights.set(sequence[step / 2], lighting);
                    self.active = Active::Sequence {
                        step: step + 1,
                        last_step: now,
                    };
                }
                None
            }

            Active::Win {
                step,
                last_step,
                then_sequence,
            } => {
                if step >= WIN_STEPS {
                    if then_sequence {
                        self.start_sequence(now);
                    } else {
                        self.active = Active::None;
                    }
                    return None;
                }

                if now.elapsed_beyond(last_step, WIN_HALF_CYCLE_MS) {
                    self.lights.set_all(step % 2 == 0);
                    self.active = Active::Win {
                        step: step + 1,
                        last_step: now,
                        then_sequence,
                    };
                }
                None
            }

            Active::Lose { started } => {
                if now.elapsed_beyond(started, LOSE_HOLD_MS) {
                    self.lights.set(LOSE_COLOR, false);
                    self.active = Active::None;
                }
                None
            }
        }
    }

    /// Returns which animation is playing.
    pub fn kind(&self) -> AnimationKind {
        match self.active {
            Active::None => AnimationKind::None,
            Active::Sequence { .. } => AnimationKind::Sequence,
            Active::Win { .. } => AnimationKind::Win,
            Active::Lose { .. } => AnimationKind::Lose,
        }
    }

    /// Returns true if nothing is playing.
    pub fn is_idle(&self) -> bool {
        matches!(self.active, Active::None)
    }

    /// Returns the number of steps taken by the running animation.
    ///
    /// The lose animation has no steps and always reports 0.
    pub fn step(&self) -> usize {
        match self.active {
            Active::Sequence { step, .. } | Active::Win { step, .. } => step,
            Active::None | Active::Lose { .. } => 0,
        }
    }

    /// Returns the light board.
    pub fn lights(&self) -> &LightBoard<L> {
        &self.lights
    }
}
