#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Game`**: The sequence engine. Grows the color sequence and validates answers
//! - **`Animator`**: Plays the sequence, win and lose animations without blocking
//! - **`Controller`**: Owns everything, gates commands during animations and publishes status
//! - **`Light`**: Trait to implement for each of the four output lines
//! - **`LightBoard`**: The four lines, one per `Color`, validated once at startup
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`ColorSource`**: Where new sequence colors come from (`RandomColors` by default)
//! - **`CommandMessage`** / **`Status`**: What the transport delivers and publishes
//!
//! The kernel never sleeps. Call `Controller::poll` from the main loop as often
//! as you like and hand every received message to `Controller::handle_message`.

#[macro_use]
mod fmt;

pub mod time;
pub mod color;
pub mod game;
pub mod lights;
pub mod animation;
pub mod command;
pub mod status;
pub mod controller;

pub use animation::{AnimationEvent, AnimationKind, Animator};
pub use color::{Color, ColorSource, RandomColors};
pub use command::{Command, CommandMessage};
pub use controller::Controller;
pub use game::{Game, GameError, GameState, Verdict};
pub use lights::{BoardError, Light, LightBoard};
pub use status::{Status, StatusState};
pub use time::{TimeDuration, TimeInstant, TimeSource};
