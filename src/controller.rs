//! Orchestration of game, animations and status notifications.
//!
//! Provides [`Controller`], the single owner of all runtime state. The
//! firmware's main loop calls [`Controller::poll`] on every iteration and the
//! transport calls [`Controller::handle_message`] whenever a command arrives.
//! Status records queue up in a small outbox that the transport drains with
//! [`Controller::next_status`].

use crate::animation::{AnimationEvent, AnimationKind, Animator};
use crate::color::ColorSource;
use crate::command::{Command, CommandMessage};
use crate::game::{DEFAULT_CAPACITY, Game, GameState, Verdict};
use crate::lights::{Light, LightBoard};
use crate::status::Status;
use crate::time::{TimeInstant, TimeSource};
use heapless::Deque;

/// How long a finished game is shown before returning to idle, in milliseconds.
pub const GAME_OVER_TIMEOUT_MS: u64 = 3000;

/// Number of status records held for the transport.
pub const OUTBOX_CAPACITY: usize = 8;

/// Runs a Simon game on four output lines.
///
/// Commands arriving while an animation plays are dropped, not queued.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `L` - Output line type
/// * `C` - Source of new sequence colors
/// * `N` - Maximum sequence length
pub struct Controller<'t, I, T, L, C, const N: usize = DEFAULT_CAPACITY>
where
    I: TimeInstant,
    T: TimeSource<I>,
    L: Light,
    C: ColorSource,
{
    game: Game<C, N>,
    animator: Animator<I, L>,
    time_source: &'t T,
    last_published: Option<GameState>,
    game_over_since: Option<I>,
    outbox: Deque<Status, OUTBOX_CAPACITY>,
}

impl<'t, I, T, L, C, const N: usize> Controller<'t, I, T, L, C, N>
where
    I: TimeInstant,
    T: TimeSource<I>,
    L: Light,
    C: ColorSource,
{
    /// Creates a controller. Nothing is published until the first poll.
    pub fn new(game: Game<C, N>, lights: LightBoard<L>, time_source: &'t T) -> Self {
        Self {
            game,
            animator: Animator::new(lights),
            time_source,
            last_published: None,
            game_over_since: None,
            outbox: Deque::new(),
        }
    }

    /// Runs one control-loop iteration.
    ///
    /// Publishes a status if the game state changed since the last one,
    /// handles the game-over timeout, then advances the running animation.
    /// Never blocks.
    pub fn poll(&mut self) {
        let now = self.time_source.now();
        self.sync_game(now);
        self.service_animation(now);
    }

    /// Handles a command message from the transport.
    ///
    /// Messages without a recognized command are ignored.
    pub fn handle_message(&mut self, message: &CommandMessage<'_>) {
        match Command::parse(message) {
            Some(command) => self.handle_command(command),
            None => trace!("ignoring message without a command"),
        }
    }

    /// Handles a parsed command.
    ///
    /// Dropped while an animation plays. `Start` is only honored when idle
    /// and `Input` only while playing.
    pub fn handle_command(&mut self, command: Command) {
        if !self.animator.is_idle() {
            debug!("animation running, dropping {}", command);
            return;
        }

        let now = self.time_source.now();
        match (command, self.game.state()) {
            (Command::Start, GameState::Idle) => {
                self.game.start_game();
                info!("game started");
                self.begin_sequence(now);
            }
            (Command::Input(answer), GameState::Playing) => {
                let verdict = match answer {
                    Some(color) => self.game.validate(color),
                    None => self.game.reject(),
                };
                debug!("answer {} -> {}", answer, verdict);
                self.apply_verdict(verdict, now);
            }
            (command, state) => {
                trace!("ignoring {} in state {}", command, state);
            }
        }
    }

    fn apply_verdict(&mut self, verdict: Verdict, now: I) {
        match verdict {
            Verdict::Correct => {}
            Verdict::RoundComplete => match self.game.next_round().map(|sequence| sequence.len()) {
                Ok(round) => {
                    info!("round {} complete", round - 1);
                    self.animator.start_win_then_sequence(now);
                    // Covers the flourish as well as the playback.
                    self.push_status(Status::displaying_pattern());
                }
                Err(err) => {
                    // The round stays complete; the next answer ends the game.
                    warn!("{}", err);
                    self.animator.start_win(now);
                }
            },
            Verdict::Wrong => {
                info!("game over with score {}", self.game.score());
                self.animator.start_lose(now);
            }
        }
    }

    fn begin_sequence(&mut self, now: I) {
        self.animator.start_sequence(now);
        self.push_status(Status::displaying_pattern());
    }

    fn sync_game(&mut self, now: I) {
        let state = self.game.state();

        if self.last_published != Some(state) {
            self.publish_status();
        }

        if state != GameState::GameOver {
            self.game_over_since = None;
            return;
        }

        let since = *self.game_over_since.get_or_insert(now);
        if now.elapsed_beyond(since, GAME_OVER_TIMEOUT_MS) {
            info!("game over timeout, back to idle");
            self.game.reset_to_idle();
            self.game_over_since = None;
        }
    }

    fn service_animation(&mut self, now: I) {
        if let Some(AnimationEvent::SequenceFinished) =
            self.animator.service(now, self.game.sequence())
        {
            self.publish_status();
        }
    }

    /// Queues the current game status and records it as published.
    ///
    /// Call this after the transport (re)connects so a fresh observer learns
    /// the current state.
    pub fn publish_status(&mut self) {
        let state = self.game.state();
        self.push_status(Status::game(state, self.game.score()));
        self.last_published = Some(state);
    }

    fn push_status(&mut self, status: Status) {
        info!("status {}", status);
        if self.outbox.is_full() {
            // Keep the newest records when the transport falls behind.
            let _ = self.outbox.pop_front();
        }
        let _ = self.outbox.push_back(status);
    }

    /// Takes the oldest queued status record.
    pub fn next_status(&mut self) -> Option<Status> {
        self.outbox.pop_front()
    }

    /// Returns the number of queued status records.
    pub fn pending_statuses(&self) -> usize {
        self.outbox.len()
    }

    /// Returns the game.
    pub fn game(&self) -> &Game<C, N> {
        &self.game
    }

    /// Returns which animation is playing.
    pub fn animation(&self) -> AnimationKind {
        self.animator.kind()
    }

    /// Returns the animator.
    pub fn animator(&self) -> &Animator<I, L> {
        &self.animator
    }

    /// Returns the light board.
    pub fn lights(&self) -> &LightBoard<L> {
        self.animator.lights()
    }

    /// Returns the game state most recently published.
    pub fn last_published(&self) -> Option<GameState> {
        self.last_published
    }
}
