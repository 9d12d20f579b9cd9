//! Runs the game on a desktop terminal.
//!
//! Commands are read from stdin, one JSON object per line, and status records
//! are written to stdout the same way. Light changes go to stderr.
//!
//! ```text
//! cargo run --example host --features std,serde
//! {"action":"start"}
//! {"action":"input","value":"red"}
//! ```

use std::io::{self, BufRead};
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use simon_kernel::{
    CommandMessage, Controller, Game, Light, LightBoard, RandomColors, TimeDuration, TimeInstant,
    TimeSource,
};

/// Main loop period
const POLL_INTERVAL: Duration = Duration::from_millis(5);

#[derive(Debug, Clone, Copy, PartialEq)]
struct HostDuration(Duration);

impl TimeDuration for HostDuration {
    fn as_millis(&self) -> u64 {
        self.0.as_millis() as u64
    }
}

#[derive(Debug, Clone, Copy)]
struct HostInstant(Instant);

impl TimeInstant for HostInstant {
    type Duration = HostDuration;

    fn duration_since(&self, earlier: Self) -> HostDuration {
        HostDuration(self.0.saturating_duration_since(earlier.0))
    }
}

struct HostClock;

impl TimeSource<HostInstant> for HostClock {
    fn now(&self) -> HostInstant {
        HostInstant(Instant::now())
    }
}

/// Prints every switch of one output line.
struct ConsoleLight {
    name: &'static str,
}

impl Light for ConsoleLight {
    fn set(&mut self, on: bool) {
        eprintln!("  {:<6} {}", self.name, if on { "ON" } else { "off" });
    }
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let lights = LightBoard::from_named(
        ["red", "green", "blue", "yellow"].map(|name| (name, ConsoleLight { name })),
    )?;
    let clock = HostClock;
    let mut controller = Controller::new(Game::<_>::new(RandomColors::from_os_rng()), lights, &clock);

    let commands = spawn_stdin_reader();
    eprintln!("Ready. Send {{\"action\":\"start\"}} to play, Ctrl-D to quit.");

    loop {
        match commands.try_recv() {
            Ok(line) if line.trim().is_empty() => {}
            Ok(line) => match serde_json::from_str::<CommandMessage>(&line) {
                Ok(message) => controller.handle_message(&message),
                Err(err) => eprintln!("bad command: {err}"),
            },
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => break,
        }

        controller.poll();

        while let Some(status) = controller.next_status() {
            println!("{}", serde_json::to_string(&status)?);
        }

        thread::sleep(POLL_INTERVAL);
    }

    Ok(())
}
