//! Module for driving a game at a fixed tick rate.
//!
//! A [`GameLoop`] owns the pacing only: each tick it polls the keyboard for
//! the remainder of the frame budget, hands the result to the caller's tick
//! closure, and sleeps off whatever budget is left. Updating animations and
//! rendering are the closure's business.

use std::io;
use std::ops::ControlFlow;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{event, terminal};

use crate::event::Input;

/// A fixed-rate tick loop for terminal games.
pub struct GameLoop {
    budget: Duration,
}

impl GameLoop {
    /// Creates a loop that targets `fps` ticks per second.
    ///
    /// # Panics
    ///
    /// Panics if `fps` is zero.
    pub fn new(fps: u32) -> Self {
        assert!(fps > 0, "tick rate must be positive");
        Self {
            budget: Duration::from_secs(1) / fps,
        }
    }

    /// Runs `tick` once per frame until it returns [`ControlFlow::Break`].
    ///
    /// The terminal is put into raw mode for the duration of the loop and
    /// restored afterwards, also when `tick` fails or panics. At most one
    /// key event is delivered per tick; ticks with no pending input receive
    /// `None`.
    pub fn run<F>(&self, mut tick: F) -> io::Result<()>
    where
        F: FnMut(Option<Input>) -> io::Result<ControlFlow<()>>,
    {
        let _raw = RawModeGuard::enable()?;
        log::debug!("game loop started, frame budget {:?}", self.budget);
        self.run_inner(&mut tick)
    }

    fn run_inner<F>(&self, tick: &mut F) -> io::Result<()>
    where
        F: FnMut(Option<Input>) -> io::Result<ControlFlow<()>>,
    {
        loop {
            let deadline = Instant::now() + self.budget;
            let input = poll_input(deadline)?;
            if let ControlFlow::Break(()) = tick(input)? {
                log::debug!("game loop stopped by tick closure");
                return Ok(());
            }
            let now = Instant::now();
            if now < deadline {
                thread::sleep(deadline - now);
            }
        }
    }
}

/// Keeps the terminal in raw mode while alive. Restoration happens on drop,
/// so it also runs when a tick errors out or unwinds; a tick error is never
/// displaced by a restoration failure.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            log::warn!("failed to restore terminal mode: {err}");
        }
    }
}

/// Polls for at most one input, waiting no longer than `deadline`.
fn poll_input(deadline: Instant) -> io::Result<Option<Input>> {
    let timeout = deadline.saturating_duration_since(Instant::now());
    if event::poll(timeout)? {
        Ok(Input::from_event(event::read()?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_divides_one_second() {
        assert_eq!(GameLoop::new(50).budget, Duration::from_millis(20));
        assert_eq!(GameLoop::new(5).budget, Duration::from_millis(200));
    }

    #[test]
    #[should_panic(expected = "tick rate must be positive")]
    fn zero_tick_rate_is_refused() {
        GameLoop::new(0);
    }
}
