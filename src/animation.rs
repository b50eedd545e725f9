//! Module for sequencing [`Animation`] frames, i.e. resolving elapsed
//! wall-clock time to the image that should currently be displayed.
//!
//! An [`Animation`] owns an ordered list of image handles, each with its own
//! display duration in milliseconds. The owning game loop calls
//! [`Animation::update`] once per tick, and the renderer asks for
//! [`Animation::current_image`] afterwards. Playback loops indefinitely and
//! tolerates irregular tick intervals.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use smallvec::SmallVec;
use thiserror::Error;

/// Stack allocation size for the frame list. Most animations are short.
const FRAME_STACK_SIZE: usize = 8;

/// Errors reported by [`Animation`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnimationError {
    /// A frame was pushed with a negative display duration. This is a
    /// contract violation on the caller's side, not a runtime condition.
    #[error("frame duration must be non-negative, got {0} ms")]
    NegativeDuration(i64),
}

/// One still image together with its position on the cycle's time axis.
struct Frame<I> {
    image: I,
    /// Running total of all frame durations up to and including this one,
    /// in milliseconds from the start of the cycle.
    end_ms: u64,
}

/// Playback state. Kept behind a single mutex so that an update thread and a
/// render thread can share one sequencer without coordinating.
struct State<I> {
    frames: SmallVec<[Frame<I>; FRAME_STACK_SIZE]>,
    /// Index of the active frame. Always valid while `frames` is non-empty.
    current: usize,
    /// Position within the current cycle, in `[0, total_ms)` once cycling.
    elapsed_ms: u64,
    /// Sum of all frame durations; equals the last frame's `end_ms`.
    total_ms: u64,
    /// Timestamp of the previous [`Animation::update`] call.
    last_sample: Instant,
}

impl<I> State<I> {
    /// Advances playback by `delta_ms` milliseconds.
    fn advance(&mut self, delta_ms: u64) {
        // An empty or single-frame sequence never moves its index, and a
        // sequence whose frames are all zero-duration has no time axis to
        // move along.
        if self.frames.len() <= 1 || self.total_ms == 0 {
            return;
        }
        self.elapsed_ms += delta_ms;
        if self.elapsed_ms >= self.total_ms {
            // The modulo collapses any number of whole-cycle wraps, so the
            // walk below starts from index 0 at most one cycle behind.
            self.elapsed_ms %= self.total_ms;
            self.current = 0;
            log::trace!("cycle wrapped, {} ms into the next pass", self.elapsed_ms);
        }
        // Terminates before running off the end: the last frame's end_ms is
        // total_ms, which is strictly greater than elapsed_ms here.
        while self.elapsed_ms > self.frames[self.current].end_ms {
            self.current += 1;
        }
    }
}

/// A looping sequence of image handles with per-frame display durations.
///
/// The sequencer stores the handles it is given and clones them back out on
/// query; it never copies, frees or otherwise touches pixel data. Handles are
/// therefore expected to be cheap to clone (a reference, an `Arc`, a texture
/// id, a `&'static str`).
///
/// All public operations serialize through one internal lock, so an
/// `Animation` can be driven from one thread and rendered from another.
pub struct Animation<I> {
    inner: Mutex<State<I>>,
}

impl<I> Animation<I> {
    /// Creates a new, empty animation.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(State {
                frames: SmallVec::new(),
                current: 0,
                elapsed_ms: 0,
                total_ms: 0,
                last_sample: Instant::now(),
            }),
        }
    }

    /// Appends an image to the animation with the given display duration in
    /// milliseconds.
    ///
    /// A zero duration is legal and produces a frame that playback skips
    /// over. A negative duration fails with
    /// [`AnimationError::NegativeDuration`] and leaves the animation
    /// untouched. Appending does not reset the play cursor, but it does move
    /// the wraparound boundary of the cycle currently in progress.
    pub fn push_frame(&self, image: I, duration_ms: i64) -> Result<(), AnimationError> {
        if duration_ms < 0 {
            return Err(AnimationError::NegativeDuration(duration_ms));
        }
        let mut state = self.lock();
        state.total_ms += duration_ms as u64;
        let end_ms = state.total_ms;
        state.frames.push(Frame { image, end_ms });
        Ok(())
    }

    /// Starts this animation over from the beginning.
    ///
    /// The play cursor returns to the first frame and the sample clock is
    /// resynchronized to now, so the next [`Animation::update`] measures its
    /// delta from this call rather than jumping over the paused interval.
    /// Idempotent; the frame list is untouched.
    pub fn start(&self) {
        let mut state = self.lock();
        state.elapsed_ms = 0;
        state.current = 0;
        state.last_sample = Instant::now();
    }

    /// Updates this animation's current frame, if necessary.
    ///
    /// Reads the ambient monotonic clock and consumes the whole milliseconds
    /// elapsed since the previous call; the sub-millisecond remainder is left
    /// on the clock, so repeated rapid calls lose no time to quantization.
    pub fn update(&self) {
        let mut state = self.lock();
        let delta_ms = state.last_sample.elapsed().as_millis() as u64;
        state.last_sample += Duration::from_millis(delta_ms);
        state.advance(delta_ms);
    }

    /// Returns the number of frames currently loaded.
    pub fn frame_count(&self) -> usize {
        self.lock().frames.len()
    }

    /// Returns the sum of all frame durations, in milliseconds. One full
    /// cycle of playback takes exactly this long.
    pub fn total_duration(&self) -> u64 {
        self.lock().total_ms
    }

    fn lock(&self) -> MutexGuard<'_, State<I>> {
        // No operation can panic while holding the lock, so a poisoned state
        // is still consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<I: Clone> Animation<I> {
    /// Returns a clone of the active frame's image handle, or `None` if the
    /// animation has no frames. Animations legitimately start empty, so this
    /// is an ordinary state, not an error.
    pub fn current_image(&self) -> Option<I> {
        let state = self.lock();
        state.frames.get(state.current).map(|f| f.image.clone())
    }
}

impl<I> Default for Animation<I> {
    fn default() -> Self {
        Self::new()
    }
}
