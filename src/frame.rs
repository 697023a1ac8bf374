// SPDX: CC0-1.0

//! Frame loop driven by a tick source.
//!
//! The loop is cooperative: [`FrameLoop::start`] only arms the callback, and
//! it runs once per tick dispatched by [`FrameLoop::tick`] or
//! [`FrameLoop::run`]. Nothing runs concurrently with a callback.

use crate::Number;
use std::{
    cell::Cell,
    rc::Rc,
    thread,
    time::{Duration, Instant},
};
use tracing::{debug, trace, warn};

pub trait TickSource {
    /// Timestamp in milliseconds of the next display refresh, or `None` if no
    /// refresh is coming. Timestamps strictly increase.
    fn next_tick(&mut self) -> Option<Number>;
}

/// Deterministic ticks every `step` milliseconds, optionally only `frames` of
/// them.
#[derive(Clone, Debug)]
pub struct FixedStep {
    now: Number,
    step: Number,
    remaining: Option<u64>,
}

impl FixedStep {
    /// Smallest step accepted, same as the [`Realtime`] floor of 1µs.
    pub const MIN_STEP: Number = 1e-3;

    /// Steps below [`Self::MIN_STEP`], including NaN, are raised to it.
    pub fn new(step: Number) -> Self {
        Self {
            now: 0.0,
            step: Self::checked_step(step),
            remaining: None,
        }
    }

    pub fn limited(step: Number, frames: u64) -> Self {
        Self {
            remaining: Some(frames),
            ..Self::new(step)
        }
    }

    fn checked_step(step: Number) -> Number {
        if step >= Self::MIN_STEP {
            step
        } else {
            warn!(step, min = Self::MIN_STEP, "frame step too small, raising it");
            Self::MIN_STEP
        }
    }
}

impl TickSource for FixedStep {
    fn next_tick(&mut self) -> Option<Number> {
        if let Some(ref mut remaining) = self.remaining {
            *remaining = remaining.checked_sub(1)?;
        }
        self.now += self.step;
        Some(self.now)
    }
}

/// Wall-clock ticks, sleeping the current thread until each frame is due.
#[derive(Clone, Debug)]
pub struct Realtime {
    start: Instant,
    frame: Duration,
    due: Instant,
}

impl Realtime {
    pub fn new(frame: Duration) -> Self {
        let frame = frame.max(Duration::from_micros(1));
        let start = Instant::now();
        Self {
            start,
            frame,
            due: start + frame,
        }
    }

    /// ~60 Hz
    pub fn display() -> Self {
        Self::new(Duration::from_micros(16_667))
    }
}

impl TickSource for Realtime {
    fn next_tick(&mut self) -> Option<Number> {
        let now = Instant::now();
        if now < self.due {
            thread::sleep(self.due - now);
        }
        // skip frames we slept through rather than bursting to catch up
        let now = Instant::now().max(self.due);
        while self.due <= now {
            self.due += self.frame;
        }
        Some(now.duration_since(self.start).as_secs_f64() * 1000.0)
    }
}

/// What a frame callback wants to happen next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

impl From<()> for Flow {
    fn from(_: ()) -> Self {
        Self::Continue
    }
}

impl From<bool> for Flow {
    /// `false` stops.
    fn from(keep_going: bool) -> Self {
        if keep_going {
            Self::Continue
        } else {
            Self::Stop
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// the callback returned [`Flow::Stop`]
    Stopped,
    Cancelled,
}

/// Cancels the loop it came from. Cloning it is fine; cancelling is
/// idempotent and never interrupts a callback that is already running.
#[derive(Clone, Debug)]
pub struct CancelHandle {
    state: Rc<Cell<LoopState>>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        if self.state.get() == LoopState::Running {
            debug!("frame loop cancelled");
            self.state.set(LoopState::Cancelled);
        }
    }

    pub fn state(&self) -> LoopState {
        self.state.get()
    }
}

type Callback<'a> = Box<dyn FnMut(Number) -> Flow + 'a>;

pub struct FrameLoop<'a, T> {
    source: T,
    armed: Option<(Callback<'a>, Rc<Cell<LoopState>>)>,
    last: Option<Number>,
    ticks: u64,
}

impl<'a, T: TickSource> FrameLoop<'a, T> {
    pub const fn new(source: T) -> Self {
        Self {
            source,
            armed: None,
            last: None,
            ticks: 0,
        }
    }

    /// Arms `callback` to run on every following tick until it returns
    /// [`Flow::Stop`] or the returned handle is cancelled. Any loop armed
    /// earlier is cancelled first. The callback never runs during this call.
    pub fn start<F, R>(&mut self, mut callback: F) -> CancelHandle
    where
        F: FnMut(Number) -> R + 'a,
        R: Into<Flow>,
    {
        if let Some((_, old)) = self.armed.take() {
            CancelHandle { state: old }.cancel();
        }
        let state = Rc::new(Cell::new(LoopState::Running));
        let boxed: Callback<'a> = Box::new(move |t: Number| -> Flow { callback(t).into() });
        self.armed = Some((boxed, Rc::clone(&state)));
        debug!("frame loop started");
        CancelHandle { state }
    }

    /// Dispatches at most one tick. Returns whether the callback ran.
    pub fn tick(&mut self) -> bool {
        let Some((callback, state)) = self.armed.as_mut() else {
            return false;
        };
        if state.get() != LoopState::Running {
            self.armed = None;
            return false;
        }
        let Some(now) = self.source.next_tick() else {
            return false;
        };
        debug_assert!(self.last.map_or(true, |last| now > last));
        self.last = Some(now);
        self.ticks += 1;
        trace!(now, tick = self.ticks, "frame");

        if callback(now) == Flow::Stop {
            if state.get() == LoopState::Running {
                state.set(LoopState::Stopped);
            }
            debug!(ticks = self.ticks, "frame loop stopped itself");
        }
        if state.get() != LoopState::Running {
            self.armed = None;
        }
        true
    }

    /// Dispatches ticks until the loop stops, is cancelled, or the source runs
    /// dry. Returns how many ran.
    pub fn run(&mut self) -> u64 {
        let mut n = 0;
        while self.tick() {
            n += 1;
        }
        n
    }

    pub fn is_active(&self) -> bool {
        self.armed
            .as_ref()
            .is_some_and(|(_, state)| state.get() == LoopState::Running)
    }

    /// Ticks dispatched over the life of this loop.
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// One linear-interpolation step from `current` toward `target`.
#[inline]
pub fn ease_step(current: Number, target: Number, factor: Number) -> Number {
    current + (target - current) * factor
}

/// `v` with its magnitude reduced by `friction`, stopping at zero.
#[inline]
pub fn decay_velocity(v: Number, friction: Number) -> Number {
    (v.abs() - friction).max(0.0).copysign(v)
}
