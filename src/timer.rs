//! On-delay timers: `Timer` (milliseconds) and `FastTimer` (microseconds).
//!
//! Both are [`FsmTimer`] instantiated with a [`Resolution`] marker, so the
//! state machine lives in one place:
//!
//! | From      | `enable` | To        | Effect                          |
//! |-----------|----------|-----------|---------------------------------|
//! | `Waiting` | false    | `Waiting` | start := now, elapsed = 0       |
//! | `Waiting` | true     | `Timing`  | elapsed = now - start           |
//! | `Timing`  | true     | `Timing`  | elapsed = now - start           |
//! | `Timing`  | false    | `Waiting` | start := now, elapsed = 0       |
//!
//! `TMR` is `elapsed >= duration` after every update.  Disabling restarts the
//! measurement; there is no pause/resume.
//!
//! The start timestamp is taken at construction, not on the enabling tick, so
//! a timer enabled on its very first update counts from when it was built.

use core::marker::PhantomData;

use log::{debug, trace};

use crate::clock::{Micros, Millis, MonotonicClock, Resolution};

/// Millisecond on-delay timer.
pub type Timer = FsmTimer<Millis>;

/// Microsecond on-delay timer for short durations.
pub type FastTimer = FsmTimer<Micros>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    #[default]
    Waiting,
    Timing,
}

/// On-delay timer measured in ticks of resolution `R`.
#[derive(Debug, Clone)]
pub struct FsmTimer<R: Resolution> {
    duration: u32,
    elapsed: u32,
    tmr: bool,
    state: TimerState,
    start: u32,
    _resolution: PhantomData<R>,
}

impl<R: Resolution> FsmTimer<R> {
    /// Create a waiting timer whose start timestamp is the clock's current
    /// reading.
    pub fn new<C: MonotonicClock + ?Sized>(duration: u32, clock: &C) -> Self {
        Self::starting_at(duration, R::now(clock))
    }

    /// Create a waiting timer with an explicit start timestamp.
    ///
    /// A duration of 0 reports `TMR` from construction on.
    pub fn starting_at(duration: u32, now: u32) -> Self {
        Self {
            duration,
            elapsed: 0,
            tmr: duration == 0,
            state: TimerState::Waiting,
            start: now,
            _resolution: PhantomData,
        }
    }

    /// Run one tick, sampling `clock`.  Returns `TMR`.
    pub fn update<C: MonotonicClock + ?Sized>(&mut self, enable: bool, clock: &C) -> bool {
        self.update_at(enable, R::now(clock))
    }

    /// Run one tick against a timestamp the caller already sampled.
    pub fn update_at(&mut self, enable: bool, now: u32) -> bool {
        let next = if enable {
            TimerState::Timing
        } else {
            TimerState::Waiting
        };
        if next != self.state {
            trace!("timer({}{}): {:?} -> {:?}", self.duration, R::UNIT, self.state, next);
        }
        self.state = next;

        if next == TimerState::Waiting {
            self.start = now;
        }
        self.elapsed = now.wrapping_sub(self.start);

        let was_done = self.tmr;
        self.tmr = self.elapsed >= self.duration;
        if self.tmr && !was_done && next == TimerState::Timing {
            debug!(
                "timer({}{}): done after {}{}",
                self.duration,
                R::UNIT,
                self.elapsed,
                R::UNIT
            );
        }

        self.tmr
    }

    /// Ticks since timing last started; 0 while waiting.
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// `TMR`: true when `elapsed >= duration` as of the last update.
    pub fn tmr(&self) -> bool {
        self.tmr
    }

    /// Alias for [`tmr`](Self::tmr).
    pub fn threshold_reached(&self) -> bool {
        self.tmr
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_timing(&self) -> bool {
        self.state == TimerState::Timing
    }
}
