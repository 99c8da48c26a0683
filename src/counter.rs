//! Rising-edge up/down counter.
//!
//! Behaves like a PLC up/down counter: each false → true transition on the
//! increment input adds one, each one on the decrement input subtracts one,
//! and a held reset input pins the count at zero.
//!
//! | From           | Condition                 | To             |
//! |----------------|---------------------------|----------------|
//! | `Waiting`      | reset                     | `Resetting`    |
//! | `Waiting`      | inc↑, no dec↑             | `CountingUp`   |
//! | `Waiting`      | dec↑, no inc↑             | `CountingDown` |
//! | `Waiting`      | otherwise                 | `Waiting`      |
//! | `CountingUp`   | reset / otherwise         | `Resetting` / `Waiting` |
//! | `CountingDown` | reset / otherwise         | `Resetting` / `Waiting` |
//! | `Resetting`    | reset / otherwise         | `Resetting` / `Waiting` |
//!
//! `CountingUp` and `CountingDown` last exactly one tick.  Reset wins over
//! any pulse arriving in the same tick, and simultaneous increment and
//! decrement pulses cancel: the counter stays in `Waiting`.
//!
//! ## Update order
//!
//! 1. Edge detection on both pulse inputs.
//! 2. Transition from the current state.
//! 3. Apply the new state to the count (up, down with a floor at 0, or clear).
//! 4. Refresh the `CNT` flag.

use log::trace;

use crate::edge::RisingEdge;

/// Phase of the counter's state machine.  Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterState {
    #[default]
    Waiting,
    CountingUp,
    CountingDown,
    Resetting,
}

/// Edge-triggered up/down counter with a preset threshold.
#[derive(Debug, Clone)]
pub struct EdgeCounter {
    preset: u32,
    count: u32,
    cnt: bool,
    state: CounterState,
    up: RisingEdge,
    down: RisingEdge,
}

impl EdgeCounter {
    /// Create a counter at zero, waiting, with both edge detectors low.
    ///
    /// A preset of 0 reports `CNT` from construction on.
    pub fn new(preset: u32) -> Self {
        Self {
            preset,
            count: 0,
            cnt: preset == 0,
            state: CounterState::Waiting,
            up: RisingEdge::new(),
            down: RisingEdge::new(),
        }
    }

    /// Run one tick of the counter and return the state it ends in.
    pub fn update(&mut self, increment: bool, decrement: bool, reset: bool) -> CounterState {
        let up_pulse = self.up.detect(increment);
        let down_pulse = self.down.detect(decrement);

        let next = Self::next_state(self.state, up_pulse, down_pulse, reset);
        if next != self.state {
            trace!("counter: {:?} -> {:?}", self.state, next);
        }
        self.state = next;

        match next {
            CounterState::CountingUp => self.count = self.count.saturating_add(1),
            CounterState::CountingDown => self.count = self.count.saturating_sub(1),
            CounterState::Resetting => self.count = 0,
            CounterState::Waiting => {}
        }
        self.cnt = self.count >= self.preset;

        next
    }

    fn next_state(current: CounterState, up: bool, down: bool, reset: bool) -> CounterState {
        match current {
            CounterState::Waiting => {
                if reset {
                    CounterState::Resetting
                } else if up && !down {
                    CounterState::CountingUp
                } else if down && !up {
                    CounterState::CountingDown
                } else {
                    CounterState::Waiting
                }
            }
            CounterState::CountingUp | CounterState::CountingDown | CounterState::Resetting => {
                if reset {
                    CounterState::Resetting
                } else {
                    CounterState::Waiting
                }
            }
        }
    }

    /// Current accumulated count.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Threshold the count is compared against.
    pub fn preset(&self) -> u32 {
        self.preset
    }

    /// `CNT`: true when `count >= preset` as of the last update.
    pub fn cnt(&self) -> bool {
        self.cnt
    }

    /// Alias for [`cnt`](Self::cnt).
    pub fn threshold_reached(&self) -> bool {
        self.cnt
    }

    pub fn state(&self) -> CounterState {
        self.state
    }
}
