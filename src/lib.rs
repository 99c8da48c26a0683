//! Polled building blocks for microcontroller state machines.
//!
//! Three leaf components, each updated by one call per control-loop tick:
//!
//! ```text
//! ┌─────────────────┐   ┌────────────────────┐   ┌────────────────────┐
//! │  EdgeCounter    │   │  Timer             │   │  FastTimer         │
//! │  inc ↑ / dec ↑  │   │  enable → elapsed  │   │  enable → elapsed  │
//! │  rst (level)    │   │  (milliseconds)    │   │  (microseconds)    │
//! │  ──▶ count, CNT │   │  ──▶ TMR           │   │  ──▶ TMR           │
//! └─────────────────┘   └─────────┬──────────┘   └─────────┬──────────┘
//!                                 │                        │
//!                                 └──── MonotonicClock ────┘
//! ```
//!
//! The timers never read hardware directly: a [`clock::MonotonicClock`] is
//! passed into every call, so host tests drive them with a
//! [`clock::ManualClock`] and firmware hands in one of the
//! [`adapters::time`] clocks.
//!
//! The crate is `no_std` unless the `std` feature (on by default) is enabled.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unused_must_use)]

pub mod adapters;
pub mod clock;
pub mod config;
pub mod counter;
pub mod edge;
pub mod error;
pub mod timer;

pub use clock::{ManualClock, Micros, Millis, MonotonicClock, Resolution};
pub use counter::{CounterState, EdgeCounter};
pub use edge::RisingEdge;
pub use timer::{FastTimer, FsmTimer, Timer, TimerState};
