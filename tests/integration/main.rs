//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that drives one block through the public
//! API, with a [`fsmkit::ManualClock`] standing in for the MCU tick counters.
//! All tests run on the host (x86_64) with no real hardware required.

mod counter_tests;
mod timer_tests;
