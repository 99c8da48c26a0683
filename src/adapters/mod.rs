//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter | Implements       | Connects to                          |
//! |---------|------------------|--------------------------------------|
//! | `time`  | `MonotonicClock` | `std::time::Instant`, esp_timer, embassy-time |

pub mod time;
