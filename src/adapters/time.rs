//! Platform clock adapters.
//!
//! Implement [`MonotonicClock`] over a real time source:
//!
//! - **`SystemClock`** (`std`) — `std::time::Instant`, for host-side
//!   simulation and testing.
//! - **`EspClock`** (`espidf`) — wraps `esp_timer_get_time()` from the
//!   ESP-IDF high-resolution timer (microsecond precision, monotonic).
//! - **`EmbassyClock`** (`embassy`) — `embassy_time::Instant`, for targets
//!   running an embassy time driver.
//!
//! Every source counts in 64 bits; readings are truncated to `u32` so they
//! wrap the same way an MCU `millis()`/`micros()` counter does.

#[cfg(any(
    feature = "std",
    feature = "embassy",
    all(feature = "espidf", target_os = "espidf")
))]
use crate::clock::MonotonicClock;

// ---------------------------------------------------------------------------
// Host
// ---------------------------------------------------------------------------

/// Host clock, counting from the moment it was created.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl MonotonicClock for SystemClock {
    fn now_ms(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }

    fn now_us(&self) -> u32 {
        self.start.elapsed().as_micros() as u32
    }
}

// ---------------------------------------------------------------------------
// ESP-IDF
// ---------------------------------------------------------------------------

/// ESP32 clock backed by the esp_timer counter (microseconds since boot).
#[cfg(all(feature = "espidf", target_os = "espidf"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct EspClock;

#[cfg(all(feature = "espidf", target_os = "espidf"))]
impl EspClock {
    pub fn new() -> Self {
        Self
    }

    fn uptime_us() -> u64 {
        // SAFETY: esp_timer_get_time has no preconditions once the esp_timer
        // service is up, which ESP-IDF does before app_main.
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64
    }
}

#[cfg(all(feature = "espidf", target_os = "espidf"))]
impl MonotonicClock for EspClock {
    fn now_ms(&self) -> u32 {
        (Self::uptime_us() / 1000) as u32
    }

    fn now_us(&self) -> u32 {
        Self::uptime_us() as u32
    }
}

// ---------------------------------------------------------------------------
// embassy-time
// ---------------------------------------------------------------------------

/// Clock reading the global embassy time driver.
#[cfg(feature = "embassy")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embassy")]
impl MonotonicClock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        embassy_time::Instant::now().as_millis() as u32
    }

    fn now_us(&self) -> u32 {
        embassy_time::Instant::now().as_micros() as u32
    }
}
