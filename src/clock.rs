//! Clock port — the boundary between the timers and whatever keeps time.
//!
//! ```text
//!   SystemClock / EspClock / EmbassyClock / ManualClock
//!                     │
//!                     ▼
//!             MonotonicClock ──▶ Resolution (Millis | Micros) ──▶ FsmTimer
//! ```
//!
//! Readings are 32-bit tick counts that wrap, like the `millis()` and
//! `micros()` counters found on most microcontroller runtimes.  Consumers
//! must take differences with `wrapping_sub`.

use core::cell::Cell;

/// A monotonically non-decreasing time source with millisecond and
/// microsecond readings.
pub trait MonotonicClock {
    /// Milliseconds since an arbitrary epoch, wrapping at `u32::MAX`.
    fn now_ms(&self) -> u32;

    /// Microseconds since an arbitrary epoch, wrapping at `u32::MAX`.
    fn now_us(&self) -> u32;
}

impl<C: MonotonicClock + ?Sized> MonotonicClock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }

    fn now_us(&self) -> u32 {
        (**self).now_us()
    }
}

// ---------------------------------------------------------------------------
// Resolution markers
// ---------------------------------------------------------------------------

/// Selects which reading of a [`MonotonicClock`] a timer samples.
pub trait Resolution {
    /// Unit suffix used in log output.
    const UNIT: &'static str;

    fn now<C: MonotonicClock + ?Sized>(clock: &C) -> u32;
}

/// Millisecond ticks (`now_ms`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Millis;

impl Resolution for Millis {
    const UNIT: &'static str = "ms";

    fn now<C: MonotonicClock + ?Sized>(clock: &C) -> u32 {
        clock.now_ms()
    }
}

/// Microsecond ticks (`now_us`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Micros;

impl Resolution for Micros {
    const UNIT: &'static str = "us";

    fn now<C: MonotonicClock + ?Sized>(clock: &C) -> u32 {
        clock.now_us()
    }
}

// ---------------------------------------------------------------------------
// Manual clock
// ---------------------------------------------------------------------------

/// A clock that only moves when told to.
///
/// Time is held in microseconds; the millisecond reading is derived from it,
/// so both views stay consistent.  Interior mutability lets a test advance
/// the clock while timers hold a shared reference to it.
#[derive(Debug, Default)]
pub struct ManualClock {
    micros: Cell<u64>,
}

impl ManualClock {
    pub const fn new() -> Self {
        Self {
            micros: Cell::new(0),
        }
    }

    pub fn at_ms(ms: u64) -> Self {
        let clock = Self::new();
        clock.set_ms(ms);
        clock
    }

    pub fn at_us(us: u64) -> Self {
        let clock = Self::new();
        clock.set_us(us);
        clock
    }

    pub fn set_ms(&self, ms: u64) {
        self.micros.set(ms.saturating_mul(1000));
    }

    pub fn set_us(&self, us: u64) {
        self.micros.set(us);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance_us(ms.saturating_mul(1000));
    }

    pub fn advance_us(&self, us: u64) {
        self.micros.set(self.micros.get().wrapping_add(us));
    }
}

impl MonotonicClock for ManualClock {
    fn now_ms(&self) -> u32 {
        (self.micros.get() / 1000) as u32
    }

    fn now_us(&self) -> u32 {
        self.micros.get() as u32
    }
}
