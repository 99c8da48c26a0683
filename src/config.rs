//! Block configuration.
//!
//! A [`BlockConfig`] names the presets and durations of the counters and
//! timers a control program uses, so they can be shipped as data (JSON,
//! postcard, NVS blob) instead of constants.  Loading and persisting are the
//! host's job; this module only describes, validates and builds.

use heapless::{String, Vec};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::clock::MonotonicClock;
use crate::counter::EdgeCounter;
use crate::error::{BlockKind, ConfigError, Result};
use crate::timer::{FastTimer, Timer};

/// Maximum entries per block kind.
pub const MAX_BLOCKS: usize = 8;

/// Maximum label length in bytes.
pub const LABEL_LEN: usize = 16;

/// Longest accepted timer duration, in ticks of the timer's resolution.
///
/// Elapsed time is a wrapping 32-bit difference, so a running timer drops
/// its flag again once the clock has wrapped past its start.  Capping the
/// duration at half the range keeps the flag up for at least half a wrap.
pub const MAX_DURATION_TICKS: u32 = u32::MAX / 2;

pub type Label = String<LABEL_LEN>;

// ---------------------------------------------------------------------------
// Per-block parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Count at which `CNT` goes true.
    pub preset: u32,
}

impl CounterConfig {
    pub fn build(&self) -> EdgeCounter {
        EdgeCounter::new(self.preset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimerConfig {
    pub duration_ms: u32,
}

impl TimerConfig {
    pub fn build<C: MonotonicClock + ?Sized>(&self, clock: &C) -> Timer {
        Timer::new(self.duration_ms, clock)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FastTimerConfig {
    pub duration_us: u32,
}

impl FastTimerConfig {
    pub fn build<C: MonotonicClock + ?Sized>(&self, clock: &C) -> FastTimer {
        FastTimer::new(self.duration_us, clock)
    }
}

/// A labelled configuration entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Named<T> {
    pub label: Label,
    pub config: T,
}

// ---------------------------------------------------------------------------
// BlockConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockConfig {
    #[serde(default)]
    pub counters: Vec<Named<CounterConfig>, MAX_BLOCKS>,
    #[serde(default)]
    pub timers: Vec<Named<TimerConfig>, MAX_BLOCKS>,
    #[serde(default)]
    pub fast_timers: Vec<Named<FastTimerConfig>, MAX_BLOCKS>,
}

impl BlockConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_counter(&mut self, label: &str, preset: u32) -> Result<()> {
        push_named(&mut self.counters, BlockKind::Counter, label, CounterConfig { preset })
    }

    pub fn add_timer(&mut self, label: &str, duration_ms: u32) -> Result<()> {
        push_named(&mut self.timers, BlockKind::Timer, label, TimerConfig { duration_ms })
    }

    pub fn add_fast_timer(&mut self, label: &str, duration_us: u32) -> Result<()> {
        push_named(
            &mut self.fast_timers,
            BlockKind::FastTimer,
            label,
            FastTimerConfig { duration_us },
        )
    }

    pub fn counter(&self, label: &str) -> Option<&CounterConfig> {
        find(&self.counters, label)
    }

    pub fn timer(&self, label: &str) -> Option<&TimerConfig> {
        find(&self.timers, label)
    }

    pub fn fast_timer(&self, label: &str) -> Option<&FastTimerConfig> {
        find(&self.fast_timers, label)
    }

    /// Check labels and durations.
    ///
    /// The [`MAX_DURATION_TICKS`] cap is a configuration rule only:
    /// [`Timer::new`] and [`FastTimer::new`] accept any `u32` duration, so
    /// code that builds timers directly is not limited by it.
    ///
    /// Zero presets and durations are accepted: the flag is simply true from
    /// construction.
    pub fn validate(&self) -> Result<()> {
        check_labels(&self.counters, BlockKind::Counter)?;
        check_labels(&self.timers, BlockKind::Timer)?;
        check_labels(&self.fast_timers, BlockKind::FastTimer)?;

        for t in &self.timers {
            check_duration(BlockKind::Timer, t.config.duration_ms)?;
        }
        for t in &self.fast_timers {
            check_duration(BlockKind::FastTimer, t.config.duration_us)?;
        }
        Ok(())
    }
}

// ── Internal ──────────────────────────────────────────────────

fn push_named<T>(
    entries: &mut Vec<Named<T>, MAX_BLOCKS>,
    kind: BlockKind,
    label: &str,
    config: T,
) -> Result<()> {
    let mut name = Label::new();
    if name.push_str(label).is_err() {
        warn!("config: {kind} label '{label}' longer than {LABEL_LEN} bytes");
        return Err(ConfigError::LabelTooLong(kind).into());
    }
    if entries.push(Named { label: name, config }).is_err() {
        warn!("config: more than {MAX_BLOCKS} {kind} entries");
        return Err(ConfigError::TooManyBlocks(kind).into());
    }
    Ok(())
}

fn find<'a, T>(entries: &'a [Named<T>], label: &str) -> Option<&'a T> {
    entries
        .iter()
        .find(|e| e.label.as_str() == label)
        .map(|e| &e.config)
}

fn check_labels<T>(entries: &[Named<T>], kind: BlockKind) -> Result<()> {
    for (i, entry) in entries.iter().enumerate() {
        if entry.label.is_empty() {
            warn!("config: {kind} #{i} has an empty label");
            return Err(ConfigError::EmptyLabel(kind).into());
        }
        if entries[..i].iter().any(|e| e.label == entry.label) {
            warn!("config: duplicate {kind} label '{}'", entry.label);
            return Err(ConfigError::DuplicateLabel(kind).into());
        }
    }
    Ok(())
}

fn check_duration(kind: BlockKind, ticks: u32) -> Result<()> {
    if ticks > MAX_DURATION_TICKS {
        warn!("config: {kind} duration {ticks} above {MAX_DURATION_TICKS}");
        return Err(ConfigError::DurationTooLong { kind, ticks }.into());
    }
    Ok(())
}
