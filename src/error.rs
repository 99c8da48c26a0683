//! Error types for the configuration surface.
//!
//! The blocks themselves never fail: every input combination is valid and
//! every update is total.  Only [`crate::config::BlockConfig::validate`] can
//! reject something, so this module is small.  All variants are `Copy` and
//! carry `&'static str` labels where needed, keeping them allocation-free.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A block configuration was rejected.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Which family of block a configuration entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Counter,
    Timer,
    FastTimer,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Counter => write!(f, "counter"),
            Self::Timer => write!(f, "timer"),
            Self::FastTimer => write!(f, "fast timer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// An entry has an empty label.
    EmptyLabel(BlockKind),
    /// Two entries of the same kind share a label.
    DuplicateLabel(BlockKind),
    /// A label does not fit the fixed-capacity label buffer.
    LabelTooLong(BlockKind),
    /// No room left for another entry of this kind.
    TooManyBlocks(BlockKind),
    /// A timer duration leaves less than half a clock wrap for the flag to be
    /// observed.
    DurationTooLong { kind: BlockKind, ticks: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLabel(kind) => write!(f, "{kind} with empty label"),
            Self::DuplicateLabel(kind) => write!(f, "duplicate {kind} label"),
            Self::LabelTooLong(kind) => write!(f, "{kind} label too long"),
            Self::TooManyBlocks(kind) => write!(f, "too many {kind} entries"),
            Self::DurationTooLong { kind, ticks } => {
                write!(f, "{kind} duration of {ticks} ticks exceeds half the clock range")
            }
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
