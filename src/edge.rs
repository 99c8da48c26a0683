//! Rising-edge (false → true) detector.

/// Remembers the previous sample of a boolean input and reports a one-tick
/// pulse when it goes from low to high.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RisingEdge {
    previous: bool,
}

impl RisingEdge {
    pub const fn new() -> Self {
        Self { previous: false }
    }

    /// Sample `input` and return `true` only on a false → true transition.
    /// The sample is stored for the next call.
    pub fn detect(&mut self, input: bool) -> bool {
        let pulse = input && !self.previous;
        self.previous = input;
        pulse
    }

    /// The value stored by the last [`detect`](Self::detect) call.
    pub fn previous(&self) -> bool {
        self.previous
    }
}
