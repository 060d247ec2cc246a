use std::time::Duration;

/// A single timed entry read from an SRT file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    pub(crate) sequence: usize,
    pub(crate) start: Duration,
    // Parsed for validation only, never rendered.
    pub(crate) end: Duration,
    pub(crate) text: String,
}
