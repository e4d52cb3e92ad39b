//! Selection in plain-text space.

use serde::{Deserialize, Serialize};

/// A selection as reported by the text widget. `start == end` is a caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a collapsed selection (caret with no range)
    pub fn collapsed(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Check if selection is collapsed (start == end)
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Clamp both ends to a text of `len` chars
    pub fn clamped(self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }
}
