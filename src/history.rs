//! Linear edit history with an index cursor.
//!
//! An append-only-with-truncation sequence of image states. Pushing from
//! a rewound position discards the abandoned "future" — the history is
//! strictly linear, never a tree.

use crate::types::ImageState;

#[derive(Debug, Default)]
pub struct HistoryStore {
    entries: Vec<ImageState>,
    cursor: usize,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)initialize with a first state. The only way to enter a
    /// non-empty history.
    pub fn init(&mut self, first: ImageState) {
        self.entries = vec![first];
        self.cursor = 0;
    }

    /// Append a new state after the cursor, discarding any previously
    /// undone entries beyond it. The cursor moves to the new entry.
    pub fn push(&mut self, next: ImageState) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(next);
        self.cursor = self.entries.len() - 1;
    }

    /// Move the cursor one step back. No-op at the first entry.
    /// Returns whether the cursor moved.
    pub fn step_back(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// The state at the cursor; `None` until initialized.
    pub fn current(&self) -> Option<&ImageState> {
        self.entries.get(self.cursor)
    }

    pub fn can_step_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Clear back to the uninitialized state.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}
