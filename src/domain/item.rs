//! Item domain model
//!
//! An item is a single todo with a title and a done flag. Items are shared
//! between the caller and any list holding them, so the flag lives in a
//! `Cell` and is flipped through `&self`.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;

/// A single todo item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Human-readable title, fixed at construction
    title: String,

    /// Completion flag
    #[serde(default)]
    done: Cell<bool>,
}

impl Item {
    /// Marker rendered for a done item
    pub const DONE_MARKER: char = 'X';

    /// Marker rendered for an item that is not done yet
    pub const UNDONE_MARKER: char = ' ';

    /// Creates a new item that is not done
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: Cell::new(false),
        }
    }

    pub fn mark_done(&self) {
        self.done.set(true);
    }

    pub fn mark_undone(&self) {
        self.done.set(false);
    }

    pub fn is_done(&self) -> bool {
        self.done.get()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the marker for the current state
    pub fn marker(&self) -> char {
        if self.is_done() {
            Self::DONE_MARKER
        } else {
            Self::UNDONE_MARKER
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.marker(), self.title)
    }
}
