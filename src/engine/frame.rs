//! Render frames and transient highlights
//!
//! A [`RenderFrame`] is recomputed from a widget's buffer after every
//! mutation; it is never patched in place. Highlights are carried as a set of
//! buffer positions and are dropped with the frame.

use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// How the canvas should lay out a frame's cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameLayout {
    /// Boxes in a row, each labelled with its index
    IndexedCells,
    /// Nodes joined by arrows, terminated by a NULL marker
    Chain,
    /// Boxes stacked bottom-to-top; the last element is drawn on top
    Column,
    /// Boxes in insertion order from front to back
    Row,
    /// Vertical bars whose height follows the value
    Bars,
}

/// Visual representation of a buffer plus highlighted positions
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub layout: FrameLayout,
    pub cells: Vec<i64>,
    pub highlights: FxHashSet<usize>,
}

impl RenderFrame {
    pub fn new<I: IntoIterator<Item = i64>>(layout: FrameLayout, cells: I) -> Self {
        RenderFrame {
            layout,
            cells: cells.into_iter().collect(),
            highlights: FxHashSet::default(),
        }
    }

    /// Attach highlights, silently dropping positions past the end of the buffer
    pub fn with_highlights<I: IntoIterator<Item = usize>>(mut self, indices: I) -> Self {
        let len = self.cells.len();
        self.highlights
            .extend(indices.into_iter().filter(|&idx| idx < len));
        self
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlights.contains(&index)
    }

    /// Highlighted positions in ascending order
    pub fn highlighted(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.highlights.iter().copied().collect();
        indices.sort_unstable();
        indices
    }
}

/// A highlight that clears itself once its deadline passes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedHighlight {
    pub indices: Vec<usize>,
    pub expires_at: Instant,
}

impl TimedHighlight {
    pub fn new(indices: Vec<usize>, now: Instant, duration: Duration) -> Self {
        TimedHighlight {
            indices,
            expires_at: now + duration,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Drop `slot`'s highlight if it has expired. Returns true when something was cleared.
pub fn expire_highlight(slot: &mut Option<TimedHighlight>, now: Instant) -> bool {
    if slot.as_ref().is_some_and(|h| h.is_expired(now)) {
        *slot = None;
        true
    } else {
        false
    }
}
