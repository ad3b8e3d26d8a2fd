//! Queue visualizer: first in, first out, drawn front to back

use crate::engine::controls::{button, numeric_input, Action, ControlDescriptor, ControlId};
use crate::engine::frame::{FrameLayout, RenderFrame};
use crate::engine::mount::ControlPanel;
use std::collections::VecDeque;

pub const VALUE_INPUT: ControlId = ControlId("q-input");
pub const ENQUEUE_BUTTON: ControlId = ControlId("q-enqueue");
pub const DEQUEUE_BUTTON: ControlId = ControlId("q-dequeue");

pub const INITIAL_DATA: [i64; 3] = [10, 20, 30];

#[derive(Debug, Clone)]
pub struct QueueWidget {
    items: VecDeque<i64>,
}

impl QueueWidget {
    pub fn new() -> Self {
        Self::with_data(INITIAL_DATA)
    }

    pub fn with_data<I: IntoIterator<Item = i64>>(values: I) -> Self {
        QueueWidget {
            items: values.into_iter().collect(),
        }
    }

    pub fn controls() -> Vec<ControlDescriptor> {
        vec![
            numeric_input(VALUE_INPUT, "Value", 40),
            button(ENQUEUE_BUTTON, Action::Enqueue),
            button(DEQUEUE_BUTTON, Action::Dequeue),
        ]
    }

    /// Values from front to back
    pub fn values(&self) -> Vec<i64> {
        self.items.iter().copied().collect()
    }

    pub fn enqueue(&mut self, value: i64) {
        self.items.push_back(value);
    }

    pub fn dequeue(&mut self) -> Option<i64> {
        self.items.pop_front()
    }

    pub fn activate(&mut self, action: Action, panel: &ControlPanel) -> bool {
        match action {
            Action::Enqueue => self.enqueue(panel.numeric(VALUE_INPUT)),
            Action::Dequeue => {
                self.dequeue();
            }
            _ => return false,
        }
        true
    }

    pub fn frame(&self) -> RenderFrame {
        RenderFrame::new(FrameLayout::Row, self.items.iter().copied())
    }
}

impl Default for QueueWidget {
    fn default() -> Self {
        Self::new()
    }
}
