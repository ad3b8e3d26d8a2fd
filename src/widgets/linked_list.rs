//! Singly linked list visualizer
//!
//! Nodes are drawn left to right with an arrow between neighbours and a NULL
//! marker after the tail.

use crate::engine::controls::{button, numeric_input, Action, ControlDescriptor, ControlId};
use crate::engine::frame::{FrameLayout, RenderFrame};
use crate::engine::mount::ControlPanel;
use std::collections::VecDeque;

pub const VALUE_INPUT: ControlId = ControlId("ll-input");
pub const PUSH_FRONT_BUTTON: ControlId = ControlId("ll-push-front");
pub const PUSH_BACK_BUTTON: ControlId = ControlId("ll-push-back");
pub const POP_FRONT_BUTTON: ControlId = ControlId("ll-pop-front");
pub const POP_BACK_BUTTON: ControlId = ControlId("ll-pop-back");

pub const INITIAL_DATA: [i64; 3] = [10, 20, 30];

#[derive(Debug, Clone)]
pub struct LinkedListWidget {
    nodes: VecDeque<i64>,
}

impl LinkedListWidget {
    pub fn new() -> Self {
        Self::with_data(INITIAL_DATA)
    }

    pub fn with_data<I: IntoIterator<Item = i64>>(values: I) -> Self {
        LinkedListWidget {
            nodes: values.into_iter().collect(),
        }
    }

    pub fn controls() -> Vec<ControlDescriptor> {
        vec![
            numeric_input(VALUE_INPUT, "Value", 40),
            button(PUSH_FRONT_BUTTON, Action::PushFront),
            button(PUSH_BACK_BUTTON, Action::PushBack),
            button(POP_FRONT_BUTTON, Action::PopFront),
            button(POP_BACK_BUTTON, Action::PopBack),
        ]
    }

    pub fn values(&self) -> Vec<i64> {
        self.nodes.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn push_front(&mut self, value: i64) {
        self.nodes.push_front(value);
    }

    pub fn push_back(&mut self, value: i64) {
        self.nodes.push_back(value);
    }

    /// Remove the head node; `None` on an empty list
    pub fn pop_front(&mut self) -> Option<i64> {
        self.nodes.pop_front()
    }

    /// Remove the tail node; `None` on an empty list
    pub fn pop_back(&mut self) -> Option<i64> {
        self.nodes.pop_back()
    }

    pub fn activate(&mut self, action: Action, panel: &ControlPanel) -> bool {
        match action {
            Action::PushFront => self.push_front(panel.numeric(VALUE_INPUT)),
            Action::PushBack => self.push_back(panel.numeric(VALUE_INPUT)),
            Action::PopFront => {
                self.pop_front();
            }
            Action::PopBack => {
                self.pop_back();
            }
            _ => return false,
        }
        true
    }

    pub fn frame(&self) -> RenderFrame {
        RenderFrame::new(FrameLayout::Chain, self.nodes.iter().copied())
    }
}

impl Default for LinkedListWidget {
    fn default() -> Self {
        Self::new()
    }
}
