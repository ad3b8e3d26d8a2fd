//! Stack visualizer: last in, first out, drawn growing upwards

use crate::engine::controls::{button, numeric_input, Action, ControlDescriptor, ControlId};
use crate::engine::frame::{FrameLayout, RenderFrame};
use crate::engine::mount::ControlPanel;

pub const VALUE_INPUT: ControlId = ControlId("stack-input");
pub const PUSH_BUTTON: ControlId = ControlId("stack-push");
pub const POP_BUTTON: ControlId = ControlId("stack-pop");

pub const INITIAL_DATA: [i64; 3] = [10, 20, 30];

#[derive(Debug, Clone)]
pub struct StackWidget {
    // Bottom of the stack is index 0
    items: Vec<i64>,
}

impl StackWidget {
    pub fn new() -> Self {
        Self::with_data(INITIAL_DATA.to_vec())
    }

    pub fn with_data(items: Vec<i64>) -> Self {
        StackWidget { items }
    }

    pub fn controls() -> Vec<ControlDescriptor> {
        vec![
            numeric_input(VALUE_INPUT, "Value", 40),
            button(PUSH_BUTTON, Action::Push),
            button(POP_BUTTON, Action::Pop),
        ]
    }

    pub fn items(&self) -> &[i64] {
        &self.items
    }

    pub fn peek(&self) -> Option<i64> {
        self.items.last().copied()
    }

    pub fn push(&mut self, value: i64) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<i64> {
        self.items.pop()
    }

    pub fn activate(&mut self, action: Action, panel: &ControlPanel) -> bool {
        match action {
            Action::Push => self.push(panel.numeric(VALUE_INPUT)),
            Action::Pop => {
                self.pop();
            }
            _ => return false,
        }
        true
    }

    pub fn frame(&self) -> RenderFrame {
        RenderFrame::new(FrameLayout::Column, self.items.iter().copied())
    }
}

impl Default for StackWidget {
    fn default() -> Self {
        Self::new()
    }
}
