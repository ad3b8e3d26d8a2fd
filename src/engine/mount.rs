//! The host surface a widget is mounted into
//!
//! A [`Mount`] has two regions: a [`ControlPanel`] holding the live controls
//! (with the current text of each numeric input) and a [`Canvas`] holding the
//! last drawn frame. Clearing the mount drops both.

use super::controls::{parse_numeric, ControlDescriptor, ControlId, ControlKind};
use super::frame::RenderFrame;

/// A control plus its live state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub descriptor: ControlDescriptor,
    /// Raw text of a numeric input; empty for buttons
    pub text: String,
}

impl Control {
    fn new(descriptor: ControlDescriptor) -> Self {
        let text = descriptor
            .default_value
            .map(|v| v.to_string())
            .unwrap_or_default();
        Control { descriptor, text }
    }
}

/// Ordered set of controls for the mounted widget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlPanel {
    controls: Vec<Control>,
}

impl ControlPanel {
    pub fn from_descriptors(descriptors: Vec<ControlDescriptor>) -> Self {
        ControlPanel {
            controls: descriptors.into_iter().map(Control::new).collect(),
        }
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn get(&self, id: ControlId) -> Option<&Control> {
        self.controls.iter().find(|c| c.descriptor.id == id)
    }

    /// Replace the text of a numeric input. Returns false if `id` is not a live input.
    pub fn set_text(&mut self, id: ControlId, text: &str) -> bool {
        match self
            .controls
            .iter_mut()
            .find(|c| c.descriptor.id == id && c.descriptor.kind == ControlKind::NumericInput)
        {
            Some(control) => {
                control.text = text.to_string();
                true
            }
            None => false,
        }
    }

    /// Current value of a numeric input; missing or unparsable inputs read as 0
    pub fn numeric(&self, id: ControlId) -> i64 {
        self.get(id).map_or(0, |c| parse_numeric(&c.text))
    }
}

/// What the canvas region currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Canvas {
    #[default]
    Blank,
    Frame(RenderFrame),
    Message(&'static str),
}

impl Canvas {
    pub fn frame(&self) -> Option<&RenderFrame> {
        match self {
            Canvas::Frame(frame) => Some(frame),
            _ => None,
        }
    }
}

/// Control region plus canvas region
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mount {
    pub controls: ControlPanel,
    pub canvas: Canvas,
}

impl Mount {
    pub fn clear(&mut self) {
        self.controls = ControlPanel::default();
        self.canvas = Canvas::Blank;
    }
}
