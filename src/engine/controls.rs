//! Declarative control descriptors and the helpers that build them
//!
//! Each widget declares its controls once, at creation time, as a list of
//! [`ControlDescriptor`]s. Numeric inputs are identified by a stable
//! [`ControlId`] so that actions can look up "the current index input" when
//! they fire.

use std::fmt;

/// Deterministic identifier for a control within one mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(pub &'static str);

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    NumericInput,
    Button,
}

/// Named user action a button is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Array
    Insert,
    Delete,
    Access,
    // Linked list
    PushFront,
    PushBack,
    PopFront,
    PopBack,
    // Stack
    Push,
    Pop,
    // Queue
    Enqueue,
    Dequeue,
    // Sort
    GenerateNew,
    BubbleSort,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::Insert => "Insert",
            Action::Delete => "Delete",
            Action::Access => "Access",
            Action::PushFront => "Push Front",
            Action::PushBack => "Push Back",
            Action::PopFront => "Pop Front",
            Action::PopBack => "Pop Back",
            Action::Push => "Push",
            Action::Pop => "Pop",
            Action::Enqueue => "Enqueue",
            Action::Dequeue => "Dequeue",
            Action::GenerateNew => "Generate New",
            Action::BubbleSort => "Bubble Sort",
        }
    }
}

/// One interactive control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlDescriptor {
    pub id: ControlId,
    pub label: &'static str,
    pub kind: ControlKind,
    pub default_value: Option<i64>,
    pub on_activate: Option<Action>,
}

impl ControlDescriptor {
    pub fn is_button(&self) -> bool {
        self.kind == ControlKind::Button
    }
}

/// Build a numeric input with a placeholder label and default value
pub fn numeric_input(id: ControlId, label: &'static str, default: i64) -> ControlDescriptor {
    ControlDescriptor {
        id,
        label,
        kind: ControlKind::NumericInput,
        default_value: Some(default),
        on_activate: None,
    }
}

/// Build a button bound to `action`; its id and label derive from the action
pub fn button(id: ControlId, action: Action) -> ControlDescriptor {
    ControlDescriptor {
        id,
        label: action.label(),
        kind: ControlKind::Button,
        default_value: None,
        on_activate: Some(action),
    }
}

/// Coerce raw input text to an integer.
///
/// Leading whitespace and an optional sign are accepted, then the longest run
/// of ASCII digits; anything after it is ignored. Text with no leading digits
/// coerces to 0. Overlong digit runs saturate.
pub fn parse_numeric(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in rest.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        let digit = i64::from(byte - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
    }

    if !seen_digit {
        return 0;
    }
    if negative {
        -value
    } else {
        value
    }
}
