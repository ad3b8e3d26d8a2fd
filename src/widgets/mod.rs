//! Visualizer variants
//!
//! Each variant owns its buffer and exposes named action methods. The
//! [`Widget`] enum is the dispatch table the engine mounts; adding a variant
//! means extending [`WidgetKind`], [`Widget`], and the match arms below.
//!
//! - [`array`]: indexed insert, delete, and timed access highlight
//! - [`linked_list`]: push/pop at either end, drawn as a NULL-terminated chain
//! - [`stack`]: push/pop at the top, drawn bottom-to-top
//! - [`queue`]: enqueue at the back, dequeue at the front
//! - [`sort`]: random dataset with an animated, cancellable bubble sort

pub mod array;
pub mod linked_list;
pub mod queue;
pub mod sort;
pub mod stack;

use crate::config::EngineConfig;
use crate::engine::cancel::CancelToken;
use crate::engine::controls::{Action, ControlDescriptor};
use crate::engine::mount::{Canvas, ControlPanel};
use std::time::Instant;

pub use array::ArrayWidget;
pub use linked_list::LinkedListWidget;
pub use queue::QueueWidget;
pub use sort::SortWidget;
pub use stack::StackWidget;

/// Shown in the canvas for concepts without a visualizer
pub const COMING_SOON: &str = "Custom visualizer for this concept is coming soon! \
Please assume standard behavior or check the text resources.";

/// Which visualizer a concept id maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Array,
    LinkedList,
    Stack,
    Queue,
    Sort,
    Unsupported,
}

impl WidgetKind {
    /// Dispatch table from concept id to variant.
    /// Strings are visualized as character arrays.
    pub fn from_concept_id(concept_id: &str) -> Self {
        match concept_id {
            "arrays" | "strings" => WidgetKind::Array,
            "linked-list" => WidgetKind::LinkedList,
            "stacks" => WidgetKind::Stack,
            "queues" => WidgetKind::Queue,
            "sorting" => WidgetKind::Sort,
            _ => WidgetKind::Unsupported,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WidgetKind::Array => "Array",
            WidgetKind::LinkedList => "Linked List",
            WidgetKind::Stack => "Stack",
            WidgetKind::Queue => "Queue",
            WidgetKind::Sort => "Sorting",
            WidgetKind::Unsupported => "Unsupported",
        }
    }
}

/// A live widget instance
#[derive(Debug)]
pub enum Widget {
    Array(ArrayWidget),
    LinkedList(LinkedListWidget),
    Stack(StackWidget),
    Queue(QueueWidget),
    Sort(SortWidget),
    Unsupported,
}

impl Widget {
    /// Construct a fresh instance of `kind`. Animated runs hang off `mount_token`.
    pub fn build(kind: WidgetKind, config: &EngineConfig, mount_token: &CancelToken) -> Self {
        match kind {
            WidgetKind::Array => Widget::Array(ArrayWidget::new(config.highlight_duration)),
            WidgetKind::LinkedList => Widget::LinkedList(LinkedListWidget::new()),
            WidgetKind::Stack => Widget::Stack(StackWidget::new()),
            WidgetKind::Queue => Widget::Queue(QueueWidget::new()),
            WidgetKind::Sort => Widget::Sort(SortWidget::new(config, mount_token.clone())),
            WidgetKind::Unsupported => Widget::Unsupported,
        }
    }

    pub fn kind(&self) -> WidgetKind {
        match self {
            Widget::Array(_) => WidgetKind::Array,
            Widget::LinkedList(_) => WidgetKind::LinkedList,
            Widget::Stack(_) => WidgetKind::Stack,
            Widget::Queue(_) => WidgetKind::Queue,
            Widget::Sort(_) => WidgetKind::Sort,
            Widget::Unsupported => WidgetKind::Unsupported,
        }
    }

    /// The fixed control set for this variant
    pub fn controls(&self) -> Vec<ControlDescriptor> {
        match self {
            Widget::Array(_) => ArrayWidget::controls(),
            Widget::LinkedList(_) => LinkedListWidget::controls(),
            Widget::Stack(_) => StackWidget::controls(),
            Widget::Queue(_) => QueueWidget::controls(),
            Widget::Sort(_) => SortWidget::controls(),
            Widget::Unsupported => Vec::new(),
        }
    }

    /// Recompute the canvas from current state
    pub fn canvas(&self) -> Canvas {
        match self {
            Widget::Array(w) => Canvas::Frame(w.frame()),
            Widget::LinkedList(w) => Canvas::Frame(w.frame()),
            Widget::Stack(w) => Canvas::Frame(w.frame()),
            Widget::Queue(w) => Canvas::Frame(w.frame()),
            Widget::Sort(w) => Canvas::Frame(w.frame()),
            Widget::Unsupported => Canvas::Message(COMING_SOON),
        }
    }

    /// Run `action` against this widget, reading inputs from `panel`.
    /// Returns false when the action does not belong to this variant.
    pub fn activate(&mut self, action: Action, panel: &ControlPanel, now: Instant) -> bool {
        match self {
            Widget::Array(w) => w.activate(action, panel, now),
            Widget::LinkedList(w) => w.activate(action, panel),
            Widget::Stack(w) => w.activate(action, panel),
            Widget::Queue(w) => w.activate(action, panel),
            Widget::Sort(w) => w.activate(action, now),
            Widget::Unsupported => false,
        }
    }

    /// Advance timers. Returns true when the canvas needs a redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self {
            Widget::Array(w) => w.tick(now),
            Widget::Sort(w) => w.tick(now),
            _ => false,
        }
    }

    pub fn is_animating(&self) -> bool {
        match self {
            Widget::Array(w) => w.has_highlight(),
            Widget::Sort(w) => w.is_sorting(),
            _ => false,
        }
    }
}

/// Convert a user-supplied index to a position strictly below `bound`
pub(crate) fn checked_index(index: i64, bound: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&idx| idx < bound)
}
