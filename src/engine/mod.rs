//! Visualizer engine: mount lifecycle and action binding
//!
//! This module provides the dispatch shell around the widget variants:
//! - [`cancel`]: cooperative cancellation tokens for animated runs
//! - [`controls`]: control descriptors, actions, and input coercion
//! - [`frame`]: render frames and timed highlights
//! - [`mount`]: the control panel and canvas a widget is mounted into
//!
//! # Lifecycle
//!
//! [`VisualizerEngine::render`] tears down the current mount (cancelling any
//! animation bound to it), builds fresh control and canvas regions, then
//! dispatches on the concept id to exactly one [`Widget`] variant. No state
//! carries over between mounts.
//!
//! Every mutation path ends by redrawing the full canvas from the widget's
//! buffer.
//!
//! # Time
//!
//! The engine never reads the clock. Callers pass `now` into every operation
//! that can start or advance a timer, and call [`VisualizerEngine::tick`]
//! periodically to expire highlights and step animations.

pub mod cancel;
pub mod controls;
pub mod frame;
pub mod mount;

use crate::config::EngineConfig;
use crate::widgets::{Widget, WidgetKind};
use cancel::CancelToken;
use controls::{Action, ControlId};
use mount::{Canvas, ControlPanel, Mount};
use std::time::Instant;
use tracing::debug;

/// Owns the mounted widget instance and its surface
#[derive(Debug)]
pub struct VisualizerEngine {
    config: EngineConfig,
    mount: Mount,
    instance: Option<Widget>,
    concept_id: Option<String>,
    token: CancelToken,
}

impl VisualizerEngine {
    pub fn new(config: EngineConfig) -> Self {
        VisualizerEngine {
            config,
            mount: Mount::default(),
            instance: None,
            concept_id: None,
            token: CancelToken::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn mount(&self) -> &Mount {
        &self.mount
    }

    pub fn controls(&self) -> &ControlPanel {
        &self.mount.controls
    }

    pub fn canvas(&self) -> &Canvas {
        &self.mount.canvas
    }

    pub fn widget(&self) -> Option<&Widget> {
        self.instance.as_ref()
    }

    pub fn kind(&self) -> Option<WidgetKind> {
        self.instance.as_ref().map(Widget::kind)
    }

    pub fn concept_id(&self) -> Option<&str> {
        self.concept_id.as_deref()
    }

    pub fn is_animating(&self) -> bool {
        self.instance.as_ref().is_some_and(Widget::is_animating)
    }

    /// Tear down the current mount and build a widget for `concept_id`
    pub fn render(&mut self, concept_id: &str) {
        self.unmount();

        let kind = WidgetKind::from_concept_id(concept_id);
        let widget = Widget::build(kind, &self.config, &self.token);
        self.mount.controls = ControlPanel::from_descriptors(widget.controls());
        self.instance = Some(widget);
        self.concept_id = Some(concept_id.to_string());
        debug!(concept_id, ?kind, "mounted visualizer");
        self.redraw();
    }

    /// Drop the current widget and clear the surface
    pub fn unmount(&mut self) {
        self.token.cancel();
        self.token = CancelToken::new();
        if let Some(widget) = self.instance.take() {
            debug!(kind = ?widget.kind(), "unmounted visualizer");
        }
        self.concept_id = None;
        self.mount.clear();
    }

    /// Write raw text into a numeric input. Unknown ids are ignored.
    pub fn set_input(&mut self, id: ControlId, text: &str) -> bool {
        self.mount.controls.set_text(id, text)
    }

    /// Fire the action bound to button `id`
    pub fn activate(&mut self, id: ControlId, now: Instant) -> bool {
        let action = self
            .mount
            .controls
            .get(id)
            .and_then(|control| control.descriptor.on_activate);
        match action {
            Some(action) => self.perform(action, now),
            None => false,
        }
    }

    /// Run `action` against the mounted widget and redraw.
    /// Returns false if nothing is mounted or the widget has no such action.
    pub fn perform(&mut self, action: Action, now: Instant) -> bool {
        let Some(widget) = self.instance.as_mut() else {
            return false;
        };
        if !widget.activate(action, &self.mount.controls, now) {
            debug!(?action, "action not supported by mounted widget");
            return false;
        }
        debug!(?action, "performed action");
        self.redraw();
        true
    }

    /// Advance timers. Returns true if the canvas was redrawn.
    pub fn tick(&mut self, now: Instant) -> bool {
        let changed = self
            .instance
            .as_mut()
            .is_some_and(|widget| widget.tick(now));
        if changed {
            self.redraw();
        }
        changed
    }

    fn redraw(&mut self) {
        self.mount.canvas = match &self.instance {
            Some(widget) => widget.canvas(),
            None => Canvas::Blank,
        };
    }
}

impl Default for VisualizerEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
