//! # Introduction
//!
//! algoviz renders small interactive visualizers for basic data structures
//! (array, linked list, stack, queue) and an animated bubble sort in a
//! terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Architecture
//!
//! ```text
//! concept id → VisualizerEngine → Widget variant → RenderFrame → TUI
//! ```
//!
//! 1. [`engine`] — mount lifecycle: tears down the previous widget, builds a
//!    fresh control panel and canvas, dispatches on the concept id, binds
//!    control activations to widget actions, and advances timers.
//! 2. [`widgets`] — one owned-state type per visualizer, each exposing named
//!    actions and producing a [`engine::frame::RenderFrame`] from its buffer.
//! 3. [`config`] — timing and data-generation settings.
//! 4. [`error`] — application-level errors for the terminal host.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Concept ids
//!
//! `arrays` and `strings` mount the array widget, `linked-list`, `stacks`,
//! `queues`, and `sorting` mount their namesakes. Any other id mounts a
//! "coming soon" placeholder with no controls.

pub mod config;
pub mod engine;
pub mod error;
pub mod ui;
pub mod widgets;
