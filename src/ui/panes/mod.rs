//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`concepts`]: Concept picker with the mounted concept marked
//! - [`controls`]: Numeric inputs and buttons of the mounted widget
//! - [`canvas`]: The current render frame, laid out per widget variant
//! - [`status`]: Status bar with keybindings and animation state
//!
//! Each pane module exports a primary `render_*` function that takes the data
//! it draws by reference and keeps no state of its own.

pub mod canvas;
pub mod concepts;
pub mod controls;
pub mod status;

pub use canvas::render_canvas_pane;
pub use concepts::render_concepts_pane;
pub use controls::render_controls_pane;
pub use status::render_status_bar;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders},
};

/// Bordered block with the shared focused/unfocused border styling
pub(crate) fn pane_block<'a>(title: impl Into<Line<'a>>, is_focused: bool) -> Block<'a> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title.into())
        .borders(Borders::ALL)
        .border_style(border_style)
}
