//! Control panel pane: numeric inputs and buttons of the mounted widget

use super::pane_block;
use crate::engine::controls::ControlKind;
use crate::engine::mount::ControlPanel;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Render one row per control; the focused row is drawn inverted
pub fn render_controls_pane(frame: &mut Frame, area: Rect, panel: &ControlPanel, focused: usize) {
    let block = pane_block(" Controls ", true);

    if panel.is_empty() {
        let paragraph = Paragraph::new("(no controls)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = panel
        .controls()
        .iter()
        .enumerate()
        .map(|(idx, control)| {
            let is_focused = idx == focused;
            let line = match control.descriptor.kind {
                ControlKind::NumericInput => {
                    let cursor = if is_focused { "▏" } else { " " };
                    let value_style = if is_focused {
                        Style::default()
                            .bg(DEFAULT_THEME.border_focused)
                            .fg(Color::Black)
                    } else {
                        Style::default().fg(DEFAULT_THEME.number)
                    };
                    Line::from(vec![
                        Span::styled(
                            format!("{:>6}: ", control.descriptor.label),
                            Style::default().fg(DEFAULT_THEME.comment),
                        ),
                        Span::styled(format!(" {}{} ", control.text, cursor), value_style),
                    ])
                }
                ControlKind::Button => {
                    let style = if is_focused {
                        Style::default()
                            .bg(DEFAULT_THEME.primary)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(DEFAULT_THEME.primary)
                    };
                    Line::from(Span::styled(
                        format!("[ {} ]", control.descriptor.label),
                        style,
                    ))
                }
            };
            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
