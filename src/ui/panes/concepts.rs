//! Concept picker pane

use super::pane_block;
use crate::ui::theme::DEFAULT_THEME;
use crate::widgets::WidgetKind;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Render the list of concept ids, marking the mounted one
pub fn render_concepts_pane(frame: &mut Frame, area: Rect, concepts: &[String], selected: usize) {
    let block = pane_block(" Concepts ", false);

    let items: Vec<ListItem> = concepts
        .iter()
        .enumerate()
        .map(|(idx, concept)| {
            let is_selected = idx == selected;
            let supported = WidgetKind::from_concept_id(concept) != WidgetKind::Unsupported;

            let marker = if is_selected { "▸ " } else { "  " };
            let name_style = if is_selected {
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD)
            } else if supported {
                Style::default().fg(DEFAULT_THEME.fg)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.secondary)),
                Span::styled(concept.as_str(), name_style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
