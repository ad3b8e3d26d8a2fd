//! Canvas pane rendering
//!
//! Draws the mounted widget's [`RenderFrame`] according to its
//! [`FrameLayout`]. Highlighted cells use the theme's highlight colors.
//!
//! # Layouts
//!
//! ```text
//! IndexedCells  [ 10 ][ 20 ][ 30 ]       Chain  [ 10 ] → [ 20 ] NULL
//!                  0     1     2
//!
//! Column        │ 30 │ ← top             Row    FRONT → [ 10 ][ 20 ] ← BACK
//!               │ 20 │
//!               └────┘
//! ```
//!
//! Bars are drawn with ratatui's `BarChart`, one bar per value.

use super::pane_block;
use crate::engine::frame::{FrameLayout, RenderFrame};
use crate::engine::mount::Canvas;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph, Wrap},
    Frame,
};

const CELL_WIDTH: usize = 4;

/// Render the canvas region
pub fn render_canvas_pane(frame: &mut Frame, area: Rect, canvas: &Canvas, title: &str) {
    let block = pane_block(format!(" {} ", title), false);

    match canvas {
        Canvas::Blank => {
            let paragraph = Paragraph::new("(nothing mounted)")
                .block(block)
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(paragraph, area);
        }
        Canvas::Message(message) => {
            let paragraph = Paragraph::new(*message)
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(DEFAULT_THEME.secondary));
            frame.render_widget(paragraph, area);
        }
        Canvas::Frame(render_frame) if render_frame.layout == FrameLayout::Bars => {
            render_bars(frame, area, render_frame, block);
        }
        Canvas::Frame(render_frame) => {
            let lines = frame_lines(render_frame);
            let paragraph = Paragraph::new(lines).block(block);
            frame.render_widget(paragraph, area);
        }
    }
}

/// Text lines for every layout except bars
pub fn frame_lines(render_frame: &RenderFrame) -> Vec<Line<'static>> {
    if render_frame.cells.is_empty() {
        return vec![Line::from(Span::styled(
            "(empty)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))];
    }

    match render_frame.layout {
        FrameLayout::IndexedCells => indexed_cell_lines(render_frame),
        FrameLayout::Chain => vec![chain_line(render_frame)],
        FrameLayout::Column => column_lines(render_frame),
        FrameLayout::Row => vec![row_line(render_frame)],
        FrameLayout::Bars => Vec::new(),
    }
}

fn cell_style(highlighted: bool) -> Style {
    if highlighted {
        Style::default()
            .bg(DEFAULT_THEME.highlight)
            .fg(DEFAULT_THEME.highlight_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.number)
    }
}

fn cell_span(render_frame: &RenderFrame, idx: usize) -> Span<'static> {
    Span::styled(
        format!("[{:^width$}]", render_frame.cells[idx], width = CELL_WIDTH),
        cell_style(render_frame.is_highlighted(idx)),
    )
}

fn indexed_cell_lines(render_frame: &RenderFrame) -> Vec<Line<'static>> {
    let cells: Vec<Span> = (0..render_frame.cells.len())
        .map(|idx| cell_span(render_frame, idx))
        .collect();
    let indices: Vec<Span> = (0..render_frame.cells.len())
        .map(|idx| {
            Span::styled(
                format!(" {:^width$} ", idx, width = CELL_WIDTH),
                Style::default().fg(DEFAULT_THEME.comment),
            )
        })
        .collect();
    vec![Line::from(cells), Line::from(indices)]
}

fn chain_line(render_frame: &RenderFrame) -> Line<'static> {
    let arrow_style = Style::default().fg(DEFAULT_THEME.comment);
    let last = render_frame.cells.len() - 1;
    let mut spans = Vec::new();

    for idx in 0..render_frame.cells.len() {
        spans.push(cell_span(render_frame, idx));
        if idx < last {
            spans.push(Span::styled(" → ", arrow_style));
        } else {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                "NULL",
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD),
            ));
        }
    }
    Line::from(spans)
}

fn column_lines(render_frame: &RenderFrame) -> Vec<Line<'static>> {
    let wall_style = Style::default().fg(DEFAULT_THEME.comment);
    let top = render_frame.cells.len() - 1;

    // Most recently pushed element is drawn first
    let mut lines: Vec<Line> = (0..render_frame.cells.len())
        .rev()
        .map(|idx| {
            let mut spans = vec![
                Span::styled("│", wall_style),
                Span::styled(
                    format!(" {:^width$} ", render_frame.cells[idx], width = CELL_WIDTH),
                    cell_style(render_frame.is_highlighted(idx)),
                ),
                Span::styled("│", wall_style),
            ];
            if idx == top {
                spans.push(Span::styled(
                    " ← top",
                    Style::default().fg(DEFAULT_THEME.secondary),
                ));
            }
            Line::from(spans)
        })
        .collect();

    lines.push(Line::from(Span::styled(
        format!("└{}┘", "─".repeat(CELL_WIDTH + 2)),
        wall_style,
    )));
    lines
}

fn row_line(render_frame: &RenderFrame) -> Line<'static> {
    let marker_style = Style::default().fg(DEFAULT_THEME.secondary);
    let mut spans = vec![Span::styled("FRONT → ", marker_style)];
    spans.extend((0..render_frame.cells.len()).map(|idx| cell_span(render_frame, idx)));
    spans.push(Span::styled(" ← BACK", marker_style));
    Line::from(spans)
}

fn render_bars(
    frame: &mut Frame,
    area: Rect,
    render_frame: &RenderFrame,
    block: ratatui::widgets::Block,
) {
    let bars: Vec<Bar> = render_frame
        .cells
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            let style = if render_frame.is_highlighted(idx) {
                Style::default().fg(DEFAULT_THEME.highlight)
            } else {
                Style::default().fg(DEFAULT_THEME.bar)
            };
            Bar::default()
                .value(u64::try_from(value).unwrap_or(0))
                .text_value(value.to_string())
                .style(style)
                .value_style(
                    Style::default()
                        .bg(style.fg.unwrap_or(DEFAULT_THEME.bar))
                        .fg(DEFAULT_THEME.highlight_fg),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(3)
        .bar_gap(1);
    frame.render_widget(chart, area);
}
