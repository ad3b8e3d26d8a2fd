//! Main TUI application state and logic

use crate::engine::controls::ControlKind;
use crate::engine::VisualizerEngine;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

/// The main application state
pub struct App {
    /// The engine owning the mounted widget
    pub engine: VisualizerEngine,

    /// Concept ids offered by the picker
    pub concepts: Vec<String>,

    /// Index of the mounted concept in `concepts`
    pub selected: usize,

    /// Index of the focused control in the mounted control panel
    pub focused_control: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// How long to wait for input before advancing timers
    pub tick_rate: Duration,
}

impl App {
    /// Create the app and mount `initial`, adding it to the picker if missing.
    /// `concepts` must be non-empty unless `initial` is given.
    pub fn new(
        engine: VisualizerEngine,
        mut concepts: Vec<String>,
        initial: Option<&str>,
        tick_rate: Duration,
    ) -> Self {
        let selected = match initial {
            Some(id) => match concepts.iter().position(|c| c == id) {
                Some(idx) => idx,
                None => {
                    concepts.push(id.to_string());
                    concepts.len() - 1
                }
            },
            None => 0,
        };

        let mut app = App {
            engine,
            concepts,
            selected,
            focused_control: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            tick_rate,
        };
        app.mount_selected();
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Poll with timeout so animations advance without input
            if event::poll(self.tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key, Instant::now());
                    }
                }
            }

            self.engine.tick(Instant::now());
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(0)])
            .split(main_chunks[0]);

        // Left column: Concepts (top) | Controls (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[0]);

        super::panes::render_concepts_pane(frame, left_rows[0], &self.concepts, self.selected);

        super::panes::render_controls_pane(
            frame,
            left_rows[1],
            self.engine.controls(),
            self.focused_control,
        );

        let title = self.engine.concept_id().unwrap_or("Visualizer");
        super::panes::render_canvas_pane(frame, columns[1], self.engine.canvas(), title);

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.engine.kind(),
            self.engine.is_animating(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                    self.mount_selected();
                }
            }
            KeyCode::Down => {
                if self.selected + 1 < self.concepts.len() {
                    self.selected += 1;
                    self.mount_selected();
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.mount_selected();
                self.status_message = "Reset".to_string();
            }
            KeyCode::Tab | KeyCode::Right => self.focus_next(),
            KeyCode::BackTab | KeyCode::Left => self.focus_prev(),
            KeyCode::Char(c @ ('0'..='9' | '-')) => self.edit_focused_input(|text| text.push(c)),
            KeyCode::Backspace => self.edit_focused_input(|text| {
                text.pop();
            }),
            KeyCode::Enter | KeyCode::Char(' ') => self.press_focused(now),
            _ => {}
        }
    }

    /// Mount the selected concept, replacing whatever was mounted
    fn mount_selected(&mut self) {
        let Some(concept_id) = self.concepts.get(self.selected).cloned() else {
            return;
        };
        self.engine.render(&concept_id);
        self.focused_control = 0;
        self.status_message = format!("Loaded {}", concept_id);
        info!(concept_id = %concept_id, "concept selected");
    }

    fn focus_next(&mut self) {
        let len = self.engine.controls().len();
        if len > 0 {
            self.focused_control = (self.focused_control + 1) % len;
        }
    }

    fn focus_prev(&mut self) {
        let len = self.engine.controls().len();
        if len > 0 {
            self.focused_control = (self.focused_control + len - 1) % len;
        }
    }

    fn edit_focused_input<F: FnOnce(&mut String)>(&mut self, edit: F) {
        let Some(control) = self.engine.controls().controls().get(self.focused_control) else {
            return;
        };
        if control.descriptor.kind != ControlKind::NumericInput {
            return;
        }
        let id = control.descriptor.id;
        let mut text = control.text.clone();
        edit(&mut text);
        self.engine.set_input(id, &text);
    }

    fn press_focused(&mut self, now: Instant) {
        let Some(control) = self.engine.controls().controls().get(self.focused_control) else {
            return;
        };
        if !control.descriptor.is_button() {
            return;
        }
        let id = control.descriptor.id;
        let label = control.descriptor.label;
        if self.engine.activate(id, now) {
            self.status_message = label.to_string();
        }
    }
}
