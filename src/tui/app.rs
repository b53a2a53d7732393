//! Main TUI application.

use std::io;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::debug;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::GridState;
use crate::view::HostView;
use crate::view::common::{Column, infer_columns};

/// Interactive table over one host view.
pub struct App {
    view: Box<dyn HostView>,
    state: GridState,
    should_quit: bool,
}

impl App {
    /// Creates the app over an already loaded view.
    ///
    /// With no columns, they are inferred from the loaded records.
    pub fn new(view: Box<dyn HostView>, columns: Vec<Column>) -> Self {
        let mut app = Self {
            view,
            state: GridState::new(columns),
            should_quit: false,
        };
        app.ensure_columns();
        app
    }

    /// Runs the TUI application.
    pub fn run(mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new();

        let result = self.event_loop(&mut terminal, &events);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &EventHandler,
    ) -> io::Result<()> {
        loop {
            terminal.draw(|frame| render(frame, self.view.as_ref(), &self.state))?;

            match events.next() {
                Ok(Event::Key(key)) => {
                    match handle_key(self.view.as_mut(), &mut self.state, key) {
                        KeyAction::Quit => self.should_quit = true,
                        KeyAction::Reload => self.reload(),
                        KeyAction::Listen => self.listen(),
                        KeyAction::None => {}
                    }
                }
                Ok(Event::Resize) => {}
                Err(_) => self.should_quit = true,
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    fn reload(&mut self) {
        self.view.reload();
        self.ensure_columns();
    }

    fn ensure_columns(&mut self) {
        if self.state.columns.is_empty() {
            self.state.columns = infer_columns(self.view.pager().records());
            debug!(count = self.state.columns.len(), "inferred columns");
        }
    }

    fn listen(&mut self) {
        if let Err(e) = self.view.listen() {
            self.state.message = Some(e.to_string());
        }
    }
}
