//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tracing::debug;

use bodycomp_core::calculator::{compute_with_options, BodyComposition, ValidationError};
use bodycomp_core::display::DisplayFields;
use bodycomp_core::inputs::RawInputs;
use bodycomp_core::interfaces::{present, InputSource, ResultPresenter};
use bodycomp_core::options::Options;

use crate::fields::{render_button, render_personal, render_skinfolds};
use crate::footer::render_footer;
use crate::form::{FormSlot, FormState};
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::results::render_results;
use crate::styles::ColorTheme;

/// Areas of the form layout, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub header: Rect,
    pub personal: Rect,
    pub skinfolds: Rect,
    pub button: Rect,
    pub results: Rect,
    pub footer: Rect,
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Editable form fields.
    pub form: FormState,
    /// Contents of the result panel.
    pub display: DisplayFields,
    /// Number of calculations triggered.
    pub calculations: usize,
    opts: Options,
    theme: ColorTheme,
}

impl TuiApp {
    /// Create a new TUI app with an empty form.
    #[must_use]
    pub fn new(opts: Options) -> Self {
        Self::with_inputs(RawInputs::default(), opts)
    }

    /// Create a new TUI app with pre-filled fields.
    #[must_use]
    pub fn with_inputs(inputs: RawInputs, opts: Options) -> Self {
        Self {
            should_quit: false,
            form: FormState::with_inputs(inputs),
            display: DisplayFields::placeholder(),
            calculations: 0,
            opts,
            theme: ColorTheme::default(),
        }
    }

    /// Pull the current field values and run a calculation.
    pub fn calculate(&mut self) {
        self.calculations += 1;
        let outcome = compute_with_options(&self.form.raw_inputs(), &self.opts);
        present(self, &outcome);
    }

    /// Handle a keyboard action (Elm Update).
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::NextField => self.form.focus_next(),
            KeyAction::PrevField => self.form.focus_prev(),
            KeyAction::Submit => {
                if self.form.focused() == FormSlot::CalculateButton {
                    self.calculate();
                } else {
                    self.form.focus_next();
                }
            }
            KeyAction::Calculate => self.calculate(),
            KeyAction::Backspace => self.form.backspace(),
            KeyAction::ClearField => self.form.clear_focused(),
            KeyAction::Input(c) => self.form.insert_char(c),
            KeyAction::None => {}
        }
    }

    /// Compute the form layout.
    #[must_use]
    pub fn compute_layout(area: Rect) -> FormLayout {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header
                Constraint::Length(6), // personal information
                Constraint::Length(5), // skinfolds
                Constraint::Length(3), // button
                Constraint::Min(10),   // results
                Constraint::Length(2), // footer
            ])
            .split(area);

        FormLayout {
            header: chunks[0],
            personal: chunks[1],
            skinfolds: chunks[2],
            button: chunks[3],
            results: chunks[4],
            footer: chunks[5],
        }
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let layout = Self::compute_layout(frame.area());

        render_header(frame, layout.header, &self.theme);
        render_personal(frame, layout.personal, &self.form, &self.theme);
        render_skinfolds(frame, layout.skinfolds, &self.form, &self.theme);
        render_button(frame, layout.button, &self.form, &self.theme);
        render_results(frame, layout.results, &self.display, &self.theme);
        render_footer(frame, layout.footer);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// This sets up the terminal, runs the main loop (render, read key, update),
    /// and tears down on exit, including when the loop fails.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let poll_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(poll_rate)? {
                if let Event::Key(key_event) = event::read()? {
                    self.handle_key_action(map_key(key_event));
                }
            }
        }
    }
}

impl ResultPresenter for TuiApp {
    fn present_result(&mut self, result: &BodyComposition, display: &DisplayFields) {
        debug!(name = %result.name, bmi = result.bmi, "calculation displayed");
        self.display = display.clone();
    }

    fn present_error(&mut self, error: &ValidationError, display: &DisplayFields) {
        debug!("calculation rejected: {error}");
        self.display = display.clone();
    }
}
