//! Main TUI application state and loop

use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tracing::{debug, info};

use super::components::{record_field, ButtonBar, DetailGridView, StatusDisplay, StatusMessage};
use super::events::AppEvent;
use super::handlers::CommonKeyHandler;
use super::traits::Scrollable;
use super::ui::centered_rect;
use crate::browser::{Browser, NavOutcome};
use crate::client::{ClientError, RecordClient, RecordSource};
use crate::config::Config;
use crate::models::Navigation;
use crate::shaper::ArabicShaper;

/// Main TUI application state
pub struct App<S = RecordClient> {
    /// Application configuration
    pub config: Config,
    /// Cursor, record field and detail grid
    pub browser: Browser<S>,

    // Components
    pub buttons: ButtonBar,
    pub grid_view: DetailGridView,
    pub status: StatusDisplay,

    // Global application state
    pub should_quit: bool,
    pub show_help_popup: bool,
}

impl App<RecordClient> {
    /// Create the application talking to the configured record service
    pub fn new(config: Config) -> Result<Self> {
        let client = RecordClient::new(&config)?;
        Ok(Self::with_source(config, client))
    }
}

impl<S: RecordSource> App<S> {
    pub fn with_source(config: Config, source: S) -> Self {
        let shaper = ArabicShaper::new(config.shape_text);
        let buttons = ButtonBar::new(&shaper);
        let status = StatusDisplay::new()
            .with_idle_text("Press f for the first record | ?: Help | q: Quit");

        Self {
            config,
            browser: Browser::new(source, shaper),
            buttons,
            grid_view: DetailGridView::new(),
            status,
            should_quit: false,
            show_help_popup: false,
        }
    }

    /// Run the main application loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            let event = crossterm::event::read()?;
            if let Some(app_event) = self.handle_event(event) {
                self.dispatch(app_event, terminal).await?;
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Translate a terminal event; scrolling is applied directly
    pub fn handle_event(&mut self, event: Event) -> Option<AppEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => None,
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Option<AppEvent> {
        let event = AppEvent::from_key(key);

        if self.show_help_popup {
            return match event {
                Some(AppEvent::Quit) | Some(AppEvent::ToggleHelp) | Some(AppEvent::CloseHelp) => {
                    event
                }
                _ => None,
            };
        }

        if event.is_none() && CommonKeyHandler::handle_scroll_keys(&mut self.grid_view, key) {
            return None;
        }
        event
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Option<AppEvent> {
        if self.show_help_popup {
            return None;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self
                .buttons
                .hit_test(mouse.column, mouse.row)
                .map(AppEvent::Navigate),
            MouseEventKind::ScrollDown => {
                self.grid_view.scroll_down(1);
                None
            }
            MouseEventKind::ScrollUp => {
                self.grid_view.scroll_up(1);
                None
            }
            _ => None,
        }
    }

    /// Carry out an event; requests show a loading status first
    async fn dispatch<B: Backend>(&mut self, event: AppEvent, terminal: &mut Terminal<B>) -> Result<()> {
        match event {
            AppEvent::Quit => self.should_quit = true,
            AppEvent::ToggleHelp => self.show_help_popup = !self.show_help_popup,
            AppEvent::CloseHelp => self.show_help_popup = false,
            AppEvent::Navigate(navigation) => {
                if self.browser.cursor().plan(navigation).is_some() {
                    self.status
                        .set_loading(format!("Loading {} record...", navigation.as_str()));
                    terminal.draw(|f| self.draw(f))?;
                }
                self.navigate(navigation).await;
            }
            AppEvent::ReloadLines => {
                if self.browser.record().is_some() {
                    self.status.set_loading("Reloading lines...".to_string());
                    terminal.draw(|f| self.draw(f))?;
                }
                self.reload_lines().await;
            }
        }
        Ok(())
    }

    /// Move the cursor and report the outcome in the status bar
    pub async fn navigate(&mut self, navigation: Navigation) {
        let outcome = self.browser.navigate(navigation).await;
        debug!("{} -> {:?}", navigation.as_str(), outcome);

        if outcome.is_shown() {
            self.grid_view.reset(self.browser.grid());
        }
        self.status.set_message(outcome_status(navigation, &outcome));
    }

    pub async fn reload_lines(&mut self) {
        if self.browser.record().is_none() {
            self.status
                .set_message(StatusMessage::warning("No record shown yet".to_string()));
            return;
        }
        let result = self.browser.reload_detail_lines().await;
        self.grid_view.reset(self.browser.grid());
        let status = match result {
            Ok(()) => StatusMessage::success("Lines reloaded".to_string()),
            Err(e) => failure_status(&e),
        };
        self.status.set_message(status);
    }

    /// Draw the UI
    pub fn draw(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        let record_id = self.browser.cursor().current();
        record_field::render(f, chunks[0], self.browser.record_field(), record_id);

        let positioned = self.browser.cursor().is_positioned();
        self.buttons.render(f, chunks[1], positioned);

        self.grid_view.render(f, chunks[2], self.browser.grid());

        self.status.render(f, chunks[3]);

        if self.show_help_popup {
            self.draw_help_popup(f, size);
        }
    }

    fn draw_help_popup(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 60, area);

        f.render_widget(Clear, popup_area);

        let help_popup = Paragraph::new(help_text(&self.config))
            .block(
                Block::default()
                    .title("Help")
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White));

        f.render_widget(help_popup, popup_area);
    }
}

/// Status bar message for the outcome of a cursor move
pub fn outcome_status(navigation: Navigation, outcome: &NavOutcome) -> StatusMessage {
    match outcome {
        NavOutcome::Shown(record) => StatusMessage::success(format!("Record {}", record.id)),
        NavOutcome::NotPositioned => StatusMessage::warning(format!(
            "Load the first record (f) before moving {}",
            navigation.as_str()
        )),
        NavOutcome::NoRecord => {
            StatusMessage::info(format!("No {} record", navigation.as_str()))
        }
        NavOutcome::Failed(e) => failure_status(e),
    }
}

/// Status bar message for a failed request
pub fn failure_status(error: &ClientError) -> StatusMessage {
    match error {
        ClientError::Status(code) => {
            StatusMessage::warning(format!("No data (server answered {})", code))
        }
        e if e.is_transport() => {
            info!("Connection problem: {}", e);
            StatusMessage::error(format!("Connection error: {}", e))
        }
        e => StatusMessage::warning(format!("No data: {}", e)),
    }
}

fn help_text(config: &Config) -> String {
    format!(
        "Records:\n\
        f / Home - First record\n\
        n / PageDown / → - Next record\n\
        p / PageUp / ← - Previous record\n\
        r - Reload lines\n\
        Mouse click - Press a button\n\n\
        Lines:\n\
        ↑/↓ or j/k - Scroll\n\
        Ctrl+u / Ctrl+d - Page up / down\n\
        g / G - Top / bottom\n\n\
        ? / F1 - Toggle this help\n\
        Esc - Close help\n\
        q - Quit\n\n\
        Server: {}",
        config.base_url()
    )
}
