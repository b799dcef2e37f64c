//! Main application state and logic.

mod constants;
pub mod input;
pub mod records;
mod render;
pub mod state;

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind, MouseEvent};
use futures::StreamExt;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use pagenav_core::{
    ConfigError, ItemKind, NavOutcome, PageChange, PageRequest, PaginationConfig,
    PaginationController,
};

use crate::TuiConfig;
use crate::event::{KeyAction, left_click};
use crate::surface::TerminalSurface;
use crate::theme::Theme;
use crate::ui::{AppLayout, Hit, JumpDisplay, PagerLayout};

pub use self::constants::DEFAULT_TOTAL;
use self::constants::{MESSAGE_TICKS, TICK_INTERVAL_MS};
use self::input::{InputResult, JumpField};
use self::records::{RecordPage, SyntheticRecords};
use self::render::{RenderContext, render_app};
use self::state::{AppMode, StatusMessage, UserSettings};

/// Application result type.
pub type AppResult<T> = color_eyre::Result<T>;

/// Demo host for the pagination control.
///
/// Owns a controller drawing onto a [`TerminalSurface`] and plays the host's
/// part: page change notifications arrive on a channel, the requested page of
/// records is loaded, and only then is the controller told to move.
pub struct App {
    controller: PaginationController<TerminalSurface>,
    changes: mpsc::UnboundedReceiver<PageChange>,
    source: SyntheticRecords,
    records: RecordPage,
    field: JumpField,
    theme: Theme,
    settings: UserSettings,
    /// Where theme changes are persisted. `None` keeps them in memory.
    settings_path: Option<PathBuf>,
    mode: AppMode,
    message: Option<StatusMessage>,
    /// Pager row of the last frame, for mouse hit-testing.
    pager_area: Rect,
    needs_redraw: bool,
}

impl App {
    /// Create the app and load the first page.
    pub fn new(
        config: &TuiConfig,
        settings: UserSettings,
        settings_path: Option<PathBuf>,
    ) -> AppResult<Self> {
        let page_size = config.page_size.unwrap_or(settings.page_size);
        let nav_page_number = config.nav_page_number.unwrap_or(settings.nav_page_number);
        let variant = config.theme.unwrap_or(settings.theme);

        // Nothing is loaded yet, so the control starts out empty.
        let pagination = PaginationConfig::builder()
            .page_size(page_size)
            .min_page_number(config.min_page_number)
            .nav_page_number(nav_page_number)
            .build()
            .map_err(ConfigError::from)?;

        let (tx, changes) = mpsc::unbounded_channel();
        let mut controller = PaginationController::new(TerminalSurface::new(), pagination);
        controller.set_on_page_change(move |change| {
            // The receiver lives as long as the app.
            let _ = tx.send(change);
        });

        let mut app = Self {
            controller,
            changes,
            source: SyntheticRecords::new(config.total),
            records: RecordPage::default(),
            field: JumpField::new(),
            theme: Theme::from_variant(variant),
            settings,
            settings_path,
            mode: AppMode::Normal,
            message: None,
            pager_area: AppLayout::new(Rect::new(0, 0, 80, 24)).pager,
            needs_redraw: true,
        };
        app.load_page(config.min_page_number.max(1));
        Ok(app)
    }

    /// Run the application with async event loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<()> {
        let period = Duration::from_millis(TICK_INTERVAL_MS);
        let mut interval = tokio::time::interval(period);
        let mut events = EventStream::new();

        while self.mode != AppMode::Quit {
            if self.needs_redraw {
                terminal.draw(|frame| self.draw_frame(frame))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased;

                Some(Ok(event)) = events.next() => {
                    self.handle_event(event);
                    self.needs_redraw = true;
                }

                Some(change) = self.changes.recv() => {
                    self.handle_page_change(change);
                    self.needs_redraw = true;
                }

                _ = interval.tick() => {
                    self.tick();
                }
            }
        }

        Ok(())
    }

    /// Route a terminal event by mode.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                match self.mode {
                    AppMode::Jumping => self.handle_jump_key(key_event),
                    _ => self.handle_action(KeyAction::from_key_event(key_event)),
                }
            }
            Event::Mouse(mouse_event) => self.handle_mouse(mouse_event),
            _ => {}
        }
    }

    /// Handle a key action.
    pub(crate) fn handle_action(&mut self, action: KeyAction) {
        if self.mode == AppMode::Help {
            match action {
                KeyAction::ToggleHelp | KeyAction::Cancel => self.mode = AppMode::Normal,
                KeyAction::Quit | KeyAction::ForceQuit => self.mode = AppMode::Quit,
                _ => {}
            }
            return;
        }

        match action {
            KeyAction::Quit | KeyAction::ForceQuit => self.mode = AppMode::Quit,
            KeyAction::PrevPage => self.activate(ItemKind::Prev),
            KeyAction::NextPage => self.activate(ItemKind::Next),
            KeyAction::Total => self.activate(ItemKind::Total),
            KeyAction::FocusJump => self.focus_jump(),
            KeyAction::JumpDigit(c) => {
                self.focus_jump();
                if self.mode == AppMode::Jumping && self.field.insert(c) {
                    self.controller.set_jump_input(self.field.buffer());
                }
            }
            KeyAction::ToggleHelp => self.mode = AppMode::Help,
            KeyAction::ToggleTheme => self.toggle_theme(),
            KeyAction::Refresh => {
                let snapshot = self.controller.refresh_and_notify();
                debug!(page = snapshot.page_number, "refresh requested");
            }
            KeyAction::Cancel => self.message = None,
            KeyAction::None => {}
        }
    }

    /// Handle a key while the jump input has focus.
    pub fn handle_jump_key(&mut self, key: KeyEvent) {
        match self.field.handle_key(key) {
            InputResult::Changed => self.controller.set_jump_input(self.field.buffer()),
            InputResult::Submit => {
                let outcome = self.controller.submit_jump();
                self.report(outcome);
            }
            InputResult::Cancel => self.leave_jump(),
            InputResult::Continue => {}
        }
    }

    /// Activate whatever was drawn under a left click.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        let Some((column, row)) = left_click(event) else {
            return;
        };
        if self.mode == AppMode::Help {
            return;
        }

        let Some(view) = self.controller.surface().view() else {
            return;
        };
        match PagerLayout::compute(view, self.pager_area).hit(column, row) {
            Some(Hit::Item(kind)) => self.activate(kind),
            Some(Hit::JumpInput) => self.focus_jump(),
            None if self.mode == AppMode::Jumping => self.leave_jump(),
            None => {}
        }
    }

    /// Deliver queued page change notifications without waiting.
    pub fn process_pending_changes(&mut self) {
        while let Ok(change) = self.changes.try_recv() {
            self.handle_page_change(change);
        }
    }

    /// Load the requested page, then commit it to the control.
    fn handle_page_change(&mut self, change: PageChange) {
        debug!(
            new_page = change.new_page,
            old_page = ?change.old_page,
            page_size = change.page_size,
            "loading requested page"
        );
        self.load_page_sized(change.new_page, change.page_size);
    }

    fn load_page(&mut self, page_number: u64) {
        let page_size = self.controller.page_size();
        self.load_page_sized(page_number, page_size);
    }

    fn load_page_sized(&mut self, page_number: u64, page_size: u64) {
        self.records = self.source.fetch(page_number, page_size);
        let snapshot = self.controller.goto_page(PageRequest::new(
            page_number,
            self.source.total(),
            page_size,
        ));

        // A render empties the jump input.
        self.field.clear();
        if self.mode == AppMode::Jumping && !self.controller.jump_focused() {
            self.mode = AppMode::Normal;
        }

        if snapshot.page_number != self.records.page_number {
            self.records = self.source.fetch(snapshot.page_number, snapshot.page_size);
        }
        self.needs_redraw = true;
    }

    fn activate(&mut self, kind: ItemKind) {
        let outcome = self.controller.activate(kind);
        self.report(outcome);
    }

    fn report(&mut self, outcome: NavOutcome) {
        match outcome {
            NavOutcome::Accepted(change) => {
                self.set_message(true, format!("Loading page {}", change.new_page));
            }
            NavOutcome::Rejected(rejection) => {
                self.set_message(false, rejection.to_string());
            }
            NavOutcome::Ignored => {}
        }
    }

    fn focus_jump(&mut self) {
        self.controller.set_jump_focused(true);
        if self.controller.jump_focused() {
            self.mode = AppMode::Jumping;
        } else {
            self.set_message(false, "No pages to jump to".to_string());
        }
    }

    fn leave_jump(&mut self) {
        self.controller.set_jump_focused(false);
        self.mode = AppMode::Normal;
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.settings.theme = self.theme.variant;

        if let Some(path) = &self.settings_path {
            if let Err(err) = self.settings.save_to(path) {
                warn!(%err, path = %path.display(), "failed to save settings");
                self.set_message(false, format!("Could not save settings: {err}"));
            }
        }
    }

    fn set_message(&mut self, success: bool, text: String) {
        self.message = Some(StatusMessage {
            success,
            text,
            ticks_left: MESSAGE_TICKS,
        });
    }

    fn tick(&mut self) {
        if let Some(message) = &mut self.message {
            message.ticks_left = message.ticks_left.saturating_sub(1);
            if message.ticks_left == 0 {
                self.message = None;
                self.needs_redraw = true;
            }
        }
    }

    /// Draw a frame and remember where the pager landed.
    fn draw_frame(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.pager_area = AppLayout::new(area).pager;
        frame.render_widget(&*self, area);
    }

    /// Record the screen size used for mouse hit-testing.
    pub fn resize(&mut self, area: Rect) {
        self.pager_area = AppLayout::new(area).pager;
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn controller(&self) -> &PaginationController<TerminalSurface> {
        &self.controller
    }

    pub fn records(&self) -> &RecordPage {
        &self.records
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    /// Text in the jump input as the user sees it.
    pub fn jump_text(&self) -> &str {
        self.field.buffer()
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ctx = RenderContext {
            mode: self.mode,
            theme: &self.theme,
            view: self.controller.surface().view(),
            records: &self.records,
            jump: JumpDisplay {
                text: self.field.buffer(),
                cursor: self.field.cursor(),
                focused: self.mode == AppMode::Jumping,
            },
            page_size: self.controller.page_size(),
            message: self.message.as_ref(),
        };

        render_app(&ctx, area, buf);
    }
}
