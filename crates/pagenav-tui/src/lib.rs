//! Terminal front end for pagenav.
//!
//! Hosts a [`pagenav_core::PaginationController`] in a ratatui application
//! over a synthetic record set. The app plays the host's part of the
//! contract: page change notifications arrive on a channel, the requested
//! page of records is loaded, then the controller is told to move.
//!
//! # Usage
//!
//! ```rust,no_run
//! use pagenav_tui::TuiConfig;
//!
//! // Page through 1000 generated records, 25 at a time
//! pagenav_tui::run(TuiConfig::new(1000).with_page_size(25)).unwrap();
//! ```
//!
//! # Keyboard Navigation
//!
//! - `h`/`l` or arrows - Previous/next page
//! - `t` - Reload the current page through the total indicator
//! - `g` or a digit - Type a page number, `Enter` to go
//! - `r` - Refresh
//! - `T` - Toggle theme
//! - `?` - Help
//! - `q` - Quit

pub mod app;
mod event;
mod surface;
mod theme;
mod ui;

use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

pub use app::{App, AppResult};
pub use surface::TerminalSurface;
pub use theme::{Theme, ThemeVariant};

use app::state::UserSettings;

/// Startup options for the TUI.
///
/// Unset options fall back to the saved user settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuiConfig {
    /// Records in the demo source.
    pub total: u64,
    pub page_size: Option<u64>,
    pub nav_page_number: Option<u32>,
    pub min_page_number: u64,
    pub theme: Option<ThemeVariant>,
}

impl TuiConfig {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            page_size: None,
            nav_page_number: None,
            min_page_number: 1,
            theme: None,
        }
    }

    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_nav_page_number(mut self, nav_page_number: u32) -> Self {
        self.nav_page_number = Some(nav_page_number);
        self
    }

    pub fn with_min_page_number(mut self, min_page_number: u64) -> Self {
        self.min_page_number = min_page_number;
        self
    }

    pub fn with_theme(mut self, theme: ThemeVariant) -> Self {
        self.theme = Some(theme);
        self
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self::new(app::DEFAULT_TOTAL)
    }
}

/// Run the TUI application.
pub fn run(config: TuiConfig) -> AppResult<()> {
    let settings_path = UserSettings::config_path();
    let settings = UserSettings::load();
    let app = App::new(&config, settings, settings_path)?;

    // Create tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new()?;

    let terminal = ratatui::init();
    if let Err(err) = execute!(stdout(), EnableMouseCapture) {
        ratatui::restore();
        return Err(err.into());
    }

    let result = rt.block_on(app.run(terminal));
    let released = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();

    result?;
    released?;
    Ok(())
}
