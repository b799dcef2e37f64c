//! pagenav - a page-window pagination control.
//!
//! Usage:
//!   pagenav                    Launch the interactive pager demo
//!   pagenav window             Print the page window for a position
//!   pagenav render             Print the control's HTML markup
//!   pagenav resolve <LABEL>    Resolve a click on a control
//!   pagenav --help             Show help

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use serde::Serialize;
use strum::Display;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pagenav_core::{
    ConfigError, HtmlSurface, NavOutcome, PageChange, PageWindow, PaginationConfig,
    PaginationController, WindowRequest, compute_window,
};
use pagenav_tui::{ThemeVariant, TuiConfig};

#[derive(Parser)]
#[command(
    name = "pagenav",
    version,
    about = "A page-window pagination control",
    long_about = "pagenav computes the window of page links shown around the current page \
                  and resolves clicks on them.\n\n\
                  Run `pagenav` to page through generated records in the terminal, or use \
                  subcommands to inspect the control."
)]
struct Cli {
    /// Records in the demo data set
    #[arg(long, default_value_t = pagenav_tui::app::DEFAULT_TOTAL)]
    total: u64,

    /// Records per page (defaults to the saved setting)
    #[arg(long)]
    page_size: Option<u64>,

    /// Number of page links (defaults to the saved setting)
    #[arg(long)]
    nav_pages: Option<u32>,

    /// Lowest page the control will show
    #[arg(long, default_value_t = 1)]
    min_page: u64,

    /// Color theme: dark or light
    #[arg(long)]
    theme: Option<ThemeVariant>,

    /// Log debug events to stderr (subcommands only)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the page window for a position
    Window {
        #[command(flatten)]
        position: Position,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the HTML markup of the control
    Render {
        #[command(flatten)]
        position: Position,
    },

    /// Resolve a click on a control label ("Prev", "Next", "Go", "Total:N" or a page number)
    Resolve {
        /// Label of the clicked control
        label: String,

        #[command(flatten)]
        position: Position,

        /// Text in the jump input when "Go" is clicked
        #[arg(short, long, default_value = "")]
        input: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

/// Where the control stands.
#[derive(Args, Debug, Clone, Copy)]
struct Position {
    /// Current page
    #[arg(short, long, default_value_t = 1)]
    page: u64,

    /// Total record count
    #[arg(short, long)]
    total: u64,

    /// Records per page
    #[arg(short = 's', long, default_value_t = 20)]
    page_size: u64,

    /// Number of page links
    #[arg(short = 'n', long, default_value_t = 10)]
    nav_pages: u32,

    /// Lowest page the control will show
    #[arg(short, long, default_value_t = 1)]
    min_page: u64,
}

impl Position {
    /// Validate the settings the way a control would on construction.
    fn config(&self) -> Result<PaginationConfig> {
        PaginationConfig::builder()
            .page_number(self.page)
            .total(self.total)
            .page_size(self.page_size)
            .min_page_number(self.min_page)
            .nav_page_number(self.nav_pages)
            .build()
            .map_err(ConfigError::from)
            .context("Invalid pagination settings")
    }

    /// A control rendered at this position.
    fn controller(&self) -> Result<PaginationController<HtmlSurface>> {
        let config = self.config()?;
        Ok(PaginationController::new(HtmlSurface::new(), config))
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How a click was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
enum Resolution {
    Accepted,
    Rejected,
    Ignored,
}

#[derive(Debug, Serialize)]
struct ResolveReport {
    resolution: Resolution,
    #[serde(skip_serializing_if = "Option::is_none")]
    change: Option<PageChange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl From<NavOutcome> for ResolveReport {
    fn from(outcome: NavOutcome) -> Self {
        match outcome {
            NavOutcome::Accepted(change) => Self {
                resolution: Resolution::Accepted,
                change: Some(change),
                reason: None,
            },
            NavOutcome::Rejected(rejection) => Self {
                resolution: Resolution::Rejected,
                change: None,
                reason: Some(rejection.to_string()),
            },
            NavOutcome::Ignored => Self {
                resolution: Resolution::Ignored,
                change: None,
                reason: None,
            },
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Window { position, format }) => {
            init_logging(cli.verbose);
            run_window(&position, format)?;
        }
        Some(Command::Render { position }) => {
            init_logging(cli.verbose);
            run_render(&position)?;
        }
        Some(Command::Resolve {
            label,
            position,
            input,
            format,
        }) => {
            init_logging(cli.verbose);
            run_resolve(&label, &position, &input, format)?;
        }
        None => {
            // Launch TUI; the terminal belongs to ratatui, so no log output.
            let mut config = TuiConfig::new(cli.total).with_min_page_number(cli.min_page);
            if let Some(page_size) = cli.page_size {
                config = config.with_page_size(page_size);
            }
            if let Some(nav_pages) = cli.nav_pages {
                config = config.with_nav_page_number(nav_pages);
            }
            if let Some(theme) = cli.theme {
                config = config.with_theme(theme);
            }
            pagenav_tui::run(config)?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber honoring `RUST_LOG`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Print the page window for a position.
fn run_window(position: &Position, format: OutputFormat) -> Result<()> {
    let config = position.config()?;
    let window = compute_window(&WindowRequest {
        page_number: config.page_number,
        total: config.total,
        page_size: config.page_size,
        min_page_number: config.min_page_number,
        nav_page_number: config.nav_page_number,
    });
    debug!(page = window.page_number, last_page = window.last_page, "computed window");

    match format {
        OutputFormat::Text => println!("{}", format_window(&window)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&window)?),
    }

    Ok(())
}

/// One line per window: the links with the current page bracketed.
fn format_window(window: &PageWindow) -> String {
    if window.is_empty() {
        return "no pages".to_string();
    }

    let links: Vec<String> = window
        .pages
        .iter()
        .map(|&page| {
            if page == window.page_number {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect();

    format!(
        "page {} of {}: {}",
        window.page_number,
        window.last_page,
        links.join(" ")
    )
}

/// Print the control's markup.
fn run_render(position: &Position) -> Result<()> {
    let pager = position.controller()?;
    println!("{}", pager.surface().html());
    Ok(())
}

/// Resolve a click on a control label.
fn run_resolve(label: &str, position: &Position, input: &str, format: OutputFormat) -> Result<()> {
    let mut pager = position.controller()?;
    pager.set_jump_input(input);
    let report = ResolveReport::from(pager.activate_label(label));

    match format {
        OutputFormat::Text => match (&report.change, &report.reason) {
            (Some(change), _) => {
                let old = change
                    .old_page
                    .map_or_else(|| "none".to_string(), |page| page.to_string());
                println!(
                    "{}: page {} (from {old}, {} per page)",
                    report.resolution, change.new_page, change.page_size
                );
            }
            (None, Some(reason)) => println!("{}: {reason}", report.resolution),
            (None, None) => println!("{}", report.resolution),
        },
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
