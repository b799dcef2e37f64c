//! Core types for pagenav.
//!
//! This crate holds everything about a pagination control that does not depend
//! on a UI toolkit: the page window calculation, the mutable pagination state,
//! navigation intents and their validation, the rendered view model, and the
//! controller that ties them together.
//!
//! # Usage
//!
//! ```rust
//! use pagenav_core::{HtmlSurface, NavIntent, NavOutcome, PageRequest, PaginationConfig, PaginationController};
//!
//! let mut pager = PaginationController::new(HtmlSurface::new(), PaginationConfig::default());
//! pager.goto_page(PageRequest::new(3, 500, 20));
//! assert_eq!(pager.last_page(), 25);
//!
//! // The host reacts to requested pages; the controller never commits them itself.
//! match pager.dispatch(NavIntent::Next) {
//!     NavOutcome::Accepted(change) => assert_eq!(change.new_page, 4),
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```

mod config;
mod controller;
mod error;
mod intent;
mod markup;
mod request;
mod view;
mod window;

pub use config::{PaginationConfig, PaginationConfigBuilder};
pub use controller::{NavOutcome, PageChange, PageSnapshot, PageSurface, PaginationController};
pub use error::{ConfigError, Rejection};
pub use intent::{NavIntent, parse_page_input, resolve_target, validate_target};
pub use markup::{HtmlSurface, PAGE_INPUT_CLASS, render_html};
pub use request::{PageRequest, PaginationState};
pub use view::{ItemKind, PageItem, PageView};
pub use window::{PageWindow, WindowRequest, compute_window, last_page};
