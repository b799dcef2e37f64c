//! Pagination controller.
//!
//! Owns the pagination state and the surface the control is drawn on,
//! renders through the window calculator, and turns user interactions into
//! change notifications.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PaginationConfig;
use crate::error::Rejection;
use crate::intent::{NavIntent, resolve_target, validate_target};
use crate::request::{PageRequest, PaginationState};
use crate::view::{ItemKind, PageView};
use crate::window::compute_window;

/// Where a controller draws its control.
///
/// The controller owns its surface exclusively from construction until
/// [`PaginationController::destroy`].
pub trait PageSurface {
    /// Replace the surface content with `view`.
    fn mount(&mut self, view: &PageView);

    /// Remove the control from the surface.
    fn unmount(&mut self);
}

/// A requested page change, sent to the host.
///
/// The page is only requested; the host commits it with
/// [`PaginationController::goto_page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageChange {
    pub new_page: u64,
    pub page_size: u64,
    /// Page active when the interaction happened.
    pub old_page: Option<u64>,
}

/// State after a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub page_number: u64,
    pub total: u64,
    pub page_size: u64,
}

/// Result of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// The host was notified.
    Accepted(PageChange),
    /// The target was invalid; nothing happened.
    Rejected(Rejection),
    /// The interaction is not a navigation (e.g. a disabled control).
    Ignored,
}

impl NavOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

type ChangeHandler = Box<dyn FnMut(PageChange)>;

/// Stateful pagination control.
pub struct PaginationController<S: PageSurface> {
    state: PaginationState,
    view: PageView,
    surface: S,
    on_page_change: Option<ChangeHandler>,
    jump_input: String,
    jump_focused: bool,
}

impl<S: PageSurface> PaginationController<S> {
    /// Take over `surface` and render the initial state onto it.
    pub fn new(surface: S, config: PaginationConfig) -> Self {
        let state = PaginationState::from(&config);
        let mut controller = Self {
            view: PageView {
                page_number: state.page_number,
                last_page: 0,
                items: Vec::new(),
            },
            state,
            surface,
            on_page_change: None,
            jump_input: String::new(),
            jump_focused: false,
        };
        controller.render(PageRequest::default());
        controller
    }

    /// Set the page, total and page size and re-render.
    ///
    /// Omitted fields keep their current value. The page is clamped into the
    /// valid range. Never notifies the host.
    pub fn goto_page(&mut self, request: PageRequest) -> PageSnapshot {
        self.render(request)
    }

    /// Re-render the current state.
    ///
    /// Unless `trigger` is false, the host is notified with the current page
    /// as both the new and the old page.
    pub fn refresh(&mut self, trigger: bool) -> PageSnapshot {
        let snapshot = self.render(PageRequest::default());
        if trigger {
            self.notify(PageChange {
                new_page: snapshot.page_number,
                page_size: snapshot.page_size,
                old_page: Some(snapshot.page_number),
            });
        }
        snapshot
    }

    /// [`refresh`](Self::refresh) with notification.
    pub fn refresh_and_notify(&mut self) -> PageSnapshot {
        self.refresh(true)
    }

    /// Install the page change handler, replacing any previous one.
    pub fn set_on_page_change(&mut self, handler: impl FnMut(PageChange) + 'static) {
        self.on_page_change = Some(Box::new(handler));
    }

    /// Remove the page change handler.
    pub fn clear_on_page_change(&mut self) {
        self.on_page_change = None;
    }

    /// Handle a navigation intent.
    ///
    /// The old page is read from the last rendered view. Accepted targets are
    /// passed to the host; state is left alone either way.
    pub fn dispatch(&mut self, intent: NavIntent) -> NavOutcome {
        let old_page = self.view.active_page();
        let candidate = resolve_target(&intent, old_page);

        match validate_target(candidate, self.view.last_page) {
            Ok(new_page) => {
                let change = PageChange {
                    new_page,
                    page_size: self.state.page_size,
                    old_page,
                };
                debug!(%intent, new_page, ?old_page, "page change requested");
                self.notify(change);
                NavOutcome::Accepted(change)
            }
            Err(rejection) => {
                debug!(%intent, ?candidate, %rejection, "navigation rejected");
                NavOutcome::Rejected(rejection)
            }
        }
    }

    /// Activate a rendered control.
    ///
    /// Disabled controls and controls not in the current view are ignored.
    /// `Go` reads the jump input.
    pub fn activate(&mut self, kind: ItemKind) -> NavOutcome {
        match self.view.item(kind) {
            Some(item) if !item.disabled => {
                let intent = kind.intent(&self.jump_input);
                self.dispatch(intent)
            }
            Some(_) => {
                debug!(?kind, "ignored activation of disabled control");
                NavOutcome::Ignored
            }
            None => NavOutcome::Ignored,
        }
    }

    /// Handle a control by its label, as a markup front end sees it.
    pub fn activate_label(&mut self, label: &str) -> NavOutcome {
        match NavIntent::from_label(label, &self.jump_input) {
            Some(intent) => self.dispatch(intent),
            None => NavOutcome::Ignored,
        }
    }

    /// Submit the jump input, as pressing Enter in it does.
    ///
    /// Resolves like the Go control, then keeps the input focused so another
    /// page can be typed straight away.
    pub fn submit_jump(&mut self) -> NavOutcome {
        let outcome = self.activate(ItemKind::Go);
        self.set_jump_focused(true);
        outcome
    }

    /// Text in the jump input.
    pub fn jump_input(&self) -> &str {
        &self.jump_input
    }

    /// Replace the jump input text. Ignored while the input is disabled.
    pub fn set_jump_input(&mut self, text: impl Into<String>) {
        if self.view.jump_enabled() {
            self.jump_input = text.into();
        }
    }

    /// Whether the jump input has focus.
    pub fn jump_focused(&self) -> bool {
        self.jump_focused
    }

    /// Move focus into or out of the jump input.
    pub fn set_jump_focused(&mut self, focused: bool) {
        self.jump_focused = focused && self.view.jump_enabled();
    }

    pub fn page_number(&self) -> u64 {
        self.state.page_number
    }

    pub fn page_size(&self) -> u64 {
        self.state.page_size
    }

    pub fn total(&self) -> u64 {
        self.state.total
    }

    pub fn last_page(&self) -> u64 {
        self.state.last_page()
    }

    pub fn min_page_number(&self) -> u64 {
        self.state.min_page_number
    }

    pub fn nav_page_number(&self) -> u32 {
        self.state.nav_page_number
    }

    /// Set the page floor. Takes effect on the next render.
    pub fn set_min_page_number(&mut self, min_page_number: u64) {
        self.state.min_page_number = min_page_number.max(1);
    }

    /// Set the number of page links. Takes effect on the next render.
    pub fn set_nav_page_number(&mut self, nav_page_number: u32) {
        self.state.nav_page_number = nav_page_number;
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// The last rendered view.
    pub fn view(&self) -> &PageView {
        &self.view
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Tear the control down and hand the surface back, emptied.
    pub fn destroy(mut self) -> S {
        self.surface.unmount();
        debug!("pagination control destroyed");
        self.surface
    }

    fn render(&mut self, request: PageRequest) -> PageSnapshot {
        let resolved = request.resolve(&self.state);
        let window = compute_window(&resolved);
        self.view = PageView::from_window(&window);
        self.surface.mount(&self.view);

        // Fresh markup means a fresh, empty jump input.
        self.jump_input.clear();
        if !self.view.jump_enabled() {
            self.jump_focused = false;
        }

        self.state.page_number = window.page_number;
        self.state.total = resolved.total;
        self.state.page_size = resolved.page_size;

        debug!(
            page = window.page_number,
            last_page = window.last_page,
            pages = window.pages.len(),
            "rendered page window"
        );

        PageSnapshot {
            page_number: window.page_number,
            total: resolved.total,
            page_size: resolved.page_size,
        }
    }

    fn notify(&mut self, change: PageChange) {
        if let Some(handler) = self.on_page_change.as_mut() {
            handler(change);
        }
    }
}

impl<S: PageSurface + fmt::Debug> fmt::Debug for PaginationController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationController")
            .field("state", &self.state)
            .field("view", &self.view)
            .field("surface", &self.surface)
            .field("has_handler", &self.on_page_change.is_some())
            .field("jump_input", &self.jump_input)
            .finish()
    }
}
