//! Rendered view model.
//!
//! A [`PageView`] is what a front end draws: the ordered controls with their
//! active and disabled flags. It is rebuilt from a [`PageWindow`] on every
//! render and is the source of the "old page" at interaction time.

use serde::{Deserialize, Serialize};

use crate::intent::NavIntent;
use crate::window::PageWindow;

/// Kind of a rendered control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Prev,
    Page(u64),
    Next,
    /// Total indicator, labelled with the last page.
    Total,
    /// Button that submits the jump input.
    Go,
}

impl ItemKind {
    /// The intent produced by activating this control.
    ///
    /// `jump_text` is the current content of the jump input and is only used
    /// by [`ItemKind::Go`].
    pub fn intent(&self, jump_text: &str) -> NavIntent {
        match self {
            Self::Prev => NavIntent::Prev,
            Self::Next => NavIntent::Next,
            Self::Page(page) => NavIntent::Page(i64::try_from(*page).unwrap_or(i64::MAX)),
            Self::Total => NavIntent::Total,
            Self::Go => NavIntent::Go(jump_text.to_string()),
        }
    }
}

/// One rendered control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageItem {
    pub kind: ItemKind,
    pub label: String,
    /// Marks the current page.
    pub active: bool,
    /// Disabled controls ignore activation.
    pub disabled: bool,
}

impl PageItem {
    fn new(kind: ItemKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            active: false,
            disabled: false,
        }
    }

    fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// The full rendered control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    pub page_number: u64,
    pub last_page: u64,
    pub items: Vec<PageItem>,
}

impl PageView {
    /// Build the controls for a computed window.
    pub fn from_window(window: &PageWindow) -> Self {
        let page = window.page_number;
        let last = window.last_page;
        let empty = window.is_empty();

        let mut items = Vec::with_capacity(window.pages.len() + 4);
        items.push(PageItem::new(ItemKind::Prev, "Prev").disabled(page <= 1));
        items.extend(window.pages.iter().map(|&number| {
            PageItem::new(ItemKind::Page(number), number.to_string()).active(number == page)
        }));
        items.push(PageItem::new(ItemKind::Next, "Next").disabled(page >= last));
        items.push(PageItem::new(ItemKind::Total, format!("Total:{last}")).disabled(empty));
        items.push(PageItem::new(ItemKind::Go, "Go").disabled(empty));

        Self {
            page_number: page,
            last_page: last,
            items,
        }
    }

    /// The page marked active, if any.
    pub fn active_page(&self) -> Option<u64> {
        self.items.iter().find_map(|item| match item.kind {
            ItemKind::Page(number) if item.active => Some(number),
            _ => None,
        })
    }

    /// Displayed page numbers in order.
    pub fn pages(&self) -> impl Iterator<Item = u64> + '_ {
        self.items.iter().filter_map(|item| match item.kind {
            ItemKind::Page(number) => Some(number),
            _ => None,
        })
    }

    /// Look up the rendered control of a kind.
    pub fn item(&self, kind: ItemKind) -> Option<&PageItem> {
        self.items.iter().find(|item| item.kind == kind)
    }

    /// Whether the jump input accepts text.
    pub fn jump_enabled(&self) -> bool {
        self.item(ItemKind::Go).is_some_and(|item| !item.disabled)
    }
}
