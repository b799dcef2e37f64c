//! Pagination state and partial page requests.

use serde::{Deserialize, Serialize};

use crate::config::PaginationConfig;
use crate::window::{WindowRequest, last_page};

/// Mutable state owned by a controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub page_number: u64,
    pub page_size: u64,
    pub total: u64,
    pub min_page_number: u64,
    pub nav_page_number: u32,
}

impl PaginationState {
    /// Highest valid page for the current total and page size.
    ///
    /// Always derived, never stored.
    pub fn last_page(&self) -> u64 {
        last_page(self.total, self.page_size)
    }
}

impl From<&PaginationConfig> for PaginationState {
    fn from(config: &PaginationConfig) -> Self {
        Self {
            page_number: config.page_number,
            page_size: config.page_size.max(1),
            total: config.total,
            min_page_number: config.min_page_number.max(1),
            nav_page_number: config.nav_page_number,
        }
    }
}

/// A page change where each field may be omitted.
///
/// Omitted fields keep the controller's current value, so
/// `PageRequest::default()` re-renders the current state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: Option<u64>,
    pub total: Option<u64>,
    pub page_size: Option<u64>,
}

impl PageRequest {
    /// A request with every field present.
    pub fn new(page_number: u64, total: u64, page_size: u64) -> Self {
        Self {
            page_number: Some(page_number),
            total: Some(total),
            page_size: Some(page_size),
        }
    }

    /// A request for a page, keeping total and page size.
    pub fn page(page_number: u64) -> Self {
        Self {
            page_number: Some(page_number),
            ..Self::default()
        }
    }

    /// Set the page number.
    pub fn with_page(mut self, page_number: u64) -> Self {
        self.page_number = Some(page_number);
        self
    }

    /// Set the total record count.
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Fill omitted fields from `state`.
    ///
    /// A zero page size is not usable for the ceiling division and falls back
    /// like an omitted one.
    pub fn resolve(&self, state: &PaginationState) -> WindowRequest {
        WindowRequest {
            page_number: self.page_number.unwrap_or(state.page_number),
            total: self.total.unwrap_or(state.total),
            page_size: self
                .page_size
                .filter(|&size| size > 0)
                .unwrap_or(state.page_size),
            min_page_number: state.min_page_number,
            nav_page_number: state.nav_page_number,
        }
    }
}
