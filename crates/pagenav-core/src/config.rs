//! Pagination configuration types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for a pagination control.
///
/// Holds the initial state and the window settings. `min_page_number` and
/// `nav_page_number` can also be changed on a live controller.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
#[serde(rename_all = "camelCase")]
pub struct PaginationConfig {
    /// Page shown on first render.
    #[builder(default = "1")]
    #[serde(default = "default_page_number")]
    pub page_number: u64,

    /// Records per page.
    #[builder(default = "20")]
    #[serde(default = "default_page_size")]
    pub page_size: u64,

    /// Total record count known at construction.
    #[builder(default = "0")]
    #[serde(default)]
    pub total: u64,

    /// Floor for the current page.
    #[builder(default = "1")]
    #[serde(default = "default_min_page_number")]
    pub min_page_number: u64,

    /// Number of page links shown around the current page.
    #[builder(default = "10")]
    #[serde(default = "default_nav_page_number")]
    pub nav_page_number: u32,
}

fn default_page_number() -> u64 {
    1
}

fn default_page_size() -> u64 {
    20
}

fn default_min_page_number() -> u64 {
    1
}

fn default_nav_page_number() -> u32 {
    10
}

impl PaginationConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.page_size == Some(0) {
            return Err(ConfigError::ZeroPageSize.to_string());
        }
        if self.min_page_number == Some(0) {
            return Err(ConfigError::ZeroMinPage.to_string());
        }
        Ok(())
    }
}

impl PaginationConfig {
    /// Create a new config builder.
    pub fn builder() -> PaginationConfigBuilder {
        PaginationConfigBuilder::default()
    }

    /// Check a config that did not come through the builder (e.g. deserialized).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.min_page_number == 0 {
            return Err(ConfigError::ZeroMinPage);
        }
        Ok(())
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_number: default_page_number(),
            page_size: default_page_size(),
            total: 0,
            min_page_number: default_min_page_number(),
            nav_page_number: default_nav_page_number(),
        }
    }
}
