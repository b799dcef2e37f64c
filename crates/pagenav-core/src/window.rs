//! Page window calculation.
//!
//! Picks the run of page numbers shown around the current page. The window is
//! centred on the current page and shifted inward when it touches either end
//! of the page range.

use serde::{Deserialize, Serialize};

/// Fully resolved inputs for a window calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRequest {
    /// Requested page (clamped before use).
    pub page_number: u64,
    /// Total record count.
    pub total: u64,
    /// Records per page. Must be non-zero.
    pub page_size: u64,
    /// Floor for the current page.
    pub min_page_number: u64,
    /// Number of page links shown around the current page.
    pub nav_page_number: u32,
}

/// Result of a window calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    /// Validated current page.
    pub page_number: u64,
    /// Highest valid page, 0 when there are no records.
    pub last_page: u64,
    /// Contiguous ascending page numbers to display.
    pub pages: Vec<u64>,
}

impl PageWindow {
    /// Whether there is nothing to page through.
    pub fn is_empty(&self) -> bool {
        self.last_page == 0
    }

    /// Whether the current page is one of the displayed pages.
    pub fn shows_current(&self) -> bool {
        self.pages.contains(&self.page_number)
    }
}

/// Number of pages needed for `total` records, `ceil(total / page_size)`.
///
/// A zero page size yields 0 pages.
pub fn last_page(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Compute the page window for a request.
///
/// Pure and deterministic. All arithmetic runs in half-page units so that an
/// odd `nav_page_number` (whose half is fractional) is handled exactly; the
/// bounds are rounded up at the end.
pub fn compute_window(req: &WindowRequest) -> PageWindow {
    let last = last_page(req.total, req.page_size);
    let page = req.page_number.min(last).max(req.min_page_number);

    let last2 = i128::from(last) * 2;
    let page2 = i128::from(page) * 2;
    let nav = i128::from(req.nav_page_number);
    // `nav` doubles as the half-window measured in half-pages.
    let span2 = nav * 2;

    let mut start2 = (page2 - nav).max(2);
    let mut end2 = (page2 + nav).min(last2);

    if end2 - start2 != span2 {
        if page2 - start2 < nav {
            end2 = (start2 + span2).min(last2);
        } else if end2 - page2 < nav {
            start2 = (end2 - span2).max(2);
        }
    }

    let start = ceil_half(start2);
    let end = ceil_half(end2);

    let pages = if start <= end {
        (start..=end).filter_map(|p| u64::try_from(p).ok()).collect()
    } else {
        Vec::new()
    };

    PageWindow {
        page_number: page,
        last_page: last,
        pages,
    }
}

/// Round a half-page quantity up to a whole page.
fn ceil_half(value2: i128) -> i128 {
    value2.div_euclid(2) + value2.rem_euclid(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(page_number: u64, total: u64, page_size: u64, nav: u32) -> WindowRequest {
        WindowRequest {
            page_number,
            total,
            page_size,
            min_page_number: 1,
            nav_page_number: nav,
        }
    }

    #[test]
    fn test_last_page_rounds_up() {
        assert_eq!(last_page(500, 20), 25);
        assert_eq!(last_page(501, 20), 26);
        assert_eq!(last_page(0, 20), 0);
        assert_eq!(last_page(1, 20), 1);
        assert_eq!(last_page(10, 0), 0);
    }

    #[test]
    fn test_window_near_start_is_pushed_right() {
        let window = compute_window(&req(3, 500, 20, 10));
        assert_eq!(window.page_number, 3);
        assert_eq!(window.last_page, 25);
        assert_eq!(window.pages, (1..=11).collect::<Vec<_>>());
    }

    #[test]
    fn test_window_centred() {
        let window = compute_window(&req(13, 500, 20, 10));
        assert_eq!(window.pages, (8..=18).collect::<Vec<_>>());
    }

    #[test]
    fn test_window_near_end_is_pulled_left() {
        let window = compute_window(&req(25, 500, 20, 10));
        assert_eq!(window.pages, (15..=25).collect::<Vec<_>>());

        let window = compute_window(&req(24, 500, 20, 10));
        assert_eq!(window.pages, (15..=25).collect::<Vec<_>>());
    }

    #[test]
    fn test_odd_nav_count() {
        let window = compute_window(&req(13, 500, 20, 5));
        assert_eq!(window.pages, (11..=16).collect::<Vec<_>>());

        let window = compute_window(&req(1, 500, 20, 5));
        assert_eq!(window.pages, (1..=6).collect::<Vec<_>>());

        let window = compute_window(&req(25, 500, 20, 5));
        assert_eq!(window.pages, (20..=25).collect::<Vec<_>>());
    }

    #[test]
    fn test_fewer_pages_than_window() {
        let window = compute_window(&req(2, 50, 20, 10));
        assert_eq!(window.last_page, 3);
        assert_eq!(window.pages, vec![1, 2, 3]);
    }

    #[test]
    fn test_page_clamped_to_last() {
        let window = compute_window(&req(99, 500, 20, 10));
        assert_eq!(window.page_number, 25);
        assert!(window.shows_current());
    }

    #[test]
    fn test_empty_result_set() {
        let window = compute_window(&req(1, 0, 20, 10));
        assert_eq!(window.page_number, 1);
        assert_eq!(window.last_page, 0);
        assert!(window.pages.is_empty());
        assert!(window.is_empty());

        let window = compute_window(&req(7, 0, 20, 0));
        assert_eq!(window.page_number, 1);
        assert!(window.pages.is_empty());
    }

    #[test]
    fn test_min_page_above_last_page() {
        let window = compute_window(&WindowRequest {
            page_number: 1,
            total: 50,
            page_size: 20,
            min_page_number: 5,
            nav_page_number: 10,
        });
        assert_eq!(window.page_number, 5);
        assert_eq!(window.pages, vec![1, 2, 3]);
        assert!(!window.shows_current());
    }

    #[test]
    fn test_zero_nav_shows_only_current() {
        let window = compute_window(&req(4, 500, 20, 0));
        assert_eq!(window.pages, vec![4]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let window = compute_window(&req(1, 40, 20, 10));
        let json = serde_json::to_string(&window).unwrap();
        assert_eq!(json, r#"{"pageNumber":1,"lastPage":2,"pages":[1,2]}"#);
    }
}
