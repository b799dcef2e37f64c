//! HTML markup for a rendered view.

use crate::controller::PageSurface;
use crate::view::{ItemKind, PageItem, PageView};

/// Class of the jump input element.
pub const PAGE_INPUT_CLASS: &str = "page-n";

const CONTROL_CLASS: &str = "pagination alternate page-control clearfix";

/// Render a view as the pagination control markup.
///
/// The page list (Prev, page numbers, Next) comes first, followed by the total
/// indicator and the jump input with its Go button.
pub fn render_html(view: &PageView) -> String {
    let mut pages = String::new();
    let mut extras = String::new();

    for item in &view.items {
        match item.kind {
            ItemKind::Prev | ItemKind::Page(_) | ItemKind::Next => {
                pages.push_str(&nav_item(item));
            }
            ItemKind::Total => extras.push_str(&total_item(item)),
            ItemKind::Go => extras.push_str(&jump_item(item)),
        }
    }

    format!(
        r#"<div class="{CONTROL_CLASS}"><ul class="pull-left">{pages}</ul><ul style="float:left;">{extras}</ul></div>"#
    )
}

fn state_class(item: &PageItem) -> &'static str {
    if item.disabled {
        "disabled"
    } else if item.active {
        "active"
    } else {
        ""
    }
}

fn nav_item(item: &PageItem) -> String {
    format!(
        r#"<li class="{}"><a href="javascript:;">{}</a></li>"#,
        state_class(item),
        item.label
    )
}

fn total_item(item: &PageItem) -> String {
    format!(
        r#"<li class="{}"><a href="javascript:;" style="margin-left:12px;" class="all-records">{}</a></li>"#,
        state_class(item),
        item.label
    )
}

fn jump_item(item: &PageItem) -> String {
    let class = state_class(item);
    let disabled = if item.disabled {
        r#"disabled="disabled" "#
    } else {
        ""
    };
    format!(
        r#"<li class="{class}"><div class="input-append"><input class="{PAGE_INPUT_CLASS}" {disabled}style="width:33px; padding:2px 4px;" type="text" /><a href="javascript:;" class="btn btn-small {class}">{}</a></div></li>"#,
        item.label
    )
}

/// A container that holds the control's markup.
///
/// Mounting overwrites whatever was there; the previous content is never
/// read. Unmounting empties it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlSurface {
    html: String,
    renders: usize,
}

impl HtmlSurface {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current markup.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Whether the container holds nothing.
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }

    /// Number of times markup was written.
    pub fn render_count(&self) -> usize {
        self.renders
    }
}

impl PageSurface for HtmlSurface {
    fn mount(&mut self, view: &PageView) {
        self.html = render_html(view);
        self.renders += 1;
    }

    fn unmount(&mut self) {
        self.html.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::{WindowRequest, compute_window};

    fn view(page_number: u64, total: u64) -> PageView {
        PageView::from_window(&compute_window(&WindowRequest {
            page_number,
            total,
            page_size: 20,
            min_page_number: 1,
            nav_page_number: 10,
        }))
    }

    #[test]
    fn test_render_page_list() {
        let html = render_html(&view(1, 40));
        assert!(html.starts_with(r#"<div class="pagination alternate page-control clearfix">"#));
        assert!(html.contains(
            r#"<ul class="pull-left"><li class="disabled"><a href="javascript:;">Prev</a></li><li class="active"><a href="javascript:;">1</a></li><li class=""><a href="javascript:;">2</a></li><li class=""><a href="javascript:;">Next</a></li></ul>"#
        ));
        assert!(html.contains(r#"class="all-records">Total:2</a>"#));
        assert!(!html.contains(r#"disabled="disabled""#));
        assert!(html.ends_with("</ul></div>"));
    }

    #[test]
    fn test_render_empty_disables_extras() {
        let html = render_html(&view(1, 0));
        assert!(html.contains(r#"<input class="page-n" disabled="disabled" style="#));
        assert!(html.contains(r#"class="btn btn-small disabled">Go</a>"#));
        assert!(html.contains(r#"<li class="disabled"><a href="javascript:;" style="margin-left:12px;" class="all-records">Total:0</a></li>"#));
    }

    #[test]
    fn test_surface_mount_and_unmount() {
        let mut surface = HtmlSurface::new();
        assert!(surface.is_empty());

        surface.mount(&view(2, 100));
        assert!(surface.html().contains(r#"<li class="active"><a href="javascript:;">2</a></li>"#));
        assert_eq!(surface.render_count(), 1);

        surface.unmount();
        assert!(surface.is_empty());
    }
}
