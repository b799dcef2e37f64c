//! UI components and widgets.

mod help;
mod pager_bar;
mod records;

pub use help::HelpOverlay;
pub use pager_bar::{Hit, JumpDisplay, PagerBar, PagerLayout};
pub use records::RecordList;

use ratatui::layout::{Constraint, Layout, Rect};

/// Layout areas for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub records: Rect,
    pub pager: Rect,
    pub footer: Rect,
}

impl AppLayout {
    /// Compute layout from terminal area.
    pub fn new(area: Rect) -> Self {
        // Vertical split: header, records, a padded pager row, footer
        let [header, records, _, pager, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            header,
            records,
            pager: Rect {
                x: pager.x.saturating_add(1),
                width: pager.width.saturating_sub(2),
                ..pager
            },
            footer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_rows() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.y, 0);
        assert_eq!(layout.footer.y, 23);
        assert_eq!(layout.pager.y, 22);
        assert_eq!(layout.pager.x, 1);
        assert_eq!(layout.pager.width, 78);
        assert_eq!(layout.records.height, 20);
    }
}
