//! Pager bar widget.
//!
//! Draws a [`PageView`] on a single line and maps mouse positions back to the
//! control under them. Drawing and hit-testing share [`PagerLayout`] so a
//! click always lands on what was drawn.

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use pagenav_core::{ItemKind, PageItem, PageView};

use crate::theme::Theme;

/// Width of the jump input box in cells.
pub const JUMP_INPUT_WIDTH: u16 = 6;

/// Gap between controls.
const GAP: u16 = 1;

/// Gap before the total indicator, separating it from the page list.
const GROUP_GAP: u16 = 3;

/// What a cell of the bar belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A clickable control.
    Item(ItemKind),
    /// The jump input box.
    JumpInput,
}

/// Screen placement of the bar's controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagerLayout {
    regions: Vec<(Rect, Hit)>,
}

impl PagerLayout {
    /// Lay out `view` on the first row of `area`.
    ///
    /// Controls that do not fit are left out.
    pub fn compute(view: &PageView, area: Rect) -> Self {
        let mut regions = Vec::with_capacity(view.items.len() + 1);
        if area.width == 0 || area.height == 0 {
            return Self { regions };
        }

        let right = area.x.saturating_add(area.width);
        let mut x = area.x;

        let mut place = |width: u16, hit: Hit, x: &mut u16| -> bool {
            if x.saturating_add(width) > right {
                return false;
            }
            regions.push((Rect::new(*x, area.y, width, 1), hit));
            *x = x.saturating_add(width);
            true
        };

        for item in &view.items {
            if item.kind == ItemKind::Total {
                x = x.saturating_add(GROUP_GAP.saturating_sub(GAP));
            }
            if item.kind == ItemKind::Go {
                if !place(JUMP_INPUT_WIDTH, Hit::JumpInput, &mut x) {
                    break;
                }
                x = x.saturating_add(GAP);
            }
            if !place(item_width(item), Hit::Item(item.kind), &mut x) {
                break;
            }
            x = x.saturating_add(GAP);
        }

        Self { regions }
    }

    /// The control at a screen cell.
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, hit)| *hit)
    }

    /// Placed regions in drawing order.
    pub fn regions(&self) -> &[(Rect, Hit)] {
        &self.regions
    }
}

/// Cells taken by a control: the label padded by one space on each side.
fn item_width(item: &PageItem) -> u16 {
    u16::try_from(item.label.width()).unwrap_or(u16::MAX).saturating_add(2)
}

/// Jump input contents as drawn by the bar.
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpDisplay<'a> {
    pub text: &'a str,
    pub cursor: usize,
    pub focused: bool,
}

/// Single-line pagination control.
pub struct PagerBar<'a> {
    view: &'a PageView,
    theme: &'a Theme,
    jump: JumpDisplay<'a>,
}

impl<'a> PagerBar<'a> {
    /// Create a bar for a rendered view.
    pub fn new(view: &'a PageView, theme: &'a Theme) -> Self {
        Self {
            view,
            theme,
            jump: JumpDisplay::default(),
        }
    }

    /// Show jump input contents.
    pub fn jump(mut self, jump: JumpDisplay<'a>) -> Self {
        self.jump = jump;
        self
    }

    fn item_style(&self, item: &PageItem) -> Style {
        if item.disabled {
            self.theme.page_disabled
        } else if item.active {
            self.theme.page_active
        } else {
            match item.kind {
                ItemKind::Page(_) => self.theme.page,
                ItemKind::Total => self.theme.total,
                ItemKind::Prev | ItemKind::Next | ItemKind::Go => self.theme.nav_button,
            }
        }
    }

    fn render_jump_input(&self, rect: Rect, buf: &mut Buffer) {
        let enabled = self.view.jump_enabled();
        let style = if !enabled {
            self.theme.page_disabled
        } else if self.jump.focused {
            self.theme.input_focused
        } else {
            self.theme.input
        };
        buf.set_style(rect, style);

        let max_visible = usize::from(rect.width.saturating_sub(1));
        let text = self.jump.text;
        let skip = text.chars().count().saturating_sub(max_visible);
        let visible: String = text.chars().skip(skip).collect();

        let mut spans = vec![Span::styled(visible, style)];
        if self.jump.focused && enabled {
            let cursor_in_view = self.jump.cursor.saturating_sub(skip);
            let before: String = spans[0].content.chars().take(cursor_in_view).collect();
            let at: String = spans[0].content.chars().skip(cursor_in_view).take(1).collect();
            let after: String = spans[0].content.chars().skip(cursor_in_view + 1).collect();
            let cursor = if at.is_empty() { " ".to_string() } else { at };
            spans = vec![
                Span::styled(before, style),
                Span::styled(cursor, style.patch(self.theme.input_cursor)),
                Span::styled(after, style),
            ];
        }
        buf.set_line(rect.x, rect.y, &Line::from(spans), rect.width);
    }
}

impl Widget for PagerBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = PagerLayout::compute(self.view, area);

        for (rect, hit) in layout.regions() {
            match hit {
                Hit::JumpInput => self.render_jump_input(*rect, buf),
                Hit::Item(kind) => {
                    let Some(item) = self.view.item(*kind) else {
                        continue;
                    };
                    let line = Line::from(Span::styled(
                        format!(" {} ", item.label),
                        self.item_style(item),
                    ));
                    buf.set_line(rect.x, rect.y, &line, rect.width);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagenav_core::{WindowRequest, compute_window};

    fn view(page_number: u64, total: u64) -> PageView {
        PageView::from_window(&compute_window(&WindowRequest {
            page_number,
            total,
            page_size: 20,
            min_page_number: 1,
            nav_page_number: 10,
        }))
    }

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_layout_order_and_hits() {
        let view = view(2, 60);
        let layout = PagerLayout::compute(&view, Rect::new(0, 0, 80, 1));

        // " Prev " occupies columns 0..6, then a gap, then " 1 ".
        assert_eq!(layout.hit(0, 0), Some(Hit::Item(ItemKind::Prev)));
        assert_eq!(layout.hit(5, 0), Some(Hit::Item(ItemKind::Prev)));
        assert_eq!(layout.hit(6, 0), None);
        assert_eq!(layout.hit(7, 0), Some(Hit::Item(ItemKind::Page(1))));
        assert_eq!(layout.hit(7, 1), None);

        let hits: Vec<Hit> = layout.regions().iter().map(|(_, hit)| *hit).collect();
        assert_eq!(
            hits,
            vec![
                Hit::Item(ItemKind::Prev),
                Hit::Item(ItemKind::Page(1)),
                Hit::Item(ItemKind::Page(2)),
                Hit::Item(ItemKind::Page(3)),
                Hit::Item(ItemKind::Next),
                Hit::Item(ItemKind::Total),
                Hit::JumpInput,
                Hit::Item(ItemKind::Go),
            ]
        );
    }

    #[test]
    fn test_layout_truncates_to_width() {
        let view = view(1, 500);
        let layout = PagerLayout::compute(&view, Rect::new(0, 0, 12, 1));
        assert_eq!(layout.regions().len(), 2);
        assert!(layout.regions().iter().all(|(rect, _)| rect.right() <= 12));
    }

    #[test]
    fn test_render_labels() {
        let view = view(1, 40);
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        let theme = Theme::dark();

        PagerBar::new(&view, &theme).render(area, &mut buf);

        let text = row_text(&buf, 60);
        assert!(text.starts_with(" Prev   1   2   Next "));
        assert!(text.contains("Total:2"));
        assert!(text.contains(" Go "));
    }

    #[test]
    fn test_active_page_is_highlighted() {
        let view = view(2, 60);
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        let theme = Theme::dark();

        PagerBar::new(&view, &theme).render(area, &mut buf);

        let layout = PagerLayout::compute(&view, area);
        let (rect, _) = layout
            .regions()
            .iter()
            .find(|(_, hit)| *hit == Hit::Item(ItemKind::Page(2)))
            .unwrap();
        assert_eq!(buf[(rect.x + 1, 0)].symbol(), "2");
        assert_eq!(buf[(rect.x + 1, 0)].bg, theme.page_active.bg.unwrap());
    }

    #[test]
    fn test_jump_text_is_drawn() {
        let view = view(1, 500);
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);
        let theme = Theme::dark();

        PagerBar::new(&view, &theme)
            .jump(JumpDisplay {
                text: "17",
                cursor: 2,
                focused: true,
            })
            .render(area, &mut buf);

        let layout = PagerLayout::compute(&view, area);
        let (rect, _) = layout
            .regions()
            .iter()
            .find(|(_, hit)| *hit == Hit::JumpInput)
            .unwrap();
        assert_eq!(buf[(rect.x, 0)].symbol(), "1");
        assert_eq!(buf[(rect.x + 1, 0)].symbol(), "7");
    }
}
