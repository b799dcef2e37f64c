//! Application rendering.

use itertools::Itertools;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use pagenav_core::PageView;

use crate::theme::Theme;
use crate::ui::{AppLayout, HelpOverlay, JumpDisplay, PagerBar, RecordList};

use super::records::RecordPage;
use super::state::{AppMode, StatusMessage};

/// Render context containing all the state needed for rendering.
pub struct RenderContext<'a> {
    pub mode: AppMode,
    pub theme: &'a Theme,
    /// View mounted on the terminal surface.
    pub view: Option<&'a PageView>,
    pub records: &'a RecordPage,
    pub jump: JumpDisplay<'a>,
    pub page_size: u64,
    pub message: Option<&'a StatusMessage>,
}

/// Main render function for the application.
pub fn render_app(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    // Fill entire area with theme background color
    let base_style = Style::default()
        .bg(ctx.theme.background)
        .fg(ctx.theme.foreground);
    buf.set_style(area, base_style);

    let layout = AppLayout::new(area);

    render_header(ctx, layout.header, buf);
    RecordList::new(ctx.records, ctx.theme).render(layout.records, buf);
    if let Some(view) = ctx.view {
        PagerBar::new(view, ctx.theme)
            .jump(ctx.jump)
            .render(layout.pager, buf);
    }
    render_footer(ctx, layout.footer, buf);

    if ctx.mode == AppMode::Help {
        HelpOverlay::new(ctx.theme).render(area, buf);
    }
}

fn render_header(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let title = Span::styled(" pagenav ", ctx.theme.title.add_modifier(Modifier::BOLD));

    let stats = match ctx.view {
        Some(view) if view.last_page > 0 => [
            format!("page {} of {}", view.page_number, view.last_page),
            format!("{} records", ctx.records.total),
            format!("{} per page", ctx.page_size),
        ]
        .iter()
        .join(" · "),
        Some(_) => "no records".to_string(),
        None => String::new(),
    };
    let stats_span = Span::styled(format!(" {stats} "), ctx.theme.header);

    let status = match ctx.message {
        Some(message) => {
            let color = if message.success {
                ctx.theme.success
            } else {
                ctx.theme.warning
            };
            Span::styled(format!(" {} ", message.text), Style::default().fg(color))
        }
        None => Span::raw(""),
    };

    Paragraph::new(Line::from(vec![title, stats_span, status]))
        .style(ctx.theme.header)
        .render(area, buf);
}

fn render_footer(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let keys: Vec<(&str, &str)> = match ctx.mode {
        AppMode::Jumping => vec![("0-9", "Type"), ("Enter", "Go"), ("Esc", "Leave")],
        AppMode::Help => vec![("?/Esc", "Close")],
        AppMode::Normal | AppMode::Quit => vec![
            ("h/l", "Prev/Next"),
            ("t", "Total"),
            ("g", "Jump"),
            ("r", "Refresh"),
            ("T", "Theme"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
    };

    let separator = Span::styled("│", Style::default().fg(ctx.theme.muted));
    let groups = keys.iter().map(|(key, desc)| {
        vec![
            Span::styled(format!(" {key} "), ctx.theme.help_key),
            Span::styled(format!("{desc} "), ctx.theme.help_desc),
        ]
    });
    let spans: Vec<Span> = Itertools::intersperse(groups, vec![separator])
        .flatten()
        .collect();

    Paragraph::new(Line::from(spans))
        .style(ctx.theme.footer)
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagenav_core::{WindowRequest, compute_window};

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_render_full_screen() {
        let view = PageView::from_window(&compute_window(&WindowRequest {
            page_number: 2,
            total: 45,
            page_size: 20,
            min_page_number: 1,
            nav_page_number: 10,
        }));
        let records = RecordPage {
            page_number: 2,
            first_index: 20,
            total: 45,
            records: vec!["invoice #00021 (open)".to_string()],
        };
        let message = StatusMessage {
            success: false,
            text: "Page 9 is beyond the last page".to_string(),
            ticks_left: 3,
        };
        let theme = Theme::dark();
        let ctx = RenderContext {
            mode: AppMode::Normal,
            theme: &theme,
            view: Some(&view),
            records: &records,
            jump: JumpDisplay::default(),
            page_size: 20,
            message: Some(&message),
        };

        let area = Rect::new(0, 0, 100, 12);
        let mut buf = Buffer::empty(area);
        render_app(&ctx, area, &mut buf);

        let header = row(&buf, 0);
        assert!(header.contains("page 2 of 3"));
        assert!(header.contains("45 records"));
        assert!(header.contains("beyond the last page"));
        assert!(row(&buf, 1).contains("Records 21-21 of 45"));
        assert!(row(&buf, 10).contains("Total:3"));
        assert!(row(&buf, 11).contains("Prev/Next"));
    }

    #[test]
    fn test_jumping_footer() {
        let records = RecordPage::default();
        let theme = Theme::light();
        let ctx = RenderContext {
            mode: AppMode::Jumping,
            theme: &theme,
            view: None,
            records: &records,
            jump: JumpDisplay::default(),
            page_size: 20,
            message: None,
        };

        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);
        render_app(&ctx, area, &mut buf);

        assert!(row(&buf, 7).contains("Enter"));
        assert!(row(&buf, 7).contains("Leave"));
    }
}
