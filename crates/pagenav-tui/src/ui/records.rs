//! Record list widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::app::records::RecordPage;
use crate::theme::Theme;

/// Bordered list of the records on the loaded page.
pub struct RecordList<'a> {
    page: &'a RecordPage,
    theme: &'a Theme,
}

impl<'a> RecordList<'a> {
    pub fn new(page: &'a RecordPage, theme: &'a Theme) -> Self {
        Self { page, theme }
    }
}

impl Widget for RecordList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.page.records.is_empty() {
            " Records ".to_string()
        } else {
            format!(
                " Records {}-{} of {} ",
                self.page.first_index + 1,
                self.page.first_index + self.page.records.len() as u64,
                self.page.total
            )
        };

        let block = Block::default()
            .title(title)
            .title_style(self.theme.title)
            .borders(Borders::ALL)
            .border_style(self.theme.border);

        let lines: Vec<Line> = if self.page.records.is_empty() {
            vec![Line::styled("  No records", self.theme.help_desc)]
        } else {
            let index_width = (self.page.first_index + self.page.records.len() as u64)
                .to_string()
                .len();
            self.page
                .records
                .iter()
                .enumerate()
                .map(|(i, record)| {
                    let index = self.page.first_index + i as u64 + 1;
                    Line::from(vec![
                        Span::styled(format!(" {index:>index_width$} "), self.theme.record_index),
                        Span::styled(record.as_str(), self.theme.record),
                    ])
                })
                .collect()
        };

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
