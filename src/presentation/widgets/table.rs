use ratatui::{prelude::*, widgets::*};

use crate::{domain::content::TableData, presentation::config::Theme};

pub struct TableWidget<'a> {
    data: &'a TableData,
    theme: &'a Theme,
}

impl<'a> TableWidget<'a> {
    pub fn new(data: &'a TableData, theme: &'a Theme) -> Self {
        Self { data, theme }
    }
}

impl Widget for TableWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(self.data.headers.iter().copied()).style(self.theme.accent.bold());
        let rows = self
            .data
            .rows
            .iter()
            .map(|row| Row::new(row.iter().copied()).style(self.theme.text));
        let widths = vec![Constraint::Fill(1); self.data.headers.len()];

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.muted)
            .title(Span::styled(self.data.title, self.theme.title));
        Widget::render(
            Table::new(rows, widths).header(header).column_spacing(1).block(block),
            area,
            buf,
        );
    }
}
