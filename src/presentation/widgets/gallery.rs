use ratatui::{prelude::*, widgets::*};

use crate::{
    model::gallery::{FeatureGallery, SortMetric},
    presentation::config::Theme,
};

const BAR_WIDTH: usize = 20;

/// Core features as cards in a grid, sorted by the selected metric
pub struct GalleryWidget<'a> {
    gallery: &'a FeatureGallery,
    theme: &'a Theme,
}

impl<'a> GalleryWidget<'a> {
    pub fn new(gallery: &'a FeatureGallery, theme: &'a Theme) -> Self {
        Self { gallery, theme }
    }

    fn header(&self) -> Line<'static> {
        let mut spans = vec![Span::styled("Sort by (t) ", self.theme.muted)];
        for metric in [SortMetric::Binary, SortMetric::Multi] {
            let style = if metric == self.gallery.metric() {
                self.theme.selected
            } else {
                self.theme.text
            };
            spans.push(Span::styled(format!(" {metric} "), style));
        }
        Line::from(spans)
    }
}

impl Widget for GalleryWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header, grid, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        self.header().render(header, buf);
        Line::styled(self.gallery.footer(), self.theme.muted).render(footer, buf);

        let features = self.gallery.features();
        let columns = if grid.width >= 90 { 3 } else { 2 };
        let rows = features.len().div_ceil(columns);
        let row_areas = Layout::vertical(vec![Constraint::Length(4); rows]).split(grid);
        let metric = self.gallery.metric();

        for (chunk, row_area) in features.chunks(columns).zip(row_areas.iter()) {
            let cells = Layout::horizontal(vec![Constraint::Fill(1); columns]).split(*row_area);
            for (feature, cell) in chunk.iter().zip(cells.iter()) {
                let importance = metric.importance(feature);
                let filled = (importance * BAR_WIDTH as f64 / 0.25).round() as usize;
                let block = Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(self.theme.muted)
                    .title(Span::styled(feature.name, self.theme.title));
                Paragraph::new(vec![
                    Line::styled(feature.description, self.theme.text),
                    Line::from(vec![
                        Span::styled("█".repeat(filled.min(BAR_WIDTH)), self.theme.progress),
                        Span::styled(format!(" {importance:.2}"), self.theme.accent),
                    ]),
                ])
                .block(block)
                .render(*cell, buf);
            }
        }
    }
}
