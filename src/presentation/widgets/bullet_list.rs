use ratatui::{prelude::*, widgets::*};

use crate::{domain::text, presentation::config::Theme};

/// Default slide body: one bullet per point, later points indented a step
pub struct BulletList<'a> {
    points: &'a [String],
    theme: &'a Theme,
}

impl<'a> BulletList<'a> {
    pub fn new(points: &'a [String], theme: &'a Theme) -> Self {
        Self { points, theme }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        self.points
            .iter()
            .enumerate()
            .flat_map(|(i, point)| {
                // staggered: every other bullet shifts right by two columns
                let indent = if i % 2 == 1 { "    " } else { "  " };
                [
                    Line::from(vec![
                        Span::raw(indent),
                        Span::styled("• ", self.theme.accent),
                        Span::styled(text::sanitize(point), self.theme.text),
                    ]),
                    Line::default(),
                ]
            })
            .collect()
    }
}

impl Widget for BulletList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.points.is_empty() {
            return;
        }
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
