use ratatui::{prelude::*, widgets::*};

use crate::{domain::content::Flow, presentation::config::Theme};

/// Boxes joined by arrows, left to right
pub struct FlowWidget<'a> {
    flow: &'a Flow,
    theme: &'a Theme,
}

impl<'a> FlowWidget<'a> {
    pub fn new(flow: &'a Flow, theme: &'a Theme) -> Self {
        Self { flow, theme }
    }
}

impl Widget for FlowWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [title_area, steps_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        Line::styled(self.flow.title, self.theme.accent).render(title_area, buf);

        let steps = self.flow.steps;
        if steps.is_empty() {
            return;
        }
        let mut constraints = Vec::with_capacity(steps.len() * 2);
        for i in 0..steps.len() {
            if i > 0 {
                constraints.push(Constraint::Length(3));
            }
            constraints.push(Constraint::Fill(1));
        }
        let cells = Layout::horizontal(constraints).split(steps_area);

        for (i, step) in steps.iter().enumerate() {
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(self.theme.muted)
                .title(Span::styled(step.title, self.theme.title));
            Paragraph::new(step.description)
                .style(self.theme.text)
                .wrap(Wrap { trim: true })
                .block(block)
                .render(cells[i * 2], buf);

            if i + 1 < steps.len() {
                let gap = cells[i * 2 + 1];
                let middle = gap.y + gap.height.min(5) / 2;
                buf.set_string(gap.x + 1, middle, "→", self.theme.accent);
            }
        }
    }
}
