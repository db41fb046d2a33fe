use ratatui::{prelude::*, widgets::*};

use crate::{domain::content::DEMO_BANNER, model::live_demo::LiveDemo, presentation::config::Theme};

/// Terminal log that lights up line by line
pub struct LiveDemoWidget<'a> {
    demo: &'a LiveDemo,
    theme: &'a Theme,
}

impl<'a> LiveDemoWidget<'a> {
    pub fn new(demo: &'a LiveDemo, theme: &'a Theme) -> Self {
        Self { demo, theme }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        self.demo
            .lines()
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let style = if !self.demo.is_lit(i) {
                    self.theme.muted.add_modifier(Modifier::DIM)
                } else if line.contains("ATTACK") {
                    self.theme.alert
                } else if self.demo.is_current(i) {
                    self.theme.ok.add_modifier(Modifier::BOLD)
                } else {
                    self.theme.ok
                };
                let cursor = if self.demo.is_current(i) { "▌" } else { "" };
                Line::from(vec![Span::styled(*line, style), Span::styled(cursor, self.theme.ok)])
            })
            .collect()
    }
}

impl Widget for LiveDemoWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [terminal, banner] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.muted)
            .title(Span::styled(" live_detect ", self.theme.muted));
        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(terminal, buf);

        if self.demo.shows_banner() {
            Paragraph::new(DEMO_BANNER)
                .style(self.theme.title)
                .alignment(Alignment::Center)
                .block(
                    Block::bordered()
                        .border_type(BorderType::Double)
                        .border_style(self.theme.alert),
                )
                .render(banner, buf);
        }
    }
}
