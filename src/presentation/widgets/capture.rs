use ratatui::{prelude::*, widgets::*};
use thousands::Separable;

use crate::{
    domain::content::CAPTURE_FACTS,
    model::capture::PacketCapture,
    presentation::{
        config::Theme,
        widgets::cards::{chips, StatRow, StatView},
    },
};

/// Packet capture leaf: counters, class balance and collection facts
pub struct CaptureWidget<'a> {
    capture: &'a PacketCapture,
    theme: &'a Theme,
}

impl<'a> CaptureWidget<'a> {
    pub fn new(capture: &'a PacketCapture, theme: &'a Theme) -> Self {
        Self { capture, theme }
    }

    fn counters(&self) -> Vec<StatView> {
        [
            ("Samples", self.capture.samples(), "labelled rows"),
            ("Attack Types", self.capture.attack_types(), "classes"),
            ("Features", self.capture.features(), "raw columns"),
        ]
        .into_iter()
        .map(|(label, count, sub)| StatView {
            label: label.to_string(),
            value: count.display().separate_with_commas(),
            sub: sub.to_string(),
        })
        .collect()
    }
}

impl Widget for CaptureWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [counters, balance, facts] = Layout::vertical([
            Constraint::Length(StatRow::height()),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(area);

        StatRow::new(self.counters(), self.theme).render(counters, buf);

        let normal = self.capture.normal_percent();
        Gauge::default()
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(self.theme.muted)
                    .title(Span::styled("Class balance", self.theme.text)),
            )
            .gauge_style(self.theme.ok.bg(self.theme.alert.fg.unwrap_or(Color::Red)))
            .percent(normal)
            .label(format!(
                "Normal {normal}%  ·  Attack {}%",
                self.capture.attack_percent()
            ))
            .render(balance, buf);

        let lines = CAPTURE_FACTS
            .iter()
            .map(|fact| {
                Line::from(vec![
                    Span::styled(format!("{}: ", fact.key), self.theme.muted),
                    Span::styled(fact.value, self.theme.text),
                ])
            })
            .chain(std::iter::once(chips(
                ["Deauth", "Evil Twin", "Rogue AP", "KRACK", "Re-Assoc", "SSDP"],
                self.theme.accent,
            )))
            .collect::<Vec<_>>();
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(facts, buf);
    }
}
