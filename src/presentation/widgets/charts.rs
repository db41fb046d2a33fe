use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;

use crate::{
    domain::content::{
        ACCURACY_F1_CARDS, CHART_SUMMARY, CHART_TAKEAWAY, LATENCY_CARDS, TRAINING_DETAILS,
    },
    model::charts::{Charts, Mode, Panel, MULTI_CLASS_F1, MULTI_CLASS_LABELS},
    presentation::{
        config::Theme,
        widgets::{
            cards::StatRow,
            heatmap::{self, HeatmapWidget},
            roc::{threshold_lines, RocWidget},
        },
    },
};

/// Summary cards, mode and panel toggles, and the open panel
pub struct ChartsWidget<'a> {
    charts: &'a Charts,
    theme: &'a Theme,
}

impl<'a> ChartsWidget<'a> {
    pub fn new(charts: &'a Charts, theme: &'a Theme) -> Self {
        Self { charts, theme }
    }

    fn toggle<'s>(&self, label: String, active: bool, enabled: bool) -> Span<'s> {
        let style = if !enabled {
            self.theme.muted.add_modifier(Modifier::CROSSED_OUT)
        } else if active {
            self.theme.selected
        } else {
            self.theme.text
        };
        Span::styled(format!(" {label} "), style)
    }

    pub fn controls(&self) -> Line<'static> {
        let mode = self.charts.mode();
        let mut spans = vec![Span::styled("Mode ", self.theme.muted)];
        for m in [Mode::Binary, Mode::Multi] {
            spans.push(self.toggle(m.to_string(), m == mode, true));
        }
        spans.push(Span::styled("  Panels ", self.theme.muted));
        for (i, panel) in Panel::iter().enumerate() {
            spans.push(self.toggle(
                format!("{} {panel}", i + 1),
                self.charts.panel() == Some(panel),
                panel.is_available(mode),
            ));
        }
        Line::from(spans)
    }

    pub fn focus_chips(&self) -> Line<'static> {
        let mut spans = vec![Span::styled("Focus ([ ]) ", self.theme.muted)];
        for (i, (label, f1)) in MULTI_CLASS_LABELS.iter().zip(MULTI_CLASS_F1).enumerate() {
            let style = if self.charts.focus() == Some(i) {
                self.theme.selected
            } else if f1 < 0.8 {
                self.theme.warn
            } else {
                self.theme.text
            };
            spans.push(Span::styled(format!(" {label} {f1:.2} "), style));
        }
        Line::from(spans)
    }

    fn render_panel(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.muted);
        match self.charts.panel() {
            None => {
                let [takeaway, details] =
                    Layout::vertical([Constraint::Length(2), Constraint::Length(StatRow::height())])
                        .areas(area);
                Paragraph::new(CHART_TAKEAWAY)
                    .style(self.theme.text)
                    .wrap(Wrap { trim: true })
                    .render(takeaway, buf);
                StatRow::from_stats(&TRAINING_DETAILS, self.theme).render(details, buf);
            }
            Some(Panel::ConfusionMatrix) => {
                let block = block
                    .title(Span::styled(Panel::ConfusionMatrix.to_string(), self.theme.title))
                    .title_bottom(Span::styled(
                        " t: counts / normalized ",
                        self.theme.muted,
                    ));
                let inner = block.inner(area);
                block.render(area, buf);
                if let Some(heatmap) = self.charts.heatmap() {
                    let (rows, columns) = self.charts.labels();
                    let ctx = heatmap::ViewContext {
                        row_labels: &rows,
                        column_labels: &columns,
                        normalization: self.charts.normalization(),
                        theme: self.theme,
                    };
                    HeatmapWidget::new(&heatmap, ctx).render(inner, buf);
                }
            }
            Some(Panel::Roc) => {
                let block =
                    block.title(Span::styled(Panel::Roc.to_string(), self.theme.title));
                let inner = block.inner(area);
                block.render(area, buf);
                let [chart, readout] =
                    Layout::horizontal([Constraint::Fill(3), Constraint::Fill(2)]).areas(inner);
                RocWidget::new(self.charts.threshold(), self.theme).render(chart, buf);
                Paragraph::new(threshold_lines(self.charts.threshold(), self.theme))
                    .wrap(Wrap { trim: true })
                    .render(readout, buf);
            }
            Some(Panel::Latency) => {
                StatRow::from_stats(&LATENCY_CARDS, self.theme).render(area, buf);
            }
            Some(Panel::AccuracyF1) => {
                let [cards, f1] =
                    Layout::vertical([Constraint::Length(StatRow::height()), Constraint::Min(0)])
                        .areas(area);
                StatRow::from_stats(&ACCURACY_F1_CARDS, self.theme).render(cards, buf);
                let lines = MULTI_CLASS_LABELS
                    .iter()
                    .zip(MULTI_CLASS_F1)
                    .map(|(label, f1)| {
                        let filled = (f1 * 20.0).round() as usize;
                        Line::from(vec![
                            Span::styled(format!("{label:<9}"), self.theme.muted),
                            Span::styled("█".repeat(filled), self.theme.progress),
                            Span::styled(format!(" {f1:.2}"), self.theme.text),
                        ])
                    })
                    .collect::<Vec<_>>();
                Paragraph::new(lines).render(f1, buf);
            }
        }
    }
}

impl Widget for ChartsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chips_height = u16::from(self.charts.shows_focus_chips());
        let [summary, controls, chips, panel] = Layout::vertical([
            Constraint::Length(StatRow::height()),
            Constraint::Length(1),
            Constraint::Length(chips_height),
            Constraint::Min(0),
        ])
        .areas(area);

        StatRow::from_stats(&CHART_SUMMARY, self.theme).render(summary, buf);
        self.controls().render(controls, buf);
        if chips_height > 0 {
            self.focus_chips().render(chips, buf);
        }
        self.render_panel(panel, buf);
    }
}
