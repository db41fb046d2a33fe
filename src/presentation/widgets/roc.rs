use ratatui::{prelude::*, symbols::Marker, widgets::*};

use crate::{
    model::confusion::{self, BinaryMatrix, Threshold},
    presentation::config::Theme,
};

const CURVE_SAMPLES: usize = 40;

/// ROC curve with the operating point of the current threshold
pub struct RocWidget<'a> {
    threshold: Threshold,
    theme: &'a Theme,
}

impl<'a> RocWidget<'a> {
    pub fn new(threshold: Threshold, theme: &'a Theme) -> Self {
        Self { threshold, theme }
    }
}

impl Widget for RocWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let curve = confusion::roc_curve(CURVE_SAMPLES);
        let chance = confusion::chance_line();
        let point = [self.threshold.matrix().operating_point()];

        let datasets = vec![
            Dataset::default()
                .name(format!("ROC (AUC {:.2})", confusion::AUC))
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(self.theme.accent)
                .data(&curve),
            Dataset::default()
                .name("chance")
                .marker(Marker::Dot)
                .graph_type(GraphType::Line)
                .style(self.theme.muted)
                .data(&chance),
            Dataset::default()
                .name(format!("t = {}", self.threshold.label()))
                .marker(Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(self.theme.warn)
                .data(&point),
        ];

        let axis = |title: &'static str| {
            Axis::default()
                .title(Span::styled(title, self.theme.muted))
                .bounds([0.0, 1.0])
                .labels(["0", "0.5", "1"])
                .style(self.theme.muted)
        };

        Chart::new(datasets)
            .x_axis(axis("FPR"))
            .y_axis(axis("TPR"))
            .legend_position(Some(LegendPosition::BottomRight))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
            .render(area, buf);
    }
}

/// Threshold readout with the snapshot of the perturbed matrix
pub fn threshold_lines(threshold: Threshold, theme: &Theme) -> Vec<Line<'static>> {
    let m: BinaryMatrix = threshold.matrix();
    let (fpr, tpr) = m.operating_point();
    vec![
        Line::from(vec![
            Span::styled("Threshold ", theme.muted),
            Span::styled(threshold.label(), theme.title),
            Span::styled("   (- / + to adjust)", theme.muted),
        ]),
        Line::styled(
            format!("TN {}  FP {}  FN {}  TP {}", m.tn, m.fp, m.fn_, m.tp),
            theme.text,
        ),
        Line::styled(format!("TPR {tpr:.3}  FPR {fpr:.4}"), theme.accent),
    ]
}
