//! Confusion-matrix heatmap
//!
//! Cells are painted with a background whose brightness follows the cell
//! intensity. Highlighted cells (diagonal and focused class) are bold and
//! underlined.

use ratatui::{prelude::*, widgets::*};
use thousands::Separable;

use crate::{
    domain::text,
    model::heatmap::{self, Heatmap, Normalization},
    presentation::config::Theme,
};

const LABEL_WIDTH_MAX: u16 = 18;

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub row_labels: &'a [String],
    pub column_labels: &'a [String],
    pub normalization: Normalization,
    pub theme: &'a Theme,
}

pub struct HeatmapWidget<'a> {
    heatmap: &'a Heatmap,
    ctx: ViewContext<'a>,
}

impl<'a> HeatmapWidget<'a> {
    pub fn new(heatmap: &'a Heatmap, ctx: ViewContext<'a>) -> Self {
        Self { heatmap, ctx }
    }

    /// Primary cell text: counts, or the row share when normalized
    pub fn cell_text(cell: &heatmap::Cell, normalization: Normalization) -> String {
        match normalization {
            Normalization::Counts => cell.value.separate_with_commas(),
            Normalization::Rows => format!("{:.1}%", cell.pct),
        }
    }

    /// Secondary cell text, shown when rows are two lines high
    pub fn detail_text(cell: &heatmap::Cell, normalization: Normalization) -> String {
        match normalization {
            Normalization::Counts => format!("{:.1}%", cell.pct),
            Normalization::Rows => cell.value.separate_with_commas(),
        }
    }
}

/// Blends from a dark slate to a saturated blue
pub fn intensity_color(intensity: f64) -> Color {
    let t = intensity.clamp(0.0, 1.0);
    let mix = |from: f64, to: f64| (from + (to - from) * t).round() as u8;
    Color::Rgb(mix(30.0, 37.0), mix(41.0, 99.0), mix(59.0, 235.0))
}

impl Widget for HeatmapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let n = self.heatmap.size();
        if n == 0 || area.width == 0 || area.height == 0 {
            return;
        }

        let label_width = self
            .ctx
            .row_labels
            .iter()
            .map(|label| text::display_width(label))
            .max()
            .unwrap_or(0)
            .min(usize::from(LABEL_WIDTH_MAX)) as u16
            + 1;
        let column_width = area.width.saturating_sub(label_width) / n as u16;
        if column_width == 0 {
            return;
        }
        let needed_two_line = 1 + 2 * n as u16;
        let row_height = if area.height >= needed_two_line { 2 } else { 1 };

        // Column header
        for (j, label) in self.ctx.column_labels.iter().take(n).enumerate() {
            let x = area.x + label_width + j as u16 * column_width;
            let label = fit(label, column_width.saturating_sub(1));
            buf.set_string(x, area.y, label, self.ctx.theme.muted);
        }

        for (i, row) in self.heatmap.rows().iter().enumerate() {
            let y = area.y + 1 + i as u16 * row_height;
            if y + row_height > area.bottom() {
                break;
            }
            if let Some(label) = self.ctx.row_labels.get(i) {
                buf.set_string(
                    area.x,
                    y,
                    fit(label, label_width - 1),
                    self.ctx.theme.muted,
                );
            }

            for (j, cell) in row.iter().enumerate() {
                let x = area.x + label_width + j as u16 * column_width;
                let rect = Rect::new(x, y, column_width.saturating_sub(1).max(1), row_height);
                let fg = if cell.intensity > 0.5 {
                    Color::White
                } else {
                    Color::Gray
                };
                let mut style = Style::new().bg(intensity_color(cell.intensity)).fg(fg);
                if cell.highlight {
                    style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                }
                buf.set_style(rect, style);

                let primary = fit(&Self::cell_text(cell, self.ctx.normalization), rect.width);
                buf.set_string(x, y, primary, style);
                if row_height == 2 {
                    let detail = fit(&Self::detail_text(cell, self.ctx.normalization), rect.width);
                    buf.set_string(x, y + 1, detail, style.remove_modifier(Modifier::UNDERLINED));
                }
            }
        }

        let legend_y = area.y + 1 + n as u16 * row_height;
        if legend_y < area.bottom() {
            let legend = match self.ctx.normalization {
                Normalization::Counts => "counts · % of total",
                Normalization::Rows => "row-normalized %",
            };
            Paragraph::new(Span::styled(legend, self.ctx.theme.muted))
                .render(Rect::new(area.x, legend_y, area.width, 1), buf);
        }
    }
}

/// Truncates to `width` display columns
fn fit(s: &str, width: u16) -> String {
    let width = usize::from(width);
    let mut out = String::new();
    for c in s.chars() {
        if text::display_width(&out) + text::display_width(&c.to_string()) > width {
            break;
        }
        out.push(c);
    }
    out
}
