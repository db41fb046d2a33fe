use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;

use crate::{
    domain::content::{
        Flow, ATTACK_DEFENSE, DEFENSE_FLOW, FEATURE_IMPORTANCE_TABLE, PREPROCESSING_STEPS,
    },
    model::drill_down::{DrillDown, PreprocessTab, View},
    presentation::{
        config::Theme,
        widgets::{
            capture::CaptureWidget, cards::AttackDefenseGrid, charts::ChartsWidget, flow::FlowWidget,
            gallery::GalleryWidget, table::TableWidget,
        },
    },
};

pub const PREPROCESS_FLOW: Flow = Flow {
    title: "Preprocessing Pipeline",
    steps: &PREPROCESSING_STEPS,
};

/// Architecture overview tiles or the open module
pub struct DrillDownWidget<'a> {
    drill: &'a DrillDown,
    theme: &'a Theme,
}

impl<'a> DrillDownWidget<'a> {
    pub fn new(drill: &'a DrillDown, theme: &'a Theme) -> Self {
        Self { drill, theme }
    }

    fn render_overview(&self, area: Rect, buf: &mut Buffer) {
        let [tiles, hint] =
            Layout::vertical([Constraint::Length(5), Constraint::Length(1)]).areas(area);
        let columns = Layout::horizontal(vec![Constraint::Fill(1); View::MODULES.len()])
            .spacing(1)
            .split(tiles);
        for (i, (view, column)) in View::MODULES.iter().zip(columns.iter()).enumerate() {
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(self.theme.accent)
                .title(Span::styled(format!("{} {view}", i + 1), self.theme.title));
            Paragraph::new(view.description())
                .style(self.theme.text)
                .wrap(Wrap { trim: true })
                .block(block)
                .render(*column, buf);
        }
        Line::styled("Press 1-4 to zoom into a module", self.theme.muted).render(hint, buf);
    }

    fn render_preprocess(&self, area: Rect, buf: &mut Buffer) {
        let [tabs, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        let titles = PreprocessTab::iter()
            .enumerate()
            .map(|(i, tab)| format!("{} {tab}", i + 1));
        let selected = PreprocessTab::iter()
            .position(|tab| tab == self.drill.preprocess_tab())
            .unwrap_or(0);
        Tabs::new(titles)
            .select(selected)
            .style(self.theme.text)
            .highlight_style(self.theme.selected)
            .render(tabs, buf);

        match self.drill.preprocess_tab() {
            PreprocessTab::Steps => FlowWidget::new(&PREPROCESS_FLOW, self.theme).render(body, buf),
            PreprocessTab::Importance => {
                TableWidget::new(&FEATURE_IMPORTANCE_TABLE, self.theme).render(body, buf)
            }
            PreprocessTab::Gallery => {
                GalleryWidget::new(self.drill.gallery(), self.theme).render(body, buf)
            }
        }
    }

    fn render_defense(&self, area: Rect, buf: &mut Buffer) {
        let [flow, mapping] =
            Layout::vertical([Constraint::Length(6), Constraint::Min(0)]).areas(area);
        FlowWidget::new(&DEFENSE_FLOW, self.theme).render(flow, buf);
        AttackDefenseGrid::new(&ATTACK_DEFENSE, self.theme).render(mapping, buf);
    }
}

impl Widget for DrillDownWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = self.drill.view();
        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        match view {
            View::Overview => self.render_overview(body, buf),
            View::Capture => CaptureWidget::new(self.drill.capture(), self.theme).render(body, buf),
            View::Preprocess => self.render_preprocess(body, buf),
            View::Models => ChartsWidget::new(self.drill.charts(), self.theme).render(body, buf),
            View::Defense => self.render_defense(body, buf),
        }
        if view.is_leaf() {
            Line::styled("Esc: back to overview", self.theme.muted)
                .alignment(Alignment::Right)
                .render(footer, buf);
        }
    }
}
