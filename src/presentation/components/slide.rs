//! Slide renderer
//!
//! Bespoke layouts (cover, team, prototype, Q&A) draw the whole slide area.
//! Framed slides get a title line and a body picked by their interactive key;
//! without one the descriptor's bullets are listed.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{slide::Widget as SlideWidget, AppState},
    domain::{
        content::*,
        slide::{Interactive, SlideDescriptor, SlideLayout},
    },
    presentation::{
        config::Theme,
        widgets::{
            bullet_list::BulletList,
            capture::CaptureWidget,
            cards::{chips, AttackDefenseGrid, CardGrid, StatRow, TeamGrid},
            charts::ChartsWidget,
            drill_down::{DrillDownWidget, PREPROCESS_FLOW},
            flow::FlowWidget,
            hardware::HardwareWidget,
            live_demo::LiveDemoWidget,
            table::TableWidget,
        },
    },
};

#[derive(Debug, Clone)]
pub struct SlideComponent {
    theme: Theme,
}

impl SlideComponent {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(slide) = state.deck.current_slide() else {
            frame.render_widget(
                Paragraph::new("No slides").style(self.theme.muted),
                area,
            );
            return;
        };

        match slide.layout() {
            SlideLayout::Cover => self.cover(slide, frame, area),
            SlideLayout::Team => {
                let [title, body] = titled(area);
                frame.render_widget(Line::styled(slide.display_title(), self.theme.title), title);
                frame.render_widget(TeamGrid::new(&TEAM, &self.theme), body);
            }
            SlideLayout::Prototype => {
                let [title, body] = titled(area);
                frame.render_widget(Line::styled(slide.display_title(), self.theme.title), title);
                match &state.slide.widget {
                    SlideWidget::Hardware(hardware) => {
                        frame.render_widget(HardwareWidget::new(hardware, &self.theme), body)
                    }
                    _ => self.bullets(slide, frame, body),
                }
            }
            SlideLayout::Qa => self.qa(slide, frame, area),
            SlideLayout::Framed => {
                let [title, body] = titled(area);
                frame.render_widget(
                    Line::styled(state.frame_title(), self.theme.title),
                    title,
                );
                self.body(state, slide, frame, body);
            }
        }
    }

    fn cover(&self, slide: &SlideDescriptor, frame: &mut Frame, area: Rect) {
        // Without a title the first point is the headline
        let skip = usize::from(slide.title.is_none());
        let mut lines = vec![
            Line::styled(slide.display_title(), self.theme.title),
            Line::default(),
        ];
        lines.extend(
            slide
                .bullet_points()
                .iter()
                .skip(skip)
                .map(|point| Line::styled(point.clone(), self.theme.text)),
        );
        lines.push(Line::default());
        lines.push(Line::styled("→ to begin", self.theme.muted));
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(area);
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            middle,
        );
    }

    fn qa(&self, slide: &SlideDescriptor, frame: &mut Frame, area: Rect) {
        let title = slide.title.clone().unwrap_or_else(|| QA_TITLE.to_string());
        let subtitle = slide
            .bullet_points()
            .first()
            .cloned()
            .unwrap_or_else(|| QA_SUBTITLE.to_string());
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .areas(area);
        frame.render_widget(
            Paragraph::new(vec![
                Line::styled(title, self.theme.title),
                Line::default(),
                Line::styled(subtitle, self.theme.muted),
            ])
            .alignment(Alignment::Center),
            middle,
        );
    }

    fn bullets(&self, slide: &SlideDescriptor, frame: &mut Frame, area: Rect) {
        frame.render_widget(BulletList::new(slide.bullet_points(), &self.theme), area);
    }

    fn body(&self, state: &AppState, slide: &SlideDescriptor, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        match &state.slide.widget {
            SlideWidget::Architecture(drill) => {
                frame.render_widget(DrillDownWidget::new(drill, theme), area)
            }
            SlideWidget::Charts(charts) => frame.render_widget(ChartsWidget::new(charts, theme), area),
            SlideWidget::Hardware(hardware) => {
                frame.render_widget(HardwareWidget::new(hardware, theme), area)
            }
            SlideWidget::Demo(demo) => frame.render_widget(LiveDemoWidget::new(demo, theme), area),
            SlideWidget::Capture(capture) => {
                frame.render_widget(CaptureWidget::new(capture, theme), area)
            }
            SlideWidget::Static => self.static_body(state, slide, frame, area),
        }
    }

    fn static_body(&self, state: &AppState, slide: &SlideDescriptor, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let Some(interactive) = slide.interactive else {
            self.bullets(slide, frame, area);
            return;
        };
        match interactive {
            Interactive::Toc => self.toc(state, frame, area),
            Interactive::IntroMotivation => {
                let [bullets, stats] =
                    Layout::vertical([Constraint::Min(0), Constraint::Length(StatRow::height())])
                        .areas(area);
                let points: Vec<String> = INTRO_BULLETS.iter().map(|s| s.to_string()).collect();
                frame.render_widget(BulletList::new(&points, theme), bullets);
                frame.render_widget(StatRow::from_stats(&INTRO_STATS, theme), stats);
            }
            Interactive::Problem => {
                let [surface, impacts, gaps, takeaway] = Layout::vertical([
                    Constraint::Length(2),
                    Constraint::Length(6),
                    Constraint::Min(0),
                    Constraint::Length(2),
                ])
                .areas(area);
                frame.render_widget(
                    Paragraph::new(chips(ATTACK_SURFACE, theme.alert)).wrap(Wrap { trim: true }),
                    surface,
                );
                frame.render_widget(CardGrid::new(&PROBLEM_IMPACTS, theme), impacts);
                let gaps_lines = RULE_BASED_GAPS
                    .iter()
                    .map(|gap| {
                        Line::from(vec![
                            Span::styled("✗ ", theme.alert),
                            Span::styled(*gap, theme.text),
                        ])
                    })
                    .collect::<Vec<_>>();
                frame.render_widget(
                    Paragraph::new(gaps_lines).block(
                        Block::bordered()
                            .border_type(BorderType::Rounded)
                            .border_style(theme.muted)
                            .title(Span::styled("Rule-based IDS gaps", theme.accent)),
                    ),
                    gaps,
                );
                frame.render_widget(
                    Paragraph::new(PROBLEM_TAKEAWAY)
                        .style(theme.warn)
                        .wrap(Wrap { trim: true }),
                    takeaway,
                );
            }
            Interactive::AttackDefenseMapping | Interactive::Attacks => {
                frame.render_widget(AttackDefenseGrid::new(&ATTACK_DEFENSE, theme), area)
            }
            Interactive::SolutionFlow | Interactive::Flow => {
                frame.render_widget(FlowWidget::new(&DEFENSE_FLOW, theme), area)
            }
            Interactive::Architecture => {
                frame.render_widget(FlowWidget::new(&ARCHITECTURE_FLOW, theme), area)
            }
            Interactive::PreprocessingSteps => {
                frame.render_widget(FlowWidget::new(&PREPROCESS_FLOW, theme), area)
            }
            Interactive::FeatureImportance => {
                frame.render_widget(TableWidget::new(&FEATURE_IMPORTANCE_TABLE, theme), area)
            }
            Interactive::Dataset => {
                frame.render_widget(TableWidget::new(&DATASET_TABLE, theme), area)
            }
            Interactive::Models => {
                frame.render_widget(TableWidget::new(&MODELS_TABLE, theme), area)
            }
            Interactive::PerformanceDashboard | Interactive::Metrics => {
                let [stats, note] =
                    Layout::vertical([Constraint::Length(StatRow::height()), Constraint::Min(0)])
                        .areas(area);
                frame.render_widget(StatRow::from_stats(&PERFORMANCE_STATS, theme), stats);
                frame.render_widget(
                    CardGrid::new(std::slice::from_ref(&ROGUE_AP_NOTE), theme),
                    note,
                );
            }
            Interactive::ImpactMetrics => {
                frame.render_widget(StatRow::from_stats(&IMPACT_STATS, theme), area)
            }
            Interactive::Impact => {
                frame.render_widget(TableWidget::new(&IMPACT_TABLE, theme), area)
            }
            Interactive::FutureRoadmap => {
                frame.render_widget(FlowWidget::new(&ROADMAP_FLOW, theme), area)
            }
            Interactive::TeamCards | Interactive::Team => {
                frame.render_widget(TeamGrid::new(&TEAM, theme), area)
            }
            Interactive::EthicsCompliance => {
                let [pillars, table] =
                    Layout::vertical([Constraint::Length(6), Constraint::Min(0)]).areas(area);
                frame.render_widget(CardGrid::new(&ETHICS_PILLARS, theme), pillars);
                frame.render_widget(TableWidget::new(&ETHICS_TABLE, theme), table);
            }
            Interactive::RagSystem => {
                let [core, sources, pipeline, examples] = Layout::vertical([
                    Constraint::Length(5),
                    Constraint::Length(4),
                    Constraint::Length(6),
                    Constraint::Min(0),
                ])
                .areas(area);
                frame.render_widget(CardGrid::new(&RAG_CORE, theme), core);
                frame.render_widget(CardGrid::new(&RAG_SOURCES, theme), sources);
                frame.render_widget(FlowWidget::new(&RAG_PIPELINE, theme), pipeline);
                frame.render_widget(CardGrid::new(&RAG_EXAMPLES, theme), examples);
            }
            // Widget-backed keys are drawn by `body` once mounted
            Interactive::ZoomArchitecture
            | Interactive::DataCollection
            | Interactive::ExpandableCharts
            | Interactive::HardwareSetup
            | Interactive::Demo => self.bullets(slide, frame, area),
        }
    }

    fn toc(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let slides = state.deck.slides();
        let half = slides.len().div_ceil(2);
        let columns = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);
        for (n, (column, chunk)) in columns.iter().zip(slides.chunks(half.max(1))).enumerate() {
            let offset = n * half;
            let lines = chunk
                .iter()
                .enumerate()
                .map(|(i, slide)| {
                    Line::from(vec![
                        Span::styled(format!("{:>2}  ", offset + i + 1), self.theme.accent),
                        Span::styled(slide.display_title(), self.theme.text),
                    ])
                })
                .collect::<Vec<_>>();
            frame.render_widget(Paragraph::new(lines), *column);
        }
    }
}

/// Splits off a title row and a spacer
fn titled(area: Rect) -> [Rect; 2] {
    let [title, _, body] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);
    [title, body]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::registry::SlideRegistry, infrastructure::config::Config};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 36)).unwrap();
        let component = SlideComponent::new(Theme::default());
        terminal
            .draw(|frame| component.view(state, frame, frame.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn state_with(slide: SlideDescriptor) -> AppState {
        AppState::new([slide], Config::default(), 0)
    }

    #[test]
    fn test_missing_interactive_lists_bullets() {
        let state = state_with(SlideDescriptor::new(1).title("Plain").points(["alpha", "beta"]));
        let text = render(&state);
        assert!(text.contains("Plain"));
        assert!(text.contains("• alpha"));
        assert!(text.contains("• beta"));
    }

    #[test]
    fn test_alias_keys_share_renderer() {
        let a = render(&state_with(
            SlideDescriptor::new(1).title("Ethics").interactive(Interactive::EthicsCompliance),
        ));
        assert!(a.contains(ETHICS_PILLARS[0].title));
    }

    #[test]
    fn test_qa_layout() {
        let text = render(&state_with(
            SlideDescriptor::new(1).kind(crate::domain::slide::SlideKind::Qa),
        ));
        assert!(text.contains(QA_TITLE));
        assert!(text.contains(QA_SUBTITLE));
    }

    #[test]
    fn test_every_builtin_slide_renders() {
        let deck = SlideRegistry::builtin().unwrap().visible();
        for start in 0..deck.len() {
            let state = AppState::new(deck.clone(), Config::default(), start);
            let title = state.frame_title();
            assert!(render(&state).contains(&title), "slide {start}: {title}");
        }
    }
}
