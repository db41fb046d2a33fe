//! Architecture drill-down
//!
//! A two-level state machine: an overview of four module tiles, and one leaf
//! view per module. Leaves only ever return to the overview. Every transition
//! reports whether a leaf is open and which title the slide frame should show,
//! so the deck controller can intercept "next" while a leaf is open.

use std::time::{Duration, Instant};

use strum::{Display, EnumIter};

use crate::model::{capture::PacketCapture, charts, charts::Charts, gallery, gallery::FeatureGallery};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum View {
    #[default]
    #[strum(to_string = "System Architecture")]
    Overview,
    #[strum(to_string = "Packet Capture")]
    Capture,
    #[strum(to_string = "Preprocessing")]
    Preprocess,
    #[strum(to_string = "ML Models")]
    Models,
    #[strum(to_string = "Defense Module")]
    Defense,
}

impl View {
    /// Overview tiles in display order
    pub const MODULES: [View; 4] = [View::Capture, View::Preprocess, View::Models, View::Defense];

    /// 1-based tile number to module view
    pub fn from_tile(number: u8) -> Option<View> {
        usize::from(number)
            .checked_sub(1)
            .and_then(|index| Self::MODULES.get(index).copied())
    }

    pub fn title(self) -> String {
        self.to_string()
    }

    pub fn description(self) -> &'static str {
        match self {
            View::Overview => "",
            View::Capture => "Monitor mode adapter",
            View::Preprocess => "Impute, scale, categorize",
            View::Models => "Binary + Multi-class detection",
            View::Defense => "Block/Deauth actions",
        }
    }

    pub fn is_leaf(self) -> bool {
        self != View::Overview
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum PreprocessTab {
    #[default]
    #[strum(to_string = "Pipeline Steps")]
    Steps,
    #[strum(to_string = "Feature Importance")]
    Importance,
    #[strum(to_string = "Feature Gallery")]
    Gallery,
}

impl PreprocessTab {
    pub fn next(self) -> Self {
        match self {
            PreprocessTab::Steps => PreprocessTab::Importance,
            PreprocessTab::Importance => PreprocessTab::Gallery,
            PreprocessTab::Gallery => PreprocessTab::Steps,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    ModuleSelected(View),
    BackToOverview,
    /// Reset requested by the deck controller
    ExitToOverview,
    PreprocessTabSelected(PreprocessTab),
    PreprocessTabCycled,
    Gallery(gallery::Message),
    Charts(charts::Message),
    Ticked { now: Option<Instant> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    DrillActivityChanged { active: bool },
    TitleChanged { title: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrillDown {
    view: View,
    preprocess_tab: PreprocessTab,
    capture: PacketCapture,
    gallery: FeatureGallery,
    charts: Charts,
    count_up: Duration,
}

impl DrillDown {
    pub fn new(count_up: Duration) -> Self {
        Self {
            view: View::Overview,
            preprocess_tab: PreprocessTab::Steps,
            capture: PacketCapture::new(count_up),
            gallery: FeatureGallery::default(),
            charts: Charts::default(),
            count_up,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn title(&self) -> String {
        self.view.title()
    }

    pub fn preprocess_tab(&self) -> PreprocessTab {
        self.preprocess_tab
    }

    pub fn capture(&self) -> &PacketCapture {
        &self.capture
    }

    pub fn gallery(&self) -> &FeatureGallery {
        &self.gallery
    }

    pub fn charts(&self) -> &Charts {
        &self.charts
    }

    pub fn update(&mut self, message: Message) -> Vec<Event> {
        match message {
            Message::ModuleSelected(view) => {
                if self.view != View::Overview || !view.is_leaf() {
                    return vec![];
                }
                self.enter(view)
            }
            Message::BackToOverview | Message::ExitToOverview => {
                if self.view == View::Overview {
                    return vec![];
                }
                self.transition(View::Overview)
            }
            Message::PreprocessTabSelected(tab) => {
                if self.view == View::Preprocess {
                    self.preprocess_tab = tab;
                }
                vec![]
            }
            Message::PreprocessTabCycled => {
                if self.view == View::Preprocess {
                    self.preprocess_tab = self.preprocess_tab.next();
                }
                vec![]
            }
            Message::Gallery(message) => {
                if self.view == View::Preprocess && self.preprocess_tab == PreprocessTab::Gallery {
                    self.gallery.update(message);
                }
                vec![]
            }
            Message::Charts(message) => {
                if self.view == View::Models {
                    self.charts.update(message);
                }
                vec![]
            }
            Message::Ticked { now } => {
                if self.view == View::Capture {
                    self.capture.tick(now.unwrap_or_else(Instant::now));
                }
                vec![]
            }
        }
    }

    /// Leaves start fresh every time they are opened
    fn enter(&mut self, view: View) -> Vec<Event> {
        match view {
            View::Capture => self.capture = PacketCapture::new(self.count_up),
            View::Preprocess => self.gallery = FeatureGallery::default(),
            View::Models => self.charts = Charts::default(),
            View::Overview | View::Defense => {}
        }
        self.preprocess_tab = PreprocessTab::Steps;
        self.transition(view)
    }

    fn transition(&mut self, view: View) -> Vec<Event> {
        if self.view == View::Preprocess {
            self.preprocess_tab = PreprocessTab::Steps;
        }
        self.view = view;
        vec![
            Event::DrillActivityChanged {
                active: view.is_leaf(),
            },
            Event::TitleChanged { title: view.title() },
        ]
    }
}

impl Default for DrillDown {
    fn default() -> Self {
        Self::new(Duration::from_millis(800))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn events_for(view: View) -> Vec<Event> {
        vec![
            Event::DrillActivityChanged {
                active: view.is_leaf(),
            },
            Event::TitleChanged { title: view.title() },
        ]
    }

    #[rstest]
    #[case(View::Capture, "Packet Capture")]
    #[case(View::Preprocess, "Preprocessing")]
    #[case(View::Models, "ML Models")]
    #[case(View::Defense, "Defense Module")]
    fn test_selecting_tile_enters_that_leaf(#[case] view: View, #[case] title: &str) {
        let mut drill = DrillDown::default();
        let events = drill.update(Message::ModuleSelected(view));
        assert_eq!(drill.view(), view);
        assert_eq!(events, events_for(view));
        assert_eq!(drill.title(), title);
    }

    #[test]
    fn test_back_returns_to_overview() {
        let mut drill = DrillDown::default();
        drill.update(Message::ModuleSelected(View::Defense));
        let events = drill.update(Message::BackToOverview);
        assert_eq!(drill.view(), View::Overview);
        assert_eq!(events, events_for(View::Overview));
        assert_eq!(drill.title(), "System Architecture");
    }

    #[test]
    fn test_exit_to_overview_from_every_leaf() {
        for view in View::MODULES {
            let mut drill = DrillDown::default();
            drill.update(Message::ModuleSelected(view));
            let events = drill.update(Message::ExitToOverview);
            assert_eq!(drill.view(), View::Overview);
            assert_eq!(
                events[0],
                Event::DrillActivityChanged { active: false },
                "{view}"
            );
        }
    }

    #[test]
    fn test_exit_at_overview_emits_nothing() {
        let mut drill = DrillDown::default();
        assert_eq!(drill.update(Message::ExitToOverview), vec![]);
        assert_eq!(drill.update(Message::BackToOverview), vec![]);
    }

    #[test]
    fn test_leaves_do_not_transition_to_each_other() {
        let mut drill = DrillDown::default();
        drill.update(Message::ModuleSelected(View::Capture));
        assert_eq!(drill.update(Message::ModuleSelected(View::Models)), vec![]);
        assert_eq!(drill.view(), View::Capture);
    }

    #[test]
    fn test_selecting_overview_is_ignored() {
        let mut drill = DrillDown::default();
        assert_eq!(drill.update(Message::ModuleSelected(View::Overview)), vec![]);
    }

    #[test]
    fn test_preprocess_tab_resets_when_leaving() {
        let mut drill = DrillDown::default();
        drill.update(Message::ModuleSelected(View::Preprocess));
        drill.update(Message::PreprocessTabCycled);
        drill.update(Message::PreprocessTabCycled);
        assert_eq!(drill.preprocess_tab(), PreprocessTab::Gallery);

        drill.update(Message::BackToOverview);
        assert_eq!(drill.preprocess_tab(), PreprocessTab::Steps);

        drill.update(Message::ModuleSelected(View::Preprocess));
        assert_eq!(drill.preprocess_tab(), PreprocessTab::Steps);
    }

    #[test]
    fn test_preprocess_tab_ignored_outside_preprocess() {
        let mut drill = DrillDown::default();
        drill.update(Message::PreprocessTabSelected(PreprocessTab::Gallery));
        assert_eq!(drill.preprocess_tab(), PreprocessTab::Steps);
    }

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(PreprocessTab::Gallery.next(), PreprocessTab::Steps);
    }

    #[rstest]
    #[case(1, Some(View::Capture))]
    #[case(2, Some(View::Preprocess))]
    #[case(3, Some(View::Models))]
    #[case(4, Some(View::Defense))]
    #[case(0, None)]
    #[case(5, None)]
    fn test_from_tile(#[case] number: u8, #[case] expected: Option<View>) {
        assert_eq!(View::from_tile(number), expected);
    }

    #[test]
    fn test_charts_reset_on_reentry() {
        let mut drill = DrillDown::default();
        drill.update(Message::ModuleSelected(View::Models));
        drill.update(Message::Charts(charts::Message::ModeSelected(charts::Mode::Multi)));
        assert_eq!(drill.charts().mode(), charts::Mode::Multi);

        drill.update(Message::BackToOverview);
        drill.update(Message::ModuleSelected(View::Models));
        assert_eq!(drill.charts().mode(), charts::Mode::Binary);
    }

    #[test]
    fn test_capture_counts_up_only_in_capture_leaf() {
        let start = Instant::now();
        let mut drill = DrillDown::default();
        drill.update(Message::Ticked { now: Some(start) });
        assert_eq!(drill.capture().samples().display(), 0);

        drill.update(Message::ModuleSelected(View::Capture));
        drill.update(Message::Ticked { now: Some(start) });
        drill.update(Message::Ticked {
            now: Some(start + Duration::from_secs(1)),
        });
        assert_eq!(drill.capture().samples().display(), 50_000);
    }
}
