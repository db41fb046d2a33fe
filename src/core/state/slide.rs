//! Per-slide widget state
//!
//! Interactive slides mount a widget model when they become current and drop
//! it when the deck moves on, so every visit starts from the widget's initial
//! state.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::{
    core::{cmd::Cmd, msg::widget::WidgetMsg},
    domain::slide::{Interactive, SlideDescriptor, SlideKind},
    model::{
        capture::PacketCapture,
        charts::{self, Charts, Panel},
        drill_down::{self, DrillDown, PreprocessTab, View},
        gallery,
        hardware::{self, Hardware, HardwareMode},
        live_demo::LiveDemo,
    },
};

/// Settings a widget needs when it is mounted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetContext {
    pub assets_dir: PathBuf,
    pub count_up: Duration,
    pub live_demo_interval: Duration,
}

impl Default for WidgetContext {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            count_up: Duration::from_millis(800),
            live_demo_interval: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Widget {
    #[default]
    Static,
    Architecture(DrillDown),
    Charts(Charts),
    Hardware(Hardware),
    Demo(LiveDemo),
    Capture(PacketCapture),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideState {
    pub widget: Widget,
    /// Frame title set by the drill-down; `None` shows the descriptor title
    pub title_override: Option<String>,
}

impl SlideState {
    pub fn mount(slide: &SlideDescriptor, ctx: &WidgetContext) -> Self {
        let widget = match (slide.interactive, slide.kind) {
            (Some(Interactive::ZoomArchitecture), _) => {
                Widget::Architecture(DrillDown::new(ctx.count_up))
            }
            (Some(Interactive::ExpandableCharts), _) => Widget::Charts(Charts::default()),
            (Some(Interactive::HardwareSetup), _) | (None, Some(SlideKind::Prototype)) => {
                Widget::Hardware(Hardware::new(&ctx.assets_dir))
            }
            (Some(Interactive::Demo), _) | (None, Some(SlideKind::Demo)) => {
                Widget::Demo(LiveDemo::new(ctx.live_demo_interval))
            }
            (Some(Interactive::DataCollection), _) => {
                Widget::Capture(PacketCapture::new(ctx.count_up))
            }
            _ => Widget::Static,
        };
        Self {
            widget,
            title_override: None,
        }
    }

    /// Side effects to start right after mounting
    pub fn initial_commands(&self) -> Vec<Cmd> {
        match &self.widget {
            Widget::Hardware(hardware) => hardware
                .initial_probes()
                .into_iter()
                .map(|(slot, path)| Cmd::ProbeImage { slot, path })
                .collect(),
            _ => vec![],
        }
    }

    pub fn drill_down(&self) -> Option<&DrillDown> {
        match &self.widget {
            Widget::Architecture(drill) => Some(drill),
            _ => None,
        }
    }

    /// Reset requested by the deck controller
    pub fn exit_drill(&mut self) -> Vec<drill_down::Event> {
        match &mut self.widget {
            Widget::Architecture(drill) => drill.update(drill_down::Message::ExitToOverview),
            _ => vec![],
        }
    }

    /// Route a control to the mounted widget
    ///
    /// Returns the commands to run and the drill-down events the deck has to see.
    pub fn update(&mut self, msg: WidgetMsg) -> (Vec<Cmd>, Vec<drill_down::Event>) {
        match &mut self.widget {
            Widget::Static => (vec![], vec![]),
            Widget::Architecture(drill) => match drill_message(drill, msg) {
                Some(message) => (vec![], drill.update(message)),
                None => (vec![], vec![]),
            },
            Widget::Charts(charts) => {
                if let Some(message) = charts_message(charts, msg) {
                    charts.update(message);
                }
                (vec![], vec![])
            }
            Widget::Hardware(hardware) => {
                let message = match msg {
                    WidgetMsg::Select(1) => Some(hardware::Message::ModeSelected(HardwareMode::Bench)),
                    WidgetMsg::Select(2) => Some(hardware::Message::ModeSelected(HardwareMode::Live)),
                    WidgetMsg::Cycle | WidgetMsg::Toggle => Some(hardware::Message::ModeToggled),
                    WidgetMsg::ImageProbed { slot, path, loaded } => {
                        Some(hardware::Message::ImageProbed { slot, path, loaded })
                    }
                    _ => None,
                };
                let cmds = message
                    .and_then(|message| hardware.update(message))
                    .map(|(slot, path)| vec![Cmd::ProbeImage { slot, path }])
                    .unwrap_or_default();
                (cmds, vec![])
            }
            Widget::Demo(demo) => {
                if let WidgetMsg::Ticked { now } = msg {
                    demo.tick(now.unwrap_or_else(Instant::now));
                }
                (vec![], vec![])
            }
            Widget::Capture(capture) => {
                if let WidgetMsg::Ticked { now } = msg {
                    capture.tick(now.unwrap_or_else(Instant::now));
                }
                (vec![], vec![])
            }
        }
    }
}

fn drill_message(drill: &DrillDown, msg: WidgetMsg) -> Option<drill_down::Message> {
    use drill_down::Message;

    if let WidgetMsg::Ticked { now } = msg {
        return Some(Message::Ticked { now });
    }
    if msg == WidgetMsg::Back {
        return Some(Message::BackToOverview);
    }

    match drill.view() {
        View::Overview => match msg {
            WidgetMsg::Select(n) => View::from_tile(n).map(Message::ModuleSelected),
            _ => None,
        },
        View::Preprocess => match msg {
            WidgetMsg::Select(1) => Some(Message::PreprocessTabSelected(PreprocessTab::Steps)),
            WidgetMsg::Select(2) => Some(Message::PreprocessTabSelected(PreprocessTab::Importance)),
            WidgetMsg::Select(3) => Some(Message::PreprocessTabSelected(PreprocessTab::Gallery)),
            WidgetMsg::Cycle => Some(Message::PreprocessTabCycled),
            WidgetMsg::Toggle => Some(Message::Gallery(gallery::Message::MetricToggled)),
            _ => None,
        },
        View::Models => charts_message(drill.charts(), msg).map(Message::Charts),
        View::Capture | View::Defense => None,
    }
}

fn charts_message(charts: &Charts, msg: WidgetMsg) -> Option<charts::Message> {
    use charts::Message;

    match msg {
        WidgetMsg::Select(n) => Panel::from_number(n).map(Message::PanelToggled),
        // Back folds the open panel
        WidgetMsg::Back => charts.panel().map(Message::PanelToggled),
        WidgetMsg::Cycle => Some(Message::ModeToggled),
        WidgetMsg::Toggle => Some(Message::NormalizationToggled),
        WidgetMsg::Adjust { delta } => Some(Message::ThresholdStepped { delta }),
        WidgetMsg::Focus { forward } => Some(Message::FocusCycled { forward }),
        WidgetMsg::Ticked { .. } | WidgetMsg::ImageProbed { .. } => None,
    }
}
