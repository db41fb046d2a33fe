//! Expandable charts on the models leaf
//!
//! One panel at a time is expanded. Controls that belong to a panel only act
//! while that panel is open, the same way the on-screen control is only
//! visible then.

use strum::{Display, EnumIter};

use crate::model::{
    confusion::{self, BinaryMatrix, Threshold},
    heatmap::{Heatmap, Normalization},
};

pub const MULTI_CLASS_LABELS: [&str; 6] = ["Deauth", "EvilTwin", "RogueAP", "KRACK", "Re-Assoc", "SSDP"];

pub const MULTI_CLASS_MATRIX: [[u64; 6]; 6] = [
    [1650, 8, 10, 6, 5, 5],
    [7, 1620, 14, 5, 6, 3],
    [35, 28, 1220, 18, 25, 20],
    [6, 5, 12, 1605, 7, 4],
    [5, 6, 15, 8, 1585, 5],
    [3, 4, 10, 5, 6, 1590],
];

pub const MULTI_CLASS_F1: [f64; 6] = [0.97, 0.96, 0.70, 0.95, 0.94, 0.95];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum Mode {
    #[default]
    Binary,
    #[strum(to_string = "Multi-class")]
    Multi,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Binary => Mode::Multi,
            Mode::Multi => Mode::Binary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Panel {
    #[strum(to_string = "Confusion Matrix")]
    ConfusionMatrix,
    #[strum(to_string = "ROC & Threshold")]
    Roc,
    #[strum(to_string = "Latency Comparison")]
    Latency,
    #[strum(to_string = "Accuracy vs F1")]
    AccuracyF1,
}

impl Panel {
    /// 1-based control number to panel
    pub fn from_number(number: u8) -> Option<Panel> {
        match number {
            1 => Some(Panel::ConfusionMatrix),
            2 => Some(Panel::Roc),
            3 => Some(Panel::Latency),
            4 => Some(Panel::AccuracyF1),
            _ => None,
        }
    }

    pub fn is_available(self, mode: Mode) -> bool {
        self != Panel::Roc || mode == Mode::Binary
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ModeSelected(Mode),
    ModeToggled,
    PanelToggled(Panel),
    NormalizationToggled,
    ThresholdStepped { delta: i8 },
    FocusToggled(usize),
    FocusCycled { forward: bool },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Charts {
    mode: Mode,
    panel: Option<Panel>,
    normalization: Normalization,
    threshold: Threshold,
    focus: Option<usize>,
}

impl Charts {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn panel(&self) -> Option<Panel> {
        self.panel
    }

    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn binary_matrix(&self) -> BinaryMatrix {
        self.threshold.matrix()
    }

    /// Focus chips are only offered on the multi-class matrix
    pub fn shows_focus_chips(&self) -> bool {
        self.mode == Mode::Multi && self.panel == Some(Panel::ConfusionMatrix)
    }

    /// Heatmap for the open confusion-matrix panel
    pub fn heatmap(&self) -> Option<Heatmap> {
        if self.panel != Some(Panel::ConfusionMatrix) {
            return None;
        }
        let heatmap = match self.mode {
            Mode::Binary => Heatmap::derive(&self.binary_matrix().rows(), self.normalization, None),
            Mode::Multi => {
                let matrix: Vec<Vec<u64>> = MULTI_CLASS_MATRIX.iter().map(|row| row.to_vec()).collect();
                Heatmap::derive(&matrix, self.normalization, self.focus)
            }
        };
        Some(heatmap)
    }

    /// Row and column labels of the current matrix
    pub fn labels(&self) -> (Vec<String>, Vec<String>) {
        match self.mode {
            Mode::Binary => (
                confusion::ROW_LABELS.iter().map(|s| s.to_string()).collect(),
                confusion::COLUMN_LABELS.iter().map(|s| s.to_string()).collect(),
            ),
            Mode::Multi => (
                MULTI_CLASS_LABELS.iter().map(|l| format!("Actual: {l}")).collect(),
                MULTI_CLASS_LABELS.iter().map(|l| format!("Pred: {l}")).collect(),
            ),
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ModeSelected(mode) => self.set_mode(mode),
            Message::ModeToggled => self.set_mode(self.mode.toggled()),
            Message::PanelToggled(panel) => {
                if !panel.is_available(self.mode) {
                    return;
                }
                self.panel = if self.panel == Some(panel) {
                    None
                } else {
                    Some(panel)
                };
            }
            Message::NormalizationToggled => {
                if self.panel == Some(Panel::ConfusionMatrix) {
                    self.normalization = match self.normalization {
                        Normalization::Counts => Normalization::Rows,
                        Normalization::Rows => Normalization::Counts,
                    };
                }
            }
            Message::ThresholdStepped { delta } => {
                if self.panel == Some(Panel::Roc) {
                    self.threshold = self.threshold.step(delta);
                }
            }
            Message::FocusToggled(class) => {
                if self.shows_focus_chips() && class < MULTI_CLASS_LABELS.len() {
                    self.focus = if self.focus == Some(class) {
                        None
                    } else {
                        Some(class)
                    };
                }
            }
            Message::FocusCycled { forward } => {
                if self.shows_focus_chips() {
                    self.focus = cycle_focus(self.focus, forward);
                }
            }
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.panel = None;
    }
}

/// Steps through `None, 0, 1, ..., 5, None`
fn cycle_focus(focus: Option<usize>, forward: bool) -> Option<usize> {
    let last = MULTI_CLASS_LABELS.len() - 1;
    match (focus, forward) {
        (None, true) => Some(0),
        (None, false) => Some(last),
        (Some(i), true) if i < last => Some(i + 1),
        (Some(i), false) if i > 0 => Some(i - 1),
        (Some(_), _) => None,
    }
}
