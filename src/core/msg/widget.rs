use std::path::PathBuf;
use std::time::Instant;

use crate::model::hardware::ImageSlot;

/// Controls delivered to whichever interactive widget is mounted
///
/// The meaning of each control depends on the widget; a widget ignores the
/// ones it has no use for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetMsg {
    /// Digit key, 1-based
    Select(u8),
    Back,
    Cycle,
    Toggle,
    Adjust { delta: i8 },
    Focus { forward: bool },
    /// `None` means "use the current instant"
    Ticked { now: Option<Instant> },
    ImageProbed {
        slot: ImageSlot,
        path: PathBuf,
        loaded: bool,
    },
}

impl WidgetMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, WidgetMsg::Ticked { .. })
    }
}
