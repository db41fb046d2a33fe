use std::path::PathBuf;

use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::{infrastructure::assets::ImageFormat, model::hardware::ImageSlot};

/// Raw messages from external sources (input, filesystem, system)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input (raw keyboard events)
    Key(KeyEvent),

    // Asset probe results
    ImageProbed {
        slot: ImageSlot,
        path: PathBuf,
        result: Result<ImageFormat, String>,
    },

    // System status
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}
