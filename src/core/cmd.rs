use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::hardware::ImageSlot;

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    // Render requests go through the bounded render_req_sender and are coalesced by AppRunner.
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (filesystem probes, terminal control, redraws)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Asset commands; the result comes back as RawMsg::ImageProbed
    ProbeImage { slot: ImageSlot, path: PathBuf },

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; delivered via render_req_sender and coalesced by AppRunner
    RequestRender,
}
