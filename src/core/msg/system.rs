use serde::{Deserialize, Serialize};

/// Messages specific to SystemState and the status line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemMsg {
    // Process control
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),

    // Presenter chrome
    ToggleNotes,

    // Status management
    ShowHint { label: String, message: String },
    ShowError { label: String, message: String },
    ClearStatus,
}

impl SystemMsg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, SystemMsg::Resize(..))
    }
}
