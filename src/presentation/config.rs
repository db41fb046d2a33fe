//! UI configuration
//!
//! Keybindings and named styles, both loaded through the infrastructure config.

pub mod keybindings;
pub mod styles;

// Re-export for convenience
pub use keybindings::{Action, KeyBindings};
pub use styles::{Styles, Theme};
