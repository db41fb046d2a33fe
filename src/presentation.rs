//! Presentation layer
//!
//! - Components that lay out the frame
//! - Reusable widgets
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
