//! Infrastructure layer
//!
//! - CLI argument processing
//! - Configuration loading
//! - Terminal (real and test)
//! - Image asset probing

pub mod assets;
pub mod cli;
pub mod config;
pub mod tui;
