//! Sub-models
//!
//! Each sub-model owns a slice of state and exposes `update(Message)` in the
//! Elm style. None of them touch the terminal or the filesystem.

pub mod capture;
pub mod charts;
pub mod confusion;
pub mod count_up;
pub mod deck;
pub mod drill_down;
pub mod gallery;
pub mod hardware;
pub mod heatmap;
pub mod live_demo;
pub mod smart_image;
pub mod status_bar;
