//! Reusable widgets
//!
//! Widgets borrow model state and a theme and draw into a buffer. Components
//! decide where they go.

pub mod bullet_list;
pub mod capture;
pub mod cards;
pub mod charts;
pub mod drill_down;
pub mod flow;
pub mod gallery;
pub mod hardware;
pub mod heatmap;
pub mod live_demo;
pub mod roc;
pub mod shrink_text;
pub mod smart_image;
pub mod status_bar;
pub mod table;
