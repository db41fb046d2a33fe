//! Integration layer
//!
//! - Runtime: message queues around the pure update function
//! - AppRunner: terminal event loop
//! - Renderer and render/resize coalescing

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
