//! Domain layer
//!
//! Slide descriptors, the slide registry and the static content the
//! renderers draw from.

pub mod content;
pub mod registry;
pub mod slide;
pub mod text;
