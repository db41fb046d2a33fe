//! # hawkdeck
//!
//! Terminal presenter for the HawkShield Wi-Fi intrusion prevention deck,
//! built with Ratatui around an Elm-like loop.
//!
//! ## Architecture Overview
//!
//! - **State** (`core::state`): deck position, the mounted slide widget, chrome
//! - **Message** (`core::msg`): presenter intent decoded from raw input
//! - **Update** (`core::update`): pure transitions from one state to the next
//! - **Command** (`core::cmd`): side effects such as image probes and renders
//! - **View** (`presentation`): components and widgets drawn from a state snapshot
//!
//! ## Example Usage
//!
//! ```rust
//! use hawkdeck::{
//!     core::{msg::Msg, state::AppState, update::update},
//!     domain::{registry::SlideRegistry, slide::SlideDescriptor},
//!     infrastructure::config::Config,
//!     model::deck,
//! };
//!
//! let registry = SlideRegistry::new(vec![
//!     SlideDescriptor::new(1).title("Welcome"),
//!     SlideDescriptor::new(2).title("Agenda"),
//! ])
//! .unwrap();
//! let state = AppState::new(registry.visible(), Config::default(), 0);
//!
//! let (state, _commands) = update(Msg::Deck(deck::Message::Advanced), state);
//! assert_eq!(state.deck.position_label(), "2 / 2");
//! ```

#![deny(warnings)]

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod model;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
