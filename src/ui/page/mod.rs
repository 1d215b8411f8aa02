//! Modular page implementation
//!
//! Split into the page controller (state + updaters) and its view

pub mod components;
pub mod renderer;
pub mod state;
pub mod updaters;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::{body_rows, render_page};
pub use state::{PageState, Trigger};
