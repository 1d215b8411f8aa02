//! Page component modules
//!
//! One renderer per page section, plus the chrome and overlays

pub mod feed;
pub mod footer;
pub mod header;
pub mod hero;
pub mod membership;
pub mod overlays;
pub mod voting;
