// Module declarations
mod app;
pub mod page;
pub mod splash;
// Re-exports for external use
pub use app::{App, run};
