pub mod api;
pub mod checks;
pub mod error;
pub mod logger;
pub mod odds;
pub mod runner;

// Re-export commonly used types
pub use error::{Result, SmokeError};
