pub mod errors;
pub mod logging;
pub mod settings;

// Re-export for convenience
pub use errors::{StackError, StackResult};
pub use settings::StackSettings;
