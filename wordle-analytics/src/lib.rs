pub mod aggregate;
pub mod history;
pub mod stats;
pub mod trend;

// Re-export main components
pub use aggregate::*;
pub use history::*;
pub use stats::*;
pub use trend::*;
