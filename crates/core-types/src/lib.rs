pub mod enums;
pub mod error;
pub mod sequence;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{Label, Outcome};
pub use error::CoreError;
pub use sequence::{count_positives, format_labels, parse_labels};
pub use structs::ConfusionCounts;
