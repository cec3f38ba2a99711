use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A single value that is not a binary label.
    #[error("Invalid label '{0}': labels must be 0 or 1")]
    InvalidValue(String),

    /// An element of a label sequence that is not a binary label.
    #[error("Invalid label '{value}' at position {position}: labels must be 0 or 1")]
    InvalidLabel { position: usize, value: String },
}
