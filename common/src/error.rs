use thiserror::Error;

/// Returned when a species or item kind name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKindError {
    #[error("unknown species: {0}")]
    Species(String),
    #[error("unknown item kind: {0}")]
    Thing(String),
}
