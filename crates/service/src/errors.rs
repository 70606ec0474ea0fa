use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("identifier mismatch: expected {expected}, merge produced {found}")]
    IdentifierMismatch { expected: String, found: String },
}

impl ServiceError {
    pub fn not_found(id: &str) -> Self { Self::NotFound(format!("entity {} not found", id)) }

    pub fn conflict(id: &str) -> Self { Self::Conflict(format!("entity {} already exists", id)) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 1003,
            ServiceError::Conflict(_) => 1002,
            ServiceError::IdentifierMismatch { .. } => 1001,
        }
    }
}
