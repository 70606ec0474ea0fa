use thiserror::Error;

pub mod types;
pub mod utils;
pub mod fetch;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("upstream returned {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("parse error: {0}")]
    Parse(String),
}
