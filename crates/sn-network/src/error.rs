use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("spec parse error: {0}")]
    Parse(String),

    #[error("invalid spec for {name:?}: {reason}")]
    InvalidSpec { name: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
