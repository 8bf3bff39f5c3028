use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    /// A business-rule violation. The payload is the exact message shown to
    /// the user; callers must not wrap or prefix it.
    #[error("{0}")]
    Domain(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeskError {
    pub fn domain(msg: impl Into<String>) -> Self {
        DeskError::Domain(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, DeskError>;
