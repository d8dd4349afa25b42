// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A protocol step answered with a non-success status. Fatal: the whole
    /// run stops, remaining query lines are not attempted.
    #[error("the '{step}' request returned {status}")]
    Protocol { step: &'static str, status: u16 },

    #[error("the 'new search' response carried no Set-Cookie header")]
    NoSessionCookie,

    /// A result fragment is missing one of the fixed markers. The remote page
    /// format is assumed stable, so this is a defect signal, not recoverable.
    #[error("marker {marker:?} not found in result fragment")]
    MissingMarker { marker: &'static str },

    #[error("expected a number in result fragment, got {0:?}")]
    BadNumber(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}
