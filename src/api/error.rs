#![allow(unused)]
use std::borrow::Cow;

/// User-facing errors. Every variant carries a message suitable for inline
/// display; internals never leak past `From<SystemError>`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Bad Request: {0}")]
    BadRequest(Cow<'static, str>),
    #[error("Unauthorized: {0}")]
    Unauthorized(Cow<'static, str>),
    #[error("Forbidden: {0}")]
    Forbidden(Cow<'static, str>),
    #[error("Not Found: {0}")]
    NotFound(Cow<'static, str>),
    #[error("Service Unavailable: {0}")]
    Unavailable(Cow<'static, str>),
    #[error("Cancelled: {0}")]
    Cancelled(Cow<'static, str>),
    #[error("Internal Error")]
    Internal,
}

impl Error {
    pub fn bad_request(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn unauthorized(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unavailable(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn cancelled(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Cancelled(msg.into())
    }

    /// The message the view layer shows, without the variant prefix.
    pub fn message(&self) -> Cow<'static, str> {
        match self {
            Error::BadRequest(msg)
            | Error::Unauthorized(msg)
            | Error::Forbidden(msg)
            | Error::NotFound(msg)
            | Error::Unavailable(msg)
            | Error::Cancelled(msg) => msg.clone(),
            Error::Internal => "Internal Error".into(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SystemError {
    // transport errors
    #[error("HTTP Error")]
    Http(#[from] reqwest::Error),
    #[error("Fetch Error: {0}")]
    Fetch(Cow<'static, str>),
    // serde errors
    #[error("JSON Serialization/Deserialization Error")]
    Json(#[from] serde_json::Error),
    // task errors
    #[error("Task Join Error")]
    Join(#[from] tokio::task::JoinError),
    // Custom Errors
    #[error("Bad Request: {0}")]
    BadRequest(Cow<'static, str>),
    #[error("Unauthorized: {0}")]
    Unauthorized(Cow<'static, str>),
    #[error("Forbidden: {0}")]
    Forbidden(Cow<'static, str>),
    #[error("Not Found: {0}")]
    NotFound(Cow<'static, str>),
}

impl From<SystemError> for Error {
    fn from(value: SystemError) -> Self {
        match value {
            SystemError::BadRequest(msg) => Error::BadRequest(msg),
            SystemError::Unauthorized(msg) => Error::Unauthorized(msg),
            SystemError::Forbidden(msg) => Error::Forbidden(msg),
            SystemError::NotFound(msg) => Error::NotFound(msg),
            SystemError::Fetch(msg) => Error::Unavailable(msg),
            _ => {
                log::error!("Internal Error: {:?}", value);
                Error::Internal
            }
        }
    }
}

impl SystemError {
    pub fn bad_request(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn unauthorized(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn fetch(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Fetch(msg.into())
    }
}
