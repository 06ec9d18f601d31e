use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The one user-facing message every failed API call collapses into. The
/// original status and body are logged, never surfaced to callers.
pub const REQUEST_FAILED_MESSAGE: &str = "Something bad happened; please try again later";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Something bad happened; please try again later")]
    RequestFailed,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session store error: {0}")]
    SessionStore(String),
}
