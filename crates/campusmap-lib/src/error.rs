use thiserror::Error;

/// Convenient result alias for the campus map library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a category string is outside the closed enumeration.
    #[error("unknown category: {name}")]
    UnknownCategory { name: String },

    /// Raised when the data store answers with a non-success status.
    #[error("backend rejected the request with status {status}: {message}")]
    BackendRejected { status: u16, message: String },

    /// Raised when a marker submission happens without a signed-in owner.
    #[error("custom markers require a signed-in owner")]
    MissingOwner,

    /// Raised when a required form field is empty.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// Raised when a form field does not parse as a number.
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// The user declined the location permission prompt.
    #[error("location permission was denied")]
    LocationDenied,

    /// The host environment has no location service at all.
    #[error("location lookup is not supported on this host")]
    LocationUnsupported,

    /// The location service did not answer in time.
    #[error("location lookup timed out")]
    LocationTimeout,

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the location-provider failure variants.
    pub fn is_location_failure(&self) -> bool {
        matches!(
            self,
            Error::LocationDenied | Error::LocationUnsupported | Error::LocationTimeout
        )
    }
}
