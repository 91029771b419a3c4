//! Error types for the prediction client.

use std::path::PathBuf;

/// Name of the environment variable holding the API credential.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// EchoLens errors.
#[derive(Debug, thiserror::Error)]
pub enum EchoError {
    /// The API credential is not set.
    #[error("GROQ_API_KEY not found! Add it to .env file")]
    MissingCredential,

    /// Transport failure (DNS, connect, TLS, body read).
    #[error("network error: {message}")]
    Network { message: String },

    /// The completion endpoint answered with a non-2xx status.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The completion endpoint answered 2xx but without usable content.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    /// The historical data file exists but could not be parsed.
    #[error("invalid historical data in {}: {message}", .path.display())]
    Data { path: PathBuf, message: String },

    /// Filesystem error while reading data or writing a report.
    #[error("io error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Forecast horizon outside the supported set.
    #[error("unsupported forecast horizon: {days} days (expected one of 30, 60, 90, 120, 180)")]
    InvalidHorizon { days: u32 },

    /// Forecast horizon that is not a whole number of days.
    #[error("invalid forecast horizon '{input}': expected a number of days (30, 60, 90, 120, 180)")]
    HorizonNotANumber { input: String },
}

impl EchoError {
    /// Whether the failure happened while talking to the completion endpoint.
    pub fn is_prediction_failure(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Api { .. } | Self::InvalidResponse { .. }
        )
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<reqwest::Error> for EchoError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

/// Result type for EchoLens operations.
pub type EchoResult<T> = Result<T, EchoError>;
