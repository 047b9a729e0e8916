//! Error types for storyteller requests.

use thiserror::Error;

/// Errors raised by a single storyteller request.
///
/// Callers log these and leave their prior state untouched; no failure here
/// is fatal to the process.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed at the transport level.
    #[error("transport error on {endpoint}: {message}")]
    Transport {
        /// Fixed path suffix of the failed request.
        endpoint: &'static str,
        /// Underlying transport error description.
        message: String,
    },

    /// The service answered with a non-success status.
    #[error("{endpoint} returned {status}: {body}")]
    Api {
        /// Fixed path suffix of the failed request.
        endpoint: &'static str,
        /// HTTP status code.
        status: u16,
        /// Response body, as far as it could be read.
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("failed to decode {endpoint} response: {message}")]
    Decode {
        /// Fixed path suffix of the failed request.
        endpoint: &'static str,
        /// Underlying decode error description.
        message: String,
    },
}
