//! Error types for the surfcast application.
//!
//! Every fallible operation in the crate reports a [`SurfcastError`]. Callers
//! match on the variant rather than on a type hierarchy.

use thiserror::Error;

/// The main error type for surfcast operations.
#[derive(Error, Debug)]
pub enum SurfcastError {
    /// Aggregation-level failure wrapping whatever went wrong underneath
    #[error("Unexpected error during the forecast processing: {message}")]
    ForecastProcessing { message: String },

    /// Transport failure while talking to the forecast provider
    #[error("Unexpected error when trying to communicate to StormGlass: {message}")]
    ClientRequest { message: String },

    /// The forecast provider answered with a non-success status
    #[error("Unexpected error returned by the StormGlass service: Error: {body} Code: {status}")]
    ProviderResponse { status: u16, body: String },

    /// A forecast point carried a value the rating rules cannot use
    #[error("Invalid forecast point: {field} - {message}")]
    InvalidForecastPoint { field: String, message: String },

    /// Invalid beach record
    #[error("Invalid beach: {message}")]
    InvalidBeach { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

/// Convenience type alias for Results with SurfcastError
pub type Result<T> = std::result::Result<T, SurfcastError>;
