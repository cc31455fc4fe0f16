//! Error types for panel takeoff and costing.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for order processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Rate table or order file not found (-1)
    FileNotFound = -1,
    /// Malformed JSON input (-3)
    ParseError = -3,
    /// Type tag outside the panel catalog (E100)
    UnrecognizedPanelType = 100,
    /// Too few dimensions for the panel variant (E101)
    MalformedDimensions = 101,
    /// Dimension outside every catalog band (E102)
    OutOfCatalog = 102,
    /// Order line could not be read (E200)
    InvalidOrderLine = 200,
    /// Piece count of a line does not fit a cut list row (E201)
    QuantityOverflow = 201,
}

/// Main error type for the takeoff engine.
#[derive(Debug, Error)]
pub enum TakeoffError {
    #[error("Unrecognized panel type '{tag}' in code {code}")]
    UnrecognizedPanelType { code: String, tag: String },

    #[error("Malformed dimensions in {code}: expected {expected} value(s), found {found}")]
    MalformedDimensions {
        code: String,
        expected: usize,
        found: usize,
    },

    #[error("Panel {code} is out of catalog: {dimension} = {value} mm matches no band")]
    OutOfCatalog {
        code: String,
        dimension: &'static str,
        value: u32,
    },

    #[error("Invalid order line '{line}': {message}")]
    InvalidOrderLine { line: String, message: String },

    #[error("Quantity {quantity} of {code} overflows the piece count of a cut list row")]
    QuantityOverflow { code: String, quantity: u32 },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TakeoffError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            TakeoffError::UnrecognizedPanelType { .. } => ErrorCode::UnrecognizedPanelType,
            TakeoffError::MalformedDimensions { .. } => ErrorCode::MalformedDimensions,
            TakeoffError::OutOfCatalog { .. } => ErrorCode::OutOfCatalog,
            TakeoffError::InvalidOrderLine { .. } => ErrorCode::InvalidOrderLine,
            TakeoffError::QuantityOverflow { .. } => ErrorCode::QuantityOverflow,
            TakeoffError::FileNotFound { .. } => ErrorCode::FileNotFound,
            TakeoffError::Io(_) => ErrorCode::FileNotFound,
            TakeoffError::Json(_) => ErrorCode::ParseError,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for takeoff operations.
pub type Result<T> = std::result::Result<T, TakeoffError>;
