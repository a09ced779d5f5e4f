//! Error types used by the crate.

use thiserror::Error;

/// Reason a document was rejected by the parser.
///
/// Parsing stops at the first failure. A failure in a nested object is returned unchanged by
/// every parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    /// Input is not well-formed JSON.
    #[error("invalid data")]
    DataInvalid,
    /// The `type` member is absent.
    #[error("type is missing")]
    TypeMissing,
    /// The `type` member is not a string or names an unexpected kind.
    #[error("type is invalid")]
    TypeInvalid,
    /// The geometry payload member is absent.
    #[error("coordinates are missing")]
    CoordinatesMissing,
    /// The geometry payload is malformed, or the geometry is invalid under strict validation.
    #[error("coordinates are invalid")]
    CoordinatesInvalid,
}
