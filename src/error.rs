//! Fatal generation errors.
//!
//! Data-quality conflicts (duplicate endpoints, duplicate signatures) are
//! warnings handled by the collision resolver; the variants here are invariant
//! violations in the extracted metadata. Each one carries enough endpoint
//! context to locate the offending entry, and a client that hits one emits no
//! document at all.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// A parameter is flagged constant but carries no literal value.
    #[error("constant parameter '{parameter}' on {verb} {path} has no literal value")]
    ConstantWithoutLiteral {
        parameter: String,
        verb: &'static str,
        path: String,
    },

    /// A response payload type has no usable name.
    #[error("response type on {verb} {path} has no name")]
    UnnamableResponse { verb: &'static str, path: String },

    /// The extraction snapshot could not be parsed.
    #[error("{0}")]
    InvalidSnapshot(String),
}
