//! Error types for the persistence engine.
//!
//! One enum per failure family, composed into the umbrella `PersistError`
//! returned by the top-level save/load entry points. We use `thiserror` for
//! automatic `Display` and `Error` trait implementations.

use crate::store::StoreError;
use crate::version::VersionError;
use terramesh_model::GcsError;
use thiserror::Error;

/// Result type alias for encode operations
pub type EncodeResult<T> = std::result::Result<T, EncodeError>;

/// Result type alias for decode operations
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// Result type alias for top-level save/load operations
pub type PersistResult<T> = std::result::Result<T, PersistError>;

/// Encode-side failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The kind is permanently unsupported on the wire.
    #[error("kind {0} cannot be encoded")]
    Unsupported(&'static str),

    /// A codec was handed a value of a different kind than it owns.
    #[error("codec {codec} dispatched with a mismatched value")]
    WrongKind {
        /// Name of the codec that rejected the value.
        codec: &'static str,
    },

    /// GCS serialization failed.
    #[error("GCS serialization failed: {0}")]
    Gcs(#[from] GcsError),
}

/// Decode-side failures.
///
/// Note that meeting a tag beyond the registry's current size is NOT an
/// error: the collection driver treats it as a newer-writer condition and
/// truncates gracefully.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Record store access failed (exhausted stream, type mismatch,
    /// missing count or version slot).
    #[error("record store: {0}")]
    Store(#[from] StoreError),

    /// Known tag, but the payload failed codec-level validation.
    #[error("malformed payload: {0}")]
    Malformed(String),

    /// The kind is permanently unsupported on the wire.
    #[error("kind {0} cannot be decoded")]
    Unsupported(&'static str),

    /// A source record's group id moved backwards; group ids are allocated
    /// monotonically, so reuse is diagnostic of a corrupt stream.
    #[error("group id ordering corruption: id {found} after id {last} was closed")]
    GroupOrder {
        /// Highest group id already closed.
        last: u32,
        /// The offending id.
        found: u32,
    },
}

/// Umbrella error for the top-level save/load entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistError {
    /// Encoding failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Decoding failed.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The stored format version is newer than this reader understands.
    #[error(transparent)]
    Version(#[from] VersionError),
}

impl From<StoreError> for PersistError {
    fn from(e: StoreError) -> Self {
        PersistError::Decode(DecodeError::Store(e))
    }
}
