//! Opaque geo-coordinate-system value.
//!
//! The engine treats a GCS as an equality-comparable black box built from a
//! well-known-text string. Actual coordinate-system interpretation lives in
//! an external geo library; the persistence layer only needs to carry the
//! text across the boundary intact.

use thiserror::Error;

/// Dialect hint for well-known-text parsing.
///
/// Passed through to the external GCS codec; the core never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WktFlavor {
    /// OGC WKT dialect
    #[default]
    Ogc,
    /// ESRI WKT dialect
    Esri,
}

/// GCS construction/serialization errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GcsError {
    /// Well-known text was empty or whitespace-only.
    #[error("empty well-known text")]
    EmptyWkt,
}

/// An opaque geo-coordinate system.
///
/// Constructed from well-known text and serialized back to it. Two values
/// are equal iff their text is equal. The flavor is a parse hint consumed
/// at construction time; it is not part of the value and is not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gcs {
    wkt: String,
}

impl Gcs {
    /// Build a GCS from well-known text.
    ///
    /// # Errors
    /// Returns `GcsError::EmptyWkt` if the text is empty or whitespace-only.
    pub fn from_wkt(wkt: &str, _flavor: WktFlavor) -> Result<Self, GcsError> {
        if wkt.trim().is_empty() {
            return Err(GcsError::EmptyWkt);
        }
        Ok(Gcs {
            wkt: wkt.to_string(),
        })
    }

    /// Serialize back to well-known text.
    pub fn to_wkt(&self) -> Result<&str, GcsError> {
        Ok(&self.wkt)
    }
}
