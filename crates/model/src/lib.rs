//! Domain value types for terrain/mesh import configuration.
//!
//! This crate defines the object model the persistence engine serializes:
//! - ConfigComponent: content configuration components (GCS, typing, layers)
//! - ImportCommand: the sixteen import command kinds
//! - Source: import source provenance records, including nested groups
//! - Closed wire enums (SourceDataType, DimensionRole, StandardDimension)
//! - Gcs: opaque, equality-comparable geo-coordinate-system value
//!
//! All values are plain owned data: constructed fresh on decode, immutable
//! once built, and free of any back-reference to the storage layer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod command;
pub mod component;
pub mod gcs;
pub mod source;
pub mod types;

// Re-export commonly used types at the crate root
pub use command::{ImportCommand, ImportConfig, ImportSequence};
pub use component::{
    ConfigComponent, ContentConfig, DimensionDef, DimensionGroup, DimensionKind, GcsFlags,
    TypeComponent,
};
pub use gcs::{Gcs, GcsError, WktFlavor};
pub use source::{
    DgnLevelSource, DgnReferenceLevelSource, DgnReferenceLevelV0Source, LocalFileSource, Source,
    SourceCollection, SourceGroup, SourceRecord,
};
pub use types::{DimensionRole, SourceDataType, StandardDimension};
