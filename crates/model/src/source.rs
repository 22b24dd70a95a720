//! Import sources and the source tree.
//!
//! A source names where external data comes from: a local file, a level of
//! a DGN model, or a level seen through a DGN reference attachment. Sources
//! are listed in user-significant order; a `Group` element nests an ordered
//! sub-collection, forming a strict tree.

use crate::types::SourceDataType;

/// A local file source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFileSource {
    /// Path to the source file.
    pub path: String,
    /// Kind of data the file contributes.
    pub data_type: SourceDataType,
}

/// A level within a DGN model, plus the underlying file fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DgnLevelSource {
    /// The containing file.
    pub file: LocalFileSource,
    /// Model identifier within the file.
    pub model_id: u32,
    /// Model name within the file.
    pub model_name: String,
    /// Level identifier within the model.
    pub level_id: u32,
    /// Level name within the model.
    pub level_name: String,
}

/// A DGN level seen through a reference attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DgnReferenceLevelSource {
    /// The referenced level.
    pub level: DgnLevelSource,
    /// Path of the reference attachment.
    pub reference_path: String,
    /// Logical name of the reference attachment.
    pub reference_name: String,
    /// Model name inside the referenced file.
    pub reference_model_name: String,
}

/// Legacy reference-level layout, before the reference model name was
/// recorded. Kept readable and writable so old files stay valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DgnReferenceLevelV0Source {
    /// The referenced level.
    pub level: DgnLevelSource,
    /// Path of the reference attachment.
    pub reference_path: String,
    /// Logical name of the reference attachment.
    pub reference_name: String,
}

/// An ordered nested sub-collection of sources.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceGroup {
    /// Nested records in user order.
    pub records: Vec<SourceRecord>,
}

/// One import source.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// A local file.
    LocalFile(LocalFileSource),
    /// A level of a DGN model.
    DgnLevel(DgnLevelSource),
    /// A level seen through a DGN reference attachment.
    DgnReferenceLevel(DgnReferenceLevelSource),
    /// Legacy reference-level layout without the reference model name.
    DgnReferenceLevelV0(DgnReferenceLevelV0Source),
    /// A nested ordered sub-collection.
    Group(SourceGroup),
}

/// A source plus its persistence-boundary metadata.
///
/// `last_modified` is attached by the source tree driver when records cross
/// the persistence boundary, never by a codec; later import runs compare it
/// against the live file to detect modified sources. Group records carry no
/// timestamp of their own (the flat layout emits no record for the group
/// itself), so for a `Group` it stays 0.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRecord {
    /// The source itself.
    pub source: Source,
    /// Last-modified stamp, opaque to the engine.
    pub last_modified: u64,
}

impl SourceRecord {
    /// Wrap a source with its last-modified stamp.
    pub fn new(source: Source, last_modified: u64) -> Self {
        SourceRecord {
            source,
            last_modified,
        }
    }

    /// Wrap a group; groups carry no timestamp.
    pub fn group(group: SourceGroup) -> Self {
        SourceRecord {
            source: Source::Group(group),
            last_modified: 0,
        }
    }
}

/// An ordered collection of source records.
///
/// Order is user-significant; persistence round-trips it exactly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceCollection {
    /// Records in user order.
    pub records: Vec<SourceRecord>,
}

impl SourceCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn push(&mut self, record: SourceRecord) {
        self.records.push(record);
    }

    /// Number of top-level records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
