//! Record sink/source abstraction.
//!
//! The engine never touches a storage medium directly; everything goes
//! through [`RecordStore`], an abstract key/value-oriented container with
//! per-section format-version slots, named count slots, a FIFO tag queue
//! marking record kinds in traversal order, and a typed FIFO value stream
//! for record fields. The concrete medium (an embedded relational store in
//! production) is external; [`MemoryRecordStore`] is the in-process
//! reference implementation.
//!
//! Top-level element counts live in the dedicated count slots; nested
//! counts (layer children, dimension groups) are written inline in the
//! value stream.

mod memory;

pub use memory::{
    FieldValue, MemoryRecordStore, StoreEnvelopeError, STORE_FORMAT_VERSION, STORE_MAGIC,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The four independently versioned logical sections of a persisted
/// import configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    /// Serialized source records.
    Source,
    /// Content configuration components.
    ContentConfig,
    /// Import command sequence.
    ImportSequence,
    /// Combined per-source import configuration.
    ImportConfig,
}

impl Section {
    /// Stable section name, as used in the persisted layout.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Source => "serializedSource",
            Section::ContentConfig => "contentConfig",
            Section::ImportSequence => "importSequence",
            Section::ImportConfig => "importConfig",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Record store access errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The typed value stream ran out while a field was expected.
    #[error("value stream exhausted reading {expected}")]
    Exhausted {
        /// Type of the field being read.
        expected: &'static str,
    },

    /// The next value in the stream has a different type than requested.
    #[error("value type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Type requested by the reader.
        expected: &'static str,
        /// Type actually at the head of the stream.
        found: &'static str,
    },

    /// The tag queue ran out while a tag was expected.
    #[error("tag queue exhausted")]
    TagQueueEmpty,

    /// A count slot was never written.
    #[error("missing {0} count")]
    MissingCount(&'static str),

    /// A section's format version slot was never written.
    #[error("missing format version for section {0}")]
    MissingVersion(Section),
}

/// Abstract record sink/source.
///
/// One store instance carries one save or load operation; concurrent
/// operations need distinct instances. Setters are infallible (the medium
/// buffers until the caller flushes it); getters fail when the requested
/// slot or stream entry is absent or mistyped.
pub trait RecordStore {
    /// Record a section's format version.
    fn set_format_version(&mut self, section: Section, version: u32);

    /// A section's stored format version, if the section is present.
    fn format_version(&self, section: Section) -> Option<u32>;

    /// Record the top-level component count.
    fn set_component_count(&mut self, count: u32);

    /// The stored top-level component count.
    fn component_count(&self) -> Result<u32, StoreError>;

    /// Record the top-level command count.
    fn set_command_count(&mut self, count: u32);

    /// The stored top-level command count.
    fn command_count(&self) -> Result<u32, StoreError>;

    /// Record the flattened source record count.
    fn set_source_count(&mut self, count: u32);

    /// The stored flattened source record count.
    fn source_count(&self) -> Result<u32, StoreError>;

    /// Append a record-kind tag to the tag queue.
    fn push_tag(&mut self, tag: u32);

    /// Pop the next record-kind tag.
    fn pop_tag(&mut self) -> Result<u32, StoreError>;

    /// Append a u32 field.
    fn put_u32(&mut self, value: u32);

    /// Pop the next field as a u32.
    fn take_u32(&mut self) -> Result<u32, StoreError>;

    /// Append a u64 field.
    fn put_u64(&mut self, value: u64);

    /// Pop the next field as a u64.
    fn take_u64(&mut self) -> Result<u64, StoreError>;

    /// Append a string field.
    fn put_str(&mut self, value: &str);

    /// Pop the next field as a string.
    fn take_str(&mut self) -> Result<String, StoreError>;

    /// Append a raw byte blob field.
    fn put_bytes(&mut self, value: &[u8]);

    /// Pop the next field as a byte blob.
    fn take_bytes(&mut self) -> Result<Vec<u8>, StoreError>;
}

/// Opaque document-environment context.
///
/// Threaded by reference through source encode/decode for external
/// collaborators that resolve monikers and relative paths; the engine
/// passes it along without interpretation.
#[derive(Debug, Clone, Default)]
pub struct DocumentEnv {
    root: Option<PathBuf>,
}

impl DocumentEnv {
    /// An environment with no resolution root.
    pub fn new() -> Self {
        Self::default()
    }

    /// An environment rooted at the given directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        DocumentEnv {
            root: Some(root.into()),
        }
    }

    /// The resolution root, if any.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }
}
