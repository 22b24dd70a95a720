//! In-memory reference record store.
//!
//! Backs tests and single-file tooling. The store is plain data and
//! serializes to a framed byte envelope:
//!
//! ```text
//! ┌───────────┬──────────────────┬─────────────────────┬──────────┐
//! │ Magic (4) │ Format Ver (4)   │ Payload (bincode)   │ CRC32 (4)│
//! └───────────┴──────────────────┴─────────────────────┴──────────┘
//! ```
//!
//! The CRC covers the payload only. A checksum mismatch, bad magic, or a
//! format version newer than this build are hard errors.

use super::{RecordStore, Section, StoreError};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::Path;

/// Magic bytes identifying a serialized record store: "TMRS"
pub const STORE_MAGIC: [u8; 4] = *b"TMRS";

/// Current byte envelope format version
pub const STORE_FORMAT_VERSION: u32 = 1;

/// One typed entry in the value stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// 32-bit unsigned field
    U32(u32),
    /// 64-bit unsigned field
    U64(u64),
    /// String field
    Str(String),
    /// Raw byte blob field
    Bytes(Vec<u8>),
}

impl FieldValue {
    /// Type name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::U32(_) => "u32",
            FieldValue::U64(_) => "u64",
            FieldValue::Str(_) => "str",
            FieldValue::Bytes(_) => "bytes",
        }
    }
}

/// Per-section format version slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
struct SectionVersions {
    source: Option<u32>,
    content_config: Option<u32>,
    import_sequence: Option<u32>,
    import_config: Option<u32>,
}

impl SectionVersions {
    fn slot_mut(&mut self, section: Section) -> &mut Option<u32> {
        match section {
            Section::Source => &mut self.source,
            Section::ContentConfig => &mut self.content_config,
            Section::ImportSequence => &mut self.import_sequence,
            Section::ImportConfig => &mut self.import_config,
        }
    }

    fn slot(&self, section: Section) -> Option<u32> {
        match section {
            Section::Source => self.source,
            Section::ContentConfig => self.content_config,
            Section::ImportSequence => self.import_sequence,
            Section::ImportConfig => self.import_config,
        }
    }
}

/// In-memory record store.
///
/// Equality compares the full persisted state, so two encodes producing
/// equal stores are byte-identical once enveloped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MemoryRecordStore {
    versions: SectionVersions,
    component_count: Option<u32>,
    command_count: Option<u32>,
    source_count: Option<u32>,
    tags: VecDeque<u32>,
    values: VecDeque<FieldValue>,
}

impl MemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tags currently queued.
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Number of field values currently queued.
    pub fn value_count(&self) -> usize {
        self.values.len()
    }

    /// Serialize to the framed byte envelope.
    pub fn to_bytes(&self) -> Result<Vec<u8>, StoreEnvelopeError> {
        let payload =
            bincode::serialize(self).map_err(|e| StoreEnvelopeError::Serialize(e.to_string()))?;

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&payload);
        let crc = hasher.finalize();

        let mut bytes = Vec::with_capacity(12 + payload.len());
        bytes.extend_from_slice(&STORE_MAGIC);
        bytes.extend_from_slice(&STORE_FORMAT_VERSION.to_le_bytes());
        bytes.extend_from_slice(&payload);
        bytes.extend_from_slice(&crc.to_le_bytes());
        Ok(bytes)
    }

    /// Deserialize from the framed byte envelope.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StoreEnvelopeError> {
        if bytes.len() < 12 {
            return Err(StoreEnvelopeError::Truncated);
        }

        let magic: [u8; 4] = bytes[0..4].try_into().expect("slice length checked");
        if magic != STORE_MAGIC {
            return Err(StoreEnvelopeError::BadMagic(magic));
        }

        let version = u32::from_le_bytes(bytes[4..8].try_into().expect("slice length checked"));
        if version > STORE_FORMAT_VERSION {
            return Err(StoreEnvelopeError::UnsupportedVersion(version));
        }

        let payload = &bytes[8..bytes.len() - 4];
        let stored_crc = u32::from_le_bytes(
            bytes[bytes.len() - 4..]
                .try_into()
                .expect("slice length checked"),
        );

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(payload);
        let computed_crc = hasher.finalize();
        if computed_crc != stored_crc {
            return Err(StoreEnvelopeError::ChecksumMismatch {
                expected: stored_crc,
                computed: computed_crc,
            });
        }

        bincode::deserialize(payload).map_err(|e| StoreEnvelopeError::Deserialize(e.to_string()))
    }

    /// Write the enveloped store to a file.
    pub fn save_to_file(&self, path: &Path) -> std::io::Result<()> {
        let bytes = self
            .to_bytes()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, bytes)
    }

    /// Read an enveloped store back from a file.
    pub fn load_from_file(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }
}

impl RecordStore for MemoryRecordStore {
    fn set_format_version(&mut self, section: Section, version: u32) {
        *self.versions.slot_mut(section) = Some(version);
    }

    fn format_version(&self, section: Section) -> Option<u32> {
        self.versions.slot(section)
    }

    fn set_component_count(&mut self, count: u32) {
        self.component_count = Some(count);
    }

    fn component_count(&self) -> Result<u32, StoreError> {
        self.component_count
            .ok_or(StoreError::MissingCount("component"))
    }

    fn set_command_count(&mut self, count: u32) {
        self.command_count = Some(count);
    }

    fn command_count(&self) -> Result<u32, StoreError> {
        self.command_count.ok_or(StoreError::MissingCount("command"))
    }

    fn set_source_count(&mut self, count: u32) {
        self.source_count = Some(count);
    }

    fn source_count(&self) -> Result<u32, StoreError> {
        self.source_count.ok_or(StoreError::MissingCount("source"))
    }

    fn push_tag(&mut self, tag: u32) {
        self.tags.push_back(tag);
    }

    fn pop_tag(&mut self) -> Result<u32, StoreError> {
        self.tags.pop_front().ok_or(StoreError::TagQueueEmpty)
    }

    fn put_u32(&mut self, value: u32) {
        self.values.push_back(FieldValue::U32(value));
    }

    fn take_u32(&mut self) -> Result<u32, StoreError> {
        match self.values.pop_front() {
            Some(FieldValue::U32(v)) => Ok(v),
            Some(other) => Err(StoreError::TypeMismatch {
                expected: "u32",
                found: other.kind(),
            }),
            None => Err(StoreError::Exhausted { expected: "u32" }),
        }
    }

    fn put_u64(&mut self, value: u64) {
        self.values.push_back(FieldValue::U64(value));
    }

    fn take_u64(&mut self) -> Result<u64, StoreError> {
        match self.values.pop_front() {
            Some(FieldValue::U64(v)) => Ok(v),
            Some(other) => Err(StoreError::TypeMismatch {
                expected: "u64",
                found: other.kind(),
            }),
            None => Err(StoreError::Exhausted { expected: "u64" }),
        }
    }

    fn put_str(&mut self, value: &str) {
        self.values.push_back(FieldValue::Str(value.to_string()));
    }

    fn take_str(&mut self) -> Result<String, StoreError> {
        match self.values.pop_front() {
            Some(FieldValue::Str(v)) => Ok(v),
            Some(other) => Err(StoreError::TypeMismatch {
                expected: "str",
                found: other.kind(),
            }),
            None => Err(StoreError::Exhausted { expected: "str" }),
        }
    }

    fn put_bytes(&mut self, value: &[u8]) {
        self.values.push_back(FieldValue::Bytes(value.to_vec()));
    }

    fn take_bytes(&mut self) -> Result<Vec<u8>, StoreError> {
        match self.values.pop_front() {
            Some(FieldValue::Bytes(v)) => Ok(v),
            Some(other) => Err(StoreError::TypeMismatch {
                expected: "bytes",
                found: other.kind(),
            }),
            None => Err(StoreError::Exhausted { expected: "bytes" }),
        }
    }
}

/// Byte envelope errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreEnvelopeError {
    /// Not enough bytes for the frame.
    #[error("store envelope truncated")]
    Truncated,

    /// Leading magic bytes do not identify a record store.
    #[error("bad store magic: {0:?}")]
    BadMagic([u8; 4]),

    /// Envelope format version is newer than this build.
    #[error("unsupported store envelope version: {0}")]
    UnsupportedVersion(u32),

    /// Checksum verification failed.
    #[error("checksum mismatch: expected {expected:08x}, computed {computed:08x}")]
    ChecksumMismatch {
        /// Expected checksum from the envelope.
        expected: u32,
        /// Checksum computed over the payload.
        computed: u32,
    },

    /// Payload serialization failed.
    #[error("payload serialize error: {0}")]
    Serialize(String),

    /// Payload deserialization failed.
    #[error("payload deserialize error: {0}")]
    Deserialize(String),
}
