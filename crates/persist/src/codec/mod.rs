//! Per-kind record codecs.
//!
//! One codec per concrete kind. A codec owns exactly its own fields: it
//! never reads or writes the record's tag (the collection driver's job) and
//! never a top-level count. Variable-length fields write an explicit count
//! and then exactly that many elements; enumerated fields are range-checked
//! before the cast, and an out-of-range value is a decode failure, not a
//! default substitution.
//!
//! # Thread Safety
//!
//! Codecs must be `Send + Sync`; the registries hand out shared references
//! from multiple threads.

pub mod command;
pub mod component;
pub mod source;

use crate::error::{DecodeError, EncodeError};
use crate::store::{DocumentEnv, RecordStore};
use terramesh_model::{ConfigComponent, ImportCommand, Source};

/// Codec for one configuration component kind.
pub trait ComponentCodec: Send + Sync {
    /// Write the component's fields to the store.
    fn encode(
        &self,
        component: &ConfigComponent,
        store: &mut dyn RecordStore,
    ) -> Result<(), EncodeError>;

    /// Reconstruct the component from the store.
    fn decode(&self, store: &mut dyn RecordStore) -> Result<ConfigComponent, DecodeError>;

    /// Kind name, for diagnostics.
    fn name(&self) -> &'static str;
}

/// Codec for one import command kind.
pub trait CommandCodec: Send + Sync {
    /// Write the command's selector fields to the store.
    fn encode(
        &self,
        command: &ImportCommand,
        store: &mut dyn RecordStore,
    ) -> Result<(), EncodeError>;

    /// Reconstruct the command from the store.
    fn decode(&self, store: &mut dyn RecordStore) -> Result<ImportCommand, DecodeError>;

    /// Kind name, for diagnostics.
    fn name(&self) -> &'static str;
}

/// Codec for one source kind.
///
/// The document environment is threaded through both directions for
/// external moniker/path resolution; the codecs here pass it along without
/// interpretation.
pub trait SourceCodec: Send + Sync {
    /// Write the source's fields to the store.
    fn encode(
        &self,
        source: &Source,
        env: &DocumentEnv,
        store: &mut dyn RecordStore,
    ) -> Result<(), EncodeError>;

    /// Reconstruct the source from the store.
    fn decode(
        &self,
        env: &DocumentEnv,
        store: &mut dyn RecordStore,
    ) -> Result<Source, DecodeError>;

    /// Kind name, for diagnostics.
    fn name(&self) -> &'static str;
}

/// Always-fails placeholder for kinds whose slot must survive in the tag
/// catalogue but whose payload is not supported: either never finalized
/// (GcsLocalAdjustment) or owned by a retired scheme (the legacy nested
/// Group layout).
///
/// Distinct from the unknown-future-tag condition: the tag is known and
/// in range, and hitting it is a hard, typed failure.
#[derive(Debug, Clone, Copy)]
pub struct UnsupportedCodec {
    name: &'static str,
}

impl UnsupportedCodec {
    /// Placeholder for the named kind.
    pub fn new(name: &'static str) -> Self {
        UnsupportedCodec { name }
    }
}

impl ComponentCodec for UnsupportedCodec {
    fn encode(
        &self,
        _component: &ConfigComponent,
        _store: &mut dyn RecordStore,
    ) -> Result<(), EncodeError> {
        Err(EncodeError::Unsupported(self.name))
    }

    fn decode(&self, _store: &mut dyn RecordStore) -> Result<ConfigComponent, DecodeError> {
        Err(DecodeError::Unsupported(self.name))
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl CommandCodec for UnsupportedCodec {
    fn encode(
        &self,
        _command: &ImportCommand,
        _store: &mut dyn RecordStore,
    ) -> Result<(), EncodeError> {
        Err(EncodeError::Unsupported(self.name))
    }

    fn decode(&self, _store: &mut dyn RecordStore) -> Result<ImportCommand, DecodeError> {
        Err(DecodeError::Unsupported(self.name))
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl SourceCodec for UnsupportedCodec {
    fn encode(
        &self,
        _source: &Source,
        _env: &DocumentEnv,
        _store: &mut dyn RecordStore,
    ) -> Result<(), EncodeError> {
        Err(EncodeError::Unsupported(self.name))
    }

    fn decode(
        &self,
        _env: &DocumentEnv,
        _store: &mut dyn RecordStore,
    ) -> Result<Source, DecodeError> {
        Err(DecodeError::Unsupported(self.name))
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
