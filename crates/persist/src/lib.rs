//! Versioned, self-describing, polymorphic persistence for terrain/mesh
//! import configuration.
//!
//! The engine encodes configuration components, import commands, and
//! source provenance records to a flat, orderable record stream and
//! reconstructs them from it:
//!
//! - [`store`]: the abstract record sink/source, plus the in-memory
//!   reference implementation with a framed byte envelope
//! - [`registry`]: stable wire tags and the append-only codec registries
//! - [`codec`]: one codec per concrete kind
//! - [`dispatch`]: exhaustive visitor dispatch from values to tags
//! - [`collection`]: count-prefixed tagged record streams, with canonical
//!   ordering for content configurations and forward tolerance for kinds
//!   introduced by newer writers
//! - [`version`]: per-section format version gate
//! - [`source_tree`]: flat group-id persistence of the recursive source
//!   tree
//! - [`session`]: the per-section save/load entry points
//!
//! # Compatibility model
//!
//! Unknown trailing kinds from a newer writer truncate a collection
//! gracefully (forward compatibility); a stored section version newer
//! than this build is a hard failure (the layout of existing kinds
//! changed); old files always load because tags are never removed or
//! reinterpreted.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod collection;
pub mod dispatch;
pub mod error;
pub mod registry;
pub mod session;
pub mod source_tree;
pub mod store;
pub mod version;

pub use error::{DecodeError, EncodeError, PersistError, PersistResult};
pub use registry::{
    command_registry, component_registry, source_registry, CommandTag, ComponentTag, Registry,
    SourceTag,
};
pub use session::{
    load_content_config, load_import_config, load_import_sequence, load_sources,
    save_content_config, save_import_config, save_import_sequence, save_sources,
};
pub use source_tree::NO_GROUP_ID;
pub use store::{
    DocumentEnv, FieldValue, MemoryRecordStore, RecordStore, Section, StoreEnvelopeError,
    StoreError,
};
pub use version::{FormatVersions, VersionError, CURRENT_FORMAT_VERSIONS};
