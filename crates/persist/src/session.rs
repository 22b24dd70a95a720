//! Top-level save/load entry points.
//!
//! One call per logical section, operating on a caller-owned record store.
//! Saves stamp the section's current format version; loads run the version
//! gate before touching any record. Everything is synchronous and runs to
//! completion on the calling thread; concurrent operations need distinct
//! store instances (the registries are read-only and shared freely).
//!
//! All failures come back as typed [`PersistError`] results. The only
//! "partial" outcome a caller can observe is the deliberate
//! forward-compatibility truncation inside the collection driver, which is
//! a successful terminal state.

use crate::collection;
use crate::error::{DecodeError, PersistError, PersistResult};
use crate::source_tree;
use crate::store::{DocumentEnv, RecordStore, Section, StoreError};
use crate::version::{self, CURRENT_FORMAT_VERSIONS};
use terramesh_model::{ContentConfig, ImportConfig, ImportSequence, SourceCollection};
use tracing::debug;

fn stored_version(store: &dyn RecordStore, section: Section) -> Result<u32, PersistError> {
    store
        .format_version(section)
        .ok_or(PersistError::Decode(DecodeError::Store(
            StoreError::MissingVersion(section),
        )))
}

/// Save a source collection.
pub fn save_sources(
    collection: &SourceCollection,
    env: &DocumentEnv,
    store: &mut dyn RecordStore,
) -> PersistResult<()> {
    debug!(records = collection.len(), "saving source collection");
    store.set_format_version(Section::Source, CURRENT_FORMAT_VERSIONS.source);
    source_tree::encode_source_collection(collection, env, store)?;
    Ok(())
}

/// Load a source collection.
pub fn load_sources(
    env: &DocumentEnv,
    store: &mut dyn RecordStore,
) -> PersistResult<SourceCollection> {
    let stored = stored_version(store, Section::Source)?;
    version::check_section(Section::Source, stored, CURRENT_FORMAT_VERSIONS.source)?;
    let collection = source_tree::decode_source_collection(env, store)?;
    debug!(records = collection.len(), "loaded source collection");
    Ok(collection)
}

/// Save a content configuration.
pub fn save_content_config(
    config: &ContentConfig,
    store: &mut dyn RecordStore,
) -> PersistResult<()> {
    debug!(components = config.len(), "saving content configuration");
    store.set_format_version(
        Section::ContentConfig,
        CURRENT_FORMAT_VERSIONS.content_config,
    );
    collection::encode_content_config(config, store)?;
    Ok(())
}

/// Load a content configuration.
pub fn load_content_config(store: &mut dyn RecordStore) -> PersistResult<ContentConfig> {
    let stored = stored_version(store, Section::ContentConfig)?;
    version::check_section(
        Section::ContentConfig,
        stored,
        CURRENT_FORMAT_VERSIONS.content_config,
    )?;
    let config = collection::decode_content_config(store)?;
    debug!(components = config.len(), "loaded content configuration");
    Ok(config)
}

/// Save an import sequence.
pub fn save_import_sequence(
    sequence: &ImportSequence,
    store: &mut dyn RecordStore,
) -> PersistResult<()> {
    debug!(commands = sequence.len(), "saving import sequence");
    store.set_format_version(
        Section::ImportSequence,
        CURRENT_FORMAT_VERSIONS.import_sequence,
    );
    collection::encode_import_sequence(sequence, store)?;
    Ok(())
}

/// Load an import sequence.
pub fn load_import_sequence(store: &mut dyn RecordStore) -> PersistResult<ImportSequence> {
    let stored = stored_version(store, Section::ImportSequence)?;
    version::check_section(
        Section::ImportSequence,
        stored,
        CURRENT_FORMAT_VERSIONS.import_sequence,
    )?;
    let sequence = collection::decode_import_sequence(store)?;
    debug!(commands = sequence.len(), "loaded import sequence");
    Ok(sequence)
}

/// Save a combined import configuration (content + sequence).
pub fn save_import_config(config: &ImportConfig, store: &mut dyn RecordStore) -> PersistResult<()> {
    debug!(
        components = config.content.len(),
        commands = config.sequence.len(),
        "saving import configuration"
    );
    store.set_format_version(Section::ImportConfig, CURRENT_FORMAT_VERSIONS.import_config);
    collection::encode_content_config(&config.content, store)?;
    collection::encode_import_sequence(&config.sequence, store)?;
    Ok(())
}

/// Load a combined import configuration.
pub fn load_import_config(store: &mut dyn RecordStore) -> PersistResult<ImportConfig> {
    let stored = stored_version(store, Section::ImportConfig)?;
    version::check_section(
        Section::ImportConfig,
        stored,
        CURRENT_FORMAT_VERSIONS.import_config,
    )?;
    let content = collection::decode_content_config(store)?;
    let sequence = collection::decode_import_sequence(store)?;
    debug!(
        components = content.len(),
        commands = sequence.len(),
        "loaded import configuration"
    );
    Ok(ImportConfig { content, sequence })
}
