//! Collection driver: count-prefixed, tagged record streams.
//!
//! Encode writes the element count, then one tagged record per element.
//! Content configurations are canonicalized first — the buffered dispatch
//! pairs are stable-sorted by tag ascending, so wire order is independent
//! of build order and two configs holding the same component multiset
//! encode identically. Import sequences are order-significant and are
//! never reordered.
//!
//! Decode reads the declared count and pops one tag per element. A tag
//! beyond the registry's current size is the newer-serialization
//! condition: the loop stops immediately and the records read so far come
//! back as a successful, truncated collection. A known tag whose codec
//! fails is a hard failure for the whole collection.

use crate::dispatch::{command_tag, dispatch_components};
use crate::error::{DecodeError, EncodeError};
use crate::registry::{command_registry, component_registry};
use crate::store::RecordStore;
use terramesh_model::{ConfigComponent, ContentConfig, ImportSequence};
use tracing::warn;

/// Encode a content configuration into the store's component section.
pub fn encode_content_config(
    config: &ContentConfig,
    store: &mut dyn RecordStore,
) -> Result<(), EncodeError> {
    // Empty packets are cheap to write and cheap to skip on read.
    if config.is_empty() {
        store.set_component_count(0);
        return Ok(());
    }
    store.set_component_count(config.len() as u32);
    encode_component_records(&config.components, store)
}

/// Encode a nested component list inline in the value stream.
///
/// Used by the layer codec; nested lists carry their count in-stream
/// rather than in the dedicated slot, and are canonicalized the same way
/// as the top level.
pub(crate) fn encode_components_inline(
    components: &[ConfigComponent],
    store: &mut dyn RecordStore,
) -> Result<(), EncodeError> {
    store.put_u32(components.len() as u32);
    encode_component_records(components, store)
}

fn encode_component_records(
    components: &[ConfigComponent],
    store: &mut dyn RecordStore,
) -> Result<(), EncodeError> {
    let mut pairs = dispatch_components(components);
    pairs.sort_by_key(|(tag, _)| *tag);

    let registry = component_registry();
    for (tag, component) in pairs {
        let codec = registry
            .lookup(tag.as_u32())
            .expect("dispatched tags are always registered");
        store.push_tag(tag.as_u32());
        codec.encode(component, store)?;
    }
    Ok(())
}

/// Decode a content configuration from the store's component section.
pub fn decode_content_config(store: &mut dyn RecordStore) -> Result<ContentConfig, DecodeError> {
    let count = store.component_count()?;
    Ok(ContentConfig {
        components: decode_component_records(count, store)?,
    })
}

/// Decode a nested component list from the value stream.
pub(crate) fn decode_components_inline(
    store: &mut dyn RecordStore,
) -> Result<Vec<ConfigComponent>, DecodeError> {
    let count = store.take_u32()?;
    decode_component_records(count, store)
}

fn decode_component_records(
    count: u32,
    store: &mut dyn RecordStore,
) -> Result<Vec<ConfigComponent>, DecodeError> {
    let registry = component_registry();
    let mut components = Vec::new();
    for _ in 0..count {
        let tag = store.pop_tag()?;
        let Some(codec) = registry.lookup(tag) else {
            warn!(
                tag,
                known = registry.count(),
                "component kind from a newer writer; keeping the records read so far"
            );
            break;
        };
        components.push(codec.decode(store)?);
    }
    Ok(components)
}

/// Encode an import sequence into the store's command section.
///
/// Order-significant: commands are written exactly as presented.
pub fn encode_import_sequence(
    sequence: &ImportSequence,
    store: &mut dyn RecordStore,
) -> Result<(), EncodeError> {
    if sequence.is_empty() {
        store.set_command_count(0);
        return Ok(());
    }
    store.set_command_count(sequence.len() as u32);

    let registry = command_registry();
    for command in &sequence.commands {
        let tag = command_tag(command);
        let codec = registry
            .lookup(tag.as_u32())
            .expect("dispatched tags are always registered");
        store.push_tag(tag.as_u32());
        codec.encode(command, store)?;
    }
    Ok(())
}

/// Decode an import sequence from the store's command section.
pub fn decode_import_sequence(store: &mut dyn RecordStore) -> Result<ImportSequence, DecodeError> {
    let count = store.command_count()?;
    let registry = command_registry();
    let mut sequence = ImportSequence::new();
    for _ in 0..count {
        let tag = store.pop_tag()?;
        let Some(codec) = registry.lookup(tag) else {
            warn!(
                tag,
                known = registry.count(),
                "command kind from a newer writer; keeping the records read so far"
            );
            break;
        };
        sequence.push(codec.decode(store)?);
    }
    Ok(sequence)
}
