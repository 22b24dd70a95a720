//! Forward tolerance, the version gate, and permanently unsupported kinds.

use crate::{fresh, leaf, sample_gcs};
use terramesh::{
    component_registry, load_content_config, load_import_sequence, load_sources,
    save_content_config, save_import_sequence, save_sources, source_registry, ConfigComponent,
    ContentConfig, DecodeError, EncodeError, ImportSequence, MemoryRecordStore, PersistError,
    RecordStore, Section, SourceCollection, CURRENT_FORMAT_VERSIONS,
};

// =============================================================================
// FORWARD TOLERANCE
// =============================================================================

#[test]
fn future_component_kind_truncates_without_error() {
    // count=3, tags=[0, N, 1] with N beyond the registry. Only the
    // first record survives; no error.
    let mut config = ContentConfig::new();
    config.push(ConfigComponent::Gcs(sample_gcs()));

    let mut store = MemoryRecordStore::new();
    save_content_config(&config, &mut store).expect("save");

    store.set_component_count(3);
    store.push_tag(component_registry().count() as u32);
    store.push_tag(1);

    let loaded = load_content_config(&mut store).expect("forward tolerance is not an error");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.components[0], ConfigComponent::Gcs(sample_gcs()));
}

#[test]
fn future_source_kind_truncates_without_error() {
    let (mut store, env) = fresh();
    let mut collection = SourceCollection::new();
    collection.push(leaf("keep.xyz", 1));
    save_sources(&collection, &env, &mut store).expect("save");

    store.set_source_count(2);
    store.push_tag(source_registry().count() as u32);

    let loaded = load_sources(&env, &mut store).expect("forward tolerance is not an error");
    assert_eq!(loaded.len(), 1);
}

#[test]
fn future_tag_as_first_record_yields_empty_collection() {
    let mut store = MemoryRecordStore::new();
    save_content_config(&ContentConfig::new(), &mut store).expect("save");
    store.set_component_count(1);
    store.push_tag(9999);

    let loaded = load_content_config(&mut store).expect("load");
    assert!(loaded.is_empty());
}

// =============================================================================
// VERSION GATE
// =============================================================================

#[test]
fn newer_stored_version_is_fatal() {
    let mut store = MemoryRecordStore::new();
    save_content_config(&ContentConfig::new(), &mut store).expect("save");
    store.set_format_version(
        Section::ContentConfig,
        CURRENT_FORMAT_VERSIONS.content_config + 1,
    );

    assert!(matches!(
        load_content_config(&mut store),
        Err(PersistError::Version(_))
    ));
}

#[test]
fn equal_and_older_stored_versions_pass() {
    for stored in [
        CURRENT_FORMAT_VERSIONS.import_sequence,
        CURRENT_FORMAT_VERSIONS.import_sequence - 1,
    ] {
        let mut store = MemoryRecordStore::new();
        save_import_sequence(&ImportSequence::new(), &mut store).expect("save");
        store.set_format_version(Section::ImportSequence, stored);
        assert!(load_import_sequence(&mut store).is_ok());
    }
}

#[test]
fn version_gate_runs_before_any_record_is_read() {
    // A version-skewed store with a malformed record stream still fails
    // with the version error, not the decode error.
    let mut store = MemoryRecordStore::new();
    store.set_format_version(Section::ContentConfig, u32::MAX);
    store.set_component_count(1);
    store.push_tag(0);

    assert!(matches!(
        load_content_config(&mut store),
        Err(PersistError::Version(_))
    ));
}

#[test]
fn missing_version_slot_is_a_hard_failure() {
    let mut store = MemoryRecordStore::new();
    store.set_component_count(0);
    assert!(matches!(
        load_content_config(&mut store),
        Err(PersistError::Decode(DecodeError::Store(_)))
    ));
}

// =============================================================================
// PERMANENTLY UNSUPPORTED KINDS
// =============================================================================

#[test]
fn gcs_local_adjustment_never_encodes() {
    let mut config = ContentConfig::new();
    config.push(ConfigComponent::GcsLocalAdjustment);

    let mut store = MemoryRecordStore::new();
    let err = save_content_config(&config, &mut store).unwrap_err();
    assert_eq!(
        err,
        PersistError::Encode(EncodeError::Unsupported("GcsLocalAdjustment"))
    );
}

#[test]
fn gcs_local_adjustment_never_decodes() {
    // Tag 2 is known and in range; this is a hard failure, not the
    // future-tag truncation.
    let mut store = MemoryRecordStore::new();
    save_content_config(&ContentConfig::new(), &mut store).expect("save");
    store.set_component_count(1);
    store.push_tag(2);

    let err = load_content_config(&mut store).unwrap_err();
    assert_eq!(
        err,
        PersistError::Decode(DecodeError::Unsupported("GcsLocalAdjustment"))
    );
}

#[test]
fn legacy_nested_group_records_are_rejected() {
    let (mut store, env) = fresh();
    save_sources(&SourceCollection::new(), &env, &mut store).expect("save");
    store.set_source_count(1);
    store.push_tag(4); // the legacy Group tag
    store.put_u32(terramesh::NO_GROUP_ID);
    store.put_u64(0);

    let err = load_sources(&env, &mut store).unwrap_err();
    assert_eq!(
        err,
        PersistError::Decode(DecodeError::Unsupported("Group"))
    );
}
