//! Source tree round-trips: flat records, groups, timestamps.

use crate::{fresh, leaf};
use terramesh::{
    load_sources, save_sources, DgnLevelSource, DgnReferenceLevelSource,
    DgnReferenceLevelV0Source, LocalFileSource, Source, SourceCollection, SourceDataType,
    SourceGroup, SourceRecord,
};

fn dgn_level() -> DgnLevelSource {
    DgnLevelSource {
        file: LocalFileSource {
            path: "designs/corridor.dgn".to_string(),
            data_type: SourceDataType::Breakline,
        },
        model_id: 1,
        model_name: "Default".to_string(),
        level_id: 30,
        level_name: "Existing Ground".to_string(),
    }
}

fn roundtrip(collection: &SourceCollection) -> SourceCollection {
    let (mut store, env) = fresh();
    save_sources(collection, &env, &mut store).expect("save");
    load_sources(&env, &mut store).expect("load")
}

#[test]
fn every_leaf_source_kind_roundtrips() {
    let sources = [
        Source::LocalFile(LocalFileSource {
            path: "terrain/pts.xyz".to_string(),
            data_type: SourceDataType::Point,
        }),
        Source::DgnLevel(dgn_level()),
        Source::DgnReferenceLevel(DgnReferenceLevelSource {
            level: dgn_level(),
            reference_path: "refs/master.dgn".to_string(),
            reference_name: "master".to_string(),
            reference_model_name: "Site".to_string(),
        }),
        Source::DgnReferenceLevelV0(DgnReferenceLevelV0Source {
            level: dgn_level(),
            reference_path: "refs/old.dgn".to_string(),
            reference_name: "old".to_string(),
        }),
    ];

    for (index, source) in sources.into_iter().enumerate() {
        let mut collection = SourceCollection::new();
        collection.push(SourceRecord::new(source, index as u64 + 1));
        assert_eq!(roundtrip(&collection), collection);
    }
}

#[test]
fn mixed_collection_preserves_order_and_timestamps() {
    let mut collection = SourceCollection::new();
    collection.push(leaf("c.xyz", 30));
    collection.push(leaf("a.xyz", 10));
    collection.push(SourceRecord::new(Source::DgnLevel(dgn_level()), 20));
    collection.push(leaf("a.xyz", 10));
    assert_eq!(roundtrip(&collection), collection);
}

#[test]
fn groups_flatten_and_rebuild() {
    let mut collection = SourceCollection::new();
    collection.push(leaf("ungrouped_head.xyz", 1));
    collection.push(SourceRecord::group(SourceGroup {
        records: vec![leaf("survey/east.xyz", 2), leaf("survey/west.xyz", 3)],
    }));
    collection.push(leaf("ungrouped_mid.xyz", 4));
    collection.push(SourceRecord::group(SourceGroup {
        records: vec![leaf("lidar/pass1.xyz", 5)],
    }));
    assert_eq!(roundtrip(&collection), collection);
}

#[test]
fn adjacent_groups_do_not_merge() {
    let mut collection = SourceCollection::new();
    collection.push(SourceRecord::group(SourceGroup {
        records: vec![leaf("g1.xyz", 1), leaf("g1b.xyz", 2)],
    }));
    collection.push(SourceRecord::group(SourceGroup {
        records: vec![leaf("g2.xyz", 3)],
    }));

    let loaded = roundtrip(&collection);
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded, collection);
}

#[test]
fn empty_collection_fast_path() {
    let (mut store, env) = fresh();
    save_sources(&SourceCollection::new(), &env, &mut store).expect("save");
    assert_eq!(store.tag_count(), 0);
    assert_eq!(store.value_count(), 0);

    let loaded = load_sources(&env, &mut store).expect("load");
    assert!(loaded.is_empty());
}

#[test]
fn empty_group_vanishes_on_reload() {
    // An empty group emits no flat records; nothing marks it on the
    // wire, so it cannot come back.
    let mut collection = SourceCollection::new();
    collection.push(SourceRecord::group(SourceGroup::default()));
    collection.push(leaf("after.xyz", 9));

    let loaded = roundtrip(&collection);
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.records[0], leaf("after.xyz", 9));
}

#[test]
fn group_timestamps_are_not_persisted() {
    let mut collection = SourceCollection::new();
    collection.push(SourceRecord {
        source: Source::Group(SourceGroup {
            records: vec![leaf("inner.xyz", 77)],
        }),
        last_modified: 12345, // not representable on the wire
    });

    let loaded = roundtrip(&collection);
    assert_eq!(loaded.records[0].last_modified, 0);
    let Source::Group(group) = &loaded.records[0].source else {
        panic!("expected group");
    };
    assert_eq!(group.records[0].last_modified, 77);
}
