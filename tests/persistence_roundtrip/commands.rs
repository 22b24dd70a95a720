//! Import sequence round-trips and order preservation.

use terramesh::{
    load_import_sequence, save_import_sequence, ImportCommand, ImportSequence, MemoryRecordStore,
    SourceDataType,
};

/// One command of every kind, in tag order.
pub fn one_of_each() -> Vec<ImportCommand> {
    let dt = SourceDataType::Contour;
    let tt = SourceDataType::Raster;
    vec![
        ImportCommand::All,
        ImportCommand::AllToLayer { target_layer: 2 },
        ImportCommand::AllToLayerType {
            target_layer: 2,
            target_type: tt,
        },
        ImportCommand::AllToType { target_type: tt },
        ImportCommand::Layer { layer: 1 },
        ImportCommand::LayerToLayer {
            layer: 1,
            target_layer: 2,
        },
        ImportCommand::LayerToLayerType {
            layer: 1,
            target_layer: 2,
            target_type: tt,
        },
        ImportCommand::LayerToType {
            layer: 1,
            target_type: tt,
        },
        ImportCommand::LayerType {
            layer: 1,
            data_type: dt,
        },
        ImportCommand::LayerTypeToLayer {
            layer: 1,
            data_type: dt,
            target_layer: 2,
        },
        ImportCommand::LayerTypeToLayerType {
            layer: 1,
            data_type: dt,
            target_layer: 2,
            target_type: tt,
        },
        ImportCommand::LayerTypeToType {
            layer: 1,
            data_type: dt,
            target_type: tt,
        },
        ImportCommand::Type { data_type: dt },
        ImportCommand::TypeToLayer {
            data_type: dt,
            target_layer: 2,
        },
        ImportCommand::TypeToLayerType {
            data_type: dt,
            target_layer: 2,
            target_type: tt,
        },
        ImportCommand::TypeToType {
            data_type: dt,
            target_type: tt,
        },
    ]
}

fn roundtrip(sequence: &ImportSequence) -> ImportSequence {
    let mut store = MemoryRecordStore::new();
    save_import_sequence(sequence, &mut store).expect("save");
    load_import_sequence(&mut store).expect("load")
}

#[test]
fn every_command_kind_roundtrips() {
    let sequence = ImportSequence {
        commands: one_of_each(),
    };
    assert_eq!(roundtrip(&sequence), sequence);
}

#[test]
fn order_is_preserved_not_canonicalized() {
    // Deliberately anti-sorted by tag, with duplicates
    let sequence = ImportSequence {
        commands: vec![
            ImportCommand::TypeToType {
                data_type: SourceDataType::Point,
                target_type: SourceDataType::Mesh,
            },
            ImportCommand::All,
            ImportCommand::Layer { layer: 5 },
            ImportCommand::All,
            ImportCommand::Layer { layer: 5 },
        ],
    };
    assert_eq!(roundtrip(&sequence), sequence);
}

#[test]
fn empty_sequence_fast_path() {
    let mut store = MemoryRecordStore::new();
    save_import_sequence(&ImportSequence::new(), &mut store).expect("save");
    assert_eq!(store.tag_count(), 0);
    assert_eq!(store.value_count(), 0);

    let loaded = load_import_sequence(&mut store).expect("load");
    assert!(loaded.is_empty());
}

#[test]
fn same_selectors_different_kinds_stay_distinct() {
    // Layer{1} and LayerToLayer{1,1} carry overlapping fields; the tag
    // keeps them apart.
    let sequence = ImportSequence {
        commands: vec![
            ImportCommand::Layer { layer: 1 },
            ImportCommand::LayerToLayer {
                layer: 1,
                target_layer: 1,
            },
        ],
    };
    assert_eq!(roundtrip(&sequence), sequence);
}
