//! Content configuration round-trips and canonical ordering.

use crate::sample_gcs;
use terramesh::{
    load_content_config, save_content_config, ComponentTag, ConfigComponent, ContentConfig,
    DimensionDef, DimensionGroup, DimensionKind, DimensionRole, GcsFlags, MemoryRecordStore,
    SourceDataType, StandardDimension, TypeComponent,
};

fn point_typing() -> ConfigComponent {
    ConfigComponent::DataType(TypeComponent {
        family: SourceDataType::Point,
        groups: vec![DimensionGroup {
            dimensions: vec![
                DimensionDef {
                    kind: DimensionKind::Standard(StandardDimension::X),
                    role: DimensionRole::Geometry,
                },
                DimensionDef {
                    kind: DimensionKind::Standard(StandardDimension::Y),
                    role: DimensionRole::Geometry,
                },
                DimensionDef {
                    kind: DimensionKind::Standard(StandardDimension::Z),
                    role: DimensionRole::Geometry,
                },
            ],
        }],
    })
}

fn roundtrip(config: &ContentConfig) -> ContentConfig {
    let mut store = MemoryRecordStore::new();
    save_content_config(config, &mut store).expect("save");
    load_content_config(&mut store).expect("load")
}

#[test]
fn every_supported_component_kind_roundtrips() {
    let components = [
        ConfigComponent::Gcs(sample_gcs()),
        ConfigComponent::GcsExtended {
            gcs: sample_gcs(),
            flags: GcsFlags {
                prepend_local_transform: false,
                preserve_if_georeferenced: true,
                preserve_if_local_cs: true,
            },
        },
        point_typing(),
        ConfigComponent::Layer {
            id: 8,
            components: vec![point_typing()],
        },
        ConfigComponent::ScalableMeshData(vec![1, 2, 3, 4, 5]),
    ];

    for component in components {
        let mut config = ContentConfig::new();
        config.push(component.clone());
        let loaded = roundtrip(&config);
        assert_eq!(loaded.components, vec![component]);
    }
}

#[test]
fn canonical_ordering_is_build_order_independent() {
    // Same multiset of components, three build orders
    let parts = [
        ConfigComponent::ScalableMeshData(vec![7]),
        ConfigComponent::Gcs(sample_gcs()),
        point_typing(),
    ];

    let orders: [[usize; 3]; 3] = [[0, 1, 2], [2, 0, 1], [1, 2, 0]];
    let mut encoded = Vec::new();
    for order in orders {
        let mut config = ContentConfig::new();
        for index in order {
            config.push(parts[index].clone());
        }
        let mut store = MemoryRecordStore::new();
        save_content_config(&config, &mut store).expect("save");
        encoded.push(store.to_bytes().expect("envelope"));
    }
    assert_eq!(encoded[0], encoded[1]);
    assert_eq!(encoded[1], encoded[2]);
}

#[test]
fn decoded_config_comes_back_in_tag_order() {
    let mut config = ContentConfig::new();
    config.push(ConfigComponent::ScalableMeshData(vec![7]));
    config.push(ConfigComponent::Gcs(sample_gcs()));

    let loaded = roundtrip(&config);
    assert_eq!(loaded.components[0], ConfigComponent::Gcs(sample_gcs()));
    assert_eq!(
        loaded.components[1],
        ConfigComponent::ScalableMeshData(vec![7])
    );
}

#[test]
fn empty_config_fast_path() {
    let mut store = MemoryRecordStore::new();
    save_content_config(&ContentConfig::new(), &mut store).expect("save");
    assert_eq!(store.tag_count(), 0);
    assert_eq!(store.value_count(), 0);

    let loaded = load_content_config(&mut store).expect("load");
    assert!(loaded.is_empty());
}

#[test]
fn nested_layer_components_sort_independently_of_outer() {
    // One layer containing a GCS and a typing component. The nested
    // components were pushed in reverse tag order and must come back
    // sorted ascending, independently of the outer ordering.
    let mut config = ContentConfig::new();
    config.push(ConfigComponent::Layer {
        id: 3,
        components: vec![point_typing(), ConfigComponent::Gcs(sample_gcs())],
    });

    let loaded = roundtrip(&config);
    assert_eq!(loaded.len(), 1);
    let ConfigComponent::Layer { id, components } = &loaded.components[0] else {
        panic!("expected a layer");
    };
    assert_eq!(*id, 3);
    assert_eq!(components.len(), 2);
    // Gcs (tag 0) before DataType (tag 3)
    assert_eq!(components[0], ConfigComponent::Gcs(sample_gcs()));
    assert_eq!(components[1], point_typing());
}

#[test]
fn layers_nest_recursively() {
    let inner = ConfigComponent::Layer {
        id: 2,
        components: vec![ConfigComponent::Gcs(sample_gcs())],
    };
    let outer = ConfigComponent::Layer {
        id: 1,
        components: vec![inner.clone(), ConfigComponent::ScalableMeshData(vec![9])],
    };

    let mut config = ContentConfig::new();
    config.push(outer);
    let loaded = roundtrip(&config);

    let ConfigComponent::Layer { components, .. } = &loaded.components[0] else {
        panic!("expected a layer");
    };
    // Layer (tag 4) before ScalableMeshData (tag 5)
    assert_eq!(components[0], inner);
    assert!(matches!(
        components[1],
        ConfigComponent::ScalableMeshData(_)
    ));
}

#[test]
fn component_tag_order_is_stable() {
    // The wire catalogue; a reordering here is a format break.
    assert_eq!(ComponentTag::Gcs.as_u32(), 0);
    assert_eq!(ComponentTag::GcsExtended.as_u32(), 1);
    assert_eq!(ComponentTag::GcsLocalAdjustment.as_u32(), 2);
    assert_eq!(ComponentTag::DataType.as_u32(), 3);
    assert_eq!(ComponentTag::Layer.as_u32(), 4);
    assert_eq!(ComponentTag::ScalableMeshData.as_u32(), 5);
}
