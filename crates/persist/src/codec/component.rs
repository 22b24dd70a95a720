//! Configuration component codecs.
//!
//! Field layouts (value stream, in order):
//!
//! - `Gcs`: wkt(str)
//! - `GcsExtended`: wkt(str) + flags(u32)
//! - `DataType`: family(u32) + group_count(u32) + per group:
//!   dim_count(u32) + per dimension: id(u32, `CUSTOM_DIMENSION` sentinel
//!   followed by name(str) for custom) + role(u32)
//! - `Layer`: id(u32) + nested component list (inline count + tagged
//!   records, canonicalized by the collection driver)
//! - `ScalableMeshData`: payload(bytes)

use super::ComponentCodec;
use crate::collection;
use crate::error::{DecodeError, EncodeError};
use crate::store::RecordStore;
use terramesh_model::{
    ConfigComponent, DimensionDef, DimensionGroup, DimensionKind, DimensionRole, Gcs, GcsFlags,
    SourceDataType, StandardDimension, TypeComponent, WktFlavor,
};

/// Sentinel dimension id marking a custom, named dimension.
pub const CUSTOM_DIMENSION: u32 = u32::MAX;

/// Codec for the plain GCS component.
pub struct GcsComponentCodec;

impl ComponentCodec for GcsComponentCodec {
    fn encode(
        &self,
        component: &ConfigComponent,
        store: &mut dyn RecordStore,
    ) -> Result<(), EncodeError> {
        let ConfigComponent::Gcs(gcs) = component else {
            return Err(EncodeError::WrongKind { codec: self.name() });
        };
        store.put_str(gcs.to_wkt()?);
        Ok(())
    }

    fn decode(&self, store: &mut dyn RecordStore) -> Result<ConfigComponent, DecodeError> {
        let wkt = store.take_str()?;
        let gcs = Gcs::from_wkt(&wkt, WktFlavor::Ogc)
            .map_err(|e| DecodeError::Malformed(format!("GCS component: {}", e)))?;
        Ok(ConfigComponent::Gcs(gcs))
    }

    fn name(&self) -> &'static str {
        "Gcs"
    }
}

/// Codec for the flagged GCS component.
pub struct GcsExtendedComponentCodec;

impl ComponentCodec for GcsExtendedComponentCodec {
    fn encode(
        &self,
        component: &ConfigComponent,
        store: &mut dyn RecordStore,
    ) -> Result<(), EncodeError> {
        let ConfigComponent::GcsExtended { gcs, flags } = component else {
            return Err(EncodeError::WrongKind { codec: self.name() });
        };
        store.put_str(gcs.to_wkt()?);
        store.put_u32(flags.to_bits());
        Ok(())
    }

    fn decode(&self, store: &mut dyn RecordStore) -> Result<ConfigComponent, DecodeError> {
        let wkt = store.take_str()?;
        let gcs = Gcs::from_wkt(&wkt, WktFlavor::Ogc)
            .map_err(|e| DecodeError::Malformed(format!("extended GCS component: {}", e)))?;
        let bits = store.take_u32()?;
        let flags = GcsFlags::from_bits(bits).ok_or_else(|| {
            DecodeError::Malformed(format!("unknown GCS flag bits: {:#x}", bits))
        })?;
        Ok(ConfigComponent::GcsExtended { gcs, flags })
    }

    fn name(&self) -> &'static str {
        "GcsExtended"
    }
}

/// Codec for the data typing component.
pub struct DataTypeComponentCodec;

impl ComponentCodec for DataTypeComponentCodec {
    fn encode(
        &self,
        component: &ConfigComponent,
        store: &mut dyn RecordStore,
    ) -> Result<(), EncodeError> {
        let ConfigComponent::DataType(typing) = component else {
            return Err(EncodeError::WrongKind { codec: self.name() });
        };
        store.put_u32(typing.family.as_u32());
        store.put_u32(typing.groups.len() as u32);
        for group in &typing.groups {
            store.put_u32(group.dimensions.len() as u32);
            for dimension in &group.dimensions {
                match &dimension.kind {
                    DimensionKind::Standard(standard) => store.put_u32(standard.as_u32()),
                    DimensionKind::Custom(custom_name) => {
                        store.put_u32(CUSTOM_DIMENSION);
                        store.put_str(custom_name);
                    }
                }
                store.put_u32(dimension.role.as_u32());
            }
        }
        Ok(())
    }

    fn decode(&self, store: &mut dyn RecordStore) -> Result<ConfigComponent, DecodeError> {
        let family_raw = store.take_u32()?;
        let family = SourceDataType::from_u32(family_raw).ok_or_else(|| {
            DecodeError::Malformed(format!("type family out of range: {}", family_raw))
        })?;

        let group_count = store.take_u32()?;
        if group_count == 0 {
            return Err(DecodeError::Malformed(
                "data type component with zero dimension organization groups".to_string(),
            ));
        }

        let mut groups = Vec::new();
        for _ in 0..group_count {
            let dim_count = store.take_u32()?;
            let mut dimensions = Vec::new();
            for _ in 0..dim_count {
                let id = store.take_u32()?;
                let kind = if id == CUSTOM_DIMENSION {
                    DimensionKind::Custom(store.take_str()?)
                } else {
                    DimensionKind::Standard(StandardDimension::from_u32(id).ok_or_else(|| {
                        DecodeError::Malformed(format!("dimension id out of range: {}", id))
                    })?)
                };
                let role_raw = store.take_u32()?;
                let role = DimensionRole::from_u32(role_raw).ok_or_else(|| {
                    DecodeError::Malformed(format!("dimension role out of range: {}", role_raw))
                })?;
                dimensions.push(DimensionDef { kind, role });
            }
            groups.push(DimensionGroup { dimensions });
        }

        Ok(ConfigComponent::DataType(TypeComponent { family, groups }))
    }

    fn name(&self) -> &'static str {
        "DataType"
    }
}

/// Codec for the layer component.
///
/// The nested component list goes through the collection driver, so a
/// layer's children are canonicalized by tag exactly like the top level.
pub struct LayerComponentCodec;

impl ComponentCodec for LayerComponentCodec {
    fn encode(
        &self,
        component: &ConfigComponent,
        store: &mut dyn RecordStore,
    ) -> Result<(), EncodeError> {
        let ConfigComponent::Layer { id, components } = component else {
            return Err(EncodeError::WrongKind { codec: self.name() });
        };
        store.put_u32(*id);
        collection::encode_components_inline(components, store)
    }

    fn decode(&self, store: &mut dyn RecordStore) -> Result<ConfigComponent, DecodeError> {
        let id = store.take_u32()?;
        let components = collection::decode_components_inline(store)?;
        Ok(ConfigComponent::Layer { id, components })
    }

    fn name(&self) -> &'static str {
        "Layer"
    }
}

/// Codec for the opaque scalable-mesh payload.
pub struct ScalableMeshDataComponentCodec;

impl ComponentCodec for ScalableMeshDataComponentCodec {
    fn encode(
        &self,
        component: &ConfigComponent,
        store: &mut dyn RecordStore,
    ) -> Result<(), EncodeError> {
        let ConfigComponent::ScalableMeshData(payload) = component else {
            return Err(EncodeError::WrongKind { codec: self.name() });
        };
        store.put_bytes(payload);
        Ok(())
    }

    fn decode(&self, store: &mut dyn RecordStore) -> Result<ConfigComponent, DecodeError> {
        Ok(ConfigComponent::ScalableMeshData(store.take_bytes()?))
    }

    fn name(&self) -> &'static str {
        "ScalableMeshData"
    }
}
