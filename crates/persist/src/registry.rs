//! Record-kind tags and the type registries.
//!
//! Each closed kind catalogue (components, commands, sources) maps its
//! concrete kinds to small stable integers. The tag values are part of the
//! on-disk format and MUST NOT change: new kinds are appended at the end,
//! never inserted, reordered, or reused — even when a kind is later
//! deprecated its slot stays, holding an always-fails placeholder codec so
//! every later tag keeps its index.
//!
//! Registries are built lazily at first use and are read-only afterwards;
//! unsynchronized concurrent reads are safe.

use crate::codec::command::CommandKindCodec;
use crate::codec::component::{
    DataTypeComponentCodec, GcsComponentCodec, GcsExtendedComponentCodec, LayerComponentCodec,
    ScalableMeshDataComponentCodec,
};
use crate::codec::source::{
    DgnLevelSourceCodec, DgnReferenceLevelSourceCodec, DgnReferenceLevelV0SourceCodec,
    LocalFileSourceCodec,
};
use crate::codec::{CommandCodec, ComponentCodec, SourceCodec, UnsupportedCodec};
use once_cell::sync::Lazy;

/// Wire tags for configuration components.
///
/// ## Tag values
///
/// - Gcs = 0
/// - GcsExtended = 1
/// - GcsLocalAdjustment = 2 (permanently unsupported; slot preserved)
/// - DataType = 3
/// - Layer = 4
/// - ScalableMeshData = 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum ComponentTag {
    /// Geo-coordinate system
    Gcs = 0,
    /// Geo-coordinate system with behavior flags
    GcsExtended = 1,
    /// Local GCS adjustment (payload never finalized)
    GcsLocalAdjustment = 2,
    /// Data typing
    DataType = 3,
    /// Layer grouping
    Layer = 4,
    /// Opaque scalable-mesh payload
    ScalableMeshData = 5,
}

impl ComponentTag {
    /// Convert to the persisted representation.
    pub fn as_u32(&self) -> u32 {
        *self as u32
    }
}

/// Wire tags for import commands.
///
/// Source selector major, target selector minor; sixteen kinds total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
#[allow(missing_docs)]
pub enum CommandTag {
    All = 0,
    AllToLayer = 1,
    AllToLayerType = 2,
    AllToType = 3,
    Layer = 4,
    LayerToLayer = 5,
    LayerToLayerType = 6,
    LayerToType = 7,
    LayerType = 8,
    LayerTypeToLayer = 9,
    LayerTypeToLayerType = 10,
    LayerTypeToType = 11,
    Type = 12,
    TypeToLayer = 13,
    TypeToLayerType = 14,
    TypeToType = 15,
}

impl CommandTag {
    /// Convert to the persisted representation.
    pub fn as_u32(&self) -> u32 {
        *self as u32
    }

    /// Try to create from a persisted value.
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(CommandTag::All),
            1 => Some(CommandTag::AllToLayer),
            2 => Some(CommandTag::AllToLayerType),
            3 => Some(CommandTag::AllToType),
            4 => Some(CommandTag::Layer),
            5 => Some(CommandTag::LayerToLayer),
            6 => Some(CommandTag::LayerToLayerType),
            7 => Some(CommandTag::LayerToType),
            8 => Some(CommandTag::LayerType),
            9 => Some(CommandTag::LayerTypeToLayer),
            10 => Some(CommandTag::LayerTypeToLayerType),
            11 => Some(CommandTag::LayerTypeToType),
            12 => Some(CommandTag::Type),
            13 => Some(CommandTag::TypeToLayer),
            14 => Some(CommandTag::TypeToLayerType),
            15 => Some(CommandTag::TypeToType),
            _ => None,
        }
    }
}

/// Wire tags for sources.
///
/// The V0 reference-level layout predates the extended one, hence the tag
/// order. `Group` is reserved by the legacy nested scheme; the flat
/// group-id scheme never dispatches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum SourceTag {
    /// Local file
    LocalFile = 0,
    /// DGN model level
    DgnLevel = 1,
    /// Legacy reference level, no reference model name
    DgnReferenceLevelV0 = 2,
    /// Reference level
    DgnReferenceLevel = 3,
    /// Nested group (legacy nested scheme only)
    Group = 4,
}

impl SourceTag {
    /// Convert to the persisted representation.
    pub fn as_u32(&self) -> u32 {
        *self as u32
    }
}

/// Append-only ordered list of codecs indexed by tag.
///
/// `register` must be called in tag order at initialization time; lookups
/// never mutate.
pub struct Registry<C: ?Sized> {
    slots: Vec<Box<C>>,
}

impl<C: ?Sized> Registry<C> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Registry { slots: Vec::new() }
    }

    /// Append a codec at the given tag.
    ///
    /// # Panics
    /// Panics if `tag` is not the next free slot; tags are append-only and
    /// registration order is the tag order.
    pub fn register(&mut self, tag: u32, codec: Box<C>) {
        assert_eq!(
            tag as usize,
            self.slots.len(),
            "registry tags must be registered in order"
        );
        self.slots.push(codec);
    }

    /// Look up the codec for a tag.
    ///
    /// Returns `None` for tags beyond the registry's current size — the
    /// newer-serialization condition.
    pub fn lookup(&self, tag: u32) -> Option<&C> {
        self.slots.get(tag as usize).map(|slot| slot.as_ref())
    }

    /// Number of registered slots.
    pub fn count(&self) -> usize {
        self.slots.len()
    }
}

impl<C: ?Sized> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> std::fmt::Debug for Registry<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("slot_count", &self.slots.len())
            .finish()
    }
}

static COMPONENT_REGISTRY: Lazy<Registry<dyn ComponentCodec>> = Lazy::new(|| {
    let mut registry: Registry<dyn ComponentCodec> = Registry::new();
    registry.register(ComponentTag::Gcs.as_u32(), Box::new(GcsComponentCodec));
    registry.register(
        ComponentTag::GcsExtended.as_u32(),
        Box::new(GcsExtendedComponentCodec),
    );
    registry.register(
        ComponentTag::GcsLocalAdjustment.as_u32(),
        Box::new(UnsupportedCodec::new("GcsLocalAdjustment")),
    );
    registry.register(
        ComponentTag::DataType.as_u32(),
        Box::new(DataTypeComponentCodec),
    );
    registry.register(ComponentTag::Layer.as_u32(), Box::new(LayerComponentCodec));
    registry.register(
        ComponentTag::ScalableMeshData.as_u32(),
        Box::new(ScalableMeshDataComponentCodec),
    );
    registry
});

static COMMAND_REGISTRY: Lazy<Registry<dyn CommandCodec>> = Lazy::new(|| {
    let mut registry: Registry<dyn CommandCodec> = Registry::new();
    for tag in 0..16 {
        let kind = CommandTag::from_u32(tag).expect("command tag catalogue covers 0..16");
        registry.register(tag, Box::new(CommandKindCodec::new(kind)));
    }
    registry
});

static SOURCE_REGISTRY: Lazy<Registry<dyn SourceCodec>> = Lazy::new(|| {
    let mut registry: Registry<dyn SourceCodec> = Registry::new();
    registry.register(SourceTag::LocalFile.as_u32(), Box::new(LocalFileSourceCodec));
    registry.register(SourceTag::DgnLevel.as_u32(), Box::new(DgnLevelSourceCodec));
    registry.register(
        SourceTag::DgnReferenceLevelV0.as_u32(),
        Box::new(DgnReferenceLevelV0SourceCodec),
    );
    registry.register(
        SourceTag::DgnReferenceLevel.as_u32(),
        Box::new(DgnReferenceLevelSourceCodec),
    );
    registry.register(
        SourceTag::Group.as_u32(),
        Box::new(UnsupportedCodec::new("Group")),
    );
    registry
});

/// The configuration component registry.
pub fn component_registry() -> &'static Registry<dyn ComponentCodec> {
    &COMPONENT_REGISTRY
}

/// The import command registry.
pub fn command_registry() -> &'static Registry<dyn CommandCodec> {
    &COMMAND_REGISTRY
}

/// The source registry.
pub fn source_registry() -> &'static Registry<dyn SourceCodec> {
    &SOURCE_REGISTRY
}
