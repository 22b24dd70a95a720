//! Content configuration components.
//!
//! A content configuration describes how imported data is interpreted:
//! geo-referencing, data typing, and layer assignment. Components form a
//! closed variant set; `Layer` nests arbitrarily deep (a strict tree, so
//! `Vec` indirection is enough to keep the type finite).

use crate::gcs::Gcs;
use crate::types::{DimensionRole, SourceDataType, StandardDimension};

/// Behavior flags for an extended GCS component.
///
/// Persisted as a packed u32 flag word. Bits outside the known set are a
/// decode failure, never silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GcsFlags {
    /// Prepend the GCS transform to an existing local transform.
    pub prepend_local_transform: bool,
    /// Keep the destination GCS when it is already geo-referenced.
    pub preserve_if_georeferenced: bool,
    /// Keep the destination GCS when it uses a local coordinate system.
    pub preserve_if_local_cs: bool,
}

impl GcsFlags {
    const PREPEND_LOCAL_TRANSFORM: u32 = 1 << 0;
    const PRESERVE_IF_GEOREFERENCED: u32 = 1 << 1;
    const PRESERVE_IF_LOCAL_CS: u32 = 1 << 2;

    const KNOWN_MASK: u32 = Self::PREPEND_LOCAL_TRANSFORM
        | Self::PRESERVE_IF_GEOREFERENCED
        | Self::PRESERVE_IF_LOCAL_CS;

    /// Pack into the persisted flag word.
    pub fn to_bits(&self) -> u32 {
        let mut bits = 0;
        if self.prepend_local_transform {
            bits |= Self::PREPEND_LOCAL_TRANSFORM;
        }
        if self.preserve_if_georeferenced {
            bits |= Self::PRESERVE_IF_GEOREFERENCED;
        }
        if self.preserve_if_local_cs {
            bits |= Self::PRESERVE_IF_LOCAL_CS;
        }
        bits
    }

    /// Unpack from the persisted flag word.
    ///
    /// Returns `None` if any unknown bit is set.
    pub fn from_bits(bits: u32) -> Option<Self> {
        if bits & !Self::KNOWN_MASK != 0 {
            return None;
        }
        Some(GcsFlags {
            prepend_local_transform: bits & Self::PREPEND_LOCAL_TRANSFORM != 0,
            preserve_if_georeferenced: bits & Self::PRESERVE_IF_GEOREFERENCED != 0,
            preserve_if_local_cs: bits & Self::PRESERVE_IF_LOCAL_CS != 0,
        })
    }
}

/// A dimension identifier: a well-known dimension or a named custom one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionKind {
    /// One of the well-known dimensions.
    Standard(StandardDimension),
    /// A producer-defined dimension, identified by name.
    Custom(String),
}

/// One dimension definition inside an organization group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionDef {
    /// Which dimension this is.
    pub kind: DimensionKind,
    /// The role it plays.
    pub role: DimensionRole,
}

/// An ordered group of dimension definitions.
///
/// Groups reflect how the source organizes its channels (e.g. interleaved
/// XYZ in one group, color in another). Order within a group is significant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DimensionGroup {
    /// Dimension definitions in source order.
    pub dimensions: Vec<DimensionDef>,
}

/// Data typing component: a type family plus its dimension organization.
///
/// A component with zero organization groups is structurally invalid and
/// never decodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeComponent {
    /// The family of data this typing applies to.
    pub family: SourceDataType,
    /// Dimension organization groups, in source order. Never empty.
    pub groups: Vec<DimensionGroup>,
}

/// One component of a content configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigComponent {
    /// Geo-coordinate system assignment.
    Gcs(Gcs),
    /// Geo-coordinate system assignment with behavior flags.
    GcsExtended {
        /// The coordinate system.
        gcs: Gcs,
        /// How it interacts with existing geo-referencing.
        flags: GcsFlags,
    },
    /// Local GCS adjustment. The kind exists in the on-wire catalogue but
    /// its payload was never finalized; encode and decode both fail.
    GcsLocalAdjustment,
    /// Data typing for one type family.
    DataType(TypeComponent),
    /// A layer grouping nested components.
    Layer {
        /// Layer identifier.
        id: u32,
        /// Components scoped to this layer, recursively.
        components: Vec<ConfigComponent>,
    },
    /// Opaque scalable-mesh payload carried through verbatim.
    ScalableMeshData(Vec<u8>),
}

/// An ordered collection of configuration components.
///
/// Build order is an implementation detail; the persistence layer
/// canonicalizes by tag before writing, so two configs holding the same
/// multiset of components encode identically.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentConfig {
    /// Components in build order.
    pub components: Vec<ConfigComponent>,
}

impl ContentConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component.
    pub fn push(&mut self, component: ConfigComponent) {
        self.components.push(component);
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the configuration holds no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
