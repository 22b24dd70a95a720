//! Import commands and the import configuration unit.
//!
//! A command selects what to import (everything, one layer, one data type,
//! or a layer/type pair) and optionally where to direct it in the target.
//! The cross product of the four source selectors and four target selectors
//! yields sixteen concrete kinds, each with its own stable wire tag.

use crate::component::ContentConfig;
use crate::types::SourceDataType;

/// One import command.
///
/// Variant order mirrors the wire tag catalogue: source selector major
/// (All, Layer, LayerType, Type), target selector minor (none, ToLayer,
/// ToLayerType, ToType).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportCommand {
    /// Import everything.
    All,
    /// Import everything into a target layer.
    AllToLayer {
        /// Destination layer id.
        target_layer: u32,
    },
    /// Import everything into a target layer as a target type.
    AllToLayerType {
        /// Destination layer id.
        target_layer: u32,
        /// Destination data type.
        target_type: SourceDataType,
    },
    /// Import everything as a target type.
    AllToType {
        /// Destination data type.
        target_type: SourceDataType,
    },
    /// Import one source layer.
    Layer {
        /// Source layer id.
        layer: u32,
    },
    /// Import one source layer into a target layer.
    LayerToLayer {
        /// Source layer id.
        layer: u32,
        /// Destination layer id.
        target_layer: u32,
    },
    /// Import one source layer into a target layer as a target type.
    LayerToLayerType {
        /// Source layer id.
        layer: u32,
        /// Destination layer id.
        target_layer: u32,
        /// Destination data type.
        target_type: SourceDataType,
    },
    /// Import one source layer as a target type.
    LayerToType {
        /// Source layer id.
        layer: u32,
        /// Destination data type.
        target_type: SourceDataType,
    },
    /// Import one data type of one source layer.
    LayerType {
        /// Source layer id.
        layer: u32,
        /// Source data type.
        data_type: SourceDataType,
    },
    /// Import one data type of one source layer into a target layer.
    LayerTypeToLayer {
        /// Source layer id.
        layer: u32,
        /// Source data type.
        data_type: SourceDataType,
        /// Destination layer id.
        target_layer: u32,
    },
    /// Import one data type of one source layer into a target layer as a
    /// target type.
    LayerTypeToLayerType {
        /// Source layer id.
        layer: u32,
        /// Source data type.
        data_type: SourceDataType,
        /// Destination layer id.
        target_layer: u32,
        /// Destination data type.
        target_type: SourceDataType,
    },
    /// Import one data type of one source layer as a target type.
    LayerTypeToType {
        /// Source layer id.
        layer: u32,
        /// Source data type.
        data_type: SourceDataType,
        /// Destination data type.
        target_type: SourceDataType,
    },
    /// Import one data type.
    Type {
        /// Source data type.
        data_type: SourceDataType,
    },
    /// Import one data type into a target layer.
    TypeToLayer {
        /// Source data type.
        data_type: SourceDataType,
        /// Destination layer id.
        target_layer: u32,
    },
    /// Import one data type into a target layer as a target type.
    TypeToLayerType {
        /// Source data type.
        data_type: SourceDataType,
        /// Destination layer id.
        target_layer: u32,
        /// Destination data type.
        target_type: SourceDataType,
    },
    /// Import one data type as a target type.
    TypeToType {
        /// Source data type.
        data_type: SourceDataType,
        /// Destination data type.
        target_type: SourceDataType,
    },
}

/// An ordered, order-significant sequence of import commands.
///
/// Commands execute in sequence; persistence round-trips the order
/// byte-for-byte, never canonicalizing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportSequence {
    /// Commands in execution order.
    pub commands: Vec<ImportCommand>,
}

impl ImportSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command.
    pub fn push(&mut self, command: ImportCommand) {
        self.commands.push(command);
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the sequence holds no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// The combined per-source import configuration: a content configuration
/// plus the command sequence that consumes it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImportConfig {
    /// How the source's content is interpreted.
    pub content: ContentConfig,
    /// What to import, in order.
    pub sequence: ImportSequence,
}
