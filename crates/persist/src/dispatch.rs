//! Visitor dispatch from abstract values to wire tags.
//!
//! Each closed variant set maps to its tag through an exhaustive `match`
//! with no default arm: adding a variant is a compile error at every
//! dispatch site until it is handled, which is what replaces the downcast
//! discipline a pointer hierarchy would need.

use crate::registry::{CommandTag, ComponentTag, SourceTag};
use terramesh_model::{ConfigComponent, ImportCommand, Source};

/// Tag for one configuration component.
pub fn component_tag(component: &ConfigComponent) -> ComponentTag {
    match component {
        ConfigComponent::Gcs(_) => ComponentTag::Gcs,
        ConfigComponent::GcsExtended { .. } => ComponentTag::GcsExtended,
        ConfigComponent::GcsLocalAdjustment => ComponentTag::GcsLocalAdjustment,
        ConfigComponent::DataType(_) => ComponentTag::DataType,
        ConfigComponent::Layer { .. } => ComponentTag::Layer,
        ConfigComponent::ScalableMeshData(_) => ComponentTag::ScalableMeshData,
    }
}

/// Tag for one import command.
pub fn command_tag(command: &ImportCommand) -> CommandTag {
    match command {
        ImportCommand::All => CommandTag::All,
        ImportCommand::AllToLayer { .. } => CommandTag::AllToLayer,
        ImportCommand::AllToLayerType { .. } => CommandTag::AllToLayerType,
        ImportCommand::AllToType { .. } => CommandTag::AllToType,
        ImportCommand::Layer { .. } => CommandTag::Layer,
        ImportCommand::LayerToLayer { .. } => CommandTag::LayerToLayer,
        ImportCommand::LayerToLayerType { .. } => CommandTag::LayerToLayerType,
        ImportCommand::LayerToType { .. } => CommandTag::LayerToType,
        ImportCommand::LayerType { .. } => CommandTag::LayerType,
        ImportCommand::LayerTypeToLayer { .. } => CommandTag::LayerTypeToLayer,
        ImportCommand::LayerTypeToLayerType { .. } => CommandTag::LayerTypeToLayerType,
        ImportCommand::LayerTypeToType { .. } => CommandTag::LayerTypeToType,
        ImportCommand::Type { .. } => CommandTag::Type,
        ImportCommand::TypeToLayer { .. } => CommandTag::TypeToLayer,
        ImportCommand::TypeToLayerType { .. } => CommandTag::TypeToLayerType,
        ImportCommand::TypeToType { .. } => CommandTag::TypeToType,
    }
}

/// Tag for one source.
pub fn source_tag(source: &Source) -> SourceTag {
    match source {
        Source::LocalFile(_) => SourceTag::LocalFile,
        Source::DgnLevel(_) => SourceTag::DgnLevel,
        Source::DgnReferenceLevelV0(_) => SourceTag::DgnReferenceLevelV0,
        Source::DgnReferenceLevel(_) => SourceTag::DgnReferenceLevel,
        Source::Group(_) => SourceTag::Group,
    }
}

/// Dispatch every component of a configuration, buffering one `(tag,
/// component)` pair per element in visit order.
///
/// Buffering decouples visit order (the container's natural enumeration,
/// e.g. a recursive layer walk) from the wire order the collection driver
/// produces with its canonical sort.
pub fn dispatch_components(components: &[ConfigComponent]) -> Vec<(ComponentTag, &ConfigComponent)> {
    components
        .iter()
        .map(|component| (component_tag(component), component))
        .collect()
}
