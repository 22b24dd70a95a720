//! Import command codecs.
//!
//! All sixteen command kinds share one codec value parameterized by its
//! registered tag; the registry holds sixteen instances. Fields go to the
//! value stream in declaration order: source layer, source data type,
//! target layer, target data type — whichever the kind carries.

use super::CommandCodec;
use crate::dispatch::command_tag;
use crate::error::{DecodeError, EncodeError};
use crate::registry::CommandTag;
use crate::store::RecordStore;
use terramesh_model::{ImportCommand, SourceDataType};

/// Codec for one import command kind.
pub struct CommandKindCodec {
    tag: CommandTag,
}

impl CommandKindCodec {
    /// Codec for the given kind.
    pub fn new(tag: CommandTag) -> Self {
        CommandKindCodec { tag }
    }
}

fn take_data_type(store: &mut dyn RecordStore) -> Result<SourceDataType, DecodeError> {
    let raw = store.take_u32()?;
    SourceDataType::from_u32(raw)
        .ok_or_else(|| DecodeError::Malformed(format!("data type out of range: {}", raw)))
}

impl CommandCodec for CommandKindCodec {
    fn encode(
        &self,
        command: &ImportCommand,
        store: &mut dyn RecordStore,
    ) -> Result<(), EncodeError> {
        if command_tag(command) != self.tag {
            return Err(EncodeError::WrongKind { codec: self.name() });
        }
        match command {
            ImportCommand::All => {}
            ImportCommand::AllToLayer { target_layer } => {
                store.put_u32(*target_layer);
            }
            ImportCommand::AllToLayerType {
                target_layer,
                target_type,
            } => {
                store.put_u32(*target_layer);
                store.put_u32(target_type.as_u32());
            }
            ImportCommand::AllToType { target_type } => {
                store.put_u32(target_type.as_u32());
            }
            ImportCommand::Layer { layer } => {
                store.put_u32(*layer);
            }
            ImportCommand::LayerToLayer {
                layer,
                target_layer,
            } => {
                store.put_u32(*layer);
                store.put_u32(*target_layer);
            }
            ImportCommand::LayerToLayerType {
                layer,
                target_layer,
                target_type,
            } => {
                store.put_u32(*layer);
                store.put_u32(*target_layer);
                store.put_u32(target_type.as_u32());
            }
            ImportCommand::LayerToType { layer, target_type } => {
                store.put_u32(*layer);
                store.put_u32(target_type.as_u32());
            }
            ImportCommand::LayerType { layer, data_type } => {
                store.put_u32(*layer);
                store.put_u32(data_type.as_u32());
            }
            ImportCommand::LayerTypeToLayer {
                layer,
                data_type,
                target_layer,
            } => {
                store.put_u32(*layer);
                store.put_u32(data_type.as_u32());
                store.put_u32(*target_layer);
            }
            ImportCommand::LayerTypeToLayerType {
                layer,
                data_type,
                target_layer,
                target_type,
            } => {
                store.put_u32(*layer);
                store.put_u32(data_type.as_u32());
                store.put_u32(*target_layer);
                store.put_u32(target_type.as_u32());
            }
            ImportCommand::LayerTypeToType {
                layer,
                data_type,
                target_type,
            } => {
                store.put_u32(*layer);
                store.put_u32(data_type.as_u32());
                store.put_u32(target_type.as_u32());
            }
            ImportCommand::Type { data_type } => {
                store.put_u32(data_type.as_u32());
            }
            ImportCommand::TypeToLayer {
                data_type,
                target_layer,
            } => {
                store.put_u32(data_type.as_u32());
                store.put_u32(*target_layer);
            }
            ImportCommand::TypeToLayerType {
                data_type,
                target_layer,
                target_type,
            } => {
                store.put_u32(data_type.as_u32());
                store.put_u32(*target_layer);
                store.put_u32(target_type.as_u32());
            }
            ImportCommand::TypeToType {
                data_type,
                target_type,
            } => {
                store.put_u32(data_type.as_u32());
                store.put_u32(target_type.as_u32());
            }
        }
        Ok(())
    }

    fn decode(&self, store: &mut dyn RecordStore) -> Result<ImportCommand, DecodeError> {
        let command = match self.tag {
            CommandTag::All => ImportCommand::All,
            CommandTag::AllToLayer => ImportCommand::AllToLayer {
                target_layer: store.take_u32()?,
            },
            CommandTag::AllToLayerType => ImportCommand::AllToLayerType {
                target_layer: store.take_u32()?,
                target_type: take_data_type(store)?,
            },
            CommandTag::AllToType => ImportCommand::AllToType {
                target_type: take_data_type(store)?,
            },
            CommandTag::Layer => ImportCommand::Layer {
                layer: store.take_u32()?,
            },
            CommandTag::LayerToLayer => ImportCommand::LayerToLayer {
                layer: store.take_u32()?,
                target_layer: store.take_u32()?,
            },
            CommandTag::LayerToLayerType => ImportCommand::LayerToLayerType {
                layer: store.take_u32()?,
                target_layer: store.take_u32()?,
                target_type: take_data_type(store)?,
            },
            CommandTag::LayerToType => ImportCommand::LayerToType {
                layer: store.take_u32()?,
                target_type: take_data_type(store)?,
            },
            CommandTag::LayerType => ImportCommand::LayerType {
                layer: store.take_u32()?,
                data_type: take_data_type(store)?,
            },
            CommandTag::LayerTypeToLayer => ImportCommand::LayerTypeToLayer {
                layer: store.take_u32()?,
                data_type: take_data_type(store)?,
                target_layer: store.take_u32()?,
            },
            CommandTag::LayerTypeToLayerType => ImportCommand::LayerTypeToLayerType {
                layer: store.take_u32()?,
                data_type: take_data_type(store)?,
                target_layer: store.take_u32()?,
                target_type: take_data_type(store)?,
            },
            CommandTag::LayerTypeToType => ImportCommand::LayerTypeToType {
                layer: store.take_u32()?,
                data_type: take_data_type(store)?,
                target_type: take_data_type(store)?,
            },
            CommandTag::Type => ImportCommand::Type {
                data_type: take_data_type(store)?,
            },
            CommandTag::TypeToLayer => ImportCommand::TypeToLayer {
                data_type: take_data_type(store)?,
                target_layer: store.take_u32()?,
            },
            CommandTag::TypeToLayerType => ImportCommand::TypeToLayerType {
                data_type: take_data_type(store)?,
                target_layer: store.take_u32()?,
                target_type: take_data_type(store)?,
            },
            CommandTag::TypeToType => ImportCommand::TypeToType {
                data_type: take_data_type(store)?,
                target_type: take_data_type(store)?,
            },
        };
        Ok(command)
    }

    fn name(&self) -> &'static str {
        match self.tag {
            CommandTag::All => "All",
            CommandTag::AllToLayer => "AllToLayer",
            CommandTag::AllToLayerType => "AllToLayerType",
            CommandTag::AllToType => "AllToType",
            CommandTag::Layer => "Layer",
            CommandTag::LayerToLayer => "LayerToLayer",
            CommandTag::LayerToLayerType => "LayerToLayerType",
            CommandTag::LayerToType => "LayerToType",
            CommandTag::LayerType => "LayerType",
            CommandTag::LayerTypeToLayer => "LayerTypeToLayer",
            CommandTag::LayerTypeToLayerType => "LayerTypeToLayerType",
            CommandTag::LayerTypeToType => "LayerTypeToType",
            CommandTag::Type => "Type",
            CommandTag::TypeToLayer => "TypeToLayer",
            CommandTag::TypeToLayerType => "TypeToLayerType",
            CommandTag::TypeToType => "TypeToType",
        }
    }
}
