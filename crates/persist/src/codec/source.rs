//! Source codecs.
//!
//! Field layouts build on each other the way the source kinds do:
//!
//! - `LocalFile`: path(str) + data_type(u32)
//! - `DgnLevel`: LocalFile fields + model_id(u32) + model_name(str) +
//!   level_id(u32) + level_name(str)
//! - `DgnReferenceLevelV0`: DgnLevel fields + reference_path(str) +
//!   reference_name(str)
//! - `DgnReferenceLevel`: V0 fields + reference_model_name(str)
//!
//! Group records never reach a codec: the flat scheme flattens them in
//! the source tree driver, and the legacy nested scheme's `Group` tag
//! slot holds an unsupported placeholder.
//!
//! The document environment is passed through untouched; moniker and
//! relative-path resolution belong to external collaborators.

use super::SourceCodec;
use crate::error::{DecodeError, EncodeError};
use crate::store::{DocumentEnv, RecordStore};
use terramesh_model::{
    DgnLevelSource, DgnReferenceLevelSource, DgnReferenceLevelV0Source, LocalFileSource, Source,
    SourceDataType,
};

fn write_local_file(file: &LocalFileSource, store: &mut dyn RecordStore) {
    store.put_str(&file.path);
    store.put_u32(file.data_type.as_u32());
}

fn read_local_file(store: &mut dyn RecordStore) -> Result<LocalFileSource, DecodeError> {
    let path = store.take_str()?;
    let raw = store.take_u32()?;
    let data_type = SourceDataType::from_u32(raw)
        .ok_or_else(|| DecodeError::Malformed(format!("source data type out of range: {}", raw)))?;
    Ok(LocalFileSource { path, data_type })
}

fn write_dgn_level(level: &DgnLevelSource, store: &mut dyn RecordStore) {
    write_local_file(&level.file, store);
    store.put_u32(level.model_id);
    store.put_str(&level.model_name);
    store.put_u32(level.level_id);
    store.put_str(&level.level_name);
}

fn read_dgn_level(store: &mut dyn RecordStore) -> Result<DgnLevelSource, DecodeError> {
    let file = read_local_file(store)?;
    Ok(DgnLevelSource {
        file,
        model_id: store.take_u32()?,
        model_name: store.take_str()?,
        level_id: store.take_u32()?,
        level_name: store.take_str()?,
    })
}

/// Codec for local file sources.
pub struct LocalFileSourceCodec;

impl SourceCodec for LocalFileSourceCodec {
    fn encode(
        &self,
        source: &Source,
        _env: &DocumentEnv,
        store: &mut dyn RecordStore,
    ) -> Result<(), EncodeError> {
        let Source::LocalFile(file) = source else {
            return Err(EncodeError::WrongKind { codec: self.name() });
        };
        write_local_file(file, store);
        Ok(())
    }

    fn decode(
        &self,
        _env: &DocumentEnv,
        store: &mut dyn RecordStore,
    ) -> Result<Source, DecodeError> {
        Ok(Source::LocalFile(read_local_file(store)?))
    }

    fn name(&self) -> &'static str {
        "LocalFile"
    }
}

/// Codec for DGN model level sources.
pub struct DgnLevelSourceCodec;

impl SourceCodec for DgnLevelSourceCodec {
    fn encode(
        &self,
        source: &Source,
        _env: &DocumentEnv,
        store: &mut dyn RecordStore,
    ) -> Result<(), EncodeError> {
        let Source::DgnLevel(level) = source else {
            return Err(EncodeError::WrongKind { codec: self.name() });
        };
        write_dgn_level(level, store);
        Ok(())
    }

    fn decode(
        &self,
        _env: &DocumentEnv,
        store: &mut dyn RecordStore,
    ) -> Result<Source, DecodeError> {
        Ok(Source::DgnLevel(read_dgn_level(store)?))
    }

    fn name(&self) -> &'static str {
        "DgnLevel"
    }
}

/// Codec for the legacy reference-level layout.
pub struct DgnReferenceLevelV0SourceCodec;

impl SourceCodec for DgnReferenceLevelV0SourceCodec {
    fn encode(
        &self,
        source: &Source,
        _env: &DocumentEnv,
        store: &mut dyn RecordStore,
    ) -> Result<(), EncodeError> {
        let Source::DgnReferenceLevelV0(reference) = source else {
            return Err(EncodeError::WrongKind { codec: self.name() });
        };
        write_dgn_level(&reference.level, store);
        store.put_str(&reference.reference_path);
        store.put_str(&reference.reference_name);
        Ok(())
    }

    fn decode(
        &self,
        _env: &DocumentEnv,
        store: &mut dyn RecordStore,
    ) -> Result<Source, DecodeError> {
        let level = read_dgn_level(store)?;
        Ok(Source::DgnReferenceLevelV0(DgnReferenceLevelV0Source {
            level,
            reference_path: store.take_str()?,
            reference_name: store.take_str()?,
        }))
    }

    fn name(&self) -> &'static str {
        "DgnReferenceLevelV0"
    }
}

/// Codec for reference-level sources.
pub struct DgnReferenceLevelSourceCodec;

impl SourceCodec for DgnReferenceLevelSourceCodec {
    fn encode(
        &self,
        source: &Source,
        _env: &DocumentEnv,
        store: &mut dyn RecordStore,
    ) -> Result<(), EncodeError> {
        let Source::DgnReferenceLevel(reference) = source else {
            return Err(EncodeError::WrongKind { codec: self.name() });
        };
        write_dgn_level(&reference.level, store);
        store.put_str(&reference.reference_path);
        store.put_str(&reference.reference_name);
        store.put_str(&reference.reference_model_name);
        Ok(())
    }

    fn decode(
        &self,
        _env: &DocumentEnv,
        store: &mut dyn RecordStore,
    ) -> Result<Source, DecodeError> {
        let level = read_dgn_level(store)?;
        Ok(Source::DgnReferenceLevel(DgnReferenceLevelSource {
            level,
            reference_path: store.take_str()?,
            reference_name: store.take_str()?,
            reference_model_name: store.take_str()?,
        }))
    }

    fn name(&self) -> &'static str {
        "DgnReferenceLevel"
    }
}
