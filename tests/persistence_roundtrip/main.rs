//! Persistence Round-Trip Test Suite
//!
//! Cross-section coverage of the serialization engine: per-kind
//! round-trips, canonical ordering, order preservation, the empty-packet
//! fast paths, forward tolerance against newer writers, the format
//! version gate, and the flat group-id source tree.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test persistence_roundtrip
//!
//! # Run one module
//! cargo test --test persistence_roundtrip sources::
//! ```

use terramesh::{
    DocumentEnv, Gcs, LocalFileSource, MemoryRecordStore, Source, SourceDataType, SourceRecord,
    WktFlavor,
};

// Test modules by concern
pub mod commands;
pub mod compatibility;
pub mod components;
pub mod sources;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// A small well-formed GCS value.
pub fn sample_gcs() -> Gcs {
    Gcs::from_wkt("GEOGCS[\"WGS 84\",DATUM[\"WGS_1984\"]]", WktFlavor::Ogc)
        .expect("sample WKT is non-empty")
}

/// A leaf source record with a timestamp.
pub fn leaf(path: &str, last_modified: u64) -> SourceRecord {
    SourceRecord::new(
        Source::LocalFile(LocalFileSource {
            path: path.to_string(),
            data_type: SourceDataType::Point,
        }),
        last_modified,
    )
}

/// A fresh store/environment pair.
pub fn fresh() -> (MemoryRecordStore, DocumentEnv) {
    (MemoryRecordStore::new(), DocumentEnv::new())
}
