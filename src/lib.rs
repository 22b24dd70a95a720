//! Terramesh - versioned record-stream persistence for terrain/mesh
//! import configuration.
//!
//! Terramesh persists the configuration tree of a terrain import
//! pipeline: content configuration components (geo-referencing, data
//! typing, layer assignment), ordered import command sequences, and
//! source provenance records with nested groups.
//!
//! # Quick Start
//!
//! ```ignore
//! use terramesh::{
//!     load_content_config, save_content_config, ConfigComponent, ContentConfig, Gcs,
//!     MemoryRecordStore, WktFlavor,
//! };
//!
//! let mut config = ContentConfig::new();
//! config.push(ConfigComponent::Gcs(Gcs::from_wkt(
//!     "GEOGCS[\"WGS 84\"]",
//!     WktFlavor::Ogc,
//! )?));
//!
//! let mut store = MemoryRecordStore::new();
//! save_content_config(&config, &mut store)?;
//! let loaded = load_content_config(&mut store)?;
//! assert_eq!(loaded, config);
//! ```
//!
//! # Architecture
//!
//! The domain model lives in `terramesh-model`; the serialization engine
//! (record store abstraction, tag registries, codecs, collection driver,
//! version gate, source tree driver) lives in `terramesh-persist`. This
//! crate re-exports both as one public API.

// Re-export the public API from the member crates
pub use terramesh_model::*;
pub use terramesh_persist::*;
