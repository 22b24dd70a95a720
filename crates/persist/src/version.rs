//! Format version gate.
//!
//! Each logical section carries its own version integer, bumped only when
//! that section's wire layout changes in a way that is not a plain tag
//! append — new kinds never bump a version (the collection driver's
//! forward tolerance covers them); changing the payload layout of an
//! existing tag does.
//!
//! A stored version newer than the current one means the file was written
//! by newer software with a layout change this reader cannot interpret:
//! hard, fatal failure. Equal or older versions always pass, with no
//! per-version special-casing — the tag catalogue already carries every
//! historical kind forward.

use crate::store::Section;
use thiserror::Error;

/// One version integer per logical section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatVersions {
    /// Serialized source records.
    pub source: u32,
    /// Content configuration components.
    pub content_config: u32,
    /// Import command sequence.
    pub import_sequence: u32,
    /// Combined import configuration.
    pub import_config: u32,
}

impl FormatVersions {
    /// The version for one section.
    pub fn for_section(&self, section: Section) -> u32 {
        match section {
            Section::Source => self.source,
            Section::ContentConfig => self.content_config,
            Section::ImportSequence => self.import_sequence,
            Section::ImportConfig => self.import_config,
        }
    }
}

/// Versions written by the current software.
///
/// Source is at 2: the flat group-id layout replaced the nested node
/// directory and changed the byte layout of source records.
pub const CURRENT_FORMAT_VERSIONS: FormatVersions = FormatVersions {
    source: 2,
    content_config: 1,
    import_sequence: 1,
    import_config: 1,
};

/// Version gate failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VersionError {
    /// The file was written by newer software than this reader.
    #[error("section {section} was written by newer software: stored version {stored}, current {current}")]
    Incompatible {
        /// The section that failed the gate.
        section: Section,
        /// Version found in the file.
        stored: u32,
        /// Version this reader understands.
        current: u32,
    },
}

/// Gate one section.
pub fn check_section(section: Section, stored: u32, current: u32) -> Result<(), VersionError> {
    if stored > current {
        return Err(VersionError::Incompatible {
            section,
            stored,
            current,
        });
    }
    Ok(())
}

/// Gate all four sections; fails on the first incompatible one.
pub fn check(stored: &FormatVersions, current: &FormatVersions) -> Result<(), VersionError> {
    for section in [
        Section::Source,
        Section::ContentConfig,
        Section::ImportSequence,
        Section::ImportConfig,
    ] {
        check_section(
            section,
            stored.for_section(section),
            current.for_section(section),
        )?;
    }
    Ok(())
}
