//! Closed enumerated wire domains.
//!
//! Every enum here crosses the persistence boundary as a `u32`. The numeric
//! values are part of the on-disk format and MUST NOT change; new values are
//! appended, never inserted or reused. Decoding goes through `from_u32`, so
//! an out-of-range value surfaces as a decode failure instead of being cast
//! blindly.

use std::fmt;

/// Kind of raw data a source contributes to the import.
///
/// Used three ways: as a source's declared data type, as the type family of
/// a `DataType` configuration component, and as the type selector in import
/// commands.
///
/// ## Wire values
///
/// - Point = 0
/// - Breakline = 1
/// - Contour = 2
/// - Mesh = 3
/// - Raster = 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum SourceDataType {
    /// Unstructured point data (survey shots, point clouds)
    Point = 0,
    /// Linear break features constraining triangulation
    Breakline = 1,
    /// Elevation contour polylines
    Contour = 2,
    /// Pre-triangulated mesh data
    Mesh = 3,
    /// Gridded raster elevation data
    Raster = 4,
}

impl SourceDataType {
    /// Convert to the persisted representation.
    pub fn as_u32(&self) -> u32 {
        *self as u32
    }

    /// Try to create from a persisted value.
    ///
    /// Returns `None` for values outside the closed domain.
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(SourceDataType::Point),
            1 => Some(SourceDataType::Breakline),
            2 => Some(SourceDataType::Contour),
            3 => Some(SourceDataType::Mesh),
            4 => Some(SourceDataType::Raster),
            _ => None,
        }
    }
}

impl fmt::Display for SourceDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceDataType::Point => "point",
            SourceDataType::Breakline => "breakline",
            SourceDataType::Contour => "contour",
            SourceDataType::Mesh => "mesh",
            SourceDataType::Raster => "raster",
        };
        write!(f, "{}", name)
    }
}

/// Role a dimension plays within a dimension organization group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum DimensionRole {
    /// Spatial coordinate channel
    Geometry = 0,
    /// Return-intensity channel
    Intensity = 1,
    /// Color channel
    Color = 2,
    /// Point classification channel
    Classification = 3,
    /// Acquisition-time channel
    Time = 4,
}

impl DimensionRole {
    /// Convert to the persisted representation.
    pub fn as_u32(&self) -> u32 {
        *self as u32
    }

    /// Try to create from a persisted value.
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(DimensionRole::Geometry),
            1 => Some(DimensionRole::Intensity),
            2 => Some(DimensionRole::Color),
            3 => Some(DimensionRole::Classification),
            4 => Some(DimensionRole::Time),
            _ => None,
        }
    }
}

/// Well-known dimension identifiers.
///
/// Dimensions a reader can interpret without a name lookup. Anything outside
/// this set is persisted by name as a custom dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum StandardDimension {
    /// Easting coordinate
    X = 0,
    /// Northing coordinate
    Y = 1,
    /// Elevation coordinate
    Z = 2,
    /// Return intensity
    Intensity = 3,
    /// Red color component
    Red = 4,
    /// Green color component
    Green = 5,
    /// Blue color component
    Blue = 6,
    /// Point classification code
    Classification = 7,
    /// GPS acquisition time
    GpsTime = 8,
}

impl StandardDimension {
    /// Convert to the persisted representation.
    pub fn as_u32(&self) -> u32 {
        *self as u32
    }

    /// Try to create from a persisted value.
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(StandardDimension::X),
            1 => Some(StandardDimension::Y),
            2 => Some(StandardDimension::Z),
            3 => Some(StandardDimension::Intensity),
            4 => Some(StandardDimension::Red),
            5 => Some(StandardDimension::Green),
            6 => Some(StandardDimension::Blue),
            7 => Some(StandardDimension::Classification),
            8 => Some(StandardDimension::GpsTime),
            _ => None,
        }
    }
}
