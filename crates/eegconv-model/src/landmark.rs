//! Digitized point taxonomy and landmark entries.
//!
//! A Polhemus digitizer export is a sequence of points, each of which falls
//! into exactly one of three categories: an anatomical reference landmark
//! (cardinal), a labelled EEG sensor, or an unlabelled head-shape point.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Scale factor from digitizer centimetres to landmark millimetres.
pub const CM_TO_MM: f64 = 10.0;

/// Anatomical reference landmarks used to align a head coordinate system.
///
/// The numeric identifiers follow the de-facto landmark ordering
/// (LPA = 1, nasion = 2, RPA = 3); it is neither alphabetical nor input
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardinalLabel {
    /// Nasion (`NA`).
    Nasion,
    /// Left pre-auricular point (`LPA`).
    LeftAuricular,
    /// Right pre-auricular point (`RPA`).
    RightAuricular,
}

impl CardinalLabel {
    /// Fixed numeric identifier emitted for this landmark.
    pub fn identifier(&self) -> u32 {
        match self {
            CardinalLabel::LeftAuricular => 1,
            CardinalLabel::Nasion => 2,
            CardinalLabel::RightAuricular => 3,
        }
    }

    /// The 3-letter code as it appears in digitizer exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardinalLabel::Nasion => "NA",
            CardinalLabel::LeftAuricular => "LPA",
            CardinalLabel::RightAuricular => "RPA",
        }
    }
}

impl fmt::Display for CardinalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CardinalLabel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "NA" => Ok(CardinalLabel::Nasion),
            "LPA" => Ok(CardinalLabel::LeftAuricular),
            "RPA" => Ok(CardinalLabel::RightAuricular),
            other => Err(ModelError::UnknownCardinalLabel(other.to_string())),
        }
    }
}

/// Category of a digitized point in the landmark output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointCategory {
    Cardinal,
    Eeg,
    Extra,
}

impl PointCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PointCategory::Cardinal => "cardinal",
            PointCategory::Eeg => "eeg",
            PointCategory::Extra => "extra",
        }
    }
}

impl fmt::Display for PointCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PointCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "cardinal" => Ok(PointCategory::Cardinal),
            "eeg" => Ok(PointCategory::Eeg),
            "extra" => Ok(PointCategory::Extra),
            other => Err(ModelError::UnknownPointCategory(other.to_string())),
        }
    }
}

/// A 3D coordinate triple. Units are contextual: centimetres when read from
/// a digitizer export, millimetres in landmark entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Scale all three coordinates by a factor.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    /// Convert a centimetre position to millimetres.
    pub fn cm_to_mm(&self) -> Self {
        self.scaled(CM_TO_MM)
    }
}

/// One classified record from a digitizer export.
///
/// Classification is structural: 4-field rows carry a cardinal code,
/// 5-field rows are sensors when the name field is non-empty and head-shape
/// points otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum DigitizerRecord {
    /// Fiducial landmark identified by a 3-letter anatomical code.
    Cardinal {
        label: CardinalLabel,
        position: Position,
    },
    /// Labelled EEG sensor.
    Sensor { name: String, position: Position },
    /// Unlabelled head-shape point.
    Shape { position: Position },
}

impl DigitizerRecord {
    pub fn category(&self) -> PointCategory {
        match self {
            DigitizerRecord::Cardinal { .. } => PointCategory::Cardinal,
            DigitizerRecord::Sensor { .. } => PointCategory::Eeg,
            DigitizerRecord::Shape { .. } => PointCategory::Extra,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            DigitizerRecord::Cardinal { position, .. }
            | DigitizerRecord::Sensor { position, .. }
            | DigitizerRecord::Shape { position } => *position,
        }
    }
}

/// One row of the landmark output: classified, identified, unit-converted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkEntry {
    pub category: PointCategory,
    pub identifier: u32,
    /// Position in millimetres.
    pub position: Position,
}

impl LandmarkEntry {
    pub fn new(category: PointCategory, identifier: u32, position: Position) -> Self {
        Self {
            category,
            identifier,
            position,
        }
    }
}
