//! Compass zones, plot facing, and the facing-relative zone geometry.
//!
//! Plans are always drawn with the road edge at the bottom, so the nine
//! Vastu zones land in different grid cells depending on which cardinal
//! direction the plot faces. The mapping is a fixed 4x9 table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Cardinal direction of the plot's road-adjacent edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    #[serde(alias = "n", alias = "N")]
    North,
    #[serde(alias = "e", alias = "E")]
    East,
    #[serde(alias = "s", alias = "S")]
    South,
    #[serde(alias = "w", alias = "W")]
    West,
}

impl Facing {
    /// The zone label matching this direction (used for the porch)
    pub fn zone(self) -> Zone {
        match self {
            Facing::North => Zone::N,
            Facing::East => Zone::E,
            Facing::South => Zone::S,
            Facing::West => Zone::W,
        }
    }

    fn index(self) -> usize {
        match self {
            Facing::North => 0,
            Facing::East => 1,
            Facing::South => 2,
            Facing::West => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Facing::North => "North",
            Facing::East => "East",
            Facing::South => "South",
            Facing::West => "West",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the nine Vastu compass sectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
    Center,
}

impl Zone {
    /// Parse a zone label, defaulting to Center for anything unrecognized.
    /// Contract safeguard only; the engine never produces unknown labels.
    pub fn from_label(label: &str) -> Zone {
        match label.trim().to_ascii_uppercase().as_str() {
            "N" => Zone::N,
            "NE" => Zone::NE,
            "E" => Zone::E,
            "SE" => Zone::SE,
            "S" => Zone::S,
            "SW" => Zone::SW,
            "W" => Zone::W,
            "NW" => Zone::NW,
            _ => Zone::Center,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Zone::N => "N",
            Zone::NE => "NE",
            Zone::E => "E",
            Zone::SE => "SE",
            Zone::S => "S",
            Zone::SW => "SW",
            Zone::W => "W",
            Zone::NW => "NW",
            Zone::Center => "Center",
        }
    }

    fn index(self) -> usize {
        match self {
            Zone::N => 0,
            Zone::NE => 1,
            Zone::E => 2,
            Zone::SE => 3,
            Zone::S => 4,
            Zone::SW => 5,
            Zone::W => 6,
            Zone::NW => 7,
            Zone::Center => 8,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Relative center of each zone within the envelope, per facing.
/// Rows are indexed by `Facing::index()`, columns by `Zone::index()`
/// (N, NE, E, SE, S, SW, W, NW, Center). Values derive from rotating
/// the compass rose so the facing direction points at the bottom edge.
#[rustfmt::skip]
const ZONE_POSITIONS: [[(f64, f64); 9]; 4] = [
    // Facing North: road at bottom is north, so south sits at the top
    [(0.50, 0.83), (0.17, 0.83), (0.17, 0.50), (0.17, 0.17), (0.50, 0.17),
     (0.83, 0.17), (0.83, 0.50), (0.83, 0.83), (0.50, 0.50)],
    // Facing East
    [(0.83, 0.50), (0.83, 0.83), (0.50, 0.83), (0.17, 0.83), (0.17, 0.50),
     (0.17, 0.17), (0.50, 0.17), (0.83, 0.17), (0.50, 0.50)],
    // Facing South: the untransformed compass rose, north up
    [(0.50, 0.17), (0.83, 0.17), (0.83, 0.50), (0.83, 0.83), (0.50, 0.83),
     (0.17, 0.83), (0.17, 0.50), (0.17, 0.17), (0.50, 0.50)],
    // Facing West
    [(0.17, 0.50), (0.17, 0.17), (0.50, 0.17), (0.83, 0.17), (0.83, 0.50),
     (0.83, 0.83), (0.50, 0.83), (0.17, 0.83), (0.50, 0.50)],
];

/// Relative (x, y) center of a zone within the envelope, both in [0, 1],
/// once the envelope is drawn with `facing` at the bottom (road side).
pub fn zone_position(zone: Zone, facing: Facing) -> (f64, f64) {
    ZONE_POSITIONS[facing.index()][zone.index()]
}

/// Real-world compass labels for the four edges of a rendered envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SideLabels {
    pub top: String,
    pub bottom: String,
    pub left: String,
    pub right: String,
}

/// Edge labels for the given facing; the bottom edge is always the road.
pub fn side_labels(facing: Facing) -> SideLabels {
    let (top, bottom, left, right) = match facing {
        Facing::North => ("SOUTH", "NORTH", "EAST", "WEST"),
        Facing::East => ("WEST", "EAST", "SOUTH", "NORTH"),
        Facing::South => ("NORTH", "SOUTH", "WEST", "EAST"),
        Facing::West => ("EAST", "WEST", "NORTH", "SOUTH"),
    };
    SideLabels {
        top: format!("{} (Rear)", top),
        bottom: format!("{} (Road)", bottom),
        left: left.to_string(),
        right: right.to_string(),
    }
}
