//! Core types for generated floor plans

use serde::Serialize;

use crate::compass::Zone;
use crate::geometry::{Rect, Segment};

/// Fixed enumeration of room types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    MasterBedroom,
    Bedroom,
    Living,
    Kitchen,
    Dining,
    Toilet,
    Pooja,
    Staircase,
    Store,
    Porch,
    Passage,
    Balcony,
    Utility,
    Parking,
    FamilyHall,
}

impl RoomKind {
    /// True for bedroom variants, used when auditing bedroom allocation
    pub fn is_bedroom(self) -> bool {
        matches!(self, RoomKind::MasterBedroom | RoomKind::Bedroom)
    }
}

/// One placed room within a floor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    /// Identifier, unique within the floor
    pub id: String,
    /// Display name
    pub name: String,
    pub kind: RoomKind,
    pub rect: Rect,
    pub zone: Zone,
    /// Plumbed room (bath, kitchen utility, wash)
    pub is_wet: bool,
    pub is_stair: bool,
    /// Unenclosed room (porch, balcony); may sit on the front edge
    pub is_open: bool,
    /// Lies in the setback margin outside the envelope (parking)
    pub is_outside: bool,
    /// Human-readable placement rationale
    pub rationale: String,
}

impl Room {
    pub fn new(id: &str, name: &str, kind: RoomKind, rect: Rect, zone: Zone) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            rect,
            zone,
            is_wet: false,
            is_stair: false,
            is_open: false,
            is_outside: false,
            rationale: String::new(),
        }
    }

    pub fn wet(mut self) -> Self {
        self.is_wet = true;
        self
    }

    pub fn stair(mut self) -> Self {
        self.is_stair = true;
        self
    }

    pub fn open(mut self) -> Self {
        self.is_open = true;
        self
    }

    pub fn outside(mut self) -> Self {
        self.is_outside = true;
        self
    }

    pub fn because(mut self, rationale: &str) -> Self {
        self.rationale = rationale.to_string();
        self
    }
}

/// Door classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorKind {
    MainEntrance,
    Interior,
}

/// A door as a wall-opening segment in envelope coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Door {
    pub segment: Segment,
    pub kind: DoorKind,
}

impl Door {
    pub fn main(segment: Segment) -> Self {
        Self {
            segment,
            kind: DoorKind::MainEntrance,
        }
    }

    pub fn interior(segment: Segment) -> Self {
        Self {
            segment,
            kind: DoorKind::Interior,
        }
    }
}

/// Envelope edge a window sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WallSide {
    Left,
    Right,
    Top,
    Bottom,
}

/// A window: an edge, a start offset along it, and a length, all in feet
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Window {
    pub side: WallSide,
    pub offset: f64,
    pub length: f64,
}

/// One generated floor: rooms, openings, and envelope metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloorPlan {
    /// Ground floor is 0
    pub index: u32,
    pub label: String,
    pub width: f64,
    pub depth: f64,
    pub rooms: Vec<Room>,
    pub doors: Vec<Door>,
    pub windows: Vec<Window>,
}

impl FloorPlan {
    pub fn new(index: u32, label: &str, width: f64, depth: f64) -> Self {
        Self {
            index,
            label: label.to_string(),
            width,
            depth,
            rooms: vec![],
            doors: vec![],
            windows: vec![],
        }
    }

    /// Find a room by identifier
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Count rooms of bedroom kinds on this floor
    pub fn bedroom_count(&self) -> usize {
        self.rooms.iter().filter(|r| r.kind.is_bedroom()).count()
    }
}
