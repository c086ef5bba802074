//! Setback margins and the buildable envelope derived from them

use serde::Serialize;

use crate::compass::Facing;

/// Front setback along the road edge, in feet
const ROAD_SETBACK: f64 = 3.0;
/// Setback on every non-road edge, in feet
const SIDE_SETBACK: f64 = 2.0;

/// Tiny envelopes get a taller top row and lose the optional second bedroom
const TINY_AREA_SQFT: f64 = 350.0;
const SMALL_AREA_SQFT: f64 = 500.0;

/// Mandatory margins between plot boundary and building envelope, in feet
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Setbacks {
    pub front: f64,
    pub rear: f64,
    pub left: f64,
    pub right: f64,
}

impl Setbacks {
    /// Municipal-style rule: the edge matching the facing is the road edge
    /// and gets the larger margin, every other edge gets the side margin.
    pub fn for_facing(facing: Facing) -> Self {
        let margin = |edge: Facing| {
            if edge == facing {
                ROAD_SETBACK
            } else {
                SIDE_SETBACK
            }
        };
        // Plan coordinates put the facing at the bottom, so front is the
        // facing-side margin and rear the opposite one.
        let opposite = match facing {
            Facing::North => Facing::South,
            Facing::East => Facing::West,
            Facing::South => Facing::North,
            Facing::West => Facing::East,
        };
        Self {
            front: margin(facing),
            rear: margin(opposite),
            left: SIDE_SETBACK,
            right: SIDE_SETBACK,
        }
    }
}

/// Envelope size class biasing the proportional splits on cramped plots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Regular,
    Small,
    Tiny,
}

impl SizeClass {
    pub fn is_small(self) -> bool {
        matches!(self, SizeClass::Small | SizeClass::Tiny)
    }

    pub fn is_tiny(self) -> bool {
        self == SizeClass::Tiny
    }
}

/// The buildable rectangle left after subtracting setbacks from the plot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Envelope {
    pub width: f64,
    pub depth: f64,
    pub setbacks: Setbacks,
}

impl Envelope {
    /// Derive the envelope from plot dimensions. Undersized plots clamp to
    /// a 1 ft minimum per axis rather than going negative; the generators
    /// degrade room sizes instead of failing.
    pub fn from_plot(plot_width: f64, plot_depth: f64, facing: Facing) -> Self {
        let setbacks = Setbacks::for_facing(facing);
        let width = (plot_width - setbacks.left - setbacks.right).max(1.0);
        let depth = (plot_depth - setbacks.front - setbacks.rear).max(1.0);
        Self {
            width,
            depth,
            setbacks,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.depth
    }

    pub fn size_class(&self) -> SizeClass {
        let area = self.area();
        if area < TINY_AREA_SQFT {
            SizeClass::Tiny
        } else if area < SMALL_AREA_SQFT {
            SizeClass::Small
        } else {
            SizeClass::Regular
        }
    }
}
