//! Vastu Plan - a rule-constrained residential floor-plan engine
//!
//! Given a small structured configuration (plot size, facing, floor count,
//! room targets, feature toggles) the engine deterministically subdivides
//! the buildable envelope into named rooms floor by floor, then scores the
//! whole plan against a fixed Vastu placement rule table.
//!
//! # Example
//!
//! ```rust
//! use vastu_plan::{generate, Facing, PlanConfig};
//!
//! let config = PlanConfig::new(30.0, 30.0, Facing::East).with_floors(2);
//! let plan = generate(&config);
//!
//! assert_eq!(plan.floors.len(), 2);
//! assert!(plan.compliance.score <= 100);
//! ```

pub mod compass;
pub mod compliance;
pub mod config;
pub mod geometry;
pub mod plan;
pub mod report;
pub mod setback;

pub use compass::{side_labels, zone_position, Facing, SideLabels, Zone};
pub use compliance::{ComplianceResult, Finding, Severity};
pub use config::{ConfigError, Features, PlanConfig};
pub use geometry::{Rect, Segment};
pub use plan::{Door, DoorKind, FloorPlan, Room, RoomKind, WallSide, Window};
pub use report::render_report;
pub use setback::{Envelope, Setbacks, SizeClass};

use serde::Serialize;

/// The complete result of one generation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanResult {
    pub setbacks: Setbacks,
    pub envelope: Envelope,
    pub side_labels: SideLabels,
    /// Ground floor first, upper floors in ascending order
    pub floors: Vec<FloorPlan>,
    pub compliance: ComplianceResult,
}

/// Generate a complete multi-floor plan for the given configuration.
///
/// Pure and synchronous: identical configurations yield identical
/// results. Out-of-range inputs are re-clamped to the supported ranges
/// rather than rejected; undersized plots degrade room sizes instead of
/// failing.
///
/// # Example
///
/// ```rust
/// use vastu_plan::{generate, Facing, PlanConfig, Zone};
///
/// let plan = generate(&PlanConfig::new(30.0, 30.0, Facing::East));
/// let ground = &plan.floors[0];
/// assert_eq!(ground.room("master").unwrap().zone, Zone::SW);
/// ```
pub fn generate(config: &PlanConfig) -> PlanResult {
    let config = config.clamped();
    let envelope = Envelope::from_plot(config.plot_width, config.plot_depth, config.facing);

    let mut floors = vec![plan::layout_ground_floor(&envelope, &config)];
    for index in 1..config.floors {
        floors.push(plan::layout_upper_floor(&envelope, &config, index));
    }

    let compliance = compliance::score(&floors, config.facing);

    PlanResult {
        setbacks: envelope.setbacks,
        envelope,
        side_labels: side_labels(config.facing),
        floors,
        compliance,
    }
}
