//! Compliance scoring against the fixed Vastu placement rule table.
//!
//! Runs over the complete multi-floor room set after generation. Each
//! check is independent and additive: the facing bonus first, then seven
//! room-placement rules in a fixed order. Absent optional rooms skip
//! their check entirely so they are never penalized.

use std::fmt;

use serde::Serialize;

use crate::compass::{Facing, Zone};
use crate::plan::{FloorPlan, Room, RoomKind};

/// Severity of a single compliance finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Good,
    Acceptable,
    Poor,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Good => write!(f, "good"),
            Severity::Acceptable => write!(f, "acceptable"),
            Severity::Poor => write!(f, "poor"),
        }
    }
}

/// One explanatory finding in check order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

/// Weighted 0-100 score plus the ordered findings behind it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceResult {
    pub score: u32,
    pub findings: Vec<Finding>,
}

/// One fixed placement rule: which room it applies to, where that room
/// ideally sits, which zones still pass, and its weight
struct PlacementRule {
    token: &'static str,
    kind: RoomKind,
    label: &'static str,
    ideal: &'static [Zone],
    acceptable: &'static [Zone],
    weight: u32,
}

const RULES: [PlacementRule; 7] = [
    PlacementRule {
        token: "kitchen",
        kind: RoomKind::Kitchen,
        label: "Kitchen",
        ideal: &[Zone::SE],
        acceptable: &[Zone::NW, Zone::E],
        weight: 15,
    },
    PlacementRule {
        token: "master",
        kind: RoomKind::MasterBedroom,
        label: "Master Bedroom",
        ideal: &[Zone::SW],
        acceptable: &[Zone::S, Zone::W],
        weight: 15,
    },
    PlacementRule {
        token: "pooja",
        kind: RoomKind::Pooja,
        label: "Pooja Room",
        ideal: &[Zone::NE],
        acceptable: &[Zone::E, Zone::N],
        weight: 12,
    },
    PlacementRule {
        token: "toilet",
        kind: RoomKind::Toilet,
        label: "Toilets",
        ideal: &[Zone::NW, Zone::W],
        acceptable: &[Zone::S],
        weight: 10,
    },
    PlacementRule {
        token: "living",
        kind: RoomKind::Living,
        label: "Living Room",
        ideal: &[Zone::NE, Zone::N, Zone::E],
        acceptable: &[Zone::Center, Zone::NW],
        weight: 12,
    },
    PlacementRule {
        token: "stair",
        kind: RoomKind::Staircase,
        label: "Staircase",
        ideal: &[Zone::SW, Zone::S, Zone::W],
        acceptable: &[Zone::SE, Zone::NW],
        weight: 10,
    },
    PlacementRule {
        token: "dining",
        kind: RoomKind::Dining,
        label: "Dining",
        ideal: &[Zone::W, Zone::E, Zone::N],
        acceptable: &[Zone::S, Zone::Center],
        weight: 8,
    },
];

const FACING_MAX: u32 = 18;

fn facing_bonus(facing: Facing) -> u32 {
    match facing {
        Facing::East => 18,
        Facing::North => 16,
        Facing::West => 8,
        Facing::South => 4,
    }
}

/// First room across all floors whose id contains the rule's token or
/// whose kind matches it, in floor then emission order
fn find_room<'a>(floors: &'a [FloorPlan], rule: &PlacementRule) -> Option<&'a Room> {
    floors
        .iter()
        .flat_map(|f| f.rooms.iter())
        .find(|r| r.id.contains(rule.token) || r.kind == rule.kind)
}

fn zone_list(zones: &[Zone]) -> String {
    zones
        .iter()
        .map(|z| z.label())
        .collect::<Vec<_>>()
        .join("/")
}

/// Score the complete multi-floor plan against the rule table
pub fn score(floors: &[FloorPlan], facing: Facing) -> ComplianceResult {
    let mut accumulated: u32 = 0;
    let mut maximum: u32 = 0;
    let mut findings = Vec::new();

    // Facing bonus always contributes
    let bonus = facing_bonus(facing);
    accumulated += bonus;
    maximum += FACING_MAX;
    if bonus >= 16 {
        findings.push(Finding {
            severity: Severity::Good,
            message: format!(
                "{} facing scores {}/{} — highly auspicious",
                facing, bonus, FACING_MAX
            ),
        });
    } else {
        findings.push(Finding {
            severity: Severity::Acceptable,
            message: format!(
                "{} facing scores {}/{} — East or North facing is preferred",
                facing, bonus, FACING_MAX
            ),
        });
    }

    for rule in &RULES {
        let Some(room) = find_room(floors, rule) else {
            // Absent optional room: neither score nor maximum moves
            continue;
        };
        maximum += rule.weight;
        if rule.ideal.contains(&room.zone) {
            accumulated += rule.weight;
            findings.push(Finding {
                severity: Severity::Good,
                message: format!("{} in {} — ideal placement", rule.label, room.zone),
            });
        } else if rule.acceptable.contains(&room.zone) {
            let award = ((rule.weight as f64) * 0.6).round() as u32;
            accumulated += award;
            findings.push(Finding {
                severity: Severity::Acceptable,
                message: format!(
                    "{} in {} — acceptable, {} is ideal",
                    rule.label,
                    room.zone,
                    zone_list(rule.ideal)
                ),
            });
        } else {
            findings.push(Finding {
                severity: Severity::Poor,
                message: format!(
                    "{} ({}) in {} — avoid, ideal zone: {}",
                    rule.label,
                    room.name,
                    room.zone,
                    zone_list(rule.ideal)
                ),
            });
        }
    }

    let score = ((accumulated as f64) * 100.0 / (maximum as f64)).round() as u32;
    ComplianceResult { score, findings }
}
