//! Ground-floor layout: proportional subdivision of the envelope into the
//! fixed ground-floor topology (porch, master, living, wet block, kitchen,
//! stair, optional pooja/store/utility/parking).
//!
//! Cell rectangles are computed first, then room records are instantiated
//! from them, so conditional carves (second bedroom, kitchen utility) are
//! pure rectangle subtraction rather than post-hoc resizing.

use crate::compass::Zone;
use crate::config::PlanConfig;
use crate::geometry::{Rect, Segment};
use crate::setback::Envelope;

use super::types::{Door, FloorPlan, Room, RoomKind};
use super::{clamp_dim, emit_edge_windows};

/// Porch band: at least 4 ft, nominally 12% of envelope depth
fn porch_depth(depth: f64) -> f64 {
    (depth * 0.12).round().max(4.0)
}

/// Generate the ground floor for the given envelope and configuration
pub fn layout_ground_floor(env: &Envelope, config: &PlanConfig) -> FloorPlan {
    let w = env.width;
    let d = env.depth;
    let tiny = env.size_class().is_tiny();

    // Band and column splits, rounded to whole feet
    let porch_d = porch_depth(d);
    let main_d = clamp_dim(d - porch_d);
    let top_frac = if tiny { 0.50 } else { 0.42 };
    let top_h = clamp_dim((main_d * top_frac).round());
    let mid_h = clamp_dim((main_d * 0.22).round());
    let bottom_h = clamp_dim(main_d - top_h - mid_h);
    let left_w = clamp_dim((w * 0.48).round());
    let right_w = clamp_dim(w - left_w);

    let mid_y = top_h;
    let bottom_y = top_h + mid_h;

    let mut plan = FloorPlan::new(0, "Ground Floor", w, d);
    let rooms = &mut plan.rooms;

    // Top row: master bedroom left, living right. With a single floor and
    // two or more bedrooms on a non-tiny envelope, a second bedroom takes
    // the top-right corner of the living cell and living keeps the band
    // below it.
    rooms.push(
        Room::new(
            "master",
            "Master Bedroom",
            RoomKind::MasterBedroom,
            Rect::new(0.0, 0.0, left_w, top_h),
            Zone::SW,
        )
        .because("south-west corner anchors the master bedroom"),
    );

    let living_cell = Rect::new(left_w, 0.0, right_w, top_h);
    let mut living = living_cell;
    if config.floors == 1 && config.bedrooms >= 2 && !tiny {
        let bw = clamp_dim((right_w * 0.55).round());
        let bh = clamp_dim((top_h * 0.55).round());
        rooms.push(
            Room::new(
                "bedroom_2",
                "Bedroom 2",
                RoomKind::Bedroom,
                Rect::new(w - bw, 0.0, bw, bh),
                Zone::E,
            )
            .because("second bedroom carved from the living cell"),
        );
        living = Rect::new(left_w, bh, right_w, clamp_dim(top_h - bh));
    }
    rooms.push(
        Room::new("living", "Living Room", RoomKind::Living, living, Zone::NE)
            .because("north-east living room greets the morning light"),
    );

    // Middle row: attached bath in the left sub-column, then either a
    // common bath or a passage, with dining across the right column.
    let abath_w = clamp_dim((left_w * 0.42).round());
    rooms.push(
        Room::new(
            "attached_bath",
            "Attached Bath",
            RoomKind::Toilet,
            Rect::new(0.0, mid_y, abath_w, mid_h),
            Zone::NW,
        )
        .wet()
        .because("wet areas sit on the north-west drain line"),
    );
    let mid_rest_w = clamp_dim(left_w - abath_w);
    if config.bathrooms >= 2 {
        rooms.push(
            Room::new(
                "common_bath",
                "Common Bath",
                RoomKind::Toilet,
                Rect::new(abath_w, mid_y, mid_rest_w, mid_h),
                Zone::W,
            )
            .wet()
            .because("shared bath adjoins the attached bath plumbing"),
        );
    } else {
        rooms.push(
            Room::new(
                "passage",
                "Passage",
                RoomKind::Passage,
                Rect::new(abath_w, mid_y, mid_rest_w, mid_h),
                Zone::Center,
            )
            .because("central passage keeps the core open"),
        );
    }
    rooms.push(
        Room::new(
            "dining",
            "Dining",
            RoomKind::Dining,
            Rect::new(left_w, mid_y, right_w, mid_h),
            Zone::W,
        )
        .because("dining opens off the living room"),
    );

    // Bottom row, left column: staircase first when the house has upper
    // floors, then pooja and store in the leftover width. Without a
    // staircase the toggled rooms split the column directly.
    if config.floors > 1 {
        let stair_w = (left_w * 0.65).round().max(7.0).min(left_w);
        rooms.push(
            Room::new(
                "staircase",
                "Staircase",
                RoomKind::Staircase,
                Rect::new(0.0, bottom_y, stair_w, bottom_h),
                Zone::SW,
            )
            .stair()
            .because("stair mass loads the south-west"),
        );
        let mut cursor = stair_w;
        let mut remaining = left_w - cursor;
        if config.features.pooja && remaining >= 4.0 {
            let side = clamp_dim((remaining.min(bottom_h) * 0.6).round());
            rooms.push(
                Room::new(
                    "pooja",
                    "Pooja",
                    RoomKind::Pooja,
                    Rect::new(cursor, bottom_y, side, side),
                    Zone::NE,
                )
                .because("pooja room claims the leftmost free slice"),
            );
            cursor += side;
            remaining = left_w - cursor;
        }
        if config.features.store && remaining >= 4.0 {
            rooms.push(
                Room::new(
                    "store",
                    "Store",
                    RoomKind::Store,
                    Rect::new(cursor, bottom_y, remaining, bottom_h),
                    Zone::S,
                )
                .because("store fills the balance of the stair column"),
            );
        }
    } else {
        match (config.features.pooja, config.features.store) {
            (true, true) => {
                let pooja_w = clamp_dim((left_w * 0.40).round());
                rooms.push(
                    Room::new(
                        "pooja",
                        "Pooja",
                        RoomKind::Pooja,
                        Rect::new(0.0, bottom_y, pooja_w, bottom_h),
                        Zone::NE,
                    )
                    .because("pooja takes priority in the shared column"),
                );
                rooms.push(
                    Room::new(
                        "store",
                        "Store",
                        RoomKind::Store,
                        Rect::new(pooja_w, bottom_y, clamp_dim(left_w - pooja_w), bottom_h),
                        Zone::S,
                    )
                    .because("store shares the column behind the pooja"),
                );
            }
            (true, false) => {
                rooms.push(
                    Room::new(
                        "pooja",
                        "Pooja",
                        RoomKind::Pooja,
                        Rect::new(0.0, bottom_y, left_w, bottom_h),
                        Zone::NE,
                    )
                    .because("pooja takes the full bottom-left column"),
                );
            }
            (false, true) => {
                rooms.push(
                    Room::new(
                        "store",
                        "Store",
                        RoomKind::Store,
                        Rect::new(0.0, bottom_y, left_w, bottom_h),
                        Zone::S,
                    )
                    .because("store takes the full bottom-left column"),
                );
            }
            (false, false) => {}
        }
    }

    // Bottom row, right column: kitchen, with a utility corner carved out
    // when the cell is generous enough. The kitchen shrinks in width so
    // both stay rectangular and disjoint.
    let kitchen_cell = Rect::new(left_w, bottom_y, right_w, bottom_h);
    let mut kitchen = kitchen_cell;
    if bottom_h > 8.0 && right_w > 10.0 {
        let uw = (right_w * 0.35).round().max(4.0);
        let uh = (bottom_h * 0.35).round().max(3.0);
        rooms.push(
            Room::new(
                "utility",
                "Utility",
                RoomKind::Utility,
                Rect::new(w - uw, bottom_y + bottom_h - uh, uw, uh),
                Zone::SE,
            )
            .wet()
            .because("utility corner backs onto the kitchen plumbing"),
        );
        kitchen = Rect::new(left_w, bottom_y, clamp_dim(right_w - uw), bottom_h);
    }
    rooms.push(
        Room::new("kitchen", "Kitchen", RoomKind::Kitchen, kitchen, Zone::SE)
            .because("south-east kitchen follows the fire corner"),
    );

    // Porch band: centered, 60% of the width, open to the road
    let porch_w = clamp_dim((w * 0.60).round());
    let porch_x = ((w - porch_w) / 2.0).round().max(0.0);
    rooms.push(
        Room::new(
            "porch",
            "Porch",
            RoomKind::Porch,
            Rect::new(porch_x, main_d, porch_w, porch_d),
            config.facing.zone(),
        )
        .open()
        .because("entry porch faces the road"),
    );

    // Parking sits in the left/front setback margin, abutting the porch
    if config.features.parking {
        let park_w = env.setbacks.left + (w * 0.35).round();
        let park_h = 6.0 + porch_d;
        rooms.push(
            Room::new(
                "parking",
                "Parking",
                RoomKind::Parking,
                Rect::new(-env.setbacks.left, d - park_h, park_w, park_h),
                Zone::NW,
            )
            .open()
            .outside()
            .because("parking bay uses the front setback margin"),
        );
    }

    // Fixed openings at precomputed cell boundaries
    let main_x1 = (w * 0.40).round();
    let main_x2 = (w * 0.55).round();
    plan.doors.push(Door::main(Segment::new(
        main_x1, main_d, main_x2, main_d,
    )));
    plan.doors
        .push(Door::interior(Segment::horizontal(porch_x + 1.0, main_d, 3.0)));
    plan.doors
        .push(Door::interior(Segment::vertical(left_w, 2.0, 3.0)));
    plan.doors
        .push(Door::interior(Segment::horizontal(1.0, mid_y, 2.5)));
    plan.doors
        .push(Door::interior(Segment::horizontal(left_w + 2.0, bottom_y, 3.0)));
    // Living to dining opening
    let opening_x = left_w + (right_w * 0.30).round();
    plan.doors
        .push(Door::interior(Segment::horizontal(opening_x, mid_y, 4.0)));

    plan.windows = emit_edge_windows(&plan.rooms, w);
    plan
}
