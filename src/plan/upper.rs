//! Upper-floor layout: bedroom band, lobby band, stair/balcony band,
//! with room counts scaled by the bedroom demand left over after the
//! ground floor takes its one bedroom.

use crate::compass::Zone;
use crate::config::PlanConfig;
use crate::geometry::{Rect, Segment};
use crate::setback::Envelope;

use super::types::{Door, FloorPlan, Room, RoomKind};
use super::{clamp_dim, emit_edge_windows};

/// Bedrooms this floor must host. The ground floor keeps one; floor 1
/// takes up to three of the remainder and floor 2 the rest. Every upper
/// floor hosts at least one bedroom.
fn bedroom_demand(config: &PlanConfig, floor_index: u32) -> u32 {
    let remaining = config.bedrooms.saturating_sub(1);
    if floor_index == 1 {
        remaining.min(3).max(1)
    } else {
        remaining.saturating_sub(3).max(1)
    }
}

/// Bathrooms per upper floor: one attached bath always, a second common
/// bath only while the overall target leaves demand for it
fn bathroom_demand(config: &PlanConfig) -> u32 {
    config.bathrooms.saturating_sub(1).clamp(1, 2)
}

fn floor_label(index: u32) -> &'static str {
    match index {
        1 => "First Floor",
        _ => "Second Floor",
    }
}

/// Generate one upper floor (floor_index >= 1)
pub fn layout_upper_floor(env: &Envelope, config: &PlanConfig, floor_index: u32) -> FloorPlan {
    let w = env.width;
    let d = env.depth;
    let beds = bedroom_demand(config, floor_index);
    let baths = bathroom_demand(config);

    // Row heights: fixed lobby, bottom row sized by the taller of the
    // stair and balcony requirements, bedrooms take what remains
    let lobby_h = (d * 0.18).round().max(5.0);
    let stair_h = (d * 0.28).round().max(8.0);
    let balcony_h = if config.features.balcony {
        (d * 0.16).round().max(4.0)
    } else {
        0.0
    };
    let mut bottom_h = stair_h.max(balcony_h);
    let mut top_h = d - lobby_h - bottom_h;
    if top_h < 1.0 {
        // Cramped envelope: the bedroom band keeps a token foot and the
        // stair row absorbs the loss so nothing spills past the envelope
        top_h = 1.0;
        bottom_h = clamp_dim(d - lobby_h - top_h);
    }
    let left_w = clamp_dim((w * 0.48).round());
    let right_w = clamp_dim(w - left_w);

    let lobby_y = top_h;
    let bottom_y = top_h + lobby_h;

    let mut plan = FloorPlan::new(floor_index, floor_label(floor_index), w, d);
    let rooms = &mut plan.rooms;

    // Top row: Bedroom A left; right cell is a second bedroom when the
    // demand calls for it, otherwise a family hall. Heavy demand on a
    // wide envelope splits the right cell into two stacked bedrooms.
    rooms.push(
        Room::new(
            "bedroom_a",
            "Bedroom A",
            RoomKind::Bedroom,
            Rect::new(0.0, 0.0, left_w, top_h),
            Zone::SW,
        )
        .because("primary upper bedroom holds the south-west"),
    );

    let mut third_split: Option<f64> = None;
    if beds >= 2 {
        let mut b_height = top_h;
        if beds >= 3 && w > 22.0 && top_h >= 2.0 {
            let half = clamp_dim((top_h * 0.5).round());
            b_height = half;
            third_split = Some(half);
        }
        rooms.push(
            Room::new(
                "bedroom_b",
                "Bedroom B",
                RoomKind::Bedroom,
                Rect::new(left_w, 0.0, right_w, b_height),
                Zone::NE,
            )
            .because("second bedroom balances the north-east"),
        );
        if let Some(half) = third_split {
            rooms.push(
                Room::new(
                    "bedroom_c",
                    "Bedroom C",
                    RoomKind::Bedroom,
                    Rect::new(left_w, half, right_w, clamp_dim(top_h - half)),
                    Zone::E,
                )
                .because("third bedroom carved at half the cell height"),
            );
        }
    } else {
        rooms.push(
            Room::new(
                "family_hall",
                "Family Hall",
                RoomKind::FamilyHall,
                Rect::new(left_w, 0.0, right_w, top_h),
                Zone::NE,
            )
            .because("spare cell becomes a shared family hall"),
        );
    }

    // Lobby row: attached bath left, mirrored common bath right when the
    // bathroom demand allows, lobby filling whatever remains
    let abath_w = clamp_dim((left_w * 0.40).round());
    rooms.push(
        Room::new(
            "attached_bath",
            "Attached Bath",
            RoomKind::Toilet,
            Rect::new(0.0, lobby_y, abath_w, lobby_h),
            Zone::NW,
        )
        .wet()
        .because("upper wet stack aligns with the ground-floor bath"),
    );
    let lobby_w = if baths >= 2 {
        rooms.push(
            Room::new(
                "common_bath",
                "Common Bath",
                RoomKind::Toilet,
                Rect::new(w - abath_w, lobby_y, abath_w, lobby_h),
                Zone::W,
            )
            .wet()
            .because("second bath mirrors the attached bath"),
        );
        clamp_dim(w - 2.0 * abath_w)
    } else {
        clamp_dim(w - abath_w)
    };
    rooms.push(
        Room::new(
            "lobby",
            "Lobby",
            RoomKind::Passage,
            Rect::new(abath_w, lobby_y, lobby_w, lobby_h),
            Zone::Center,
        )
        .because("lobby links the bedrooms to the stair"),
    );

    // Bottom row: staircase on the left, balcony or utility on the rest
    let topmost = floor_index + 1 >= config.floors;
    let stair_name = if topmost { "Stair → Terrace" } else { "Staircase" };
    let stair_w = (w * 0.32).round().max(7.0).min(w);
    rooms.push(
        Room::new(
            "staircase",
            stair_name,
            RoomKind::Staircase,
            Rect::new(0.0, bottom_y, stair_w, bottom_h),
            Zone::SW,
        )
        .stair()
        .because("stair continues in the south-west shaft"),
    );
    let rest_w = clamp_dim(w - stair_w);
    if config.features.balcony {
        let bh = balcony_h.min(bottom_h);
        rooms.push(
            Room::new(
                "balcony",
                "Balcony",
                RoomKind::Balcony,
                Rect::new(stair_w, d - bh, rest_w, bh),
                Zone::S,
            )
            .open()
            .because("balcony overlooks the road"),
        );
    } else {
        rooms.push(
            Room::new(
                "utility",
                "Utility / Wash",
                RoomKind::Utility,
                Rect::new(stair_w, bottom_y, rest_w, bottom_h),
                Zone::NW,
            )
            .wet()
            .because("wash area takes the rear of the stair row"),
        );
    }

    // Fixed interior doors at the computed band boundaries
    plan.doors
        .push(Door::interior(Segment::horizontal(2.0, lobby_y, 3.0)));
    if beds >= 2 {
        plan.doors
            .push(Door::interior(Segment::horizontal(left_w + 2.0, lobby_y, 3.0)));
    }
    if let Some(half) = third_split {
        plan.doors
            .push(Door::interior(Segment::horizontal(left_w + 2.0, half, 2.0)));
    }
    plan.doors
        .push(Door::interior(Segment::vertical(abath_w, lobby_y + 1.0, 2.5)));
    plan.doors
        .push(Door::interior(Segment::horizontal(1.0, bottom_y, 3.0)));

    plan.windows = emit_edge_windows(&plan.rooms, w);
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compass::Facing;
    use crate::config::Features;

    fn env(plot: f64) -> Envelope {
        Envelope::from_plot(plot, plot, Facing::East)
    }

    fn config(plot: f64) -> PlanConfig {
        PlanConfig::new(plot, plot, Facing::East).with_floors(2)
    }

    #[test]
    fn test_bedroom_demand_split_across_floors() {
        let c = config(40.0).with_floors(3).with_bedrooms(5);
        assert_eq!(bedroom_demand(&c, 1), 3);
        assert_eq!(bedroom_demand(&c, 2), 1);

        let c = c.with_bedrooms(6);
        assert_eq!(bedroom_demand(&c, 1), 3);
        assert_eq!(bedroom_demand(&c, 2), 2);
    }

    #[test]
    fn test_bedroom_demand_never_zero() {
        let c = config(30.0).with_bedrooms(1);
        assert_eq!(bedroom_demand(&c, 1), 1);
        assert_eq!(bedroom_demand(&c, 2), 1);
    }

    #[test]
    fn test_single_demand_gets_family_hall() {
        let c = config(30.0).with_bedrooms(2);
        let plan = layout_upper_floor(&env(30.0), &c, 1);

        assert!(plan.room("bedroom_a").is_some());
        assert!(plan.room("bedroom_b").is_none());
        let hall = plan.room("family_hall").unwrap();
        assert_eq!(hall.zone, Zone::NE);
    }

    #[test]
    fn test_two_bedrooms_fill_top_row() {
        let c = config(30.0).with_bedrooms(3);
        let plan = layout_upper_floor(&env(30.0), &c, 1);

        assert!(plan.room("bedroom_b").is_some());
        assert!(plan.room("bedroom_c").is_none());
        assert!(plan.room("family_hall").is_none());
        assert_eq!(plan.bedroom_count(), 2);
    }

    #[test]
    fn test_third_bedroom_carved_on_wide_envelope() {
        let c = config(40.0).with_bedrooms(4);
        let plan = layout_upper_floor(&env(40.0), &c, 1);

        let b = plan.room("bedroom_b").unwrap().rect;
        let c_rect = plan.room("bedroom_c").unwrap().rect;
        assert_eq!(c_rect.y, b.bottom());
        assert!(!b.intersects(&c_rect));
        assert_eq!(plan.bedroom_count(), 3);
    }

    #[test]
    fn test_no_third_bedroom_on_narrow_envelope() {
        // 26x26 plot -> 22 ft envelope, at the width threshold
        let c = PlanConfig::new(26.0, 26.0, Facing::East)
            .with_floors(2)
            .with_bedrooms(4);
        let plan = layout_upper_floor(&env(26.0), &c, 1);
        assert!(plan.room("bedroom_c").is_none());
        assert_eq!(plan.bedroom_count(), 2);
    }

    #[test]
    fn test_single_bathroom_emits_no_common_bath() {
        let c = config(30.0).with_bathrooms(1);
        let plan = layout_upper_floor(&env(30.0), &c, 1);
        assert!(plan.room("attached_bath").is_some());
        assert!(plan.room("common_bath").is_none());
    }

    #[test]
    fn test_common_bath_mirrored_right() {
        let c = config(30.0).with_bedrooms(3).with_bathrooms(3);
        let e = env(30.0);
        let plan = layout_upper_floor(&e, &c, 1);

        let attached = plan.room("attached_bath").unwrap().rect;
        let common = plan.room("common_bath").unwrap().rect;
        assert_eq!(common.right(), e.width);
        assert_eq!(common.width, attached.width);

        let lobby = plan.room("lobby").unwrap().rect;
        assert_eq!(lobby.x, attached.right());
        assert_eq!(lobby.right(), common.x);
    }

    #[test]
    fn test_balcony_or_utility_on_bottom_row() {
        let with_balcony = config(30.0).with_features(Features {
            balcony: true,
            ..Features::default()
        });
        let plan = layout_upper_floor(&env(30.0), &with_balcony, 1);
        let balcony = plan.room("balcony").unwrap();
        assert!(balcony.is_open);
        assert_eq!(balcony.rect.bottom(), env(30.0).depth);
        assert!(plan.room("utility").is_none());

        let without = config(30.0);
        let plan = layout_upper_floor(&env(30.0), &without, 1);
        let utility = plan.room("utility").unwrap();
        assert!(utility.is_wet);
        assert!(plan.room("balcony").is_none());
    }

    #[test]
    fn test_terrace_stair_label_on_topmost_floor() {
        let c = config(30.0).with_floors(3).with_bedrooms(5);
        let first = layout_upper_floor(&env(30.0), &c, 1);
        let second = layout_upper_floor(&env(30.0), &c, 2);

        assert_eq!(first.room("staircase").unwrap().name, "Staircase");
        assert_eq!(second.room("staircase").unwrap().name, "Stair → Terrace");

        let two_storey = c.with_floors(2);
        let only = layout_upper_floor(&env(30.0), &two_storey, 1);
        assert_eq!(only.room("staircase").unwrap().name, "Stair → Terrace");
    }

    #[test]
    fn test_stair_width_floor() {
        let plan = layout_upper_floor(&env(30.0), &config(30.0), 1);
        assert!(plan.room("staircase").unwrap().rect.width >= 7.0);
    }

    #[test]
    fn test_tiny_envelope_degrades_without_failure() {
        let c = PlanConfig::new(18.0, 18.0, Facing::East)
            .with_floors(2)
            .with_features(Features::all());
        let plan = layout_upper_floor(&env(18.0), &c, 1);
        for room in &plan.rooms {
            assert!(room.rect.width > 0.0, "{} width", room.id);
            assert!(room.rect.height > 0.0, "{} height", room.id);
        }
    }
}
