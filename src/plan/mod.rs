//! Floor-plan generation: shared helpers plus the per-floor generators

pub mod ground;
pub mod types;
pub mod upper;

pub use ground::layout_ground_floor;
pub use types::{Door, DoorKind, FloorPlan, Room, RoomKind, WallSide, Window};
pub use upper::layout_upper_floor;

const EDGE_EPS: f64 = 1e-6;

/// Clamp a computed dimension so degraded plans never emit a non-positive
/// width or height
pub(crate) fn clamp_dim(value: f64) -> f64 {
    value.max(1.0)
}

/// One centered window on each envelope edge a closed room touches.
/// The road edge gets no windows (the porch and main door live there);
/// open, outside, and stair rooms are skipped. Window length is 40% of
/// the shared span, clamped to 2-6 ft, and spans under 3 ft are skipped.
pub(crate) fn emit_edge_windows(rooms: &[Room], envelope_width: f64) -> Vec<Window> {
    let mut windows = Vec::new();
    for room in rooms {
        if room.is_open || room.is_outside || room.is_stair {
            continue;
        }
        let r = room.rect;
        if r.x.abs() < EDGE_EPS {
            push_window(&mut windows, WallSide::Left, r.y, r.height);
        }
        if (r.right() - envelope_width).abs() < EDGE_EPS {
            push_window(&mut windows, WallSide::Right, r.y, r.height);
        }
        if r.y.abs() < EDGE_EPS {
            push_window(&mut windows, WallSide::Top, r.x, r.width);
        }
    }
    windows
}

fn push_window(windows: &mut Vec<Window>, side: WallSide, start: f64, span: f64) {
    if span < 3.0 {
        return;
    }
    let length = (span * 0.4).clamp(2.0, 6.0);
    windows.push(Window {
        side,
        offset: start + (span - length) / 2.0,
        length,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compass::Zone;
    use crate::geometry::Rect;

    #[test]
    fn test_clamp_dim_floors_at_one() {
        assert_eq!(clamp_dim(-3.0), 1.0);
        assert_eq!(clamp_dim(0.0), 1.0);
        assert_eq!(clamp_dim(7.5), 7.5);
    }

    #[test]
    fn test_windows_on_touched_edges_only() {
        let rooms = vec![Room::new(
            "master",
            "Master Bedroom",
            RoomKind::MasterBedroom,
            Rect::new(0.0, 0.0, 12.0, 10.0),
            Zone::SW,
        )];
        let windows = emit_edge_windows(&rooms, 26.0);

        // Touches left and top edges, not the right
        assert_eq!(windows.len(), 2);
        assert!(windows.iter().any(|w| w.side == WallSide::Left));
        assert!(windows.iter().any(|w| w.side == WallSide::Top));
        assert!(windows.iter().all(|w| w.side != WallSide::Right));
    }

    #[test]
    fn test_windows_skip_open_and_stair_rooms() {
        let rooms = vec![
            Room::new(
                "porch",
                "Porch",
                RoomKind::Porch,
                Rect::new(5.0, 21.0, 16.0, 4.0),
                Zone::E,
            )
            .open(),
            Room::new(
                "staircase",
                "Staircase",
                RoomKind::Staircase,
                Rect::new(0.0, 14.0, 8.0, 7.0),
                Zone::SW,
            )
            .stair(),
        ];
        assert!(emit_edge_windows(&rooms, 26.0).is_empty());
    }

    #[test]
    fn test_window_centered_with_clamped_length() {
        let rooms = vec![Room::new(
            "living",
            "Living Room",
            RoomKind::Living,
            Rect::new(12.0, 0.0, 14.0, 20.0),
            Zone::NE,
        )];
        let windows = emit_edge_windows(&rooms, 26.0);

        let right = windows
            .iter()
            .find(|w| w.side == WallSide::Right)
            .expect("window on the right edge");
        // 40% of 20 ft clamps to the 6 ft maximum, centered on the span
        assert_eq!(right.length, 6.0);
        assert_eq!(right.offset, 7.0);
    }

    #[test]
    fn test_no_window_on_narrow_span() {
        let rooms = vec![Room::new(
            "store",
            "Store",
            RoomKind::Store,
            Rect::new(0.0, 14.0, 4.0, 2.0),
            Zone::S,
        )];
        assert!(emit_edge_windows(&rooms, 26.0).is_empty());
    }
}
