use crate::geometry::{self, Point, SLOT_ANGLE};

/// Snap a rotation to the nearest slot boundary, normalized to [0, 360).
/// Ties round up, so 15° commits to 30°.
pub fn snap(rotation: f64) -> f64 {
    ((rotation / SLOT_ANGLE).round() * SLOT_ANGLE).rem_euclid(360.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    /// Pointer angle at drag start, radians.
    start_angle: f64,
    /// Last rotation handed to the display, degrees in [0, 360).
    live_rotation: f64,
}

/// Rotation state machine for the wheel. `Idle` between interactions,
/// `Dragging` while a pointer or touch sequence is active. The committed
/// rotation is a multiple of `SLOT_ANGLE` at all times; only the live value
/// carried inside an active drag may be unsnapped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelState {
    committed: f64,
    drag: Option<DragState>,
}

impl WheelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last committed (snapped) rotation, degrees in [0, 360).
    pub fn committed_rotation(&self) -> f64 {
        self.committed
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Idle -> Dragging. Captures the pointer's angle against the wheel's
    /// current on-screen center. A second down while already dragging is
    /// ignored.
    pub fn begin_drag(&mut self, pointer: Point, center: Point) {
        if self.drag.is_some() {
            return;
        }
        self.drag = Some(DragState {
            start_angle: geometry::cursor_angle(pointer, center),
            live_rotation: self.committed,
        });
    }

    /// Live rotation for the current pointer position, or `None` when idle
    /// (stray move events are dropped). Does not touch the committed value.
    pub fn drag_to(&mut self, pointer: Point, center: Point) -> Option<f64> {
        let drag = self.drag.as_mut()?;
        let angle = geometry::cursor_angle(pointer, center);
        let delta = (angle - drag.start_angle).to_degrees();
        drag.live_rotation = (delta + self.committed + 360.0).rem_euclid(360.0);
        Some(drag.live_rotation)
    }

    /// Dragging -> Idle. Snaps the last live rotation, commits it, and
    /// returns it; `None` when no drag was in progress.
    pub fn end_drag(&mut self) -> Option<f64> {
        let drag = self.drag.take()?;
        self.committed = snap(drag.live_rotation);
        Some(self.committed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn center() -> Point {
        Point::new(200.0, 200.0)
    }

    /// Point on a 100px circle around the test center, `deg` measured the
    /// same way the wheel measures rotation.
    fn pointer_at(deg: f64) -> Point {
        let rad = deg.to_radians();
        Point::new(200.0 + 100.0 * rad.cos(), 200.0 + 100.0 * rad.sin())
    }

    #[test]
    fn snap_lands_on_slot_boundaries() {
        for r in [0.0, 14.9, 15.0, 29.0, 161.0, 343.0, 359.9] {
            assert!(snap(r) % SLOT_ANGLE < EPS, "snap({r}) = {}", snap(r));
        }
    }

    #[test]
    fn snap_is_idempotent() {
        for r in [0.0, 7.0, 44.9, 181.3, 343.0] {
            assert!((snap(snap(r)) - snap(r)).abs() < EPS);
        }
    }

    #[test]
    fn snap_ties_round_up() {
        assert!((snap(15.0) - 30.0).abs() < EPS);
        assert!((snap(14.999) - 0.0).abs() < EPS);
    }

    #[test]
    fn snap_wraps_to_zero_near_full_turn() {
        // 343 is still nearest to 330; from the 345 tie upward the wheel
        // wraps to the zero position
        assert!((snap(343.0) - 330.0).abs() < EPS);
        assert!(snap(345.0).abs() < EPS);
        assert!(snap(353.0).abs() < EPS);
        assert!(snap(359.0).abs() < EPS);
    }

    #[test]
    fn full_drag_commits_snapped_rotation() {
        let mut state = WheelState::new();
        state.begin_drag(pointer_at(0.0), center());
        assert!(state.is_dragging());

        let live = state.drag_to(pointer_at(95.0), center()).unwrap();
        assert!((live - 95.0).abs() < 1e-6);
        // live rotation never bleeds into the committed value
        assert!(state.committed_rotation().abs() < EPS);

        let committed = state.end_drag().unwrap();
        assert!((committed - 90.0).abs() < EPS);
        assert!((state.committed_rotation() - 90.0).abs() < EPS);
        assert!(!state.is_dragging());
    }

    #[test]
    fn second_drag_builds_on_committed_rotation() {
        let mut state = WheelState::new();
        state.begin_drag(pointer_at(0.0), center());
        state.drag_to(pointer_at(60.0), center());
        state.end_drag();
        assert!((state.committed_rotation() - 60.0).abs() < EPS);

        state.begin_drag(pointer_at(10.0), center());
        let live = state.drag_to(pointer_at(40.0), center()).unwrap();
        assert!((live - 90.0).abs() < 1e-6);
        assert!((state.end_drag().unwrap() - 90.0).abs() < EPS);
    }

    #[test]
    fn live_rotation_stays_normalized_across_wrap() {
        let mut state = WheelState::new();
        state.begin_drag(pointer_at(30.0), center());
        // dragging counter-clockwise past the zero point
        let live = state.drag_to(pointer_at(10.0), center()).unwrap();
        assert!((live - 340.0).abs() < 1e-6);
        assert!((0.0..360.0).contains(&live));
        assert!(state.end_drag().unwrap().abs() < EPS);
    }

    #[test]
    fn release_without_movement_keeps_rotation() {
        let mut state = WheelState::new();
        state.begin_drag(pointer_at(45.0), center());
        let committed = state.end_drag().unwrap();
        assert!(committed.abs() < EPS);
    }

    #[test]
    fn stray_move_and_release_are_ignored_when_idle() {
        let mut state = WheelState::new();
        assert_eq!(state.drag_to(pointer_at(120.0), center()), None);
        assert_eq!(state.end_drag(), None);
        assert_eq!(state, WheelState::new());
    }

    #[test]
    fn down_while_dragging_keeps_first_start_angle() {
        let mut state = WheelState::new();
        state.begin_drag(pointer_at(0.0), center());
        state.begin_drag(pointer_at(90.0), center());
        let live = state.drag_to(pointer_at(30.0), center()).unwrap();
        assert!((live - 30.0).abs() < 1e-6);
    }

    #[test]
    fn committed_rotation_is_always_a_slot_multiple() {
        let mut state = WheelState::new();
        for deg in [17.0, 203.5, 358.0, 91.2, 44.9] {
            state.begin_drag(pointer_at(0.0), center());
            state.drag_to(pointer_at(deg), center());
            state.end_drag();
            assert!(state.committed_rotation() % SLOT_ANGLE < 1e-6);
            assert!((0.0..360.0).contains(&state.committed_rotation()));
        }
    }
}
