use crate::zodiac::ZodiacSign;

pub const SLOT_COUNT: usize = ZodiacSign::COUNT;
/// Angular width of one slot, in degrees.
pub const SLOT_ANGLE: f64 = 360.0 / SLOT_COUNT as f64;
/// Rotates the zero point to 12 o'clock.
pub const START_OFFSET: f64 = -90.0;

pub const LABEL_RADIUS_FACTOR: f64 = 0.7;
pub const SYMBOL_RADIUS_FACTOR: f64 = 0.85;
pub const MARKER_RADIUS_FACTOR: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Screen-space placement of the wheel: a fixed center and outer radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    pub center: Point,
    pub radius: f64,
}

impl WheelGeometry {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Largest wheel that fits a surface of the given size, with a small margin.
    pub fn fit(width: f64, height: f64) -> Self {
        let center = Point::new(width / 2.0, height / 2.0);
        let radius = (width.min(height) / 2.0) * 0.9;
        Self { center, radius }
    }

    /// Point at `angle` degrees (0 = 3 o'clock before the start offset is
    /// applied by the caller, increasing clockwise in screen space) and the
    /// given fraction of the wheel radius.
    pub fn point_at(&self, angle_deg: f64, radius_fraction: f64) -> Point {
        let r = self.radius * radius_fraction;
        let rad = angle_deg.to_radians();
        Point::new(self.center.x + r * rad.cos(), self.center.y + r * rad.sin())
    }
}

/// Start angle of slot `index`, in degrees. Slot 0 begins at 12 o'clock.
pub fn slot_start_angle(index: usize) -> f64 {
    index as f64 * SLOT_ANGLE + START_OFFSET
}

/// Mid-angle of slot `index`, where its label and symbol sit.
pub fn slot_mid_angle(index: usize) -> f64 {
    slot_start_angle(index) + SLOT_ANGLE / 2.0
}

/// Angle of `cursor` relative to `center`, in radians, as `atan2` gives it.
pub fn cursor_angle(cursor: Point, center: Point) -> f64 {
    let (dx, dy) = (cursor.x - center.x, cursor.y - center.y);
    dy.atan2(dx)
}

/// Shortest signed arc from `from` to `to`, in degrees, in [-180, 180).
pub fn shortest_arc(from: f64, to: f64) -> f64 {
    (to - from + 180.0).rem_euclid(360.0) - 180.0
}

/// Ease-out cubic over `t` in [0, 1]. Drives the snap-back glide.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    #[test]
    fn slot_zero_starts_at_twelve_o_clock() {
        assert!((slot_start_angle(0) - -90.0).abs() < EPS);
        assert!((slot_mid_angle(0) - -75.0).abs() < EPS);
    }

    #[test]
    fn slots_tile_the_circle() {
        for i in 0..SLOT_COUNT {
            let width = slot_start_angle(i + 1) - slot_start_angle(i);
            assert!((width - SLOT_ANGLE).abs() < EPS);
        }
        assert!((slot_start_angle(SLOT_COUNT) - 270.0).abs() < EPS);
    }

    #[test]
    fn point_at_top_of_wheel() {
        let geom = WheelGeometry::new(Point::new(200.0, 200.0), 180.0);
        let top = geom.point_at(-90.0, 1.0);
        assert!((top.x - 200.0).abs() < EPS);
        assert!((top.y - 20.0).abs() < EPS);
    }

    #[test]
    fn point_at_scales_with_radius_fraction() {
        let geom = WheelGeometry::new(Point::new(0.0, 0.0), 100.0);
        let p = geom.point_at(0.0, 0.7);
        assert!((p.x - 70.0).abs() < EPS);
        assert!(p.y.abs() < EPS);
    }

    #[test]
    fn fit_centers_on_surface() {
        let geom = WheelGeometry::fit(400.0, 600.0);
        assert_eq!(geom.center, Point::new(200.0, 300.0));
        assert!((geom.radius - 180.0).abs() < EPS);
    }

    #[test]
    fn cursor_angle_matches_atan2_quadrants() {
        let center = Point::new(100.0, 100.0);
        assert!((cursor_angle(Point::new(200.0, 100.0), center)).abs() < EPS);
        let below = cursor_angle(Point::new(100.0, 200.0), center);
        assert!((below - PI / 2.0).abs() < EPS);
    }

    #[test]
    fn shortest_arc_wraps_around_zero() {
        assert!((shortest_arc(350.0, 10.0) - 20.0).abs() < EPS);
        assert!((shortest_arc(10.0, 350.0) - -20.0).abs() < EPS);
        assert!((shortest_arc(343.0, 0.0) - 17.0).abs() < EPS);
        assert!(shortest_arc(90.0, 90.0).abs() < EPS);
    }

    #[test]
    fn ease_out_cubic_is_monotonic_on_unit_interval() {
        assert!(ease_out_cubic(0.0).abs() < EPS);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < EPS);
        let mut last = 0.0;
        for i in 1..=100 {
            let v = ease_out_cubic(i as f64 / 100.0);
            assert!(v >= last);
            last = v;
        }
    }
}
