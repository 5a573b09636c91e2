//! Slice layout for the name wheel.
//!
//! Angles are in degrees, measured clockwise from 12 o'clock. Cartesian
//! output uses SVG conventions (y grows downward).

use std::f64::consts::PI;

use crate::roster::Roster;

/// Wedge fill colors, cycled by slice index.
pub const PALETTE: [&str; 6] = [
    "#d4a574", "#8b4645", "#c1956f", "#a1565c", "#b8956a", "#9d5a5f",
];

pub const DEFAULT_CENTER: f64 = 100.0;
pub const DEFAULT_RADIUS: f64 = 95.0;
pub const LABEL_RADIUS_FRACTION: f64 = 0.65;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One entrant's wedge. Rebuilt from scratch on every roster change.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub index: usize,
    pub entrant: String,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color_index: usize,
}

impl Slice {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.span() / 2.0
    }

    pub fn color(&self) -> &'static str {
        color_for(self.color_index)
    }

    /// Whether `angle` (already normalized to [0, 360)) falls in this slice.
    pub fn contains_angle(&self, angle: f64) -> bool {
        angle >= self.start_angle && angle < self.end_angle
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub anchor: Point,
    /// Rotation applied about the anchor so the text runs along the radius.
    pub rotation: f64,
}

/// Fixed drawing frame the wheel is laid out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    pub center: Point,
    pub radius: f64,
    pub label_radius_fraction: f64,
}

impl Default for WheelLayout {
    fn default() -> Self {
        Self {
            center: Point {
                x: DEFAULT_CENTER,
                y: DEFAULT_CENTER,
            },
            radius: DEFAULT_RADIUS,
            label_radius_fraction: LABEL_RADIUS_FRACTION,
        }
    }
}

impl WheelLayout {
    /// Side length of the square viewBox that contains the wheel.
    pub fn view_size(&self) -> f64 {
        self.center.x * 2.0
    }

    pub fn label_for(&self, slice: &Slice) -> LabelPlacement {
        let mid = slice.mid_angle();
        LabelPlacement {
            anchor: polar_to_cartesian(
                self.center,
                self.radius * self.label_radius_fraction,
                mid,
            ),
            rotation: mid,
        }
    }

    /// SVG path data for a slice wedge.
    pub fn slice_path(&self, slice: &Slice) -> String {
        let c = self.center;
        let r = self.radius;

        // A lone entrant owns the whole disc; a single arc between identical
        // endpoints would draw nothing.
        if slice.span() >= 360.0 {
            return format!(
                "M {} {} A {r} {r} 0 1 0 {} {} A {r} {r} 0 1 0 {} {} Z",
                fmt_coord(c.x),
                fmt_coord(c.y - r),
                fmt_coord(c.x),
                fmt_coord(c.y + r),
                fmt_coord(c.x),
                fmt_coord(c.y - r),
                r = fmt_coord(r),
            );
        }

        let start = polar_to_cartesian(c, r, slice.end_angle);
        let end = polar_to_cartesian(c, r, slice.start_angle);
        let large_arc = if slice.span() > 180.0 { 1 } else { 0 };

        [
            format!("M {} {}", fmt_coord(c.x), fmt_coord(c.y)),
            format!("L {} {}", fmt_coord(start.x), fmt_coord(start.y)),
            format!(
                "A {r} {r} 0 {} 0 {} {}",
                large_arc,
                fmt_coord(end.x),
                fmt_coord(end.y),
                r = fmt_coord(r),
            ),
            "Z".to_string(),
        ]
        .join(" ")
    }
}

/// Splits the circle into one equal slice per entrant, in roster order.
pub fn compute_slices(roster: &Roster) -> Vec<Slice> {
    let n = roster.count();
    if n == 0 {
        return Vec::new();
    }

    roster
        .iter()
        .enumerate()
        .map(|(index, name)| Slice {
            index,
            entrant: name.to_string(),
            start_angle: boundary_angle(index, n),
            end_angle: boundary_angle(index + 1, n),
            color_index: index % PALETTE.len(),
        })
        .collect()
}

/// Angle of the `k`-th slice boundary. Multiplying before dividing keeps the
/// final boundary at exactly 360.
fn boundary_angle(k: usize, n: usize) -> f64 {
    (k as f64 * 360.0) / n as f64
}

pub fn color_for(color_index: usize) -> &'static str {
    PALETTE[color_index % PALETTE.len()]
}

/// Converts a wheel angle (0 = up, clockwise) at `radius` from `center`.
pub fn polar_to_cartesian(center: Point, radius: f64, angle_degrees: f64) -> Point {
    let radians = (angle_degrees - 90.0) * PI / 180.0;
    Point {
        x: center.x + radius * radians.cos(),
        y: center.y + radius * radians.sin(),
    }
}

/// Normalizes an angle to [0, 360).
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

fn fmt_coord(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn roster_of(n: usize) -> Roster {
        Roster::from_names((0..n).map(|i| format!("name{}", i)))
    }

    #[test]
    fn test_empty_roster_has_no_slices() {
        assert!(compute_slices(&Roster::new()).is_empty());
    }

    #[test]
    fn test_slices_cover_circle_contiguously() {
        for n in 1..=40 {
            let slices = compute_slices(&roster_of(n));
            assert_eq!(slices.len(), n);
            assert_eq!(slices[0].start_angle, 0.0);
            assert_eq!(slices[n - 1].end_angle, 360.0);

            let expected_span = 360.0 / n as f64;
            let mut total = 0.0;
            for (i, slice) in slices.iter().enumerate() {
                assert_eq!(slice.index, i);
                assert!((slice.span() - expected_span).abs() < EPS);
                if i + 1 < n {
                    assert_eq!(slice.end_angle, slices[i + 1].start_angle);
                }
                total += slice.span();
            }
            assert!((total - 360.0).abs() < EPS, "n={} total={}", n, total);
        }
    }

    #[test]
    fn test_three_entrants() {
        let roster = Roster::from_names(["Ana", "Bo", "Cy"]);
        let slices = compute_slices(&roster);
        let bounds: Vec<(f64, f64)> = slices.iter().map(|s| (s.start_angle, s.end_angle)).collect();
        assert_eq!(bounds, vec![(0.0, 120.0), (120.0, 240.0), (240.0, 360.0)]);
        assert_eq!(slices[1].entrant, "Bo");
        assert_eq!(slices[1].mid_angle(), 180.0);
    }

    #[test]
    fn test_colors_cycle_with_palette() {
        let slices = compute_slices(&roster_of(15));
        for slice in &slices {
            assert_eq!(slice.color_index, slice.index % PALETTE.len());
        }
        assert_eq!(slices[1].color(), slices[1 + PALETTE.len()].color());
        assert_eq!(slices[0].color(), PALETTE[0]);
    }

    #[test]
    fn test_polar_zero_points_up() {
        let center = Point { x: 100.0, y: 100.0 };
        let up = polar_to_cartesian(center, 10.0, 0.0);
        assert!((up.x - 100.0).abs() < EPS);
        assert!((up.y - 90.0).abs() < EPS);

        let right = polar_to_cartesian(center, 10.0, 90.0);
        assert!((right.x - 110.0).abs() < EPS);
        assert!((right.y - 100.0).abs() < EPS);
    }

    #[test]
    fn test_label_sits_inside_slice_midpoint() {
        let layout = WheelLayout::default();
        let slices = compute_slices(&Roster::from_names(["Ana", "Bo"]));
        let label = layout.label_for(&slices[0]);
        assert_eq!(label.rotation, 90.0);
        assert!((label.anchor.x - (100.0 + 95.0 * 0.65)).abs() < EPS);
        assert!((label.anchor.y - 100.0).abs() < EPS);
    }

    #[test]
    fn test_half_slice_path() {
        let layout = WheelLayout::default();
        let slices = compute_slices(&Roster::from_names(["Ana", "Bo"]));
        assert_eq!(
            layout.slice_path(&slices[0]),
            "M 100 100 L 100 195 A 95 95 0 0 0 100 5 Z"
        );
    }

    #[test]
    fn test_single_entrant_path_is_full_disc() {
        let layout = WheelLayout::default();
        let slices = compute_slices(&Roster::from_names(["Solo"]));
        assert_eq!(
            layout.slice_path(&slices[0]),
            "M 100 5 A 95 95 0 1 0 100 195 A 95 95 0 1 0 100 5 Z"
        );
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(3780.0), 180.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
    }
}
