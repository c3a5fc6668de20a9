//! Smooth curve generation for the tide line and area.
//!
//! Builds SVG path strings through an ordered set of plotted points using a
//! centripetal Catmull-Rom spline (alpha = 0.5), emitted as one cubic
//! Bezier segment per interior interval. The centripetal parameterization
//! keeps the curve well-behaved through irregularly spaced samples, which
//! tide extrema always are; the goal is visual smoothness, not physical
//! accuracy.
//!
//! Endpoints are handled by duplicating the first and last points, so the
//! curve begins and ends exactly on the data.

/// A point in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

const EPSILON: f32 = 1e-6;

/// Build an open Catmull-Rom path (`M` + `C` segments) through `points`.
///
/// Returns an empty string for no points and a bare `M` for a single
/// point. For `n` points the path contains `n - 1` Bezier segments.
pub fn curve_path(points: &[Point]) -> String {
    let mut d = String::new();
    let first = match points.first() {
        Some(p) => p,
        None => return d,
    };
    d.push_str(&format!("M{:.2},{:.2}", first.x, first.y));

    let n = points.len();
    for i in 0..n.saturating_sub(1) {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(n - 1)];
        let (c1, c2) = control_points(p0, p1, p2, p3);
        d.push_str(&format!(
            "C{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            c1.x, c1.y, c2.x, c2.y, p2.x, p2.y
        ));
    }
    d
}

/// Build a closed area path: the same top curve as [`curve_path`], dropped
/// to a fixed `baseline` on both ends and closed along the bottom edge.
pub fn area_path(points: &[Point], baseline: f32) -> String {
    let (first, last) = match (points.first(), points.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return String::new(),
    };
    let mut d = curve_path(points);
    d.push_str(&format!(
        "L{:.2},{:.2}L{:.2},{:.2}Z",
        last.x, baseline, first.x, baseline
    ));
    d
}

/// Bezier control points for the segment `p1 -> p2` of a centripetal
/// Catmull-Rom spline with neighbors `p0` and `p3`.
///
/// With alpha = 0.5 the parameter spacing between two knots is the square
/// root of their euclidean distance, so `l_2a` below is the distance itself
/// and `l_a` its square root. Zero-length neighbor intervals (duplicated
/// endpoints, repeated samples) fall back to the knot itself.
fn control_points(p0: Point, p1: Point, p2: Point, p3: Point) -> (Point, Point) {
    let l01_2a = distance(p0, p1);
    let l12_2a = distance(p1, p2);
    let l23_2a = distance(p2, p3);
    let l01_a = l01_2a.sqrt();
    let l12_a = l12_2a.sqrt();
    let l23_a = l23_2a.sqrt();

    let mut c1 = p1;
    let mut c2 = p2;

    if l01_a > EPSILON {
        let a = 2.0 * l01_2a + 3.0 * l01_a * l12_a + l12_2a;
        let n = 3.0 * l01_a * (l01_a + l12_a);
        c1 = Point {
            x: (p1.x * a - p0.x * l12_2a + p2.x * l01_2a) / n,
            y: (p1.y * a - p0.y * l12_2a + p2.y * l01_2a) / n,
        };
    }
    if l23_a > EPSILON {
        let b = 2.0 * l23_2a + 3.0 * l23_a * l12_a + l12_2a;
        let m = 3.0 * l23_a * (l23_a + l12_a);
        c2 = Point {
            x: (p2.x * b + p1.x * l12_2a - p3.x * l23_2a) / m,
            y: (p2.y * b + p1.y * l12_2a - p3.y * l23_2a) / m,
        };
    }

    (c1, c2)
}

fn distance(a: Point, b: Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}
