/// Geometry primitives for posture evaluation
///
/// All functions work in the image plane of normalized frame coordinates
/// (x to the right, y downward). Depth is ignored.

use crate::models::Landmark;

/// Point in the image plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl From<&Landmark> for Point2 {
    fn from(lm: &Landmark) -> Self {
        Self::new(lm.x, lm.y)
    }
}

impl From<Landmark> for Point2 {
    fn from(lm: Landmark) -> Self {
        Self::new(lm.x, lm.y)
    }
}

/// Calculate the angle at vertex `b` formed by rays `b→a` and `b→c`
///
/// # Returns
/// Degrees in [0, 180]. Symmetric in `a` and `c`.
///
/// If `b` coincides with `a` or `c`, that ray has no direction and
/// `atan2(0, 0) = 0` is used for it; the result is then a boundary artifact
/// rather than NaN.
pub fn angle_between_points(a: impl Into<Point2>, b: impl Into<Point2>, c: impl Into<Point2>) -> f32 {
    let (a, b, c) = (a.into(), b.into(), c.into());

    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let mut angle = radians.to_degrees().abs();

    if angle > 180.0 {
        angle = 360.0 - angle;
    }

    angle.clamp(0.0, 180.0)
}

/// Calculate how far the segment `bottom→top` leans away from upright
///
/// Image y grows downward, so the upward vertical is `(0, -1)`: a top point
/// straight above its bottom reads 0°, a horizontal segment 90°.
pub fn vertical_angle(top: impl Into<Point2>, bottom: impl Into<Point2>) -> f32 {
    let (top, bottom) = (top.into(), bottom.into());

    let dx = top.x - bottom.x;
    let dy = bottom.y - top.y;

    dx.atan2(dy).to_degrees().abs().min(180.0)
}

/// Measure how far the chain `a→b→c` is from a straight line
///
/// # Returns
/// `Some(deviation)` in [0, 1]: 0 when `b→c` continues `a→b` exactly, 1 when
/// it folds straight back. `None` when either segment has zero length, since
/// a repeated point carries no direction.
pub fn alignment_deviation(
    a: impl Into<Point2>,
    b: impl Into<Point2>,
    c: impl Into<Point2>,
) -> Option<f32> {
    let (a, b, c) = (a.into(), b.into(), c.into());

    let ab = Point2::new(b.x - a.x, b.y - a.y);
    let bc = Point2::new(c.x - b.x, c.y - b.y);

    let ab_mag = ab.magnitude();
    let bc_mag = bc.magnitude();

    if !(ab_mag.is_finite() && bc_mag.is_finite()) || ab_mag == 0.0 || bc_mag == 0.0 {
        return None;
    }

    let dot = (ab.x / ab_mag) * (bc.x / bc_mag) + (ab.y / ab_mag) * (bc.y / bc_mag);

    Some(((1.0 - dot) / 2.0).clamp(0.0, 1.0))
}

/// Arithmetic mean of two landmarks in the image plane
pub fn midpoint(a: &Landmark, b: &Landmark) -> Point2 {
    Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}
