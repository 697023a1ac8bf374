// SPDX: CC0-1.0

use crate::{Circle, Number, Point, Velocity};

/// Largest absolute value among `values`, or 0 when empty.
pub fn max_abs(values: &[Number]) -> Number {
    values.iter().map(|v| v.abs()).fold(0.0, Number::max)
}

pub fn clamp(v: Number, min: Number, max: Number) -> Number {
    v.max(min).min(max)
}

/// Whether `v` is within `threshold` of `target`, inclusive.
pub fn loose_eq(v: Number, target: Number, threshold: Number) -> bool {
    (v - target).abs() <= threshold
}

/// `value` rounded to the nearest multiple of `step`.
pub fn align_value(value: Number, step: Number) -> Number {
    (value / step).round() * step
}

#[inline]
pub fn to_rad(deg: Number) -> Number {
    deg.to_radians()
}

#[inline]
pub fn to_angle(rad: Number) -> Number {
    rad.to_degrees()
}

/// Angle in degrees between the horizontal and the line `from -> to`.
pub fn angle_between(from: Point<Number>, to: Point<Number>) -> Number {
    to_angle((to.y - from.y).atan2(to.x - from.x))
}

/// The point at distance `r` from `from`, rotated `deg` degrees.
pub fn angle_to_pos(from: Point<Number>, deg: Number, r: Number) -> Point<Number> {
    let (sin, cos) = to_rad(deg).sin_cos();
    Point {
        x: from.x + cos * r,
        y: from.y + sin * r,
    }
}

pub fn distance(a: Point<Number>, b: Point<Number>) -> Number {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Inclusive of the circumference.
pub fn is_point_in_cycle(circle: &Circle, p: Point<Number>) -> bool {
    let (dx, dy) = (p.x - circle.center.x, p.y - circle.center.y);
    dx * dx + dy * dy <= circle.r * circle.r
}

/// Whether `inner` lies entirely inside `outer`, touching allowed.
pub fn is_circle_in_circle(outer: &Circle, inner: &Circle) -> bool {
    distance(outer.center, inner.center) <= outer.r - inner.r
}

/// `(x, y)` is the top-left corner. Inclusive of the edges.
pub fn is_point_in_rect(p: Point<Number>, x: Number, y: Number, w: Number, h: Number) -> bool {
    p.x >= x && p.x <= x + w && p.y >= y && p.y <= y + h
}

pub fn offset(from: Point<Number>, to: Point<Number>) -> Velocity {
    Velocity {
        vx: to.x - from.x,
        vy: to.y - from.y,
    }
}

pub fn move_point(p: &mut Point<Number>, by: Velocity) {
    p.x += by.vx;
    p.y += by.vy;
}

#[must_use]
pub fn moved(mut p: Point<Number>, by: Velocity) -> Point<Number> {
    move_point(&mut p, by);
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_max_abs() {
        assert_eq!(max_abs(&[-2.0, 5.0]), 5.0);
        assert_eq!(max_abs(&[-7.0, 5.0]), 7.0);
        assert_eq!(max_abs(&[0.0, -0.0]), 0.0);
        assert_eq!(max_abs(&[]), 0.0);
    }

    #[test]
    fn test_angle_between() {
        let o = Point::new(0.0, 0.0);
        assert_abs_diff_eq!(angle_between(o, Point::new(1.0, 0.0)), 0.0);
        assert_abs_diff_eq!(angle_between(o, Point::new(0.0, 1.0)), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            angle_between(o, Point::new(-1.0, -1.0)),
            -135.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_angle_to_pos() {
        let p = angle_to_pos(Point::new(1.0, 1.0), 90.0, 2.0);
        assert_abs_diff_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_containment() {
        let c = Circle::new(0.0, 0.0, 5.0);
        assert!(is_point_in_cycle(&c, Point::new(3.0, 4.0)));
        assert!(!is_point_in_cycle(&c, Point::new(3.0, 4.1)));
        assert!(is_point_in_rect(Point::new(10.0, 0.0), 0.0, 0.0, 10.0, 10.0));
        assert!(!is_point_in_rect(Point::new(-0.1, 5.0), 0.0, 0.0, 10.0, 10.0));
        assert_eq!(clamp(12.0, 0.0, 10.0), 10.0);
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_circle_in_circle() {
        let outer = Circle::new(0.0, 0.0, 10.0);
        assert!(is_circle_in_circle(&outer, &Circle::new(3.0, 4.0, 5.0)));
        assert!(!is_circle_in_circle(&outer, &Circle::new(3.0, 4.0, 5.5)));
        assert!(!is_circle_in_circle(&Circle::new(3.0, 4.0, 5.0), &outer));
        assert!(is_circle_in_circle(&outer, &outer));
    }

    #[test]
    fn test_loose_eq_and_align() {
        assert!(loose_eq(1.005, 1.0, 0.01));
        assert!(loose_eq(0.99, 1.0, 0.01));
        assert!(!loose_eq(1.02, 1.0, 0.01));
        assert_eq!(align_value(17.0, 5.0), 15.0);
        assert_eq!(align_value(18.0, 5.0), 20.0);
        assert_eq!(align_value(-7.0, 5.0), -5.0);
    }

    #[test]
    fn test_offsets() {
        let (a, b) = (Point::new(1.0, 2.0), Point::new(4.0, -2.0));
        let d = offset(a, b);
        assert_eq!(d, Velocity { vx: 3.0, vy: -4.0 });
        assert_eq!(moved(a, d), b);
        assert_eq!(a, Point::new(1.0, 2.0));

        let mut p = a;
        move_point(&mut p, d);
        move_point(&mut p, d);
        assert_eq!(p, Point::new(7.0, -6.0));
    }
}
