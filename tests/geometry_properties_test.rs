use form_coach::services::geometry::{
    alignment_deviation, angle_between_points, vertical_angle, Point2,
};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Point2> {
    (0.0f32..1.0, 0.0f32..1.0).prop_map(|(x, y)| Point2::new(x, y))
}

fn distinct(a: Point2, b: Point2) -> bool {
    (a.x - b.x).abs() > 1e-3 || (a.y - b.y).abs() > 1e-3
}

proptest! {
    #[test]
    fn angle_is_within_half_turn(a in point(), b in point(), c in point()) {
        let angle = angle_between_points(a, b, c);
        prop_assert!((0.0..=180.0).contains(&angle), "angle {}", angle);
    }

    #[test]
    fn angle_is_symmetric(a in point(), b in point(), c in point()) {
        prop_assume!(distinct(a, b) && distinct(c, b));

        let forward = angle_between_points(a, b, c);
        let backward = angle_between_points(c, b, a);
        prop_assert!((forward - backward).abs() < 1e-3, "{} vs {}", forward, backward);
    }

    #[test]
    fn vertical_angle_is_within_half_turn(top in point(), bottom in point()) {
        let angle = vertical_angle(top, bottom);
        prop_assert!((0.0..=180.0).contains(&angle), "angle {}", angle);
    }

    #[test]
    fn alignment_is_within_unit_range(a in point(), b in point(), c in point()) {
        if let Some(deviation) = alignment_deviation(a, b, c) {
            prop_assert!((0.0..=1.0).contains(&deviation), "deviation {}", deviation);
        }
    }

    #[test]
    fn alignment_of_collinear_points_is_zero(
        a in point(),
        c in point(),
        t in 0.1f32..0.9,
    ) {
        prop_assume!(distinct(a, c));

        let b = Point2::new(a.x + t * (c.x - a.x), a.y + t * (c.y - a.y));
        let deviation = alignment_deviation(a, b, c).unwrap();
        prop_assert!(deviation < 1e-4, "deviation {}", deviation);
    }

    #[test]
    fn alignment_is_scale_invariant(
        a in point(),
        b in point(),
        c in point(),
        scale in 0.5f32..20.0,
    ) {
        prop_assume!(distinct(a, b) && distinct(b, c));

        let scaled = |p: Point2| Point2::new(p.x * scale, p.y * scale);
        let original = alignment_deviation(a, b, c).unwrap();
        let resized = alignment_deviation(scaled(a), scaled(b), scaled(c)).unwrap();
        prop_assert!((original - resized).abs() < 1e-3, "{} vs {}", original, resized);
    }
}

#[test]
fn repeated_point_has_no_alignment() {
    let p = Point2::new(0.3, 0.3);
    assert_eq!(alignment_deviation(p, p, Point2::new(0.6, 0.6)), None);
}
