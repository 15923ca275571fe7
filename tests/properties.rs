#![allow(clippy::unwrap_used)]

use std::f64::consts::TAU;

use polyloom::math::EPSILON;
use polyloom::{Point2, Shape, Vector2, Winding};
use proptest::prelude::*;

fn regular() -> impl Strategy<Value = Shape> {
    (3usize..12, 0.5f64..100.0, -100.0f64..100.0, -100.0f64..100.0, 0.0f64..TAU).prop_map(
        |(n, radius, cx, cy, rotation)| {
            Shape::regular(n, radius, Point2::new(cx, cy), rotation).unwrap()
        },
    )
}

proptest! {
    #[test]
    fn from_points_reproduces_points(shape in regular()) {
        let rebuilt = Shape::from_points(&shape.points(), Winding::CounterClockwise).unwrap();
        prop_assert_eq!(rebuilt.points(), shape.points());
    }

    #[test]
    fn loop_is_continuous(shape in regular()) {
        let n = shape.segment_count();
        prop_assert_eq!(n, shape.vertex_count());
        for i in 0..n {
            let end = shape.segment(i).unwrap().end();
            let next = shape.segment((i + 1) % n).unwrap().start();
            prop_assert!((end - next).norm() < EPSILON);
        }
        prop_assert!(shape.validate().is_empty());
    }

    #[test]
    fn reverse_is_self_inverse(shape in regular()) {
        let mut s = shape.clone();
        s.reverse();
        prop_assert!((s.area() + shape.area()).abs() < 1e-6 * shape.area().abs().max(1.0));
        prop_assert_eq!(s.winding(), Winding::Clockwise);
        s.reverse();
        prop_assert_eq!(s.points(), shape.points());
        prop_assert_eq!(s.winding(), shape.winding());
    }

    #[test]
    fn outset_then_inset_round_trips(shape in regular(), d in 0.1f64..10.0) {
        let back = shape.offset(d).offset(-d);
        prop_assert_eq!(back.vertex_count(), shape.vertex_count());
        for (a, b) in back.points().iter().zip(shape.points()) {
            prop_assert!((a - b).norm() < 1e-6, "{a} vs {b}");
        }
    }

    #[test]
    fn centroid_inside_far_point_outside(shape in regular()) {
        let c = shape.centroid();
        prop_assert!(shape.contains_point(&c, EPSILON));
        let far = c + Vector2::new(1000.0, 1000.0);
        prop_assert!(!shape.contains_point(&far, EPSILON));
    }

    #[test]
    fn translation_preserves_area(shape in regular(), dx in -50.0f64..50.0, dy in -50.0f64..50.0) {
        let mut s = shape.clone();
        s.translate(Vector2::new(dx, dy));
        prop_assert!((s.area() - shape.area()).abs() < 1e-6 * shape.area().max(1.0));
    }
}
