//! Property-based tests for orbit positions.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::{ORBIT_SPEED_MULTIPLIER, OrbitKind, OrbitingBodyDescriptor, position};

fn any_body() -> impl Strategy<Value = OrbitingBodyDescriptor> {
    let planet = (1.0f64..500.0, 0.0f64..10.0)
        .prop_map(|(distance, angular_speed)| OrbitKind::Planet {
            distance,
            angular_speed,
        });
    let asteroid = (0.0f64..1.0e8, 0.0f64..200_000.0).prop_map(
        |(miss_distance_km, velocity_kph)| OrbitKind::Asteroid {
            miss_distance_km,
            velocity_kph,
        },
    );
    (prop_oneof![planet, asteroid], 0.0f64..TAU)
        .prop_map(|(kind, phase)| OrbitingBodyDescriptor::new(kind, phase))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Every position lies on the body's circle in the y = 0 plane.
    #[test]
    fn prop_position_on_circle(body in any_body(), t in 0.0f64..1.0e5) {
        let p = position(&body, t);
        let r = body.kind.radius();
        prop_assert_eq!(p.y, 0.0);

        let rel_error = ((p.x * p.x + p.z * p.z).sqrt() - r).abs() / r;
        prop_assert!(rel_error < 1e-9, "off circle: r={}, p={:?}", r, p);
    }

    /// Same inputs, bit-identical output.
    #[test]
    fn prop_position_deterministic(body in any_body(), t in 0.0f64..1.0e5) {
        let a = position(&body, t);
        let b = position(&body, t);
        prop_assert_eq!(a.x.to_bits(), b.x.to_bits());
        prop_assert_eq!(a.y.to_bits(), b.y.to_bits());
        prop_assert_eq!(a.z.to_bits(), b.z.to_bits());
    }

    /// A small step in time moves the body at most arc-length r * Δangle.
    #[test]
    fn prop_position_continuous(body in any_body(), t in 0.0f64..1.0e4, eps in 0.0f64..0.1) {
        let p0 = position(&body, t);
        let p1 = position(&body, t + eps);
        let r = body.kind.radius();
        let bound = r * eps * body.kind.speed() * ORBIT_SPEED_MULTIPLIER;
        let moved = (p1 - p0).length();
        prop_assert!(
            moved <= bound + 1e-9 * r.max(1.0),
            "jump of {} exceeds bound {}", moved, bound
        );
    }
}
