//! Property-based tests for the risk scorer.

use proptest::prelude::*;

use super::{MAX_SCORE, RiskBreakdown, score};
use crate::neo::NearEarthObjectRecord;

fn any_record() -> impl Strategy<Value = NearEarthObjectRecord> {
    (
        any::<bool>(),
        0.0f64..20_000_000.0,
        0.0f64..5000.0,
        0.0f64..200_000.0,
    )
        .prop_map(|(h, d, s, v)| NearEarthObjectRecord::new(h, d, s, v))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Score is always within the documented range.
    #[test]
    fn prop_score_in_range(record in any_record()) {
        let s = score(&record).value();
        prop_assert!(s <= MAX_SCORE);
    }

    /// Arbitrary (even non-finite) field values never escape the range.
    #[test]
    fn prop_score_total_over_any_f64(
        hazardous in any::<bool>(),
        miss in any::<f64>(),
        diameter in any::<f64>(),
        velocity in any::<f64>(),
    ) {
        let record = NearEarthObjectRecord {
            is_hazardous: hazardous,
            miss_distance_km: miss,
            diameter_max_meters: diameter,
            relative_velocity_kph: velocity,
        };
        prop_assert!(score(&record).value() <= MAX_SCORE);
    }

    /// Setting the hazardous flag never lowers the score.
    #[test]
    fn prop_monotone_in_hazard(record in any_record()) {
        let off = NearEarthObjectRecord { is_hazardous: false, ..record };
        let on = NearEarthObjectRecord { is_hazardous: true, ..record };
        prop_assert!(score(&on) >= score(&off));
    }

    /// Moving closer never lowers the score.
    #[test]
    fn prop_monotone_in_proximity(
        record in any_record(),
        a in 0.0f64..20_000_000.0,
        b in 0.0f64..20_000_000.0,
    ) {
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        let closer = NearEarthObjectRecord { miss_distance_km: near, ..record };
        let farther = NearEarthObjectRecord { miss_distance_km: far, ..record };
        prop_assert!(score(&closer) >= score(&farther));
    }

    /// Growing larger never lowers the score.
    #[test]
    fn prop_monotone_in_size(record in any_record(), a in 0.0f64..5000.0, b in 0.0f64..5000.0) {
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        let smaller = NearEarthObjectRecord { diameter_max_meters: small, ..record };
        let larger = NearEarthObjectRecord { diameter_max_meters: large, ..record };
        prop_assert!(score(&larger) >= score(&smaller));
    }

    /// Crossing the velocity threshold never lowers the score.
    #[test]
    fn prop_monotone_in_velocity(
        record in any_record(),
        a in 0.0f64..200_000.0,
        b in 0.0f64..200_000.0,
    ) {
        let (slow, fast) = if a <= b { (a, b) } else { (b, a) };
        let slower = NearEarthObjectRecord { relative_velocity_kph: slow, ..record };
        let faster = NearEarthObjectRecord { relative_velocity_kph: fast, ..record };
        prop_assert!(score(&faster) >= score(&slower));
    }

    /// The score is the capped sum of its breakdown.
    #[test]
    fn prop_score_matches_breakdown(record in any_record()) {
        let breakdown = RiskBreakdown::of(&record);
        let expected = breakdown.total().round().min(MAX_SCORE as f64) as u8;
        prop_assert_eq!(score(&record).value(), expected);
    }
}
