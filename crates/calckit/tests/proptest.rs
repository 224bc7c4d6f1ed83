//! Property-based tests for request dispatch.

use std::f64::consts::PI;

use proptest::prelude::*;

use calckit_core::arithmetic::{add, subtract};
use calckit_core::constants::AREA_TOLERANCE;
use calckit_core::geometry::{area_rectangle, area_square};
use calckit_core::operation::{Request, Value};
use calckit_core::options::{Options, OverflowPolicy, ValidationPolicy};

fn permissive() -> Options {
    Options::default()
}

fn same_f64(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Dispatch gives the same area as the direct functions.
    #[test]
    fn dispatch_matches_geometry(x in -1e6f64..1e6, y in -1e6f64..1e6) {
        let square = Request::Square { side: x }.evaluate(&permissive()).unwrap();
        prop_assert_eq!(square, Value::Area(area_square(x)));
        let rect = Request::Rectangle { base: x, height: y }.evaluate(&permissive()).unwrap();
        prop_assert_eq!(rect, Value::Area(area_rectangle(x, y)));
    }

    /// Circle dispatch stays within tolerance of the formula.
    #[test]
    fn dispatch_circle(r in 0.0f64..1e3) {
        let area = Request::Circle { radius: r }
            .evaluate(&permissive())
            .unwrap()
            .as_area()
            .unwrap();
        prop_assert!((area - PI * r * r).abs() < AREA_TOLERANCE);
    }

    /// Dispatch gives the same integers as the direct functions.
    #[test]
    fn dispatch_matches_arithmetic(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(
            Request::Add { a, b }.evaluate(&permissive()).unwrap(),
            Value::Integer(add(a, b))
        );
        prop_assert_eq!(
            Request::Subtract { a, b }.evaluate(&permissive()).unwrap(),
            Value::Integer(subtract(a, b))
        );
    }

    /// Strict validation accepts exactly the non-negative dimensions.
    #[test]
    fn strict_accepts_non_negative(x in -1e6f64..1e6) {
        let opts = Options { validation: ValidationPolicy::Strict, ..Options::default() };
        let result = Request::Square { side: x }.evaluate(&opts);
        prop_assert_eq!(result.is_ok(), x >= 0.0);
    }

    /// Checked overflow never rejects operands that fit.
    #[test]
    fn checked_small_operands(a in -1_000_000i32..1_000_000, b in -1_000_000i32..1_000_000) {
        let opts = Options { overflow: OverflowPolicy::Checked, ..Options::default() };
        prop_assert_eq!(
            Request::Add { a, b }.evaluate(&opts).unwrap(),
            Value::Integer(a + b)
        );
        prop_assert_eq!(
            Request::Subtract { a, b }.evaluate(&opts).unwrap(),
            Value::Integer(a - b)
        );
    }

    /// Integer requests survive a JSON round trip unchanged.
    #[test]
    fn integer_request_json_round_trip(a in any::<i32>(), b in any::<i32>()) {
        for request in [Request::Add { a, b }, Request::Subtract { a, b }] {
            let json = serde_json::to_string(&request).unwrap();
            let back: Request = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, request);
        }
    }

    /// Any f64 dimension, including infinities and NaN, survives a JSON round trip.
    #[test]
    fn dimension_json_round_trip(x in prop::num::f64::ANY, y in prop::num::f64::ANY) {
        let request = Request::Rectangle { base: x, height: y };
        let json = serde_json::to_string(&request).unwrap();
        let back: Request = serde_json::from_str(&json).unwrap();
        match back {
            Request::Rectangle { base, height } => {
                prop_assert!(same_f64(base, x), "base {} != {}", base, x);
                prop_assert!(same_f64(height, y), "height {} != {}", height, y);
            }
            other => prop_assert!(false, "decoded {:?}", other),
        }
    }

    /// JSON output never drops a computed area to null.
    #[test]
    fn calculation_json_has_value(x in prop::num::f64::ANY) {
        let calc = Request::Square { side: x }.calculate(&permissive()).unwrap();
        let json = serde_json::to_value(calc).unwrap();
        prop_assert!(!json["value"].is_null());
        prop_assert!(!json["side"].is_null());
    }
}
