//! JSON representation of `f64` values that keeps non-finite numbers.
//!
//! JSON has no literal for infinity or NaN and `serde_json` writes them as
//! `null`. Finite values stay plain numbers; non-finite ones are written as
//! the strings `"inf"`, `"-inf"` and `"NaN"` and read back from them.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

const INF: &str = "inf";
const NEG_INF: &str = "-inf";
const NAN: &str = "NaN";

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let value = *value;
    if value.is_finite() {
        serializer.serialize_f64(value)
    } else if value.is_nan() {
        serializer.serialize_str(NAN)
    } else if value > 0.0 {
        serializer.serialize_str(INF)
    } else {
        serializer.serialize_str(NEG_INF)
    }
}

pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    deserializer.deserialize_any(F64Visitor)
}

struct F64Visitor;

impl Visitor<'_> for F64Visitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or one of \"inf\", \"-inf\", \"NaN\"")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        match v {
            INF => Ok(f64::INFINITY),
            NEG_INF => Ok(f64::NEG_INFINITY),
            NAN => Ok(f64::NAN),
            other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Dim(#[serde(with = "super")] f64);

    fn encode(v: f64) -> String {
        serde_json::to_string(&Dim(v)).unwrap()
    }

    fn decode(s: &str) -> f64 {
        serde_json::from_str::<Dim>(s).unwrap().0
    }

    #[test]
    fn finite_values_stay_numbers() {
        assert_eq!(encode(16.0), "16.0");
        assert_eq!(encode(-2.5), "-2.5");
        assert_eq!(decode("16.0"), 16.0);
        assert_eq!(decode("4"), 4.0);
        assert_eq!(decode("-4"), -4.0);
    }

    #[test]
    fn non_finite_values_become_strings() {
        assert_eq!(encode(f64::INFINITY), "\"inf\"");
        assert_eq!(encode(f64::NEG_INFINITY), "\"-inf\"");
        assert_eq!(encode(f64::NAN), "\"NaN\"");
    }

    #[test]
    fn non_finite_strings_read_back() {
        assert_eq!(decode("\"inf\""), f64::INFINITY);
        assert_eq!(decode("\"-inf\""), f64::NEG_INFINITY);
        assert!(decode("\"NaN\"").is_nan());
    }

    #[test]
    fn other_strings_rejected() {
        assert!(serde_json::from_str::<Dim>("\"infinity\"").is_err());
        assert!(serde_json::from_str::<Dim>("null").is_err());
    }
}
