//! Serde helpers for floats that may be infinite
//!
//! JSON has no encoding for ±inf or NaN, and `serde_json` writes them as
//! `null`. These helpers write non-finite values as the strings `"inf"`,
//! `"-inf"` and `"NaN"` and read either form back.
//!
//! ```ignore
//! #[serde(with = "crate::domain::extended_float")]
//! pub test_statistic: f64,
//! ```

use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

/// Wire form of a single value
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum WireFloat {
    Number(f64),
    Text(String),
}

impl From<f64> for WireFloat {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            WireFloat::Number(value)
        } else if value.is_nan() {
            WireFloat::Text("NaN".to_string())
        } else if value > 0.0 {
            WireFloat::Text("inf".to_string())
        } else {
            WireFloat::Text("-inf".to_string())
        }
    }
}

impl WireFloat {
    fn into_f64<E: de::Error>(self) -> Result<f64, E> {
        match self {
            WireFloat::Number(value) => Ok(value),
            WireFloat::Text(text) => match text.as_str() {
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                "NaN" => Ok(f64::NAN),
                other => Err(E::invalid_value(
                    de::Unexpected::Str(other),
                    &"a number, \"inf\", \"-inf\" or \"NaN\"",
                )),
            },
        }
    }
}

pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    WireFloat::from(*value).serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    WireFloat::deserialize(deserializer)?.into_f64()
}

/// Same encoding for every element of a `Vec<f64>`
pub mod vec {
    use super::*;

    pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for &value in values {
            seq.serialize_element(&WireFloat::from(value))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        Vec::<WireFloat>::deserialize(deserializer)?
            .into_iter()
            .map(WireFloat::into_f64)
            .collect()
    }
}
