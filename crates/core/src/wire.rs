//! Serde helpers for the JSON shapes clients already depend on.
//!
//! Identifiers and ratings leave the API as JSON strings (`"42"`, `"3"`),
//! and are accepted on the way in as either a number or a numeric string so
//! a fetched resource can be sent back unchanged.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::Serializer;

/// Serialize any `Display` value as a JSON string.
///
/// `f64` renders without a trailing `.0` for whole numbers, so a rating of
/// `3.0` goes out as `"3"`.
pub fn as_string<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Display,
{
    serializer.collect_str(value)
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    Text(String),
}

impl<T> NumberOrString<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn into_value<E: de::Error>(self) -> Result<T, E> {
        match self {
            NumberOrString::Number(n) => Ok(n),
            NumberOrString::Text(s) => s
                .trim()
                .parse()
                .map_err(|e| E::custom(format!("invalid numeric string '{s}': {e}"))),
        }
    }
}

/// Deserialize a number given either as a JSON number or a numeric string.
pub fn number_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    NumberOrString::<T>::deserialize(deserializer)?.into_value()
}

/// Optional variant of [`number_or_string`]. `null` maps to `None`.
///
/// Pair with `#[serde(default)]` so an absent field is also `None`.
pub fn option_number_or_string<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    Option::<NumberOrString<T>>::deserialize(deserializer)?
        .map(|value| value.into_value())
        .transpose()
}
