//! Custom serde helpers for upstream wire formats.

/// Deserializes a JSON string *or* number into `String`.
///
/// The upstream sends pagination cursors and some ids as strings on one
/// endpoint and bare integers on another. `null` and a missing field become
/// an empty string.
pub mod string_or_number {
    use serde::de::{self, Deserializer, Visitor};
    use std::fmt;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StringOrNumber;

        impl<'de> Visitor<'de> for StringOrNumber {
            type Value = String;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string or a number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
                Ok(v.to_string())
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
                Ok(v)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
                Ok(v.to_string())
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
                Ok(v.to_string())
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
                Ok(v.to_string())
            }

            fn visit_unit<E: de::Error>(self) -> Result<String, E> {
                Ok(String::new())
            }

            fn visit_none<E: de::Error>(self) -> Result<String, E> {
                Ok(String::new())
            }
        }

        deserializer.deserialize_any(StringOrNumber)
    }
}

/// Converts Unix seconds into `DateTime<Utc>`, `None` for zero or out of range.
pub fn timestamp_secs(secs: i64) -> Option<chrono::DateTime<chrono::Utc>> {
    if secs <= 0 {
        return None;
    }
    chrono::DateTime::<chrono::Utc>::from_timestamp(secs, 0)
}
