/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Milliseconds since the Unix epoch, as stored on records and sent on the wire.
pub type EpochMillis = i64;

/// Placeholder tenant assigned to every site.
pub const DEFAULT_COMPANY_ID: &str = "default-company";

/// Lenient [`EpochMillis`] deserializer for `#[serde(deserialize_with)]`.
///
/// Accepts integers and whole-number floats; documents written by earlier
/// deployments store millisecond timestamps as doubles.
pub mod epoch_millis {
    use std::fmt;

    use serde::de::{self, Deserializer, Visitor};

    use super::EpochMillis;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<EpochMillis, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MillisVisitor)
    }

    struct MillisVisitor;

    impl Visitor<'_> for MillisVisitor {
        type Value = EpochMillis;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("epoch milliseconds as an integer or whole float")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<EpochMillis, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<EpochMillis, E> {
            EpochMillis::try_from(v).map_err(|_| E::custom(format!("timestamp {v} out of range")))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<EpochMillis, E> {
            if v.is_finite() && v.fract() == 0.0 && v.abs() < 9.0e15 {
                Ok(v as EpochMillis)
            } else {
                Err(E::custom(format!("timestamp {v} is not whole milliseconds")))
            }
        }
    }

}
