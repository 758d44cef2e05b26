use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Reporting year used for output naming: a resolved four-digit year, or
/// the literal `"unknown"` when neither the data nor the file name revealed
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportYear {
    Known(i32),
    Unknown,
}

impl fmt::Display for ReportYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportYear::Known(year) => write!(f, "{}", year),
            ReportYear::Unknown => f.write_str("unknown"),
        }
    }
}

impl Serialize for ReportYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ReportYear::Known(year) => serializer.serialize_i32(*year),
            ReportYear::Unknown => serializer.serialize_str("unknown"),
        }
    }
}

struct YearVisitor;

impl Visitor<'_> for YearVisitor {
    type Value = ReportYear;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a year number or the string \"unknown\"")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<ReportYear, E> {
        Ok(ReportYear::Known(value as i32))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<ReportYear, E> {
        Ok(ReportYear::Known(value as i32))
    }

    fn visit_str<E: de::Error>(self, _value: &str) -> Result<ReportYear, E> {
        Ok(ReportYear::Unknown)
    }
}

impl<'de> Deserialize<'de> for ReportYear {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(YearVisitor)
    }
}
