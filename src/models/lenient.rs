//! Forgiving field codecs for stored budget records.
//!
//! Collections written by older builds (or edited by hand) carry loosely typed
//! values: amounts as strings, empty strings for absent dates, categories
//! outside today's fixed set. Decoding never rejects a record over a single
//! bad field; instead each field falls back to its neutral value. Whatever is
//! kept is written back as it was read. Input typed by the user goes through
//! `draft` instead, which rejects rather than coerces.

use serde_json::Value;

pub(crate) mod decimal {
    use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    use super::Value;

    /// Written as a JSON number when one holds the value exactly, otherwise
    /// as numeric text, which `coerce` reads back unchanged.
    pub(crate) fn serialize<S: Serializer>(value: &Decimal, s: S) -> Result<S::Ok, S::Error> {
        let n = value.normalize();
        if n.scale() == 0 {
            if let Some(i) = n.to_i64() {
                return s.serialize_i64(i);
            }
        }
        match n.to_f64() {
            Some(f) if Decimal::from_str(&f.to_string()).ok() == Some(n) => s.serialize_f64(f),
            _ => s.serialize_str(&n.to_string()),
        }
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Decimal, D::Error> {
        Ok(coerce(&Value::deserialize(d)?))
    }

    /// Numbers and numeric strings pass through; anything else becomes zero.
    pub(crate) fn coerce(value: &Value) -> Decimal {
        match value {
            Value::Number(n) => Decimal::from_str(&n.to_string())
                .ok()
                .or_else(|| Decimal::from_scientific(&n.to_string()).ok())
                .or_else(|| n.as_f64().and_then(Decimal::from_f64))
                .unwrap_or_default(),
            Value::String(s) => Decimal::from_str(s.trim()).unwrap_or_default(),
            _ => Decimal::ZERO,
        }
    }
}

pub(crate) mod date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Value;

    pub(crate) const FORMAT: &str = "%Y-%m-%d";

    pub(crate) fn serialize<S: Serializer>(
        value: &Option<NaiveDate>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => s.serialize_str(&d.format(FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => NaiveDate::parse_from_str(s.trim(), FORMAT).ok(),
            _ => None,
        })
    }
}

pub(crate) mod category {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Value;
    use crate::models::Category;

    pub(crate) fn serialize<S: Serializer>(
        value: &Option<Category>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(c) => s.serialize_str(c.as_str()),
            None => s.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Category>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => Category::from_stored(&s),
            _ => None,
        })
    }
}

pub(crate) mod text {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Value;

    pub(crate) fn serialize<S: Serializer>(
        value: &Option<String>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(t) => s.serialize_str(t),
            None => s.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        })
    }
}

pub(crate) mod status {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Value;
    use crate::models::Status;

    pub(crate) fn serialize<S: Serializer>(value: &Status, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.as_str())
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Status, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => Status::parse(&s).unwrap_or_default(),
            _ => Status::default(),
        })
    }
}
