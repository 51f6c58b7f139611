//! Raw stored values.
//!
//! [`RawValue`] is the input shape of the coercion boundary: whatever a
//! persistence layer hands back when loading an enumeration column. It is
//! either absent (`NULL`), an integer, or a piece of text that may be a
//! stringified integer or a slug. [`Enumeration::to_item`] normalizes any of
//! these into a member (or `None`).
//!
//! The serde representation is untagged, so a stored JSON column value
//! deserializes directly:
//!
//! ```
//! use stele_core::RawValue;
//!
//! let raw: RawValue = serde_json::from_str("2").unwrap();
//! assert_eq!(raw, RawValue::Int(2));
//!
//! let raw: RawValue = serde_json::from_str("\"active\"").unwrap();
//! assert_eq!(raw, RawValue::Text("active".to_string()));
//!
//! let raw: RawValue = serde_json::from_str("null").unwrap();
//! assert_eq!(raw, RawValue::Null);
//! ```
//!
//! [`Enumeration::to_item`]: crate::Enumeration::to_item

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// A raw value as stored or received at the persistence boundary.
///
/// Conversions exist from the common input shapes, so coercion call sites
/// can pass integers, strings, options, or items directly:
///
/// ```
/// use stele_core::{Item, RawValue};
///
/// assert_eq!(RawValue::from(3), RawValue::Int(3));
/// assert_eq!(RawValue::from("active"), RawValue::Text("active".into()));
/// assert_eq!(RawValue::from(None::<i64>), RawValue::Null);
///
/// let item = Item::new(1, "active");
/// assert_eq!(RawValue::from(&item), RawValue::Int(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Absent - a stored NULL.
    Null,
    /// An integer, expected to be a member's canonical value.
    Int(i64),
    /// Text - a stringified integer or a slug.
    Text(String),
}

impl RawValue {
    /// Whether this value counts as "no item" at the coercion boundary.
    ///
    /// NULL and the empty string are both absent; enumeration fields are
    /// nullable by contract, so neither is an error.
    pub fn is_absent(&self) -> bool {
        match self {
            RawValue::Null => true,
            RawValue::Text(text) => text.is_empty(),
            RawValue::Int(_) => false,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => f.write_str("null"),
            RawValue::Int(value) => write!(f, "{value}"),
            RawValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Int(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Int(i64::from(value))
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        RawValue::Text(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        RawValue::Text(text)
    }
}

impl From<&Item> for RawValue {
    fn from(item: &Item) -> Self {
        RawValue::Int(item.value())
    }
}

impl From<Item> for RawValue {
    fn from(item: Item) -> Self {
        RawValue::Int(item.value())
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => RawValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_values() {
        assert!(RawValue::Null.is_absent());
        assert!(RawValue::Text(String::new()).is_absent());
        assert!(!RawValue::Int(0).is_absent());
        assert!(!RawValue::Text("active".into()).is_absent());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(RawValue::from(Some(5)), RawValue::Int(5));
        assert_eq!(RawValue::from(None::<&str>), RawValue::Null);
    }

    #[test]
    fn test_from_item_uses_value() {
        let item = Item::new(9, "nine");
        assert_eq!(RawValue::from(&item), RawValue::Int(9));
        assert_eq!(RawValue::from(item), RawValue::Int(9));
    }

    #[test]
    fn test_display() {
        assert_eq!(RawValue::Null.to_string(), "null");
        assert_eq!(RawValue::Int(-3).to_string(), "-3");
        assert_eq!(RawValue::Text("draft".into()).to_string(), "draft");
    }

    #[test]
    fn test_serde_round_trip() {
        let values = [
            RawValue::Null,
            RawValue::Int(17),
            RawValue::Text("active".into()),
        ];
        for value in values {
            let json = serde_json::to_string(&value).unwrap();
            let back: RawValue = serde_json::from_str(&json).unwrap();
            assert_eq!(back, value);
        }
    }
}
