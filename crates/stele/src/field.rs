//! The persistence-field adapter.
//!
//! [`EnumField`] is the narrow boundary between an enumeration and whatever
//! storage layer persists it. The stored representation is always the
//! member's canonical integer (or NULL); the adapter converts in both
//! directions and prepares operands for equality-style filtering. It knows
//! nothing about any particular database or ORM.
//!
//! # Example
//!
//! ```
//! use stele::field::EnumField;
//! use stele::enumeration;
//!
//! enumeration! {
//!     static STATUS: "field-doc-status" {
//!         ACTIVE = (1, "active"),
//!         INACTIVE = (2, "inactive"),
//!     }
//! }
//!
//! let field = EnumField::new(&STATUS);
//!
//! // Load path: raw stored value -> member.
//! let loaded = field.from_stored(1)?;
//! assert_eq!(loaded.map(|i| i.slug()), Some("active"));
//!
//! // Save path: member -> stored value.
//! assert_eq!(field.to_stored(loaded), Some(1));
//! assert_eq!(field.to_stored(None), None);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use stele_core::{Enumeration, Item, LookupError, RawValue};

/// Result type alias for field operations.
pub type Result<T> = std::result::Result<T, FieldError>;

/// Errors raised by the field adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The coercion layer rejected a raw operand.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// The field cannot prepare operands for this lookup kind.
    #[error("lookup type '{kind}' is not supported by an enumeration field")]
    UnsupportedLookup { kind: &'static str },
}

/// A filter condition against a stored enumeration column.
///
/// Only the equality family makes sense for an enumeration: member values
/// are identifiers, not quantities, so ordering and substring comparisons
/// are rejected by [`EnumField::prep_lookup`].
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// Equality against one operand.
    Exact(RawValue),
    /// Inclusion in a set of operands.
    In(Vec<RawValue>),
    /// NULL test; needs no operands.
    IsNull,
    /// Ordering comparison - unsupported.
    GreaterThan(RawValue),
    /// Ordering comparison - unsupported.
    LessThan(RawValue),
    /// Substring comparison - unsupported.
    Contains(RawValue),
}

impl Lookup {
    /// The lookup kind's name, for error reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            Lookup::Exact(_) => "exact",
            Lookup::In(_) => "in",
            Lookup::IsNull => "isnull",
            Lookup::GreaterThan(_) => "gt",
            Lookup::LessThan(_) => "lt",
            Lookup::Contains(_) => "contains",
        }
    }
}

/// A persisted enumeration field.
///
/// Wraps a `&'static Enumeration` (enumerations are declared once at
/// startup and never torn down) and implements the conversion contract the
/// storage layer needs: load, save, choices, and filter preparation.
#[derive(Debug, Clone, Copy)]
pub struct EnumField {
    enumeration: &'static Enumeration,
}

impl EnumField {
    /// Create a field backed by the given enumeration.
    pub fn new(enumeration: &'static Enumeration) -> Self {
        Self { enumeration }
    }

    /// The enumeration this field persists.
    pub fn enumeration(&self) -> &'static Enumeration {
        self.enumeration
    }

    /// Load path: coerce a raw stored value into a member.
    ///
    /// NULL and the empty string load as `None` - the field is nullable by
    /// contract. Anything else must resolve to a member or the load fails.
    pub fn from_stored(
        &self,
        raw: impl Into<RawValue>,
    ) -> std::result::Result<Option<&'static Item>, LookupError> {
        self.enumeration.to_item(raw)
    }

    /// Save path: extract the stored representation from a member.
    ///
    /// `None` stays NULL. No validation happens here; a member can only
    /// have come out of a validated enumeration.
    pub fn to_stored(&self, item: Option<&Item>) -> Option<i64> {
        item.map(Item::value)
    }

    /// The `(member, label)` pairs a UI layer renders for selection, in
    /// declaration order.
    pub fn choices(&self) -> Vec<(&'static Item, &'static str)> {
        self.enumeration.get_choices().collect()
    }

    /// Prepare the stored operands for a filter condition.
    ///
    /// Each operand goes through the same coercion as the load path and
    /// comes out as a stored value (`None` for NULL operands). `IsNull`
    /// needs no operands and yields an empty list. Lookup kinds outside the
    /// equality family fail with [`FieldError::UnsupportedLookup`].
    pub fn prep_lookup(&self, lookup: Lookup) -> Result<Vec<Option<i64>>> {
        match lookup {
            Lookup::Exact(raw) => Ok(vec![self.prepare(raw)?]),
            Lookup::In(raws) => raws
                .into_iter()
                .map(|raw| self.prepare(raw))
                .collect::<std::result::Result<_, _>>()
                .map_err(FieldError::from),
            Lookup::IsNull => Ok(Vec::new()),
            unsupported => {
                tracing::debug!(
                    target: "stele::field",
                    enumeration = %self.enumeration.name(),
                    kind = unsupported.kind(),
                    "unsupported lookup"
                );
                Err(FieldError::UnsupportedLookup {
                    kind: unsupported.kind(),
                })
            }
        }
    }

    fn prepare(&self, raw: RawValue) -> std::result::Result<Option<i64>, LookupError> {
        Ok(self.enumeration.to_item(raw)?.map(Item::value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stele_core::enumeration;

    enumeration! {
        static STATUS: "field-test-status" {
            ACTIVE = (1, "active"),
            INACTIVE = (2, "inactive"),
        }
    }

    fn field() -> EnumField {
        EnumField::new(&STATUS)
    }

    #[test]
    fn test_load_save_round_trip() {
        let field = field();
        let item = field.from_stored(2).unwrap();
        assert_eq!(item.map(|i| i.slug()), Some("inactive"));
        assert_eq!(field.to_stored(item), Some(2));
    }

    #[test]
    fn test_load_null_and_empty() {
        let field = field();
        assert_eq!(field.from_stored(None::<i64>).unwrap(), None);
        assert_eq!(field.from_stored("").unwrap(), None);
        assert_eq!(field.to_stored(None), None);
    }

    #[test]
    fn test_load_rejects_unknown_values() {
        let field = field();
        assert!(field.from_stored(99).is_err());
        assert!(field.from_stored("archived").is_err());
    }

    #[test]
    fn test_choices_in_declaration_order() {
        let choices = field().choices();
        assert_eq!(choices.len(), 2);
        assert_eq!(choices[0].1, "Active");
        assert_eq!(choices[1].1, "Inactive");
    }

    #[test]
    fn test_exact_lookup_coerces_operand() {
        let field = field();
        // The operand may arrive as a value, a stringified value, a slug,
        // or a member; all prepare to the same stored value.
        for raw in [
            RawValue::Int(1),
            RawValue::Text("1".into()),
            RawValue::Text("active".into()),
            RawValue::from(&STATUS["ACTIVE"]),
        ] {
            assert_eq!(field.prep_lookup(Lookup::Exact(raw)).unwrap(), [Some(1)]);
        }
    }

    #[test]
    fn test_in_lookup_coerces_every_operand() {
        let field = field();
        let prepared = field
            .prep_lookup(Lookup::In(vec![
                RawValue::Int(1),
                RawValue::Text("inactive".into()),
            ]))
            .unwrap();
        assert_eq!(prepared, [Some(1), Some(2)]);
    }

    #[test]
    fn test_in_lookup_fails_on_bad_operand() {
        let field = field();
        let err = field
            .prep_lookup(Lookup::In(vec![RawValue::Int(1), RawValue::Int(99)]))
            .unwrap_err();
        assert!(matches!(err, FieldError::Lookup(_)));
        assert!(err.to_string().contains("99"));
    }

    #[test]
    fn test_isnull_lookup_needs_no_operands() {
        assert_eq!(field().prep_lookup(Lookup::IsNull).unwrap(), Vec::<Option<i64>>::new());
    }

    #[test]
    fn test_unsupported_lookups_rejected() {
        let field = field();
        for lookup in [
            Lookup::GreaterThan(RawValue::Int(1)),
            Lookup::LessThan(RawValue::Int(1)),
            Lookup::Contains(RawValue::Text("act".into())),
        ] {
            let kind = lookup.kind();
            let err = field.prep_lookup(lookup).unwrap_err();
            assert_eq!(err, FieldError::UnsupportedLookup { kind });
        }
    }
}
