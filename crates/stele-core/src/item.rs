//! Enumeration members.
//!
//! An [`Item`] is one named value in an enumeration: a canonical integer
//! (the representation that gets persisted), a unique slug (a readable
//! alternate key), and a display label for humans. Items are value objects -
//! immutable once constructed and cheap to compare.
//!
//! # Equality
//!
//! Two items are equal when their integer values are equal, regardless of
//! slug or display text. An item also compares equal to a raw integer with
//! the same value, and to a string that either parses to that value or
//! matches the slug. `Hash` is derived from the value alone, so items can be
//! used as map and set keys consistently with this equality.
//!
//! # Example
//!
//! ```
//! use stele_core::Item;
//!
//! let active = Item::new(1, "active");
//! assert_eq!(active.value(), 1);
//! assert_eq!(active.display(), "Active");
//! assert_eq!(active, 1);
//! assert_eq!(active, "active");
//!
//! let inactive = Item::with_display(2, "inactive", "Not active");
//! assert_eq!(inactive.display(), "Not active");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Serialize, Serializer};

/// Process-wide creation counter shared by every `Item` ever constructed.
///
/// The counter only grows; there is no reset. It provides the default member
/// ordering for enumerations (declaration order), so it must be strictly
/// increasing even under concurrent construction.
static CREATION_COUNTER: AtomicU64 = AtomicU64::new(0);

/// One member of an enumeration.
///
/// Carries the canonical stored integer, the unique slug, a human-readable
/// display label, and a creation-order stamp used for default ordering.
///
/// The `value` and `slug` are immutable after construction; there are no
/// setters. Items are usually declared once at startup and handed to an
/// [`Enumeration`](crate::Enumeration) builder, which validates uniqueness
/// across the member set.
///
/// # Example
///
/// ```
/// use stele_core::Item;
///
/// let draft = Item::new(10, "draft");
/// assert_eq!(draft.to_string(), "draft");
/// assert_eq!(draft.display(), "Draft");
/// ```
#[derive(Clone)]
pub struct Item {
    value: i64,
    slug: String,
    display: String,
    creation_order: u64,
}

impl Item {
    /// Create an item with a display label derived from the slug.
    ///
    /// The label is the slug with its first character uppercased, which is
    /// usually good enough for single-word slugs (`"active"` becomes
    /// `"Active"`). Use [`Item::with_display`] for anything fancier.
    pub fn new(value: i64, slug: impl Into<String>) -> Self {
        let slug = slug.into();
        let display = capitalize(&slug);
        Self::build(value, slug, display)
    }

    /// Create an item with an explicit display label.
    pub fn with_display(value: i64, slug: impl Into<String>, display: impl Into<String>) -> Self {
        Self::build(value, slug.into(), display.into())
    }

    fn build(value: i64, slug: String, display: String) -> Self {
        let creation_order = CREATION_COUNTER.fetch_add(1, Ordering::Relaxed);
        Self {
            value,
            slug,
            display,
            creation_order,
        }
    }

    /// The canonical integer representation, as persisted.
    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// The unique string identifier.
    #[inline]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// The human-readable label.
    #[inline]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The creation-order stamp, strictly increasing across all items
    /// constructed in this process.
    #[inline]
    pub fn creation_order(&self) -> u64 {
        self.creation_order
    }
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Renders the slug.
///
/// Generic UI layers that stringify a raw member get something readable
/// rather than a numeric value.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slug)
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("value", &self.value)
            .field("slug", &self.slug)
            .field("display", &self.display)
            .finish()
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Item {}

// Hash must agree with Eq, which compares values only.
impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialEq<i64> for Item {
    fn eq(&self, other: &i64) -> bool {
        self.value == *other
    }
}

impl PartialEq<Item> for i64 {
    fn eq(&self, other: &Item) -> bool {
        *self == other.value
    }
}

/// String comparison: integer form wins when it parses, otherwise the slug
/// is compared.
impl PartialEq<str> for Item {
    fn eq(&self, other: &str) -> bool {
        match other.parse::<i64>() {
            Ok(parsed) => self.value == parsed,
            Err(_) => self.slug == other,
        }
    }
}

impl PartialEq<&str> for Item {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<Item> for str {
    fn eq(&self, other: &Item) -> bool {
        other == self
    }
}

impl PartialEq<Item> for &str {
    fn eq(&self, other: &Item) -> bool {
        other == *self
    }
}

/// Serializes as the canonical integer value - the save-path representation.
///
/// There is deliberately no `Deserialize` impl: a bare item cannot be
/// reconstructed without its owning enumeration. Deserialize into
/// [`RawValue`](crate::RawValue) and coerce with
/// [`Enumeration::to_item`](crate::Enumeration::to_item) instead.
impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}
