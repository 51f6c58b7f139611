//! Error types for the enumeration core.
//!
//! Two failure families exist and they never mix:
//!
//! - [`DeclarationError`]: programmer errors caught while an enumeration is
//!   being built. These are fatal at declaration time - the enumeration
//!   never becomes usable.
//! - [`LookupError`]: runtime conditions driven by external input - a stored
//!   value or user-supplied slug that no member matches.
//!
//! Nothing here is transient; there are no retries or partial recoveries.

use crate::raw::RawValue;

/// Errors raised while building an enumeration.
///
/// Each variant names the offending member so the declarer can find it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeclarationError {
    /// Two members share the same canonical value.
    #[error("item value {value} has been used more than once in enumeration '{enumeration}' ({slug})")]
    DuplicateValue {
        enumeration: String,
        value: i64,
        slug: String,
    },

    /// Two members share the same slug.
    #[error("item slug '{slug}' has been used more than once in enumeration '{enumeration}'")]
    DuplicateSlug { enumeration: String, slug: String },

    /// Two members were declared under the same name.
    #[error("member name '{name}' has been used more than once in enumeration '{enumeration}'")]
    DuplicateMemberName { enumeration: String, name: String },

    /// A member was declared under a name reserved for derived tables.
    #[error("'{name}' is a reserved member name (enumeration '{enumeration}')")]
    ReservedMemberName { enumeration: String, name: String },
}

/// Errors raised when a lookup does not match any member.
///
/// The policy is uniform across [`from_value`], [`from_slug`], and
/// [`to_item`]: a miss is always an error naming the input that missed.
/// The nullable path of `to_item` (NULL or empty string in, `None` out) is
/// not a miss.
///
/// [`from_value`]: crate::Enumeration::from_value
/// [`from_slug`]: crate::Enumeration::from_slug
/// [`to_item`]: crate::Enumeration::to_item
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// No member has this canonical value.
    #[error("{value} is not a valid value for enumeration '{enumeration}'")]
    UnknownValue { enumeration: String, value: i64 },

    /// No member has this slug.
    #[error("'{slug}' is not a valid slug for enumeration '{enumeration}'")]
    UnknownSlug { enumeration: String, slug: String },

    /// A raw input matched neither the value path nor the slug path.
    #[error("'{raw}' is not a valid value or slug for enumeration '{enumeration}'")]
    NotAMember { enumeration: String, raw: RawValue },
}

/// Errors raised by the global type registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// An enumeration with this name is already registered.
    #[error("an enumeration named '{name}' is already registered")]
    AlreadyRegistered { name: String },
}
