//! Type-safe, database-agnostic enumeration fields for persisted data.
//!
//! Stele models a persisted field whose values come from a closed, named
//! set: each member carries a canonical integer (the value that actually
//! gets stored), a unique slug, and a human-readable label. Enumerations
//! are validated and indexed once at declaration time and immutable
//! afterwards; every lookup afterwards is an O(1) table access.
//!
//! The mechanism lives in [`stele-core`](stele_core) and is re-exported
//! here; this crate adds the persistence-field adapter ([`field`]) that a
//! storage layer talks to.
//!
//! # Quick start
//!
//! ```
//! use stele::prelude::*;
//!
//! enumeration! {
//!     pub static STATUS: "status" {
//!         ACTIVE = (1, "active"),
//!         INACTIVE = (2, "inactive"),
//!     }
//! }
//!
//! // Lookups by value, slug, or declared name.
//! assert_eq!(STATUS.from_value(1)?.slug(), "active");
//! assert_eq!(STATUS.from_slug("inactive")?.value(), 2);
//! assert_eq!(STATUS["ACTIVE"].display(), "Active");
//!
//! // The persistence boundary.
//! let field = EnumField::new(&STATUS);
//! let loaded = field.from_stored("inactive")?;
//! assert_eq!(field.to_stored(loaded), Some(2));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod field;
pub mod prelude;

pub use field::{EnumField, FieldError, Lookup};
pub use stele_core::{
    enumeration, global_registry, DeclarationError, Enumeration, EnumerationBuilder, Item,
    LookupError, MemberTableDebug, Members, RawValue, RegistryError, TypeRegistry,
    RESERVED_MEMBER_NAMES,
};
