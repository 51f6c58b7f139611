//! Convenient imports for the common case.
//!
//! ```
//! use stele::prelude::*;
//!
//! enumeration! {
//!     static PRIORITY: "prelude-doc-priority" {
//!         LOW = (1, "low"),
//!         HIGH = (2, "high"),
//!     }
//! }
//!
//! assert_eq!(PRIORITY.from_slug("high").unwrap().value(), 2);
//! ```

pub use crate::field::{EnumField, FieldError, Lookup};
pub use stele_core::{
    enumeration, global_registry, DeclarationError, Enumeration, EnumerationBuilder, Item,
    LookupError, RawValue, TypeRegistry,
};
