//! Core enumeration mechanism for Stele.
//!
//! This crate provides the reusable heart of a persisted enumeration field:
//!
//! - **Items**: immutable members carrying a canonical integer value, a
//!   unique slug, and a display label
//! - **Enumerations**: closed member sets, validated and indexed once at
//!   declaration time, with O(1) lookup by value or slug
//! - **Coercion**: a single entry point that normalizes whatever a storage
//!   layer hands back (NULL, integer, stringified integer, slug, or an item
//!   itself) into a member
//! - **Type Registry**: an optional process-wide name -> enumeration map
//! - **Declaration Macro**: [`enumeration!`] for static declarations
//!
//! # Declaring an enumeration
//!
//! ```
//! use stele_core::{Enumeration, Item};
//!
//! let status = Enumeration::builder("status")
//!     .item("ACTIVE", Item::new(1, "active"))
//!     .item("INACTIVE", Item::new(2, "inactive"))
//!     .build()?;
//!
//! // O(1) lookups against the precomputed indexes.
//! assert_eq!(status.from_value(1)?.slug(), "active");
//! assert_eq!(status.from_slug("inactive")?.value(), 2);
//!
//! // The coercion boundary used when loading stored values.
//! assert_eq!(status.to_item("2")?.map(|i| i.slug()), Some("inactive"));
//! assert_eq!(status.to_item(None::<i64>)?, None);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Static declaration
//!
//! ```
//! use stele_core::enumeration;
//!
//! enumeration! {
//!     pub static STATUS: "status" {
//!         ACTIVE = (1, "active"),
//!         INACTIVE = (2, "inactive"),
//!     }
//! }
//!
//! assert_eq!(STATUS["ACTIVE"].display(), "Active");
//! ```
//!
//! Validation failures (duplicate values, duplicate slugs, reserved member
//! names) are programmer errors surfaced at declaration time; lookup misses
//! are runtime errors naming the offending input. The two never mix - see
//! the [`error`] module.

pub mod enumeration;
pub mod error;
pub mod item;
pub mod logging;
mod macros;
pub mod raw;
pub mod registry;

pub use enumeration::{Enumeration, EnumerationBuilder, Members, RESERVED_MEMBER_NAMES};
pub use error::{DeclarationError, LookupError, RegistryError};
pub use item::Item;
pub use logging::MemberTableDebug;
pub use raw::RawValue;
pub use registry::{global_registry, TypeRegistry};
