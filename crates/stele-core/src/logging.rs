//! Logging and debugging facilities.
//!
//! Stele instruments its registration and coercion paths with the `tracing`
//! crate. To see logs, install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! Declaration and registration events are emitted at `debug`/`trace`;
//! lookup misses at `debug` (they are ordinary runtime conditions, reported
//! to the caller through errors as well).
//!
//! # Debug Visualization
//!
//! [`MemberTableDebug`] renders an enumeration's member table as aligned
//! text, handy when a declaration does not look the way you expected:
//!
//! ```
//! use stele_core::logging::MemberTableDebug;
//! use stele_core::{Enumeration, Item};
//!
//! let status = Enumeration::builder("status")
//!     .item("ACTIVE", Item::new(1, "active"))
//!     .build()?;
//!
//! println!("{}", MemberTableDebug::new(&status).format_table());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt::Write as FmtWrite;

use crate::enumeration::Enumeration;

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Enumeration declaration and lookup events.
    pub const ENUMERATION: &str = "stele_core::enumeration";
    /// Global type registry events.
    pub const REGISTRY: &str = "stele_core::registry";
}

/// Renders an enumeration's member table for debugging.
///
/// One row per member in declaration order: member name, value, slug, and
/// display label, with columns aligned.
#[derive(Debug, Clone, Copy)]
pub struct MemberTableDebug<'e> {
    enumeration: &'e Enumeration,
}

impl<'e> MemberTableDebug<'e> {
    /// Create a debug view of an enumeration.
    pub fn new(enumeration: &'e Enumeration) -> Self {
        Self { enumeration }
    }

    /// Format the full member table.
    pub fn format_table(&self) -> String {
        let mut output = String::new();
        let _ = writeln!(
            output,
            "Enumeration '{}' ({} members)",
            self.enumeration.name(),
            self.enumeration.len()
        );

        let name_width = self
            .enumeration
            .members()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);
        let slug_width = self
            .enumeration
            .get_items()
            .map(|item| item.slug().len())
            .max()
            .unwrap_or(0);

        for (name, item) in self.enumeration.members() {
            let _ = writeln!(
                output,
                "  {name:<name_width$}  {value:>6}  {slug:<slug_width$}  {display}",
                value = item.value(),
                slug = item.slug(),
                display = item.display(),
            );
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    fn sample() -> Enumeration {
        Enumeration::builder("status")
            .item("ACTIVE", Item::new(1, "active"))
            .item("ON_HOLD", Item::with_display(2, "on-hold", "On hold"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_table_header_counts_members() {
        let table = MemberTableDebug::new(&sample()).format_table();
        assert!(table.contains("Enumeration 'status' (2 members)"));
    }

    #[test]
    fn test_table_lists_every_member() {
        let table = MemberTableDebug::new(&sample()).format_table();
        assert!(table.contains("ACTIVE"));
        assert!(table.contains("on-hold"));
        assert!(table.contains("On hold"));
    }

    #[test]
    fn test_table_for_empty_enumeration() {
        let empty = Enumeration::builder("empty").build().unwrap();
        let table = MemberTableDebug::new(&empty).format_table();
        assert!(table.contains("(0 members)"));
        assert_eq!(table.lines().count(), 1);
    }
}
