//! Global enumeration type registry.
//!
//! Enumerations are declared once at process startup and live for the rest
//! of the process, so the registry maps names to `&'static Enumeration`
//! references. Registering makes an enumeration discoverable by name, which
//! is what generic collaborators (an admin surface, a schema dumper, a
//! debugging console) need when they only hold a string.
//!
//! Registration is optional: an enumeration works fine without ever
//! entering the registry.
//!
//! # Example
//!
//! ```
//! use stele_core::{enumeration, global_registry};
//!
//! enumeration! {
//!     static PRIORITY: "registry-doc-priority" {
//!         LOW = (1, "low"),
//!         HIGH = (2, "high"),
//!     }
//! }
//!
//! global_registry().write().register(&PRIORITY)?;
//!
//! let found = global_registry().read().lookup("registry-doc-priority");
//! assert_eq!(found.map(|e| e.len()), Some(2));
//! # Ok::<(), stele_core::RegistryError>(())
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::enumeration::Enumeration;
use crate::error::RegistryError;

static GLOBAL_REGISTRY: OnceLock<RwLock<TypeRegistry>> = OnceLock::new();

/// Access the process-wide registry, initializing it on first use.
///
/// Reads vastly outnumber writes here (writes happen only during startup
/// declarations), hence the `RwLock`.
pub fn global_registry() -> &'static RwLock<TypeRegistry> {
    GLOBAL_REGISTRY.get_or_init(|| RwLock::new(TypeRegistry::new()))
}

/// A name-keyed collection of declared enumerations.
///
/// Usually accessed through [`global_registry`], but standalone instances
/// are useful in tests or when an application wants scoped namespaces.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    enums: HashMap<String, &'static Enumeration>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            enums: HashMap::new(),
        }
    }

    /// Register an enumeration under its own name.
    ///
    /// Fails when the name is taken; enumerations are never unregistered,
    /// so a collision is a declaration mistake, not a race to resolve.
    pub fn register(&mut self, enumeration: &'static Enumeration) -> Result<(), RegistryError> {
        let name = enumeration.name().to_string();
        if self.enums.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered { name });
        }
        tracing::trace!(
            target: "stele_core::registry",
            enumeration = %name,
            member_count = enumeration.len(),
            "registered enumeration type"
        );
        self.enums.insert(name, enumeration);
        Ok(())
    }

    /// Look up an enumeration by name.
    pub fn lookup(&self, name: &str) -> Option<&'static Enumeration> {
        self.enums.get(name).copied()
    }

    /// Whether an enumeration with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.enums.contains_key(name)
    }

    /// Registered names, sorted for deterministic output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.enums.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// The number of registered enumerations.
    pub fn len(&self) -> usize {
        self.enums.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.enums.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use std::sync::LazyLock;

    fn leak(enumeration: Enumeration) -> &'static Enumeration {
        Box::leak(Box::new(enumeration))
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = TypeRegistry::new();
        let status = leak(
            Enumeration::builder("status")
                .item("ACTIVE", Item::new(1, "active"))
                .build()
                .unwrap(),
        );

        registry.register(status).unwrap();
        assert!(registry.contains("status"));
        assert_eq!(registry.lookup("status").unwrap().len(), 1);
        assert_eq!(registry.lookup("missing"), None);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = TypeRegistry::new();
        let first = leak(Enumeration::builder("dup").build().unwrap());
        let second = leak(Enumeration::builder("dup").build().unwrap());

        registry.register(first).unwrap();
        let err = registry.register(second).unwrap_err();
        assert_eq!(
            err,
            RegistryError::AlreadyRegistered {
                name: "dup".to_string(),
            }
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_names_sorted() {
        let mut registry = TypeRegistry::new();
        registry
            .register(leak(Enumeration::builder("zeta").build().unwrap()))
            .unwrap();
        registry
            .register(leak(Enumeration::builder("alpha").build().unwrap()))
            .unwrap();
        assert_eq!(registry.names(), ["alpha", "zeta"]);
    }

    #[test]
    fn test_global_registry_shared() {
        static SHARED: LazyLock<Enumeration> = LazyLock::new(|| {
            Enumeration::builder("registry-test-shared")
                .item("ONE", Item::new(1, "one"))
                .build()
                .unwrap()
        });

        global_registry().write().register(&SHARED).unwrap();
        let found = global_registry().read().lookup("registry-test-shared");
        assert!(found.is_some());
    }
}
