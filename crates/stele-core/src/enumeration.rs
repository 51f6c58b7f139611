//! Enumeration types: validated, indexed, immutable member sets.
//!
//! An [`Enumeration`] is a closed set of named [`Item`]s declared together.
//! It is produced by an explicit builder: the declarer lists named members,
//! and [`EnumerationBuilder::build`] validates them (values and slugs each
//! unique, member names unique and not reserved), orders them by creation
//! order, and indexes them by value and by slug. After that the enumeration
//! is immutable - every lookup is an O(1) access against the precomputed
//! tables, and the whole structure is freely shared across threads.
//!
//! # Example
//!
//! ```
//! use stele_core::{Enumeration, Item};
//!
//! let status = Enumeration::builder("status")
//!     .item("ACTIVE", Item::new(1, "active"))
//!     .item("INACTIVE", Item::new(2, "inactive"))
//!     .build()?;
//!
//! assert_eq!(status.from_value(1)?, &status["ACTIVE"]);
//! assert_eq!(status.from_slug("inactive")?, &status["INACTIVE"]);
//! assert_eq!(status.to_item("2")?, Some(&status["INACTIVE"]));
//! assert_eq!(status.to_item("")?, None);
//!
//! let choices: Vec<_> = status.get_choices().collect();
//! assert_eq!(choices[0].1, "Active");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Ordering
//!
//! Members iterate in declaration order, determined by the items'
//! process-wide creation counter rather than by numeric value. An
//! enumeration declared as `(10, "landing"), (5, "email")` yields `landing`
//! first. The same order is used by [`get_items`], [`get_choices`], and
//! iteration over the enumeration itself.
//!
//! [`get_items`]: Enumeration::get_items
//! [`get_choices`]: Enumeration::get_choices

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::ops;

use indexmap::IndexMap;

use crate::error::{DeclarationError, LookupError};
use crate::item::Item;
use crate::raw::RawValue;

/// Member names reserved on every enumeration.
///
/// These identify the derived tables in introspected or serialized views of
/// an enumeration, so a member cannot be declared under any of them.
pub const RESERVED_MEMBER_NAMES: [&str; 4] =
    ["items", "sorted_items", "items_by_val", "items_by_slug"];

/// A validated, indexed, immutable enumeration of [`Item`]s.
///
/// Construct one with [`Enumeration::builder`] (or the
/// [`enumeration!`](crate::enumeration) macro for static declarations).
/// Within one enumeration all member values are pairwise distinct and all
/// slugs are pairwise distinct; violations fail [`build`] before the
/// enumeration exists.
///
/// # Thread Safety
///
/// `Enumeration` holds no interior mutability. Once built it is read-only
/// and `Send + Sync`.
///
/// [`build`]: EnumerationBuilder::build
#[derive(PartialEq)]
pub struct Enumeration {
    name: String,
    /// Members in sorted (declaration) order, keyed by member name.
    members: IndexMap<String, Item>,
    /// Canonical value -> position in `members`.
    by_value: HashMap<i64, usize>,
    /// Slug -> position in `members`.
    by_slug: HashMap<String, usize>,
}

impl Enumeration {
    /// Start declaring an enumeration with the given name.
    ///
    /// The name appears in error messages and in the global
    /// [`TypeRegistry`](crate::TypeRegistry).
    pub fn builder(name: impl Into<String>) -> EnumerationBuilder {
        EnumerationBuilder {
            name: name.into(),
            members: Vec::new(),
            on_registered: None,
        }
    }

    /// The enumeration's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the enumeration has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Look up a member by its canonical value.
    ///
    /// Fails with [`LookupError::UnknownValue`] when no member has the
    /// value. The miss policy is uniform with [`from_slug`] and
    /// [`to_item`]: lookups never return a silent sentinel.
    ///
    /// [`from_slug`]: Enumeration::from_slug
    /// [`to_item`]: Enumeration::to_item
    pub fn from_value(&self, value: i64) -> Result<&Item, LookupError> {
        self.lookup_value(value).ok_or_else(|| {
            tracing::debug!(target: "stele_core::enumeration", enumeration = %self.name, value, "value lookup miss");
            LookupError::UnknownValue {
                enumeration: self.name.clone(),
                value,
            }
        })
    }

    /// Look up a member by its slug.
    ///
    /// Fails with [`LookupError::UnknownSlug`] when no member has the slug.
    pub fn from_slug(&self, slug: &str) -> Result<&Item, LookupError> {
        self.lookup_slug(slug).ok_or_else(|| {
            tracing::debug!(target: "stele_core::enumeration", enumeration = %self.name, slug, "slug lookup miss");
            LookupError::UnknownSlug {
                enumeration: self.name.clone(),
                slug: slug.to_string(),
            }
        })
    }

    /// Get a member by the name it was declared under.
    pub fn get(&self, member_name: &str) -> Option<&Item> {
        self.members.get(member_name)
    }

    /// Iterate over members in declaration order.
    ///
    /// Each call produces a fresh iterator; there is no shared iteration
    /// state.
    pub fn get_items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.members.values()
    }

    /// Iterate over `(member, display)` pairs in declaration order.
    ///
    /// This is the view choice-rendering collaborators consume - the label
    /// next to the value-bearing member it describes.
    pub fn get_choices(&self) -> impl Iterator<Item = (&Item, &str)> + '_ {
        self.members.values().map(|item| (item, item.display()))
    }

    /// Iterate over `(member_name, member)` pairs in declaration order.
    pub fn members(&self) -> Members<'_> {
        Members {
            inner: self.members.iter(),
        }
    }

    /// Coerce an arbitrary raw value into a member.
    ///
    /// This is the universal entry point used by the persistence boundary:
    ///
    /// - NULL or an empty string is "no item": `Ok(None)`, never an error
    ///   (enumeration fields are nullable by contract);
    /// - an integer is looked up by value;
    /// - text is integer-parsed first (the numeric form wins when it
    ///   parses), with a slug lookup as the fallback;
    /// - a member passed back in (via `From<&Item> for RawValue`) coerces to
    ///   the equal member, so the operation is idempotent.
    ///
    /// A raw value that matches no member by either path fails with
    /// [`LookupError::NotAMember`] carrying the offending input.
    ///
    /// # Example
    ///
    /// ```
    /// use stele_core::{Enumeration, Item};
    ///
    /// let status = Enumeration::builder("status")
    ///     .item("ACTIVE", Item::new(1, "active"))
    ///     .build()?;
    ///
    /// let active = &status["ACTIVE"];
    /// assert_eq!(status.to_item(1)?, Some(active));
    /// assert_eq!(status.to_item("1")?, Some(active));
    /// assert_eq!(status.to_item("active")?, Some(active));
    /// assert_eq!(status.to_item(active)?, Some(active));
    /// assert_eq!(status.to_item(None::<i64>)?, None);
    /// assert!(status.to_item(99).is_err());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_item(&self, raw: impl Into<RawValue>) -> Result<Option<&Item>, LookupError> {
        let raw = raw.into();
        if raw.is_absent() {
            return Ok(None);
        }

        let found = match &raw {
            RawValue::Null => None,
            RawValue::Int(value) => self.lookup_value(*value),
            RawValue::Text(text) => match text.parse::<i64>() {
                Ok(value) => self.lookup_value(value),
                Err(_) => self.lookup_slug(text),
            },
        };

        match found {
            Some(item) => Ok(Some(item)),
            None => {
                tracing::debug!(target: "stele_core::enumeration", enumeration = %self.name, %raw, "coercion miss");
                Err(LookupError::NotAMember {
                    enumeration: self.name.clone(),
                    raw,
                })
            }
        }
    }

    fn lookup_value(&self, value: i64) -> Option<&Item> {
        self.by_value.get(&value).map(|&position| &self.members[position])
    }

    fn lookup_slug(&self, slug: &str) -> Option<&Item> {
        self.by_slug.get(slug).map(|&position| &self.members[position])
    }
}

impl fmt::Debug for Enumeration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Enumeration")
            .field("name", &self.name)
            .field("members", &self.members)
            .finish()
    }
}

/// Member access by declared name.
///
/// # Panics
///
/// Panics when no member was declared under `name`, like indexing a map.
/// Use [`Enumeration::get`] for a fallible version.
impl ops::Index<&str> for Enumeration {
    type Output = Item;

    fn index(&self, name: &str) -> &Item {
        self.get(name).unwrap_or_else(|| {
            panic!("no member named '{name}' in enumeration '{}'", self.name)
        })
    }
}

impl<'a> IntoIterator for &'a Enumeration {
    type Item = (&'a str, &'a Item);
    type IntoIter = Members<'a>;

    fn into_iter(self) -> Members<'a> {
        self.members()
    }
}

/// Iterator over `(member_name, member)` pairs in declaration order.
///
/// Created by [`Enumeration::members`] or by iterating `&Enumeration`.
#[derive(Clone)]
pub struct Members<'a> {
    inner: indexmap::map::Iter<'a, String, Item>,
}

impl<'a> Iterator for Members<'a> {
    type Item = (&'a str, &'a Item);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, item)| (name.as_str(), item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Members<'_> {}

/// Builder for [`Enumeration`].
///
/// Collects named members in encounter order; [`build`](Self::build) runs
/// validation once and produces the immutable enumeration. This replaces
/// the declaration-time attribute scan of reflective languages with
/// ordinary data-driven construction.
pub struct EnumerationBuilder {
    name: String,
    /// Members in encounter order; duplicates surface during validation.
    members: Vec<(String, Item)>,
    on_registered: Option<Box<dyn FnOnce(&Enumeration)>>,
}

impl EnumerationBuilder {
    /// Declare a member under `name`.
    pub fn item(mut self, name: impl Into<String>, item: Item) -> Self {
        self.members.push((name.into(), item));
        self
    }

    /// Seed the member list from an existing enumeration.
    ///
    /// Inherited members come first and go through the same uniqueness
    /// validation as directly declared ones, so a derived enumeration
    /// cannot shadow a base member's value or slug.
    ///
    /// # Example
    ///
    /// ```
    /// use stele_core::{Enumeration, Item};
    ///
    /// let base = Enumeration::builder("state")
    ///     .item("OFF", Item::new(0, "off"))
    ///     .build()?;
    ///
    /// let extended = Enumeration::builder("tristate")
    ///     .extend(&base)
    ///     .item("ON", Item::new(1, "on"))
    ///     .build()?;
    ///
    /// assert_eq!(extended.len(), 2);
    /// assert_eq!(extended.from_slug("off")?.value(), 0);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn extend(mut self, base: &Enumeration) -> Self {
        for (member_name, item) in base.members() {
            self.members.push((member_name.to_string(), item.clone()));
        }
        self
    }

    /// Install a hook that runs once after the enumeration is built.
    ///
    /// An extension point for declarers that want to compute additional
    /// derived state from the finished member set. The hook only runs when
    /// validation succeeds.
    pub fn on_registered<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(&Enumeration) + 'static,
    {
        self.on_registered = Some(Box::new(hook));
        self
    }

    /// Validate the collected members and build the enumeration.
    ///
    /// Members are checked in encounter order: a reserved or duplicate
    /// member name, a duplicate value, or a duplicate slug fails the whole
    /// declaration - there is no partial enumeration. The surviving member
    /// list is sorted by creation order and indexed by value and by slug.
    pub fn build(self) -> Result<Enumeration, DeclarationError> {
        let EnumerationBuilder {
            name,
            mut members,
            on_registered,
        } = self;

        let mut seen_names = HashSet::new();
        let mut seen_values = HashSet::new();
        let mut seen_slugs = HashSet::new();
        for (member_name, item) in &members {
            if RESERVED_MEMBER_NAMES.contains(&member_name.as_str()) {
                return Err(DeclarationError::ReservedMemberName {
                    enumeration: name,
                    name: member_name.clone(),
                });
            }
            if !seen_names.insert(member_name.as_str()) {
                return Err(DeclarationError::DuplicateMemberName {
                    enumeration: name,
                    name: member_name.clone(),
                });
            }
            if !seen_values.insert(item.value()) {
                return Err(DeclarationError::DuplicateValue {
                    enumeration: name,
                    value: item.value(),
                    slug: item.slug().to_string(),
                });
            }
            if !seen_slugs.insert(item.slug()) {
                return Err(DeclarationError::DuplicateSlug {
                    enumeration: name,
                    slug: item.slug().to_string(),
                });
            }
        }

        // Declaration order: the items' creation counter, not numeric value.
        members.sort_by_key(|(_, item)| item.creation_order());

        let mut index = IndexMap::with_capacity(members.len());
        let mut by_value = HashMap::with_capacity(members.len());
        let mut by_slug = HashMap::with_capacity(members.len());
        for (position, (member_name, item)) in members.into_iter().enumerate() {
            by_value.insert(item.value(), position);
            by_slug.insert(item.slug().to_string(), position);
            index.insert(member_name, item);
        }

        let enumeration = Enumeration {
            name,
            members: index,
            by_value,
            by_slug,
        };
        tracing::debug!(
            target: "stele_core::enumeration",
            enumeration = %enumeration.name,
            member_count = enumeration.len(),
            "built enumeration"
        );

        if let Some(hook) = on_registered {
            hook(&enumeration);
        }

        Ok(enumeration)
    }
}

impl fmt::Debug for EnumerationBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumerationBuilder")
            .field("name", &self.name)
            .field("member_count", &self.members.len())
            .field("has_hook", &self.on_registered.is_some())
            .finish()
    }
}

static_assertions::assert_impl_all!(Enumeration: Send, Sync);
