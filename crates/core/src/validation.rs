//! Field-level validation with violation accumulation.
//!
//! A [`Validator`] runs one validation pass over any number of fields. Each
//! field gets a chain of predicates; every failed predicate is recorded as a
//! [`Violation`] and [`Validator::finish`] turns the collected list into a
//! single [`DomainError::Validation`].
//!
//! Every predicate of every chain is evaluated: an empty key checked with
//! `not_empty().not_blank().known_key(..)` yields three violations.
//!
//! ```ignore
//! let mut v = Validator::new();
//! v.field("group_sys_name", group).not_blank().known_key(&groups);
//! v.field("person_sys_name", person).not_blank().known_key(&persons);
//! v.finish()?;
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::BuildHasher;

use indexmap::{IndexMap, IndexSet};

use crate::error::{DomainError, DomainResult};

/// Why a field was rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Reason {
    /// The value is the empty string.
    Empty,
    /// The value only contains whitespace.
    Blank,
    /// The value must be a known key but is not.
    NotFound,
    /// The value must not be a known key but is.
    Duplicate,
}

impl core::fmt::Display for Reason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Reason::Empty => f.write_str("must not be empty"),
            Reason::Blank => f.write_str("must not be blank"),
            Reason::NotFound => f.write_str("not found"),
            Reason::Duplicate => f.write_str("already exists"),
        }
    }
}

/// One failed precondition: which field, and why.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Violation {
    field: Cow<'static, str>,
    reason: Reason,
}

impl Violation {
    pub fn new(field: impl Into<Cow<'static, str>>, reason: Reason) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn reason(&self) -> Reason {
        self.reason
    }
}

impl core::fmt::Display for Violation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Ordered list of violations collected during one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// Whether `field` was rejected for `reason`.
    pub fn contains(&self, field: &str, reason: Reason) -> bool {
        self.0
            .iter()
            .any(|v| v.field() == field && v.reason() == reason)
    }

    pub fn into_vec(self) -> Vec<Violation> {
        self.0
    }
}

impl From<Vec<Violation>> for Violations {
    fn from(value: Vec<Violation>) -> Self {
        Self(value)
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = core::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl core::fmt::Display for Violations {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (idx, violation) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            core::fmt::Display::fmt(violation, f)?;
        }
        Ok(())
    }
}

/// A mapping whose keys can be tested for presence.
pub trait KeySet {
    fn has_key(&self, key: &str) -> bool;
}

impl<T: KeySet + ?Sized> KeySet for &T {
    fn has_key(&self, key: &str) -> bool {
        (**self).has_key(key)
    }
}

impl<V, S: BuildHasher> KeySet for HashMap<String, V, S> {
    fn has_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

impl<V> KeySet for BTreeMap<String, V> {
    fn has_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

impl<V, S: BuildHasher> KeySet for IndexMap<String, V, S> {
    fn has_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

impl<S: BuildHasher> KeySet for HashSet<String, S> {
    fn has_key(&self, key: &str) -> bool {
        self.contains(key)
    }
}

impl<S: BuildHasher> KeySet for IndexSet<String, S> {
    fn has_key(&self, key: &str) -> bool {
        self.contains(key)
    }
}

/// Accumulates violations over one validation pass.
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<Violation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a predicate chain for `name`.
    pub fn field<'a>(&'a mut self, name: &'static str, value: &'a str) -> FieldCheck<'a> {
        FieldCheck {
            validator: self,
            name,
            value,
        }
    }

    /// Whether nothing has been recorded so far.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// End the pass: `Ok` when nothing failed, otherwise one aggregated error.
    pub fn finish(self) -> DomainResult<()> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(Violations(self.violations)))
        }
    }
}

/// Predicate chain over a single field.
#[derive(Debug)]
pub struct FieldCheck<'a> {
    validator: &'a mut Validator,
    name: &'static str,
    value: &'a str,
}

impl<'a> FieldCheck<'a> {
    pub fn not_empty(self) -> Self {
        self.check(|v| !v.is_empty(), Reason::Empty)
    }

    pub fn not_blank(self) -> Self {
        self.check(|v| !v.trim().is_empty(), Reason::Blank)
    }

    /// The value must be a key of `keys`.
    pub fn known_key<M: KeySet + ?Sized>(self, keys: &M) -> Self {
        self.check(|v| keys.has_key(v), Reason::NotFound)
    }

    /// The value must not be a key of `keys`.
    pub fn unknown_key<M: KeySet + ?Sized>(self, keys: &M) -> Self {
        self.check(|v| !keys.has_key(v), Reason::Duplicate)
    }

    fn check(self, ok: impl FnOnce(&str) -> bool, reason: Reason) -> Self {
        if !ok(self.value) {
            self.validator
                .violations
                .push(Violation::new(self.name, reason));
        }
        self
    }
}
