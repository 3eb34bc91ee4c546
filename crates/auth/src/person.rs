//! Person record.

use serde::{Deserialize, Serialize};

use dirstore_core::Entity;

/// A person known to the directory.
///
/// Records are immutable once built. To change one, derive a builder from it
/// with [`Person::to_builder`] and hand the rebuilt record to the directory's
/// update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    sys_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    full_name: Option<String>,
    /// Name of the org unit this person belongs to. Not checked against the
    /// directory's org units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    org_unit: Option<String>,
}

impl Person {
    pub fn builder(sys_name: impl Into<String>) -> PersonBuilder {
        PersonBuilder {
            sys_name: sys_name.into(),
            full_name: None,
            org_unit: None,
        }
    }

    pub fn to_builder(&self) -> PersonBuilder {
        PersonBuilder {
            sys_name: self.sys_name.clone(),
            full_name: self.full_name.clone(),
            org_unit: self.org_unit.clone(),
        }
    }

    pub fn sys_name(&self) -> &str {
        &self.sys_name
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    pub fn org_unit(&self) -> Option<&str> {
        self.org_unit.as_deref()
    }

    /// Whether this person references the org unit `name`.
    pub fn belongs_to(&self, name: &str) -> bool {
        self.org_unit.as_deref() == Some(name)
    }
}

impl Entity for Person {
    const KIND: &'static str = "person";
    const KEY_FIELD: &'static str = "sys_name";

    fn key(&self) -> &str {
        &self.sys_name
    }
}

/// Builder for [`Person`].
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    sys_name: String,
    full_name: Option<String>,
    org_unit: Option<String>,
}

impl PersonBuilder {
    pub fn sys_name(mut self, sys_name: impl Into<String>) -> Self {
        self.sys_name = sys_name.into();
        self
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn org_unit(mut self, org_unit: impl Into<String>) -> Self {
        self.org_unit = Some(org_unit.into());
        self
    }

    pub fn clear_org_unit(mut self) -> Self {
        self.org_unit = None;
        self
    }

    pub fn build(self) -> Person {
        Person {
            sys_name: self.sys_name,
            full_name: self.full_name,
            org_unit: self.org_unit,
        }
    }
}
