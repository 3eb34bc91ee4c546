use serde::{Deserialize, Serialize};

use dirstore_core::Entity;

/// Organizational unit, identified by its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgUnit {
    name: String,
}

impl OrgUnit {
    pub fn builder(name: impl Into<String>) -> OrgUnitBuilder {
        OrgUnitBuilder { name: name.into() }
    }

    pub fn to_builder(&self) -> OrgUnitBuilder {
        OrgUnitBuilder {
            name: self.name.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for OrgUnit {
    const KIND: &'static str = "org unit";
    const KEY_FIELD: &'static str = "name";

    fn key(&self) -> &str {
        &self.name
    }
}

/// Builder for [`OrgUnit`].
#[derive(Debug, Clone)]
pub struct OrgUnitBuilder {
    name: String,
}

impl OrgUnitBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn build(self) -> OrgUnit {
        OrgUnit { name: self.name }
    }
}
