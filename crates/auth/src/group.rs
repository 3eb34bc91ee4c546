//! Group record.

use serde::{Deserialize, Serialize};

use dirstore_core::Entity;

/// A named group people can be attached to.
///
/// Membership is not part of the record; the directory keeps it as a separate
/// relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    sys_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Group {
    pub fn builder(sys_name: impl Into<String>) -> GroupBuilder {
        GroupBuilder {
            sys_name: sys_name.into(),
            description: None,
        }
    }

    pub fn to_builder(&self) -> GroupBuilder {
        GroupBuilder {
            sys_name: self.sys_name.clone(),
            description: self.description.clone(),
        }
    }

    pub fn sys_name(&self) -> &str {
        &self.sys_name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Entity for Group {
    const KIND: &'static str = "group";
    const KEY_FIELD: &'static str = "sys_name";

    fn key(&self) -> &str {
        &self.sys_name
    }
}

/// Builder for [`Group`].
#[derive(Debug, Clone)]
pub struct GroupBuilder {
    sys_name: String,
    description: Option<String>,
}

impl GroupBuilder {
    pub fn sys_name(mut self, sys_name: impl Into<String>) -> Self {
        self.sys_name = sys_name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn build(self) -> Group {
        Group {
            sys_name: self.sys_name,
            description: self.description,
        }
    }
}
