use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};

use dirstore_auth::{Group, OrgUnit, Person, Secret};
use dirstore_core::{DomainError, DomainResult, Entity, Reason, Validator, Violation};

/// Entry counts of a directory snapshot.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DirectoryStats {
    pub persons: usize,
    pub groups: usize,
    pub org_units: usize,
    pub credentials: usize,
    /// Total (group, person) membership pairs.
    pub memberships: usize,
}

/// Unsynchronized directory state.
///
/// Every mutating method validates its whole input before touching any
/// mapping, so a rejected call leaves the state exactly as it was.
#[derive(Debug, Default)]
pub(crate) struct Directory {
    persons: IndexMap<String, Person>,
    groups: IndexMap<String, Group>,
    org_units: IndexMap<String, OrgUnit>,
    credentials: HashMap<String, Secret>,
    members: HashMap<String, IndexSet<String>>,
}

fn insert_new<E: Entity>(map: &mut IndexMap<String, E>, entity: E) -> DomainResult<()> {
    let mut v = Validator::new();
    v.field(E::KEY_FIELD, entity.key())
        .not_empty()
        .not_blank()
        .unknown_key(&*map);
    v.finish()?;

    map.insert(entity.key().to_owned(), entity);
    Ok(())
}

fn replace_existing<E: Entity>(map: &mut IndexMap<String, E>, entity: E) -> DomainResult<()> {
    let mut v = Validator::new();
    v.field(E::KEY_FIELD, entity.key())
        .not_empty()
        .not_blank()
        .known_key(&*map);
    v.finish()?;

    // Same key: keeps its position, value is replaced wholesale.
    map.insert(entity.key().to_owned(), entity);
    Ok(())
}

fn lookup<'m, V>(
    map: &'m IndexMap<String, V>,
    field: &'static str,
    key: &str,
) -> DomainResult<&'m V> {
    let mut v = Validator::new();
    v.field(field, key).not_empty().not_blank().known_key(&*map);
    v.finish()?;

    map.get(key)
        .ok_or_else(|| DomainError::validation(vec![Violation::new(field, Reason::NotFound)]))
}

impl Directory {
    pub(crate) fn stats(&self) -> DirectoryStats {
        DirectoryStats {
            persons: self.persons.len(),
            groups: self.groups.len(),
            org_units: self.org_units.len(),
            credentials: self.credentials.len(),
            memberships: self.members.values().map(IndexSet::len).sum(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // People
    // ─────────────────────────────────────────────────────────────────────────

    pub(crate) fn check_credentials(
        &self,
        sys_name: &str,
        secret: Option<&Secret>,
    ) -> DomainResult<bool> {
        let mut v = Validator::new();
        v.field("sys_name", sys_name).not_empty().not_blank();
        v.finish()?;

        Ok(match (self.credentials.get(sys_name), secret) {
            (Some(stored), Some(given)) => stored == given,
            _ => false,
        })
    }

    pub(crate) fn load_person(&self, sys_name: &str) -> DomainResult<&Person> {
        lookup(&self.persons, "sys_name", sys_name)
    }

    pub(crate) fn persons(&self) -> impl Iterator<Item = &Person> {
        self.persons.values()
    }

    pub(crate) fn create_person(&mut self, person: Person) -> DomainResult<()> {
        insert_new(&mut self.persons, person)
    }

    pub(crate) fn update_person(&mut self, person: Person) -> DomainResult<()> {
        replace_existing(&mut self.persons, person)
    }

    /// Returns whether a previous credential was replaced.
    pub(crate) fn update_person_password(
        &mut self,
        sys_name: &str,
        secret: Secret,
    ) -> DomainResult<bool> {
        let mut v = Validator::new();
        v.field("sys_name", sys_name)
            .not_empty()
            .not_blank()
            .known_key(&self.persons);
        v.finish()?;

        // The replaced secret is wiped when dropped here.
        Ok(self
            .credentials
            .insert(sys_name.to_owned(), secret)
            .is_some())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Groups
    // ─────────────────────────────────────────────────────────────────────────

    pub(crate) fn load_group(&self, sys_name: &str) -> DomainResult<&Group> {
        lookup(&self.groups, "sys_name", sys_name)
    }

    pub(crate) fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    pub(crate) fn create_group(&mut self, group: Group) -> DomainResult<()> {
        insert_new(&mut self.groups, group)
    }

    pub(crate) fn update_group(&mut self, group: Group) -> DomainResult<()> {
        replace_existing(&mut self.groups, group)
    }

    pub(crate) fn group_persons(&self, group_sys_name: &str) -> DomainResult<Vec<String>> {
        let mut v = Validator::new();
        v.field("group_sys_name", group_sys_name)
            .not_empty()
            .not_blank()
            .known_key(&self.groups);
        v.finish()?;

        Ok(self
            .members
            .get(group_sys_name)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default())
    }

    fn validate_membership(&self, group_sys_name: &str, person_sys_name: &str) -> DomainResult<()> {
        let mut v = Validator::new();
        v.field("group_sys_name", group_sys_name)
            .not_empty()
            .not_blank()
            .known_key(&self.groups);
        v.field("person_sys_name", person_sys_name)
            .not_empty()
            .not_blank()
            .known_key(&self.persons);
        v.finish()
    }

    /// Returns whether the person was newly attached.
    pub(crate) fn attach_group_member(
        &mut self,
        group_sys_name: &str,
        person_sys_name: &str,
    ) -> DomainResult<bool> {
        self.validate_membership(group_sys_name, person_sys_name)?;

        Ok(self
            .members
            .entry(group_sys_name.to_owned())
            .or_default()
            .insert(person_sys_name.to_owned()))
    }

    /// Returns whether the person was a member.
    pub(crate) fn detach_group_member(
        &mut self,
        group_sys_name: &str,
        person_sys_name: &str,
    ) -> DomainResult<bool> {
        self.validate_membership(group_sys_name, person_sys_name)?;

        Ok(self
            .members
            .get_mut(group_sys_name)
            .is_some_and(|set| set.shift_remove(person_sys_name)))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Org units
    // ─────────────────────────────────────────────────────────────────────────

    pub(crate) fn load_org_unit(&self, name: &str) -> DomainResult<&OrgUnit> {
        lookup(&self.org_units, "name", name)
    }

    pub(crate) fn org_units(&self) -> impl Iterator<Item = &OrgUnit> {
        self.org_units.values()
    }

    pub(crate) fn has_org_unit(&self, name: &str) -> bool {
        self.org_units.contains_key(name)
    }

    pub(crate) fn create_org_unit(&mut self, org_unit: OrgUnit) -> DomainResult<()> {
        insert_new(&mut self.org_units, org_unit)
    }

    pub(crate) fn update_org_unit(&mut self, org_unit: OrgUnit) -> DomainResult<()> {
        replace_existing(&mut self.org_units, org_unit)
    }

    pub(crate) fn org_unit_persons<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Person> {
        self.persons.values().filter(move |p| p.belongs_to(name))
    }
}
