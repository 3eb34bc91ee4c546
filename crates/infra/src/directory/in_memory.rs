use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use dirstore_auth::{AuthSystem, Group, Options, OrgUnit, Person, Secret};
use dirstore_core::{DomainResult, Entity};

use super::state::{Directory, DirectoryStats};

/// In-memory directory backend.
///
/// Intended for tests/dev and as the reference behaviour other backends are
/// measured against. Nothing survives the process.
///
/// All state sits behind one lock, so a call validates and applies its change
/// under a single write guard: concurrent callers never observe a half-applied
/// mutation. Each instance is fully independent.
#[derive(Debug, Default)]
pub struct InMemoryAuthSystem {
    state: RwLock<Directory>,
}

impl InMemoryAuthSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry counts at this instant.
    pub fn stats(&self) -> DirectoryStats {
        self.read().stats()
    }

    // A poisoned lock still holds consistent state: validation finishes
    // before any mapping is written.
    fn read(&self) -> RwLockReadGuard<'_, Directory> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Directory> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create or replace one record, logging the outcome once the write
    /// guard is released.
    fn store<E: Entity>(
        &self,
        op: &'static str,
        record: E,
        apply: fn(&mut Directory, E) -> DomainResult<()>,
    ) -> DomainResult<()> {
        let key = record.key().to_owned();
        let result = apply(&mut self.write(), record);
        log_rejection(op, result)?;
        tracing::info!(kind = E::KIND, key = %key, op, "directory record stored");
        Ok(())
    }
}

fn log_rejection<T>(op: &'static str, result: DomainResult<T>) -> DomainResult<T> {
    if let Err(err) = &result {
        tracing::warn!(op, error = %err, "directory operation rejected");
    }
    result
}

impl AuthSystem for InMemoryAuthSystem {
    fn configure(&self, options: &Options) -> DomainResult<()> {
        for key in options.keys() {
            tracing::debug!(key, "in-memory directory ignores option");
        }
        Ok(())
    }

    fn check_health(&self) -> bool {
        true
    }

    fn check_credentials(&self, sys_name: &str, secret: Option<&Secret>) -> DomainResult<bool> {
        let matched = self.read().check_credentials(sys_name, secret)?;
        if !matched {
            tracing::debug!(sys_name, "credential check failed");
        }
        Ok(matched)
    }

    fn load_person(&self, sys_name: &str) -> DomainResult<Person> {
        self.read().load_person(sys_name).cloned()
    }

    fn find_persons(&self) -> Vec<Person> {
        self.read().persons().cloned().collect()
    }

    fn can_create_or_update_person(&self) -> bool {
        true
    }

    fn can_update_password(&self) -> bool {
        true
    }

    fn create_person(&self, person: Person) -> DomainResult<()> {
        self.store("create_person", person, Directory::create_person)
    }

    fn update_person(&self, person: Person) -> DomainResult<()> {
        self.store("update_person", person, Directory::update_person)
    }

    fn update_person_password(&self, sys_name: &str, secret: Secret) -> DomainResult<()> {
        let result = self.write().update_person_password(sys_name, secret);
        let replaced = log_rejection("update_person_password", result)?;
        tracing::info!(sys_name, replaced, "person credential set");
        Ok(())
    }

    fn load_group(&self, sys_name: &str) -> DomainResult<Group> {
        self.read().load_group(sys_name).cloned()
    }

    fn find_groups(&self) -> Vec<Group> {
        self.read().groups().cloned().collect()
    }

    fn find_group_persons(&self, group_sys_name: &str) -> DomainResult<Vec<String>> {
        self.read().group_persons(group_sys_name)
    }

    fn attach_group_member(
        &self,
        group_sys_name: &str,
        person_sys_name: &str,
    ) -> DomainResult<()> {
        let result = self.write().attach_group_member(group_sys_name, person_sys_name);
        if log_rejection("attach_group_member", result)? {
            tracing::info!(
                group = group_sys_name,
                person = person_sys_name,
                "group member attached"
            );
        }
        Ok(())
    }

    fn detach_group_member(
        &self,
        group_sys_name: &str,
        person_sys_name: &str,
    ) -> DomainResult<()> {
        let result = self.write().detach_group_member(group_sys_name, person_sys_name);
        if log_rejection("detach_group_member", result)? {
            tracing::info!(
                group = group_sys_name,
                person = person_sys_name,
                "group member detached"
            );
        }
        Ok(())
    }

    fn can_create_or_update_group(&self) -> bool {
        true
    }

    fn create_group(&self, group: Group) -> DomainResult<()> {
        self.store("create_group", group, Directory::create_group)
    }

    fn update_group(&self, group: Group) -> DomainResult<()> {
        self.store("update_group", group, Directory::update_group)
    }

    fn load_org_unit(&self, name: &str) -> DomainResult<OrgUnit> {
        self.read().load_org_unit(name).cloned()
    }

    fn find_org_units(&self) -> Vec<OrgUnit> {
        self.read().org_units().cloned().collect()
    }

    fn find_org_unit_persons(&self, name: &str) -> Vec<Person> {
        let state = self.read();
        if !state.has_org_unit(name) {
            tracing::debug!(name, "listing persons of unknown org unit");
        }
        state.org_unit_persons(name).cloned().collect()
    }

    fn can_create_or_update_org_unit(&self) -> bool {
        true
    }

    fn create_org_unit(&self, org_unit: OrgUnit) -> DomainResult<()> {
        self.store("create_org_unit", org_unit, Directory::create_org_unit)
    }

    fn update_org_unit(&self, org_unit: OrgUnit) -> DomainResult<()> {
        self.store("update_org_unit", org_unit, Directory::update_org_unit)
    }
}
