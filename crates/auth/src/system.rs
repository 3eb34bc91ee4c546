use std::sync::Arc;

use dirstore_core::DomainResult;

use crate::{Group, Options, OrgUnit, Person, Secret};

/// Directory backend capability contract.
///
/// A backend holds people, groups, org units and credentials. Keyed lookups
/// and mutations reject bad input with [`dirstore_core::DomainError::Validation`]
/// before touching any state. Credential checks answer `false` rather than
/// failing when nothing matches.
///
/// The `can_*` flags let read-only backends advertise what they refuse to do.
pub trait AuthSystem: Send + Sync {
    // Lifecycle

    /// Apply backend options. Backends ignore keys they do not understand.
    fn configure(&self, options: &Options) -> DomainResult<()>;

    fn check_health(&self) -> bool;

    // People

    /// Whether `secret` matches the credential stored for `sys_name`.
    ///
    /// Fails only when `sys_name` is empty or blank.
    fn check_credentials(&self, sys_name: &str, secret: Option<&Secret>) -> DomainResult<bool>;

    fn load_person(&self, sys_name: &str) -> DomainResult<Person>;

    fn find_persons(&self) -> Vec<Person>;

    fn can_create_or_update_person(&self) -> bool;

    fn can_update_password(&self) -> bool;

    fn create_person(&self, person: Person) -> DomainResult<()>;

    /// Replace the stored person with the same `sys_name`.
    fn update_person(&self, person: Person) -> DomainResult<()>;

    /// Set (or overwrite) the credential of an existing person.
    fn update_person_password(&self, sys_name: &str, secret: Secret) -> DomainResult<()>;

    // Groups

    fn load_group(&self, sys_name: &str) -> DomainResult<Group>;

    fn find_groups(&self) -> Vec<Group>;

    /// System names of the group's members, in attach order.
    fn find_group_persons(&self, group_sys_name: &str) -> DomainResult<Vec<String>>;

    fn attach_group_member(&self, group_sys_name: &str, person_sys_name: &str)
    -> DomainResult<()>;

    fn detach_group_member(&self, group_sys_name: &str, person_sys_name: &str)
    -> DomainResult<()>;

    fn can_create_or_update_group(&self) -> bool;

    fn create_group(&self, group: Group) -> DomainResult<()>;

    fn update_group(&self, group: Group) -> DomainResult<()>;

    // Org units

    fn load_org_unit(&self, name: &str) -> DomainResult<OrgUnit>;

    fn find_org_units(&self) -> Vec<OrgUnit>;

    /// People whose org unit reference equals `name`.
    ///
    /// `name` is not required to be a known org unit.
    fn find_org_unit_persons(&self, name: &str) -> Vec<Person>;

    fn can_create_or_update_org_unit(&self) -> bool;

    fn create_org_unit(&self, org_unit: OrgUnit) -> DomainResult<()>;

    fn update_org_unit(&self, org_unit: OrgUnit) -> DomainResult<()>;
}

// Shared handles (`Arc<dyn AuthSystem>`, `Box<dyn AuthSystem>`) are backends too.
macro_rules! impl_auth_system_for_pointer {
    ($($ptr:ident),+) => {$(
        impl<S> AuthSystem for $ptr<S>
        where
            S: AuthSystem + ?Sized,
        {
            fn configure(&self, options: &Options) -> DomainResult<()> {
                (**self).configure(options)
            }

            fn check_health(&self) -> bool {
                (**self).check_health()
            }

            fn check_credentials(&self, sys_name: &str, secret: Option<&Secret>) -> DomainResult<bool> {
                (**self).check_credentials(sys_name, secret)
            }

            fn load_person(&self, sys_name: &str) -> DomainResult<Person> {
                (**self).load_person(sys_name)
            }

            fn find_persons(&self) -> Vec<Person> {
                (**self).find_persons()
            }

            fn can_create_or_update_person(&self) -> bool {
                (**self).can_create_or_update_person()
            }

            fn can_update_password(&self) -> bool {
                (**self).can_update_password()
            }

            fn create_person(&self, person: Person) -> DomainResult<()> {
                (**self).create_person(person)
            }

            fn update_person(&self, person: Person) -> DomainResult<()> {
                (**self).update_person(person)
            }

            fn update_person_password(&self, sys_name: &str, secret: Secret) -> DomainResult<()> {
                (**self).update_person_password(sys_name, secret)
            }

            fn load_group(&self, sys_name: &str) -> DomainResult<Group> {
                (**self).load_group(sys_name)
            }

            fn find_groups(&self) -> Vec<Group> {
                (**self).find_groups()
            }

            fn find_group_persons(&self, group_sys_name: &str) -> DomainResult<Vec<String>> {
                (**self).find_group_persons(group_sys_name)
            }

            fn attach_group_member(
                &self,
                group_sys_name: &str,
                person_sys_name: &str,
            ) -> DomainResult<()> {
                (**self).attach_group_member(group_sys_name, person_sys_name)
            }

            fn detach_group_member(
                &self,
                group_sys_name: &str,
                person_sys_name: &str,
            ) -> DomainResult<()> {
                (**self).detach_group_member(group_sys_name, person_sys_name)
            }

            fn can_create_or_update_group(&self) -> bool {
                (**self).can_create_or_update_group()
            }

            fn create_group(&self, group: Group) -> DomainResult<()> {
                (**self).create_group(group)
            }

            fn update_group(&self, group: Group) -> DomainResult<()> {
                (**self).update_group(group)
            }

            fn load_org_unit(&self, name: &str) -> DomainResult<OrgUnit> {
                (**self).load_org_unit(name)
            }

            fn find_org_units(&self) -> Vec<OrgUnit> {
                (**self).find_org_units()
            }

            fn find_org_unit_persons(&self, name: &str) -> Vec<Person> {
                (**self).find_org_unit_persons(name)
            }

            fn can_create_or_update_org_unit(&self) -> bool {
                (**self).can_create_or_update_org_unit()
            }

            fn create_org_unit(&self, org_unit: OrgUnit) -> DomainResult<()> {
                (**self).create_org_unit(org_unit)
            }

            fn update_org_unit(&self, org_unit: OrgUnit) -> DomainResult<()> {
                (**self).update_org_unit(org_unit)
            }
        }
    )+};
}

impl_auth_system_for_pointer!(Arc, Box);
