use std::sync::Arc;

use dirstore_auth::{AuthSystem, Group, Options, OrgUnit, Person, Secret};
use dirstore_core::Reason;
use dirstore_infra::InMemoryAuthSystem;

const JOHN: &str = "JOHN";
const LUC: &str = "LUC";
const IT: &str = "IT";
const AUDIT: &str = "AUDIT";
const MARKETING: &str = "Marketing";

fn directory() -> Arc<dyn AuthSystem> {
    dirstore_observability::init();
    Arc::new(InMemoryAuthSystem::new())
}

fn create_person(dir: &dyn AuthSystem, sys_name: &str) {
    dir.create_person(Person::builder(sys_name).build())
        .expect("failed to create person");
}

fn create_group(dir: &dyn AuthSystem, sys_name: &str) {
    dir.create_group(Group::builder(sys_name).build())
        .expect("failed to create group");
}

fn sys_names(persons: &[Person]) -> Vec<&str> {
    persons.iter().map(Person::sys_name).collect()
}

#[test]
fn health_and_configure() {
    let dir = directory();

    assert!(dir.check_health());
    let opts = Options::from_json(r#"{ "anything": "goes" }"#).unwrap();
    assert!(dir.configure(&opts).is_ok());
}

#[test]
fn persons_nominal_and_multiple() {
    let dir = directory();
    assert!(dir.can_create_or_update_person());

    create_person(dir.as_ref(), JOHN);
    assert_eq!(dir.load_person(JOHN).unwrap().sys_name(), JOHN);

    create_person(dir.as_ref(), LUC);
    let all = dir.find_persons();
    assert_eq!(sys_names(&all), vec![JOHN, LUC]);
}

#[test]
fn person_update_replaces_record() {
    let dir = directory();
    create_person(dir.as_ref(), JOHN);

    let updated = dir
        .load_person(JOHN)
        .unwrap()
        .to_builder()
        .full_name("Someone's name")
        .build();
    dir.update_person(updated).unwrap();

    assert_eq!(dir.load_person(JOHN).unwrap().full_name(), Some("Someone's name"));
}

#[test]
fn duplicate_person_is_rejected() {
    let dir = directory();
    create_person(dir.as_ref(), JOHN);

    let err = dir
        .create_person(Person::builder(JOHN).build())
        .unwrap_err();
    assert!(err.violations().contains("sys_name", Reason::Duplicate));
    assert_eq!(dir.find_persons().len(), 1);
}

#[test]
fn password_nominal() {
    let dir = directory();
    create_person(dir.as_ref(), JOHN);
    assert!(dir.can_update_password());

    let pwd1 = Secret::from("x!m141M");
    let pwd2 = Secret::from("POOl::k");

    dir.update_person_password(JOHN, pwd1.clone()).unwrap();
    assert!(dir.check_credentials(JOHN, Some(&pwd1)).unwrap());
    assert!(!dir.check_credentials(JOHN, Some(&pwd2)).unwrap());

    dir.update_person_password(JOHN, pwd2.clone()).unwrap();
    assert!(!dir.check_credentials(JOHN, Some(&pwd1)).unwrap());
    assert!(dir.check_credentials(JOHN, Some(&pwd2)).unwrap());
}

#[test]
fn password_for_missing_person_is_rejected() {
    let dir = directory();

    let err = dir
        .update_person_password(JOHN, Secret::from("x!m141M"))
        .unwrap_err();
    assert!(err.violations().contains("sys_name", Reason::NotFound));
}

#[test]
fn check_credentials_edge_cases() {
    let dir = directory();
    create_person(dir.as_ref(), JOHN);
    let empty = Secret::from("");

    assert!(dir.check_credentials("", None).is_err());
    assert!(dir.check_credentials("", Some(&empty)).is_err());
    assert!(!dir.check_credentials(JOHN, None).unwrap());
    assert!(!dir.check_credentials(JOHN, Some(&empty)).unwrap());

    dir.update_person_password(JOHN, Secret::from("x!m141M"))
        .unwrap();
    assert!(!dir.check_credentials(JOHN, None).unwrap());
    assert!(!dir.check_credentials(JOHN, Some(&empty)).unwrap());
    assert!(!dir.check_credentials(JOHN, Some(&Secret::from("POOl::k"))).unwrap());
    assert!(dir.check_credentials(JOHN, Some(&Secret::from("x!m141M"))).unwrap());
}

#[test]
fn groups_nominal_multiple_and_duplicate() {
    let dir = directory();
    assert!(dir.can_create_or_update_group());

    create_group(dir.as_ref(), IT);
    assert_eq!(dir.load_group(IT).unwrap().sys_name(), IT);

    create_group(dir.as_ref(), AUDIT);
    let names: Vec<String> = dir
        .find_groups()
        .iter()
        .map(|g| g.sys_name().to_string())
        .collect();
    assert_eq!(names, vec![IT, AUDIT]);

    assert!(dir.create_group(Group::builder(IT).build()).is_err());
    assert_eq!(dir.find_groups().len(), 2);
}

#[test]
fn group_and_org_unit_load_whole_record() {
    let dir = directory();
    let it = Group::builder(IT).description("Information technology").build();
    let audit = Group::builder(AUDIT).build();
    let marketing = OrgUnit::builder(MARKETING).build();

    dir.create_group(it.clone()).unwrap();
    dir.create_group(audit.clone()).unwrap();
    dir.create_org_unit(marketing.clone()).unwrap();

    assert_eq!(dir.load_group(IT).unwrap(), it);
    assert_eq!(dir.load_group(AUDIT).unwrap(), audit);
    assert_eq!(dir.find_groups(), vec![it, audit]);
    assert_eq!(dir.load_org_unit(MARKETING).unwrap(), marketing);
    assert_eq!(dir.find_org_units(), vec![marketing]);
}

#[test]
fn group_update_sets_description() {
    let dir = directory();
    create_group(dir.as_ref(), IT);

    let updated = dir
        .load_group(IT)
        .unwrap()
        .to_builder()
        .description("Something here...")
        .build();
    dir.update_group(updated).unwrap();

    assert_eq!(dir.load_group(IT).unwrap().description(), Some("Something here..."));
}

#[test]
fn attach_members() {
    let dir = directory();
    create_group(dir.as_ref(), IT);
    create_group(dir.as_ref(), AUDIT);
    create_person(dir.as_ref(), JOHN);
    create_person(dir.as_ref(), LUC);

    assert!(dir.find_group_persons(IT).unwrap().is_empty());
    dir.attach_group_member(IT, JOHN).unwrap();
    assert_eq!(dir.find_group_persons(IT).unwrap(), vec![JOHN]);

    assert!(dir.find_group_persons(AUDIT).unwrap().is_empty());
    dir.attach_group_member(AUDIT, JOHN).unwrap();
    assert_eq!(dir.find_group_persons(AUDIT).unwrap(), vec![JOHN]);
    dir.attach_group_member(AUDIT, LUC).unwrap();
    assert_eq!(dir.find_group_persons(AUDIT).unwrap(), vec![JOHN, LUC]);

    assert_eq!(dir.find_group_persons(IT).unwrap(), vec![JOHN]);
}

#[test]
fn detach_members() {
    let dir = directory();
    create_group(dir.as_ref(), IT);
    create_person(dir.as_ref(), JOHN);
    create_person(dir.as_ref(), LUC);

    dir.attach_group_member(IT, JOHN).unwrap();
    dir.attach_group_member(IT, LUC).unwrap();
    assert_eq!(dir.find_group_persons(IT).unwrap(), vec![JOHN, LUC]);

    dir.detach_group_member(IT, LUC).unwrap();
    assert_eq!(dir.find_group_persons(IT).unwrap(), vec![JOHN]);

    dir.detach_group_member(IT, JOHN).unwrap();
    assert!(dir.find_group_persons(IT).unwrap().is_empty());
}

#[test]
fn attach_with_unknown_keys_lists_both() {
    let dir = directory();

    let err = dir.attach_group_member(IT, JOHN).unwrap_err();
    assert!(err.violations().contains("group_sys_name", Reason::NotFound));
    assert!(err.violations().contains("person_sys_name", Reason::NotFound));

    let err = dir.detach_group_member(" ", JOHN).unwrap_err();
    assert!(err.violations().contains("group_sys_name", Reason::Blank));
    assert!(err.violations().contains("person_sys_name", Reason::NotFound));
}

#[test]
fn org_units_nominal() {
    let dir = directory();
    assert!(dir.can_create_or_update_org_unit());

    dir.create_org_unit(OrgUnit::builder(MARKETING).build())
        .unwrap();
    assert_eq!(dir.load_org_unit(MARKETING).unwrap().name(), MARKETING);

    let names: Vec<String> = dir
        .find_org_units()
        .iter()
        .map(|ou| ou.name().to_string())
        .collect();
    assert_eq!(names, vec![MARKETING]);

    assert!(dir.create_org_unit(OrgUnit::builder(MARKETING).build()).is_err());
    assert!(dir.update_org_unit(OrgUnit::builder(MARKETING).build()).is_ok());
    assert!(dir.update_org_unit(OrgUnit::builder("Sales").build()).is_err());
}

#[test]
fn org_unit_persons_follow_person_updates() {
    let dir = directory();
    dir.create_org_unit(OrgUnit::builder(MARKETING).build())
        .unwrap();
    dir.create_person(Person::builder(JOHN).org_unit(MARKETING).build())
        .unwrap();
    create_person(dir.as_ref(), LUC);

    assert_eq!(sys_names(&dir.find_org_unit_persons(MARKETING)), vec![JOHN]);

    let luc = dir.load_person(LUC).unwrap().to_builder().org_unit(MARKETING).build();
    dir.update_person(luc).unwrap();
    assert_eq!(sys_names(&dir.find_org_unit_persons(MARKETING)), vec![JOHN, LUC]);

    let john = dir.load_person(JOHN).unwrap().to_builder().clear_org_unit().build();
    dir.update_person(john).unwrap();
    assert_eq!(sys_names(&dir.find_org_unit_persons(MARKETING)), vec![LUC]);
}

#[test]
fn org_unit_persons_accepts_unknown_name() {
    let dir = directory();
    dir.create_person(Person::builder(JOHN).org_unit("Ghost").build())
        .unwrap();

    assert!(dir.find_org_unit_persons("Nowhere").is_empty());
    // The reference is free-form: no org unit named "Ghost" exists.
    assert_eq!(sys_names(&dir.find_org_unit_persons("Ghost")), vec![JOHN]);
}

fn enroll<A: AuthSystem>(dir: A) -> A {
    dir.create_group(Group::builder(IT).build()).unwrap();
    dir.create_person(Person::builder(JOHN).build()).unwrap();
    dir.attach_group_member(IT, JOHN).unwrap();
    dir
}

#[test]
fn boxed_and_shared_handles_are_backends() {
    dirstore_observability::init();

    let boxed: Box<dyn AuthSystem> = Box::new(InMemoryAuthSystem::new());
    let boxed = enroll(boxed);
    assert_eq!(boxed.find_group_persons(IT).unwrap(), vec![JOHN]);

    let shared = enroll(directory());
    let other = Arc::clone(&shared);
    assert_eq!(other.find_group_persons(IT).unwrap(), vec![JOHN]);

    let concrete = enroll(Box::new(InMemoryAuthSystem::new()));
    assert_eq!(concrete.stats().memberships, 1);
}

#[test]
fn rejected_mutations_leave_state_untouched() {
    let store = InMemoryAuthSystem::new();
    store.create_person(Person::builder(JOHN).build()).unwrap();
    store.create_group(Group::builder(IT).build()).unwrap();
    store.attach_group_member(IT, JOHN).unwrap();
    let before = store.stats();

    assert!(store.create_person(Person::builder(JOHN).build()).is_err());
    assert!(store.create_group(Group::builder("").build()).is_err());
    assert!(store.update_person(Person::builder(LUC).build()).is_err());
    assert!(store.attach_group_member(IT, LUC).is_err());
    assert!(store.update_person_password(LUC, Secret::from("x")).is_err());

    assert_eq!(store.stats(), before);
    assert_eq!(before.memberships, 1);
}
