//! `dirstore-auth` — directory records and the backend capability contract.
//!
//! This crate is intentionally decoupled from storage: backends live elsewhere
//! and implement [`AuthSystem`].

pub mod group;
pub mod options;
pub mod org_unit;
pub mod person;
pub mod secret;
pub mod system;

pub use group::{Group, GroupBuilder};
pub use options::Options;
pub use org_unit::{OrgUnit, OrgUnitBuilder};
pub use person::{Person, PersonBuilder};
pub use secret::Secret;
pub use system::AuthSystem;
