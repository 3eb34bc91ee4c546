//! `dirstore-core` — directory foundation building blocks.
//!
//! This crate contains the error model, the field validation layer and the
//! keyed-entity trait. No storage concerns.

pub mod entity;
pub mod error;
pub mod validation;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use validation::{FieldCheck, KeySet, Reason, Validator, Violation, Violations};
