//! Directory backends.
//!
//! The in-memory backend keeps people, groups, org units, credentials and the
//! group membership relation in process memory and implements
//! [`dirstore_auth::AuthSystem`] on top of them.

pub mod in_memory;
mod state;

pub use in_memory::InMemoryAuthSystem;
pub use state::DirectoryStats;
