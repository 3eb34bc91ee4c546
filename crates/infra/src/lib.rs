//! Infrastructure layer: directory backends.

pub mod directory;

pub use directory::{DirectoryStats, InMemoryAuthSystem};
