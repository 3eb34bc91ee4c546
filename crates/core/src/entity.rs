//! Entity trait: identity by natural key.

/// A directory record identified by a natural string key.
///
/// The key is whatever field the record type treats as its identity
/// (`sys_name` for people and groups, `name` for org units). Two records with
/// the same key are the same entity, whatever their other attributes.
pub trait Entity {
    /// Human-readable kind, used in log lines.
    const KIND: &'static str;

    /// Name of the key field, used when reporting violations.
    const KEY_FIELD: &'static str;

    /// Returns the natural key.
    fn key(&self) -> &str;
}
