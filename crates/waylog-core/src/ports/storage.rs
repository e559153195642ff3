use crate::error::Result;

/// Port for the durable key/value storage backing persistence.
///
/// Mirrors the web storage contract: string keys, string values, and absent
/// keys reading back as `None`.
pub trait StorageBackend {
    /// Read the value stored under `key`
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; absent keys are a no-op
    fn remove_item(&mut self, key: &str) -> Result<()>;
}
