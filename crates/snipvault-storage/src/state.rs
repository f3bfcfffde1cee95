use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::kv::KeyValueStore;

/// Load a JSON document stored under `key`. `Ok(None)` if the key is absent.
pub fn load_state<T: DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    let value: T = serde_json::from_str(&raw)?;
    Ok(Some(value))
}

/// Load a JSON document, falling back to `T::default()` when the key is
/// missing, unreadable, or does not parse. Failures are logged, not returned.
pub fn load_state_or_default<T: DeserializeOwned + Default>(
    store: &impl KeyValueStore,
    key: &str,
) -> T {
    match load_state(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "stored state unreadable, using default");
            T::default()
        }
    }
}

/// Serialize `value` and write it under `key`, replacing what was there.
pub fn save_state<T: Serialize + ?Sized>(
    store: &mut impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_string(value)?;
    store.set(key, &body)
}
