use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage is not available")?;
    let json = serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))?;
    storage
        .set_item(key, &json)
        .map_err(|_| "Could not write to localStorage".to_string())?;
    Ok(())
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage is not available")?;
    storage
        .remove_item(key)
        .map_err(|_| "Could not remove from localStorage".to_string())?;
    Ok(())
}

/// True when any value sits under `key`. Used by the route guard, which only
/// cares about presence, not whether the payload still deserializes.
pub fn has_storage_key(key: &str) -> bool {
    local_storage()
        .and_then(|s| s.get_item(key).ok().flatten())
        .is_some()
}
