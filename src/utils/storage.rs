use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    LocalStorage::set(key, value)
        .map_err(|e| format!("Error guardando '{}' en localStorage: {}", key, e))
}

/// Lee y deserializa una clave; ausente o corrupta devuelve None
pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    match LocalStorage::get::<T>(key) {
        Ok(value) => Some(value),
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => None,
        Err(e) => {
            log::warn!("⚠️ [STORAGE] Valor inválido en '{}': {}", key, e);
            None
        }
    }
}

/// Cadenas guardadas tal cual (sin JSON), como el token
pub fn save_raw(key: &str, value: &str) -> Result<(), String> {
    let storage = LocalStorage::raw();
    storage
        .set_item(key, value)
        .map_err(|_| format!("Error guardando '{}' en localStorage", key))
}

pub fn load_raw(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok().flatten()
}

pub fn remove_from_storage(key: &str) {
    LocalStorage::delete(key);
}
