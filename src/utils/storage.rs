use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::{window, Storage};
use crate::error::AppError;

/// Almacenamiento clave/valor síncrono (localStorage en el navegador)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str);
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// window.localStorage
#[derive(Clone, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let storage = get_local_storage()
            .ok_or_else(|| AppError::Storage("No se pudo acceder a localStorage".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|_| AppError::Storage(format!("Error guardando '{}' en localStorage", key)))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            if storage.remove_item(key).is_err() {
                log::warn!("⚠️ [STORAGE] Error eliminando '{}' de localStorage", key);
            }
        }
    }
}

/// Almacenamiento en memoria (tests, o navegadores sin localStorage)
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// localStorage si está disponible; si no (modo privado, sin window) memoria
pub fn default_storage() -> Rc<dyn KeyValueStore> {
    if get_local_storage().is_some() {
        Rc::new(BrowserStorage)
    } else {
        log::warn!("⚠️ [STORAGE] localStorage no disponible, usando almacenamiento en memoria");
        Rc::new(MemoryStorage::new())
    }
}
