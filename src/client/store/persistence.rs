//! Where the session survives page reloads.
//!
//! The browser build keeps the serialized session in `localStorage` under a fixed
//! application key. Desktop builds and tests keep it in memory for the lifetime of the
//! process.

use std::{cell::RefCell, rc::Rc};

use crate::client::error::Error;

pub trait SessionPersistence {
    fn load(&self) -> Result<Option<String>, Error>;
    fn save(&self, value: &str) -> Result<(), Error>;
    fn clear(&self) -> Result<(), Error>;
}

/// Process-local persistence. Clones share the same slot, so a clone handed to a second
/// store behaves like a page reload.
#[derive(Clone, Default)]
pub struct MemoryPersistence {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryPersistence {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(value.into()))),
        }
    }

    pub fn value(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SessionPersistence for MemoryPersistence {
    fn load(&self) -> Result<Option<String>, Error> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, value: &str) -> Result<(), Error> {
        *self.slot.borrow_mut() = Some(value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), Error> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub struct LocalStoragePersistence {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl LocalStoragePersistence {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Result<web_sys::Storage, Error> {
        web_sys::window()
            .ok_or_else(|| Error::Persistence("no window available".to_string()))?
            .local_storage()
            .map_err(|e| Error::Persistence(format!("{:?}", e)))?
            .ok_or_else(|| Error::Persistence("localStorage is disabled".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionPersistence for LocalStoragePersistence {
    fn load(&self) -> Result<Option<String>, Error> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|e| Error::Persistence(format!("{:?}", e)))
    }

    fn save(&self, value: &str) -> Result<(), Error> {
        self.storage()?
            .set_item(&self.key, value)
            .map_err(|e| Error::Persistence(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), Error> {
        self.storage()?
            .remove_item(&self.key)
            .map_err(|e| Error::Persistence(format!("{:?}", e)))
    }
}

/// The persistence backend for the current platform
#[cfg(target_arch = "wasm32")]
pub fn platform_persistence(key: &str) -> Box<dyn SessionPersistence> {
    Box::new(LocalStoragePersistence::new(key))
}

/// The persistence backend for the current platform
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_persistence(_key: &str) -> Box<dyn SessionPersistence> {
    Box::new(MemoryPersistence::default())
}
