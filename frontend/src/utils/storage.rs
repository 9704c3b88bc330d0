use crate::api::UserResponse;

/// Local storage key holding the tenant the shopper selected at entry.
pub const TENANT_KEY: &str = "tenant";

/// Local storage key holding the serialized authenticated user.
pub const CURRENT_USER_KEY: &str = "current_user";

#[cfg(target_arch = "wasm32")]
mod backend {
    use web_sys::{Storage, Window};

    fn window() -> Result<Window, String> {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }

    fn local_storage() -> Result<Storage, String> {
        window()?
            .local_storage()
            .map_err(|_| "No localStorage".to_string())?
            .ok_or_else(|| "No localStorage".to_string())
    }

    pub fn get_item(key: &str) -> Option<String> {
        local_storage().ok()?.get_item(key).ok().flatten()
    }

    pub fn set_item(key: &str, value: &str) {
        if let Ok(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    pub fn remove_item(key: &str) {
        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

// Host builds back storage with a thread-local map so state and view-model
// logic stays exercisable from native tests.
#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    pub fn set_item(key: &str, value: &str) {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
        });
    }

    pub fn remove_item(key: &str) {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}

pub use backend::{get_item, remove_item, set_item};

/// Tenant namespace persisted by the shell before the login page renders.
pub fn tenant() -> Option<String> {
    get_item(TENANT_KEY).filter(|tenant| !tenant.is_empty())
}

pub fn persist_current_user(user: &UserResponse) {
    if let Ok(raw) = serde_json::to_string(user) {
        set_item(CURRENT_USER_KEY, &raw);
    }
}

pub fn read_current_user() -> Option<UserResponse> {
    let raw = get_item(CURRENT_USER_KEY)?;
    serde_json::from_str(&raw).ok()
}

pub fn clear_current_user() {
    remove_item(CURRENT_USER_KEY);
}
