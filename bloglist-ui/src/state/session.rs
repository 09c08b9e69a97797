//! Browser Session Store
//!
//! Keeps the logged-in user in `window.localStorage`.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use bloglist::{SessionError, SessionStore, SESSION_KEY};

/// Session store backed by `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

fn js_error(e: JsValue) -> SessionError {
    SessionError::Storage(format!("{:?}", e))
}

fn local_storage() -> Result<Storage, SessionError> {
    web_sys::window()
        .ok_or_else(|| SessionError::Storage("no window".to_string()))?
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| SessionError::Storage("localStorage unavailable".to_string()))
}

impl SessionStore for LocalSessionStore {
    fn read(&self) -> Result<Option<String>, SessionError> {
        local_storage()?.get_item(SESSION_KEY).map_err(js_error)
    }

    fn write(&self, record: &str) -> Result<(), SessionError> {
        local_storage()?
            .set_item(SESSION_KEY, record)
            .map_err(js_error)
    }

    fn remove(&self) -> Result<(), SessionError> {
        local_storage()?.remove_item(SESSION_KEY).map_err(js_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloglist::User;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_round_trip() {
        let store = LocalSessionStore;
        let user = User {
            username: "root".to_string(),
            name: "Superuser".to_string(),
            id: "u1".to_string(),
            token: "t0k3n".to_string(),
        };

        store.save(&user).unwrap();
        assert_eq!(store.load().unwrap(), Some(user));

        store.remove().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
