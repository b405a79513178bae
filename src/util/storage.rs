//! Bearer token persistence in `localStorage`.
//!
//! The backend issues an opaque token at login; it lives under a single
//! fixed key and is absent when logged out. Requires a browser environment;
//! outside it, reads return `None` and writes are no-ops so native unit
//! tests compile.

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "salescope_token";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted token, if any.
pub fn token() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        local_storage()?.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Persist the token. Storage failures are silently ignored; the in-memory
/// session still works for the rest of the run.
pub fn set_token(token: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = token;
    }
}

/// Remove the persisted token.
pub fn remove_token() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
