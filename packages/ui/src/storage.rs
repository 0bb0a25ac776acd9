//! Shared session-store constructor for all platforms.
//!
//! Returns a [`store::SessionStore`] backed by the appropriate
//! [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorage`]
//! - **Native** (tests, tooling): in-memory via [`store::MemoryStore`]

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorage;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// Create the platform session store, optionally scoped to a key namespace.
pub fn make_session_store(namespace: Option<&str>) -> store::SessionStore<PlatformStore> {
    store::SessionStore::with_namespace(PlatformStore::new(), namespace)
}
