//! Client-side session state
//!
//! The token and active tab live in a `Storage` implementation; the
//! `SessionStore` is the only place that knows their keys.

mod storage;
mod store;

#[cfg(test)]
pub(crate) use storage::MemoryStorage;
pub(crate) use storage::{FileStorage, Storage, default_storage_path};
pub(crate) use store::SessionStore;
