// Engine orchestration: key derivation, on-disk store, and the fetch-or-load
// service built on top of them.

pub mod key;
pub mod service;
pub mod store;
