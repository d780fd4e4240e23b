//! Persistence contracts over the key-value store.
//!
//! # Responsibility
//! - Define the storage seam (`KeyValueStore`) and its SQLite backend.
//! - Map identity and ledger records to their fixed keys and JSON shapes.
//!
//! # Invariants
//! - Identity and ledger live under separate keys and never share a write.
//! - Writes surface failures; reads degrade to "absent"/"empty".

pub mod identity_repo;
pub mod kv_store;
pub mod ledger_repo;
