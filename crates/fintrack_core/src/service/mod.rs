//! Use-case services owning in-memory state.
//!
//! # Responsibility
//! - Mirror persisted identity and ledger in memory.
//! - Persist every mutation before returning to the caller.

pub mod auth_service;
pub mod ledger_service;
