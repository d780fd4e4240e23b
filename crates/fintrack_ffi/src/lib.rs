//! Flutter-facing bindings for FinTrack core.

pub mod api;
