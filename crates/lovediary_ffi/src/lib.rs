//! Flutter-facing bindings for the diary core.

pub mod api;
