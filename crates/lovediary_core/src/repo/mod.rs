//! Persisted resources.
//!
//! # Responsibility
//! - Own each persisted resource behind one fixed storage key.
//! - Return storage failures as typed errors; degrading is the caller's call.
//!
//! # Invariants
//! - Writes always replace the whole record; nothing is patched in place.

pub mod note_ledger;
pub mod profile_store;
