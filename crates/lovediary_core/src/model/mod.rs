//! Domain model for the couple's diary.
//!
//! # Responsibility
//! - Define the persisted records (`Profile`, `Note`) and their JSON shapes.
//! - Define the transient editing state (`NoteDraft`, `ResetGate`).
//!
//! # Invariants
//! - Notes keep creation order; nothing here sorts by date.
//! - Drafts are never persisted on their own.

pub mod clock;
pub mod confirmation;
pub mod draft;
pub mod note;
pub mod profile;
