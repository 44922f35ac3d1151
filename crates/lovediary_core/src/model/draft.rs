//! Note-in-progress state held by a diary session.
//!
//! # Invariants
//! - The draft is folded into a note only on commit.
//! - Commit clears text and image but keeps the picked date.

use chrono::{DateTime, Utc};

/// Result of the host image picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePick {
    Picked(String),
    Cancelled,
}

/// Lifecycle of the draft between commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    /// Nothing typed or picked since the session opened.
    Empty,
    /// Text or image pending.
    Editing,
    /// A note was just added; fields are cleared.
    Committed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    content: String,
    date: DateTime<Utc>,
    image: Option<String>,
    committed: bool,
}

impl NoteDraft {
    /// Empty draft dated `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            content: String::new(),
            date: now,
            image: None,
            committed: false,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn state(&self) -> DraftState {
        if !self.content.is_empty() || self.image.is_some() {
            DraftState::Editing
        } else if self.committed {
            DraftState::Committed
        } else {
            DraftState::Empty
        }
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.committed = false;
    }

    /// Applies a date picker result; a dismissed picker yields `now`.
    pub fn pick_date(&mut self, picked: Option<DateTime<Utc>>, now: DateTime<Utc>) {
        self.date = picked.unwrap_or(now);
    }

    /// Applies an image picker result; a cancelled pick keeps the current image.
    pub fn apply_pick(&mut self, pick: ImagePick) {
        if let ImagePick::Picked(uri) = pick {
            self.image = Some(uri);
            self.committed = false;
        }
    }

    pub fn clear_after_commit(&mut self) {
        self.content.clear();
        self.image = None;
        self.committed = true;
    }
}
