//! Two-step confirmation for destructive actions.

/// Dialog text for a confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: &'static str,
    pub message: &'static str,
    pub cancel_label: &'static str,
    pub confirm_label: &'static str,
}

/// Prompt shown before the profile record is deleted.
pub const PROFILE_RESET_PROMPT: ConfirmPrompt = ConfirmPrompt {
    title: "Reset",
    message: "Are you sure? This will remove all diary entries.",
    cancel_label: "Cancel",
    confirm_label: "OK",
};

/// Prompt shown before every note is deleted.
pub const NOTES_RESET_PROMPT: ConfirmPrompt = ConfirmPrompt {
    title: "Remove",
    message: "Are you sure? This will remove all notes.",
    cancel_label: "Cancel",
    confirm_label: "OK",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Idle,
    PendingConfirmation,
    Confirmed,
    Cancelled,
}

/// `Idle -> PendingConfirmation -> Confirmed | Cancelled`.
///
/// `confirm` only succeeds from `PendingConfirmation`, so a destructive
/// action can never run without a preceding `request`.
#[derive(Debug, Clone)]
pub struct ResetGate {
    prompt: ConfirmPrompt,
    state: GateState,
}

impl ResetGate {
    pub fn new(prompt: ConfirmPrompt) -> Self {
        Self {
            prompt,
            state: GateState::Idle,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn prompt(&self) -> &ConfirmPrompt {
        &self.prompt
    }

    pub fn is_pending(&self) -> bool {
        self.state == GateState::PendingConfirmation
    }

    /// Opens the prompt and returns its text.
    pub fn request(&mut self) -> &ConfirmPrompt {
        self.state = GateState::PendingConfirmation;
        &self.prompt
    }

    /// Returns `true` when a pending prompt was dismissed.
    pub fn cancel(&mut self) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.state = GateState::Cancelled;
        true
    }

    /// Returns `true` when a pending prompt was confirmed.
    pub fn confirm(&mut self) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.state = GateState::Confirmed;
        true
    }
}
