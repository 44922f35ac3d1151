//! Screen-level use-cases.
//!
//! # Responsibility
//! - Sequence user actions against the stores.
//! - Decide how storage failures degrade: logged, never surfaced.
//!
//! # Invariants
//! - Only validation failures reach the caller as errors.

use crate::model::profile::ProfileValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod diary_session;
pub mod diary_view;
pub mod home_session;

/// Rejected attempt to start a diary session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    MissingNames(ProfileValidationError),
}

impl EntryError {
    /// Text for the blocking alert shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingNames(err) => err.user_message(),
        }
    }
}

impl Display for EntryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingNames(err) => write!(f, "diary entry rejected: {err}"),
        }
    }
}

impl Error for EntryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingNames(err) => Some(err),
        }
    }
}

impl From<ProfileValidationError> for EntryError {
    fn from(value: ProfileValidationError) -> Self {
        Self::MissingNames(value)
    }
}
