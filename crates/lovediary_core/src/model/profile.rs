//! Partner profile record.
//!
//! # Responsibility
//! - Hold the two partner display names that gate diary entry.
//! - Define the persisted JSON shape of the profile record.
//!
//! # Invariants
//! - Missing or `null` names read back as empty strings.
//! - A profile only enters the diary when both names contain non-whitespace.

use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// User-visible text shown when entry is attempted with a missing name.
pub const MISSING_NAMES_MESSAGE: &str = "Please enter both names.";

/// The pair of partner display names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Serialized as `partnerOne`; legacy records used `partner1`.
    #[serde(default, alias = "partner1", deserialize_with = "null_as_empty")]
    pub partner_one: String,
    /// Serialized as `partnerTwo`; legacy records used `partner2`.
    #[serde(default, alias = "partner2", deserialize_with = "null_as_empty")]
    pub partner_two: String,
}

/// Which side of the profile a validation message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partner {
    One,
    Two,
}

/// Presence-check failure for diary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileValidationError {
    /// At least this partner's name is empty or whitespace-only.
    MissingPartner(Partner),
}

impl ProfileValidationError {
    /// Message the UI shows in its blocking alert.
    pub fn user_message(&self) -> &'static str {
        MISSING_NAMES_MESSAGE
    }
}

impl Display for ProfileValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPartner(Partner::One) => write!(f, "partner one name is missing"),
            Self::MissingPartner(Partner::Two) => write!(f, "partner two name is missing"),
        }
    }
}

impl Error for ProfileValidationError {}

impl Profile {
    pub fn new(partner_one: impl Into<String>, partner_two: impl Into<String>) -> Self {
        Self {
            partner_one: partner_one.into(),
            partner_two: partner_two.into(),
        }
    }

    /// Profile with both names empty.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.partner_one.is_empty() && self.partner_two.is_empty()
    }

    /// Checks that both names are present before a diary session starts.
    ///
    /// Names are checked, not trimmed: the stored value keeps what the user typed.
    pub fn validate_for_entry(&self) -> Result<(), ProfileValidationError> {
        if self.partner_one.trim().is_empty() {
            return Err(ProfileValidationError::MissingPartner(Partner::One));
        }
        if self.partner_two.trim().is_empty() {
            return Err(ProfileValidationError::MissingPartner(Partner::Two));
        }
        Ok(())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::{Partner, Profile, ProfileValidationError};

    #[test]
    fn validate_rejects_blank_names() {
        let err = Profile::new("", "Sam").validate_for_entry().unwrap_err();
        assert_eq!(err, ProfileValidationError::MissingPartner(Partner::One));

        let err = Profile::new("Ann", "   ").validate_for_entry().unwrap_err();
        assert_eq!(err, ProfileValidationError::MissingPartner(Partner::Two));
        assert_eq!(err.user_message(), "Please enter both names.");

        assert!(Profile::new("Ann", "Sam").validate_for_entry().is_ok());
    }

    #[test]
    fn json_uses_camel_case_and_reads_legacy_keys() {
        let json = serde_json::to_string(&Profile::new("Ann", "Sam")).unwrap();
        assert_eq!(json, r#"{"partnerOne":"Ann","partnerTwo":"Sam"}"#);

        let legacy: Profile = serde_json::from_str(r#"{"partner1":"Ann","partner2":null}"#).unwrap();
        assert_eq!(legacy, Profile::new("Ann", ""));

        let partial: Profile = serde_json::from_str("{}").unwrap();
        assert!(partial.is_empty());
    }
}
