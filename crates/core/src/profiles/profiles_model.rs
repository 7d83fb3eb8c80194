//! Profile domain models for team members.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Role of a team member. Gates which mutations a caller may attempt;
/// checked server-side on every privileged request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Agent,
    #[default]
    Viewer,
}

impl Role {
    pub fn as_db_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Agent => "agent",
            Role::Viewer => "viewer",
        }
    }

    pub fn from_db_str(value: &str) -> Result<Self> {
        match value {
            "admin" => Ok(Role::Admin),
            "agent" => Ok(Role::Agent),
            "viewer" => Ok(Role::Viewer),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown role '{other}'"
            )))),
        }
    }
}

/// Domain model representing a team member's profile.
///
/// The password hash never leaves the storage layer; this model carries
/// only displayable fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    /// Set on admin invite; the original provider confirmed invited emails
    /// immediately.
    pub email_confirmed: bool,
    pub created_at: NaiveDateTime,
}

fn validate_email(email: &str) -> Result<()> {
    let trimmed = email.trim();
    // Boundary check only; deliverability is the mail server's problem.
    let well_formed = trimmed.len() >= 3
        && trimmed.contains('@')
        && !trimmed.starts_with('@')
        && !trimmed.ends_with('@')
        && !trimmed.contains(char::is_whitespace);
    if !well_formed {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Invalid email address '{trimmed}'"
        ))));
    }
    Ok(())
}

/// Input model for an admin inviting a new team member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default)]
    pub role: Role,
    pub phone: Option<String>,
}

impl NewProfile {
    pub fn validate(&self) -> Result<()> {
        validate_email(&self.email)?;
        if self.full_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "fullName".to_string(),
            )));
        }
        if self.password.len() < 8 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Password must be at least 8 characters".to_string(),
            )));
        }
        Ok(())
    }
}

/// Self-service profile edit: name, phone and avatar only.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
}

impl ProfileUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(ref name) = self.full_name {
            if name.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Full name cannot be empty".to_string(),
                )));
            }
        }
        Ok(())
    }
}

/// Admin-only profile mutation: role changes, email changes and password
/// resets.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfileUpdate {
    pub role: Option<Role>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    /// New password to set; hashed by the caller before it reaches storage.
    pub password: Option<String>,
}

impl AdminProfileUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(ref email) = self.email {
            validate_email(email)?;
        }
        if let Some(ref password) = self.password {
            if password.len() < 8 {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Password must be at least 8 characters".to_string(),
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invite() -> NewProfile {
        NewProfile {
            id: None,
            email: "agent@brickdesk.io".to_string(),
            password: "hunter2hunter2".to_string(),
            full_name: "Marta Lopez".to_string(),
            role: Role::Agent,
            phone: None,
        }
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::from_str::<Role>("\"viewer\"").unwrap(), Role::Viewer);
    }

    #[test]
    fn default_role_is_viewer() {
        assert_eq!(Role::default(), Role::Viewer);
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for bad in ["", "no-at-sign", "@leading", "trailing@", "sp ace@x.io"] {
            let mut p = invite();
            p.email = bad.to_string();
            assert!(p.validate().is_err(), "expected '{bad}' to be rejected");
        }
    }

    #[test]
    fn short_passwords_are_rejected() {
        let mut p = invite();
        p.password = "short".to_string();
        assert!(p.validate().is_err());
    }

    #[test]
    fn valid_invite_passes() {
        assert!(invite().validate().is_ok());
    }
}
