//! Session-scoped authentication state backed by the mock store.
//!
//! No credentials are checked against anything: a well-formed login always
//! succeeds, matching a seeded user by email when there is one.

use chrono::Utc;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::mock_data;
use crate::models::User;
use crate::validation::{self, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_terms: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("An account with this email already exists")]
    EmailTaken,
}

/// Validate login input and resolve the user it signs in as
pub fn authenticate(credentials: &Credentials) -> Result<User, AuthError> {
    validation::validate_email(&credentials.email)?;
    if credentials.password.is_empty() {
        return Err(ValidationError::EmptyPassword.into());
    }

    let email = credentials.email.trim();
    Ok(mock_data::find_user_by_email(email).unwrap_or_else(|| User {
        id: Uuid::new_v4().to_string(),
        name: name_from_email(email),
        email: email.to_string(),
        created_at: Utc::now().to_rfc3339(),
    }))
}

/// Validate registration input and construct the new user
pub fn create_account(fields: &RegistrationFields) -> Result<User, AuthError> {
    validation::validate_name(&fields.name)?;
    validation::validate_email(&fields.email)?;
    validation::validate_new_password(&fields.password, &fields.confirm_password)?;
    if !fields.agree_terms {
        return Err(ValidationError::TermsNotAccepted.into());
    }
    if mock_data::find_user_by_email(&fields.email).is_some() {
        return Err(AuthError::EmailTaken);
    }

    Ok(User {
        id: Uuid::new_v4().to_string(),
        name: fields.name.trim().to_string(),
        email: fields.email.trim().to_string(),
        created_at: Utc::now().to_rfc3339(),
    })
}

/// "jane.doe@x.io" -> "Jane Doe"
fn name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local
        .split(|c: char| c == '.' || c == '_' || c == '-' || c == '+')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Current user for the lifetime of the browser session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthSession {
    user: Option<User>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn login(&mut self, credentials: &Credentials) -> Result<User, AuthError> {
        match authenticate(credentials) {
            Ok(user) => {
                self.sign_in(user.clone());
                Ok(user)
            }
            Err(e) => {
                warn!("Login rejected: {}", e);
                Err(e)
            }
        }
    }

    pub fn register(&mut self, fields: &RegistrationFields) -> Result<User, AuthError> {
        match create_account(fields) {
            Ok(user) => {
                info!("Registered new user {}", user.id);
                self.sign_in(user.clone());
                Ok(user)
            }
            Err(e) => {
                warn!("Registration rejected: {}", e);
                Err(e)
            }
        }
    }

    /// Store an already-validated user, replacing any previous one
    pub fn sign_in(&mut self, user: User) {
        info!("Signed in as {} ({})", user.name, user.id);
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!("Signed out {}", user.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> RegistrationFields {
        RegistrationFields {
            name: "Sam Carter".to_string(),
            email: "sam@example.com".to_string(),
            password: "longenough1".to_string(),
            confirm_password: "longenough1".to_string(),
            agree_terms: true,
        }
    }

    #[test]
    fn test_login_with_seeded_user() {
        let mut session = AuthSession::new();
        let user = session
            .login(&Credentials {
                email: "demo@nexclaw.io".to_string(),
                password: "anything".to_string(),
            })
            .unwrap();

        assert_eq!(user.id, mock_data::DEMO_USER_ID);
        assert!(session.is_authenticated());
        assert_eq!(session.user(), Some(&user));
    }

    #[test]
    fn test_login_with_unknown_email_derives_user() {
        let user = authenticate(&Credentials {
            email: "jane.doe@example.com".to_string(),
            password: "pw".to_string(),
        })
        .unwrap();

        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.email, "jane.doe@example.com");
        assert!(Uuid::parse_str(&user.id).is_ok());
    }

    #[test]
    fn test_login_rejects_malformed_input() {
        let mut session = AuthSession::new();

        let result = session.login(&Credentials {
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
        });
        assert_eq!(result, Err(AuthError::Invalid(ValidationError::InvalidEmail)));

        let result = session.login(&Credentials {
            email: "a@b.com".to_string(),
            password: String::new(),
        });
        assert_eq!(result, Err(AuthError::Invalid(ValidationError::EmptyPassword)));

        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_register_success_and_logout() {
        let mut session = AuthSession::new();
        let user = session.register(&fields()).unwrap();

        assert_eq!(user.name, "Sam Carter");
        assert!(session.is_authenticated());

        session.logout();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());

        // Logging out twice is harmless
        session.logout();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_register_validation_failures() {
        let mut f = fields();
        f.confirm_password = "different1".to_string();
        assert_eq!(
            create_account(&f),
            Err(AuthError::Invalid(ValidationError::PasswordMismatch))
        );

        let mut f = fields();
        f.agree_terms = false;
        assert_eq!(
            create_account(&f),
            Err(AuthError::Invalid(ValidationError::TermsNotAccepted))
        );

        let mut f = fields();
        f.email = "demo@nexclaw.io".to_string();
        assert_eq!(create_account(&f), Err(AuthError::EmailTaken));
    }

    #[test]
    fn test_failed_register_keeps_existing_user() {
        let mut session = AuthSession::new();
        session.sign_in(mock_data::users().remove(0));

        let mut f = fields();
        f.name = String::new();
        assert!(session.register(&f).is_err());
        assert_eq!(session.user().map(|u| u.id.as_str()), Some(mock_data::DEMO_USER_ID));
    }

    #[test]
    fn test_name_from_email() {
        assert_eq!(name_from_email("jane.doe@x.io"), "Jane Doe");
        assert_eq!(name_from_email("bob@x.io"), "Bob");
        assert_eq!(name_from_email("a_b-c@x.io"), "A B C");
    }
}
