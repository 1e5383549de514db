//! Two-step sign-up form: identity first, then credentials.

use log::debug;

use crate::auth::{AuthError, RegistrationFields};
use crate::validation::{self, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStep {
    /// Name and email
    Identity,
    /// Password, confirmation and terms agreement
    Credentials,
    Submitted,
}

impl RegistrationStep {
    /// 1-based number for the progress indicator
    pub fn number(&self) -> u8 {
        match self {
            RegistrationStep::Identity => 1,
            RegistrationStep::Credentials => 2,
            RegistrationStep::Submitted => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationFlow {
    pub fields: RegistrationFields,
    step: RegistrationStep,
    error: Option<String>,
}

impl Default for RegistrationFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationFlow {
    pub fn new() -> Self {
        Self {
            fields: RegistrationFields::default(),
            step: RegistrationStep::Identity,
            error: None,
        }
    }

    pub fn step(&self) -> RegistrationStep {
        self.step
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Identity -> Credentials when name and email are acceptable
    pub fn next(&mut self) -> bool {
        if self.step != RegistrationStep::Identity {
            return false;
        }
        match self.validate_identity() {
            Ok(()) => {
                self.error = None;
                self.step = RegistrationStep::Credentials;
                debug!("Registration advanced to step 2");
                true
            }
            Err(e) => {
                self.error = Some(e.to_string());
                false
            }
        }
    }

    /// Credentials -> Identity, keeping everything typed so far
    pub fn back(&mut self) -> bool {
        if self.step != RegistrationStep::Credentials {
            return false;
        }
        self.error = None;
        self.step = RegistrationStep::Identity;
        true
    }

    /// Credentials -> Submitted when the credentials are acceptable and
    /// `register` accepts the completed fields. Returns what `register` did.
    pub fn submit<T, F>(&mut self, register: F) -> Option<T>
    where
        F: FnOnce(&RegistrationFields) -> Result<T, AuthError>,
    {
        if self.step != RegistrationStep::Credentials {
            return None;
        }
        if let Err(e) = self.validate_credentials() {
            self.error = Some(e.to_string());
            return None;
        }

        match register(&self.fields) {
            Ok(registered) => {
                self.error = None;
                self.step = RegistrationStep::Submitted;
                Some(registered)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    fn validate_identity(&self) -> Result<(), ValidationError> {
        validation::validate_name(&self.fields.name)?;
        validation::validate_email(&self.fields.email)
    }

    fn validate_credentials(&self) -> Result<(), ValidationError> {
        validation::validate_new_password(&self.fields.password, &self.fields.confirm_password)?;
        if !self.fields.agree_terms {
            return Err(ValidationError::TermsNotAccepted);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{create_account, AuthSession};

    fn at_step_two() -> RegistrationFlow {
        let mut flow = RegistrationFlow::new();
        flow.fields.name = "Sam".to_string();
        flow.fields.email = "a@b.com".to_string();
        assert!(flow.next());
        flow
    }

    #[test]
    fn test_empty_name_never_advances() {
        let mut flow = RegistrationFlow::new();
        flow.fields.email = "a@b.com".to_string();

        assert!(!flow.next());
        assert_eq!(flow.step(), RegistrationStep::Identity);
        assert_eq!(flow.error(), Some("Please enter your name"));

        flow.fields.name = "   ".to_string();
        assert!(!flow.next());
        assert_eq!(flow.step(), RegistrationStep::Identity);
    }

    #[test]
    fn test_email_pattern_gates_step_one() {
        let mut flow = RegistrationFlow::new();
        flow.fields.name = "Sam".to_string();
        flow.fields.email = "not-an-email".to_string();
        assert!(!flow.next());
        assert_eq!(flow.step(), RegistrationStep::Identity);

        flow.fields.email = "a@b.com".to_string();
        assert!(flow.next());
        assert_eq!(flow.step(), RegistrationStep::Credentials);
        assert!(flow.error().is_none());
    }

    #[test]
    fn test_short_password_rejected() {
        let mut flow = at_step_two();
        flow.fields.password = "short".to_string();
        flow.fields.confirm_password = "short".to_string();
        flow.fields.agree_terms = true;

        assert!(flow.submit(create_account).is_none());
        assert_eq!(flow.step(), RegistrationStep::Credentials);
        assert_eq!(flow.error(), Some("Password must be at least 8 characters"));
    }

    #[test]
    fn test_valid_credentials_submit() {
        let mut session = AuthSession::new();
        let mut flow = at_step_two();
        flow.fields.password = "longenough1".to_string();
        flow.fields.confirm_password = "longenough1".to_string();
        flow.fields.agree_terms = true;

        let user = flow.submit(|fields| session.register(fields)).unwrap();

        assert_eq!(flow.step(), RegistrationStep::Submitted);
        assert_eq!(user.email, "a@b.com");
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_terms_and_confirmation_required() {
        let mut flow = at_step_two();
        flow.fields.password = "longenough1".to_string();
        flow.fields.confirm_password = "longenough1".to_string();
        assert!(flow.submit(create_account).is_none());
        assert_eq!(flow.error(), Some("You must agree to the terms of service"));

        flow.fields.agree_terms = true;
        flow.fields.confirm_password = "longenough2".to_string();
        assert!(flow.submit(create_account).is_none());
        assert_eq!(flow.error(), Some("Passwords do not match"));
        assert_eq!(flow.step(), RegistrationStep::Credentials);
    }

    #[test]
    fn test_register_failure_keeps_step() {
        let mut flow = RegistrationFlow::new();
        flow.fields.name = "Alex".to_string();
        flow.fields.email = "demo@nexclaw.io".to_string();
        assert!(flow.next());
        flow.fields.password = "longenough1".to_string();
        flow.fields.confirm_password = "longenough1".to_string();
        flow.fields.agree_terms = true;

        assert!(flow.submit(create_account).is_none());
        assert_eq!(flow.step(), RegistrationStep::Credentials);
        assert_eq!(flow.error(), Some("An account with this email already exists"));
    }

    #[test]
    fn test_back_keeps_fields_and_clears_error() {
        let mut flow = at_step_two();
        flow.fields.password = "short".to_string();
        let _ = flow.submit(create_account);
        assert!(flow.error().is_some());

        assert!(flow.back());
        assert_eq!(flow.step(), RegistrationStep::Identity);
        assert!(flow.error().is_none());
        assert_eq!(flow.fields.name, "Sam");
        assert_eq!(flow.fields.password, "short");

        // Back from step one does nothing
        assert!(!flow.back());
    }

    #[test]
    fn test_actions_ignored_in_wrong_step() {
        let mut flow = RegistrationFlow::new();
        assert!(flow.submit(create_account).is_none());
        assert_eq!(flow.step(), RegistrationStep::Identity);

        let mut flow = at_step_two();
        assert!(!flow.next());
        assert_eq!(flow.step(), RegistrationStep::Credentials);
    }
}
