use serde::{Deserialize, Serialize};

use crate::validation::{self, ValidationError, MIN_MESSAGE_LEN};

/// Contact page form input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// First failing field, in the order the form lays them out
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_name(&self.name)?;
        validation::validate_email(&self.email)?;
        if self.subject.trim().is_empty() {
            return Err(ValidationError::EmptySubject);
        }
        if self.message.trim().chars().count() < MIN_MESSAGE_LEN {
            return Err(ValidationError::MessageTooShort(MIN_MESSAGE_LEN));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            subject: "Enterprise plan".to_string(),
            message: "Do you support multisig?".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(form().validate(), Ok(()));
    }

    #[test]
    fn test_field_errors_in_order() {
        let mut f = form();
        f.name.clear();
        f.email = "bad".to_string();
        assert_eq!(f.validate(), Err(ValidationError::EmptyName));

        let mut f = form();
        f.email = "bad".to_string();
        assert_eq!(f.validate(), Err(ValidationError::InvalidEmail));

        let mut f = form();
        f.subject = "  ".to_string();
        assert_eq!(f.validate(), Err(ValidationError::EmptySubject));

        let mut f = form();
        f.message = "  hi there ".to_string();
        assert_eq!(f.validate(), Err(ValidationError::MessageTooShort(10)));
    }
}
