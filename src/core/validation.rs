//! Local form validation.
//!
//! Every rule here runs before any network call, so obviously invalid input
//! never costs a round-trip. The forms map these errors to per-field
//! messages.

/// Minimum password length for signup and login.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Contact numbers are exactly this many digits.
pub const CONTACT_NUMBER_LENGTH: usize = 10;

/// A field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Contact number must be exactly {expected} digits")]
    InvalidContactNumber { expected: usize },
}

/// Field names used by [`ValidationError::Required`].
pub mod fields {
    pub const EMAIL: &str = "Email";
    pub const PASSWORD: &str = "Password";
    pub const CONFIRM_PASSWORD: &str = "Password confirmation";
    pub const FULL_NAME: &str = "Full name";
    pub const COMPANY_NAME: &str = "Company name";
    pub const INSTITUTE_NAME: &str = "Institute name";
    pub const AISHE_CODE: &str = "AISHE code";
    pub const CONTACT_NUMBER: &str = "Contact number";
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(fields::EMAIL))
    } else if !value.contains('@') || !value.contains('.') {
        Err(ValidationError::InvalidEmail)
    } else {
        Ok(())
    }
}

pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Required(fields::PASSWORD))
    } else if value.len() < MIN_PASSWORD_LENGTH {
        Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        })
    } else {
        Ok(())
    }
}

pub fn validate_confirm_password(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if confirm.is_empty() {
        Err(ValidationError::Required(fields::CONFIRM_PASSWORD))
    } else if password != confirm {
        Err(ValidationError::PasswordMismatch)
    } else {
        Ok(())
    }
}

/// Required, non-blank text field.
pub fn validate_required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(())
    }
}

/// Exactly ten ASCII digits, nothing else.
pub fn validate_contact_number(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(fields::CONTACT_NUMBER))
    } else if value.len() != CONTACT_NUMBER_LENGTH || !value.chars().all(|c| c.is_ascii_digit()) {
        Err(ValidationError::InvalidContactNumber {
            expected: CONTACT_NUMBER_LENGTH,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_required() {
        assert_eq!(
            validate_email(""),
            Err(ValidationError::Required(fields::EMAIL))
        );
        assert_eq!(
            validate_email("   "),
            Err(ValidationError::Required(fields::EMAIL))
        );
    }

    #[test]
    fn test_email_shape() {
        assert_eq!(
            validate_email("not-an-email"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(validate_email("a@b"), Err(ValidationError::InvalidEmail));
        assert!(validate_email("a@b.com").is_ok());
    }

    #[test]
    fn test_password_length() {
        assert_eq!(
            validate_password(""),
            Err(ValidationError::Required(fields::PASSWORD))
        );
        assert_eq!(
            validate_password("short"),
            Err(ValidationError::PasswordTooShort { min: 8 })
        );
        assert!(validate_password("longenough").is_ok());
    }

    #[test]
    fn test_confirm_password() {
        assert!(validate_confirm_password("password1", "password1").is_ok());
        assert_eq!(
            validate_confirm_password("password1", "password2"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            validate_confirm_password("password1", ""),
            Err(ValidationError::Required(fields::CONFIRM_PASSWORD))
        );
    }

    #[test]
    fn test_contact_number_exact_ten_digits() {
        assert_eq!(
            validate_contact_number("12345"),
            Err(ValidationError::InvalidContactNumber { expected: 10 })
        );
        assert_eq!(
            validate_contact_number("98765432101"),
            Err(ValidationError::InvalidContactNumber { expected: 10 })
        );
        assert_eq!(
            validate_contact_number("987654321a"),
            Err(ValidationError::InvalidContactNumber { expected: 10 })
        );
        assert!(validate_contact_number("9876543210").is_ok());
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(
            validate_required(fields::COMPANY_NAME, "  "),
            Err(ValidationError::Required(fields::COMPANY_NAME))
        );
        assert!(validate_required(fields::COMPANY_NAME, "Acme").is_ok());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::Required(fields::AISHE_CODE).to_string(),
            "AISHE code is required"
        );
        assert_eq!(
            ValidationError::PasswordTooShort { min: 8 }.to_string(),
            "Password must be at least 8 characters"
        );
        assert_eq!(
            ValidationError::InvalidContactNumber { expected: 10 }.to_string(),
            "Contact number must be exactly 10 digits"
        );
    }
}
