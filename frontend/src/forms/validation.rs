use serde::Serialize;
use thiserror::Error;

use crate::catalog::offering::academy_programs;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Age must be between {min} and {max}")]
    AgeOutOfRange { min: u8, max: u8 },
    #[error("Unknown program: {0}")]
    UnknownProgram(String),
    #[error("Could not encode form: {0}")]
    Encoding(String),
}

pub const MIN_MESSAGE_LEN: usize = 10;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_STUDENT_AGE: u8 = 5;
pub const MAX_STUDENT_AGE: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    Newsletter,
    Contact,
    Enrollment,
    SignUp,
    Login,
}

/// A form the site pretends to send somewhere.
pub trait Submission: Serialize {
    const KIND: SubmissionKind;

    fn validate(&self) -> Result<(), FormError>;

    /// Message shown once the fake request completes.
    fn confirmation(&self) -> String;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewsletterSignup {
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnrollmentRequest {
    pub student_name: String,
    pub age: u8,
    pub guardian_email: String,
    pub phone: String,
    pub program_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

fn required(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

pub fn is_valid_phone(phone: &str) -> bool {
    let phone = phone.trim();
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' '));
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    allowed && (7..=15).contains(&digits)
}

fn email(value: &str) -> Result<(), FormError> {
    required("Email", value)?;
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(FormError::InvalidEmail)
    }
}

impl Submission for NewsletterSignup {
    const KIND: SubmissionKind = SubmissionKind::Newsletter;

    fn validate(&self) -> Result<(), FormError> {
        email(&self.email)
    }

    fn confirmation(&self) -> String {
        "Thanks for subscribing! Academy news will land in your inbox.".to_string()
    }
}

impl Submission for ContactMessage {
    const KIND: SubmissionKind = SubmissionKind::Contact;

    fn validate(&self) -> Result<(), FormError> {
        required("Name", &self.name)?;
        email(&self.email)?;
        if let Some(phone) = self.phone.as_deref().filter(|p| !p.trim().is_empty()) {
            if !is_valid_phone(phone) {
                return Err(FormError::InvalidPhone);
            }
        }
        required("Subject", &self.subject)?;
        if self.message.trim().chars().count() < MIN_MESSAGE_LEN {
            return Err(FormError::TooShort { field: "Message", min: MIN_MESSAGE_LEN });
        }
        Ok(())
    }

    fn confirmation(&self) -> String {
        format!("Thanks {}, we'll get back to you within 24 hours.", self.name.trim())
    }
}

impl Submission for EnrollmentRequest {
    const KIND: SubmissionKind = SubmissionKind::Enrollment;

    fn validate(&self) -> Result<(), FormError> {
        required("Student name", &self.student_name)?;
        if !(MIN_STUDENT_AGE..=MAX_STUDENT_AGE).contains(&self.age) {
            return Err(FormError::AgeOutOfRange { min: MIN_STUDENT_AGE, max: MAX_STUDENT_AGE });
        }
        email(&self.guardian_email)?;
        required("Phone", &self.phone)?;
        if !is_valid_phone(&self.phone) {
            return Err(FormError::InvalidPhone);
        }
        required("Program", &self.program_id)?;
        if !academy_programs().iter().any(|p| p.id == self.program_id) {
            return Err(FormError::UnknownProgram(self.program_id.clone()));
        }
        Ok(())
    }

    fn confirmation(&self) -> String {
        let program = academy_programs()
            .into_iter()
            .find(|p| p.id == self.program_id)
            .map(|p| p.title)
            .unwrap_or("the program");
        format!(
            "{} is enrolled in {}. Our coaches will call to schedule a trial session.",
            self.student_name.trim(),
            program
        )
    }
}

impl Submission for SignUpRequest {
    const KIND: SubmissionKind = SubmissionKind::SignUp;

    fn validate(&self) -> Result<(), FormError> {
        required("Name", &self.name)?;
        email(&self.email)?;
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::TooShort { field: "Password", min: MIN_PASSWORD_LEN });
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }

    fn confirmation(&self) -> String {
        format!("Welcome to the academy, {}!", self.name.trim())
    }
}

impl Submission for LoginRequest {
    const KIND: SubmissionKind = SubmissionKind::Login;

    fn validate(&self) -> Result<(), FormError> {
        email(&self.email)?;
        required("Password", &self.password)
    }

    fn confirmation(&self) -> String {
        "Signed in. Welcome back!".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactMessage {
        ContactMessage {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: None,
            subject: "Trial session".to_string(),
            message: "Can my daughter join on Saturday?".to_string(),
        }
    }

    fn enrollment() -> EnrollmentRequest {
        EnrollmentRequest {
            student_name: "Rohan".to_string(),
            age: 11,
            guardian_email: "parent@example.in".to_string(),
            phone: "+91 98765 43210".to_string(),
            program_id: "junior-foundation".to_string(),
        }
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("coach@academy.co.in"));
        assert!(is_valid_email("  padded@example.com "));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("us er@example.com"));
    }

    #[test]
    fn phone_shapes() {
        assert!(is_valid_phone("+91 98765 43210"));
        assert!(is_valid_phone("(022) 555-1234"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("call me maybe"));
    }

    #[test]
    fn newsletter_needs_email() {
        let empty = NewsletterSignup::default();
        assert_eq!(empty.validate(), Err(FormError::Missing("Email")));
        let bad = NewsletterSignup { email: "nope".to_string() };
        assert_eq!(bad.validate(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn contact_rules() {
        assert_eq!(contact().validate(), Ok(()));

        let mut short = contact();
        short.message = "hi".to_string();
        assert_eq!(
            short.validate(),
            Err(FormError::TooShort { field: "Message", min: MIN_MESSAGE_LEN })
        );

        let mut blank_phone = contact();
        blank_phone.phone = Some("   ".to_string());
        assert_eq!(blank_phone.validate(), Ok(()));

        let mut bad_phone = contact();
        bad_phone.phone = Some("12".to_string());
        assert_eq!(bad_phone.validate(), Err(FormError::InvalidPhone));
    }

    #[test]
    fn enrollment_rules() {
        assert_eq!(enrollment().validate(), Ok(()));
        assert!(enrollment().confirmation().contains("Junior Foundation"));

        let mut young = enrollment();
        young.age = 3;
        assert!(matches!(young.validate(), Err(FormError::AgeOutOfRange { .. })));

        let mut unknown = enrollment();
        unknown.program_id = "golf".to_string();
        assert_eq!(unknown.validate(), Err(FormError::UnknownProgram("golf".to_string())));
    }

    #[test]
    fn sign_up_rules() {
        let mut req = SignUpRequest {
            name: "Dev".to_string(),
            email: "dev@example.com".to_string(),
            password: "longenough".to_string(),
            confirm_password: "longenough".to_string(),
        };
        assert_eq!(req.validate(), Ok(()));
        req.confirm_password = "different".to_string();
        assert_eq!(req.validate(), Err(FormError::PasswordMismatch));
        req.password = "short".to_string();
        assert!(matches!(req.validate(), Err(FormError::TooShort { field: "Password", .. })));
    }

    #[test]
    fn login_needs_password() {
        let req = LoginRequest { email: "dev@example.com".to_string(), password: String::new() };
        assert_eq!(req.validate(), Err(FormError::Missing("Password")));
    }

    #[test]
    fn error_messages_read_well() {
        assert_eq!(FormError::Missing("Name").to_string(), "Name is required");
        assert_eq!(
            FormError::AgeOutOfRange { min: 5, max: 60 }.to_string(),
            "Age must be between 5 and 60"
        );
    }
}
