use std::cell::Cell;

use chrono::{DateTime, Utc};
use gloo_timers::future::TimeoutFuture;
use log::info;

use crate::config;
use super::validation::{FormError, Submission, SubmissionKind};

thread_local! {
    static NEXT_REFERENCE: Cell<u32> = Cell::new(1);
}

fn next_reference() -> String {
    NEXT_REFERENCE.with(|next| {
        let n = next.get();
        next.set(n.wrapping_add(1));
        format!("CA-{:05}", n)
    })
}

/// Validated payload, ready to be "sent".
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSubmission {
    pub kind: SubmissionKind,
    pub reference: String,
    pub payload: String,
    pub confirmation: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub kind: SubmissionKind,
    pub reference: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl PreparedSubmission {
    pub fn into_receipt(self, submitted_at: DateTime<Utc>) -> SubmissionReceipt {
        SubmissionReceipt {
            kind: self.kind,
            reference: self.reference,
            message: self.confirmation,
            submitted_at,
        }
    }
}

pub fn prepare<T: Submission>(form: &T) -> Result<PreparedSubmission, FormError> {
    form.validate()?;
    let payload =
        serde_json::to_string(form).map_err(|e| FormError::Encoding(e.to_string()))?;
    Ok(PreparedSubmission {
        kind: T::KIND,
        reference: next_reference(),
        payload,
        confirmation: form.confirmation(),
    })
}

/// Validates the form, logs it and resolves after a fake network delay.
/// Nothing leaves the browser.
pub async fn submit<T: Submission>(form: T) -> Result<SubmissionReceipt, FormError> {
    let prepared = prepare(&form)?;
    info!(
        "Submitting {:?} {}: {}",
        prepared.kind, prepared.reference, prepared.payload
    );
    TimeoutFuture::new(config::submission_delay_ms()).await;
    let receipt = prepared.into_receipt(Utc::now());
    info!("{} accepted at {}", receipt.reference, receipt.submitted_at.to_rfc3339());
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validation::{NewsletterSignup, SignUpRequest};
    use chrono::TimeZone;
    use serde::ser::{Error as _, Serialize, Serializer};

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("unsupported field"))
        }
    }

    impl Submission for Unencodable {
        const KIND: SubmissionKind = SubmissionKind::Contact;

        fn validate(&self) -> Result<(), FormError> {
            Ok(())
        }

        fn confirmation(&self) -> String {
            "unreachable".to_string()
        }
    }

    #[test]
    fn invalid_forms_are_not_prepared() {
        let form = NewsletterSignup { email: "broken".to_string() };
        assert_eq!(prepare(&form), Err(FormError::InvalidEmail));
    }

    #[test]
    fn references_are_sequential() {
        let form = NewsletterSignup { email: "fan@example.com".to_string() };
        let first = prepare(&form).unwrap();
        let second = prepare(&form).unwrap();
        assert_eq!(first.kind, SubmissionKind::Newsletter);
        assert!(first.reference.starts_with("CA-"));
        let n = |r: &str| r[3..].parse::<u32>().unwrap();
        assert_eq!(n(&second.reference), n(&first.reference) + 1);
        assert_eq!(first.payload, r#"{"email":"fan@example.com"}"#);
    }

    #[test]
    fn passwords_never_reach_the_log() {
        let form = SignUpRequest {
            name: "Dev".to_string(),
            email: "dev@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
            confirm_password: "hunter2hunter2".to_string(),
        };
        let prepared = prepare(&form).unwrap();
        assert!(!prepared.payload.contains("hunter2"));
        assert_eq!(prepared.confirmation, "Welcome to the academy, Dev!");
    }

    #[test]
    fn encoding_failure_is_reported() {
        match prepare(&Unencodable) {
            Err(FormError::Encoding(reason)) => assert!(reason.contains("unsupported field")),
            other => panic!("expected encoding error, got {:?}", other),
        }
    }

    #[test]
    fn receipt_carries_the_prepared_details() {
        let form = NewsletterSignup { email: "fan@example.com".to_string() };
        let prepared = prepare(&form).unwrap();
        let reference = prepared.reference.clone();
        let confirmation = prepared.confirmation.clone();
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();

        let receipt = prepared.into_receipt(at);
        assert_eq!(receipt.kind, SubmissionKind::Newsletter);
        assert_eq!(receipt.reference, reference);
        assert_eq!(receipt.message, confirmation);
        assert_eq!(receipt.submitted_at, at);
    }
}
