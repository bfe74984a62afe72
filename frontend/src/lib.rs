//! Scroll tracking, program catalog and form handling for the academy site.
//! Nothing in here touches the DOM; the Yew binary feeds it browser events.

pub mod config;
pub mod content;

pub mod scroll {
    pub mod section_catalog;
    pub mod tracker;

    pub use section_catalog::{Section, SectionCatalog};
    pub use tracker::{Direction, ScrollProgressTracker, ScrollState, Subscription};
}

pub mod catalog {
    pub mod offering;
    pub mod filterable;

    pub use filterable::{ComparisonToggle, FilterableCatalog};
    pub use offering::{academy_programs, FilterTag, OfferingRecord};
}

pub mod forms {
    pub mod validation;
    pub mod submission;

    pub use submission::{prepare, submit, PreparedSubmission, SubmissionReceipt};
    pub use validation::{
        ContactMessage, EnrollmentRequest, FormError, LoginRequest, NewsletterSignup,
        SignUpRequest, Submission, SubmissionKind,
    };
}
