//! Form controllers shared by every page.
//!
//! A controller owns one form's draft, its submission status and the message
//! shown to the user. Field updates are plain local mutations; `submit` is the
//! only operation that talks to the hosted database, and it does so at most
//! once per call.

mod contact;
mod signup;
mod waitlist;

pub use contact::{ContactDraft, ContactField, ContactForm, MESSAGE_FAILED, MESSAGE_SENT};
pub use signup::{
    SignupDraft, SignupField, SignupOutcome, SignupStep, SignupWizard, MISSING_ACCOUNT_FIELDS,
    PASSWORDS_DO_NOT_MATCH, SIGNUP_NOT_AVAILABLE, SUBSCRIPTION_CREATED,
};
pub use waitlist::{
    WaitlistDraft, WaitlistField, WaitlistForm, DUPLICATE_EMAIL, SUBMISSION_FAILED,
    WAITLIST_JOINED,
};

pub const NOT_AVAILABLE: &str = "Database connection not available. Please try again later.";
