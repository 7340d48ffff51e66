use super::NOT_AVAILABLE;
use crate::{
    domain::{ContactEmail, ContactName, DesiredPlan, NewWaitlistSignup, SubmissionStatus},
    supabase_client::SupabaseClient,
};
use serde::{Deserialize, Serialize};

pub const DUPLICATE_EMAIL: &str = "This email is already on the waitlist.";
pub const SUBMISSION_FAILED: &str = "Something went wrong. Please try again.";
pub const WAITLIST_JOINED: &str =
    "Thanks for joining the waitlist! We'll notify you when these plans become available.";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct WaitlistDraft {
    pub name: String,
    pub email: String,
    pub desired_plan: String,
    pub marketing_consent: bool,
}

impl Default for WaitlistDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            desired_plan: DesiredPlan::default().to_string(),
            marketing_consent: false,
        }
    }
}

impl WaitlistDraft {
    fn parse(&self) -> Result<NewWaitlistSignup, &'static str> {
        let name = ContactName::parse(self.name.clone())
            .map_err(|_| "Please enter your full name.")?;
        let email = ContactEmail::parse(self.email.clone())
            .map_err(|_| "Please enter a valid email address.")?;
        let desired_plan =
            DesiredPlan::parse(self.desired_plan.clone()).map_err(|_| "Please choose a plan.")?;

        Ok(NewWaitlistSignup {
            name,
            email,
            desired_plan,
            marketing_consent: self.marketing_consent,
            message: None,
        })
    }
}

#[derive(Debug)]
pub enum WaitlistField {
    Name(String),
    Email(String),
    /// Either a selectable plan or the name of the pricing tile that was clicked.
    DesiredPlan(String),
    MarketingConsent(bool),
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct WaitlistForm {
    draft: WaitlistDraft,
    status: SubmissionStatus,
    error_message: Option<String>,
}

impl WaitlistForm {
    pub fn draft(&self) -> &WaitlistDraft {
        &self.draft
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn update_field(&mut self, field: WaitlistField) {
        match field {
            WaitlistField::Name(name) => self.draft.name = name,
            WaitlistField::Email(email) => self.draft.email = email,
            WaitlistField::DesiredPlan(plan) => self.draft.desired_plan = plan,
            WaitlistField::MarketingConsent(consent) => self.draft.marketing_consent = consent,
        }
    }

    #[tracing::instrument(
        name = "Submitting waitlist form",
        skip_all,
        fields(desired_plan = %self.draft.desired_plan)
    )]
    pub async fn submit(&mut self, client: Option<&SupabaseClient>) {
        let Some(client) = client else {
            tracing::warn!("Hosted database is not configured");
            self.fail(NOT_AVAILABLE);
            return;
        };

        if self.status == SubmissionStatus::Submitting {
            tracing::warn!("Waitlist form is already being submitted");
            return;
        }

        self.status = SubmissionStatus::Submitting;
        self.error_message = None;

        let signup = match self.draft.parse() {
            Ok(signup) => signup,
            Err(message) => {
                tracing::info!("Waitlist draft failed validation: {message}");
                self.fail(message);
                return;
            }
        };

        match client.insert_waitlist_signup(&signup).await {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.draft = WaitlistDraft::default();
            }
            Err(e) if e.is_duplicate_email() => {
                tracing::info!("Email is already on the waitlist");
                self.fail(DUPLICATE_EMAIL);
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to store waitlist signup"
                );
                self.fail(SUBMISSION_FAILED);
            }
        }
    }

    fn fail(&mut self, message: &str) {
        self.status = SubmissionStatus::Error;
        self.error_message = Some(message.into());
    }
}
