use super::NOT_AVAILABLE;
use crate::{
    domain::{ContactEmail, ContactName, DesiredPlan, NewWaitlistSignup, SubmissionStatus},
    supabase_client::SupabaseClient,
};
use serde::{Deserialize, Serialize};

pub const MESSAGE_SENT: &str = "Message sent successfully! We will get back to you soon.";
pub const MESSAGE_FAILED: &str = "Failed to send message. Please try again later.";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    // Contact messages share the waitlist table, filed under the `contact` plan.
    fn parse(&self) -> Result<NewWaitlistSignup, &'static str> {
        let name = ContactName::parse(self.name.clone())
            .map_err(|_| "Please enter your name.")?;
        let email = ContactEmail::parse(self.email.clone())
            .map_err(|_| "Please enter a valid email address.")?;
        let message = self.message.trim();
        if message.is_empty() {
            return Err("Please enter a message.");
        }

        Ok(NewWaitlistSignup {
            name,
            email,
            desired_plan: DesiredPlan::Contact,
            marketing_consent: true,
            message: Some(message.to_string()),
        })
    }
}

#[derive(Debug)]
pub enum ContactField {
    Name(String),
    Email(String),
    Message(String),
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ContactForm {
    draft: ContactDraft,
    status: SubmissionStatus,
    error_message: Option<String>,
}

impl ContactForm {
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn update_field(&mut self, field: ContactField) {
        match field {
            ContactField::Name(name) => self.draft.name = name,
            ContactField::Email(email) => self.draft.email = email,
            ContactField::Message(message) => self.draft.message = message,
        }
    }

    #[tracing::instrument(name = "Submitting contact form", skip_all)]
    pub async fn submit(&mut self, client: Option<&SupabaseClient>) {
        let Some(client) = client else {
            tracing::warn!("Hosted database is not configured");
            self.fail(NOT_AVAILABLE);
            return;
        };

        if self.status == SubmissionStatus::Submitting {
            return;
        }

        self.status = SubmissionStatus::Submitting;
        self.error_message = None;

        let message = match self.draft.parse() {
            Ok(message) => message,
            Err(e) => {
                self.fail(e);
                return;
            }
        };

        match client.insert_waitlist_signup(&message).await {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.draft = ContactDraft::default();
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Contact form submission failed"
                );
                self.fail(MESSAGE_FAILED);
            }
        }
    }

    fn fail(&mut self, message: &str) {
        self.status = SubmissionStatus::Error;
        self.error_message = Some(message.into());
    }
}
