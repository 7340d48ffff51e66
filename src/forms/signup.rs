use crate::{domain::NewAccount, supabase_client::SupabaseClient};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const MISSING_ACCOUNT_FIELDS: &str = "Please fill in all required fields.";
pub const SIGNUP_NOT_AVAILABLE: &str = "Database connection not available";
pub const SUBSCRIPTION_CREATED: &str = "Subscription created successfully! \
    In a real application, this would process the payment and create your subscription.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum SignupStep {
    #[default]
    CollectingAccount,
    CollectingPayment,
}

/// Everything typed into the two signup steps.
///
/// Passwords and card data are never serialized, so they do not outlive the
/// request that carried them.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SignupDraft {
    pub email: String,
    #[serde(skip, default = "empty_secret")]
    pub password: Secret<String>,
    #[serde(skip, default = "empty_secret")]
    pub confirm_password: Secret<String>,
    pub full_name: String,
    #[serde(skip, default = "empty_secret")]
    pub card_number: Secret<String>,
    pub expiry_date: String,
    #[serde(skip, default = "empty_secret")]
    pub cvv: Secret<String>,
    pub billing_address: String,
}

fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}

impl Default for SignupDraft {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: empty_secret(),
            confirm_password: empty_secret(),
            full_name: String::new(),
            card_number: empty_secret(),
            expiry_date: String::new(),
            cvv: empty_secret(),
            billing_address: String::new(),
        }
    }
}

impl SignupDraft {
    fn passwords_match(&self) -> bool {
        self.password.expose_secret() == self.confirm_password.expose_secret()
    }

    fn account(&self) -> Option<NewAccount> {
        let email = self.email.trim();
        let full_name = self.full_name.trim();

        if email.is_empty() || full_name.is_empty() || self.password.expose_secret().is_empty() {
            return None;
        }

        Some(NewAccount {
            email: email.to_string(),
            password: self.password.clone(),
            full_name: full_name.to_string(),
        })
    }
}

#[derive(Debug)]
pub enum SignupField {
    Email(String),
    Password(Secret<String>),
    ConfirmPassword(Secret<String>),
    FullName(String),
    CardNumber(Secret<String>),
    ExpiryDate(String),
    Cvv(Secret<String>),
    BillingAddress(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupOutcome {
    Stayed,
    Advanced,
    Completed,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SignupWizard {
    step: SignupStep,
    draft: SignupDraft,
    loading: bool,
    error: Option<String>,
}

impl SignupWizard {
    pub fn step(&self) -> SignupStep {
        self.step
    }

    pub fn draft(&self) -> &SignupDraft {
        &self.draft
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn update_field(&mut self, field: SignupField) {
        let draft = &mut self.draft;
        match field {
            SignupField::Email(email) => draft.email = email,
            SignupField::Password(password) => draft.password = password,
            SignupField::ConfirmPassword(password) => draft.confirm_password = password,
            SignupField::FullName(full_name) => draft.full_name = full_name,
            SignupField::CardNumber(card_number) => draft.card_number = card_number,
            SignupField::ExpiryDate(expiry_date) => draft.expiry_date = expiry_date,
            SignupField::Cvv(cvv) => draft.cvv = cvv,
            SignupField::BillingAddress(address) => draft.billing_address = address,
        }
    }

    #[tracing::instrument(name = "Submitting signup step", skip_all, fields(step = ?self.step))]
    pub async fn submit(&mut self, client: Option<&SupabaseClient>) -> SignupOutcome {
        if self.loading {
            return SignupOutcome::Stayed;
        }

        self.error = None;
        self.loading = true;

        let outcome = match self.step {
            SignupStep::CollectingAccount => match self.create_account(client).await {
                Ok(()) => {
                    self.step = SignupStep::CollectingPayment;
                    SignupOutcome::Advanced
                }
                Err(message) => {
                    self.error = Some(message);
                    SignupOutcome::Stayed
                }
            },
            SignupStep::CollectingPayment => {
                // No payment processor is wired in; the step always succeeds.
                tracing::info!("Payment step completed without charging");
                SignupOutcome::Completed
            }
        };

        self.loading = false;
        outcome
    }

    async fn create_account(&self, client: Option<&SupabaseClient>) -> Result<(), String> {
        if !self.draft.passwords_match() {
            return Err(PASSWORDS_DO_NOT_MATCH.into());
        }

        let account = self
            .draft
            .account()
            .ok_or_else(|| MISSING_ACCOUNT_FIELDS.to_string())?;

        let Some(client) = client else {
            tracing::warn!("Hosted database is not configured");
            return Err(SIGNUP_NOT_AVAILABLE.into());
        };

        client.sign_up(&account).await.map_err(|e| {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to create account"
            );
            e.to_string()
        })
    }
}
