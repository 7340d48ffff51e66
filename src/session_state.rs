use crate::forms::{ContactForm, SignupWizard, WaitlistForm};
use anyhow::{Context, Error};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use serde::Deserialize;
use tower_sessions::Session;

/// Pages that carry their own waitlist form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitlistPage {
    Landing,
    Demo,
}

impl WaitlistPage {
    fn session_key(&self) -> &'static str {
        match self {
            WaitlistPage::Landing => "waitlist_form.landing",
            WaitlistPage::Demo => "waitlist_form.demo",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            WaitlistPage::Landing => "/",
            WaitlistPage::Demo => "/demo",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WaitlistPage::Landing => "landing",
            WaitlistPage::Demo => "demo",
        }
    }
}

/// Session-backed storage for the form controllers of one visitor.
pub struct TypedSession(Session);

impl TypedSession {
    const CONTACT_FORM_KEY: &'static str = "contact_form";
    const SIGNUP_WIZARD_KEY: &'static str = "signup_wizard";

    pub fn new(session: Session) -> Self {
        Self(session)
    }

    pub async fn get_waitlist_form(&self, page: WaitlistPage) -> Result<WaitlistForm, Error> {
        self.0
            .get(page.session_key())
            .await
            .map(Option::unwrap_or_default)
            .context("Failed to retrieve waitlist form from session")
    }

    pub async fn insert_waitlist_form(
        &self,
        page: WaitlistPage,
        form: &WaitlistForm,
    ) -> Result<(), Error> {
        self.0
            .insert(page.session_key(), form)
            .await
            .context("Failed to insert waitlist form into session")
    }

    pub async fn get_contact_form(&self) -> Result<ContactForm, Error> {
        self.0
            .get(Self::CONTACT_FORM_KEY)
            .await
            .map(Option::unwrap_or_default)
            .context("Failed to retrieve contact form from session")
    }

    pub async fn insert_contact_form(&self, form: &ContactForm) -> Result<(), Error> {
        self.0
            .insert(Self::CONTACT_FORM_KEY, form)
            .await
            .context("Failed to insert contact form into session")
    }

    pub async fn get_signup_wizard(&self) -> Result<SignupWizard, Error> {
        self.0
            .get(Self::SIGNUP_WIZARD_KEY)
            .await
            .map(Option::unwrap_or_default)
            .context("Failed to retrieve signup wizard from session")
    }

    pub async fn insert_signup_wizard(&self, wizard: &SignupWizard) -> Result<(), Error> {
        self.0
            .insert(Self::SIGNUP_WIZARD_KEY, wizard)
            .await
            .context("Failed to insert signup wizard into session")
    }

    pub async fn remove_signup_wizard(&self) -> Result<(), Error> {
        self.0
            .remove::<SignupWizard>(Self::SIGNUP_WIZARD_KEY)
            .await
            .map(|_| ())
            .context("Failed to remove signup wizard from session")
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for TypedSession
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(req: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(req, state).await?;
        Ok(TypedSession(session))
    }
}
