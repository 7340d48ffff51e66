use crate::{
    app_state::AppState,
    forms::{SignupField, SignupOutcome, SignupStep, SUBSCRIPTION_CREATED},
    session_state::TypedSession,
    utils::HttpError,
};
use askama_axum::Template;
use axum::{
    extract::State,
    response::Redirect,
    routing::get,
    Form, Router,
};
use axum_messages::Messages;
use secrecy::Secret;
use serde::Deserialize;

pub fn router() -> Router<AppState> {
    Router::new().route("/signup", get(signup_form).post(signup))
}

#[tracing::instrument(name = "Get signup form", skip_all)]
async fn signup_form(
    State(app_state): State<AppState>,
    session: TypedSession,
    messages: Messages,
) -> Result<SignupPage<'static>, HttpError> {
    let wizard = session.get_signup_wizard().await?;
    let draft = wizard.draft();

    Ok(SignupPage {
        page_title: "Sign Up",
        canonical_url: format!("{}signup", app_state.base_url),
        configured: app_state.supabase.is_some(),
        flashes: messages.map(|m| m.message).collect(),
        collecting_account: wizard.step() == SignupStep::CollectingAccount,
        email: draft.email.clone(),
        full_name: draft.full_name.clone(),
        expiry_date: draft.expiry_date.clone(),
        billing_address: draft.billing_address.clone(),
        loading: wizard.is_loading(),
        error: wizard.error().map(String::from),
    })
}

#[tracing::instrument(name = "Submit signup step", skip_all)]
async fn signup(
    State(app_state): State<AppState>,
    session: TypedSession,
    messages: Messages,
    Form(form): Form<FormData>,
) -> Result<Redirect, HttpError> {
    let mut wizard = session.get_signup_wizard().await?;
    for field in form.into_fields() {
        wizard.update_field(field);
    }

    match wizard.submit(app_state.supabase.as_ref()).await {
        SignupOutcome::Completed => {
            session.remove_signup_wizard().await?;
            messages.info(SUBSCRIPTION_CREATED);
            Ok(Redirect::to("/"))
        }
        SignupOutcome::Advanced | SignupOutcome::Stayed => {
            session.insert_signup_wizard(&wizard).await?;
            Ok(Redirect::to("/signup"))
        }
    }
}

/// Each step posts only its own fields.
#[derive(Deserialize)]
struct FormData {
    email: Option<String>,
    password: Option<Secret<String>>,
    confirm_password: Option<Secret<String>>,
    full_name: Option<String>,
    card_number: Option<Secret<String>>,
    expiry_date: Option<String>,
    cvv: Option<Secret<String>>,
    billing_address: Option<String>,
}

impl FormData {
    fn into_fields(self) -> impl Iterator<Item = SignupField> {
        [
            self.email.map(SignupField::Email),
            self.password.map(SignupField::Password),
            self.confirm_password.map(SignupField::ConfirmPassword),
            self.full_name.map(SignupField::FullName),
            self.card_number.map(SignupField::CardNumber),
            self.expiry_date.map(SignupField::ExpiryDate),
            self.cvv.map(SignupField::Cvv),
            self.billing_address.map(SignupField::BillingAddress),
        ]
        .into_iter()
        .flatten()
    }
}

#[derive(Template)]
#[template(path = "web/signup.html")]
struct SignupPage<'a> {
    page_title: &'a str,
    canonical_url: String,
    configured: bool,
    flashes: Vec<String>,
    collecting_account: bool,
    email: String,
    full_name: String,
    expiry_date: String,
    billing_address: String,
    loading: bool,
    error: Option<String>,
}
