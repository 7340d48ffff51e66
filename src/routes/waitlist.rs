use crate::{
    app_state::AppState,
    forms::{WaitlistField, WaitlistForm},
    session_state::{TypedSession, WaitlistPage},
    utils::HttpError,
};
use anyhow::Error;
use axum::{extract::State, response::Redirect, routing::post, Form, Router};
use serde::Deserialize;

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(join_waitlist))
}

/// `?plan=` on a page preselects the plan of that page's waitlist form.
#[derive(Deserialize)]
pub(super) struct PlanParameters {
    pub(super) plan: Option<String>,
}

pub(super) async fn load_waitlist_form(
    session: &TypedSession,
    page: WaitlistPage,
    plan: Option<String>,
) -> Result<WaitlistForm, Error> {
    let mut form = session.get_waitlist_form(page).await?;

    if let Some(plan) = plan.filter(|p| !p.trim().is_empty()) {
        form.update_field(WaitlistField::DesiredPlan(plan));
        session.insert_waitlist_form(page, &form).await?;
    }

    Ok(form)
}

#[tracing::instrument(
    name = "Joining the waitlist",
    skip(app_state, session, form),
    fields(page = ?form.page)
)]
async fn join_waitlist(
    State(app_state): State<AppState>,
    session: TypedSession,
    Form(form): Form<FormData>,
) -> Result<Redirect, HttpError> {
    let page = form.page;
    let mut waitlist = session.get_waitlist_form(page).await?;

    waitlist.update_field(WaitlistField::Name(form.name));
    waitlist.update_field(WaitlistField::Email(form.email));
    waitlist.update_field(WaitlistField::DesiredPlan(form.desired_plan));
    waitlist.update_field(WaitlistField::MarketingConsent(
        form.marketing_consent.is_some(),
    ));

    waitlist.submit(app_state.supabase.as_ref()).await;
    session.insert_waitlist_form(page, &waitlist).await?;

    Ok(Redirect::to(&format!("{}#waitlist-form", page.path())))
}

#[derive(Deserialize)]
struct FormData {
    page: WaitlistPage,
    name: String,
    email: String,
    desired_plan: String,
    /// Browsers only send a checked checkbox.
    marketing_consent: Option<String>,
}
