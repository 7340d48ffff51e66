use super::{
    views::{ContactView, WaitlistView},
    waitlist::{load_waitlist_form, PlanParameters},
};
use crate::{
    app_state::AppState,
    content::{Faq, Feature, Package, AUTOMATION_STEPS, BENEFITS, FAQS, PACKAGES},
    session_state::{TypedSession, WaitlistPage},
    utils::HttpError,
};
use askama_axum::Template;
use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use axum_messages::Messages;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home))
}

#[tracing::instrument(name = "Render landing page", skip_all)]
async fn home(
    State(app_state): State<AppState>,
    session: TypedSession,
    messages: Messages,
    Query(parameters): Query<PlanParameters>,
) -> Result<LandingPage<'static>, HttpError> {
    let waitlist = load_waitlist_form(&session, WaitlistPage::Landing, parameters.plan).await?;
    let contact = session.get_contact_form().await?;

    Ok(LandingPage {
        page_title: "AI-Powered Marketing for Realtors",
        canonical_url: app_state.base_url.to_string(),
        configured: app_state.supabase.is_some(),
        flashes: messages.map(|m| m.message).collect(),
        benefits: &BENEFITS,
        automation_steps: &AUTOMATION_STEPS,
        packages: &PACKAGES,
        faqs: &FAQS,
        waitlist: WaitlistView::new(WaitlistPage::Landing, &waitlist),
        contact: ContactView::new(&contact),
    })
}

#[derive(Template)]
#[template(path = "web/landing.html")]
struct LandingPage<'a> {
    page_title: &'a str,
    canonical_url: String,
    configured: bool,
    flashes: Vec<String>,
    benefits: &'a [Feature],
    automation_steps: &'a [Feature],
    packages: &'a [Package],
    faqs: &'a [Faq],
    waitlist: WaitlistView,
    contact: ContactView,
}
