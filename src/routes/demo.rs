use super::{
    views::WaitlistView,
    waitlist::{load_waitlist_form, PlanParameters},
};
use crate::{
    app_state::AppState,
    content::{DemoVideo, Package, DEMO_VIDEOS, PACKAGES},
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
    Router::new().route("/demo", get(demo))
}

#[tracing::instrument(name = "Render demo page", skip_all)]
async fn demo(
    State(app_state): State<AppState>,
    session: TypedSession,
    messages: Messages,
    Query(parameters): Query<PlanParameters>,
) -> Result<DemoPage<'static>, HttpError> {
    let waitlist = load_waitlist_form(&session, WaitlistPage::Demo, parameters.plan).await?;

    Ok(DemoPage {
        page_title: "See It In Action",
        canonical_url: format!("{}demo", app_state.base_url),
        configured: app_state.supabase.is_some(),
        flashes: messages.map(|m| m.message).collect(),
        videos: &DEMO_VIDEOS,
        packages: &PACKAGES,
        waitlist: WaitlistView::new(WaitlistPage::Demo, &waitlist),
    })
}

#[derive(Template)]
#[template(path = "web/demo.html")]
struct DemoPage<'a> {
    page_title: &'a str,
    canonical_url: String,
    configured: bool,
    flashes: Vec<String>,
    videos: &'a [DemoVideo],
    packages: &'a [Package],
    waitlist: WaitlistView,
}
