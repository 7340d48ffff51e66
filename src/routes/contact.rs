use crate::{
    app_state::AppState, forms::ContactField, session_state::TypedSession, utils::HttpError,
};
use axum::{extract::State, response::Redirect, routing::post, Form, Router};
use serde::Deserialize;

pub fn router() -> Router<AppState> {
    Router::new().route("/contact", post(send_message))
}

#[tracing::instrument(name = "Sending a contact message", skip_all)]
async fn send_message(
    State(app_state): State<AppState>,
    session: TypedSession,
    Form(form): Form<FormData>,
) -> Result<Redirect, HttpError> {
    let mut contact = session.get_contact_form().await?;

    contact.update_field(ContactField::Name(form.name));
    contact.update_field(ContactField::Email(form.email));
    contact.update_field(ContactField::Message(form.message));

    contact.submit(app_state.supabase.as_ref()).await;
    session.insert_contact_form(&contact).await?;

    Ok(Redirect::to("/#contact"))
}

#[derive(Deserialize)]
struct FormData {
    name: String,
    email: String,
    message: String,
}
