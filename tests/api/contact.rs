use crate::helpers::{assert_redirect_to, TestApp};
use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, ResponseTemplate,
};

fn contact_body() -> serde_json::Value {
    json!({
        "name": "Jane Realtor",
        "email": "jane@example.com",
        "message": "Do you cover commercial listings?",
    })
}

#[tokio::test]
async fn contact_message_is_stored_as_a_contact_request() {
    // given
    let app = TestApp::spawn().await;
    Mock::given(path("/rest/v1/waitlist_signups"))
        .and(method("POST"))
        .and(body_partial_json(json!({
            "email": "jane@example.com",
            "desired_plan": "contact",
            "marketing_consent": true,
            "message": "Do you cover commercial listings?",
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&app.supabase_server)
        .await;

    // when
    let response = app.post_form("/contact", &contact_body()).await;

    // then
    assert_redirect_to(&response, "/#contact");
    let html_page = app.get_html("/").await;
    assert!(html_page.contains("Message sent successfully! We will get back to you soon."));
}

#[tokio::test]
async fn failed_contact_message_keeps_the_draft() {
    // given
    let app = TestApp::spawn().await;
    Mock::given(path("/rest/v1/waitlist_signups"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.supabase_server)
        .await;

    // when
    app.post_form("/contact", &contact_body()).await;

    // then
    let html_page = app.get_html("/").await;
    assert!(html_page.contains("Failed to send message. Please try again later."));
    assert!(html_page.contains("Do you cover commercial listings?"));
}

#[tokio::test]
async fn empty_message_is_rejected_before_reaching_the_database() {
    // given
    let app = TestApp::spawn().await;
    Mock::given(path("/rest/v1/waitlist_signups"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.supabase_server)
        .await;
    let body = json!({
        "name": "Jane Realtor",
        "email": "jane@example.com",
        "message": "   ",
    });

    // when
    app.post_form("/contact", &body).await;

    // then
    let html_page = app.get_html("/").await;
    assert!(html_page.contains("Please enter a message."));
}
