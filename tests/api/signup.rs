use crate::helpers::{assert_redirect_to, TestApp};
use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, ResponseTemplate,
};

fn account_body(confirm_password: &str) -> serde_json::Value {
    json!({
        "full_name": "Jane Realtor",
        "email": "jane@example.com",
        "password": "correct-horse-battery",
        "confirm_password": confirm_password,
    })
}

fn payment_body() -> serde_json::Value {
    json!({
        "card_number": "4242424242424242",
        "expiry_date": "12/30",
        "cvv": "123",
        "billing_address": "1 Main Street",
    })
}

async fn mount_successful_signup(app: &TestApp) {
    Mock::given(path("/auth/v1/signup"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "5d4f7b2e-0000-4000-8000-000000000000",
            "email": "jane@example.com",
        })))
        .mount(&app.supabase_server)
        .await;
}

#[tokio::test]
async fn signup_page_starts_at_the_account_step() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.get("/signup").await;

    // then
    assert_eq!(response.status().as_u16(), 200);
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains("Create Your Account"));
    assert!(html_page.contains("Step 1 of 2"));
}

#[tokio::test]
async fn mismatched_passwords_never_reach_the_auth_service() {
    // given
    let app = TestApp::spawn().await;
    Mock::given(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.supabase_server)
        .await;

    // when
    let response = app
        .post_form("/signup", &account_body("something-else"))
        .await;

    // then
    assert_redirect_to(&response, "/signup");
    let html_page = app.get_html("/signup").await;
    assert!(html_page.contains("Passwords do not match"));
    assert!(html_page.contains("Create Your Account"));
}

#[tokio::test]
async fn created_account_advances_to_payment() {
    // given
    let app = TestApp::spawn().await;
    Mock::given(path("/auth/v1/signup"))
        .and(method("POST"))
        .and(header("apikey", "test-anon-key"))
        .and(body_partial_json(json!({
            "email": "jane@example.com",
            "password": "correct-horse-battery",
            "data": { "full_name": "Jane Realtor" },
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&app.supabase_server)
        .await;

    // when
    let response = app
        .post_form("/signup", &account_body("correct-horse-battery"))
        .await;

    // then
    assert_redirect_to(&response, "/signup");
    let html_page = app.get_html("/signup").await;
    assert!(html_page.contains("Payment Details"));
    assert!(html_page.contains("Step 2 of 2"));
}

#[tokio::test]
async fn auth_service_errors_are_shown_verbatim() {
    // given
    let app = TestApp::spawn().await;
    Mock::given(path("/auth/v1/signup"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({
                "code": 422,
                "error_code": "user_already_exists",
                "msg": "User already registered",
            })),
        )
        .expect(1)
        .mount(&app.supabase_server)
        .await;

    // when
    app.post_form("/signup", &account_body("correct-horse-battery"))
        .await;

    // then
    let html_page = app.get_html("/signup").await;
    assert!(html_page.contains("User already registered"));
    assert!(html_page.contains("Create Your Account"));
    assert!(html_page.contains(r#"value="jane@example.com""#));
}

#[tokio::test]
async fn unconfigured_site_cannot_create_accounts() {
    // given
    let app = TestApp::spawn_unconfigured().await;

    // when
    app.post_form("/signup", &account_body("correct-horse-battery"))
        .await;

    // then
    let html_page = app.get_html("/signup").await;
    assert!(html_page.contains(r#"<p class="error">Database connection not available</p>"#));
}

#[tokio::test]
async fn passwords_are_not_echoed_back() {
    // given
    let app = TestApp::spawn_unconfigured().await;

    // when
    app.post_form("/signup", &account_body("something-else"))
        .await;

    // then
    let html_page = app.get_html("/signup").await;
    assert!(!html_page.contains("correct-horse-battery"));
}

#[tokio::test]
async fn completing_payment_returns_home_with_a_confirmation() {
    // given
    let app = TestApp::spawn().await;
    mount_successful_signup(&app).await;
    app.post_form("/signup", &account_body("correct-horse-battery"))
        .await;

    // when
    let response = app.post_form("/signup", &payment_body()).await;

    // then
    assert_redirect_to(&response, "/");
    let html_page = app.get_html("/").await;
    assert!(html_page.contains("Subscription created successfully!"));

    let html_page = app.get_html("/").await;
    assert!(!html_page.contains("Subscription created successfully!"));

    let html_page = app.get_html("/signup").await;
    assert!(html_page.contains("Create Your Account"));
}
