use crate::helpers::TestApp;

#[tokio::test]
async fn landing_page_lists_packages_and_faqs() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.get("/").await;

    // then
    assert_eq!(response.status().as_u16(), 200);
    let html_page = response.text().await.unwrap();
    for package in ["Essential", "Professional", "Premium"] {
        assert!(html_page.contains(package), "missing package {package}");
    }
    assert!(html_page.contains("Can I customize the content?"));
    assert!(html_page.contains(r#"id="waitlist-form""#));
    assert!(html_page.contains(r#"id="contact""#));
}

#[tokio::test]
async fn professional_plan_is_preselected_by_default() {
    // given
    let app = TestApp::spawn().await;

    // when
    let html_page = app.get_html("/").await;

    // then
    assert!(html_page.contains(r#"<option value="professional" selected>"#));
    assert!(html_page.contains(r#"<option value="premium">"#));
}

#[tokio::test]
async fn plan_parameter_preselects_the_waitlist_plan() {
    // given
    let app = TestApp::spawn().await;

    // when
    let html_page = app.get_html("/?plan=premium").await;

    // then
    assert!(html_page.contains(r#"<option value="premium" selected>"#));
    assert!(html_page.contains(r#"<option value="professional">"#));
}

#[tokio::test]
async fn preselected_plan_is_kept_for_the_visitor() {
    // given
    let app = TestApp::spawn().await;
    app.get("/?plan=premium").await;

    // when
    let html_page = app.get_html("/").await;

    // then
    assert!(html_page.contains(r#"<option value="premium" selected>"#));
}

#[tokio::test]
async fn unconfigured_site_shows_a_notice_and_still_renders_forms() {
    // given
    let app = TestApp::spawn_unconfigured().await;

    // when
    let html_page = app.get_html("/").await;

    // then
    assert!(html_page.contains(r#"id="database-notice""#));
    assert!(html_page.contains(r#"id="waitlist-form""#));
}

#[tokio::test]
async fn configured_site_shows_no_notice() {
    // given
    let app = TestApp::spawn().await;

    // when
    let html_page = app.get_html("/").await;

    // then
    assert!(!html_page.contains(r#"id="database-notice""#));
}
