use crate::helpers::TestApp;

#[tokio::test]
async fn demo_page_embeds_both_videos() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.get("/demo").await;

    // then
    assert_eq!(response.status().as_u16(), 200);
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains("KMGV1TDI7hs"));
    assert!(html_page.contains("sUxZwTxR9S0"));
    assert!(html_page.contains("Digital Twin Technology"));
}

#[tokio::test]
async fn demo_page_has_its_own_waitlist_form() {
    // given
    let app = TestApp::spawn().await;

    // when
    let html_page = app.get_html("/demo").await;

    // then
    assert!(html_page.contains(r#"id="waitlist-form""#));
    assert!(html_page.contains(r#"name="page" value="demo""#));
}
