use nextgen_realty::{
    configuration::{get_configuration, SupabaseSettings},
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use once_cell::sync::Lazy;
use reqwest::{redirect::Policy, Client, Response};
use secrecy::Secret;
use serde::Serialize;
use std::net::SocketAddr;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let name = "test";
    let default_env_filter = "info";
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(name.into(), default_env_filter.into(), std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(name.into(), default_env_filter.into(), std::io::sink);
        init_subscriber(subscriber);
    }
});

static FAILED_TO_EXECUTE_REQUEST: &str = "Failed to execute request";

pub struct TestApp {
    pub address: SocketAddr,
    pub supabase_server: MockServer,
    client: Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let supabase_server = MockServer::start().await;
        let supabase = SupabaseSettings {
            url: Some(supabase_server.uri()),
            anon_key: Some(Secret::new("test-anon-key".into())),
        };

        Self::spawn_with(supabase, supabase_server).await
    }

    /// The site without database credentials. The mock server is still
    /// started so tests can assert that nothing reaches it.
    pub async fn spawn_unconfigured() -> Self {
        let supabase_server = MockServer::start().await;

        Self::spawn_with(SupabaseSettings::default(), supabase_server).await
    }

    async fn spawn_with(supabase: SupabaseSettings, supabase_server: MockServer) -> Self {
        Lazy::force(&TRACING);

        let mut config = get_configuration().expect("Failed to read configuration");
        config.application.port = 0;
        config.supabase = supabase;

        let app = Application::build(config)
            .await
            .expect("Failed to build application");
        let address = app.local_addr();

        tokio::spawn(app.run_until_stopped());

        let client = Client::builder()
            .redirect(Policy::none())
            .cookie_store(true)
            .build()
            .expect("Failed to build http client");

        Self {
            address,
            supabase_server,
            client,
        }
    }

    pub async fn get(&self, endpoint: &str) -> Response {
        self.client
            .get(self.url(endpoint))
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    pub async fn get_html(&self, endpoint: &str) -> String {
        self.get(endpoint)
            .await
            .text()
            .await
            .expect("Failed to read response body")
    }

    pub async fn post_form<Body>(&self, endpoint: &str, body: &Body) -> Response
    where
        Body: Serialize,
    {
        self.client
            .post(self.url(endpoint))
            .form(body)
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    pub async fn post_raw(&self, endpoint: &str, body: &'static str) -> Response {
        self.client
            .post(self.url(endpoint))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("http://{}{endpoint}", self.address)
    }
}

pub fn assert_redirect_to(response: &Response, location: &str) {
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}
