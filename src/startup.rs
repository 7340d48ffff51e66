use crate::{
    app_state::AppState,
    configuration::Settings,
    request_id::{RequestUuid, REQUEST_ID_HEADER},
    routes::{contact, demo, health_check, home, signup, waitlist},
    telemetry::request_span,
};
use anyhow::{anyhow, Context};
use axum::{http::Uri, Router};
use axum_messages::MessagesManagerLayer;
use secrecy::ExposeSecret;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tower_sessions::{
    cookie::Key, service::PrivateCookie, Expiry, MemoryStore, SessionManagerLayer,
};

pub struct Application {
    address: SocketAddr,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind to {address}"))?;
        let address = listener
            .local_addr()
            .context("Failed to read the bound address")?;

        let app_state = get_app_state(&config)?;
        let session_layer = get_session_layer(&config)?;

        let router = Router::new()
            .merge(home::router())
            .merge(demo::router())
            .merge(signup::router())
            .merge(waitlist::router())
            .merge(contact::router())
            .merge(health_check::router())
            .with_state(app_state)
            .layer(MessagesManagerLayer)
            .layer(session_layer)
            .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, RequestUuid));

        Ok(Self {
            address,
            listener,
            router,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.address
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        tracing::info!("Listening on {}", self.address);
        axum::serve(self.listener, self.router).await
    }
}

pub fn get_app_state(config: &Settings) -> Result<AppState, anyhow::Error> {
    let base_url = config
        .application
        .base_url
        .parse::<Uri>()
        .with_context(|| format!("Invalid base url `{}`", config.application.base_url))?;

    Ok(AppState {
        supabase: config.supabase.client(),
        base_url,
    })
}

fn get_session_layer(
    config: &Settings,
) -> Result<SessionManagerLayer<MemoryStore, PrivateCookie>, anyhow::Error> {
    let key = Key::try_from(config.application.hmac_secret.expose_secret().as_bytes())
        .map_err(|e| anyhow!("Invalid hmac secret: {e}"))?;

    Ok(SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.application.secure_cookies)
        .with_expiry(Expiry::OnInactivity(time::Duration::hours(1)))
        .with_private(key))
}
