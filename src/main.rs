use nextgen_realty::{
    configuration::get_configuration,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("nextgen_realty".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration()?;
    if config.supabase.client().is_none() {
        tracing::warn!("Supabase is not configured, form submissions will be rejected");
    }

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    Ok(())
}
