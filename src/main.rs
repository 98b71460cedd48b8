use bean_calculator::api::{AppState, create_router};
use bean_calculator::config::ServerSettings;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = ServerSettings::from_env()?;
    let loader = settings.load_config()?;
    tracing::info!(
        name = %loader.config().metadata().name,
        version = %loader.config().metadata().version,
        config_dir = ?settings.config_dir,
        "configuration loaded"
    );

    let router = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(settings.listen_addr).await?;
    tracing::info!(url = %format!("http://{}", settings.listen_addr), "bean calculator running");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await?;

    Ok(())
}
