use dotenvy::dotenv;
use lockin_backend::config::HostConfig;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,lockin_backend=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = HostConfig::from_env()?;
    if !config.index_file().exists() {
        tracing::warn!(
            "No index.html in {}, build the frontend with `trunk build` first",
            config.static_dir.display()
        );
    }

    let app = lockin_backend::app(&config);
    tracing::info!("Serving {} on port {}", config.static_dir.display(), config.port);
    match &config.upstream_url {
        Some(upstream) => tracing::info!("Forwarding /api and auth pages to {}", upstream),
        None => tracing::warn!("UPSTREAM_URL not set, /api requests will answer 404"),
    }
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
