//! Site server: serves the static pages and the pricing API

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
    use wanderlust_web::{config::Config, models::Catalog, routes, AppState};

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wanderlust_web=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let addr = config.socket_addr()?;

    if !config.static_dir.is_dir() {
        tracing::warn!(
            "Static directory {} does not exist; only the API will respond",
            config.static_dir.display()
        );
    }

    let catalog = Catalog::default();
    tracing::info!("Loaded {} packages", catalog.len());

    let app = routes::app(AppState::new(config, catalog));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
