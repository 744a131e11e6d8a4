use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use blog_gateway::application::services::ApplicationServices;
use blog_gateway::config::AppConfig;
use blog_gateway::domain::article::ArticleRepository;
use blog_gateway::infrastructure::hygraph::{
    GraphqlExecutor, HygraphArticleRepository, HygraphClient,
};
use blog_gateway::presentation::http::{cors::CorsPolicy, routes::build_router, state::HttpState};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let client: Arc<dyn GraphqlExecutor> = Arc::new(HygraphClient::new(
        config.hygraph_endpoint(),
        config.hygraph_token(),
        config.environment(),
    ));
    let article_repo: Arc<dyn ArticleRepository> =
        Arc::new(HygraphArticleRepository::new(Arc::clone(&client)));

    let services = Arc::new(ApplicationServices::new(article_repo));
    let cors = Arc::new(CorsPolicy::new(config.allowed_origins().to_vec()));

    let state = HttpState { services, cors };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
