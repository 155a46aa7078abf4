use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shisho::infrastructure::AppState;
use shisho::{config, server};

#[tokio::main]
async fn main() {
    // Load .env before the filter reads RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shisho=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = config::Config::from_env();

    // --port overrides PORT
    let args: Vec<String> = std::env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--port")
        && let Some(port) = args.get(pos + 1).and_then(|v| v.parse().ok())
    {
        config.port = port;
    }

    let port = config.port;
    let origins = config.cors_allowed_origins.clone();
    let timeout = config.request_timeout;

    let state = AppState::from_config(config).expect("Failed to build upstream clients");
    let app = server::build_router(state, &origins, timeout);

    if let Err(e) = server::serve(app, port).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
