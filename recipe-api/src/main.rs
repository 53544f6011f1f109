mod routes;
mod session;
mod session_store;

use recipe_app::{AppConfig, AppContext};
use session_store::ExpiringMemoryStore;
use std::time::Duration;

const SESSION_SWEEP_PERIOD: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        model = %config.llm.model,
        base_url = %config.llm.base_url,
        pdf_path = %config.pdf_path.display(),
        "Configuration loaded"
    );

    let app_context = AppContext::new(&config);
    let session_store = ExpiringMemoryStore::default();
    session_store.spawn_sweeper(SESSION_SWEEP_PERIOD);
    let app = routes::build_router(app_context, session_store, config.session_idle_minutes);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    tracing::info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
