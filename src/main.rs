use product_pulse::api;
use product_pulse::clients::create_ai_client;
use product_pulse::config::Config;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "product_pulse=debug,tower_http=info".into()),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Initialize the upstream client once for the whole process
    let ai_client = create_ai_client(&config.gemini).map_err(|e| anyhow::anyhow!("{}", e))?;
    if ai_client.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; /analyze will fail until it is configured");
    }

    let app_state = Arc::new(api::AppState { ai_client });

    let app = api::create_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
