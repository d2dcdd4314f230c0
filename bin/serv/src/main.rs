use anyhow::Context;
use axum::{Router, middleware, routing::get};
use prep_api::{config::ApiConfig, state::ApiState};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env().context("invalid configuration")?;

    prep_api::tracing::init_tracing(&config.env)?;

    // Initialize Prometheus metrics exporter
    let metrics_handle = prep_api::metrics::init_metrics()?;
    tracing::info!("Prometheus metrics exporter initialized");

    let pool = prep_db::create_pool(&config.database_url, config.db_max_connections).await?;
    let state = ApiState::new(pool);

    let cors = prep_api::middleware::cors::create_cors_layer(config.parsed_allowed_origins());

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Metrics endpoint carries its own state
    let metrics_app = Router::new()
        .route("/metrics", get(prep_api::metrics::metrics_handler))
        .with_state(metrics_handle);

    let app = prep_api::router::router()
        .merge(metrics_app)
        .with_state(state)
        .layer(cors)
        .layer(trace_layer)
        .layer(middleware::from_fn(prep_api::metrics::track_metrics))
        .layer(middleware::from_fn(
            prep_api::middleware::request_id::request_id_middleware,
        ));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    tracing::info!(env = ?config.env, %address, "Readiness service listening");
    axum::serve(listener, app).await?;

    Ok(())
}
