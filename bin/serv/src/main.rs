use axum::{Router, middleware, routing::get};
use qm_api::{config::ApiConfig, state::ApiState};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    qm_api::tracing::init_tracing(&config.env);

    let metrics_handle = qm_api::metrics::init_metrics()?;
    tracing::info!("Prometheus metrics exporter initialized");

    let state = ApiState::new(&config);

    let cors = qm_api::middleware::cors::create_cors_layer(config.parsed_allowed_origins());

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Metrics endpoint carries its own state
    let metrics_app = Router::new()
        .route("/metrics", get(qm_api::metrics::metrics_handler))
        .with_state(metrics_handle);

    let app = qm_api::router::router()
        .merge(metrics_app)
        .with_state(state)
        .layer(cors)
        .layer(trace_layer)
        .layer(middleware::from_fn(qm_api::metrics::track_metrics))
        .layer(middleware::from_fn(
            qm_api::middleware::request_id::request_id_middleware,
        ));

    let app = qm_api::middleware::security_headers::apply_security_headers(app, config.env.clone());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        %addr,
        env = ?config.env,
        default_strictness = %config.default_strictness,
        "Answer validation service listening"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
