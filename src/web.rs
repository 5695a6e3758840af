use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use crate::api;
use crate::pipeline::ItineraryPipeline;

pub async fn run(host: &str, port: u16, pipeline: ItineraryPipeline) -> Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::router(Arc::new(pipeline))
        .layer(TimeoutLayer::new(Duration::from_secs(180)))
        .layer(cors);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", port);
    axum::serve(listener, app).await.context("Web server stopped")?;
    Ok(())
}
