use anyhow::Context;

/// Binds the configured port (or `port_override`) and serves the API.
pub async fn serve(port_override: Option<u16>) -> anyhow::Result<()> {
    let config = crate::config::config();
    tracing::info!("Starting Catalog API in {:?} mode", config.environment);

    let app = crate::handlers::router();
    let port = port_override.unwrap_or(config.api.port);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!(
        resources = crate::models::registry().len(),
        "Catalog API listening on http://{}",
        bind_addr
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
