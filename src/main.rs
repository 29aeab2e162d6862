use std::sync::Arc;

use anyhow::Context;
use booking_relay::config::RelayConfig;
use booking_relay::pipeline::ForwardingPipeline;
use booking_relay::routes::relay_routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading any configuration
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // Refuse to start without the voice platform credential
    let config = RelayConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("  export VAPI_API_KEY=...");
        std::process::exit(1);
    });

    eprintln!("📞 Booking Relay v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Webhook: {}", config.webhook_url);
    eprintln!("   Voice platform: {}", config.vapi_base_url);
    eprintln!(
        "   Upstream timeout: {}s, retries: {}",
        config.request_timeout.as_secs(),
        config.retry.max_retries
    );
    eprintln!(
        "   Orphaned tool cleanup: {}",
        if config.cleanup_orphaned_tools { "enabled" } else { "disabled" }
    );

    let bind_addr = config.bind_addr();
    let pipeline = Arc::new(ForwardingPipeline::new(config).context("building upstream client")?);
    let app = relay_routes(pipeline);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "Booking relay listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Booking relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
