//! 画像リサイズ・フォーマット変換サーバ

use std::process::ExitCode;

use media_core::ImageService;
use media_processor::config::ProcessorConfig;
use media_processor::{AppState, app};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "media_processor=info,media_core=info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "media-processor failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), String> {
    let config = ProcessorConfig::from_env()?;

    tracing::info!(
        input_dir = %config.media.input_dir.display(),
        output_dir = %config.media.output_dir.display(),
        quality = config.media.quality,
        "configuration loaded"
    );

    let state = AppState::new(ImageService::new(config.media.clone()));
    let router = app(state, config.static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|e| format!("failed to bind {}: {e}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("server error: {e}"))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // シグナルを待てない場合は停止せずに動き続ける
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
