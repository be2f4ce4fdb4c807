//! Glain HTTP Server
//!
//! Main entry point for the conversation backend.

use std::{sync::Arc, time::Duration};

use application::{ConversationService, PhoneticCorrector, SessionStore, TranscriptQueuePort};
use infrastructure::{AppConfig, FileTranscriptQueue, RetryCompletionAdapter, SpeechAdapter};
use presentation_http::{routes, spawn_transcript_polling, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "glain_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Glain backend v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        model = %config.completion.model,
        voice = %config.speech.voice,
        "Configuration loaded"
    );

    // Wire the conversation pipeline
    let completion = RetryCompletionAdapter::from_config(&config.completion)
        .map_err(|e| anyhow::anyhow!("Failed to initialize completion client: {e}"))?;
    let speech = SpeechAdapter::from_config(&config.speech)
        .map_err(|e| anyhow::anyhow!("Failed to initialize speech client: {e}"))?;

    let corrector = if config.corrector.enabled {
        PhoneticCorrector::with_extra(&config.corrector.extra_vocabulary, config.corrector.cutoff)
    } else {
        // Empty vocabulary makes correction a pass-through
        PhoneticCorrector::new(Vec::new(), 1.0)
    };

    let conversation_service = Arc::new(ConversationService::new(
        corrector,
        SessionStore::new(config.session.max_turns),
        Arc::new(completion),
        Arc::new(speech),
    ));

    // Bound one exchange by the worst case: all completion attempts with
    // their pauses, plus synthesis, plus a little slack.
    let attempts = u64::from(config.completion.max_attempts.max(1));
    let request_timeout = Duration::from_millis(
        attempts * config.completion.timeout_ms
            + (attempts - 1) * config.completion.retry_delay_ms
            + config.speech.timeout_ms
            + 2_000,
    );

    let state = AppState::new(
        Arc::clone(&conversation_service),
        config.server.enabled,
        request_timeout,
    );

    if !config.server.enabled {
        tracing::warn!("Service kill switch is off, /conversar will answer 503");
    }

    // Optional transcript queue poller
    let mut polling_task = None;
    if config.transcript_queue.enabled {
        let queue: Arc<dyn TranscriptQueuePort> =
            Arc::new(FileTranscriptQueue::new(config.transcript_queue.path.clone()));
        polling_task = Some(spawn_transcript_polling(
            queue,
            Arc::clone(&conversation_service),
            Duration::from_secs(config.transcript_queue.poll_interval_secs),
        ));
    }

    let app = routes::create_router(state);

    // CORS: empty allow-list means any origin
    let cors_layer = if config.server.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    };

    let app = app.layer(TraceLayer::new_for_http()).layer(cors_layer);

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    if let Some(task) = polling_task {
        task.abort();
    }

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Best-effort signal handler; log and keep waiting on failure
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
}
