use anyhow::{Context, Result};
use clap::Parser;
use intervox::{create_router, AppState, ChatGenerator, Config, OpenAiClient, WhisperTranscriber};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "intervox", about = "Voice-driven mock interview server")]
struct Args {
    /// Config file (without extension), as understood by the config crate
    #[arg(long, default_value = "config/intervox")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Arc::new(Config::load(&args.config)?);

    info!("{} starting", cfg.service.name);
    info!("Interview role: {}", cfg.interview.role);
    info!(
        "Flush interval: {}s, interview bound: {}s",
        cfg.interview.flush_interval_secs, cfg.interview.duration_secs
    );

    let client = OpenAiClient::from_env(cfg.openai.api_base.clone())?;
    let transcriber = Arc::new(WhisperTranscriber::new(
        client.clone(),
        cfg.openai.transcription_model.clone(),
    ));
    let generator = Arc::new(ChatGenerator::new(client, cfg.openai.chat_model.clone()));

    let state = AppState::new(Arc::clone(&cfg), transcriber, generator);
    let router = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);
    axum::serve(listener, router)
        .await
        .context("HTTP server failed")?;

    Ok(())
}
