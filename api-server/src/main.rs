use axum::http::{header, Method};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use api_server::api;
use api_server::engine::{ConvertEngine, GeminiEngine, MockEngine};

fn load_env_file() {
    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!(error = %e, "Could not determine current directory for .env lookup");
            return;
        }
    };

    let mut current = cwd.clone();
    loop {
        let candidate = current.join(".env");
        if candidate.exists() {
            match dotenvy::from_path(&candidate) {
                Ok(_) => {
                    tracing::info!(path = %candidate.display(), "Loaded environment from .env");
                }
                Err(e) => {
                    tracing::warn!(
                        path = %candidate.display(),
                        error = %e,
                        "Failed to load .env file"
                    );
                }
            }
            return;
        }

        if !current.pop() {
            break;
        }
    }

    tracing::info!(
        cwd = %cwd.display(),
        "No .env file found in current directory or ancestors; using process environment only"
    );
}

fn build_engine() -> Arc<dyn ConvertEngine> {
    match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => match std::env::var("GEMINI_MODEL") {
            Ok(model) => {
                tracing::info!(%model, "Using Gemini conversion engine");
                Arc::new(GeminiEngine::with_model(key, model))
            }
            Err(_) => {
                tracing::info!("Using Gemini conversion engine with default model");
                Arc::new(GeminiEngine::new(key))
            }
        },
        _ => {
            tracing::warn!(
                "GEMINI_API_KEY not set; serving canned mock conversions only"
            );
            Arc::new(MockEngine)
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load .env values early so the provider key is available before engine
    // selection. Search the current directory and ancestors so running from
    // `api-server/` still picks up repo-root `.env`.
    load_env_file();

    tracing::info!("Starting GenZify API Server");

    let engine = build_engine();

    // The original deployment served arbitrary browser origins; keep that.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let api_state = api::ApiState { engine };
    let app = api::router().with_state(api_state).layer(cors);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(5001);

    tracing::info!("Starting HTTP server on http://0.0.0.0:{port}");

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    axum::serve(listener, app).await
}
