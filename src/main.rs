mod config;
mod error;
mod generate;
mod gemini;
mod handlers;
mod prompt;
mod types;

use std::sync::Arc;

use log::info;

use config::Config;
use gemini::GeminiClient;
use handlers::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    pretty_env_logger::init_timed();

    let Config {
        api_key,
        model,
        port,
    } = Config::from_env()?;

    info!("Using Gemini model {}", model);

    let generator = Arc::new(GeminiClient::new(api_key, model));
    let state = Arc::new(AppState { generator });

    let app = handlers::router(state);

    let addr = format!("0.0.0.0:{}", port);
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
