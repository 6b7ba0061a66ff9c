use anyhow::bail;
use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Frontends allowed to call us cross-origin.
pub const ALLOWED_ORIGINS: [&str; 4] = [
    "http://127.0.0.1:5500",
    "http://localhost:3000",
    "https://nexussolver.in",
    "https://www.nexussolver.in",
];

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_PORT: u16 = 10000;

/// Runtime configuration, read once at startup and passed down explicitly.
/// Nothing reads the environment after this.
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = match std::env::var("GEMINI_API_KEY") {
            Ok(key) if !key.is_empty() => key,
            _ => bail!("GEMINI_API_KEY environment variable is not set"),
        };

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let port: u16 = std::env::var("HUMANIZER_API_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            api_key,
            model,
            port,
        })
    }
}

/// Cross-origin policy: the fixed allow-list above, any method, any header,
/// credentials included. Methods and headers mirror the request because
/// tower-http refuses the wildcard once credentials are allowed.
pub fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = ALLOWED_ORIGINS
        .iter()
        .map(|&origin| HeaderValue::from_static(origin))
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
