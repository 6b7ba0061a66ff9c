use async_trait::async_trait;

/// Failure of one outbound generation call. Every variant is surfaced to the
/// caller the same way (HTTP 500 with the message as detail); the split only
/// exists so logs say what actually went wrong.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("request to generative backend failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generative backend returned {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("generative backend returned no usable text")]
    Empty,
}

/// An interface for sending a prompt to a generative-text model and receiving
/// the completion.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Handlers stay decoupled from any particular provider, and tests
/// substitute deterministic stubs.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send `prompt` as a single turn and return the model's text reply.
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}
