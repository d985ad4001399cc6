//! Environment-driven configuration for the API server.

/// Which chat backend to wire up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMode {
    /// Canned keyword-matched answers; no network calls.
    Mock,
    /// Forward questions to the external answering service.
    Proxy,
}

/// Server configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: Option<String>,
    pub fixture_path: Option<String>,
    pub chat_mode: ChatMode,
    pub chat_api_base_url: Option<String>,
    pub chat_api_key: Option<String>,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("LEDGERVIEW_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);

        let database_url = non_empty(std::env::var("DATABASE_URL").ok());
        let fixture_path = non_empty(std::env::var("FIXTURE_PATH").ok());
        let chat_api_base_url = non_empty(std::env::var("CHAT_API_BASE_URL").ok());
        let chat_api_key = non_empty(std::env::var("CHAT_API_KEY").ok());

        // Explicit CHAT_MODE wins; otherwise a configured upstream implies
        // proxy mode.
        let chat_mode = match std::env::var("CHAT_MODE").ok().as_deref() {
            Some("proxy") => ChatMode::Proxy,
            Some("mock") => ChatMode::Mock,
            Some(other) => {
                tracing::warn!(mode = other, "unknown CHAT_MODE; falling back to mock");
                ChatMode::Mock
            }
            None if chat_api_base_url.is_some() => ChatMode::Proxy,
            None => ChatMode::Mock,
        };

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|v| {
                v.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| {
                vec![
                    "http://localhost:3000".to_string(),
                    "http://localhost:3002".to_string(),
                ]
            });

        Self {
            port,
            database_url,
            fixture_path,
            chat_mode,
            chat_api_base_url,
            chat_api_key,
            allowed_origins,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
