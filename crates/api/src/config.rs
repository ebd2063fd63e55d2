//! Process configuration, read from the environment at startup.

use chrono::Duration;

const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HS256 signing secret for issued tokens.
    pub jwt_secret: String,
    /// Lifetime of issued tokens.
    pub token_ttl: Duration,
    /// CORS allow-list; `None` means permissive.
    pub allowed_origins: Option<Vec<String>>,
}

impl AppConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl: Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES),
            allowed_origins: None,
        }
    }

    /// Read configuration from `JWT_SECRET`, `TOKEN_TTL_MINUTES` and
    /// `ALLOWED_ORIGINS`.
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });

        let token_ttl = std::env::var("TOKEN_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|m| *m > 0)
            .map(Duration::minutes)
            .unwrap_or_else(|| Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES));

        let allowed_origins = std::env::var("ALLOWED_ORIGINS").ok().map(|v| {
            v.split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect()
        });

        Self {
            jwt_secret,
            token_ttl,
            allowed_origins,
        }
    }
}
