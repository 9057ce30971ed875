/// Configuration management for pitcher-service
///
/// Loaded from environment variables. Missing values fall back to defaults,
/// malformed numeric values are configuration errors.
use crate::services::ServiceSettings;
use db_pool::env_utils::parse_env_or;
use std::time::Duration;

const DEV_JWT_SECRET: &str = "pitcher-service-development-secret";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub cors: CorsConfig,
    pub auth: AuthConfig,
    pub pitchers: PitcherConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 key used to verify viewer tokens
    pub jwt_secret: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .finish()
    }
}

/// Pitcher resource behaviour
#[derive(Debug, Clone)]
pub struct PitcherConfig {
    pub query_timeout_ms: u64,
    pub max_page_size: i64,
    pub comments_viewer_scoped: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let is_production = app_env.eq_ignore_ascii_case("production");

        let allowed_origins = match std::env::var("CORS_ALLOWED_ORIGINS") {
            Ok(value) => value,
            Err(_) if is_production => {
                return Err("CORS_ALLOWED_ORIGINS must be set in production".to_string())
            }
            Err(_) => "http://localhost:3000".to_string(),
        };
        if is_production && allowed_origins.trim() == "*" {
            return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
        }

        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => secret,
            _ if is_production => return Err("JWT_SECRET must be set in production".to_string()),
            _ => {
                tracing::warn!("JWT_SECRET not set, using development secret");
                DEV_JWT_SECRET.to_string()
            }
        };

        let pitchers = PitcherConfig {
            query_timeout_ms: parse_env_or("PITCHER_QUERY_TIMEOUT_MS", 5000)?,
            max_page_size: parse_env_or("PITCHER_MAX_PAGE_SIZE", 100)?,
            comments_viewer_scoped: parse_env_or("PITCHER_COMMENTS_VIEWER_SCOPED", false)?,
        };
        if pitchers.query_timeout_ms == 0 {
            return Err("PITCHER_QUERY_TIMEOUT_MS must be greater than 0".to_string());
        }
        if pitchers.max_page_size < 1 {
            return Err("PITCHER_MAX_PAGE_SIZE must be at least 1".to_string());
        }

        Ok(Config {
            app: AppConfig {
                env: app_env,
                host: std::env::var("PITCHER_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("PITCHER_SERVICE_PORT", 8080)?,
            },
            cors: CorsConfig { allowed_origins },
            auth: AuthConfig { jwt_secret },
            pitchers,
        })
    }

    pub fn is_production(&self) -> bool {
        self.app.env.eq_ignore_ascii_case("production")
    }

    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            query_timeout: Duration::from_millis(self.pitchers.query_timeout_ms),
            max_page_size: self.pitchers.max_page_size,
            comments_viewer_scoped: self.pitchers.comments_viewer_scoped,
        }
    }
}
