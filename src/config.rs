// ============================================================================
// CONFIG - Configuración en tiempo de compilación (build.rs + .env)
// ============================================================================

use serde::{Deserialize, Serialize};

/// Cómo obtiene `login()` la URL de autorización de GitHub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthUrlMode {
    /// `GET /auth/github` devuelve `{ auth_url }` y navegamos a esa URL
    Fetch,
    /// Navegar directamente a `/auth/github` (el backend redirige)
    Direct,
}

impl AuthUrlMode {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "direct" | "redirect" => AuthUrlMode::Direct,
            _ => AuthUrlMode::Fetch,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub session_ttl_hours: i64,
    pub auth_url_mode: AuthUrlMode,
    pub verify_direct_token: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://127.0.0.1:8000".to_string(),
            backend_url_production: "https://api.codereview.example.com".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            session_ttl_hours: 24,
            auth_url_mode: AuthUrlMode::Fetch,
            verify_direct_token: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(|s| s.to_string())
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(|s| s.to_string())
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            session_ttl_hours: option_env!("SESSION_TTL_HOURS")
                .unwrap_or("24").parse().unwrap_or(24),
            auth_url_mode: AuthUrlMode::parse(option_env!("AUTH_URL_MODE").unwrap_or("fetch")),
            verify_direct_token: option_env!("VERIFY_DIRECT_TOKEN")
                .unwrap_or("true").parse().unwrap_or(true),
        }
    }

    /// Obtiene la URL del backend según el entorno actual (sin `/` final)
    pub fn backend_url(&self) -> &str {
        let url = match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        };
        url.trim_end_matches('/')
    }

    /// Duración máxima de una sesión en milisegundos
    pub fn session_ttl_ms(&self) -> i64 {
        self.session_ttl_hours.max(0).saturating_mul(60 * 60 * 1000)
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_follows_environment() {
        let mut config = AppConfig {
            backend_url_production: "https://api.example.com/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.backend_url(), "http://127.0.0.1:8000");

        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), "https://api.example.com");
    }

    #[test]
    fn default_ttl_is_one_day() {
        assert_eq!(AppConfig::default().session_ttl_ms(), 86_400_000);
    }

    #[test]
    fn huge_ttl_saturates() {
        let config = AppConfig { session_ttl_hours: i64::MAX, ..AppConfig::default() };
        assert_eq!(config.session_ttl_ms(), i64::MAX);
        let negative = AppConfig { session_ttl_hours: -5, ..AppConfig::default() };
        assert_eq!(negative.session_ttl_ms(), 0);
    }

    #[test]
    fn auth_url_mode_parsing() {
        assert_eq!(AuthUrlMode::parse("direct"), AuthUrlMode::Direct);
        assert_eq!(AuthUrlMode::parse(" Redirect "), AuthUrlMode::Direct);
        assert_eq!(AuthUrlMode::parse("fetch"), AuthUrlMode::Fetch);
        assert_eq!(AuthUrlMode::parse("???"), AuthUrlMode::Fetch);
    }
}
