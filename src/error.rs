// ============================================================================
// ERRORES - Taxonomía de errores del cliente
// ============================================================================

use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No authorization code or token provided")]
    MissingCallbackParams,

    #[error("No auth token found in callback")]
    MissingToken,

    #[error("OAuth provider error: {0}")]
    Provider(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Navigation error: {0}")]
    Navigation(String),
}

impl AppError {
    /// Mensaje para mostrar en la UI (sin detalles internos)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(_) => "Could not reach the server. Check your connection and try again.".to_string(),
            AppError::Http { status, message } if message.is_empty() => format!("Server error ({})", status),
            AppError::Http { status, message } => format!("Server error ({}): {}", status, message),
            AppError::Parse(_) => "The server returned an unexpected response.".to_string(),
            AppError::MissingCallbackParams => "No authorization code provided".to_string(),
            AppError::MissingToken => "Failed to authenticate: no token received".to_string(),
            AppError::Provider(message) => format!("GitHub sign-in was cancelled or failed: {}", message),
            AppError::Storage(_) => "Could not save your session in this browser.".to_string(),
            AppError::Validation(message) => message.clone(),
            AppError::Navigation(message) => format!("Could not open the sign-in page: {}", message),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Parse(e.to_string())
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => AppError::Parse(e.to_string()),
            other => AppError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_message_includes_backend_detail() {
        let err = AppError::Http { status: 500, message: "Code analysis failed".to_string() };
        assert_eq!(err.user_message(), "Server error (500): Code analysis failed");
        assert_eq!(err.to_string(), "HTTP 500: Code analysis failed");

        let bare = AppError::Http { status: 502, message: String::new() };
        assert_eq!(bare.user_message(), "Server error (502)");
    }

    #[test]
    fn json_errors_become_parse_errors() {
        let err: AppError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, AppError::Parse(_)));
    }
}
