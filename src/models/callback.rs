// ============================================================================
// CALLBACK PAYLOAD - Lo que trae la URL de retorno de OAuth
// ============================================================================
// Dos formas según la versión del backend:
// - ?code=<code>                                   → intercambio en /auth/callback
// - ?auth=success&token=<t>&name=&email=&picture=  → token directo
// Se parsea UNA vez en el borde y el resto del código trabaja con el enum.
// ============================================================================

use std::collections::HashMap;
use crate::error::AppError;
use crate::models::user::User;

#[derive(Debug, Clone, PartialEq)]
pub enum CallbackPayload {
    CodeExchange {
        code: String,
    },
    DirectToken {
        token: String,
        name: Option<String>,
        email: Option<String>,
        picture: Option<String>,
    },
    /// El proveedor redirigió con `?error=` (usuario canceló, app suspendida...)
    ProviderError {
        error: String,
        description: Option<String>,
    },
}

impl CallbackPayload {
    /// Parsear el query string (`?a=b&c=d` o `a=b&c=d`)
    pub fn from_query(query: &str) -> Result<Self, AppError> {
        let params = parse_query(query);
        let get = |key: &str| params.get(key).cloned();

        let direct = get("auth").map(|v| v == "success").unwrap_or(false);
        if direct || params.contains_key("token") {
            let token = get("token").ok_or(AppError::MissingToken)?;
            return Ok(CallbackPayload::DirectToken {
                token,
                name: get("name"),
                email: get("email"),
                picture: get("picture"),
            });
        }

        if let Some(code) = get("code") {
            return Ok(CallbackPayload::CodeExchange { code });
        }

        if let Some(error) = get("error") {
            return Ok(CallbackPayload::ProviderError {
                error,
                description: get("error_description"),
            });
        }

        Err(AppError::MissingCallbackParams)
    }

    /// Usuario que viene en la propia URL (solo en el flujo de token directo)
    pub fn url_user(&self) -> Option<User> {
        match self {
            CallbackPayload::DirectToken { name, email, picture, .. } => Some(User {
                name: name.clone(),
                email: email.clone(),
                picture: picture.clone(),
                login: None,
            }),
            _ => None,
        }
    }
}

/// ¿La URL trae una entrega de login directa (`auth=success`)?
pub fn is_direct_login_query(query: &str) -> bool {
    parse_query(query).get("auth").map(|v| v == "success").unwrap_or(false)
}

/// Decodifica el query string; los valores vacíos se descartan
fn parse_query(query: &str) -> HashMap<String, String> {
    let query = query.trim_start_matches('?');
    url::form_urlencoded::parse(query.as_bytes())
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}
