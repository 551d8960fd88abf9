// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP y parsea respuestas
// ============================================================================

use std::rc::Rc;
use serde::Deserialize;
use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::{AnalyzeRequest, Language, LanguagesResponse, ReviewResult, User};
use crate::services::http::{GlooTransport, HttpRequest, HttpTransport};
use crate::utils::constants::*;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// Cliente contra el backend configurado, usando fetch()
    pub fn from_config() -> Self {
        Self::new(CONFIG.backend_url(), Rc::new(GlooTransport))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// URL de login directa (el backend redirige a GitHub)
    pub fn github_login_url(&self) -> String {
        self.url(AUTH_GITHUB_ENDPOINT)
    }

    /// Pedir la URL de autorización: `GET /auth/github` → `{ auth_url }`
    pub async fn get_auth_url(&self) -> Result<String, AppError> {
        let response = self
            .transport
            .send(HttpRequest::get(self.github_login_url()))
            .await?
            .error_for_status()?;

        let parsed = response.json::<AuthUrlResponse>()?;
        match parsed.auth_url {
            Some(url) if !url.trim().is_empty() => Ok(url),
            _ => Err(AppError::Parse("missing auth_url".to_string())),
        }
    }

    /// Intercambiar code: `GET /auth/callback?code=...` → `{ user, token }`
    pub async fn exchange_code(&self, code: &str) -> Result<CodeExchangeResponse, AppError> {
        let encoded: String = url::form_urlencoded::byte_serialize(code.as_bytes()).collect();
        let url = format!("{}?code={}", self.url(AUTH_CALLBACK_ENDPOINT), encoded);

        log::info!("🔐 [API] Intercambiando código de autorización");
        let response = self
            .transport
            .send(HttpRequest::get(url))
            .await?
            .error_for_status()?;

        response.json::<CodeExchangeResponse>()
    }

    /// Usuario verificado: `GET /auth/userinfo` con `Authorization: Bearer`
    pub async fn user_info(&self, token: &str) -> Result<User, AppError> {
        let response = self
            .transport
            .send(HttpRequest::get(self.url(AUTH_USERINFO_ENDPOINT)).bearer(token))
            .await?
            .error_for_status()?;

        // Algunas versiones envuelven el usuario: { user: {...} }
        let value = response.json::<serde_json::Value>()?;
        let user_value = match value.get("user") {
            Some(inner) if inner.is_object() => inner.clone(),
            _ => value,
        };
        if !user_value.is_object() {
            return Err(AppError::Parse("userinfo is not an object".to_string()));
        }
        serde_json::from_value::<User>(user_value).map_err(AppError::from)
    }

    /// Analizar código: `POST /review/analyze`
    pub async fn analyze(&self, request: &AnalyzeRequest) -> Result<ReviewResult, AppError> {
        log::info!("🔍 [API] Analizando {} caracteres de {}", request.code.len(), request.language);

        let response = self
            .transport
            .send(HttpRequest::post_json(self.url(REVIEW_ANALYZE_ENDPOINT), request)?)
            .await?
            .error_for_status()?;

        response.json::<ReviewResult>()
    }

    /// Lenguajes soportados: `GET /review/supported-languages`
    pub async fn supported_languages(&self) -> Result<Vec<Language>, AppError> {
        let response = self
            .transport
            .send(HttpRequest::get(self.url(REVIEW_LANGUAGES_ENDPOINT)))
            .await?
            .error_for_status()?;

        Ok(response.json::<LanguagesResponse>()?.languages)
    }
}

#[derive(Debug, Deserialize)]
struct AuthUrlResponse {
    #[serde(default)]
    auth_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CodeExchangeResponse {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default, alias = "access_token", alias = "authToken")]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::http::testing::FakeTransport;
    use crate::services::http::Method;
    use futures::executor::block_on;

    fn client(transport: &Rc<FakeTransport>) -> ApiClient {
        ApiClient::new("http://api.test/", transport.clone())
    }

    #[test]
    fn analyze_posts_code_and_language() {
        let transport = Rc::new(FakeTransport::new().respond(200, r#"{"prediction":0.5}"#));
        let request = AnalyzeRequest { code: "print('hi')".into(), language: "python".into() };

        let result = block_on(client(&transport).analyze(&request)).unwrap();
        assert_eq!(result.quality_percent(), 50);

        let sent = transport.request(0);
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, "http://api.test/review/analyze");
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"code": "print('hi')", "language": "python"}));
    }

    #[test]
    fn analyze_rejects_server_errors() {
        let transport = Rc::new(FakeTransport::new().respond(500, r#"{"detail":"Code analysis failed: x"}"#));
        let request = AnalyzeRequest { code: "x".into(), language: "python".into() };

        let err = block_on(client(&transport).analyze(&request)).unwrap_err();
        assert_eq!(err, AppError::Http { status: 500, message: "Code analysis failed: x".into() });
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let transport = Rc::new(FakeTransport::new().respond(200, "<html>oops</html>"));
        let request = AnalyzeRequest { code: "x".into(), language: "python".into() };
        let err = block_on(client(&transport).analyze(&request)).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn exchange_code_encodes_the_code() {
        let transport = Rc::new(FakeTransport::new().respond(200, r#"{"user":{"name":"Ann"},"access_token":"t1"}"#));
        let response = block_on(client(&transport).exchange_code("a b&c")).unwrap();

        assert_eq!(transport.request(0).url, "http://api.test/auth/callback?code=a+b%26c");
        assert_eq!(response.token.as_deref(), Some("t1"));
        assert_eq!(response.user.unwrap().name.as_deref(), Some("Ann"));
    }

    #[test]
    fn user_info_sends_bearer_and_unwraps_user() {
        let transport = Rc::new(
            FakeTransport::new()
                .respond(200, r#"{"name":"Bob","email":"bob@example.com"}"#)
                .respond(200, r#"{"user":{"name":"Wrapped"}}"#)
                .respond(200, r#"[]"#),
        );
        let api = client(&transport);

        let user = block_on(api.user_info("abc")).unwrap();
        assert_eq!(user.name.as_deref(), Some("Bob"));
        assert_eq!(transport.request(0).header("Authorization"), Some("Bearer abc"));

        let wrapped = block_on(api.user_info("abc")).unwrap();
        assert_eq!(wrapped.name.as_deref(), Some("Wrapped"));

        assert!(matches!(block_on(api.user_info("abc")), Err(AppError::Parse(_))));
    }

    #[test]
    fn auth_url_requires_field() {
        let transport = Rc::new(
            FakeTransport::new()
                .respond(200, r#"{"auth_url":"https://github.com/login/oauth/authorize?client_id=1"}"#)
                .respond(200, r#"{}"#),
        );
        let api = client(&transport);
        assert_eq!(
            block_on(api.get_auth_url()).unwrap(),
            "https://github.com/login/oauth/authorize?client_id=1"
        );
        assert!(matches!(block_on(api.get_auth_url()), Err(AppError::Parse(_))));
    }
}
