// ============================================================================
// AUTH SERVICE - Login con GitHub (redirect OAuth + callback)
// ============================================================================

use std::rc::Rc;
use crate::config::{AuthUrlMode, CONFIG};
use crate::error::AppError;
use crate::models::{CallbackPayload, User};
use crate::services::api_client::ApiClient;
use crate::services::navigation::{BrowserNavigator, Navigator};
use crate::state::AuthState;
use crate::stores::{Session, SessionStore};
use crate::utils::{default_storage, LANDING_PATH};

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    sessions: SessionStore,
    navigator: Rc<dyn Navigator>,
    auth: AuthState,
    mode: AuthUrlMode,
    verify_direct_token: bool,
}

impl AuthService {
    pub fn new(api: ApiClient, sessions: SessionStore, navigator: Rc<dyn Navigator>, auth: AuthState) -> Self {
        Self {
            api,
            sessions,
            navigator,
            auth,
            mode: AuthUrlMode::Fetch,
            verify_direct_token: true,
        }
    }

    /// Servicio del navegador (localStorage + fetch + location.href)
    pub fn from_config(auth: AuthState) -> Self {
        let sessions = SessionStore::new(default_storage(), CONFIG.session_ttl_ms());
        Self::new(ApiClient::from_config(), sessions, Rc::new(BrowserNavigator), auth)
            .with_options(CONFIG.auth_url_mode, CONFIG.verify_direct_token)
    }

    pub fn with_options(mut self, mode: AuthUrlMode, verify_direct_token: bool) -> Self {
        self.mode = mode;
        self.verify_direct_token = verify_direct_token;
        self
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Leer la sesión guardada y reflejarla en el estado
    pub fn restore_session(&self) -> Option<Session> {
        match self.sessions.read() {
            Some(session) => {
                log::info!("✅ [AUTH] Sesión restaurada desde storage");
                self.auth.authenticate(session.clone());
                Some(session)
            }
            None => {
                log::info!("ℹ️ [AUTH] Sin sesión válida");
                self.auth.logout();
                None
            }
        }
    }

    /// Iniciar login: limpiar sesión previa y navegar a GitHub
    pub async fn login(&self) -> Result<(), AppError> {
        // Forzar login nuevo
        self.sessions.clear();
        self.auth.begin_redirect();

        let url = match self.mode {
            AuthUrlMode::Direct => self.api.github_login_url(),
            AuthUrlMode::Fetch => match self.api.get_auth_url().await {
                Ok(url) => url,
                Err(e) => {
                    // /auth/github puede redirigir en lugar de devolver JSON
                    log::warn!("⚠️ [AUTH] No se obtuvo auth_url ({}), navegando directamente", e);
                    self.api.github_login_url()
                }
            },
        };

        log::info!("🔐 [AUTH] Redirigiendo a GitHub");
        if let Err(e) = self.navigator.navigate(&url) {
            self.auth.fail(e.user_message());
            return Err(e);
        }
        Ok(())
    }

    /// Procesar el retorno de OAuth y guardar la sesión.
    /// Nunca lanza: el fallo se devuelve y queda reflejado en `AuthPhase::Error`.
    pub async fn complete_callback(&self, payload: CallbackPayload) -> Result<User, AppError> {
        let outcome = match self.resolve_callback(payload).await {
            Ok((user, token)) => self.sessions.save(&user, &token),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(session) => {
                log::info!("✅ [AUTH] Login completado");
                let user = session.user.clone();
                self.auth.authenticate(session);
                Ok(user)
            }
            Err(e) => {
                log::error!("❌ [AUTH] Error en callback: {}", e);
                self.auth.fail(e.user_message());
                Err(e)
            }
        }
    }

    async fn resolve_callback(&self, payload: CallbackPayload) -> Result<(User, String), AppError> {
        let url_user = payload.url_user().unwrap_or_default();
        match payload {
            CallbackPayload::CodeExchange { code } => {
                let response = self.api.exchange_code(&code).await?;
                let token = response
                    .token
                    .filter(|t| !t.trim().is_empty())
                    .ok_or(AppError::MissingToken)?;
                let user = match response.user {
                    Some(user) => user,
                    None => self.api.user_info(&token).await?,
                };
                Ok((user, token))
            }
            CallbackPayload::DirectToken { token, .. } => {
                let user = if self.verify_direct_token {
                    self.api.user_info(&token).await?.merged_with(url_user)
                } else {
                    url_user
                };
                Ok((user, token))
            }
            CallbackPayload::ProviderError { error, description } => {
                Err(AppError::Provider(description.unwrap_or(error)))
            }
        }
    }

    /// Cerrar sesión y volver a la landing
    pub fn logout(&self) -> Result<(), AppError> {
        log::info!("👋 [AUTH] Logout");
        self.sessions.clear();
        self.auth.logout();
        self.navigator.navigate(LANDING_PATH)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::services::http::testing::FakeTransport;
    use crate::services::navigation::testing::RecordingNavigator;
    use crate::state::AuthPhase;
    use crate::utils::MemoryStorage;
    use futures::executor::block_on;

    pub(crate) struct Harness {
        pub transport: Rc<FakeTransport>,
        pub navigator: Rc<RecordingNavigator>,
        pub storage: MemoryStorage,
        pub auth: AuthState,
        pub service: AuthService,
    }

    pub(crate) fn harness(transport: FakeTransport) -> Harness {
        let transport = Rc::new(transport);
        let navigator = Rc::new(RecordingNavigator::default());
        let storage = MemoryStorage::new();
        let auth = AuthState::new();
        let service = AuthService::new(
            ApiClient::new("http://api.test", transport.clone()),
            SessionStore::new(Rc::new(storage.clone()), 24 * 60 * 60 * 1000),
            navigator.clone(),
            auth.clone(),
        );
        Harness { transport, navigator, storage, auth, service }
    }

    #[test]
    fn direct_token_callback_saves_session() {
        let h = harness(FakeTransport::new().respond(200, r#"{"email":"bob@example.com"}"#));
        let payload = CallbackPayload::from_query("?auth=success&token=abc&name=Bob").unwrap();

        let user = block_on(h.service.complete_callback(payload)).unwrap();
        assert_eq!(user.name.as_deref(), Some("Bob"));
        assert_eq!(user.email.as_deref(), Some("bob@example.com"));
        assert_eq!(h.transport.request(0).header("Authorization"), Some("Bearer abc"));

        let session = h.service.sessions().read().unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.user.name.as_deref(), Some("Bob"));
        assert_eq!(h.auth.phase(), AuthPhase::Authenticated);
    }

    #[test]
    fn direct_token_without_verification_skips_userinfo() {
        let mut h = harness(FakeTransport::new());
        h.service = h.service.clone().with_options(AuthUrlMode::Fetch, false);
        let payload = CallbackPayload::from_query("?auth=success&token=abc&name=Bob").unwrap();

        let user = block_on(h.service.complete_callback(payload)).unwrap();
        assert_eq!(user.name.as_deref(), Some("Bob"));
        assert_eq!(h.transport.request_count(), 0);
    }

    #[test]
    fn code_exchange_callback_saves_session() {
        let h = harness(FakeTransport::new().respond(200, r#"{"user":{"name":"Ann"},"token":"t-1"}"#));
        let payload = CallbackPayload::CodeExchange { code: "xyz".into() };

        let user = block_on(h.service.complete_callback(payload)).unwrap();
        assert_eq!(user.name.as_deref(), Some("Ann"));
        assert_eq!(h.service.sessions().read().unwrap().token, "t-1");
    }

    #[test]
    fn code_exchange_without_user_asks_userinfo() {
        let h = harness(
            FakeTransport::new()
                .respond(200, r#"{"token":"t-2"}"#)
                .respond(200, r#"{"name":"Cy"}"#),
        );
        let user = block_on(h.service.complete_callback(CallbackPayload::CodeExchange { code: "c".into() })).unwrap();
        assert_eq!(user.name.as_deref(), Some("Cy"));
        assert_eq!(h.transport.request(1).header("Authorization"), Some("Bearer t-2"));
    }

    #[test]
    fn failed_callback_is_reported_not_thrown() {
        let h = harness(FakeTransport::new().respond(401, r#"{"detail":"Bad token"}"#));
        let payload = CallbackPayload::from_query("?auth=success&token=abc").unwrap();

        let err = block_on(h.service.complete_callback(payload)).unwrap_err();
        assert_eq!(err, AppError::Http { status: 401, message: "Bad token".into() });
        assert!(h.storage.is_empty());
        assert!(matches!(h.auth.phase(), AuthPhase::Error(_)));
    }

    #[test]
    fn code_exchange_without_token_is_malformed() {
        let h = harness(FakeTransport::new().respond(200, r#"{"user":{"name":"Ann"}}"#));
        let err = block_on(h.service.complete_callback(CallbackPayload::CodeExchange { code: "c".into() })).unwrap_err();
        assert_eq!(err, AppError::MissingToken);
        assert!(h.storage.is_empty());
    }

    #[test]
    fn provider_error_fails_without_network() {
        let h = harness(FakeTransport::new());
        let payload = CallbackPayload::ProviderError { error: "access_denied".into(), description: None };
        let err = block_on(h.service.complete_callback(payload)).unwrap_err();
        assert_eq!(err, AppError::Provider("access_denied".into()));
        assert_eq!(h.transport.request_count(), 0);
    }

    #[test]
    fn login_fetches_auth_url_and_navigates() {
        let h = harness(FakeTransport::new().respond(200, r#"{"auth_url":"https://github.com/login/oauth/authorize?x=1"}"#));
        h.service.sessions().save(&User::default(), "old").unwrap();

        block_on(h.service.login()).unwrap();
        assert_eq!(h.navigator.last().as_deref(), Some("https://github.com/login/oauth/authorize?x=1"));
        assert_eq!(h.auth.phase(), AuthPhase::PendingRedirect);
        assert!(h.storage.is_empty());
    }

    #[test]
    fn login_falls_back_to_direct_redirect() {
        let h = harness(FakeTransport::new().fail(AppError::Network("CORS".into())));
        block_on(h.service.login()).unwrap();
        assert_eq!(h.navigator.last().as_deref(), Some("http://api.test/auth/github"));

        let mut direct = harness(FakeTransport::new());
        direct.service = direct.service.clone().with_options(AuthUrlMode::Direct, true);
        block_on(direct.service.login()).unwrap();
        assert_eq!(direct.transport.request_count(), 0);
        assert_eq!(direct.navigator.last().as_deref(), Some("http://api.test/auth/github"));
    }

    #[test]
    fn logout_clears_session_and_goes_to_landing() {
        let h = harness(FakeTransport::new());
        h.service.sessions().save(&User::default(), "abc").unwrap();
        assert!(h.service.restore_session().is_some());

        h.service.logout().unwrap();
        assert_eq!(h.service.sessions().read(), None);
        assert_eq!(h.auth.phase(), AuthPhase::Anonymous);
        assert_eq!(h.navigator.last().as_deref(), Some("/"));
    }
}
