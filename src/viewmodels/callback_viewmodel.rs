// ============================================================================
// CALLBACK VIEWMODEL - Retorno de OAuth
// ============================================================================

use std::rc::Rc;
use crate::models::CallbackPayload;
use crate::services::{AuthService, BrowserNavigator, Navigator};
use crate::state::{AppState, CallbackStatus};
use crate::utils::HOME_PATH;

pub struct CallbackViewModel {
    auth_service: AuthService,
    navigator: Rc<dyn Navigator>,
}

impl CallbackViewModel {
    pub fn new(auth_service: AuthService, navigator: Rc<dyn Navigator>) -> Self {
        Self { auth_service, navigator }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(AuthService::from_config(state.auth.clone()), Rc::new(BrowserNavigator))
    }

    /// Procesar el query del callback. Nunca propaga errores: el resultado
    /// queda en `state.callback_status`.
    pub async fn process(&self, state: &AppState, query: &str) -> CallbackStatus {
        state.set_callback_status(CallbackStatus::Pending);

        let status = match CallbackPayload::from_query(query) {
            Ok(payload) => match self.auth_service.complete_callback(payload).await {
                Ok(_) => CallbackStatus::Succeeded,
                Err(e) => CallbackStatus::Failed(e.user_message()),
            },
            Err(e) => {
                log::warn!("⚠️ [CALLBACK] URL de callback sin parámetros válidos: {}", e);
                state.auth.fail(e.user_message());
                CallbackStatus::Failed(e.user_message())
            }
        };

        if status == CallbackStatus::Succeeded {
            // Recarga completa: Home lee el storage ya escrito
            if let Err(e) = self.navigator.navigate(HOME_PATH) {
                let failed = CallbackStatus::Failed(e.user_message());
                state.set_callback_status(failed.clone());
                return failed;
            }
        }

        state.set_callback_status(status.clone());
        status
    }

    /// Botón "Return home" del panel de error
    pub fn return_home(&self) {
        if let Err(e) = self.navigator.navigate(crate::utils::LANDING_PATH) {
            log::error!("❌ [CALLBACK] {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth_service::tests::harness;
    use crate::services::http::testing::FakeTransport;
    use crate::services::ApiClient;
    use crate::state::Route;
    use crate::stores::SessionStore;
    use crate::viewmodels::session_viewmodel::{welcome_text, SessionViewModel};
    use futures::executor::block_on;

    #[test]
    fn direct_token_callback_then_home_welcomes_user() {
        let h = harness(FakeTransport::new().respond(200, r#"{"name":"Bob"}"#));
        let mut state = AppState::new(Route::Callback);
        state.auth = h.auth.clone();
        let vm = CallbackViewModel::new(h.service.clone(), h.navigator.clone());

        let status = block_on(vm.process(&state, "?auth=success&token=abc&name=Bob"));
        assert_eq!(status, CallbackStatus::Succeeded);
        assert_eq!(h.navigator.last().as_deref(), Some("/home"));

        let session = h.service.sessions().read().unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.user.name.as_deref(), Some("Bob"));

        // Tras la recarga, Home arranca con estado nuevo y lee el mismo storage
        let home = AppState::new(Route::Home);
        let home_service = AuthService::new(
            ApiClient::new("http://api.test", h.transport.clone()),
            SessionStore::new(Rc::new(h.storage.clone()), 24 * 60 * 60 * 1000),
            h.navigator.clone(),
            home.auth.clone(),
        );
        assert!(SessionViewModel::new(home_service).resolve_session(&home));
        let user = home.auth.user().unwrap();
        assert_eq!(welcome_text(&user), "Welcome, Bob");
    }

    #[test]
    fn missing_code_shows_error_without_navigation() {
        let h = harness(FakeTransport::new());
        let mut state = AppState::new(Route::Callback);
        state.auth = h.auth.clone();
        let vm = CallbackViewModel::new(h.service.clone(), h.navigator.clone());

        let status = block_on(vm.process(&state, ""));
        assert_eq!(status, CallbackStatus::Failed("No authorization code provided".to_string()));
        assert_eq!(state.get_callback_status(), status);
        assert!(h.navigator.visited.borrow().is_empty());
    }

    #[test]
    fn backend_failure_is_shown_in_panel() {
        let h = harness(FakeTransport::new().respond(500, r#"{"detail":"GitHub down"}"#));
        let mut state = AppState::new(Route::Callback);
        state.auth = h.auth.clone();
        let vm = CallbackViewModel::new(h.service.clone(), h.navigator.clone());

        let status = block_on(vm.process(&state, "?code=abc"));
        assert_eq!(status, CallbackStatus::Failed("Server error (500): GitHub down".to_string()));

        vm.return_home();
        assert_eq!(h.navigator.last().as_deref(), Some("/"));
    }
}
