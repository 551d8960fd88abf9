// ============================================================================
// REVIEW VIEWMODEL - Envío de código y carga de lenguajes
// ============================================================================

use crate::models::ReviewResult;
use crate::services::ReviewService;
use crate::state::{AppState, IncrementalUpdate, UpdateType};

pub struct ReviewViewModel {
    service: ReviewService,
}

impl ReviewViewModel {
    pub fn new(service: ReviewService) -> Self {
        Self { service }
    }

    pub fn from_config() -> Self {
        Self::new(ReviewService::from_config())
    }

    /// Cargar lenguajes soportados (nunca falla: fallback a Python)
    pub async fn load_languages(&self, state: &AppState) {
        let languages = self.service.list_languages().await;
        state.review.set_languages(languages);
        state.notify_subscribers();
    }

    /// Enviar el código actual. Devuelve false si no se envió nada
    /// (vacío o ya hay un request en curso).
    pub async fn submit(&self, state: &AppState) -> bool {
        if !can_submit(state) {
            return false;
        }

        let code = state.review.get_code();
        let language = state.review.get_language();

        state.review.set_loading(true);
        state.review.set_error(None);
        state.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::ReviewPanel));

        match self.service.analyze(&code, &language).await {
            Ok(result) => {
                state.review.set_result(Some(result));
            }
            Err(e) => {
                log::error!("❌ [REVIEW-VM] Error analizando código: {}", e);
                state.review.set_result(None);
                state.review.set_error(Some(e.user_message()));
            }
        }

        state.review.set_loading(false);
        state.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::ReviewPanel));
        true
    }
}

/// Submit habilitado: hay código y no hay request en curso
pub fn can_submit(state: &AppState) -> bool {
    !state.review.get_loading() && !state.review.code.borrow().trim().is_empty()
}

/// Texto del score ("90%")
pub fn quality_label(result: &ReviewResult) -> String {
    format!("{}%", result.quality_percent())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use crate::error::AppError;
    use crate::services::http::testing::FakeTransport;
    use crate::services::ApiClient;
    use crate::state::Route;
    use futures::executor::block_on;

    fn vm(transport: FakeTransport) -> (ReviewViewModel, Rc<FakeTransport>) {
        let transport = Rc::new(transport);
        let service = ReviewService::new(ApiClient::new("http://api.test", transport.clone()));
        (ReviewViewModel::new(service), transport)
    }

    #[test]
    fn submit_shows_quality_without_error() {
        let (vm, transport) = vm(FakeTransport::new().respond(
            200,
            r#"{"prediction":0.9,"overall_feedback":"Looks good","detailed_feedback":[],"issues_count":0,"syntax_errors":[],"logic_errors":[]}"#,
        ));
        let state = AppState::new(Route::Home);
        state.review.set_code("print('hi')".to_string());
        state.review.set_language("python".to_string());

        assert!(block_on(vm.submit(&state)));

        let result = state.review.get_result().unwrap();
        assert_eq!(quality_label(&result), "90%");
        assert_eq!(result.overall_feedback, "Looks good");
        assert_eq!(state.review.get_error(), None);
        assert!(!state.review.get_loading());
        assert_eq!(transport.request_count(), 1);
    }

    #[test]
    fn server_error_sets_error_panel() {
        let (vm, _) = vm(FakeTransport::new().respond(500, r#"{"detail":"Code analysis failed"}"#));
        let state = AppState::new(Route::Home);
        state.review.set_code("x = 1".to_string());

        assert!(block_on(vm.submit(&state)));
        assert_eq!(state.review.get_result(), None);
        assert_eq!(state.review.get_error().as_deref(), Some("Server error (500): Code analysis failed"));
        assert!(!state.review.get_loading());
    }

    #[test]
    fn retry_after_error_clears_it() {
        let (vm, _) = vm(
            FakeTransport::new()
                .fail(AppError::Network("offline".into()))
                .respond(200, r#"{"prediction":0.3}"#),
        );
        let state = AppState::new(Route::Home);
        state.review.set_code("x = 1".to_string());

        block_on(vm.submit(&state));
        assert!(state.review.get_error().is_some());

        block_on(vm.submit(&state));
        assert_eq!(state.review.get_error(), None);
        assert_eq!(quality_label(&state.review.get_result().unwrap()), "30%");
    }

    #[test]
    fn submit_is_blocked_when_empty_or_in_flight() {
        let (vm, transport) = vm(FakeTransport::new());
        let state = AppState::new(Route::Home);

        assert!(!can_submit(&state));
        assert!(!block_on(vm.submit(&state)));

        state.review.set_code("print(1)".to_string());
        assert!(can_submit(&state));
        state.review.set_loading(true);
        assert!(!can_submit(&state));
        assert!(!block_on(vm.submit(&state)));
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn panel_updates_are_incremental() {
        let (vm, _) = vm(FakeTransport::new().respond(200, r#"{"prediction":1.0}"#));
        let state = AppState::new(Route::Home);
        state.review.set_code("pass".to_string());
        let updates = Rc::new(RefCell::new(Vec::new()));
        let updates_clone = updates.clone();
        state.subscribe_to_changes(move |u| updates_clone.borrow_mut().push(format!("{:?}", u)));

        block_on(vm.submit(&state));
        assert_eq!(updates.borrow().len(), 2);
        assert!(updates.borrow().iter().all(|u| u == "Incremental(ReviewPanel)"));
    }

    #[test]
    fn languages_fallback_keeps_python_selected() {
        let (vm, _) = vm(FakeTransport::new().fail(AppError::Network("offline".into())));
        let state = AppState::new(Route::Home);
        state.review.set_language("rust".to_string());

        block_on(vm.load_languages(&state));
        assert_eq!(state.review.get_languages().len(), 1);
        assert_eq!(state.review.get_language(), "python");
    }
}
