// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use gloo_timers::callback::Timeout;
use crate::dom::{get_element_by_id, set_inner_html, append_child};
use crate::dom::incremental::{update_review_panel, update_submit_button};
use crate::services::current_location;
use crate::state::{AppState, IncrementalUpdate, Route};
use crate::viewmodels::{CallbackViewModel, ReviewViewModel, SessionViewModel};
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Option<Element>,
}

impl App {
    /// Crear nueva aplicación a partir de la URL actual
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let (path, query) = current_location();
        let route = Route::from_location(&path, &query);
        log::info!("🧭 [APP] Ruta inicial: {:?} ({}{})", route, path, query);

        let state = AppState::new(route.clone());

        // Suscribirse a cambios de estado; Timeout(0) batchea varios updates seguidos
        state.subscribe_to_changes(move |update_type| {
            Timeout::new(0, move || {
                crate::rerender_app_with_type(update_type);
            })
            .forget();
        });

        match route {
            Route::Callback => {
                let state_clone = state.clone();
                spawn_local(async move {
                    let vm = CallbackViewModel::from_state(&state_clone);
                    let status = vm.process(&state_clone, &query).await;
                    log::info!("🔑 [APP] Callback procesado: {:?}", status);
                    state_clone.notify_subscribers();
                });
            }
            Route::Landing | Route::Home => {
                let has_session = SessionViewModel::from_state(&state).resolve_session(&state);
                if route == Route::Home && has_session {
                    let state_clone = state.clone();
                    spawn_local(async move {
                        ReviewViewModel::from_config().load_languages(&state_clone).await;
                    });
                }
            }
        }

        Ok(Self {
            state,
            root: Some(root),
        })
    }

    /// Renderizar aplicación (re-render completo)
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(root) = &self.root {
            set_inner_html(root, "");
            let app_view = render_app(&self.state)?;
            append_child(root, &app_view)?;
        }
        Ok(())
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        match update_type {
            IncrementalUpdate::SubmitButton => update_submit_button(&self.state),
            IncrementalUpdate::ReviewPanel => update_review_panel(&self.state),
        }
    }
}
