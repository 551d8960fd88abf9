// ============================================================================
// APP VIEW - Selección de pantalla según la ruta
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::state::{AppState, Route};
use crate::views::{render_callback, render_home, render_landing};

/// Renderizar la app completa (la vista de la ruta actual)
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let route = state.route();
    log::debug!("🎬 [APP-VIEW] render_app() ruta={:?}", route);

    let screen = match route {
        Route::Landing => render_landing(state)?,
        Route::Callback => render_callback(state)?,
        Route::Home => render_home(state)?,
    };

    Ok(ElementBuilder::new("div")?
        .class("app-container")
        .child(screen)?
        .build())
}
