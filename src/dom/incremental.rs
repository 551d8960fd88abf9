// ============================================================================
// INCREMENTAL DOM UPDATES - Actualización incremental del DOM (estilo vanilla JS)
// ============================================================================
// Solo actualiza elementos específicos que cambiaron, sin re-renderizar todo.
// El textarea NO se toca: re-crearlo perdería foco y cursor mientras se escribe.
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{get_element_by_id, replace_children, set_text_content, toggle_attribute};
use crate::state::AppState;
use crate::viewmodels::can_submit;
use crate::views::review_panel::{render_review_panel, submit_label};

pub const SUBMIT_BUTTON_ID: &str = "review-submit";
pub const REVIEW_PANEL_ID: &str = "review-panel";

/// Error estándar cuando el elemento no existe (el caller hace render completo)
fn needs_full_render(id: &str) -> JsValue {
    JsValue::from_str(&format!("#{} not found, needs full render", id))
}

/// Botón de enviar: disabled + texto según loading/código vacío
pub fn update_submit_button(state: &AppState) -> Result<(), JsValue> {
    let button = get_element_by_id(SUBMIT_BUTTON_ID).ok_or_else(|| needs_full_render(SUBMIT_BUTTON_ID))?;

    let enabled = can_submit(state);
    toggle_attribute(&button, "disabled", !enabled)?;
    set_text_content(&button, submit_label(state.review.get_loading()));

    log::debug!("🔘 [INCREMENTAL] Submit button actualizado (enabled={})", enabled);
    Ok(())
}

/// Panel de resultado / error / loading
pub fn update_review_panel(state: &AppState) -> Result<(), JsValue> {
    let panel = get_element_by_id(REVIEW_PANEL_ID).ok_or_else(|| needs_full_render(REVIEW_PANEL_ID))?;

    let content = render_review_panel(state)?;
    replace_children(&panel, &content)?;

    // El botón depende del mismo estado (loading)
    update_submit_button(state)?;

    log::debug!("📋 [INCREMENTAL] Review panel actualizado");
    Ok(())
}
