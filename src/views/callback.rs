// ============================================================================
// CALLBACK VIEW - "Logging you in..." / error + volver al inicio
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, on_click};
use crate::state::{AppState, CallbackStatus};
use crate::viewmodels::CallbackViewModel;

pub fn render_callback(state: &AppState) -> Result<Element, JsValue> {
    let content = match state.get_callback_status() {
        // Succeeded: la navegación a /home ya está en curso
        CallbackStatus::Pending | CallbackStatus::Succeeded => ElementBuilder::new("div")?
            .class("callback-pending")
            .child(ElementBuilder::new("div")?.class("spinner").build())?
            .child(ElementBuilder::new("p")?.text("Logging you in...").build())?
            .build(),
        CallbackStatus::Failed(message) => {
            let button = ElementBuilder::new("button")?
                .class("btn-secondary")
                .attr("type", "button")?
                .text("Return home")
                .build();

            let state_clone = state.clone();
            on_click(&button, move |_| {
                CallbackViewModel::from_state(&state_clone).return_home();
            })?;

            ElementBuilder::new("div")?
                .class("callback-error")
                .child(ElementBuilder::new("h2")?.text("Login failed").build())?
                .child(ElementBuilder::new("p")?.class("error-message").text(&message).build())?
                .child(button)?
                .build()
        }
    };

    Ok(ElementBuilder::new("div")?
        .class("callback-screen")
        .child(content)?
        .build())
}
