// ============================================================================
// LANDING VIEW - Pantalla de bienvenida + login con GitHub
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{ElementBuilder, on_click};
use crate::state::{AppState, AuthPhase};
use crate::utils::HOME_PATH;
use crate::viewmodels::SessionViewModel;

/// Renderizar landing
pub fn render_landing(state: &AppState) -> Result<Element, JsValue> {
    let hero = ElementBuilder::new("div")?
        .class("landing-hero")
        .child(ElementBuilder::new("div")?.class("logo-icon").text("🔍").build())?
        .child(ElementBuilder::new("h1")?.text("AI Code Review").build())?
        .child(
            ElementBuilder::new("p")?
                .class("tagline")
                .text("Paste your code, get instant feedback on syntax, logic and quality.")
                .build(),
        )?
        .build();

    let action = if state.auth.is_authenticated() {
        let name = state
            .auth
            .user()
            .and_then(|u| u.display_name().map(str::to_string))
            .unwrap_or_else(|| "you".to_string());
        ElementBuilder::new("a")?
            .class("btn-primary")
            .attr("href", HOME_PATH)?
            .text(&format!("Continue as {}", name))
            .build()
    } else {
        render_login_button(state)?
    };

    let mut screen = ElementBuilder::new("div")?
        .class("landing-screen")
        .child(hero)?
        .child(action)?;

    if let Some(message) = state.auth.error_message() {
        screen = screen.child(ElementBuilder::new("div")?.class("error-message").text(&message).build())?;
    }

    Ok(screen.build())
}

/// Botón "Sign in with GitHub" (también lo usa Home sin sesión)
pub fn render_login_button(state: &AppState) -> Result<Element, JsValue> {
    let pending = state.auth.phase() == AuthPhase::PendingRedirect;

    let button = ElementBuilder::new("button")?
        .class("btn-primary btn-github")
        .attr("type", "button")?
        .flag("disabled", pending)?
        .text(if pending { "Redirecting to GitHub..." } else { "Sign in with GitHub" })
        .build();

    let state_clone = state.clone();
    on_click(&button, move |_| {
        log::info!("🔐 [LANDING] Login con GitHub");
        let state = state_clone.clone();
        spawn_local(async move {
            SessionViewModel::from_state(&state).login(&state).await;
        });
        // El render (Timeout 0) corre después de que login marque PendingRedirect
        state_clone.notify_subscribers();
    })?;

    Ok(button)
}
