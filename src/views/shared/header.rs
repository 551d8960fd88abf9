use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, on_click};
use crate::models::User;
use crate::state::AppState;
use crate::viewmodels::{user_initials, welcome_text, SessionViewModel};

/// Header de Home: avatar, saludo y logout
pub fn render_header(state: &AppState, user: &User) -> Result<Element, JsValue> {
    let avatar = match user.picture.as_deref().filter(|p| !p.trim().is_empty()) {
        Some(src) => ElementBuilder::new("img")?
            .class("avatar")
            .attr("src", src)?
            .attr("alt", user.display_name().unwrap_or("avatar"))?
            .build(),
        None => ElementBuilder::new("span")?
            .class("avatar avatar-initials")
            .text(&user_initials(user))
            .build(),
    };

    let logout = ElementBuilder::new("button")?
        .class("btn-logout")
        .attr("type", "button")?
        .text("Logout")
        .build();

    let state_clone = state.clone();
    on_click(&logout, move |_| {
        log::info!("🚪 [HEADER] Logout");
        SessionViewModel::from_state(&state_clone).logout(&state_clone);
    })?;

    Ok(ElementBuilder::new("header")?
        .class("app-header")
        .child(avatar)?
        .child(ElementBuilder::new("h1")?.class("welcome").text(&welcome_text(user)).build())?
        .child(logout)?
        .build())
}
