// ============================================================================
// HOME VIEW - Editor de código + resultado del análisis
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlTextAreaElement};
use crate::dom::{ElementBuilder, on_select_change, on_submit, on_textarea_input, REVIEW_PANEL_ID, SUBMIT_BUTTON_ID};
use crate::state::{AppState, IncrementalUpdate, UpdateType};
use crate::viewmodels::can_submit;
use crate::views::review_panel::{render_review_panel, spawn_submit, submit_label};
use crate::views::{render_header, render_login_button};

pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    if state.auth.is_resolving() {
        return Ok(ElementBuilder::new("div")?
            .class("home-loading")
            .child(ElementBuilder::new("div")?.class("spinner").build())?
            .build());
    }

    let Some(user) = state.auth.user().filter(|_| state.auth.is_authenticated()) else {
        return Ok(ElementBuilder::new("div")?
            .class("home-anonymous")
            .child(ElementBuilder::new("p")?.text("Please sign in to review code.").build())?
            .child(render_login_button(state)?)?
            .build());
    };

    Ok(ElementBuilder::new("div")?
        .class("home-screen")
        .child(render_header(state, &user)?)?
        .child(render_review_form(state)?)?
        .child(
            ElementBuilder::new("div")?
                .class("review-panel")
                .id(REVIEW_PANEL_ID)?
                .child(render_review_panel(state)?)?
                .build(),
        )?
        .build())
}

fn render_review_form(state: &AppState) -> Result<Element, JsValue> {
    // Textarea
    let textarea = ElementBuilder::new("textarea")?
        .class("code-input")
        .attr("placeholder", "Paste your code here...")?
        .attr("spellcheck", "false")?
        .build();
    if let Some(input) = textarea.dyn_ref::<HtmlTextAreaElement>() {
        input.set_value(&state.review.get_code());
    }
    {
        let state_clone = state.clone();
        on_textarea_input(&textarea, move |value| {
            state_clone.review.set_code(value);
            state_clone.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::SubmitButton));
        })?;
    }

    // Selector de lenguaje
    let current = state.review.get_language();
    let mut select = ElementBuilder::new("select")?.class("language-select");
    for language in state.review.get_languages() {
        select = select.child(
            ElementBuilder::new("option")?
                .attr("value", &language.id)?
                .flag("selected", language.id == current)?
                .text(language.option_label())
                .build(),
        )?;
    }
    let select = select.build();
    {
        let state_clone = state.clone();
        on_select_change(&select, move |value| {
            log::debug!("🌐 [HOME] Lenguaje seleccionado: {}", value);
            state_clone.review.set_language(value);
        })?;
    }

    let submit = ElementBuilder::new("button")?
        .class("btn-primary")
        .id(SUBMIT_BUTTON_ID)?
        .attr("type", "submit")?
        .flag("disabled", !can_submit(state))?
        .text(submit_label(state.review.get_loading()))
        .build();

    let toolbar = ElementBuilder::new("div")?
        .class("review-toolbar")
        .child(select)?
        .child(submit)?
        .build();

    let form = ElementBuilder::new("form")?
        .class("review-form")
        .child(textarea)?
        .child(toolbar)?
        .build();

    let state_clone = state.clone();
    on_submit(&form, move || spawn_submit(&state_clone))?;

    Ok(form)
}
