// ============================================================================
// REVIEW PANEL - Resultado del análisis / error / loading
// ============================================================================
// Se re-renderiza de forma incremental dentro de #review-panel
// (ver dom::incremental::update_review_panel).
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{ElementBuilder, on_click};
use crate::models::{Issue, IssueCategory, ReviewResult};
use crate::state::AppState;
use crate::viewmodels::{quality_label, ReviewViewModel};

/// Texto del botón de enviar
pub fn submit_label(loading: bool) -> &'static str {
    if loading {
        "Analyzing..."
    } else {
        "Analyze code"
    }
}

/// Lanzar el análisis del código actual
pub fn spawn_submit(state: &AppState) {
    let state = state.clone();
    spawn_local(async move {
        ReviewViewModel::from_config().submit(&state).await;
    });
}

/// Contenido del panel según el estado de review
pub fn render_review_panel(state: &AppState) -> Result<Element, JsValue> {
    if state.review.get_loading() {
        return Ok(ElementBuilder::new("div")?
            .class("review-loading")
            .child(ElementBuilder::new("div")?.class("spinner").build())?
            .child(ElementBuilder::new("p")?.text("Analyzing your code...").build())?
            .build());
    }

    if let Some(message) = state.review.get_error() {
        let retry = ElementBuilder::new("button")?
            .class("btn-secondary")
            .attr("type", "button")?
            .text("Try again")
            .build();
        let state_clone = state.clone();
        on_click(&retry, move |_| {
            log::info!("🔁 [REVIEW] Reintentando análisis");
            spawn_submit(&state_clone);
        })?;

        return Ok(ElementBuilder::new("div")?
            .class("review-error")
            .child(ElementBuilder::new("p")?.class("error-message").text(&message).build())?
            .child(retry)?
            .build());
    }

    match state.review.get_result() {
        Some(result) => render_result(&result),
        None => Ok(ElementBuilder::new("div")?
            .class("review-empty")
            .text("Paste some code and press Analyze to get feedback.")
            .build()),
    }
}

fn render_result(result: &ReviewResult) -> Result<Element, JsValue> {
    let score = ElementBuilder::new("div")?
        .class(&format!("quality-score {}", result.quality_level().css_class()))
        .child(ElementBuilder::new("span")?.class("quality-value").text(&quality_label(result)).build())?
        .child(ElementBuilder::new("span")?.class("quality-caption").text("Code quality").build())?
        .build();

    let summary = ElementBuilder::new("p")?
        .class("issues-count")
        .text(&format!("{} issue(s) found", result.total_issues()))
        .build();

    let mut panel = ElementBuilder::new("div")?
        .class("review-result")
        .child(score)?
        .child(summary)?;

    if !result.overall_feedback.trim().is_empty() {
        panel = panel.child(
            ElementBuilder::new("section")?
                .class("overall-feedback")
                .child(ElementBuilder::new("h3")?.text("Overall feedback").build())?
                .child(ElementBuilder::new("p")?.text(&result.overall_feedback).build())?
                .build(),
        )?;
    }

    let extra = result.extra_feedback();
    if !extra.is_empty() {
        let labels: Vec<String> = extra.iter().map(|issue| issue.label()).collect();
        panel = panel.child(
            ElementBuilder::new("section")?
                .class("detailed-feedback")
                .child(ElementBuilder::new("h3")?.text("Details").build())?
                .child(render_list(labels.iter().map(String::as_str))?)?
                .build(),
        )?;
    }

    for category in result.categories() {
        panel = panel.child(render_category(&category)?)?;
    }

    Ok(panel.build())
}

fn render_category(category: &IssueCategory<'_>) -> Result<Element, JsValue> {
    let labels: Vec<String> = category.issues.iter().map(Issue::label).collect();
    let fixes: Vec<String> = category.fixes.iter().map(Issue::label).collect();

    let mut section = ElementBuilder::new("section")?
        .class("issue-category")
        .child(ElementBuilder::new("h4")?.text(category.title).build())?;

    if !labels.is_empty() {
        section = section.child(render_list(labels.iter().map(String::as_str))?)?;
    }

    if !fixes.is_empty() {
        section = section
            .child(ElementBuilder::new("h5")?.text("Suggested fixes").build())?
            .child(render_list(fixes.iter().map(String::as_str))?)?;
    }

    Ok(section.build())
}

fn render_list<'a>(items: impl Iterator<Item = &'a str>) -> Result<Element, JsValue> {
    let mut list = ElementBuilder::new("ul")?;
    for item in items {
        list = list.child(ElementBuilder::new("li")?.text(item).build())?;
    }
    Ok(list.build())
}
