// ============================================================================
// LANDING VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::route::Route;
use crate::services::navigation;
use crate::state::app_state::AppState;
use crate::views::shared::render_logo;

/// Renderizar página de inicio
pub fn render_landing(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?
        .class("page page--landing")
        .build();

    let title = ElementBuilder::new("h2")?
        .class("landing-title")
        .text("ChronoBerry")
        .build();

    let subtitle = ElementBuilder::new("span")?
        .class("landing-subtitle")
        .text("pomodoro timer")
        .build();

    let start_btn = ElementBuilder::new("button")?
        .id("landing-start-btn")?
        .class("btn-outline btn-large")
        .attr("type", "button")?
        .text("START")
        .build();

    {
        let state = state.clone();
        on_click(&start_btn, move |_e: web_sys::MouseEvent| {
            navigation::navigate(&state, Route::TaskEntry);
        })?;
    }

    append_child(&page, &title)?;
    append_child(&page, &subtitle)?;
    append_child(&page, &render_logo(200)?)?;
    append_child(&page, &start_btn)?;

    Ok(page)
}
