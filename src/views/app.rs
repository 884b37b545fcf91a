// ============================================================================
// APP VIEW - Elegir la página según la ruta
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::models::route::Route;
use crate::state::app_state::AppState;
use crate::views::{render_landing, render_task_entry, render_work_session};

/// Renderizar la página de la ruta actual
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    match state.current_route() {
        Route::Landing => render_landing(state),
        Route::TaskEntry => render_task_entry(state),
        Route::WorkSession { .. } => render_work_session(state),
    }
}
