// ============================================================================
// NAVIGATION - Rutas con History API (pushState / popstate)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Event, UrlSearchParams};

use crate::dom::{window, EventListener};
use crate::models::route::{Route, TASK_PARAM};
use crate::state::app_state::AppState;

/// URL de una ruta; la tarea va con encodeURIComponent
pub fn href(route: &Route) -> String {
    match route {
        Route::WorkSession { task } => {
            let encoded: String = js_sys::encode_uri_component(task).into();
            format!("{}?{}={}", route.path(), TASK_PARAM, encoded)
        }
        _ => route.path().to_string(),
    }
}

/// Leer el parámetro `task` ya decodificado de un query string
pub fn task_from_search(search: &str) -> Option<String> {
    UrlSearchParams::new_with_str(search).ok()?.get(TASK_PARAM)
}

/// Ruta actual según window.location
pub fn current_route() -> Route {
    let Some(location) = window().map(|w| w.location()) else {
        return Route::default();
    };
    let pathname = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    Route::from_parts(&pathname, task_from_search(&search))
}

/// Navegar: pushState + actualizar estado + re-render (diferido por el subscriber)
pub fn navigate(state: &AppState, route: Route) {
    let url = href(&route);
    log::info!("🧭 [NAV] -> {}", url);

    if let Some(history) = window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&url)) {
            log::warn!("⚠️ [NAV] pushState falló: {:?}", e);
        }
    }

    state.set_route(route);
    state.notify_subscribers();
}

/// Escuchar atrás/adelante del navegador. El dueño guarda el handle.
pub fn listen_popstate(state: &AppState) -> Result<Option<EventListener>, JsValue> {
    let Some(win) = window() else {
        return Ok(None);
    };
    let state = state.clone();
    let listener = EventListener::new(&win, "popstate", move |_e: Event| {
        let route = current_route();
        log::info!("🧭 [NAV] popstate -> {:?}", route);
        state.set_route(route);
        state.notify_subscribers();
    })?;
    Ok(Some(listener))
}
