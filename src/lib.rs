// ============================================================================
// CHRONOBERRY - POMODORO TIMER (RUST PURO + MVVM)
// ============================================================================
// - Views: funciones que renderizan DOM (sin lógica)
// - ViewModels: dueños de timers, audio y listeners de cada página
// - Services: audio, catálogo HTTP, navegación
// - State: Rc<RefCell> + notificaciones
// - Models: tareas, rutas, fases de sesión, pistas
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;
use crate::dom::incremental::NEEDS_FULL_RENDER;
use crate::state::app_state::UpdateType;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    let level = if CONFIG.is_logging_enabled() {
        log::Level::Info
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🍓 ChronoBerry - Rust Puro + MVVM");

    // Sin #app (p.ej. bajo wasm-bindgen-test) no se monta nada
    if dom::get_element_by_id("app").is_none() {
        log::warn!("⚠️ [APP] No hay elemento #app, la app no se monta");
        return Ok(());
    }

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Función pública para re-renderizar la app (re-render completo)
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Función pública para actualizar la app con tipo específico
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        let mut app_ref = app_cell.borrow_mut();
        let Some(app) = app_ref.as_mut() else {
            log::warn!("⚠️ [UPDATE] App no está inicializada");
            return;
        };

        match app.update(update_type) {
            Ok(()) => {}
            Err(e) => {
                let needs_full_render = e
                    .as_string()
                    .map(|msg| msg.contains(NEEDS_FULL_RENDER))
                    .unwrap_or(false);

                if needs_full_render && update_type != UpdateType::FullRender {
                    log::info!("🔄 [UPDATE] {:?} -> re-render completo", update_type);
                    if let Err(e) = app.render() {
                        log::error!("❌ Error re-renderizando: {:?}", e);
                    }
                } else {
                    log::error!("❌ Error actualizando ({:?}): {:?}", update_type, e);
                }
            }
        }
    });
}

/// Función pública WASM para re-renderizar la app (llamable desde JavaScript)
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
