// ============================================================================
// APP - Aplicación principal
// ============================================================================
// Montar/desmontar páginas según la ruta y renderizar en #app.
// Al cambiar de ruta se desmonta PRIMERO la página anterior (timers, listeners,
// audio) y luego se monta la nueva.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::incremental::*;
use crate::dom::{append_child, get_element_by_id, set_inner_html, EventListener};
use crate::models::route::Route;
use crate::services::navigation;
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use crate::viewmodels::{PlayerViewModel, SessionViewModel};
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
    /// Ruta cuyos recursos están montados
    mounted: Option<Route>,
    _popstate: Option<EventListener>,
}

impl App {
    /// Crear nueva aplicación sobre `#app`
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;
        Self::with_root(root, navigation::current_route())
    }

    /// Crear aplicación sobre un elemento raíz y ruta inicial dados
    pub fn with_root(root: Element, route: Route) -> Result<Self, JsValue> {
        let state = AppState::new(route);

        // Suscribirse a cambios de estado. El render se difiere al siguiente
        // macrotask: un listener nunca se suelta mientras se está ejecutando.
        state.subscribe_to_changes(move |update_type| {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app_with_type(update_type);
            })
            .forget();
        });

        let popstate = navigation::listen_popstate(&state)?;

        Ok(Self {
            state,
            root,
            mounted: None,
            _popstate: popstate,
        })
    }

    /// Renderizar aplicación (re-monta si la ruta cambió)
    pub fn render(&mut self) -> Result<(), JsValue> {
        let route = self.state.current_route();
        if self.mounted.as_ref() != Some(&route) {
            self.unmount();
            self.mount(&route)?;
            self.mounted = Some(route);
        }

        set_inner_html(&self.root, "");
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)?;
        Ok(())
    }

    fn mount(&mut self, route: &Route) -> Result<(), JsValue> {
        let generation = self.state.bump_mount_generation();
        log::info!("📌 [APP] Montando {:?} (generación {})", route, generation);

        match route {
            Route::Landing => {}
            Route::TaskEntry => {
                self.state.set_task_input(String::new());
            }
            Route::WorkSession { task } => {
                let session_vm = SessionViewModel::mount(&self.state, task.clone())?;
                *self.state.session_vm.borrow_mut() = Some(session_vm);

                if CONFIG.player_config.enabled {
                    let player_vm = PlayerViewModel::mount(&self.state, generation)?;
                    *self.state.player_vm.borrow_mut() = Some(player_vm);
                }
            }
        }
        Ok(())
    }

    /// Soltar los recursos de la página montada
    fn unmount(&mut self) {
        let session_vm = self.state.session_vm.borrow_mut().take();
        if let Some(vm) = session_vm {
            vm.unmount();
        }
        let player_vm = self.state.player_vm.borrow_mut().take();
        if let Some(vm) = player_vm {
            vm.unmount();
        }
        self.mounted = None;
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        // Ruta cambiada pero aún sin montar: el re-render completo ya viene en camino
        if self.mounted.as_ref() != Some(&self.state.current_route()) {
            return Ok(());
        }
        match update_type {
            IncrementalUpdate::Countdown => update_countdown(&self.state),
            IncrementalUpdate::Carousel => update_carousel(&self.state),
            IncrementalUpdate::Player => update_player(&self.state),
            IncrementalUpdate::TaskInput => update_task_input(&self.state),
        }
    }

    /// Despachar según tipo de actualización
    pub fn update(&mut self, update_type: UpdateType) -> Result<(), JsValue> {
        match update_type {
            UpdateType::FullRender => self.render(),
            UpdateType::Incremental(inc) => self.update_incremental(inc),
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.unmount();
    }
}
