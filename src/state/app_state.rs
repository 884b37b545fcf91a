// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::route::Route;
use crate::viewmodels::{PlayerViewModel, SessionViewModel};

/// Tipo de actualización del DOM
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo (cambio de página o de fase)
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncrementalUpdate {
    /// Texto mm:ss de la cuenta atrás
    Countdown,
    /// Imagen actual del carrusel
    Carousel,
    /// Botón play/pausa, info de pista, contador y volumen
    Player,
    /// Vista previa de la tarea y botón START TIMER
    TaskInput,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    /// Ruta actual (fuente de verdad para el render)
    pub route: Rc<RefCell<Route>>,

    /// Texto del input en la página de tarea
    pub task_input: Rc<RefCell<String>>,

    // ViewModels de la página montada (None fuera de la página de sesión)
    pub session_vm: Rc<RefCell<Option<Rc<SessionViewModel>>>>,
    pub player_vm: Rc<RefCell<Option<Rc<PlayerViewModel>>>>,

    /// Se incrementa en cada montaje; resultados async de montajes viejos se descartan
    pub mount_generation: Rc<RefCell<u64>>,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn(UpdateType)>>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new(route: Route) -> Self {
        Self {
            route: Rc::new(RefCell::new(route)),
            task_input: Rc::new(RefCell::new(String::new())),
            session_vm: Rc::new(RefCell::new(None)),
            player_vm: Rc::new(RefCell::new(None)),
            mount_generation: Rc::new(RefCell::new(0)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn current_route(&self) -> Route {
        self.route.borrow().clone()
    }

    pub fn set_route(&self, route: Route) {
        *self.route.borrow_mut() = route;
    }

    pub fn set_task_input(&self, value: String) {
        *self.task_input.borrow_mut() = value;
    }

    pub fn task_input(&self) -> String {
        self.task_input.borrow().clone()
    }

    pub fn session_vm(&self) -> Option<Rc<SessionViewModel>> {
        self.session_vm.borrow().clone()
    }

    pub fn player_vm(&self) -> Option<Rc<PlayerViewModel>> {
        self.player_vm.borrow().clone()
    }

    /// Nuevo montaje: devuelve la generación vigente
    pub fn bump_mount_generation(&self) -> u64 {
        let mut generation = self.mount_generation.borrow_mut();
        *generation += 1;
        *generation
    }

    pub fn is_current_mount(&self, generation: u64) -> bool {
        *self.mount_generation.borrow() == generation
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_subscribers(&self) {
        self.notify_subscribers_with_type(UpdateType::FullRender);
    }

    pub fn notify_subscribers_with_type(&self, update_type: UpdateType) {
        // Clonar antes de llamar: un subscriber puede registrar otro
        let subscribers: Vec<_> = self.change_subscribers.borrow().iter().cloned().collect();
        for callback in subscribers {
            callback(update_type);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Route::default())
    }
}
