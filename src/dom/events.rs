// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Listeners en elementos del DOM renderizado (botones, inputs): cuando el
//   elemento se destruye con set_inner_html(""), el navegador limpia sus
//   listeners. closure.forget() es seguro. Estas closures NUNCA capturan un
//   ViewModel, solo AppState.
// - Listeners en objetos que sobreviven al render (audio, window): usar
//   EventListener, que se desregistra en Drop. El dueño (ViewModel) lo suelta
//   al desmontar.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, InputEvent, KeyboardEvent, MouseEvent};

/// Listener con dueño: se desregistra al hacer drop
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Registrar listener genérico
    pub fn new<F>(target: &EventTarget, event_type: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_type,
            closure,
        })
    }

    pub fn event_type(&self) -> &'static str {
        self.event_type
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.closure.as_ref().unchecked_ref());
    }
}

/// Helper para crear click handler simple
/// Nota: cuando el elemento se destruye del DOM el navegador limpia el listener.
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para crear input handler simple
pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(InputEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(InputEvent)>);
    element.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para keydown (Enter en inputs)
pub fn on_keydown<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(KeyboardEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(KeyboardEvent)>);
    element.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
