// ============================================================================
// AUDIO CONTROLLER - Envoltorio de un único HtmlAudioElement
// ============================================================================
// El elemento NO se inserta en el DOM: sobrevive a los re-render y solo su
// ViewModel dueño lo toca.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, HtmlAudioElement};

use crate::dom::EventListener;
use crate::error::PlaybackError;

pub struct AudioController {
    element: HtmlAudioElement,
}

impl AudioController {
    /// Elemento vacío (el reproductor asigna la fuente después)
    pub fn new() -> Result<Self, JsValue> {
        let element = HtmlAudioElement::new()?;
        element.set_preload("auto");
        Ok(Self { element })
    }

    /// Elemento con fuente fija (alarma)
    pub fn with_source(src: &str) -> Result<Self, JsValue> {
        let element = HtmlAudioElement::new_with_src(src)?;
        element.set_preload("auto");
        Ok(Self { element })
    }

    /// Pedir reproducción; el resultado llega cuando la promesa se resuelve
    pub async fn play(&self) -> Result<(), PlaybackError> {
        let element = self.element.clone();
        let promise = element.play().map_err(PlaybackError::from_js)?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(PlaybackError::from_js)
    }

    pub fn pause(&self) {
        if let Err(e) = self.element.pause() {
            log::warn!("⚠️ [AUDIO] pause() falló: {:?}", e);
        }
    }

    /// Volver al inicio
    pub fn rewind(&self) {
        self.element.set_current_time(0.0);
    }

    /// Pausar y volver al inicio
    pub fn stop(&self) {
        self.pause();
        self.rewind();
    }

    /// Cambiar de fuente pausando primero (sin audio solapado)
    pub fn set_source(&self, src: &str) {
        self.pause();
        self.element.set_src(src);
    }

    /// Quitar la fuente para que el navegador suelte la descarga
    pub fn unload(&self) {
        self.pause();
        let _ = self.element.remove_attribute("src");
        self.element.load();
    }

    pub fn set_volume(&self, gain: f64) {
        self.element.set_volume(gain.clamp(0.0, 1.0));
    }

    pub fn is_paused(&self) -> bool {
        self.element.paused()
    }

    pub fn source(&self) -> String {
        self.element.src()
    }

    /// Posición de reproducción en segundos
    pub fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    /// Disparar un evento sobre el elemento (p.ej. `ended` sintético)
    pub fn dispatch(&self, event: &Event) -> Result<bool, JsValue> {
        self.element.dispatch_event(event)
    }

    /// Listener del evento `ended` (fin natural de la pista)
    pub fn on_ended<F>(&self, mut handler: F) -> Result<EventListener, JsValue>
    where
        F: FnMut() + 'static,
    {
        EventListener::new(&self.element, "ended", move |_e: Event| handler())
    }
}

/// Reproducir y registrar el resultado según la taxonomía de errores:
/// interrumpido => silencio, fallo real => log y no se reintenta
pub async fn play_logged(audio: &AudioController, context: &str) -> bool {
    match audio.play().await {
        Ok(()) => true,
        Err(PlaybackError::Interrupted) => {
            log::debug!("🔇 [{}] play() interrumpido por nueva carga", context);
            false
        }
        Err(e) => {
            log::error!("❌ [{}] Error reproduciendo audio: {}", context, e);
            false
        }
    }
}
