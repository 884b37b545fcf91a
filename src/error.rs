// ============================================================================
// ERRORES DE DOMINIO
// ============================================================================
// Los errores de DOM siguen viajando como JsValue (igual que las vistas);
// aquí solo van los errores que la UI necesita distinguir.
// ============================================================================

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

use crate::models::session::{SessionChoice, SessionPhase};

/// Nombre del DOMException que lanza `play()` cuando una carga nueva lo interrumpe
const ABORT_ERROR: &str = "AbortError";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlaybackError {
    /// `play()` interrumpido por un cambio de fuente: esperado, no se muestra
    #[error("playback interrupted by a new load")]
    Interrupted,

    #[error("playback failed: {0}")]
    Failed(String),
}

impl PlaybackError {
    /// Clasificar por nombre de excepción
    pub fn classify(name: &str, message: &str) -> Self {
        if name == ABORT_ERROR {
            PlaybackError::Interrupted
        } else if message.is_empty() {
            PlaybackError::Failed(name.to_string())
        } else {
            PlaybackError::Failed(format!("{}: {}", name, message))
        }
    }

    /// Convertir el rechazo de la promesa de `play()`
    pub fn from_js(value: JsValue) -> Self {
        if let Some(exception) = value.dyn_ref::<web_sys::DomException>() {
            return Self::classify(&exception.name(), &exception.message());
        }
        if let Some(error) = value.dyn_ref::<js_sys::Error>() {
            let name: String = error.name().into();
            let message: String = error.message().into();
            return Self::classify(&name, &message);
        }
        PlaybackError::Failed(format!("{:?}", value))
    }

    pub fn is_interrupted(&self) -> bool {
        matches!(self, PlaybackError::Interrupted)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    #[error("Parse error: {0}")]
    Parse(String),

    /// El catálogo respondió 200 pero con `headers.status != "success"`
    #[error("Catalog rejected request: {0}")]
    Rejected(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("choice {choice:?} is not available in phase {phase:?}")]
    InvalidChoice {
        phase: SessionPhase,
        choice: SessionChoice,
    },
}
