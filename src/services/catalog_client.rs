// ============================================================================
// CATALOG CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Un único GET sin autenticación a la API pública de Jamendo.
// Sin cache, sin reintentos, una sola página: todo o nada.
// ============================================================================

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::error::CatalogError;
use crate::models::track::{CatalogResponse, Track};

/// Cliente del catálogo de pistas
#[derive(Clone)]
pub struct CatalogClient {
    request_url: String,
}

impl CatalogClient {
    pub fn new() -> Self {
        Self {
            request_url: CONFIG.catalog_request_url(),
        }
    }

    pub fn with_url(request_url: impl Into<String>) -> Self {
        Self {
            request_url: request_url.into(),
        }
    }

    pub fn request_url(&self) -> &str {
        &self.request_url
    }

    /// Obtener la página de pistas
    pub async fn fetch_tracks(&self) -> Result<Vec<Track>, CatalogError> {
        log::info!("🎵 [CATALOG] Obteniendo pistas: {}", self.request_url);

        let response = Request::get(&self.request_url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(CatalogError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let body = response
            .json::<CatalogResponse>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        let tracks = body.into_tracks()?;
        log::info!("✅ [CATALOG] {} pistas recibidas", tracks.len());
        Ok(tracks)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}
