use serde::Deserialize;

use crate::error::CatalogError;

/// Pista reproducible (lista fija o catálogo remoto)
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub audio: String,
    pub image: Option<String>,
}

/// Response del catálogo de Jamendo (`/v3.0/tracks`)
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    pub headers: CatalogHeaders,
    #[serde(default)]
    pub results: Vec<CatalogTrack>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogHeaders {
    pub status: String,
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub error_message: String,
}

#[derive(Debug, Deserialize)]
pub struct CatalogTrack {
    pub id: String,
    pub name: String,
    pub artist_name: String,
    pub audio: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<CatalogTrack> for Track {
    fn from(raw: CatalogTrack) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            artist: raw.artist_name,
            audio: raw.audio,
            image: raw.image.filter(|url| !url.is_empty()),
        }
    }
}

impl CatalogResponse {
    /// Convertir en lista de pistas; todo o nada
    pub fn into_tracks(self) -> Result<Vec<Track>, CatalogError> {
        if self.headers.status != "success" {
            let reason = if self.headers.error_message.is_empty() {
                format!("status={} code={}", self.headers.status, self.headers.code)
            } else {
                self.headers.error_message
            };
            return Err(CatalogError::Rejected(reason));
        }
        Ok(self
            .results
            .into_iter()
            .filter(|t| !t.audio.is_empty())
            .map(Track::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "headers": {"status": "success", "code": 0, "error_message": "", "warnings": "", "results_count": 2},
        "results": [
            {"id": "1532771", "name": "Rain Walk", "duration": 180, "artist_id": "7", "artist_name": "Lo Fi Cat",
             "audio": "https://prod-1.storage.jamendo.com/?trackid=1532771&format=mp31", "image": "https://usercontent.jamendo.com/cover.jpg"},
            {"id": "1532772", "name": "Late Tea", "artist_name": "Moss", "audio": "https://prod-1.storage.jamendo.com/?trackid=1532772", "image": ""}
        ]
    }"#;

    #[test]
    fn maps_catalog_records_to_tracks() {
        let response: CatalogResponse = serde_json::from_str(SAMPLE).unwrap();
        let tracks = response.into_tracks().unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].artist, "Lo Fi Cat");
        assert_eq!(tracks[0].image.as_deref(), Some("https://usercontent.jamendo.com/cover.jpg"));
        assert_eq!(tracks[1].image, None);
    }

    #[test]
    fn failed_status_is_rejected() {
        let body = r#"{"headers": {"status": "failed", "code": 5, "error_message": "Invalid client_id"}, "results": []}"#;
        let response: CatalogResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.into_tracks(),
            Err(CatalogError::Rejected("Invalid client_id".to_string()))
        );
    }
}
