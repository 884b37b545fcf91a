use crate::models::track::Track;
use crate::utils::constants::{CAROUSEL_FRAMES, FIXED_TRACKS};

/// Segundos -> "mm:ss" (los minutos pueden pasar de 99)
pub fn format_countdown(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Pistas compiladas en el binario
pub fn fixed_tracks() -> Vec<Track> {
    FIXED_TRACKS
        .iter()
        .map(|(id, name, artist, audio)| Track {
            id: id.to_string(),
            name: name.to_string(),
            artist: artist.to_string(),
            audio: audio.to_string(),
            image: None,
        })
        .collect()
}

pub fn carousel_frames() -> Vec<String> {
    CAROUSEL_FRAMES.iter().map(|s| s.to_string()).collect()
}
