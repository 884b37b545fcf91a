// ============================================================================
// PLAYER STATE - Estado del reproductor de música
// ============================================================================

use crate::models::track::Track;

/// Volumen máximo del slider
pub const MAX_VOLUME: u8 = 100;

/// Slider 0..=100 -> volumen del elemento 0.0..=1.0 (lineal)
pub fn volume_to_gain(volume: u8) -> f64 {
    f64::from(volume.min(MAX_VOLUME)) / f64::from(MAX_VOLUME)
}

/// Siguiente índice con wrap
pub fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 || index + 1 >= len {
        0
    } else {
        index + 1
    }
}

/// Índice anterior con wrap
pub fn wrap_previous(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index == 0 || index >= len {
        len - 1
    } else {
        index - 1
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    pub current_track_index: usize,
    pub is_playing: bool,
    pub volume: u8,
}

impl PlaybackState {
    pub fn new(volume: u8) -> Self {
        Self {
            current_track_index: 0,
            is_playing: false,
            volume: volume.min(MAX_VOLUME),
        }
    }
}

/// Estado de carga de las pistas
#[derive(Clone, Debug, PartialEq)]
pub enum TrackSourceState {
    Loading,
    Ready(Vec<Track>),
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct PlayerState {
    pub source: TrackSourceState,
    pub playback: PlaybackState,
}

impl PlayerState {
    pub fn new(source: TrackSourceState, volume: u8) -> Self {
        Self {
            source,
            playback: PlaybackState::new(volume),
        }
    }

    pub fn tracks(&self) -> &[Track] {
        match &self.source {
            TrackSourceState::Ready(tracks) => tracks,
            _ => &[],
        }
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.tracks().get(self.playback.current_track_index)
    }

    /// Avanzar a la siguiente pista (wrap). `None` si no hay pistas
    pub fn next(&mut self) -> Option<&Track> {
        let len = self.tracks().len();
        if len == 0 {
            return None;
        }
        self.playback.current_track_index = wrap_next(self.playback.current_track_index, len);
        self.current_track()
    }

    /// Retroceder a la pista anterior (wrap)
    pub fn previous(&mut self) -> Option<&Track> {
        let len = self.tracks().len();
        if len == 0 {
            return None;
        }
        self.playback.current_track_index = wrap_previous(self.playback.current_track_index, len);
        self.current_track()
    }

    pub fn set_volume(&mut self, volume: u8) -> f64 {
        self.playback.volume = volume.min(MAX_VOLUME);
        volume_to_gain(self.playback.volume)
    }

    /// Texto del contador `n / total`
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.playback.current_track_index + 1, self.tracks().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracks(n: usize) -> Vec<Track> {
        (0..n)
            .map(|i| Track {
                id: i.to_string(),
                name: format!("Track {}", i),
                artist: "Unknown".to_string(),
                audio: format!("https://cdn.example/{}.mp3", i),
                image: None,
            })
            .collect()
    }

    #[test]
    fn volume_maps_linearly() {
        for v in 0..=100u8 {
            assert!((volume_to_gain(v) - f64::from(v) / 100.0).abs() < f64::EPSILON);
        }
        assert_eq!(volume_to_gain(250), 1.0);
    }

    #[test]
    fn wrap_helpers_for_any_length() {
        for len in 1..=10 {
            assert_eq!(wrap_next(len - 1, len), 0);
            assert_eq!(wrap_previous(0, len), len - 1);
            for i in 0..len {
                assert_eq!(wrap_previous(wrap_next(i, len), len), i);
            }
        }
    }

    #[test]
    fn player_wraps_over_ready_tracks() {
        let mut player = PlayerState::new(TrackSourceState::Ready(tracks(8)), 50);
        assert_eq!(player.previous().map(|t| t.id.as_str()), Some("7"));
        assert_eq!(player.next().map(|t| t.id.as_str()), Some("0"));
        assert_eq!(player.counter_label(), "1 / 8");
    }

    #[test]
    fn no_tracks_while_loading_or_failed() {
        let mut loading = PlayerState::new(TrackSourceState::Loading, 50);
        assert!(loading.next().is_none());
        assert!(loading.current_track().is_none());

        let mut failed = PlayerState::new(TrackSourceState::Failed("boom".to_string()), 50);
        assert!(failed.previous().is_none());
        assert_eq!(failed.playback.current_track_index, 0);
    }

    #[test]
    fn set_volume_clamps() {
        let mut player = PlayerState::new(TrackSourceState::Ready(tracks(1)), 50);
        assert_eq!(player.set_volume(30), 0.3);
        assert_eq!(player.set_volume(200), 1.0);
        assert_eq!(player.playback.volume, 100);
    }
}
