// ============================================================================
// PLAYER VIEWMODEL - Reproductor de música
// ============================================================================
// Un solo HtmlAudioElement por instancia. Cambiar de pista siempre pausa la
// fuente anterior antes de asignar la nueva. El fin natural de la pista usa
// el mismo camino que "siguiente".
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::{TrackSource, CONFIG};
use crate::dom::EventListener;
use crate::services::audio::{play_logged, AudioController};
use crate::services::CatalogClient;
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use crate::state::player_state::{volume_to_gain, PlayerState, TrackSourceState};
use crate::utils::{fixed_tracks, CATALOG_ERROR_MESSAGE};

/// Dirección al cambiar de pista
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Skip {
    Next,
    Previous,
}

pub struct PlayerViewModel {
    player: Rc<RefCell<PlayerState>>,
    audio: Rc<AudioController>,
    ended_listener: RefCell<Option<EventListener>>,
}

impl PlayerViewModel {
    /// Montar el reproductor. `generation` identifica el montaje de la página.
    pub fn mount(state: &AppState, generation: u64) -> Result<Rc<Self>, JsValue> {
        let player_config = &CONFIG.player_config;
        Self::mount_with(
            state,
            generation,
            player_config.source,
            CatalogClient::new(),
            player_config.default_volume,
        )
    }

    /// Igual que `mount` con fuente, cliente y volumen explícitos
    pub fn mount_with(
        state: &AppState,
        generation: u64,
        track_source: TrackSource,
        client: CatalogClient,
        volume: u8,
    ) -> Result<Rc<Self>, JsValue> {
        let source = match track_source {
            TrackSource::Fixed => TrackSourceState::Ready(fixed_tracks()),
            TrackSource::Catalog => TrackSourceState::Loading,
        };
        let player = Rc::new(RefCell::new(PlayerState::new(source, volume)));
        let audio = Rc::new(AudioController::new()?);
        audio.set_volume(volume_to_gain(player.borrow().playback.volume));
        load_current(&player, &audio);

        let ended_listener = {
            let state = state.clone();
            let player = player.clone();
            let audio = audio.clone();
            audio.clone().on_ended(move || {
                log::info!("⏭️ [PLAYER] Pista terminada, pasando a la siguiente");
                skip(&state, &player, &audio, Skip::Next);
            })?
        };

        if track_source == TrackSource::Catalog {
            spawn_catalog_fetch(state.clone(), generation, client, player.clone(), audio.clone());
        }

        Ok(Rc::new(Self {
            player,
            audio,
            ended_listener: RefCell::new(Some(ended_listener)),
        }))
    }

    /// Play/pausa. is_playing solo pasa a true cuando play() se resuelve.
    pub fn play_pause(&self, state: &AppState) {
        if self.player.borrow().current_track().is_none() {
            return;
        }
        if self.player.borrow().playback.is_playing {
            self.audio.pause();
            self.player.borrow_mut().playback.is_playing = false;
            state.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::Player));
            return;
        }

        let state = state.clone();
        let player = self.player.clone();
        let audio = self.audio.clone();
        spawn_local(async move {
            if play_logged(&audio, "PLAYER").await {
                player.borrow_mut().playback.is_playing = true;
                state.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::Player));
            }
        });
    }

    pub fn next(&self, state: &AppState) {
        skip(state, &self.player, &self.audio, Skip::Next);
    }

    pub fn previous(&self, state: &AppState) {
        skip(state, &self.player, &self.audio, Skip::Previous);
    }

    pub fn set_volume(&self, state: &AppState, volume: u8) {
        let gain = self.player.borrow_mut().set_volume(volume);
        self.audio.set_volume(gain);
        state.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::Player));
    }

    pub fn audio(&self) -> &AudioController {
        &self.audio
    }

    /// Copia del estado para las vistas
    pub fn snapshot(&self) -> PlayerState {
        self.player.borrow().clone()
    }

    /// Parar el audio y soltar el listener de `ended`
    pub fn unmount(&self) {
        self.ended_listener.borrow_mut().take();
        self.audio.unload();
        self.player.borrow_mut().playback.is_playing = false;
    }
}

impl Drop for PlayerViewModel {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Asignar la fuente de la pista actual (sin reproducir)
fn load_current(player: &Rc<RefCell<PlayerState>>, audio: &AudioController) {
    if let Some(track) = player.borrow().current_track() {
        audio.set_source(&track.audio);
    }
}

/// Cambiar de pista con wrap; si estaba sonando, la nueva también suena
fn skip(state: &AppState, player: &Rc<RefCell<PlayerState>>, audio: &Rc<AudioController>, direction: Skip) {
    let (track, was_playing) = {
        let mut player = player.borrow_mut();
        let was_playing = player.playback.is_playing;
        let track = match direction {
            Skip::Next => player.next().cloned(),
            Skip::Previous => player.previous().cloned(),
        };
        (track, was_playing)
    };
    let Some(track) = track else {
        return;
    };

    // Pausa antes de cambiar la fuente: set_source lo hace
    audio.set_source(&track.audio);
    log::info!("🎵 [PLAYER] Pista {:?}: {} - {}", direction, track.name, track.artist);

    if was_playing {
        let state = state.clone();
        let player = player.clone();
        let audio = audio.clone();
        spawn_local(async move {
            if !play_logged(&audio, "PLAYER").await && audio.is_paused() {
                player.borrow_mut().playback.is_playing = false;
                state.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::Player));
            }
        });
    }

    state.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::Player));
}

/// Cargar el catálogo una sola vez. Si la página ya se desmontó, se descarta.
fn spawn_catalog_fetch(
    state: AppState,
    generation: u64,
    client: CatalogClient,
    player: Rc<RefCell<PlayerState>>,
    audio: Rc<AudioController>,
) {
    spawn_local(async move {
        let result = client.fetch_tracks().await;

        if !state.is_current_mount(generation) {
            log::info!("🗑️ [CATALOG] Respuesta de un montaje anterior, descartada");
            return;
        }

        let source = match result {
            Ok(tracks) if !tracks.is_empty() => TrackSourceState::Ready(tracks),
            Ok(_) => {
                log::warn!("⚠️ [CATALOG] Catálogo sin pistas reproducibles");
                TrackSourceState::Failed(CATALOG_ERROR_MESSAGE.to_string())
            }
            Err(e) => {
                log::error!("❌ [CATALOG] Error cargando pistas: {}", e);
                TrackSourceState::Failed(CATALOG_ERROR_MESSAGE.to_string())
            }
        };

        {
            let mut player = player.borrow_mut();
            player.source = source;
            player.playback.current_track_index = 0;
        }
        load_current(&player, &audio);
        state.notify_subscribers();
    });
}
