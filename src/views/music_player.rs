// ============================================================================
// MUSIC PLAYER VIEW
// ============================================================================
// Loading / Error: solo un mensaje, sin controles.
// Ready: info de pista, anterior / play-pausa / siguiente, contador y volumen.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{append_child, on_click, on_input, set_attribute, ElementBuilder};
use crate::state::app_state::AppState;
use crate::state::player_state::{PlayerState, TrackSourceState, MAX_VOLUME};
use crate::viewmodels::Skip;

pub const PLAYER_ID: &str = "music-player";
pub const PLAYER_TRACK_NAME_ID: &str = "player-track-name";
pub const PLAYER_TRACK_ARTIST_ID: &str = "player-track-artist";
pub const PLAYER_PLAY_BTN_ID: &str = "player-play-btn";
pub const PLAYER_COUNTER_ID: &str = "player-counter";
pub const PLAYER_VOLUME_ID: &str = "player-volume";
pub const PLAYER_VOLUME_LABEL_ID: &str = "player-volume-label";
pub const PLAYER_STATUS_ID: &str = "player-status";
pub const PLAYER_COVER_ID: &str = "player-cover";

/// Etiqueta y aria-label del botón play/pausa
pub fn play_button_labels(is_playing: bool) -> (&'static str, &'static str) {
    if is_playing {
        ("❚❚", "Pause")
    } else {
        ("▶", "Play")
    }
}

/// Renderizar reproductor según el estado de carga
pub fn render_music_player(state: &AppState, player: &PlayerState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .id(PLAYER_ID)?
        .class("music-player")
        .build();

    match &player.source {
        TrackSourceState::Loading => {
            let status = ElementBuilder::new("p")?
                .id(PLAYER_STATUS_ID)?
                .class("music-player__status")
                .text("Loading music...")
                .build();
            append_child(&container, &status)?;
        }
        TrackSourceState::Failed(message) => {
            container.class_list().add_1("music-player--error")?;
            let status = ElementBuilder::new("p")?
                .id(PLAYER_STATUS_ID)?
                .class("music-player__status")
                .attr("role", "alert")?
                .text(message)
                .build();
            append_child(&container, &status)?;
        }
        TrackSourceState::Ready(_) => {
            render_ready(state, player, &container)?;
        }
    }

    Ok(container)
}

fn render_ready(state: &AppState, player: &PlayerState, container: &Element) -> Result<(), JsValue> {
    let (name, artist, cover) = match player.current_track() {
        Some(track) => (track.name.as_str(), track.artist.as_str(), track.image.as_deref()),
        None => ("", "", None),
    };

    // Track info
    let info = ElementBuilder::new("div")?
        .class("music-player__info")
        .build();
    // La portada siempre existe (oculta sin imagen) para poder parchearla
    let img = ElementBuilder::new("img")?
        .id(PLAYER_COVER_ID)?
        .class("music-player__cover")
        .attr("alt", name)?
        .bool_attr("hidden", cover.is_none())?
        .build();
    if let Some(cover) = cover {
        set_attribute(&img, "src", cover)?;
    }
    append_child(&info, &img)?;
    append_child(&info, &ElementBuilder::new("h3")?
        .id(PLAYER_TRACK_NAME_ID)?
        .class("music-player__title")
        .text(name)
        .build())?;
    append_child(&info, &ElementBuilder::new("p")?
        .id(PLAYER_TRACK_ARTIST_ID)?
        .class("music-player__artist")
        .text(artist)
        .build())?;

    // Controls
    let controls = ElementBuilder::new("div")?
        .class("music-player__controls")
        .build();

    let prev_btn = ElementBuilder::new("button")?
        .class("btn-icon")
        .attr("type", "button")?
        .attr("aria-label", "Previous track")?
        .text("‹")
        .build();
    {
        let state = state.clone();
        on_click(&prev_btn, move |_e: web_sys::MouseEvent| skip_from_view(&state, Skip::Previous))?;
    }

    let (play_text, play_label) = play_button_labels(player.playback.is_playing);
    let play_btn = ElementBuilder::new("button")?
        .id(PLAYER_PLAY_BTN_ID)?
        .class("btn-play")
        .attr("type", "button")?
        .attr("aria-label", play_label)?
        .text(play_text)
        .build();
    {
        let state = state.clone();
        on_click(&play_btn, move |_e: web_sys::MouseEvent| {
            if let Some(vm) = state.player_vm() {
                vm.play_pause(&state);
            }
        })?;
    }

    let next_btn = ElementBuilder::new("button")?
        .class("btn-icon")
        .attr("type", "button")?
        .attr("aria-label", "Next track")?
        .text("›")
        .build();
    {
        let state = state.clone();
        on_click(&next_btn, move |_e: web_sys::MouseEvent| skip_from_view(&state, Skip::Next))?;
    }

    append_child(&controls, &prev_btn)?;
    append_child(&controls, &play_btn)?;
    append_child(&controls, &next_btn)?;

    let counter = ElementBuilder::new("div")?
        .id(PLAYER_COUNTER_ID)?
        .class("music-player__counter")
        .text(&player.counter_label())
        .build();

    // Volume
    let volume = player.playback.volume.to_string();
    let volume_row = ElementBuilder::new("div")?
        .class("music-player__volume")
        .build();
    let slider = ElementBuilder::new("input")?
        .id(PLAYER_VOLUME_ID)?
        .attr("type", "range")?
        .attr("min", "0")?
        .attr("max", &MAX_VOLUME.to_string())?
        .attr("value", &volume)?
        .attr("aria-label", "Volume")?
        .build();
    {
        let state = state.clone();
        on_input(&slider, move |e: web_sys::InputEvent| {
            let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
                return;
            };
            if let (Ok(value), Some(vm)) = (target.value().parse::<u8>(), state.player_vm()) {
                vm.set_volume(&state, value);
            }
        })?;
    }
    let volume_label = ElementBuilder::new("span")?
        .id(PLAYER_VOLUME_LABEL_ID)?
        .class("music-player__volume-label")
        .text(&format!("{}%", volume))
        .build();

    append_child(&volume_row, &ElementBuilder::new("span")?.text("🔊").build())?;
    append_child(&volume_row, &slider)?;
    append_child(&volume_row, &volume_label)?;

    append_child(container, &info)?;
    append_child(container, &controls)?;
    append_child(container, &counter)?;
    append_child(container, &volume_row)?;
    Ok(())
}

fn skip_from_view(state: &AppState, direction: Skip) {
    if let Some(vm) = state.player_vm() {
        match direction {
            Skip::Next => vm.next(state),
            Skip::Previous => vm.previous(state),
        }
    }
}
