// ============================================================================
// INCREMENTAL DOM UPDATES - Actualización incremental del DOM
// ============================================================================
// Solo toca los elementos que cambian en cada tick. Si el elemento no existe
// (la página cambió entre medias) se pide un re-render completo.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{get_element_by_id, remove_attribute, set_attribute, set_text_content, toggle_attribute};
use crate::models::task::Task;
use crate::state::app_state::AppState;
use crate::state::player_state::PlayerState;
use crate::views::music_player::{
    play_button_labels, PLAYER_COUNTER_ID, PLAYER_COVER_ID, PLAYER_PLAY_BTN_ID, PLAYER_TRACK_ARTIST_ID,
    PLAYER_TRACK_NAME_ID, PLAYER_VOLUME_LABEL_ID,
};
use crate::views::task_entry::{START_TIMER_BTN_ID, TASK_PREVIEW_ID};
use crate::views::work_session::{CAROUSEL_IMAGE_ID, COUNTDOWN_ID};

/// Mensaje que app.rs interpreta como "hacer re-render completo"
pub const NEEDS_FULL_RENDER: &str = "needs full render";

fn require(id: &str) -> Result<Element, JsValue> {
    get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("#{} not found, {}", id, NEEDS_FULL_RENDER)))
}

/// Texto mm:ss
pub fn update_countdown(state: &AppState) -> Result<(), JsValue> {
    let Some(vm) = state.session_vm() else {
        return Ok(());
    };
    set_text_content(&require(COUNTDOWN_ID)?, &vm.countdown_label());
    Ok(())
}

/// Frame actual del carrusel
pub fn update_carousel(state: &AppState) -> Result<(), JsValue> {
    let Some(vm) = state.session_vm() else {
        return Ok(());
    };
    if let Some(frame) = vm.current_frame() {
        set_attribute(&require(CAROUSEL_IMAGE_ID)?, "src", &frame)?;
    }
    Ok(())
}

/// Controles del reproductor (el slider se actualiza solo)
pub fn update_player(state: &AppState) -> Result<(), JsValue> {
    let Some(vm) = state.player_vm() else {
        return Ok(());
    };
    patch_player(&vm.snapshot())
}

/// Parchear la pista visible sin reconstruir el reproductor.
/// Solo un cambio de estado de carga (Loading/Failed -> Ready) necesita render completo.
pub fn patch_player(player: &PlayerState) -> Result<(), JsValue> {
    let Some(track) = player.current_track() else {
        return Err(JsValue::from_str(NEEDS_FULL_RENDER));
    };

    let (play_text, play_label) = play_button_labels(player.playback.is_playing);
    let play_btn = require(PLAYER_PLAY_BTN_ID)?;
    set_text_content(&play_btn, play_text);
    set_attribute(&play_btn, "aria-label", play_label)?;

    let cover = require(PLAYER_COVER_ID)?;
    match &track.image {
        Some(image) => set_attribute(&cover, "src", image)?,
        None => remove_attribute(&cover, "src")?,
    }
    set_attribute(&cover, "alt", &track.name)?;
    toggle_attribute(&cover, "hidden", track.image.is_none())?;

    set_text_content(&require(PLAYER_TRACK_NAME_ID)?, &track.name);
    set_text_content(&require(PLAYER_TRACK_ARTIST_ID)?, &track.artist);
    set_text_content(&require(PLAYER_COUNTER_ID)?, &player.counter_label());
    set_text_content(&require(PLAYER_VOLUME_LABEL_ID)?, &format!("{}%", player.playback.volume));
    Ok(())
}

/// Vista previa de la tarea + habilitar START TIMER
pub fn update_task_input(state: &AppState) -> Result<(), JsValue> {
    let value = state.task_input();

    let preview = require(TASK_PREVIEW_ID)?;
    set_text_content(&preview, &value);
    toggle_attribute(&preview, "hidden", value.is_empty())?;

    toggle_attribute(&require(START_TIMER_BTN_ID)?, "disabled", Task::parse(&value).is_none())?;
    Ok(())
}
