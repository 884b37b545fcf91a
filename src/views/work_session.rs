// ============================================================================
// WORK SESSION VIEW - Tarea + cuenta atrás + carrusel + elecciones
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::session::SessionChoice;
use crate::state::app_state::AppState;
use crate::views::music_player::render_music_player;
use crate::views::shared::render_back_button;
use crate::viewmodels::SessionViewModel;

pub const COUNTDOWN_ID: &str = "countdown";
pub const CAROUSEL_IMAGE_ID: &str = "carousel-image";
pub const SESSION_TASK_ID: &str = "session-task";
pub const SESSION_CHOICES_ID: &str = "session-choices";

/// Renderizar página de sesión
pub fn render_work_session(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?
        .class("page page--session")
        .build();

    let Some(vm) = state.session_vm() else {
        log::warn!("⚠️ [SESSION] render sin ViewModel montado");
        return Ok(page);
    };

    let back = {
        let state = state.clone();
        render_back_button(
            "Back to timer page",
            Rc::new(move || {
                if let Some(vm) = state.session_vm() {
                    vm.leave(&state);
                }
            }),
        )?
    };

    let task = ElementBuilder::new("div")?
        .id(SESSION_TASK_ID)?
        .class("session-task")
        .text(vm.task())
        .build();

    let countdown = ElementBuilder::new("div")?
        .id(COUNTDOWN_ID)?
        .class("countdown")
        .attr("data-mode", vm.phase().mode().label())?
        .text(&vm.countdown_label())
        .build();

    let carousel = ElementBuilder::new("div")?
        .class("carousel")
        .child(
            ElementBuilder::new("img")?
                .id(CAROUSEL_IMAGE_ID)?
                .attr("src", &vm.current_frame().unwrap_or_default())?
                .attr("alt", "fruit")?
                .attr("width", "80")?
                .attr("height", "80")?
                .build(),
        )?
        .build();

    append_child(&page, &back)?;
    append_child(&page, &task)?;
    append_child(&page, &countdown)?;
    append_child(&page, &carousel)?;

    if let Some(choices) = render_choices(state, &vm)? {
        append_child(&page, &choices)?;
    }

    if let Some(player_vm) = state.player_vm() {
        let player = render_music_player(state, &player_vm.snapshot())?;
        append_child(&page, &player)?;
    }

    Ok(page)
}

/// Botones de elección; `None` mientras la cuenta atrás corre
fn render_choices(state: &AppState, vm: &SessionViewModel) -> Result<Option<Element>, JsValue> {
    let choices = vm.choices();
    if choices.is_empty() {
        return Ok(None);
    }

    let container = ElementBuilder::new("div")?
        .id(SESSION_CHOICES_ID)?
        .class("session-choices")
        .build();

    for &choice in choices {
        let class = match choice {
            SessionChoice::Finish => "btn-choice btn-choice--secondary",
            _ => "btn-choice btn-choice--primary",
        };
        let button = ElementBuilder::new("button")?
            .class(class)
            .attr("type", "button")?
            .attr("data-choice", &format!("{:?}", choice))?
            .text(choice.label())
            .build();

        let state = state.clone();
        on_click(&button, move |_e: web_sys::MouseEvent| {
            if let Some(vm) = state.session_vm() {
                if let Err(e) = vm.choose(&state, choice) {
                    log::error!("❌ [SESSION] {}", e);
                }
            }
        })?;

        append_child(&container, &button)?;
    }

    Ok(Some(container))
}
