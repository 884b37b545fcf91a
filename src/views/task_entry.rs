// ============================================================================
// TASK ENTRY VIEW - "SET YOUR TASK"
// ============================================================================
// El input NO provoca re-render completo (perdería el foco): solo se actualiza
// la vista previa y el botón vía IncrementalUpdate::TaskInput.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{append_child, on_click, on_input, on_keydown, ElementBuilder};
use crate::models::route::Route;
use crate::models::task::Task;
use crate::services::navigation;
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use crate::views::shared::{render_back_button, render_logo};

pub const TASK_INPUT_ID: &str = "task-input";
pub const TASK_PREVIEW_ID: &str = "task-preview";
pub const START_TIMER_BTN_ID: &str = "start-timer-btn";

/// Renderizar página de tarea
pub fn render_task_entry(state: &AppState) -> Result<Element, JsValue> {
    let current_input = state.task_input();

    let page = ElementBuilder::new("div")?
        .class("page page--task")
        .build();

    let back = {
        let state = state.clone();
        render_back_button(
            "Back to main page",
            Rc::new(move || navigation::navigate(&state, Route::Landing)),
        )?
    };

    let heading = ElementBuilder::new("div")?
        .class("task-heading")
        .child(
            ElementBuilder::new("span")?
                .class("task-title")
                .text("SET YOUR TASK")
                .build(),
        )?
        .child(
            ElementBuilder::new("p")?
                .class("task-hint")
                .text("write down a task you want to achieve during this session")
                .build(),
        )?
        .build();

    // Vista previa (oculta mientras el input está vacío)
    let preview = ElementBuilder::new("div")?
        .id(TASK_PREVIEW_ID)?
        .class("task-preview")
        .text(&current_input)
        .build();
    if current_input.is_empty() {
        preview.set_attribute("hidden", "")?;
    }

    let input = ElementBuilder::new("input")?
        .id(TASK_INPUT_ID)?
        .class("task-input")
        .attr("type", "text")?
        .attr("placeholder", "Enter your task here")?
        .attr("value", &current_input)?
        .build();

    {
        let state = state.clone();
        on_input(&input, move |e: web_sys::InputEvent| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                state.set_task_input(target.value());
                state.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::TaskInput));
            }
        })?;
    }

    {
        let state = state.clone();
        on_keydown(&input, move |e: web_sys::KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                submit_task(&state);
            }
        })?;
    }

    let start_btn = ElementBuilder::new("button")?
        .id(START_TIMER_BTN_ID)?
        .class("btn-outline btn-large")
        .attr("type", "button")?
        .text("START TIMER")
        .bool_attr("disabled", Task::parse(&current_input).is_none())?
        .build();

    {
        let state = state.clone();
        on_click(&start_btn, move |_e: web_sys::MouseEvent| submit_task(&state))?;
    }

    append_child(&page, &back)?;
    append_child(&page, &render_logo(100)?)?;
    append_child(&page, &heading)?;
    append_child(&page, &preview)?;
    append_child(&page, &input)?;
    append_child(&page, &start_btn)?;

    Ok(page)
}

/// Ir a la sesión con la tarea (URL-encoded en la navegación)
pub fn submit_task(state: &AppState) {
    match Task::parse(&state.task_input()) {
        Some(task) => {
            let task = task.as_str().to_string();
            state.set_task_input(String::new());
            navigation::navigate(state, Route::WorkSession { task });
        }
        None => log::debug!("✋ [TASK] Tarea vacía, ignorando submit"),
    }
}
