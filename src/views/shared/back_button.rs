use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};

/// Botón redondo "atrás" en la esquina superior izquierda
pub fn render_back_button(aria_label: &str, on_back: Rc<dyn Fn()>) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .class("btn-back")
        .attr("aria-label", aria_label)?
        .attr("type", "button")?
        .text("←")
        .build();

    on_click(&button, move |_e: web_sys::MouseEvent| on_back())?;

    Ok(button)
}
