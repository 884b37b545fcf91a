use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::utils::LOGO_URL;

/// Logo de la fresa (la animación "wobble" va en CSS)
pub fn render_logo(size: u32) -> Result<Element, JsValue> {
    let size = size.to_string();
    Ok(ElementBuilder::new("img")?
        .class("logo logo--wobble")
        .attr("src", LOGO_URL)?
        .attr("alt", "ChronoBerry logo")?
        .attr("width", &size)?
        .attr("height", &size)?
        .build())
}
