// ============================================================================
// ELEMENT BUILDER - Construcción encadenada de nodos para las vistas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{create_element, set_class_name, set_text_content, append_child, set_attribute, toggle_attribute};

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        create_element(tag).map(|element| Self { element })
    }

    /// Reemplaza todas las clases
    pub fn class(self, class: &str) -> Self {
        set_class_name(&self.element, class);
        self
    }

    /// Los ids son los que usa `dom::incremental` para parchear
    pub fn id(self, id: &str) -> Result<Self, JsValue> {
        self.attr("id", id)
    }

    pub fn text(self, text: &str) -> Self {
        set_text_content(&self.element, text);
        self
    }

    pub fn child(self, child: Element) -> Result<Self, JsValue> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, name, value)?;
        Ok(self)
    }

    /// Atributo booleano (`disabled`, `hidden`): presente solo si `on`
    pub fn bool_attr(self, name: &str, on: bool) -> Result<Self, JsValue> {
        toggle_attribute(&self.element, name, on)?;
        Ok(self)
    }

    pub fn build(self) -> Element {
        self.element
    }
}
