//! Browser WASM bindings for the equation widget
//!
//! Builds the same element tree as [`MockDom::equation`](super::MockDom::equation)
//! inside a real document and wires the counter buttons to click listeners.
//! Keyboard activation comes for free: browsers fire `click` on a focused
//! `<button>` for Enter and Space.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{console, Document, Element};

use super::dom::{
    slot_element_id, EQUALS_ID, EQUATION_ID, LEFT_ID, MIDDLE_ID, PLUS_ID, TOTAL_ID,
};
use super::equation::WasmEquation;
use crate::core::Slot;

/// Browser equation widget - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserEquation {
    state: Rc<RefCell<WasmEquation>>,
    document: Option<Document>,
    listeners: Vec<Closure<dyn FnMut(web_sys::Event)>>,
}

#[wasm_bindgen]
impl BrowserEquation {
    /// Create a new, unmounted widget
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        Self {
            state: Rc::new(RefCell::new(WasmEquation::new())),
            document: None,
            listeners: Vec::new(),
        }
    }

    /// Mounts the widget as the last child of the element with `root_id`
    ///
    /// A widget mounts once; element IDs would collide otherwise.
    pub fn mount(&mut self, root_id: &str) -> Result<(), JsValue> {
        if self.is_mounted() {
            return Err(JsValue::from_str("equation widget is already mounted"));
        }
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let root = document
            .get_element_by_id(root_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{root_id}'")))?;

        let container = create(&document, "div", EQUATION_ID, "equation", None)?;
        container.append_child(&create(&document, "button", LEFT_ID, "counter", None)?)?;
        container.append_child(&create(&document, "span", PLUS_ID, "glyph", Some("+"))?)?;
        container.append_child(&create(&document, "button", MIDDLE_ID, "counter", None)?)?;
        container.append_child(&create(&document, "span", EQUALS_ID, "glyph", Some("="))?)?;
        container.append_child(&create(&document, "output", TOTAL_ID, "total", None)?)?;
        root.append_child(&container)?;

        for slot in Slot::ALL {
            let state = Rc::clone(&self.state);
            let doc = document.clone();
            let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event| {
                let result = state.borrow_mut().click(slot);
                if let Err(e) = result {
                    console::warn_1(&e.to_string().into());
                }
                render(&doc, &state.borrow());
            });

            let button = document
                .get_element_by_id(slot_element_id(slot))
                .ok_or_else(|| JsValue::from_str("counter button missing after mount"))?;
            button.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
            self.listeners.push(listener);
        }

        render(&document, &self.state.borrow());
        self.document = Some(document);
        console::log_1(&format!("equation mounted into #{root_id}").into());
        Ok(())
    }

    /// Whether `mount` has succeeded
    #[wasm_bindgen(getter, js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.document.is_some()
    }

    /// Left counter
    #[wasm_bindgen(getter)]
    pub fn left(&self) -> u64 {
        self.state.borrow().snapshot().left
    }

    /// Middle counter
    #[wasm_bindgen(getter)]
    pub fn middle(&self) -> u64 {
        self.state.borrow().snapshot().middle
    }

    /// Derived total
    #[wasm_bindgen(getter)]
    pub fn total(&self) -> u64 {
        self.state.borrow().snapshot().total
    }

    /// Increments the left counter programmatically
    pub fn click_left(&mut self) -> Result<u64, JsValue> {
        self.click(Slot::Left)
    }

    /// Increments the middle counter programmatically
    pub fn click_middle(&mut self) -> Result<u64, JsValue> {
        self.click(Slot::Middle)
    }

    /// Snapshot as JSON (`{"left":..,"middle":..,"total":..}`)
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.state.borrow().snapshot()).unwrap_or_else(|_| "{}".into())
    }
}

impl BrowserEquation {
    fn click(&mut self, slot: Slot) -> Result<u64, JsValue> {
        let result = self.state.borrow_mut().click(slot);
        if let Some(document) = &self.document {
            render(document, &self.state.borrow());
        }
        result.map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for BrowserEquation {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates an element with an id, a class and optional text
fn create(
    document: &Document,
    tag: &str,
    id: &str,
    class: &str,
    text: Option<&str>,
) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    element.set_id(id);
    element.set_class_name(class);
    if tag == "button" {
        element.set_attribute("type", "button")?;
    }
    element.set_text_content(text);
    Ok(element)
}

/// Writes the three values into their elements
fn render(document: &Document, equation: &WasmEquation) {
    for (id, text) in equation.element_texts() {
        if let Some(element) = document.get_element_by_id(id) {
            element.set_text_content(Some(&text));
        }
    }
}

/// Initialize the module in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Equation WASM initialized".into());
}
