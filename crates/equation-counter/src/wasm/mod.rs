//! WASM frontend for the equation widget
//!
//! The mock DOM and driver are always compiled so the browser event
//! semantics are covered by native tests; the real bindings need the
//! `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod equation;

#[cfg(feature = "wasm")]
pub use browser::BrowserEquation;
pub use dom::{
    slot_element_id, slot_for_element, DomElement, DomEvent, MockDom, EQUALS_ID, EQUATION_ID,
    LEFT_ID, MIDDLE_ID, PLUS_ID, TOTAL_ID,
};
pub use driver::WasmDriver;
pub use equation::WasmEquation;
