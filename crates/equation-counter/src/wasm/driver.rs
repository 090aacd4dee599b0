//! WASM Driver - Unified Testing Interface
//!
//! Implements [`CounterDriver`] over the mock DOM so the shared
//! specifications run against the browser frontend's event handling.

use super::dom::{slot_element_id, DomEvent, MockDom, LEFT_ID, MIDDLE_ID, TOTAL_ID};
use super::equation::WasmEquation;
use crate::core::{CounterResult, Counters, Slot, Snapshot};
use crate::driver::CounterDriver;

/// WASM Driver wrapping the widget and mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    /// The widget instance
    equation: WasmEquation,
    /// Mock DOM for testing
    dom: MockDom,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a new WASM driver
    #[must_use]
    pub fn new() -> Self {
        Self::with_counters(Counters::new())
    }

    /// Creates a WASM driver starting from existing counters
    #[must_use]
    pub fn with_counters(counters: Counters) -> Self {
        let mut driver = Self {
            equation: WasmEquation::with_counters(counters),
            dom: MockDom::equation(),
        };
        driver.sync_dom();
        driver
    }

    /// Returns a reference to the widget
    #[must_use]
    pub fn equation(&self) -> &WasmEquation {
        &self.equation
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Dispatches an event to the DOM and lets the widget react to it
    ///
    /// Returns `None` when the event activated nothing.
    pub fn dispatch(&mut self, event: DomEvent) -> Option<CounterResult<u64>> {
        self.dom.dispatch_event(event.clone());
        let focused = self.dom.focused_element().map(str::to_owned);
        let result = self.equation.handle_event(&event, focused.as_deref());
        if result.is_some() {
            self.sync_dom();
        }
        result
    }

    /// Simulates clicking an element by ID
    pub fn click_element(&mut self, element_id: &str) -> Option<CounterResult<u64>> {
        self.dispatch(DomEvent::click(element_id))
    }

    /// Simulates focusing an element by ID
    pub fn focus(&mut self, element_id: &str) {
        self.dispatch(DomEvent::focus(element_id));
    }

    /// Simulates pressing a key on the focused element
    pub fn press_key(&mut self, key: &str) -> Option<CounterResult<u64>> {
        self.dispatch(DomEvent::key_press(key))
    }

    /// Synchronizes DOM text with widget state
    fn sync_dom(&mut self) {
        for (id, text) in self.equation.element_texts() {
            self.dom.set_element_text(id, &text);
        }
    }

    /// Parses a value element's text
    fn element_value(&self, id: &str) -> Option<u64> {
        self.dom.get_element_text(id)?.trim().parse().ok()
    }
}

impl CounterDriver for WasmDriver {
    fn click(&mut self, slot: Slot) -> CounterResult<u64> {
        // a click on a counter button always activates it
        self.click_element(slot_element_id(slot))
            .unwrap_or_else(|| Ok(self.equation.snapshot().get(slot)))
    }

    fn displayed(&self) -> Option<Snapshot> {
        Some(Snapshot {
            left: self.element_value(LEFT_ID)?,
            middle: self.element_value(MIDDLE_ID)?,
            total: self.element_value(TOTAL_ID)?,
        })
    }

    fn reset(&mut self) {
        self.equation.reset();
        self.dom.clear_event_history();
        self.sync_dom();
    }
}
