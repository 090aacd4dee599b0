//! WASM equation state
//!
//! Wraps the core counters with the event semantics of a browser page:
//! a click on a counter button, or Enter/Space on a focused one, is an
//! activation; everything else is ignored.

use crate::core::{CounterResult, Counters, Slot, Snapshot};

use super::dom::{slot_for_element, DomEvent, LEFT_ID, MIDDLE_ID, TOTAL_ID};

/// Browser-independent equation widget
#[derive(Debug, Default)]
pub struct WasmEquation {
    /// Widget state
    counters: Counters,
    /// Outcome of the last activation
    last_result: Option<CounterResult<u64>>,
}

impl WasmEquation {
    /// Creates a widget with both counters at zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a widget starting from existing counters
    #[must_use]
    pub fn with_counters(counters: Counters) -> Self {
        Self {
            counters,
            last_result: None,
        }
    }

    /// Increments a counter
    pub fn click(&mut self, slot: Slot) -> CounterResult<u64> {
        let result = self.counters.increment(slot);
        self.last_result = Some(result);
        result
    }

    /// Resolves which counter, if any, an event activates
    ///
    /// `focused` is the ID of the element holding keyboard focus.
    #[must_use]
    pub fn activation_target(event: &DomEvent, focused: Option<&str>) -> Option<Slot> {
        match event {
            DomEvent::Click { element_id } => slot_for_element(element_id),
            DomEvent::KeyPress { key } if key == "Enter" || key == " " => {
                focused.and_then(slot_for_element)
            }
            _ => None,
        }
    }

    /// Handles a DOM event
    ///
    /// Returns `None` when the event is not an activation.
    pub fn handle_event(
        &mut self,
        event: &DomEvent,
        focused: Option<&str>,
    ) -> Option<CounterResult<u64>> {
        Self::activation_target(event, focused).map(|slot| self.click(slot))
    }

    /// Returns the displayed values
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.counters.read()
    }

    /// Returns the outcome of the last activation
    #[must_use]
    pub fn last_result(&self) -> Option<&CounterResult<u64>> {
        self.last_result.as_ref()
    }

    /// Text for each value element, in document order
    #[must_use]
    pub fn element_texts(&self) -> [(&'static str, String); 3] {
        let snap = self.snapshot();
        [
            (LEFT_ID, snap.left.to_string()),
            (MIDDLE_ID, snap.middle.to_string()),
            (TOTAL_ID, snap.total.to_string()),
        ]
    }

    /// Resets both counters
    pub fn reset(&mut self) {
        self.counters = Counters::new();
        self.last_result = None;
    }
}
