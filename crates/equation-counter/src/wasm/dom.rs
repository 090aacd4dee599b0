//! Mock DOM for WASM Testing
//!
//! A browser-free model of the widget's element tree, so the WASM frontend
//! can be exercised by ordinary `cargo test` runs.

use std::collections::HashMap;

use crate::core::Slot;

/// Root container ID
pub const EQUATION_ID: &str = "equation";
/// Left counter button ID
pub const LEFT_ID: &str = "counter-left";
/// Middle counter button ID
pub const MIDDLE_ID: &str = "counter-middle";
/// Total output ID
pub const TOTAL_ID: &str = "counter-total";
/// `+` glyph ID
pub const PLUS_ID: &str = "glyph-plus";
/// `=` glyph ID
pub const EQUALS_ID: &str = "glyph-equals";

/// Returns the element ID of a counter button
#[must_use]
pub const fn slot_element_id(slot: Slot) -> &'static str {
    match slot {
        Slot::Left => LEFT_ID,
        Slot::Middle => MIDDLE_ID,
    }
}

/// Returns the counter a button ID belongs to
#[must_use]
pub fn slot_for_element(id: &str) -> Option<Slot> {
    Slot::ALL
        .into_iter()
        .find(|slot| slot_element_id(*slot) == id)
}

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Pointer activation of an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Key press delivered to the focused element
    KeyPress {
        /// The key that was pressed (`KeyboardEvent.key`)
        key: String,
    },
    /// Focus event on an element
    Focus {
        /// The ID of the focused element
        element_id: String,
    },
    /// Blur event (element lost focus)
    Blur {
        /// The ID of the element that lost focus
        element_id: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a key press event
    #[must_use]
    pub fn key_press(key: &str) -> Self {
        Self::KeyPress {
            key: key.to_string(),
        }
    }

    /// Creates a focus event
    #[must_use]
    pub fn focus(element_id: &str) -> Self {
        Self::Focus {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a blur event
    #[must_use]
    pub fn blur(element_id: &str) -> Self {
        Self::Blur {
            element_id: element_id.to_string(),
        }
    }
}

/// Mock DOM for testing the WASM widget without a browser
#[derive(Debug)]
pub struct MockDom {
    /// Root element; ID lookups walk this tree
    pub root: DomElement,
    /// Event history for verification
    event_history: Vec<DomEvent>,
    /// Focused element ID
    focused_element: Option<String>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("div").with_id("root"),
            event_history: Vec::new(),
            focused_element: None,
        }
    }

    /// Creates the equation widget's element tree
    ///
    /// `<div id="equation">` holding the two counter buttons, the two glyph
    /// spans and the total output, all showing `0`.
    #[must_use]
    pub fn equation() -> Self {
        let mut dom = Self::new();

        let left = DomElement::new("button")
            .with_id(LEFT_ID)
            .with_class("counter")
            .with_attr("type", "button")
            .with_text("0");
        let plus = DomElement::new("span")
            .with_id(PLUS_ID)
            .with_class("glyph")
            .with_text("+");
        let middle = DomElement::new("button")
            .with_id(MIDDLE_ID)
            .with_class("counter")
            .with_attr("type", "button")
            .with_text("0");
        let equals = DomElement::new("span")
            .with_id(EQUALS_ID)
            .with_class("glyph")
            .with_text("=");
        let total = DomElement::new("output")
            .with_id(TOTAL_ID)
            .with_class("total")
            .with_attr("for", &format!("{LEFT_ID} {MIDDLE_ID}"))
            .with_text("0");

        dom.root = DomElement::new("div")
            .with_id(EQUATION_ID)
            .with_class("equation")
            .with_child(left)
            .with_child(plus)
            .with_child(middle)
            .with_child(equals)
            .with_child(total);
        dom
    }

    /// Appends an element to the root
    pub fn register_element(&mut self, element: DomElement) {
        self.root.children.push(element);
    }

    /// Gets an element by ID, searching the whole tree
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        if id.is_empty() {
            return None;
        }
        find(&self.root, id)
    }

    fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        if id.is_empty() {
            return None;
        }
        find_mut(&mut self.root, id)
    }

    /// Records an event and applies its effect on focus
    pub fn dispatch_event(&mut self, event: DomEvent) {
        match &event {
            DomEvent::Focus { element_id } => {
                self.focused_element = Some(element_id.clone());
            }
            DomEvent::Blur { element_id } => {
                if self.focused_element.as_deref() == Some(element_id.as_str()) {
                    self.focused_element = None;
                }
            }
            DomEvent::Click { element_id } => {
                // clicking a button focuses it, as browsers do
                if self.get_element(element_id).is_some() {
                    self.focused_element = Some(element_id.clone());
                }
            }
            DomEvent::KeyPress { .. } => {}
        }
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Gets the currently focused element ID
    #[must_use]
    pub fn focused_element(&self) -> Option<&str> {
        self.focused_element.as_deref()
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.get_element_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.get_element(id).map(|e| e.text_content.as_str())
    }
}

/// Depth-first search for an element by ID
fn find<'a>(node: &'a DomElement, id: &str) -> Option<&'a DomElement> {
    if node.id == id {
        return Some(node);
    }
    node.children.iter().find_map(|child| find(child, id))
}

fn find_mut<'a>(node: &'a mut DomElement, id: &str) -> Option<&'a mut DomElement> {
    if node.id == id {
        return Some(node);
    }
    node.children
        .iter_mut()
        .find_map(|child| find_mut(child, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== DomElement tests =====

    #[test]
    fn test_dom_element_new() {
        let elem = DomElement::new("span");
        assert_eq!(elem.tag, "span");
        assert!(elem.id.is_empty());
        assert!(elem.text_content.is_empty());
    }

    #[test]
    fn test_dom_element_default() {
        assert_eq!(DomElement::default().tag, "div");
    }

    #[test]
    fn test_dom_element_builders() {
        let elem = DomElement::new("button")
            .with_id("b")
            .with_text("0")
            .with_class("counter")
            .with_attr("type", "button")
            .with_child(DomElement::new("span"));
        assert_eq!(elem.id, "b");
        assert_eq!(elem.text_content, "0");
        assert!(elem.has_class("counter"));
        assert!(!elem.has_class("total"));
        assert_eq!(elem.get_attr("type"), Some("button"));
        assert_eq!(elem.get_attr("missing"), None);
        assert_eq!(elem.children.len(), 1);
    }

    #[test]
    fn test_dom_element_set_text() {
        let mut elem = DomElement::new("div");
        elem.set_text("Updated");
        assert_eq!(elem.text_content, "Updated");
    }

    // ===== Slot mapping tests =====

    #[test]
    fn test_slot_element_ids_round_trip() {
        for slot in Slot::ALL {
            assert_eq!(slot_for_element(slot_element_id(slot)), Some(slot));
        }
        assert_eq!(slot_for_element(TOTAL_ID), None);
        assert_eq!(slot_for_element(PLUS_ID), None);
    }

    // ===== MockDom tests =====

    #[test]
    fn test_equation_structure() {
        let dom = MockDom::equation();
        assert_eq!(dom.root.id, EQUATION_ID);

        let ids: Vec<&str> = dom.root.children.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec![LEFT_ID, PLUS_ID, MIDDLE_ID, EQUALS_ID, TOTAL_ID]);
    }

    #[test]
    fn test_equation_initial_text() {
        let dom = MockDom::equation();
        assert_eq!(dom.get_element_text(LEFT_ID), Some("0"));
        assert_eq!(dom.get_element_text(MIDDLE_ID), Some("0"));
        assert_eq!(dom.get_element_text(TOTAL_ID), Some("0"));
        assert_eq!(dom.get_element_text(PLUS_ID), Some("+"));
        assert_eq!(dom.get_element_text(EQUALS_ID), Some("="));
    }

    #[test]
    fn test_counters_are_buttons() {
        let dom = MockDom::equation();
        assert_eq!(dom.get_element(LEFT_ID).unwrap().tag, "button");
        assert_eq!(dom.get_element(MIDDLE_ID).unwrap().tag, "button");
        assert_eq!(dom.get_element(TOTAL_ID).unwrap().tag, "output");
    }

    #[test]
    fn test_set_element_text() {
        let mut dom = MockDom::equation();
        dom.set_element_text(TOTAL_ID, "42");
        assert_eq!(dom.get_element_text(TOTAL_ID), Some("42"));
        dom.set_element_text("missing", "x");
        assert_eq!(dom.get_element_text("missing"), None);
    }

    #[test]
    fn test_set_element_text_updates_tree() {
        let mut dom = MockDom::equation();
        dom.set_element_text(LEFT_ID, "7");

        let left = dom.root.children.iter().find(|c| c.id == LEFT_ID).unwrap();
        assert_eq!(left.text_content, "7");
        assert_eq!(dom.get_element_text(LEFT_ID), Some("7"));
    }

    #[test]
    fn test_register_element_is_reachable() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("p").with_id("note").with_text("hi"));
        assert_eq!(dom.get_element_text("note"), Some("hi"));
        assert_eq!(dom.root.children.len(), 1);
        assert_eq!(dom.get_element(""), None);
    }

    #[test]
    fn test_dispatch_records_history() {
        let mut dom = MockDom::equation();
        dom.dispatch_event(DomEvent::click(LEFT_ID));
        dom.dispatch_event(DomEvent::key_press("Enter"));
        assert_eq!(dom.event_history().len(), 2);
        dom.clear_event_history();
        assert!(dom.event_history().is_empty());
    }

    #[test]
    fn test_focus_and_blur() {
        let mut dom = MockDom::equation();
        dom.dispatch_event(DomEvent::focus(MIDDLE_ID));
        assert_eq!(dom.focused_element(), Some(MIDDLE_ID));

        dom.dispatch_event(DomEvent::blur(LEFT_ID));
        assert_eq!(dom.focused_element(), Some(MIDDLE_ID));

        dom.dispatch_event(DomEvent::blur(MIDDLE_ID));
        assert_eq!(dom.focused_element(), None);
    }

    #[test]
    fn test_click_focuses_element() {
        let mut dom = MockDom::equation();
        dom.dispatch_event(DomEvent::click(LEFT_ID));
        assert_eq!(dom.focused_element(), Some(LEFT_ID));

        dom.dispatch_event(DomEvent::click("nowhere"));
        assert_eq!(dom.focused_element(), Some(LEFT_ID));
    }
}
