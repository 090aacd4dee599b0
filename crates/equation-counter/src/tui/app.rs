//! TUI Application State

use crate::config::EquationConfig;
use crate::core::{CounterError, CounterResult, Counters, Slot, Snapshot};

use super::input::Action;

/// Equation application state
#[derive(Debug)]
pub struct EquationApp {
    /// Widget state
    counters: Counters,
    /// Counter activated by Enter/Space
    focus: Slot,
    /// Outcome of the last interaction
    last: Option<CounterResult<(Slot, u64)>>,
    /// Rendering options
    config: EquationConfig,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for EquationApp {
    fn default() -> Self {
        Self::new()
    }
}

impl EquationApp {
    /// Creates an app with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EquationConfig::default())
    }

    /// Creates an app with the given configuration
    #[must_use]
    pub fn with_config(config: EquationConfig) -> Self {
        Self {
            counters: Counters::new(),
            focus: Slot::Left,
            last: None,
            config,
            should_quit: false,
        }
    }

    /// Creates an app starting from existing counters
    #[must_use]
    pub fn with_counters(counters: Counters) -> Self {
        Self {
            counters,
            ..Self::new()
        }
    }

    /// Returns the displayed values
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.counters.read()
    }

    /// Returns the focused slot
    #[must_use]
    pub fn focus(&self) -> Slot {
        self.focus
    }

    /// Returns the configuration
    #[must_use]
    pub fn config(&self) -> &EquationConfig {
        &self.config
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Increments a counter; the focus follows the click
    pub fn click(&mut self, slot: Slot) -> CounterResult<u64> {
        self.focus = slot;
        let result = self.counters.increment(slot);
        self.last = Some(result.map(|value| (slot, value)));
        result
    }

    /// Increments the focused counter
    pub fn activate_focused(&mut self) -> CounterResult<u64> {
        self.click(self.focus)
    }

    /// Moves focus to the next counter
    pub fn focus_next(&mut self) {
        self.focus = self.focus.other();
    }

    /// Moves focus to the previous counter
    pub fn focus_prev(&mut self) {
        // only two slots, so previous and next coincide
        self.focus = self.focus.other();
    }

    /// Applies an input action, returning true if the app should quit
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Click(slot) => {
                let _ = self.click(slot);
            }
            Action::Activate => {
                let _ = self.activate_focused();
            }
            Action::FocusNext => self.focus_next(),
            Action::FocusPrev => self.focus_prev(),
            Action::Quit => self.quit(),
            Action::None => {}
        }
        self.should_quit
    }

    /// Status line describing the last interaction
    #[must_use]
    pub fn status(&self) -> String {
        match &self.last {
            None => "Ready".to_string(),
            Some(Ok((slot, value))) => format!("{slot} clicked ({value})"),
            Some(Err(e)) => format!("Error: {e}"),
        }
    }

    /// Returns the error from the last interaction, if any
    #[must_use]
    pub fn last_error(&self) -> Option<CounterError> {
        match self.last {
            Some(Err(e)) => Some(e),
            _ => None,
        }
    }

    /// Resets the counters and status
    pub fn reset(&mut self) {
        self.counters = Counters::new();
        self.focus = Slot::Left;
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new() {
        let app = EquationApp::new();
        assert_eq!(app.snapshot(), Snapshot::default());
        assert_eq!(app.focus(), Slot::Left);
        assert_eq!(app.status(), "Ready");
        assert!(!app.should_quit());
    }

    #[test]
    fn test_app_default() {
        let app = EquationApp::default();
        assert_eq!(app.snapshot().total, 0);
    }

    #[test]
    fn test_with_config() {
        let app = EquationApp::with_config(EquationConfig::new().with_title("Sum"));
        assert_eq!(app.config().title, "Sum");
    }

    #[test]
    fn test_click_updates_snapshot() {
        let mut app = EquationApp::new();
        app.click(Slot::Left).unwrap();
        app.click(Slot::Left).unwrap();
        app.click(Slot::Middle).unwrap();
        let snap = app.snapshot();
        assert_eq!((snap.left, snap.middle, snap.total), (2, 1, 3));
    }

    #[test]
    fn test_click_moves_focus() {
        let mut app = EquationApp::new();
        app.click(Slot::Middle).unwrap();
        assert_eq!(app.focus(), Slot::Middle);
    }

    #[test]
    fn test_status_after_click() {
        let mut app = EquationApp::new();
        app.click(Slot::Middle).unwrap();
        app.click(Slot::Middle).unwrap();
        assert_eq!(app.status(), "middle clicked (2)");
    }

    #[test]
    fn test_activate_focused() {
        let mut app = EquationApp::new();
        app.focus_next();
        app.activate_focused().unwrap();
        assert_eq!(app.snapshot().middle, 1);
        assert_eq!(app.snapshot().left, 0);
    }

    #[test]
    fn test_focus_cycles() {
        let mut app = EquationApp::new();
        app.focus_next();
        assert_eq!(app.focus(), Slot::Middle);
        app.focus_next();
        assert_eq!(app.focus(), Slot::Left);
        app.focus_prev();
        assert_eq!(app.focus(), Slot::Middle);
    }

    #[test]
    fn test_overflow_reported_in_status() {
        let counters = Counters::from_values(u64::MAX, 0).unwrap();
        let mut app = EquationApp::with_counters(counters);
        assert!(app.click(Slot::Middle).is_err());
        assert!(app.status().starts_with("Error:"));
        assert_eq!(
            app.last_error(),
            Some(CounterError::Overflow { slot: Slot::Middle })
        );
        assert_eq!(app.snapshot().middle, 0);
    }

    #[test]
    fn test_apply_actions() {
        let mut app = EquationApp::new();
        assert!(!app.apply(Action::Click(Slot::Left)));
        assert!(!app.apply(Action::FocusNext));
        assert!(!app.apply(Action::Activate));
        assert!(!app.apply(Action::None));
        assert_eq!(app.snapshot().to_string(), "1 + 1 = 2");
        assert!(app.apply(Action::Quit));
        assert!(app.should_quit());
    }

    #[test]
    fn test_reset() {
        let mut app = EquationApp::new();
        app.click(Slot::Middle).unwrap();
        app.reset();
        assert_eq!(app.snapshot(), Snapshot::default());
        assert_eq!(app.focus(), Slot::Left);
        assert_eq!(app.status(), "Ready");
    }
}
