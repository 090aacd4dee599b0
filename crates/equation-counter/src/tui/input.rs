//! Keyboard and mouse input handling

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::layout::EquationLayout;
use crate::core::Slot;

/// Actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Increment a specific counter
    Click(Slot),
    /// Increment the focused counter
    Activate,
    /// Focus the next counter
    FocusNext,
    /// Focus the previous counter
    FocusPrev,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps any terminal event to an action
    ///
    /// `layout` must be the layout of the most recent frame so that mouse
    /// clicks land on what the user sees.
    #[must_use]
    pub fn handle_event(&self, event: &Event, layout: &EquationLayout) -> Action {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse, layout),
            _ => Action::None,
        }
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> Action {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        // Windows reports releases too; only presses count as clicks
        if kind == KeyEventKind::Release {
            return Action::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => Action::Quit,
                _ => Action::None,
            };
        }

        match code {
            KeyCode::Left | KeyCode::Char('h' | '1') => Action::Click(Slot::Left),
            KeyCode::Right | KeyCode::Char('l' | '2') => Action::Click(Slot::Middle),
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrev,
            KeyCode::Enter | KeyCode::Char(' ') => Action::Activate,
            KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }

    /// Maps a mouse event to an action using the current layout
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent, layout: &EquationLayout) -> Action {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => layout
                .hit_test(event.column, event.row)
                .map_or(Action::None, Action::Click),
            _ => Action::None,
        }
    }
}
