//! TUI frontend for the equation widget

mod app;
mod input;
mod layout;
mod ui;

pub use app::EquationApp;
pub use input::{Action, InputHandler};
pub use layout::EquationLayout;
pub use ui::{read_value, render, EquationUI, Regions, EQUALS_GLYPH, HELP_SHORTCUTS, PLUS_GLYPH};
