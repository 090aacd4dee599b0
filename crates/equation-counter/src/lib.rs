//! Equation Counter - two click counters and their derived sum
//!
//! The widget renders as `[left] + [middle] = [total]`. Activating either
//! counter increments it by one; the total is recomputed on every read and
//! is never stored.
//!
//! The same core drives two frontends:
//!
//! - a terminal UI (`tui` feature, on by default) with keyboard and mouse
//!   activation,
//! - a browser widget (`wasm` feature), with a mock DOM that is always
//!   available for native testing.
//!
//! # Example
//!
//! ```rust
//! use equation_counter::prelude::*;
//!
//! let mut counters = Counters::new();
//! counters.increment(Slot::Left).unwrap();
//! counters.increment(Slot::Left).unwrap();
//! counters.increment(Slot::Middle).unwrap();
//!
//! let snap = counters.read();
//! assert_eq!((snap.left, snap.middle, snap.total), (2, 1, 3));
//! assert_eq!(snap.to_string(), "2 + 1 = 3");
//! ```

// Allow common test patterns in this crate
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// WASM module - always available for testing
/// (Mock DOM allows testing without actual browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{ConfigError, EquationConfig};
    pub use crate::core::{CounterError, CounterResult, Counters, Slot, Snapshot};
    pub use crate::driver::CounterDriver;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
    #[cfg(feature = "tui")]
    pub use crate::tui::EquationApp;

    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmDriver, WasmEquation};
}
