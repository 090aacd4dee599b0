//! Core counter state with its derived sum
//!
//! Everything here is frontend-agnostic: the TUI and WASM modules only
//! translate interactions into [`Counters::increment`] calls and render
//! the [`Snapshot`] returned by [`Counters::read`].

mod counters;

pub use counters::{Counters, Slot, Snapshot};

use thiserror::Error;

/// Result type for counter operations
pub type CounterResult<T> = Result<T, CounterError>;

/// Counter error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CounterError {
    /// The increment would push `left + middle` past `u64::MAX`
    #[error("Overflow: incrementing {slot} would exceed the maximum total")]
    Overflow {
        /// The slot whose increment was refused
        slot: Slot,
    },

    /// A snapshot whose total is not the sum of its operands
    #[error("Inconsistent snapshot: {snapshot}")]
    Inconsistent {
        /// The rejected snapshot
        snapshot: Snapshot,
    },
}
