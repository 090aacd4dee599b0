//! Two independent counters and their derived total

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CounterError, CounterResult};

/// Which counter an interaction targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// The left operand
    Left,
    /// The middle operand
    Middle,
}

impl Slot {
    /// Both slots in display order
    pub const ALL: [Self; 2] = [Self::Left, Self::Middle];

    /// Returns the lowercase name used in logs and element IDs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Middle => "middle",
        }
    }

    /// Returns the other slot
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Left => Self::Middle,
            Self::Middle => Self::Left,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Observed values at one point in time
///
/// `total` is filled in by [`Counters::read`] and always equals
/// `left + middle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Left counter
    pub left: u64,
    /// Middle counter
    pub middle: u64,
    /// Derived sum
    pub total: u64,
}

impl Snapshot {
    /// Returns the value shown for a slot
    #[must_use]
    pub const fn get(&self, slot: Slot) -> u64 {
        match slot {
            Slot::Left => self.left,
            Slot::Middle => self.middle,
        }
    }

    /// Returns true when the total matches the sum of its operands
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.left.checked_add(self.middle) == Some(self.total)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} = {}", self.left, self.middle, self.total)
    }
}

/// The widget state: two counters, nothing else
///
/// The total is never stored, so there is no way for it to drift from
/// its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counters {
    left: u64,
    middle: u64,
}

impl Counters {
    /// Creates counters at zero
    #[must_use]
    pub const fn new() -> Self {
        Self { left: 0, middle: 0 }
    }

    /// Creates counters with explicit starting values
    ///
    /// Fails if the two values cannot be summed without overflow.
    pub fn from_values(left: u64, middle: u64) -> CounterResult<Self> {
        if left.checked_add(middle).is_none() {
            return Err(CounterError::Overflow { slot: Slot::Middle });
        }
        Ok(Self { left, middle })
    }

    /// Increments one counter by exactly one and returns its new value
    ///
    /// Refused (state unchanged) when the derived total would overflow.
    pub fn increment(&mut self, slot: Slot) -> CounterResult<u64> {
        let would_overflow = self
            .left
            .checked_add(self.middle)
            .and_then(|total| total.checked_add(1))
            .is_none();
        if would_overflow {
            tracing::warn!(slot = %slot, "increment refused, total at maximum");
            return Err(CounterError::Overflow { slot });
        }

        let counter = match slot {
            Slot::Left => &mut self.left,
            Slot::Middle => &mut self.middle,
        };
        *counter += 1;
        tracing::debug!(slot = %slot, value = *counter, "counter incremented");
        Ok(*counter)
    }

    /// Returns a single counter
    #[must_use]
    pub const fn get(&self, slot: Slot) -> u64 {
        match slot {
            Slot::Left => self.left,
            Slot::Middle => self.middle,
        }
    }

    /// Returns the derived total
    #[must_use]
    pub const fn total(&self) -> u64 {
        // construction and increment both keep this sum in range
        self.left + self.middle
    }

    /// Reads all three displayed values
    #[must_use]
    pub const fn read(&self) -> Snapshot {
        Snapshot {
            left: self.left,
            middle: self.middle,
            total: self.total(),
        }
    }
}

impl TryFrom<Snapshot> for Counters {
    type Error = CounterError;

    fn try_from(snapshot: Snapshot) -> CounterResult<Self> {
        if !snapshot.is_consistent() {
            return Err(CounterError::Inconsistent { snapshot });
        }
        Self::from_values(snapshot.left, snapshot.middle)
    }
}
