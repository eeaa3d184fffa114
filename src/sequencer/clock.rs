use std::{cell::Cell, rc::Rc, time::Instant};

use crate::foundation::core::Millis;

/// Monotonic millisecond time source read by the sequencer.
pub trait Clock {
    /// Current time. Must never decrease between calls.
    fn now(&self) -> Millis;
}

#[derive(Clone, Copy, Debug)]
/// Wall clock measured from construction.
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Start counting from zero now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Millis {
        Millis(u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX))
    }
}

#[derive(Clone, Debug, Default)]
/// Hand-driven clock. Clones share the same time, so a host can keep one handle
/// while the sequencer owns another.
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    /// Clock reading `start`.
    pub fn starting_at(start: Millis) -> Self {
        Self {
            now: Rc::new(Cell::new(start.0)),
        }
    }

    /// Jump to `t`. Earlier values are ignored to keep the clock monotonic.
    pub fn set(&self, t: Millis) {
        if t.0 > self.now.get() {
            self.now.set(t.0);
        }
    }

    /// Move forward by `dt`.
    pub fn advance(&self, dt: Millis) {
        self.now.set(self.now.get().saturating_add(dt.0));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Millis {
        Millis(self.now.get())
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Millis {
        (**self).now()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequencer/clock.rs"]
mod tests;
