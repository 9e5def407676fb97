//! Stateful passthrough block

use crate::block::{Block, State};
use crate::error::Result;

/// Base stateful block: tracks the last evaluated time, value never evolves
///
/// Holds `(last_t, y) = (0, y0)`. Evaluating at a new `t` moves `last_t`
/// forward and returns `y` unchanged.
#[derive(Debug, Clone)]
pub struct Stateful {
    name: String,
    state: State,
}

impl Stateful {
    pub fn new(name: impl Into<String>, y0: f64) -> Self {
        Self {
            name: name.into(),
            state: State::new(y0),
        }
    }

    /// Time of the most recent distinct evaluation
    pub fn time(&self) -> f64 {
        self.state.time()
    }

    pub fn value(&self) -> f64 {
        self.state.value()
    }
}

impl Default for Stateful {
    fn default() -> Self {
        Self::new("state", 0.0)
    }
}

impl Block for Stateful {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, t: f64) -> Result<f64> {
        self.state.advance(t, |_, y| Ok(y))
    }

    fn is_stateful(&self) -> bool {
        true
    }

    fn reset(&self) {
        self.state.reset();
    }
}
