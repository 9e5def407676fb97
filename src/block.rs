//! Core Block trait for the pull-based signal graph
//!
//! A block produces a scalar for a queried time. Downstream blocks hold
//! shared handles ([`BlockRef`]) to their inputs and pull them on demand,
//! so the graph has no container of its own: connectivity lives in the
//! blocks.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::error::Result;

/// Shared handle to a block
///
/// Several downstream blocks may hold the same upstream block. Evaluation is
/// single-threaded, so state lives in `Cell`s behind `&self`.
pub type BlockRef = Rc<dyn Block>;

/// Core block trait
///
/// # Example
///
/// ```ignore
/// #[derive(Debug)]
/// struct Ramp { name: String }
///
/// impl Block for Ramp {
///     fn name(&self) -> &str { &self.name }
///     fn evaluate(&self, t: f64) -> Result<f64> { Ok(t) }
/// }
/// ```
pub trait Block: fmt::Debug {
    /// Series key used by the recorder
    fn name(&self) -> &str;

    /// Output at time `t`
    ///
    /// Stateful blocks advance their state as a side effect. Callers must
    /// drive them with a non-decreasing time sequence; a decreasing `t`
    /// yields a negative Euler step and silently wrong results.
    fn evaluate(&self, t: f64) -> Result<f64>;

    /// Upstream blocks, in evaluation order
    fn inputs(&self) -> Vec<BlockRef> {
        Vec::new()
    }

    /// Returns true if the output depends on stored prior state
    fn is_stateful(&self) -> bool {
        false
    }

    /// Restore initial conditions
    fn reset(&self) {}
}

/// Wrap a block into a shared handle
pub fn shared<B: Block + 'static>(block: B) -> BlockRef {
    Rc::new(block)
}

/// Identity of a block, independent of the vtable
pub(crate) fn block_addr(block: &dyn Block) -> *const () {
    block as *const _ as *const ()
}

/// Last-evaluated time and value of a stateful block
///
/// Starts at `(0, y0)`. [`State::advance`] is memoized on the exact time:
/// pulling twice at the same `t` runs the update once.
#[derive(Debug, Clone)]
pub struct State {
    last_t: Cell<f64>,
    y: Cell<f64>,
    initial: f64,
}

impl State {
    pub fn new(y0: f64) -> Self {
        Self {
            last_t: Cell::new(0.0),
            y: Cell::new(y0),
            initial: y0,
        }
    }

    /// Time of the most recent distinct evaluation
    pub fn time(&self) -> f64 {
        self.last_t.get()
    }

    /// Current stored value
    pub fn value(&self) -> f64 {
        self.y.get()
    }

    /// Move to time `t`, computing the new value from `(elapsed, y)`
    ///
    /// The stored pair is left untouched when `update` fails.
    pub fn advance<F>(&self, t: f64, update: F) -> Result<f64>
    where
        F: FnOnce(f64, f64) -> Result<f64>,
    {
        let last_t = self.last_t.get();
        if t == last_t {
            return Ok(self.y.get());
        }

        let y = update(t - last_t, self.y.get())?;
        self.y.set(y);
        self.last_t.set(t);
        Ok(y)
    }

    pub fn reset(&self) {
        self.last_t.set(0.0);
        self.y.set(self.initial);
    }
}
