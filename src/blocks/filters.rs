//! First-order lag filter

use std::cell::{Cell, RefCell};

use log::warn;

use crate::block::{Block, BlockRef, State};
use crate::blocks::Step;
use crate::error::{Result, SimError};
use crate::graph;

/// First-order lag: T * dy/dt = K * u - y
///
/// Explicit Euler over the time elapsed since the last distinct evaluation:
///
/// ```text
/// dy = (K * u(t) - y) / T
/// y  = y + dy * (t - last_t)
/// ```
///
/// The step size is whatever the caller's time sequence produces, so results
/// are only meaningful for uniformly increasing `t`. Repeated pulls at the
/// same `t` return the cached value.
///
/// # Example
///
/// ```ignore
/// let input = shared(Step::unit("u", 0.0));
/// let lag = FirstOrderDelay::new("lag", 1.0, 0.1, 0.0, input)?;
/// for i in 0..100 {
///     lag.evaluate(i as f64 * 0.01)?;
/// }
/// // Output approaches 1.0 exponentially
/// ```
#[derive(Debug, Clone)]
pub struct FirstOrderDelay {
    name: String,
    gain: Cell<f64>,
    time_constant: Cell<f64>,
    state: State,
    input: RefCell<BlockRef>,
}

impl FirstOrderDelay {
    /// Create lag with gain `K`, time constant `T` and initial output `y0`
    ///
    /// # Errors
    ///
    /// [`SimError::Domain`] if `T` is not strictly positive, or any parameter
    /// is not finite.
    pub fn new(
        name: impl Into<String>,
        gain: f64,
        time_constant: f64,
        y0: f64,
        input: BlockRef,
    ) -> Result<Self> {
        let name = name.into();
        check_gain(&name, gain)?;
        check_time_constant(&name, time_constant)?;
        if !y0.is_finite() {
            return Err(SimError::domain(&name, format!("initial value {y0} is not finite")));
        }

        Ok(Self {
            name,
            gain: Cell::new(gain),
            time_constant: Cell::new(time_constant),
            state: State::new(y0),
            input: RefCell::new(input),
        })
    }

    /// Unit-gain lag starting at zero
    pub fn lag(name: impl Into<String>, time_constant: f64, input: BlockRef) -> Result<Self> {
        Self::new(name, 1.0, time_constant, 0.0, input)
    }

    pub fn gain(&self) -> f64 {
        self.gain.get()
    }

    pub fn set_gain(&self, gain: f64) -> Result<()> {
        check_gain(&self.name, gain)?;
        self.gain.set(gain);
        Ok(())
    }

    pub fn time_constant(&self) -> f64 {
        self.time_constant.get()
    }

    pub fn set_time_constant(&self, time_constant: f64) -> Result<()> {
        check_time_constant(&self.name, time_constant)?;
        self.time_constant.set(time_constant);
        Ok(())
    }

    /// Time of the most recent distinct evaluation
    pub fn time(&self) -> f64 {
        self.state.time()
    }

    /// Current output without pulling the input
    pub fn value(&self) -> f64 {
        self.state.value()
    }

    pub fn input(&self) -> BlockRef {
        self.input.borrow().clone()
    }

    /// Rewire the upstream block
    ///
    /// # Errors
    ///
    /// [`SimError::CyclicGraph`] if `input` depends on this lag.
    pub fn set_input(&self, input: BlockRef) -> Result<()> {
        if graph::reaches(&input, self) {
            return Err(SimError::CyclicGraph(self.name.clone()));
        }
        warn!("{}: input rewired to '{}'", self.name, input.name());
        *self.input.borrow_mut() = input;
        Ok(())
    }
}

impl Default for FirstOrderDelay {
    fn default() -> Self {
        Self {
            name: "1st-order-delay".to_string(),
            gain: Cell::new(1.0),
            time_constant: Cell::new(1.0),
            state: State::new(0.0),
            input: RefCell::new(crate::block::shared(Step::default())),
        }
    }
}

impl Block for FirstOrderDelay {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, t: f64) -> Result<f64> {
        // Clone the handle so no borrow is held while upstream evaluates
        let input = self.input();
        let gain = self.gain.get();
        let time_constant = self.time_constant.get();

        self.state.advance(t, |dt, y| {
            let u = input.evaluate(t)?;
            let dy = (gain * u - y) / time_constant;
            Ok(y + dy * dt)
        })
    }

    fn inputs(&self) -> Vec<BlockRef> {
        vec![self.input()]
    }

    fn is_stateful(&self) -> bool {
        true
    }

    fn reset(&self) {
        self.state.reset();
    }
}

fn check_gain(name: &str, gain: f64) -> Result<()> {
    if gain.is_finite() {
        Ok(())
    } else {
        Err(SimError::domain(name, format!("gain {gain} is not finite")))
    }
}

fn check_time_constant(name: &str, time_constant: f64) -> Result<()> {
    if time_constant.is_finite() && time_constant > 0.0 {
        Ok(())
    } else {
        Err(SimError::domain(
            name,
            format!("time constant {time_constant} must be finite and positive"),
        ))
    }
}
