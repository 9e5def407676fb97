//! Time-stepping driver
//!
//! The driver owns nothing but an ordered list of top-level nodes. Each
//! step pulls every node once at the current time; pulling a recorder
//! recursively pulls the blocks it observes.

use log::{debug, info, trace};

use crate::block::BlockRef;
use crate::error::{Result, SimError};
use crate::graph;
use crate::recorder::Recorder;
use crate::settings::SimulationSettings;

/// Top-level node pulled by the driver at every step
pub trait Node {
    /// Evaluate at time `t`, discarding or storing the result
    fn pull(&mut self, t: f64) -> Result<()>;

    /// Restore initial conditions before a new run
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}

impl Node for Recorder {
    fn pull(&mut self, t: f64) -> Result<()> {
        self.record(t)
    }

    fn reset(&mut self) -> Result<()> {
        Recorder::reset(self)
    }
}

impl Node for BlockRef {
    fn pull(&mut self, t: f64) -> Result<()> {
        self.evaluate(t).map(|_| ())
    }

    fn reset(&mut self) -> Result<()> {
        graph::reset_upstream(std::slice::from_ref(self))?;
        Ok(())
    }
}

/// Half-open time grid `i * step` for `i in 0..ceil(end_time / step)`
///
/// The element count follows the usual `arange` rule, so `end_time` itself
/// is never included. Times are computed from the integer index, not by
/// accumulation.
///
/// # Errors
///
/// [`SimError::InvalidTimeStep`] if `step` is not finite and positive, or
/// `end_time` is not finite.
pub fn time_grid(end_time: f64, step: f64) -> Result<impl Iterator<Item = f64>> {
    if !(step.is_finite() && step > 0.0 && end_time.is_finite()) {
        return Err(SimError::InvalidTimeStep { end_time, step });
    }

    let count = if end_time > 0.0 {
        (end_time / step).ceil() as usize
    } else {
        0
    };
    Ok((0..count).map(move |i| i as f64 * step))
}

/// Simulation driver
///
/// Nodes are borrowed for the driver's lifetime, so results can be read
/// back from a recorder once the driver is dropped or no longer used.
///
/// # Example
///
/// ```ignore
/// let mut recorder = Recorder::new(vec![lag.clone(), sum.clone()])?;
/// let mut system = System::new();
/// system.add(&mut recorder);
/// let steps = system.run(3.0, 0.01)?;
/// assert_eq!(steps, 300);
/// assert_eq!(recorder.samples(), 300);
/// ```
#[derive(Default)]
pub struct System<'a> {
    nodes: Vec<&'a mut dyn Node>,
}

impl<'a> System<'a> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Append a top-level node; nodes are pulled in insertion order
    pub fn add(&mut self, node: &'a mut dyn Node) {
        self.nodes.push(node);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pull every node once at time `t`
    pub fn pull(&mut self, t: f64) -> Result<()> {
        for node in self.nodes.iter_mut() {
            node.pull(t)?;
        }
        Ok(())
    }

    /// Step from 0 towards `end_time`, returning the number of steps taken
    ///
    /// The first failing pull aborts the run; samples recorded before the
    /// failure stay in place.
    pub fn run(&mut self, end_time: f64, step: f64) -> Result<usize> {
        let grid = time_grid(end_time, step)?;
        debug!(
            "run: {} node(s), end time {}, step {}",
            self.nodes.len(),
            end_time,
            step
        );

        let mut steps = 0;
        for t in grid {
            trace!("t = {}", t);
            self.pull(t)?;
            steps += 1;
        }

        info!("run finished after {} steps", steps);
        Ok(steps)
    }

    /// Run with duration and step taken from `settings`
    pub fn run_with(&mut self, settings: &SimulationSettings) -> Result<usize> {
        settings.validate()?;
        self.run(settings.duration, settings.dt)
    }

    /// Reset every node to its initial conditions
    pub fn reset(&mut self) -> Result<()> {
        for node in self.nodes.iter_mut() {
            node.reset()?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for System<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("System")
            .field("nodes", &self.nodes.len())
            .finish()
    }
}
