//! Signal source blocks

use crate::block::Block;
use crate::error::Result;

/// Step source: `yi` while `t <= ts`, `yf` afterwards
///
/// Pure: the output depends on `t` only.
///
/// # Example
///
/// ```ignore
/// let step = Step::new("s", 2.0, 0.0, -1.0);
/// assert_eq!(step.evaluate(2.0)?, 0.0);
/// assert_eq!(step.evaluate(2.5)?, -1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Step {
    name: String,
    ts: f64,
    yi: f64,
    yf: f64,
}

impl Step {
    /// Create step switching from `yi` to `yf` after time `ts`
    pub fn new(name: impl Into<String>, ts: f64, yi: f64, yf: f64) -> Self {
        Self {
            name: name.into(),
            ts,
            yi,
            yf,
        }
    }

    /// Unit step switching at `ts`
    pub fn unit(name: impl Into<String>, ts: f64) -> Self {
        Self::new(name, ts, 0.0, 1.0)
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::new("step", 1.0, 0.0, 1.0)
    }
}

impl Block for Step {
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn evaluate(&self, t: f64) -> Result<f64> {
        Ok(if t <= self.ts { self.yi } else { self.yf })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_default() {
        let step = Step::default();
        assert_eq!(step.name(), "step");
        assert_eq!(step.evaluate(0.0).unwrap(), 0.0);
        assert_eq!(step.evaluate(1.0).unwrap(), 0.0);
        assert_eq!(step.evaluate(1.0001).unwrap(), 1.0);
    }

    #[test]
    fn test_step_switch_is_inclusive() {
        let step = Step::new("s", 2.0, 0.0, -1.0);
        assert_eq!(step.evaluate(2.0).unwrap(), 0.0);
        assert_eq!(step.evaluate(2.0 + f64::EPSILON * 4.0).unwrap(), -1.0);
    }

    #[test]
    fn test_step_is_pure() {
        let step = Step::new("s", 0.5, 3.0, 4.0);
        for &t in &[-10.0, 0.0, 0.25, 0.5] {
            assert_eq!(step.evaluate(t).unwrap(), 3.0);
        }
        for &t in &[0.75, 1.0, 1e9] {
            assert_eq!(step.evaluate(t).unwrap(), 4.0);
        }
        // Out-of-order queries give the same answers
        assert_eq!(step.evaluate(0.1).unwrap(), 3.0);
        assert!(!step.is_stateful());
    }

    #[test]
    fn test_step_infinite_times() {
        let step = Step::unit("u", 0.0);
        assert_eq!(step.evaluate(f64::NEG_INFINITY).unwrap(), 0.0);
        assert_eq!(step.evaluate(f64::INFINITY).unwrap(), 1.0);
    }
}
