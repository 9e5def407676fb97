//! N-input summing block

use crate::block::{Block, BlockRef};
use crate::error::Result;

/// Summing combinator: y = sum(inputs[i](t))
///
/// Inputs are pulled in list order, so any side effects on stateful
/// upstream blocks happen in a fixed order.
///
/// # Example
///
/// ```ignore
/// let s = shared(Step::unit("s", 1.0));
/// let t = shared(Step::new("t", 2.0, 0.0, -1.0));
/// let sum = Add::new("s+t", vec![s, t]);
/// assert_eq!(sum.evaluate(1.5)?, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Add {
    name: String,
    inputs: Vec<BlockRef>,
}

impl Add {
    pub fn new(name: impl Into<String>, inputs: Vec<BlockRef>) -> Self {
        Self {
            name: name.into(),
            inputs,
        }
    }

    /// Sum with the default name
    pub fn of(inputs: Vec<BlockRef>) -> Self {
        Self::new("add", inputs)
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl Block for Add {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, t: f64) -> Result<f64> {
        let mut sum = 0.0;
        for input in &self.inputs {
            sum += input.evaluate(t)?;
        }
        Ok(sum)
    }

    fn inputs(&self) -> Vec<BlockRef> {
        self.inputs.clone()
    }
}
