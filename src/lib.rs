//! blocksim - Pull-based block-diagram simulation
//!
//! Blocks are wired together by handing each block shared handles to its
//! inputs. A [`System`] advances time on a fixed grid and pulls its
//! top-level nodes, typically a [`Recorder`], which in turn pull the blocks
//! they observe. Stateful blocks integrate with explicit Euler steps over the
//! time elapsed since their last distinct evaluation.
//!
//! # Example
//!
//! ```rust,ignore
//! use blocksim::prelude::*;
//!
//! let s = shared(Step::default());
//! let t = shared(Step::new("t", 2.0, 0.0, -1.0));
//! let sum = shared(Add::new("s+t", vec![s, t]));
//! let lag = shared(FirstOrderDelay::lag("1st-order-delay", 0.1, sum.clone())?);
//!
//! let mut recorder = Recorder::new(vec![lag, sum])?;
//! let mut system = System::new();
//! system.add(&mut recorder);
//! system.run(3.0, 0.01)?;
//!
//! let lag = recorder.series("1st-order-delay").unwrap();
//! ```

pub mod block;
pub mod blocks;
pub mod error;
pub mod graph;
pub mod recorder;
pub mod settings;
pub mod system;

pub use block::{shared, Block, BlockRef, State};
pub use blocks::*;
pub use error::{Result, SimError};
pub use recorder::{Recorder, Series};
pub use settings::SimulationSettings;
pub use system::{time_grid, Node, System};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::block::{shared, Block, BlockRef, State};
    pub use crate::blocks::*;
    pub use crate::error::{Result, SimError};
    pub use crate::recorder::{Recorder, Series};
    pub use crate::settings::SimulationSettings;
    pub use crate::system::{time_grid, Node, System};
}
