//! Block implementations

mod adder;
mod filters;
mod sources;
mod stateful;

pub use adder::Add;
pub use filters::FirstOrderDelay;
pub use sources::Step;
pub use stateful::Stateful;
