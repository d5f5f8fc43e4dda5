pub mod vehicle;
pub mod optional;
pub mod fleet;
pub mod scenario;
pub mod driver;

#[cfg(test)]
mod property_tests;

pub use vehicle::*;
pub use optional::*;
pub use fleet::*;
pub use scenario::{Scenario, SCENARIOS};
pub use driver::*;
