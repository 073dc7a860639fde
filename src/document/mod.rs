//! Document values built by key paths.

pub mod node;
pub mod serialize;

pub use node::{Number, Value};
