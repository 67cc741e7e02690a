//! High-Dimensional Quantum Circuits
//!
//! This crate represents circuits on qudits (quantum digits of arbitrary
//! finite dimension) as diagrams in a rigid monoidal category. Circuits
//! compose sequentially and in parallel, bend wires with cups and caps, and
//! differentiate symbolically into formal sums of circuits.

pub mod category;
pub mod error;
pub mod quantum;

pub use error::{CircuitError, Result};

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::category::prelude::*;
    pub use crate::error::{CircuitError, Result};
    pub use crate::quantum::prelude::*;
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
