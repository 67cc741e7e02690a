// src/quantum/mod.rs
//! High-dimensional quantum circuits
//!
//! This module implements qudit circuits on top of the diagrams of the
//! category module: type validation, the circuit variants, the gates the
//! cups are built from, and numeric evaluation.

pub mod circuit;
pub mod gates;
pub mod tensor;
pub mod types;

pub use circuit::{Circuit, DerivativeRule, Id, Payload, QuditBox, QuditCircuitCategory, Sum};
pub use tensor::{approx_eq, evaluate};
pub use types::{box_type, normalize_many, normalize_single, BoxTypeConfig, TypeInput};

/// Re-export commonly used types and traits
pub mod prelude {
    pub use super::gates::{bra, h, ket, nadd, scalar};
    pub use super::{Circuit, Id, Payload, QuditBox, QuditCircuitCategory, Sum};
    pub use super::{box_type, BoxTypeConfig};
}
