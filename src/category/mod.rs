//! Category theory abstractions for qudit circuits
//!
//! This module provides the generic structures circuits are built on:
//! objects and types, layered diagrams, symbolic parameters, and the
//! categorical traits with their law verifiers.

pub mod diagram;
pub mod monoidal;
pub mod symbol;
pub mod ty;

pub use diagram::{cups, Arrow, Diagram, Generator, Layer};
pub use monoidal::{
    Category, CompactClosedCategory, DaggerCategory, MonoidalCategory,
};
pub use symbol::{Bindings, Expr, Symbol};
pub use ty::{Ob, Qudit, Ty};

/// Re-export commonly used types and traits
pub mod prelude {
    pub use super::{
        Category, CompactClosedCategory, DaggerCategory, MonoidalCategory,
    };
    pub use super::monoidal::laws;
    pub use super::{Bindings, Expr, Ob, Qudit, Symbol, Ty};
}
