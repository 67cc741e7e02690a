//! Qudit type validation
//!
//! Every public box and identity boundary passes through [`box_type`]. Inputs
//! are a closed set of shapes: a bare dimension, a single object, or a type.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::category::{Ob, Qudit, Ty};
use crate::error::{CircuitError, Result};

/// Anything that can be promoted to a qudit type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeInput {
    /// A raw dimension, promoted to `Qudit(dim)`.
    Dim(usize),
    Ob(Ob),
    Ty(Ty),
}

impl From<usize> for TypeInput {
    fn from(dim: usize) -> Self {
        TypeInput::Dim(dim)
    }
}

impl From<Qudit> for TypeInput {
    fn from(q: Qudit) -> Self {
        TypeInput::Ob(Ob::Qudit(q))
    }
}

impl From<Ob> for TypeInput {
    fn from(ob: Ob) -> Self {
        TypeInput::Ob(ob)
    }
}

impl From<Ty> for TypeInput {
    fn from(ty: Ty) -> Self {
        TypeInput::Ty(ty)
    }
}

impl From<&Ty> for TypeInput {
    fn from(ty: &Ty) -> Self {
        TypeInput::Ty(ty.clone())
    }
}

impl Display for TypeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeInput::Dim(dim) => write!(f, "{}", dim),
            TypeInput::Ob(ob) => write!(f, "{}", ob),
            TypeInput::Ty(ty) => write!(f, "{}", ty),
        }
    }
}

fn expect_qudit(ob: &Ob) -> Result<Qudit> {
    ob.as_qudit().ok_or_else(|| CircuitError::Kind {
        found: ob.to_string(),
    })
}

/// Extract the one qudit an input stands for.
pub fn normalize_single(input: impl Into<TypeInput>) -> Result<Qudit> {
    match input.into() {
        TypeInput::Dim(dim) => Ok(Qudit::new(dim)),
        TypeInput::Ob(ob) => expect_qudit(&ob),
        TypeInput::Ty(ty) => {
            if ty.len() != 1 {
                return Err(CircuitError::Arity {
                    ty: ty.to_string(),
                    found: ty.len(),
                });
            }
            expect_qudit(&ty[0])
        }
    }
}

/// Check that every object of an input is a qudit and return it as a type.
pub fn normalize_many(input: impl Into<TypeInput>) -> Result<Ty> {
    match input.into() {
        TypeInput::Dim(dim) => Ok(Ty::from(Qudit::new(dim))),
        TypeInput::Ob(ob) => {
            expect_qudit(&ob)?;
            Ok(Ty::from(ob))
        }
        TypeInput::Ty(ty) => {
            for ob in &ty {
                expect_qudit(ob)?;
            }
            Ok(ty)
        }
    }
}

/// Constraints applied by [`box_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxTypeConfig {
    /// Required arity. A bare dimension expands to this many copies.
    /// `Some(0)` counts as unset.
    pub expected_size: Option<usize>,
    /// Smallest allowed dimension; `None` disables the check.
    pub min_dim: Option<usize>,
}

impl Default for BoxTypeConfig {
    fn default() -> Self {
        BoxTypeConfig {
            expected_size: None,
            min_dim: Some(2),
        }
    }
}

impl BoxTypeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expected_size(mut self, size: usize) -> Self {
        self.expected_size = Some(size);
        self
    }

    pub fn min_dim(mut self, min_dim: Option<usize>) -> Self {
        self.min_dim = min_dim;
        self
    }
}

/// Canonical qudit type of a box boundary.
pub fn box_type(input: impl Into<TypeInput>, config: &BoxTypeConfig) -> Result<Ty> {
    let expected_size = config.expected_size.filter(|&n| n > 0);
    let ty = match input.into() {
        TypeInput::Dim(dim) => {
            let n = expected_size.unwrap_or(1);
            Ty::qudits(&vec![dim; n])
        }
        other => normalize_many(other)?,
    };

    if let Some(expected) = expected_size {
        if ty.len() != expected {
            return Err(CircuitError::SizeMismatch {
                ty: ty.to_string(),
                expected,
                found: ty.len(),
            });
        }
    }

    // Dimension 0 has no basis states and never makes a wire
    let min_dim = config.min_dim.unwrap_or(1).max(1);
    for ob in &ty {
        let q = expect_qudit(ob)?;
        if q.dim < min_dim {
            return Err(CircuitError::Dimension {
                dim: q.dim,
                min_dim,
            });
        }
    }
    Ok(ty)
}

/// Qudit wires of any positive dimension, scalar wires included.
pub(crate) fn wire_type(ty: Ty) -> Result<Ty> {
    box_type(ty, &BoxTypeConfig::new().min_dim(None))
}
