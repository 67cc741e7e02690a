//! Numeric evaluation of circuits
//!
//! A circuit `f: A → B` evaluates to a dense `dim(B) × dim(A)` complex
//! matrix, where the dimension of a type is the product of its qudit
//! dimensions. Wires are ordered most significant first.

use ndarray::Array2;
use num_complex::Complex64;
use rayon::prelude::*;
use tracing::trace;

use crate::category::{Bindings, Ty};
use crate::error::{CircuitError, Result};
use crate::quantum::circuit::{Circuit, Payload, QuditBox};

/// Hilbert space dimension of a type. The empty type has dimension 1.
pub fn dimension(ty: &Ty) -> Result<usize> {
    let dims = ty.dims().ok_or_else(|| CircuitError::Kind {
        found: ty.to_string(),
    })?;
    Ok(dims.iter().product())
}

/// Kronecker product `a ⊗ b`.
pub fn kron(a: &Array2<Complex64>, b: &Array2<Complex64>) -> Array2<Complex64> {
    let (ar, ac) = a.dim();
    let (br, bc) = b.dim();
    let mut result = Array2::zeros((ar * br, ac * bc));
    for i in 0..ar {
        for j in 0..ac {
            let a_ij = a[[i, j]];
            if a_ij == Complex64::new(0.0, 0.0) {
                continue;
            }
            for k in 0..br {
                for l in 0..bc {
                    result[[i * br + k, j * bc + l]] = a_ij * b[[k, l]];
                }
            }
        }
    }
    result
}

/// Matrix of a single box, taking its dagger flag into account.
pub fn box_matrix(gate: &QuditBox, bindings: &Bindings) -> Result<Array2<Complex64>> {
    // Shape of the box as it was defined, before any dagger
    let (dom, cod) = if gate.is_dagger() {
        (gate.cod(), gate.dom())
    } else {
        (gate.dom(), gate.cod())
    };
    let shape = (dimension(cod)?, dimension(dom)?);

    let matrix = match gate.data() {
        Some(Payload::Matrix(m)) => m.clone(),
        Some(Payload::Amplitude(expr)) => {
            Array2::from_elem((1, 1), Complex64::new(expr.eval(bindings)?, 0.0))
        }
        Some(Payload::Params(_)) | None => {
            return Err(CircuitError::Evaluation {
                name: gate.name().to_string(),
                reason: "no tensor data".to_string(),
            })
        }
    };
    if matrix.dim() != shape {
        return Err(CircuitError::Evaluation {
            name: gate.name().to_string(),
            reason: format!("expected a {:?} matrix, found {:?}", shape, matrix.dim()),
        });
    }

    if gate.is_dagger() {
        Ok(matrix.t().mapv(|z| z.conj()))
    } else {
        Ok(matrix)
    }
}

/// Evaluate a circuit to its matrix.
///
/// Terms of a sum are evaluated in parallel.
pub fn evaluate(circuit: &Circuit, bindings: &Bindings) -> Result<Array2<Complex64>> {
    let rows = dimension(circuit.cod())?;
    let cols = dimension(circuit.dom())?;

    if let Circuit::Sum(sum) = circuit {
        let terms = sum
            .terms()
            .par_iter()
            .map(|term| evaluate(term, bindings))
            .collect::<Result<Vec<_>>>()?;
        let mut total = Array2::zeros((rows, cols));
        for m in terms {
            if m.dim() != (rows, cols) {
                return Err(CircuitError::Evaluation {
                    name: circuit.to_string(),
                    reason: format!("term of shape {:?} in a {:?} sum", m.dim(), (rows, cols)),
                });
            }
            total = total + m;
        }
        return Ok(total);
    }

    let mut result = Array2::eye(cols);
    if let Some(diagram) = circuit.to_diagram() {
        for layer in diagram.layers() {
            trace!(gate = layer.gate.name(), "evaluating layer");
            let left = Array2::eye(dimension(&layer.left)?);
            let right = Array2::eye(dimension(&layer.right)?);
            let matrix = kron(&kron(&left, &box_matrix(&layer.gate, bindings)?), &right);
            result = matrix.dot(&result);
        }
    }
    Ok(result)
}

/// Whether two circuits evaluate to the same matrix within `tolerance`.
///
/// Boundary types are not compared, only matrix shapes, so wires of
/// dimension 1 are invisible.
pub fn approx_eq(a: &Circuit, b: &Circuit, bindings: &Bindings, tolerance: f64) -> Result<bool> {
    let ma = evaluate(a, bindings)?;
    let mb = evaluate(b, bindings)?;
    if ma.dim() != mb.dim() {
        return Ok(false);
    }
    let diff = &ma - &mb;
    let norm = diff.map(|x| x.norm()).sum();
    Ok(norm < tolerance)
}
