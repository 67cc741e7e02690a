// src/quantum/gates.rs
//! Qudit gates
//!
//! The gates the cup construction is built from: the qudit Hadamard
//! (discrete Fourier transform), the modular adder, computational basis
//! bras and kets, and scalar amplitudes.

use std::f64::consts::PI;

use ndarray::Array2;
use num_complex::Complex64;

use crate::category::{Expr, Symbol, Ty};
use crate::error::{CircuitError, Result};
use crate::quantum::circuit::{Circuit, Payload, QuditBox, Sum};
use crate::quantum::types::{box_type, normalize_many, BoxTypeConfig, TypeInput};

/// The qudit Hadamard: `H|k⟩ = Σ_j ω^{jk} |j⟩ / √d` with `ω = e^{2πi/d}`.
pub fn h(dim: usize) -> Result<Circuit> {
    let norm = 1.0 / (dim as f64).sqrt();
    let matrix = Array2::from_shape_fn((dim, dim), |(j, k)| {
        let phase = 2.0 * PI * ((j * k) % dim) as f64 / dim as f64;
        Complex64::from_polar(norm, phase)
    });
    Ok(QuditBox::new(format!("H({})", dim), dim, dim)?
        .with_data(Payload::Matrix(matrix))
        .into())
}

/// The modular adder `|a, b⟩ ↦ |a, a + b mod d⟩`.
pub fn nadd(dim: usize) -> Result<Circuit> {
    let pair = box_type(dim, &BoxTypeConfig::new().expected_size(2))?;
    let n = dim * dim;
    let mut matrix = Array2::zeros((n, n));
    for a in 0..dim {
        for b in 0..dim {
            matrix[[a * dim + (a + b) % dim, a * dim + b]] = Complex64::new(1.0, 0.0);
        }
    }
    Ok(QuditBox::new(format!("nadd({})", dim), &pair, &pair)?
        .with_data(Payload::Matrix(matrix))
        .into())
}

/// Index of a basis state in the mixed-radix ordering of `ty`.
fn basis_index(digits: &[usize], ty: &Ty) -> Result<usize> {
    let dims = normalize_many(ty)?.dims().unwrap_or_default();
    if digits.len() != dims.len() {
        return Err(CircuitError::SizeMismatch {
            ty: ty.to_string(),
            expected: digits.len(),
            found: dims.len(),
        });
    }
    let mut index = 0;
    for (&digit, &dim) in digits.iter().zip(&dims) {
        if digit >= dim {
            return Err(CircuitError::InvalidDigit { digit, dim });
        }
        index = index * dim + digit;
    }
    Ok(index)
}

fn digits_label(kind: &str, digits: &[usize]) -> String {
    let inner = digits
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}({})", kind, inner)
}

fn scalar_wire() -> BoxTypeConfig {
    BoxTypeConfig::new().min_dim(None)
}

/// Computational basis effect `⟨digits|` from `dom` to the unit type.
pub fn bra(digits: &[usize], dom: impl Into<TypeInput>) -> Result<Circuit> {
    let dom = box_type(dom, &BoxTypeConfig::default())?;
    let index = basis_index(digits, &dom)?;
    let size = dom.dims().unwrap_or_default().iter().product::<usize>();
    let mut matrix = Array2::zeros((1, size));
    matrix[[0, index]] = Complex64::new(1.0, 0.0);
    Ok(QuditBox::with_configs(
        digits_label("Bra", digits),
        &dom,
        Ty::empty(),
        &BoxTypeConfig::default(),
        &scalar_wire(),
    )?
    .with_data(Payload::Matrix(matrix))
    .into())
}

/// Computational basis state `|digits⟩` from the unit type to `cod`.
pub fn ket(digits: &[usize], cod: impl Into<TypeInput>) -> Result<Circuit> {
    let cod = box_type(cod, &BoxTypeConfig::default())?;
    let index = basis_index(digits, &cod)?;
    let size = cod.dims().unwrap_or_default().iter().product::<usize>();
    let mut matrix = Array2::zeros((size, 1));
    matrix[[index, 0]] = Complex64::new(1.0, 0.0);
    Ok(QuditBox::with_configs(
        digits_label("Ket", digits),
        Ty::empty(),
        &cod,
        &scalar_wire(),
        &BoxTypeConfig::default(),
    )?
    .with_data(Payload::Matrix(matrix))
    .into())
}

/// A real amplitude consuming no wires, typed by the scalar marker.
///
/// Scalars depending on a symbol differentiate to the scalar of the
/// derivative.
pub fn scalar(value: impl Into<Expr>) -> Result<Circuit> {
    scalar_box(value.into()).map(Circuit::Box)
}

fn scalar_box(value: Expr) -> Result<QuditBox> {
    Ok(QuditBox::with_configs(
        format!("Scalar({})", value),
        Ty::empty(),
        Ty::scalar(),
        &scalar_wire(),
        &scalar_wire(),
    )?
    .with_data(Payload::Amplitude(value))
    .with_derivative(scalar_derivative))
}

fn scalar_derivative(b: &QuditBox, var: &Symbol) -> Result<Sum> {
    let Some(Payload::Amplitude(value)) = b.data() else {
        return Err(CircuitError::NotSupported {
            name: b.name().to_string(),
            var: var.to_string(),
        });
    };
    let mut derivative = scalar_box(value.diff(var))?;
    if b.is_dagger() {
        derivative = derivative.dagger();
    }
    Sum::new(vec![derivative.into()], b.dom().clone(), b.cod().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_boundaries() {
        let add = nadd(3).unwrap();
        assert_eq!(add.dom(), &Ty::qudits(&[3, 3]));
        assert_eq!(add.cod(), &Ty::qudits(&[3, 3]));

        let effect = bra(&[0, 1], Ty::qudits(&[2, 3])).unwrap();
        assert_eq!(effect.dom(), &Ty::qudits(&[2, 3]));
        assert_eq!(effect.cod(), &Ty::empty());

        let amp = scalar(2.0).unwrap();
        assert_eq!(amp.dom(), &Ty::empty());
        assert_eq!(amp.cod(), &Ty::scalar());
    }

    #[test]
    fn test_hadamard_requires_qudit_dimension() {
        assert!(matches!(h(1), Err(CircuitError::Dimension { dim: 1, min_dim: 2 })));
    }

    #[test]
    fn test_bra_checks_digits() {
        assert!(matches!(
            bra(&[0], Ty::qudits(&[2, 2])),
            Err(CircuitError::SizeMismatch { expected: 1, found: 2, .. })
        ));
        assert_eq!(
            ket(&[3], 3usize).unwrap_err(),
            CircuitError::InvalidDigit { digit: 3, dim: 3 }
        );
    }

    #[test]
    fn test_empty_digits_need_an_empty_type() {
        assert!(matches!(
            bra(&[], 2usize),
            Err(CircuitError::SizeMismatch { expected: 0, found: 1, .. })
        ));
    }

    #[test]
    fn test_scalar_derivative_rule() {
        let theta = Symbol::new("theta");
        let amp = scalar(Expr::var("theta").cos()).unwrap();
        let grad = amp.grad(&theta).unwrap();
        assert_eq!(grad.len(), 1);
        let Circuit::Box(b) = &grad.terms()[0] else {
            panic!("expected a box");
        };
        assert_eq!(
            b.data(),
            Some(&Payload::Amplitude(-Expr::var("theta").sin()))
        );
    }
}
