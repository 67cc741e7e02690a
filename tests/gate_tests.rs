use ndarray::Array2;
use num_complex::Complex64;

use qudit_diagrams::category::{Bindings, Ty};
use qudit_diagrams::quantum::gates::{bra, h, ket, nadd, scalar};
use qudit_diagrams::quantum::tensor::dimension;
use qudit_diagrams::quantum::{evaluate, Circuit};

fn matrix(circuit: &Circuit) -> Array2<Complex64> {
    evaluate(circuit, &Bindings::new()).unwrap()
}

fn is_unitary(m: &Array2<Complex64>) -> bool {
    let n = m.nrows();
    let product = m.t().mapv(|z| z.conj()).dot(m);
    let diff = &product - &Array2::<Complex64>::eye(n);
    diff.map(|x| x.norm()).sum() < 1e-10
}

#[cfg(test)]
mod gate_tests {
    use super::*;

    #[test]
    fn test_hadamard_is_unitary() {
        for d in 2..7 {
            let m = matrix(&h(d).unwrap());
            assert_eq!(m.dim(), (d, d));
            assert!(is_unitary(&m), "H({}) is not unitary", d);
        }
    }

    #[test]
    fn test_hadamard_maps_zero_to_uniform_superposition() {
        let d = 5;
        let state = ket(&[0], d).unwrap().compose(&h(d).unwrap()).unwrap();
        let m = matrix(&state);
        let amp = 1.0 / (d as f64).sqrt();
        for j in 0..d {
            assert!((m[[j, 0]] - Complex64::new(amp, 0.0)).norm() < 1e-10);
        }
    }

    #[test]
    fn test_nadd_is_a_permutation() {
        for d in 2..5 {
            let m = matrix(&nadd(d).unwrap());
            assert_eq!(m.dim(), (d * d, d * d));
            assert!(is_unitary(&m));
            for a in 0..d {
                for b in 0..d {
                    let out = a * d + (a + b) % d;
                    assert_eq!(m[[out, a * d + b]], Complex64::new(1.0, 0.0));
                }
            }
        }
    }

    #[test]
    fn test_nadd_power_d_is_identity() {
        let d = 3;
        let add = nadd(d).unwrap();
        let mut c = add.clone();
        for _ in 1..d {
            c = c.compose(&add).unwrap();
        }
        let m = matrix(&c);
        assert_eq!(m, Array2::eye(d * d));
    }

    #[test]
    fn test_bra_and_ket_select_basis_states() {
        let ty = Ty::qudits(&[2, 3]);
        assert_eq!(dimension(&ty).unwrap(), 6);

        let effect = matrix(&bra(&[1, 2], &ty).unwrap());
        assert_eq!(effect.dim(), (1, 6));
        assert_eq!(effect[[0, 5]], Complex64::new(1.0, 0.0));

        let state = matrix(&ket(&[0, 1], &ty).unwrap());
        assert_eq!(state.dim(), (6, 1));
        assert_eq!(state[[1, 0]], Complex64::new(1.0, 0.0));

        // ⟨x|y⟩ = δ_xy
        let overlap = ket(&[1, 2], &ty)
            .unwrap()
            .compose(&bra(&[1, 2], &ty).unwrap())
            .unwrap();
        assert_eq!(matrix(&overlap)[[0, 0]], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_daggered_hadamard_inverts() {
        let d = 4;
        let c = h(d).unwrap().compose(&h(d).unwrap().dagger()).unwrap();
        let diff = &matrix(&c) - &Array2::<Complex64>::eye(d);
        assert!(diff.map(|x| x.norm()).sum() < 1e-10);
    }

    #[test]
    fn test_scalar_gate_value() {
        let m = matrix(&scalar(-0.25).unwrap());
        assert_eq!(m, Array2::from_elem((1, 1), Complex64::new(-0.25, 0.0)));
    }
}
