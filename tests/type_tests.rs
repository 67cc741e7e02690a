use qudit_diagrams::category::{Ob, Qudit, Ty};
use qudit_diagrams::quantum::{box_type, normalize_many, normalize_single, BoxTypeConfig};
use qudit_diagrams::quantum::{Circuit, Id, QuditBox};
use qudit_diagrams::CircuitError;

#[cfg(test)]
mod type_validation_tests {
    use super::*;

    #[test]
    fn test_dimension_promotes_to_single_qudit() {
        for d in 2..8 {
            let ty = box_type(d, &BoxTypeConfig::default()).unwrap();
            assert_eq!(ty, Ty::from(Qudit::new(d)));
        }
    }

    #[test]
    fn test_dimension_expands_to_expected_size() {
        let ty = box_type(2usize, &BoxTypeConfig::new().expected_size(3)).unwrap();
        assert_eq!(ty, Ty::qudits(&[2, 2, 2]));
        assert_eq!(ty.len(), 3);
    }

    #[test]
    fn test_qudit_and_type_inputs() {
        assert_eq!(normalize_many(Qudit::new(2)).unwrap(), Ty::qudits(&[2]));
        assert_eq!(normalize_many(Ty::qudits(&[2])).unwrap(), Ty::qudits(&[2]));
        assert_eq!(
            normalize_many(Ty::qudits(&[2, 3])).unwrap(),
            Ty::qudits(&[2, 3])
        );
        assert_eq!(normalize_single(Ty::qudits(&[7])).unwrap(), Qudit::new(7));
    }

    #[test]
    fn test_size_mismatch_reports_expected_and_found() {
        let err = box_type(Ty::qudits(&[2, 3]), &BoxTypeConfig::new().expected_size(3)).unwrap_err();
        match err {
            CircuitError::SizeMismatch { expected, found, .. } => {
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_minimum_dimension() {
        let err = box_type(1usize, &BoxTypeConfig::default()).unwrap_err();
        assert_eq!(err, CircuitError::Dimension { dim: 1, min_dim: 2 });

        let strict = BoxTypeConfig::new().min_dim(Some(3));
        assert!(box_type(Ty::qudits(&[3, 2]), &strict).is_err());
        assert!(box_type(Ty::qudits(&[3, 4]), &strict).is_ok());

        let relaxed = BoxTypeConfig::new().min_dim(None);
        assert_eq!(box_type(1usize, &relaxed).unwrap(), Ty::scalar());
    }

    #[test]
    fn test_named_objects_are_not_qudits() {
        let err = box_type(Ob::named("word"), &BoxTypeConfig::default()).unwrap_err();
        assert!(matches!(err, CircuitError::Kind { .. }));

        let err = normalize_single(Ob::named("word")).unwrap_err();
        assert!(matches!(err, CircuitError::Kind { .. }));
    }

    #[test]
    fn test_boxes_validate_each_side_independently() {
        // An encoder may change dimension and arity
        let encode = QuditBox::new("encode", 2usize, Ty::qudits(&[3, 3])).unwrap();
        assert_eq!(encode.dom(), &Ty::qudits(&[2]));
        assert_eq!(encode.cod(), &Ty::qudits(&[3, 3]));

        assert!(matches!(
            QuditBox::new("bad", 2usize, 1usize),
            Err(CircuitError::Dimension { dim: 1, .. })
        ));
        assert!(matches!(
            QuditBox::new("bad", Ob::named("x"), 2usize),
            Err(CircuitError::Kind { .. })
        ));
    }

    #[test]
    fn test_identity_validates_its_type() {
        let id = Id::new(Ty::qudits(&[2, 5])).unwrap();
        assert_eq!(id.dom(), id.cod());
        assert!(Circuit::id(1usize).is_err());
        assert_eq!(Circuit::id(Ty::empty()).unwrap().dom(), &Ty::empty());
    }

    #[test]
    fn test_type_serializes() {
        let ty = Ty::new(vec![Ob::Qudit(Qudit::new(3)), Ob::named("n").r()]);
        let json = serde_json::to_string(&ty).unwrap();
        let back: Ty = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ty);
    }
}
