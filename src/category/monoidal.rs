//! Monoidal category structures
//!
//! This module implements traits for categories, monoidal categories,
//! dagger categories and compact closed categories, which form the
//! foundation for qudit circuits from a categorical perspective.
//!
//! Unlike the textbook presentation, construction of morphisms is fallible:
//! composition is partial and cups only exist between dual objects.

use std::fmt::Debug;

/// A category consists of objects and morphisms between them.
///
/// For qudit circuits, objects are wire types and morphisms are circuits.
pub trait Category {
    /// The type representing objects in this category
    type Object: Clone + Debug + PartialEq;

    /// The type representing morphisms between objects
    ///
    /// We require PartialEq for morphisms to properly verify category laws
    type Morphism: Clone + Debug + PartialEq;

    /// Error raised when a morphism cannot be built
    type Error: Debug;

    /// The domain (source) of a morphism
    fn domain(&self, f: &Self::Morphism) -> Self::Object;

    /// The codomain (target) of a morphism
    fn codomain(&self, f: &Self::Morphism) -> Self::Object;

    /// The identity morphism for a given object
    fn identity(&self, obj: &Self::Object) -> Result<Self::Morphism, Self::Error>;

    /// Composition of f: A → B followed by g: B → C.
    ///
    /// Fails if the codomain of f differs from the domain of g.
    fn compose(&self, f: &Self::Morphism, g: &Self::Morphism) -> Result<Self::Morphism, Self::Error>;

    /// Helper function to verify objects are equal for composition
    fn can_compose(&self, f: &Self::Morphism, g: &Self::Morphism) -> bool {
        self.codomain(f) == self.domain(g)
    }
}

/// A monoidal category extends a category with a tensor product operation.
///
/// The tensor product puts wire bundles and circuits side by side.
pub trait MonoidalCategory: Category {
    /// The monoidal unit (I)
    fn unit(&self) -> Self::Object;

    /// Tensor product of objects
    fn tensor_objects(&self, a: &Self::Object, b: &Self::Object) -> Self::Object;

    /// Tensor product of morphisms
    fn tensor_morphisms(&self, f: &Self::Morphism, g: &Self::Morphism) -> Result<Self::Morphism, Self::Error>;
}

/// A dagger category is a category with an involutive contravariant endofunctor
/// that is the identity on objects.
///
/// In quantum mechanics, the dagger operation corresponds to the adjoint of
/// a linear operator.
pub trait DaggerCategory: Category {
    /// The dagger (adjoint) of a morphism
    fn dagger(&self, f: &Self::Morphism) -> Self::Morphism;
}

/// A compact closed category is a monoidal category where every object has
/// a dual object, with unit and counit morphisms.
///
/// The unit is a cap (a pair of entangled wires out of nothing) and the
/// counit is a cup; together they bend wires.
pub trait CompactClosedCategory: MonoidalCategory {
    /// Returns the dual object of a given object
    fn dual(&self, a: &Self::Object) -> Self::Object;

    /// Unit morphism: η_A: I → A ⊗ A*
    fn unit_morphism(&self, a: &Self::Object) -> Result<Self::Morphism, Self::Error>;

    /// Counit morphism: ε_A: A* ⊗ A → I
    fn counit_morphism(&self, a: &Self::Object) -> Result<Self::Morphism, Self::Error>;
}

/// Implementation of common category laws verification
pub mod laws {
    use super::*;

    /// Verify the category laws for a given category and collection of test objects and morphisms
    pub fn verify_category_laws<C: Category>(
        category: &C,
        test_objects: &[C::Object],
        test_morphisms: &[(C::Morphism, usize, usize)], // morphism, source_idx, target_idx
    ) -> bool {
        // Identity law: id_A ; f = f = f ; id_B for f: A → B
        let identity_law = test_morphisms.iter().all(|(f, src_idx, tgt_idx)| {
            let src = &test_objects[*src_idx];
            let tgt = &test_objects[*tgt_idx];

            let (Ok(id_src), Ok(id_tgt)) = (category.identity(src), category.identity(tgt)) else {
                return false;
            };

            match (category.compose(&id_src, f), category.compose(f, &id_tgt)) {
                (Ok(left), Ok(right)) => left == *f && right == *f,
                _ => false,
            }
        });

        // Associativity law: (f ; g) ; h = f ; (g ; h) over every composable triple
        let mut associativity_law = true;
        for (f, _, f_tgt) in test_morphisms {
            for (g, g_src, g_tgt) in test_morphisms {
                for (h, h_src, _) in test_morphisms {
                    if test_objects[*f_tgt] != test_objects[*g_src]
                        || test_objects[*g_tgt] != test_objects[*h_src]
                    {
                        continue;
                    }
                    let left = category
                        .compose(f, g)
                        .and_then(|fg| category.compose(&fg, h));
                    let right = category
                        .compose(g, h)
                        .and_then(|gh| category.compose(f, &gh));
                    associativity_law &= match (left, right) {
                        (Ok(l), Ok(r)) => l == r,
                        _ => false,
                    };
                }
            }
        }

        identity_law && associativity_law
    }

    /// Verify dagger category laws
    pub fn verify_dagger_laws<C: DaggerCategory>(
        category: &C,
        test_morphisms: &[C::Morphism],
    ) -> bool {
        if test_morphisms.is_empty() {
            return false;
        }

        // 1. Involutive: (f†)† = f
        let involutive_law = test_morphisms.iter().all(|f| {
            let dagger_f = category.dagger(f);
            category.dagger(&dagger_f) == *f
        });

        // 2. Contravariant: (f ; g)† = g† ; f†
        let contravariant_law = test_morphisms.iter().all(|f| {
            test_morphisms.iter().all(|g| {
                if !category.can_compose(f, g) {
                    // Vacuously true
                    return true;
                }
                let Ok(fg) = category.compose(f, g) else {
                    return false;
                };
                match category.compose(&category.dagger(g), &category.dagger(f)) {
                    Ok(reversed) => category.dagger(&fg) == reversed,
                    Err(_) => false,
                }
            })
        });

        involutive_law && contravariant_law
    }

    /// Verify the snake equations of a compact closed category
    ///
    /// Cups and caps are atomic boxes, so the snakes are never structurally
    /// equal to the identity; `equivalent` decides equality (e.g. numerically).
    pub fn verify_compact_closed_laws<C, E>(
        category: &C,
        test_objects: &[C::Object],
        equivalent: E,
    ) -> bool
    where
        C: CompactClosedCategory,
        E: Fn(&C::Morphism, &C::Morphism) -> bool,
    {
        if test_objects.is_empty() {
            return false;
        }

        test_objects.iter().all(|a| {
            let a_dual = category.dual(a);
            let snakes = || -> Result<(C::Morphism, C::Morphism, C::Morphism), C::Error> {
                let unit_a = category.unit_morphism(a)?;
                let counit_a = category.counit_morphism(a)?;
                let id_a = category.identity(a)?;
                let id_a_dual = category.identity(&a_dual)?;

                // (η_A ⊗ 1_A) ; (1_A ⊗ ε_A) = 1_A
                let first = category.compose(
                    &category.tensor_morphisms(&unit_a, &id_a)?,
                    &category.tensor_morphisms(&id_a, &counit_a)?,
                )?;

                // (1_A* ⊗ η_A) ; (ε_A ⊗ 1_A*) = 1_A*
                let second = category.compose(
                    &category.tensor_morphisms(&id_a_dual, &unit_a)?,
                    &category.tensor_morphisms(&counit_a, &id_a_dual)?,
                )?;
                Ok((first, second, id_a))
            };

            match snakes() {
                Ok((first, second, id_a)) => {
                    let id_a_dual = category.identity(&a_dual);
                    equivalent(&first, &id_a)
                        && id_a_dual.map_or(false, |id| equivalent(&second, &id))
                }
                Err(_) => false,
            }
        })
    }
}
