//! Objects and types of the rigid monoidal category
//!
//! A type is an ordered sequence of objects describing a wire bundle. The
//! tensor product of types is concatenation and the empty type is the
//! monoidal unit.

use std::fmt::{self, Display};
use std::ops::Index;

use serde::{Deserialize, Serialize};

/// A quantum digit: a wire carrying a `dim`-dimensional Hilbert space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Qudit {
    pub dim: usize,
}

impl Qudit {
    pub fn new(dim: usize) -> Self {
        Qudit { dim }
    }
}

impl Display for Qudit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Qudit({})", self.dim)
    }
}

/// An object of the category.
///
/// Qudits are self-dual. Named objects carry a winding number `z`: the right
/// adjoint of `x` has `z + 1`, the left adjoint `z - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ob {
    Qudit(Qudit),
    Named { name: String, z: i32 },
}

impl Ob {
    pub fn named(name: impl Into<String>) -> Self {
        Ob::Named {
            name: name.into(),
            z: 0,
        }
    }

    /// Right adjoint
    pub fn r(&self) -> Ob {
        match self {
            Ob::Qudit(q) => Ob::Qudit(*q),
            Ob::Named { name, z } => Ob::Named {
                name: name.clone(),
                z: z + 1,
            },
        }
    }

    /// Left adjoint
    pub fn l(&self) -> Ob {
        match self {
            Ob::Qudit(q) => Ob::Qudit(*q),
            Ob::Named { name, z } => Ob::Named {
                name: name.clone(),
                z: z - 1,
            },
        }
    }

    pub fn as_qudit(&self) -> Option<Qudit> {
        match self {
            Ob::Qudit(q) => Some(*q),
            Ob::Named { .. } => None,
        }
    }
}

impl From<Qudit> for Ob {
    fn from(q: Qudit) -> Self {
        Ob::Qudit(q)
    }
}

impl Display for Ob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ob::Qudit(q) => write!(f, "{}", q),
            Ob::Named { name, z } => {
                write!(f, "{}", name)?;
                let suffix = if *z < 0 { ".l" } else { ".r" };
                for _ in 0..z.unsigned_abs() {
                    write!(f, "{}", suffix)?;
                }
                Ok(())
            }
        }
    }
}

/// An ordered sequence of objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Ty {
    objects: Vec<Ob>,
}

impl Ty {
    pub fn new(objects: Vec<Ob>) -> Self {
        Ty { objects }
    }

    /// The monoidal unit.
    pub fn empty() -> Self {
        Ty::default()
    }

    /// A type made only of qudits with the given dimensions.
    pub fn qudits(dims: &[usize]) -> Self {
        Ty::new(dims.iter().map(|&d| Ob::Qudit(Qudit::new(d))).collect())
    }

    /// The distinguished one-wire type of dimension 1 used for amplitudes.
    pub fn scalar() -> Self {
        Ty::qudits(&[1])
    }

    pub fn objects(&self) -> &[Ob] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ob> {
        self.objects.iter()
    }

    /// Tensor product of types: concatenation.
    pub fn tensor(&self, other: &Ty) -> Ty {
        let mut objects = self.objects.clone();
        objects.extend(other.objects.iter().cloned());
        Ty { objects }
    }

    /// Objects in `start..end` as a new type, `None` if the range is out of
    /// bounds.
    pub fn slice(&self, start: usize, end: usize) -> Option<Ty> {
        self.objects.get(start..end).map(|objects| Ty::new(objects.to_vec()))
    }

    /// Right adjoint: reversed, each object replaced by its right adjoint.
    pub fn r(&self) -> Ty {
        Ty::new(self.objects.iter().rev().map(Ob::r).collect())
    }

    /// Left adjoint: reversed, each object replaced by its left adjoint.
    pub fn l(&self) -> Ty {
        Ty::new(self.objects.iter().rev().map(Ob::l).collect())
    }

    /// Dimensions of the wires, `None` if some object is not a qudit.
    pub fn dims(&self) -> Option<Vec<usize>> {
        self.objects
            .iter()
            .map(|ob| ob.as_qudit().map(|q| q.dim))
            .collect()
    }
}

impl Index<usize> for Ty {
    type Output = Ob;

    fn index(&self, index: usize) -> &Ob {
        &self.objects[index]
    }
}

impl From<Ob> for Ty {
    fn from(ob: Ob) -> Self {
        Ty::new(vec![ob])
    }
}

impl From<Qudit> for Ty {
    fn from(q: Qudit) -> Self {
        Ty::new(vec![Ob::Qudit(q)])
    }
}

impl FromIterator<Ob> for Ty {
    fn from_iter<I: IntoIterator<Item = Ob>>(iter: I) -> Self {
        Ty::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Ty {
    type Item = &'a Ob;
    type IntoIter = std::slice::Iter<'a, Ob>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

impl Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self
            .objects
            .iter()
            .map(|ob| ob.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Ty({})", inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tensor_is_concatenation() {
        let a = Ty::qudits(&[2, 3]);
        let b = Ty::qudits(&[4]);
        assert_eq!(a.tensor(&b), Ty::qudits(&[2, 3, 4]));
        assert_eq!(a.tensor(&Ty::empty()), a);
    }

    #[test]
    fn test_slice_checks_bounds() {
        let t = Ty::qudits(&[2, 3, 4]);
        assert_eq!(t.slice(1, 3), Some(Ty::qudits(&[3, 4])));
        assert_eq!(t.slice(3, 3), Some(Ty::empty()));
        assert_eq!(t.slice(2, 5), None);
        assert_eq!(t.slice(2, 1), None);
    }

    #[test]
    fn test_adjoints() {
        let x = Ob::named("x");
        assert_eq!(x.r().l(), x);
        assert_eq!(x.r().to_string(), "x.r");
        assert_eq!(x.l().l().to_string(), "x.l.l");

        // Qudits are self-dual; the type adjoint only reverses order
        let t = Ty::qudits(&[2, 3]);
        assert_eq!(t.r(), Ty::qudits(&[3, 2]));
        assert_eq!(t.l(), t.r());
    }

    #[test]
    fn test_display() {
        assert_eq!(Ty::qudits(&[2, 3]).to_string(), "Ty(Qudit(2), Qudit(3))");
        assert_eq!(Ty::empty().to_string(), "Ty()");
        assert_eq!(Ty::scalar().dims(), Some(vec![1]));
        let mixed = Ty::new(vec![Ob::Qudit(Qudit::new(2)), Ob::named("n")]);
        assert_eq!(mixed.dims(), None);
    }
}
