//! Layered string diagrams
//!
//! A diagram is a domain type followed by a list of layers. Each layer is a
//! single box whiskered by the wires to its left and right. This is the
//! generic machinery qudit circuits are built on: sequential and parallel
//! composition, dagger, and the generic cup construction.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::ty::Ty;
use crate::error::{CircuitError, Result};

/// An atomic box that can sit inside a diagram layer.
pub trait Generator: Clone + Debug + PartialEq {
    fn name(&self) -> &str;

    fn dom(&self) -> &Ty;

    fn cod(&self) -> &Ty;

    fn dagger(&self) -> Self;
}

/// One box with the identity wires on each side of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer<B> {
    pub left: Ty,
    pub gate: B,
    pub right: Ty,
}

impl<B: Generator> Layer<B> {
    pub fn new(left: Ty, gate: B, right: Ty) -> Self {
        Layer { left, gate, right }
    }

    /// Number of wires to the left of the box.
    pub fn offset(&self) -> usize {
        self.left.len()
    }

    pub fn dom(&self) -> Ty {
        self.left.tensor(self.gate.dom()).tensor(&self.right)
    }

    pub fn cod(&self) -> Ty {
        self.left.tensor(self.gate.cod()).tensor(&self.right)
    }

    fn whisker(&self, left: &Ty, right: &Ty) -> Self {
        Layer {
            left: left.tensor(&self.left),
            gate: self.gate.clone(),
            right: self.right.tensor(right),
        }
    }
}

/// A diagram in the free monoidal category generated by `B`.
///
/// Deserialisation rebuilds the diagram through [`Diagram::from_layers`], so
/// layers that do not connect are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawDiagram<B>",
    bound(deserialize = "B: Generator + Deserialize<'de>")
)]
pub struct Diagram<B> {
    dom: Ty,
    cod: Ty,
    layers: Vec<Layer<B>>,
}

#[derive(Deserialize)]
struct RawDiagram<B> {
    dom: Ty,
    cod: Ty,
    layers: Vec<Layer<B>>,
}

impl<B: Generator> TryFrom<RawDiagram<B>> for Diagram<B> {
    type Error = CircuitError;

    fn try_from(raw: RawDiagram<B>) -> Result<Self> {
        let diagram = Diagram::from_layers(raw.dom, raw.layers)?;
        if diagram.cod != raw.cod {
            return Err(CircuitError::boundary(&raw.cod, &diagram.cod));
        }
        Ok(diagram)
    }
}

impl<B: Generator> Diagram<B> {
    /// Identity on `ty`. No validation happens at this level.
    pub fn id(ty: Ty) -> Self {
        Diagram {
            dom: ty.clone(),
            cod: ty,
            layers: Vec::new(),
        }
    }

    pub fn from_box(gate: B) -> Self {
        Diagram {
            dom: gate.dom().clone(),
            cod: gate.cod().clone(),
            layers: vec![Layer::new(Ty::empty(), gate, Ty::empty())],
        }
    }

    /// Build a diagram from layers, checking that consecutive layers connect.
    pub fn from_layers(dom: Ty, layers: Vec<Layer<B>>) -> Result<Self> {
        let mut cod = dom.clone();
        for layer in &layers {
            let layer_dom = layer.dom();
            if layer_dom != cod {
                return Err(CircuitError::boundary(&cod, &layer_dom));
            }
            cod = layer.cod();
        }
        Ok(Diagram { dom, cod, layers })
    }

    pub fn dom(&self) -> &Ty {
        &self.dom
    }

    pub fn cod(&self) -> &Ty {
        &self.cod
    }

    pub fn layers(&self) -> &[Layer<B>] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn boxes(&self) -> impl Iterator<Item = &B> {
        self.layers.iter().map(|layer| &layer.gate)
    }

    pub fn offsets(&self) -> Vec<usize> {
        self.layers.iter().map(Layer::offset).collect()
    }

    /// Sequential composition: `self` then `other`.
    pub fn compose(&self, other: &Diagram<B>) -> Result<Diagram<B>> {
        if self.cod != other.dom {
            return Err(CircuitError::boundary(&self.cod, &other.dom));
        }
        let mut layers = self.layers.clone();
        layers.extend(other.layers.iter().cloned());
        Ok(Diagram {
            dom: self.dom.clone(),
            cod: other.cod.clone(),
            layers,
        })
    }

    /// Parallel composition: `self` on the left wires, `other` on the right.
    ///
    /// Layers of `self` come first, then those of `other`, so that
    /// `f ⊗ g = (f ⊗ id) ; (id ⊗ g)`.
    pub fn tensor(&self, other: &Diagram<B>) -> Diagram<B> {
        let mut layers: Vec<Layer<B>> = self
            .layers
            .iter()
            .map(|layer| layer.whisker(&Ty::empty(), &other.dom))
            .collect();
        layers.extend(
            other
                .layers
                .iter()
                .map(|layer| layer.whisker(&self.cod, &Ty::empty())),
        );
        Diagram {
            dom: self.dom.tensor(&other.dom),
            cod: self.cod.tensor(&other.cod),
            layers,
        }
    }

    /// `id(left) ⊗ self ⊗ id(right)`
    pub fn whisker(&self, left: &Ty, right: &Ty) -> Diagram<B> {
        Diagram {
            dom: left.tensor(&self.dom).tensor(right),
            cod: left.tensor(&self.cod).tensor(right),
            layers: self
                .layers
                .iter()
                .map(|layer| layer.whisker(left, right))
                .collect(),
        }
    }

    /// Layers reversed, each box replaced by its dagger.
    pub fn dagger(&self) -> Diagram<B> {
        Diagram {
            dom: self.cod.clone(),
            cod: self.dom.clone(),
            layers: self
                .layers
                .iter()
                .rev()
                .map(|layer| Layer::new(layer.left.clone(), layer.gate.dagger(), layer.right.clone()))
                .collect(),
        }
    }
}

/// The morphism factory used by the generic algorithms in this module.
///
/// Implementors decide which concrete value sequential and parallel
/// composition return, so a specialised category gets its own morphisms back
/// rather than plain diagrams.
pub trait Arrow: Sized {
    fn dom(&self) -> Ty;

    fn cod(&self) -> Ty;

    fn id(ty: &Ty) -> Result<Self>;

    fn compose(&self, other: &Self) -> Result<Self>;

    fn tensor(&self, other: &Self) -> Result<Self>;
}

/// Nested cups between `left` and `right`.
///
/// `right` must be the right adjoint of `left`, paired off from the inside
/// out: the last object of `left` meets the first of `right`. Each pair is
/// built by `cup_factory` and the arrows are assembled through `A`.
pub fn cups<A, F>(left: &Ty, right: &Ty, cup_factory: F) -> Result<A>
where
    A: Arrow,
    F: Fn(&Ty, &Ty) -> Result<A>,
{
    if left.len() != right.len() {
        return Err(CircuitError::InvalidCup {
            left: left.to_string(),
            right: right.to_string(),
            reason: format!("{} objects against {}", left.len(), right.len()),
        });
    }
    let n = left.len();
    for i in 0..n {
        let j = n - i - 1;
        if left[j].r() != right[i] {
            return Err(CircuitError::InvalidCup {
                left: left.to_string(),
                right: right.to_string(),
                reason: format!("{} is not the right adjoint of {}", right[i], left[j]),
            });
        }
    }

    let mut result = A::id(&left.tensor(right))?;
    for i in 0..n {
        let j = n - i - 1;
        trace!(pair = i, "building cup");
        let cup = cup_factory(&Ty::from(left[j].clone()), &Ty::from(right[i].clone()))?;
        let outer_left = Ty::new(left.objects()[..j].to_vec());
        let outer_right = Ty::new(right.objects()[i + 1..].to_vec());
        let layer = A::id(&outer_left)?
            .tensor(&cup)?
            .tensor(&A::id(&outer_right)?)?;
        result = result.compose(&layer)?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::ty::Ob;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Node {
        name: String,
        dom: Ty,
        cod: Ty,
        daggered: bool,
    }

    impl Node {
        fn new(name: &str, dom: Ty, cod: Ty) -> Self {
            Node {
                name: name.into(),
                dom,
                cod,
                daggered: false,
            }
        }
    }

    impl Generator for Node {
        fn name(&self) -> &str {
            &self.name
        }

        fn dom(&self) -> &Ty {
            &self.dom
        }

        fn cod(&self) -> &Ty {
            &self.cod
        }

        fn dagger(&self) -> Self {
            Node {
                name: self.name.clone(),
                dom: self.cod.clone(),
                cod: self.dom.clone(),
                daggered: !self.daggered,
            }
        }
    }

    impl Arrow for Diagram<Node> {
        fn dom(&self) -> Ty {
            self.dom.clone()
        }

        fn cod(&self) -> Ty {
            self.cod.clone()
        }

        fn id(ty: &Ty) -> Result<Self> {
            Ok(Diagram::id(ty.clone()))
        }

        fn compose(&self, other: &Self) -> Result<Self> {
            Diagram::compose(self, other)
        }

        fn tensor(&self, other: &Self) -> Result<Self> {
            Ok(Diagram::tensor(self, other))
        }
    }

    fn x() -> Ty {
        Ty::from(Ob::named("x"))
    }

    fn y() -> Ty {
        Ty::from(Ob::named("y"))
    }

    #[test]
    fn test_compose_checks_boundaries() {
        let f = Diagram::from_box(Node::new("f", x(), y()));
        let g = Diagram::from_box(Node::new("g", y(), x()));
        assert_eq!(f.compose(&g).unwrap().len(), 2);
        assert!(matches!(
            f.compose(&f),
            Err(CircuitError::BoundaryMismatch { .. })
        ));
    }

    #[test]
    fn test_tensor_offsets() {
        let f = Diagram::from_box(Node::new("f", x(), y()));
        let g = Diagram::from_box(Node::new("g", y(), x()));
        let fg = f.tensor(&g);
        assert_eq!(fg.dom(), &x().tensor(&y()));
        assert_eq!(fg.cod(), &y().tensor(&x()));
        assert_eq!(fg.offsets(), vec![0, 1]);
        assert_eq!(fg.layers()[0].right, y());
        assert_eq!(fg.layers()[1].left, y());
    }

    #[test]
    fn test_dagger_reverses_layers() {
        let f = Diagram::from_box(Node::new("f", x(), y()));
        let g = Diagram::from_box(Node::new("g", y(), x()));
        let fg = f.compose(&g).unwrap();
        let dag = fg.dagger();
        let names: Vec<_> = dag.boxes().map(|b| b.name.clone()).collect();
        assert_eq!(names, vec!["g", "f"]);
        assert_eq!(dag.dagger(), fg);
    }

    #[test]
    fn test_deserialized_layers_must_connect() {
        let f = Diagram::from_box(Node::new("f", x(), y()));
        let g = Diagram::from_box(Node::new("g", y(), x()));
        let fg = f.compose(&g).unwrap();
        let back: Diagram<Node> = serde_json::from_str(&serde_json::to_string(&fg).unwrap()).unwrap();
        assert_eq!(back, fg);

        // f ; f does not connect
        let mut value = serde_json::to_value(&fg).unwrap();
        value["layers"][1] = serde_json::to_value(&f.layers()[0]).unwrap();
        assert!(serde_json::from_value::<Diagram<Node>>(value).is_err());

        // Declared codomain disagrees with the layers
        let mut value = serde_json::to_value(&fg).unwrap();
        value["cod"] = serde_json::to_value(y()).unwrap();
        assert!(serde_json::from_value::<Diagram<Node>>(value).is_err());
    }

    #[test]
    fn test_generic_cups_nest() {
        let left = x().tensor(&y());
        let right = left.r();
        let cup: Diagram<Node> = cups(&left, &right, |l, r| {
            Ok(Diagram::from_box(Node::new(
                "cup",
                l.tensor(r),
                Ty::empty(),
            )))
        })
        .unwrap();
        assert_eq!(cup.dom(), &left.tensor(&right));
        assert_eq!(cup.cod(), &Ty::empty());
        // The inner pair y ⊗ y.r is closed first
        assert_eq!(cup.offsets(), vec![1, 0]);
        assert_eq!(cup.layers()[0].gate.dom, y().tensor(&y().r()));
    }

    #[test]
    fn test_generic_cups_reject_non_adjoint() {
        let result: Result<Diagram<Node>> = cups(&x(), &x(), |l, r| {
            Ok(Diagram::from_box(Node::new("cup", l.tensor(r), Ty::empty())))
        });
        assert!(matches!(result, Err(CircuitError::InvalidCup { .. })));
    }
}
