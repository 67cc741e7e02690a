//! High-dimensional quantum circuits
//!
//! A [`Circuit`] is a diagram whose wires are qudits. It is one of four
//! variants: an identity, a single box, a layered composite, or a formal sum
//! of circuits sharing a boundary. Composition always returns a new value;
//! composites with no layers collapse back to [`Id`] and composites made of
//! one full-width layer collapse back to a box, so identities are units on
//! the nose.

use std::collections::BTreeSet;
use std::fmt::{self, Debug, Display};

use ndarray::Array2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::category::diagram::{self, Arrow, Diagram, Generator};
use crate::category::{
    Category, CompactClosedCategory, DaggerCategory, Expr, MonoidalCategory, Symbol, Ty,
};
use crate::error::{CircuitError, Result};
use crate::quantum::gates;
use crate::quantum::types::{box_type, normalize_single, wire_type, BoxTypeConfig, TypeInput};

/// Derivative rule attached to a box by the gate that built it.
pub type DerivativeRule = fn(&QuditBox, &Symbol) -> Result<Sum>;

/// Opaque data carried by a box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Payload {
    /// Dense matrix, rows indexed by the codomain basis and columns by the
    /// domain basis of the undaggered box.
    Matrix(Array2<Complex64>),
    /// A real symbolic amplitude.
    Amplitude(Expr),
    /// Symbolic parameters without a numeric interpretation.
    Params(Vec<Expr>),
}

impl Payload {
    pub fn free_symbols(&self) -> BTreeSet<Symbol> {
        match self {
            Payload::Matrix(_) => BTreeSet::new(),
            Payload::Amplitude(expr) => expr.free_symbols(),
            Payload::Params(params) => params.iter().flat_map(Expr::free_symbols).collect(),
        }
    }
}

/// An atomic named gate between qudit types.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "RawQuditBox")]
pub struct QuditBox {
    name: String,
    dom: Ty,
    cod: Ty,
    data: Option<Payload>,
    is_dagger: bool,
    #[serde(skip)]
    derivative: Option<DerivativeRule>,
}

impl QuditBox {
    /// A box whose boundaries are checked with the default validator settings.
    pub fn new(
        name: impl Into<String>,
        dom: impl Into<TypeInput>,
        cod: impl Into<TypeInput>,
    ) -> Result<Self> {
        let config = BoxTypeConfig::default();
        Self::with_configs(name, dom, cod, &config, &config)
    }

    /// A box whose domain and codomain are checked under separate settings.
    pub fn with_configs(
        name: impl Into<String>,
        dom: impl Into<TypeInput>,
        cod: impl Into<TypeInput>,
        dom_config: &BoxTypeConfig,
        cod_config: &BoxTypeConfig,
    ) -> Result<Self> {
        Ok(QuditBox {
            name: name.into(),
            dom: box_type(dom, dom_config)?,
            cod: box_type(cod, cod_config)?,
            data: None,
            is_dagger: false,
            derivative: None,
        })
    }

    pub fn with_data(mut self, data: Payload) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_dagger(mut self, is_dagger: bool) -> Self {
        self.is_dagger = is_dagger;
        self
    }

    pub fn with_derivative(mut self, rule: DerivativeRule) -> Self {
        self.derivative = Some(rule);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dom(&self) -> &Ty {
        &self.dom
    }

    pub fn cod(&self) -> &Ty {
        &self.cod
    }

    pub fn data(&self) -> Option<&Payload> {
        self.data.as_ref()
    }

    pub fn is_dagger(&self) -> bool {
        self.is_dagger
    }

    pub fn has_derivative(&self) -> bool {
        self.derivative.is_some()
    }

    pub fn free_symbols(&self) -> BTreeSet<Symbol> {
        self.data
            .as_ref()
            .map(Payload::free_symbols)
            .unwrap_or_default()
    }

    pub fn dagger(&self) -> QuditBox {
        QuditBox {
            name: self.name.clone(),
            dom: self.cod.clone(),
            cod: self.dom.clone(),
            data: self.data.clone(),
            is_dagger: !self.is_dagger,
            derivative: self.derivative,
        }
    }

    /// Derivative with respect to `var`.
    ///
    /// Boxes that do not depend on `var` have derivative zero. Boxes that do
    /// need a rule supplied by the gate that built them.
    pub fn grad(&self, var: &Symbol) -> Result<Sum> {
        if !self.free_symbols().contains(var) {
            return Ok(Sum::zero(self.dom.clone(), self.cod.clone()));
        }
        match self.derivative {
            Some(rule) => rule(self, var),
            None => Err(CircuitError::NotSupported {
                name: self.name.clone(),
                var: var.to_string(),
            }),
        }
    }
}

#[derive(Deserialize)]
struct RawQuditBox {
    name: String,
    dom: Ty,
    cod: Ty,
    data: Option<Payload>,
    is_dagger: bool,
}

// The validator settings a box was built with are not serialised, so only
// the wire checks shared by every gate are replayed.
impl TryFrom<RawQuditBox> for QuditBox {
    type Error = CircuitError;

    fn try_from(raw: RawQuditBox) -> Result<Self> {
        Ok(QuditBox {
            name: raw.name,
            dom: wire_type(raw.dom)?,
            cod: wire_type(raw.cod)?,
            data: raw.data,
            is_dagger: raw.is_dagger,
            derivative: None,
        })
    }
}

impl PartialEq for QuditBox {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.dom == other.dom
            && self.cod == other.cod
            && self.data == other.data
            && self.is_dagger == other.is_dagger
    }
}

impl Debug for QuditBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuditBox")
            .field("name", &self.name)
            .field("dom", &self.dom)
            .field("cod", &self.cod)
            .field("data", &self.data)
            .field("is_dagger", &self.is_dagger)
            .field("has_derivative", &self.derivative.is_some())
            .finish()
    }
}

impl Display for QuditBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dagger {
            write!(f, "{}†", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

impl Generator for QuditBox {
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
        QuditBox::dagger(self)
    }
}

/// The identity circuit on a qudit type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawId")]
pub struct Id {
    ty: Ty,
}

#[derive(Deserialize)]
struct RawId {
    ty: Ty,
}

impl TryFrom<RawId> for Id {
    type Error = CircuitError;

    fn try_from(raw: RawId) -> Result<Self> {
        Ok(Id {
            ty: wire_type(raw.ty)?,
        })
    }
}

impl Id {
    pub fn new(dom: impl Into<TypeInput>) -> Result<Self> {
        Ok(Id {
            ty: box_type(dom, &BoxTypeConfig::default())?,
        })
    }

    pub fn dom(&self) -> &Ty {
        &self.ty
    }

    pub fn cod(&self) -> &Ty {
        &self.ty
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.ty)
    }
}

/// A formal sum of circuits with a common boundary.
///
/// The empty sum is the zero morphism between its boundary types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSum")]
pub struct Sum {
    terms: Vec<Circuit>,
    dom: Ty,
    cod: Ty,
}

#[derive(Deserialize)]
struct RawSum {
    terms: Vec<Circuit>,
    dom: Ty,
    cod: Ty,
}

impl TryFrom<RawSum> for Sum {
    type Error = CircuitError;

    fn try_from(raw: RawSum) -> Result<Self> {
        Sum::new(raw.terms, wire_type(raw.dom)?, wire_type(raw.cod)?)
    }
}

impl Sum {
    /// Checks every term against the boundary; nested sums are flattened.
    pub fn new(terms: Vec<Circuit>, dom: Ty, cod: Ty) -> Result<Self> {
        let mut flat = Vec::with_capacity(terms.len());
        for term in terms {
            if term.dom() != &dom {
                return Err(CircuitError::boundary(&dom, term.dom()));
            }
            if term.cod() != &cod {
                return Err(CircuitError::boundary(&cod, term.cod()));
            }
            match term {
                Circuit::Sum(inner) => flat.extend(inner.terms),
                other => flat.push(other),
            }
        }
        Ok(Sum {
            terms: flat,
            dom,
            cod,
        })
    }

    pub fn zero(dom: Ty, cod: Ty) -> Self {
        Sum {
            terms: Vec::new(),
            dom,
            cod,
        }
    }

    pub fn terms(&self) -> &[Circuit] {
        &self.terms
    }

    pub fn dom(&self) -> &Ty {
        &self.dom
    }

    pub fn cod(&self) -> &Ty {
        &self.cod
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn add(&self, other: &Sum) -> Result<Sum> {
        if other.dom != self.dom || other.cod != self.cod {
            return Err(CircuitError::boundary(
                format!("{} → {}", self.dom, self.cod),
                format!("{} → {}", other.dom, other.cod),
            ));
        }
        let mut terms = self.terms.clone();
        terms.extend(other.terms.iter().cloned());
        Ok(Sum {
            terms,
            dom: self.dom.clone(),
            cod: self.cod.clone(),
        })
    }

    pub fn dagger(&self) -> Sum {
        Sum {
            terms: self.terms.iter().map(Circuit::dagger).collect(),
            dom: self.cod.clone(),
            cod: self.dom.clone(),
        }
    }

    /// Differentiation is linear: the sum of the terms' derivatives.
    pub fn grad(&self, var: &Symbol) -> Result<Sum> {
        let mut terms = Vec::new();
        for term in &self.terms {
            terms.extend(term.grad(var)?.terms);
        }
        Sum::new(terms, self.dom.clone(), self.cod.clone())
    }
}

impl Display for Sum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "Sum([], dom={}, cod={})", self.dom, self.cod);
        }
        let terms = self
            .terms
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" + ");
        write!(f, "{}", terms)
    }
}

/// A qudit circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCircuit")]
pub enum Circuit {
    Id(Id),
    Box(QuditBox),
    Layered(Diagram<QuditBox>),
    Sum(Sum),
}

#[derive(Deserialize)]
enum RawCircuit {
    Id(Id),
    Box(QuditBox),
    Layered(Diagram<QuditBox>),
    Sum(Sum),
}

impl TryFrom<RawCircuit> for Circuit {
    type Error = CircuitError;

    fn try_from(raw: RawCircuit) -> Result<Self> {
        Ok(match raw {
            RawCircuit::Id(id) => Circuit::Id(id),
            RawCircuit::Box(b) => Circuit::Box(b),
            RawCircuit::Sum(s) => Circuit::Sum(s),
            // Every wire of a connected diagram starts at its domain or at a box
            RawCircuit::Layered(d) => {
                wire_type(d.dom().clone())?;
                Circuit::from_diagram(d)
            }
        })
    }
}

impl Circuit {
    /// The identity on `dom`, validated like any box boundary.
    pub fn id(dom: impl Into<TypeInput>) -> Result<Circuit> {
        Id::new(dom).map(Circuit::Id)
    }

    /// Canonical circuit for a diagram.
    pub fn from_diagram(diagram: Diagram<QuditBox>) -> Circuit {
        match diagram.layers() {
            [] => Circuit::Id(Id {
                ty: diagram.dom().clone(),
            }),
            [layer] if layer.left.is_empty() && layer.right.is_empty() => {
                Circuit::Box(layer.gate.clone())
            }
            _ => Circuit::Layered(diagram),
        }
    }

    /// The underlying diagram, `None` for sums.
    pub fn to_diagram(&self) -> Option<Diagram<QuditBox>> {
        match self {
            Circuit::Id(id) => Some(Diagram::id(id.ty.clone())),
            Circuit::Box(b) => Some(Diagram::from_box(b.clone())),
            Circuit::Layered(d) => Some(d.clone()),
            Circuit::Sum(_) => None,
        }
    }

    pub fn dom(&self) -> &Ty {
        match self {
            Circuit::Id(id) => id.dom(),
            Circuit::Box(b) => b.dom(),
            Circuit::Layered(d) => d.dom(),
            Circuit::Sum(s) => s.dom(),
        }
    }

    pub fn cod(&self) -> &Ty {
        match self {
            Circuit::Id(id) => id.cod(),
            Circuit::Box(b) => b.cod(),
            Circuit::Layered(d) => d.cod(),
            Circuit::Sum(s) => s.cod(),
        }
    }

    /// Boxes in layer order; for sums, the boxes of every term in turn.
    pub fn boxes(&self) -> Vec<&QuditBox> {
        match self {
            Circuit::Id(_) => Vec::new(),
            Circuit::Box(b) => vec![b],
            Circuit::Layered(d) => d.boxes().collect(),
            Circuit::Sum(s) => s.terms.iter().flat_map(Circuit::boxes).collect(),
        }
    }

    /// Number of boxes.
    pub fn len(&self) -> usize {
        match self {
            Circuit::Id(_) => 0,
            Circuit::Box(_) => 1,
            Circuit::Layered(d) => d.len(),
            Circuit::Sum(s) => s.terms.iter().map(Circuit::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn free_symbols(&self) -> BTreeSet<Symbol> {
        self.boxes()
            .into_iter()
            .flat_map(QuditBox::free_symbols)
            .collect()
    }

    /// Sequential composition: `self >> other`.
    ///
    /// Sums on either side distribute over the composition.
    pub fn compose(&self, other: &Circuit) -> Result<Circuit> {
        if self.cod() != other.dom() {
            return Err(CircuitError::boundary(self.cod(), other.dom()));
        }
        let (dom, cod) = (self.dom().clone(), other.cod().clone());
        match (self, other) {
            (Circuit::Sum(s), _) => {
                let terms = s
                    .terms
                    .iter()
                    .map(|t| t.compose(other))
                    .collect::<Result<Vec<_>>>()?;
                Sum::new(terms, dom, cod).map(Circuit::Sum)
            }
            (_, Circuit::Sum(s)) => {
                let terms = s
                    .terms
                    .iter()
                    .map(|t| self.compose(t))
                    .collect::<Result<Vec<_>>>()?;
                Sum::new(terms, dom, cod).map(Circuit::Sum)
            }
            _ => {
                let (f, g) = (self.diagram(), other.diagram());
                Ok(Circuit::from_diagram(f.compose(&g)?))
            }
        }
    }

    /// Parallel composition: `self @ other`.
    pub fn tensor(&self, other: &Circuit) -> Result<Circuit> {
        let dom = self.dom().tensor(other.dom());
        let cod = self.cod().tensor(other.cod());
        match (self, other) {
            (Circuit::Sum(s), _) => {
                let terms = s
                    .terms
                    .iter()
                    .map(|t| t.tensor(other))
                    .collect::<Result<Vec<_>>>()?;
                Sum::new(terms, dom, cod).map(Circuit::Sum)
            }
            (_, Circuit::Sum(s)) => {
                let terms = s
                    .terms
                    .iter()
                    .map(|t| self.tensor(t))
                    .collect::<Result<Vec<_>>>()?;
                Sum::new(terms, dom, cod).map(Circuit::Sum)
            }
            _ => Ok(Circuit::from_diagram(self.diagram().tensor(&other.diagram()))),
        }
    }

    /// `id(left) @ self @ id(right)`.
    ///
    /// The side wires must be qudits; scalar wires of dimension 1 are allowed.
    pub fn whisker(&self, left: &Ty, right: &Ty) -> Result<Circuit> {
        let left = wire_type(left.clone())?;
        let right = wire_type(right.clone())?;
        Ok(self.whisker_wires(&left, &right))
    }

    fn whisker_wires(&self, left: &Ty, right: &Ty) -> Circuit {
        match self {
            Circuit::Sum(s) => Circuit::Sum(Sum {
                terms: s.terms.iter().map(|t| t.whisker_wires(left, right)).collect(),
                dom: left.tensor(&s.dom).tensor(right),
                cod: left.tensor(&s.cod).tensor(right),
            }),
            _ => Circuit::from_diagram(self.diagram().whisker(left, right)),
        }
    }

    pub fn dagger(&self) -> Circuit {
        match self {
            Circuit::Id(id) => Circuit::Id(id.clone()),
            Circuit::Box(b) => Circuit::Box(b.dagger()),
            Circuit::Layered(d) => Circuit::Layered(d.dagger()),
            Circuit::Sum(s) => Circuit::Sum(s.dagger()),
        }
    }

    /// Formal sum of two circuits with the same boundary.
    pub fn plus(&self, other: &Circuit) -> Result<Circuit> {
        Sum::new(
            vec![self.clone(), other.clone()],
            self.dom().clone(),
            self.cod().clone(),
        )
        .map(Circuit::Sum)
    }

    /// Symbolic derivative with respect to `var`.
    ///
    /// A composite follows the product rule: one term per box depending on
    /// `var`, with that box replaced by its derivative.
    pub fn grad(&self, var: &Symbol) -> Result<Sum> {
        match self {
            Circuit::Id(id) => Ok(Sum::zero(id.ty.clone(), id.ty.clone())),
            Circuit::Box(b) => b.grad(var),
            Circuit::Sum(s) => s.grad(var),
            Circuit::Layered(d) => {
                let layers = d.layers();
                let mut terms = Vec::new();
                for (i, layer) in layers.iter().enumerate() {
                    if !layer.gate.free_symbols().contains(var) {
                        continue;
                    }
                    trace!(layer = i, gate = layer.gate.name(), "differentiating layer");
                    let prefix = Diagram::from_layers(d.dom().clone(), layers[..i].to_vec())?;
                    let suffix = Diagram::from_layers(layer.cod(), layers[i + 1..].to_vec())?;
                    let derivative = Circuit::Sum(layer.gate.grad(var)?);
                    let term = Circuit::from_diagram(prefix)
                        .compose(&derivative.whisker_wires(&layer.left, &layer.right))?
                        .compose(&Circuit::from_diagram(suffix))?;
                    terms.push(term);
                }
                debug!(var = %var, terms = terms.len(), "expanded circuit gradient");
                Sum::new(terms, d.dom().clone(), d.cod().clone())
            }
        }
    }

    /// Nested cups between `left` and `right`, each one qudit of dimension d.
    pub fn cups(left: impl Into<TypeInput>, right: impl Into<TypeInput>) -> Result<Circuit> {
        let (left, right) = (left.into(), right.into());
        let invalid = |err: CircuitError| CircuitError::InvalidCup {
            left: left.to_string(),
            right: right.to_string(),
            reason: err.to_string(),
        };
        let l = normalize_single(left.clone()).map_err(invalid)?;
        let r = normalize_single(right.clone()).map_err(invalid)?;
        diagram::cups(&Ty::from(l), &Ty::from(r), cup_factory).map_err(|err| match err {
            CircuitError::InvalidCup { .. } => err,
            other => invalid(other),
        })
    }

    /// Caps are the daggers of cups.
    pub fn caps(left: impl Into<TypeInput>, right: impl Into<TypeInput>) -> Result<Circuit> {
        Circuit::cups(left, right).map(|cups| cups.dagger())
    }

    fn diagram(&self) -> Diagram<QuditBox> {
        match self {
            Circuit::Id(id) => Diagram::id(id.ty.clone()),
            Circuit::Box(b) => Diagram::from_box(b.clone()),
            Circuit::Layered(d) => d.clone(),
            // Sums are distributed before reaching the diagram level
            Circuit::Sum(s) => Diagram::id(s.dom.clone()),
        }
    }
}

/// The cup on a pair of equal qudits of dimension d.
///
/// Running the Bell-state preparation `(H ⊗ 1) ; nadd` backwards and
/// projecting onto `⟨0,0|` gives the normalised cup; the scalar `√d` removes
/// the normalisation.
fn cup_factory(left: &Ty, right: &Ty) -> Result<Circuit> {
    let invalid = |reason: String| CircuitError::InvalidCup {
        left: left.to_string(),
        right: right.to_string(),
        reason,
    };
    let l = normalize_single(left).map_err(|e| invalid(e.to_string()))?;
    let r = normalize_single(right).map_err(|e| invalid(e.to_string()))?;
    if l != r {
        return Err(invalid(format!("{} differs from {}", l, r)));
    }

    let d = l.dim;
    debug!(dim = d, "building qudit cup");
    let pair = Ty::from(l).tensor(&Ty::from(r));
    let bell = gates::h(d)?
        .tensor(&Circuit::id(d)?)?
        .compose(&gates::nadd(d)?)?;
    let effect = gates::bra(&[0, 0], &pair)?.tensor(&gates::scalar(Expr::Const((d as f64).sqrt()))?)?;
    bell.dagger().compose(&effect)
}

impl Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Circuit::Id(id) => write!(f, "{}", id),
            Circuit::Box(b) => write!(f, "{}", b),
            Circuit::Sum(s) => write!(f, "{}", s),
            Circuit::Layered(d) => {
                let boxes = d
                    .boxes()
                    .map(|b| b.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                let offsets = d
                    .offsets()
                    .iter()
                    .map(|o| o.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "HDCircuit(dom={}, cod={}, boxes=[{}], offsets=[{}])",
                    d.dom(),
                    d.cod(),
                    boxes,
                    offsets
                )
            }
        }
    }
}

impl From<QuditBox> for Circuit {
    fn from(b: QuditBox) -> Self {
        Circuit::Box(b)
    }
}

impl From<Id> for Circuit {
    fn from(id: Id) -> Self {
        Circuit::Id(id)
    }
}

impl From<Sum> for Circuit {
    fn from(sum: Sum) -> Self {
        Circuit::Sum(sum)
    }
}

impl Arrow for Circuit {
    fn dom(&self) -> Ty {
        Circuit::dom(self).clone()
    }

    fn cod(&self) -> Ty {
        Circuit::cod(self).clone()
    }

    fn id(ty: &Ty) -> Result<Self> {
        Circuit::id(ty)
    }

    fn compose(&self, other: &Self) -> Result<Self> {
        Circuit::compose(self, other)
    }

    fn tensor(&self, other: &Self) -> Result<Self> {
        Circuit::tensor(self, other)
    }
}

/// The rigid category of qudit circuits
///
/// Objects are qudit types, morphisms are circuits. Every single qudit is
/// self-dual, with caps as units and cups as counits.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuditCircuitCategory;

impl Category for QuditCircuitCategory {
    type Object = Ty;
    type Morphism = Circuit;
    type Error = CircuitError;

    fn domain(&self, f: &Self::Morphism) -> Self::Object {
        f.dom().clone()
    }

    fn codomain(&self, f: &Self::Morphism) -> Self::Object {
        f.cod().clone()
    }

    fn identity(&self, obj: &Self::Object) -> Result<Self::Morphism> {
        Circuit::id(obj)
    }

    fn compose(&self, f: &Self::Morphism, g: &Self::Morphism) -> Result<Self::Morphism> {
        f.compose(g)
    }
}

impl MonoidalCategory for QuditCircuitCategory {
    fn unit(&self) -> Self::Object {
        Ty::empty()
    }

    fn tensor_objects(&self, a: &Self::Object, b: &Self::Object) -> Self::Object {
        a.tensor(b)
    }

    fn tensor_morphisms(&self, f: &Self::Morphism, g: &Self::Morphism) -> Result<Self::Morphism> {
        f.tensor(g)
    }
}

impl DaggerCategory for QuditCircuitCategory {
    fn dagger(&self, f: &Self::Morphism) -> Self::Morphism {
        f.dagger()
    }
}

impl CompactClosedCategory for QuditCircuitCategory {
    fn dual(&self, a: &Self::Object) -> Self::Object {
        a.r()
    }

    fn unit_morphism(&self, a: &Self::Object) -> Result<Self::Morphism> {
        Circuit::caps(a, &a.r())
    }

    fn counit_morphism(&self, a: &Self::Object) -> Result<Self::Morphism> {
        Circuit::cups(&a.r(), a)
    }
}
