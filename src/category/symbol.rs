//! Symbolic parameters
//!
//! Boxes may depend on free real parameters. A small expression tree covers
//! what circuits need: free symbols, derivatives and numeric evaluation.

use std::collections::{BTreeSet, HashMap};
use std::fmt::{self, Display};
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{CircuitError, Result};

/// A named free parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub String);

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Symbol(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Values for symbols, used when evaluating expressions.
pub type Bindings = HashMap<Symbol, f64>;

/// A real-valued symbolic expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Const(f64),
    Var(Symbol),
    Add(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Neg(Box<Expr>),
    Pow(Box<Expr>, f64),
    Sin(Box<Expr>),
    Cos(Box<Expr>),
    Exp(Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(Symbol::new(name))
    }

    pub fn sin(self) -> Self {
        Expr::Sin(Box::new(self))
    }

    pub fn cos(self) -> Self {
        Expr::Cos(Box::new(self))
    }

    pub fn exp(self) -> Self {
        Expr::Exp(Box::new(self))
    }

    pub fn powf(self, exponent: f64) -> Self {
        Expr::Pow(Box::new(self), exponent)
    }

    pub fn as_const(&self) -> Option<f64> {
        match self {
            Expr::Const(c) => Some(*c),
            _ => None,
        }
    }

    pub fn free_symbols(&self) -> BTreeSet<Symbol> {
        let mut symbols = BTreeSet::new();
        self.collect_symbols(&mut symbols);
        symbols
    }

    fn collect_symbols(&self, out: &mut BTreeSet<Symbol>) {
        match self {
            Expr::Const(_) => {}
            Expr::Var(s) => {
                out.insert(s.clone());
            }
            Expr::Add(a, b) | Expr::Mul(a, b) => {
                a.collect_symbols(out);
                b.collect_symbols(out);
            }
            Expr::Neg(a) | Expr::Pow(a, _) | Expr::Sin(a) | Expr::Cos(a) | Expr::Exp(a) => {
                a.collect_symbols(out)
            }
        }
    }

    pub fn contains(&self, var: &Symbol) -> bool {
        match self {
            Expr::Const(_) => false,
            Expr::Var(s) => s == var,
            Expr::Add(a, b) | Expr::Mul(a, b) => a.contains(var) || b.contains(var),
            Expr::Neg(a) | Expr::Pow(a, _) | Expr::Sin(a) | Expr::Cos(a) | Expr::Exp(a) => {
                a.contains(var)
            }
        }
    }

    /// Partial derivative with respect to `var`.
    pub fn diff(&self, var: &Symbol) -> Expr {
        if !self.contains(var) {
            return Expr::Const(0.0);
        }
        match self {
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Var(_) => Expr::Const(1.0),
            Expr::Add(a, b) => a.diff(var) + b.diff(var),
            Expr::Mul(a, b) => a.diff(var) * (**b).clone() + (**a).clone() * b.diff(var),
            Expr::Neg(a) => -a.diff(var),
            Expr::Pow(a, n) => Expr::Const(*n) * (**a).clone().powf(n - 1.0) * a.diff(var),
            Expr::Sin(a) => (**a).clone().cos() * a.diff(var),
            Expr::Cos(a) => -((**a).clone().sin() * a.diff(var)),
            Expr::Exp(a) => self.clone() * a.diff(var),
        }
    }

    pub fn eval(&self, bindings: &Bindings) -> Result<f64> {
        Ok(match self {
            Expr::Const(c) => *c,
            Expr::Var(s) => *bindings
                .get(s)
                .ok_or_else(|| CircuitError::UnboundSymbol(s.to_string()))?,
            Expr::Add(a, b) => a.eval(bindings)? + b.eval(bindings)?,
            Expr::Mul(a, b) => a.eval(bindings)? * b.eval(bindings)?,
            Expr::Neg(a) => -a.eval(bindings)?,
            Expr::Pow(a, n) => a.eval(bindings)?.powf(*n),
            Expr::Sin(a) => a.eval(bindings)?.sin(),
            Expr::Cos(a) => a.eval(bindings)?.cos(),
            Expr::Exp(a) => a.eval(bindings)?.exp(),
        })
    }
}

impl From<f64> for Expr {
    fn from(c: f64) -> Self {
        Expr::Const(c)
    }
}

impl From<Symbol> for Expr {
    fn from(s: Symbol) -> Self {
        Expr::Var(s)
    }
}

// Constant folding keeps derivatives of products readable.
impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        match (self.as_const(), rhs.as_const()) {
            (Some(a), Some(b)) => Expr::Const(a + b),
            (Some(z), _) if z == 0.0 => rhs,
            (_, Some(z)) if z == 0.0 => self,
            _ => Expr::Add(Box::new(self), Box::new(rhs)),
        }
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        self + (-rhs)
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        match (self.as_const(), rhs.as_const()) {
            (Some(a), Some(b)) => Expr::Const(a * b),
            (Some(z), _) | (_, Some(z)) if z == 0.0 => Expr::Const(0.0),
            (Some(o), _) if o == 1.0 => rhs,
            (_, Some(o)) if o == 1.0 => self,
            _ => Expr::Mul(Box::new(self), Box::new(rhs)),
        }
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        match self {
            Expr::Const(c) => Expr::Const(-c),
            Expr::Neg(inner) => *inner,
            other => Expr::Neg(Box::new(other)),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(c) => write!(f, "{}", c),
            Expr::Var(s) => write!(f, "{}", s),
            Expr::Add(a, b) => write!(f, "({} + {})", a, b),
            Expr::Mul(a, b) => write!(f, "{}*{}", a, b),
            Expr::Neg(a) => write!(f, "-{}", a),
            Expr::Pow(a, n) => write!(f, "{}**{}", a, n),
            Expr::Sin(a) => write!(f, "sin({})", a),
            Expr::Cos(a) => write!(f, "cos({})", a),
            Expr::Exp(a) => write!(f, "exp({})", a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_symbols() {
        let e = Expr::var("a") * Expr::var("b").cos() + Expr::Const(2.0);
        let names: Vec<_> = e.free_symbols().into_iter().map(|s| s.0).collect();
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
        assert!(Expr::Const(1.0).free_symbols().is_empty());
    }

    #[test]
    fn test_derivative_values() {
        let x = Symbol::new("x");
        let e = Expr::var("x").sin() * Expr::var("x");
        let mut bindings = Bindings::new();
        bindings.insert(x.clone(), 0.7);

        let expected = 0.7_f64.cos() * 0.7 + 0.7_f64.sin();
        let got = e.diff(&x).eval(&bindings).unwrap();
        assert!((got - expected).abs() < 1e-12);
    }

    #[test]
    fn test_derivative_of_absent_symbol_is_zero() {
        let e = Expr::var("y").exp();
        assert_eq!(e.diff(&Symbol::new("x")), Expr::Const(0.0));
    }

    #[test]
    fn test_unbound_symbol() {
        let err = Expr::var("t").eval(&Bindings::new()).unwrap_err();
        assert_eq!(err, CircuitError::UnboundSymbol("t".into()));
    }
}
