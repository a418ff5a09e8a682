use super::polynomial::Polynomial;
use nalgebra::DMatrix;
use nalgebra::DVector;
use num_complex::Complex;

/// A finite list of polynomials over shared unknowns, read as the
/// simultaneous equations `f(x) = 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct System {
    equations: Vec<Polynomial>,
}

impl System {
    pub fn new(equations: Vec<Polynomial>) -> Self {
        assert!(!equations.is_empty(), "empty system");
        assert!(
            equations.windows(2).all(|w| w[0].arity() == w[1].arity()),
            "equations share unknowns"
        );
        Self { equations }
    }

    pub fn equations(&self) -> &[Polynomial] {
        &self.equations
    }
    pub fn len(&self) -> usize {
        self.equations.len()
    }
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }
    pub fn unknowns(&self) -> usize {
        self.equations[0].arity()
    }

    /// residual vector f(x).
    pub fn residual(&self, at: &[Complex<f64>]) -> DVector<Complex<f64>> {
        DVector::from_iterator(self.len(), self.equations.iter().map(|eq| eq.eval(at)))
    }

    /// symbolic matrix of partial derivatives, one row per equation and one
    /// column per unknown.
    pub fn jacobian(&self) -> Jacobian {
        Jacobian {
            rows: self
                .equations
                .iter()
                .map(|eq| (0..self.unknowns()).map(|u| eq.differentiate(u)).collect())
                .collect(),
        }
    }
}

/// Jacobian of a system, differentiated once and evaluated on demand.
#[derive(Clone, Debug)]
pub struct Jacobian {
    rows: Vec<Vec<Polynomial>>,
}

impl Jacobian {
    pub fn eval(&self, at: &[Complex<f64>]) -> DMatrix<Complex<f64>> {
        DMatrix::from_fn(self.rows.len(), self.rows[0].len(), |i, j| {
            self.rows[i][j].eval(at)
        })
    }
    pub fn eval_real(&self, at: &[f64]) -> DMatrix<f64> {
        DMatrix::from_fn(self.rows.len(), self.rows[0].len(), |i, j| {
            self.rows[i][j].eval_real(at)
        })
    }
}
