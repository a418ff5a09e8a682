use num_complex::Complex;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::ops::Add;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;

/// Sparse multivariate polynomial over a fixed number of unknowns.
///
/// Monomials are exponent vectors mapped to coefficients; absent monomials
/// are zero. This explicit representation stands in for a general symbolic
/// algebra system: the equation builder constructs these directly, and
/// differentiation is a pure function over the map.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    arity: usize,
    terms: BTreeMap<Vec<u32>, f64>,
}

impl Polynomial {
    pub fn zero(arity: usize) -> Self {
        Self {
            arity,
            terms: BTreeMap::default(),
        }
    }
    pub fn constant(arity: usize, value: f64) -> Self {
        let mut poly = Self::zero(arity);
        poly.accumulate(vec![0; arity], value);
        poly
    }
    /// the `unknown`-th coordinate as a polynomial.
    pub fn variable(arity: usize, unknown: usize) -> Self {
        let mut exponents = vec![0; arity];
        exponents[unknown] = 1;
        let mut poly = Self::zero(arity);
        poly.accumulate(exponents, 1.);
        poly
    }

    pub fn arity(&self) -> usize {
        self.arity
    }
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
    /// total degree. the zero polynomial reports 0.
    pub fn degree(&self) -> u32 {
        self.terms
            .keys()
            .map(|exponents| exponents.iter().sum())
            .max()
            .unwrap_or(0)
    }

    /// add `coefficient` onto the monomial with the given exponents,
    /// dropping the monomial if it cancels to zero.
    pub fn accumulate(&mut self, exponents: Vec<u32>, coefficient: f64) {
        assert!(exponents.len() == self.arity, "monomial arity mismatch");
        match self.terms.entry(exponents) {
            Entry::Vacant(vacant) => {
                if coefficient != 0. {
                    vacant.insert(coefficient);
                }
            }
            Entry::Occupied(mut occupied) => {
                *occupied.get_mut() += coefficient;
                if *occupied.get() == 0. {
                    occupied.remove();
                }
            }
        }
    }

    pub fn terms(&self) -> impl Iterator<Item = (&[u32], f64)> + '_ {
        self.terms.iter().map(|(e, &c)| (e.as_slice(), c))
    }

    /// partial derivative with respect to the `unknown`-th coordinate.
    pub fn differentiate(&self, unknown: usize) -> Self {
        let mut derivative = Self::zero(self.arity);
        for (exponents, coefficient) in self.terms() {
            let power = exponents[unknown];
            if power > 0 {
                let mut lowered = exponents.to_vec();
                lowered[unknown] = power - 1;
                derivative.accumulate(lowered, coefficient * power as f64);
            }
        }
        derivative
    }

    pub fn eval(&self, at: &[Complex<f64>]) -> Complex<f64> {
        self.terms
            .iter()
            .map(|(exponents, &coefficient)| {
                exponents
                    .iter()
                    .zip(at.iter())
                    .filter(|&(&e, _)| e > 0)
                    .fold(Complex::new(coefficient, 0.), |acc, (&e, z)| acc * z.powu(e))
            })
            .sum()
    }
    pub fn eval_real(&self, at: &[f64]) -> f64 {
        self.terms
            .iter()
            .map(|(exponents, &coefficient)| {
                exponents
                    .iter()
                    .zip(at.iter())
                    .filter(|&(&e, _)| e > 0)
                    .fold(coefficient, |acc, (&e, x)| acc * x.powi(e as i32))
            })
            .sum()
    }
}

impl Add for Polynomial {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        assert!(self.arity == rhs.arity, "polynomial arity mismatch");
        for (exponents, coefficient) in rhs.terms {
            self.accumulate(exponents, coefficient);
        }
        self
    }
}
impl Sub for Polynomial {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self + rhs.neg()
    }
}
impl Neg for Polynomial {
    type Output = Self;
    fn neg(self) -> Self {
        self * -1.
    }
}
impl Mul for Polynomial {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        assert!(self.arity == rhs.arity, "polynomial arity mismatch");
        let mut product = Self::zero(self.arity);
        for (left, &a) in self.terms.iter() {
            for (right, &b) in rhs.terms.iter() {
                let exponents = left.iter().zip(right.iter()).map(|(l, r)| l + r).collect();
                product.accumulate(exponents, a * b);
            }
        }
        product
    }
}
impl Mul<f64> for Polynomial {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        let mut scaled = Self::zero(self.arity);
        for (exponents, coefficient) in self.terms {
            scaled.accumulate(exponents, coefficient * scalar);
        }
        scaled
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let rendered = self
            .terms
            .iter()
            .map(|(exponents, coefficient)| {
                exponents
                    .iter()
                    .enumerate()
                    .filter(|&(_, &e)| e > 0)
                    .map(|(i, &e)| match e {
                        1 => format!("x{}", i),
                        _ => format!("x{}^{}", i, e),
                    })
                    .fold(format!("{}", coefficient), |acc, var| {
                        format!("{}·{}", acc, var)
                    })
            })
            .collect::<Vec<_>>()
            .join(" + ");
        write!(f, "{}", rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn differentiation_lowers_powers() {
        // x0^2 x1  →  d/dx0 = 2 x0 x1
        let mut poly = Polynomial::zero(2);
        poly.accumulate(vec![2, 1], 1.);
        let mut expected = Polynomial::zero(2);
        expected.accumulate(vec![1, 1], 2.);
        assert_eq!(poly.differentiate(0), expected);
        assert_eq!(poly.differentiate(1).degree(), 2);
    }

    #[test]
    fn product_collects_like_monomials() {
        // (x0 + x1)(x0 - x1) = x0^2 - x1^2
        let x0 = Polynomial::variable(2, 0);
        let x1 = Polynomial::variable(2, 1);
        let product = (x0.clone() + x1.clone()) * (x0 - x1);
        let mut expected = Polynomial::zero(2);
        expected.accumulate(vec![2, 0], 1.);
        expected.accumulate(vec![0, 2], -1.);
        assert_eq!(product, expected);
    }

    #[test]
    fn cancellation_drops_monomials() {
        let x0 = Polynomial::variable(2, 0);
        assert!((x0.clone() - x0).is_zero());
    }

    #[test]
    fn evaluation_agrees_over_fields() {
        // 3 x0^2 x1 - x1 + 2
        let mut poly = Polynomial::zero(2);
        poly.accumulate(vec![2, 1], 3.);
        poly.accumulate(vec![0, 1], -1.);
        poly.accumulate(vec![0, 0], 2.);
        let real = poly.eval_real(&[2., -1.]);
        assert_eq!(real, -9.);
        let complex = poly.eval(&[Complex::new(2., 0.), Complex::new(-1., 0.)]);
        assert_eq!(complex, Complex::new(-9., 0.));
    }
}
