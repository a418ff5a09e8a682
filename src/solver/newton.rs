use super::roots::Roots;
use super::solver::Solver;
use crate::NEWTON_DISTINCT;
use crate::NEWTON_DIVERGENCE;
use crate::NEWTON_ITERATIONS;
use crate::NEWTON_RESIDUAL;
use crate::NEWTON_STARTS;
use crate::algebra::system::Jacobian;
use crate::algebra::system::System;
use anyhow::Result;
use anyhow::bail;
use nalgebra::DVector;
use num_complex::Complex;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::hash::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

/// Multi-start damped Newton iteration over ℂ^D.
///
/// Starts are deterministic: a few structured constants plus pseudo-random
/// points seeded from the system's monomial structure, so the same system
/// always yields the same roots. Steps solve the linearization by LU; paths
/// that wander off or hit a singular linearization are abandoned, and
/// converged iterates are deduplicated by distance.
///
/// On the multilinear systems of two-player blocks a Newton step is exact,
/// so every root is found; deeper games are heuristic territory, where a
/// homotopy continuation backend can take over behind the same trait.
pub struct Newton {
    starts: usize,
}

impl Default for Newton {
    fn default() -> Self {
        Self {
            starts: NEWTON_STARTS,
        }
    }
}

impl Newton {
    /// deterministic seed from the monomial structure, coefficients aside.
    fn seed(system: &System) -> u64 {
        let ref mut hasher = DefaultHasher::default();
        system.unknowns().hash(hasher);
        for equation in system.equations() {
            for (exponents, _) in equation.terms() {
                exponents.hash(hasher);
            }
        }
        hasher.finish()
    }

    /// structured constants, then alternating real and complex random points.
    fn launchpad(&self, system: &System) -> Vec<DVector<Complex<f64>>> {
        let d = system.unknowns();
        let ref mut rng = SmallRng::seed_from_u64(Self::seed(system));
        let mut starts = [0.5, 0.25, 1.0]
            .iter()
            .map(|&c| DVector::from_element(d, Complex::new(c, 0.)))
            .collect::<Vec<_>>();
        for i in 0..self.starts {
            starts.push(DVector::from_fn(d, |_, _| {
                match i % 2 {
                    0 => Complex::new(rng.random_range(-1.0..2.0), 0.),
                    _ => Complex::new(
                        rng.random_range(-1.0..2.0),
                        rng.random_range(-1.0..1.0),
                    ),
                }
            }));
        }
        starts
    }

    fn refine(
        system: &System,
        jacobian: &Jacobian,
        start: DVector<Complex<f64>>,
    ) -> Option<DVector<Complex<f64>>> {
        let mut x = start;
        for _ in 0..NEWTON_ITERATIONS {
            let residual = system.residual(x.as_slice());
            if residual.norm() < NEWTON_RESIDUAL {
                return Some(x);
            }
            let step = jacobian.eval(x.as_slice()).lu().solve(&(-residual))?;
            x += step;
            if x.norm() > NEWTON_DIVERGENCE {
                return None;
            }
        }
        None
    }
}

impl Solver for Newton {
    fn solve(&self, system: &System, _tolerance: f64) -> Result<Roots> {
        let d = system.unknowns();
        if system.len() != d {
            bail!(
                "system is not square: {} equations over {} unknowns",
                system.len(),
                d
            );
        }
        // a nonzero constant equation is a contradiction with no finite
        // roots; lopsided supports produce these routinely
        if system
            .equations()
            .iter()
            .any(|eq| eq.degree() == 0 && !eq.is_zero())
        {
            return Ok(Roots::none(d));
        }
        let ref jacobian = system.jacobian();
        let mut found: Vec<DVector<Complex<f64>>> = Vec::new();
        for start in self.launchpad(system) {
            if let Some(root) = Self::refine(system, jacobian, start) {
                if !found.iter().any(|r| (r - &root).norm() < NEWTON_DISTINCT) {
                    found.push(root);
                }
            }
        }
        log::trace!("newton found {} roots over {} unknowns", found.len(), d);
        Ok(Roots::gather(d, found))
    }
}
