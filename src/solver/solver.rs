use super::roots::Roots;
use crate::algebra::system::System;
use anyhow::Result;

/// Root-finding capability for square polynomial systems.
///
/// Backends return every complex root they can reach; the caller applies the
/// real-positive filter. Swapping in a different backend (homotopy
/// continuation, resultants, Groebner bases) must not touch anything above
/// this trait.
pub trait Solver {
    fn solve(&self, system: &System, tolerance: f64) -> Result<Roots>;
}
