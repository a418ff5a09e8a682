use crate::Probability;
use nalgebra::DMatrix;
use nalgebra::DVector;
use num_complex::Complex;

/// Complex roots of a square system: one row per unknown, one column per
/// root.
#[derive(Clone, Debug)]
pub struct Roots {
    matrix: DMatrix<Complex<f64>>,
}

impl Roots {
    pub fn none(unknowns: usize) -> Self {
        Self {
            matrix: DMatrix::zeros(unknowns, 0),
        }
    }
    pub fn gather(unknowns: usize, columns: Vec<DVector<Complex<f64>>>) -> Self {
        match columns.is_empty() {
            true => Self::none(unknowns),
            false => Self {
                matrix: DMatrix::from_columns(&columns),
            },
        }
    }

    pub fn unknowns(&self) -> usize {
        self.matrix.nrows()
    }
    pub fn count(&self) -> usize {
        self.matrix.ncols()
    }

    /// real-positive roots, split into per-player probability vectors.
    ///
    /// a root survives iff every coordinate has real part at least `tol` and
    /// imaginary magnitude at most `tol`; survivors keep their real parts and
    /// are chopped into consecutive runs sized by `lengths`.
    pub fn candidates(&self, tol: f64, lengths: &[usize]) -> Vec<Vec<Vec<Probability>>> {
        debug_assert!(lengths.iter().sum::<usize>() == self.unknowns());
        self.matrix
            .column_iter()
            .filter(|column| column.iter().all(|z| z.re >= tol && z.im.abs() <= tol))
            .map(|column| {
                let mut flat = column.iter().map(|z| z.re);
                lengths
                    .iter()
                    .map(|&n| flat.by_ref().take(n).collect())
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_rejects_complex_and_nonpositive() {
        let keep = DVector::from_vec(vec![
            Complex::new(0.25, 0.),
            Complex::new(0.75, 1e-9),
            Complex::new(1., 0.),
        ]);
        let complex = DVector::from_vec(vec![
            Complex::new(0.5, 0.5),
            Complex::new(0.5, 0.),
            Complex::new(1., 0.),
        ]);
        let negative = DVector::from_vec(vec![
            Complex::new(-0.5, 0.),
            Complex::new(1.5, 0.),
            Complex::new(1., 0.),
        ]);
        let roots = Roots::gather(3, vec![keep, complex, negative]);
        let candidates = roots.candidates(1e-6, &[2, 1]);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0], vec![vec![0.25, 0.75], vec![1.]]);
    }

    #[test]
    fn empty_roots_yield_no_candidates() {
        let roots = Roots::none(4);
        assert_eq!(roots.count(), 0);
        assert!(roots.candidates(1e-6, &[2, 2]).is_empty());
    }
}
