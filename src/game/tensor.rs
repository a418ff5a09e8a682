use crate::Payoff;
use anyhow::Context;
use anyhow::Result;
use anyhow::bail;

/// One player's payoff tensor.
///
/// The player's own strategy axis leads; one axis per opponent follows, in
/// player order. Rank always equals the number of players, which bounds the
/// recursion depth of every method here.
#[derive(Clone, Debug, PartialEq)]
pub enum Tensor {
    Leaf(Payoff),
    Axis(Vec<Tensor>),
}

impl Tensor {
    /// length of the outermost axis.
    pub fn len(&self) -> usize {
        match self {
            Tensor::Leaf(_) => 0,
            Tensor::Axis(children) => children.len(),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// axis lengths outermost-first. fails on ragged or empty axes.
    pub fn shape(&self) -> Result<Vec<usize>> {
        match self {
            Tensor::Leaf(_) => Ok(vec![]),
            Tensor::Axis(children) => {
                let inner = children
                    .first()
                    .context("tensor axis has no entries")?
                    .shape()?;
                for child in children.iter().skip(1) {
                    if child.shape()? != inner {
                        bail!("ragged tensor axis");
                    }
                }
                Ok(std::iter::once(children.len()).chain(inner).collect())
            }
        }
    }

    /// payoff at a full index, one coordinate per axis.
    pub fn at(&self, indices: &[usize]) -> Payoff {
        match (self, indices.split_first()) {
            (Tensor::Leaf(value), None) => *value,
            (Tensor::Axis(children), Some((&index, rest))) => children[index].at(rest),
            _ => panic!("tensor rank mismatch"),
        }
    }

    /// restriction to the given index subset per axis. values are preserved
    /// exactly; only indices are kept or dropped.
    pub fn slice(&self, axes: &[Vec<usize>]) -> Self {
        match (self, axes.split_first()) {
            (Tensor::Leaf(value), None) => Tensor::Leaf(*value),
            (Tensor::Axis(children), Some((axis, rest))) => {
                Tensor::Axis(axis.iter().map(|&i| children[i].slice(rest)).collect())
            }
            _ => panic!("tensor rank mismatch"),
        }
    }
}

impl From<Payoff> for Tensor {
    fn from(value: Payoff) -> Self {
        Tensor::Leaf(value)
    }
}
impl<T> From<Vec<T>> for Tensor
where
    Tensor: From<T>,
{
    fn from(children: Vec<T>) -> Self {
        Tensor::Axis(children.into_iter().map(Tensor::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_of_matrix() {
        let tensor = Tensor::from(vec![vec![1., 2., 3.], vec![4., 5., 6.]]);
        assert_eq!(tensor.shape().unwrap(), vec![2, 3]);
        assert_eq!(tensor.at(&[1, 2]), 6.);
    }

    #[test]
    fn ragged_axes_rejected() {
        let tensor = Tensor::Axis(vec![
            Tensor::from(vec![1., 2.]),
            Tensor::from(vec![3., 4., 5.]),
        ]);
        assert!(tensor.shape().is_err());
    }

    #[test]
    fn slice_keeps_values_at_kept_indices() {
        let tensor = Tensor::from(vec![vec![1., 2., 3.], vec![4., 5., 6.]]);
        let block = tensor.slice(&[vec![1], vec![0, 2]]);
        assert_eq!(block.shape().unwrap(), vec![1, 2]);
        assert_eq!(block.at(&[0, 0]), 4.);
        assert_eq!(block.at(&[0, 1]), 6.);
    }

    #[test]
    fn slice_of_cube() {
        let tensor = Tensor::from(vec![
            vec![vec![0., 1.], vec![2., 3.]],
            vec![vec![4., 5.], vec![6., 7.]],
        ]);
        let block = tensor.slice(&[vec![0, 1], vec![1], vec![0]]);
        assert_eq!(block.shape().unwrap(), vec![2, 1, 1]);
        assert_eq!(block.at(&[0, 0, 0]), 2.);
        assert_eq!(block.at(&[1, 0, 0]), 6.);
    }
}
