use super::profile::MixedProfile;
use crate::Index;
use crate::SINGULAR_DETERMINANT;
use crate::game::game::Game;
use anyhow::Result;
use anyhow::bail;

impl Game {
    /// topological index of an equilibrium: the sign of the replicator-field
    /// jacobian determinant at the candidate, times (−1)^D for D total
    /// strategies. ±1 whenever the jacobian has full rank; a singular
    /// jacobian means the game is degenerate at this candidate, and surfaces
    /// as an error. generic payoffs hit that case with probability zero.
    pub fn index(&self, equilibrium: &MixedProfile) -> Result<Index> {
        let ref at = equilibrium.flatten();
        let determinant = self.field().jacobian().eval_real(at).determinant();
        if !determinant.is_finite() || determinant.abs() < SINGULAR_DETERMINANT {
            bail!("singular jacobian at candidate {}", equilibrium);
        }
        let sign = if determinant > 0. { 1 } else { -1 };
        let parity = if self.unknowns() % 2 == 0 { 1 } else { -1 };
        Ok(sign * parity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tensor::Tensor;

    fn matching_bonus() -> Game {
        Game::new(vec![
            Tensor::from(vec![vec![2., 0.], vec![0., 1.]]),
            Tensor::from(vec![vec![2., 0.], vec![0., 1.]]),
        ])
        .unwrap()
    }

    #[test]
    fn strict_pure_equilibria_carry_plus_one() {
        let game = matching_bonus();
        let first = MixedProfile::from(vec![vec![1., 0.], vec![1., 0.]]);
        let second = MixedProfile::from(vec![vec![0., 1.], vec![0., 1.]]);
        assert_eq!(game.index(&first).unwrap(), 1);
        assert_eq!(game.index(&second).unwrap(), 1);
    }

    #[test]
    fn interior_companion_carries_minus_one() {
        // the mixed equilibrium between two strict pure ones
        let game = matching_bonus();
        let third = 1. / 3.;
        let mixed = MixedProfile::from(vec![vec![third, 2. * third], vec![third, 2. * third]]);
        assert_eq!(game.index(&mixed).unwrap(), -1);
    }

    #[test]
    fn unique_interior_equilibrium_carries_plus_one() {
        // row wants to match, column wants to mismatch; only equilibrium is
        // uniform mixing by both
        let game = Game::new(vec![
            Tensor::from(vec![vec![2., 0.], vec![0., 2.]]),
            Tensor::from(vec![vec![0., 2.], vec![2., 0.]]),
        ])
        .unwrap();
        let uniform = MixedProfile::from(vec![vec![0.5, 0.5], vec![0.5, 0.5]]);
        assert_eq!(game.index(&uniform).unwrap(), 1);
    }

    #[test]
    fn flat_games_are_degenerate() {
        let game = Game::new(vec![
            Tensor::from(vec![vec![0., 0.], vec![0., 0.]]),
            Tensor::from(vec![vec![0., 0.], vec![0., 0.]]),
        ])
        .unwrap();
        let uniform = MixedProfile::from(vec![vec![0.5, 0.5], vec![0.5, 0.5]]);
        assert!(game.index(&uniform).is_err());
    }
}
