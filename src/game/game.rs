use super::support::SupportProfile;
use super::tensor::Tensor;
use crate::Payoff;
use anyhow::Context;
use anyhow::Result;
use anyhow::bail;

/// Immutable description of a finite n-player strategic-form game.
///
/// Strategy counts are derived from the payoff tensors at construction, and
/// every tensor is validated against them up front; no partially-formed game
/// ever escapes. Blocks built by `restrict` are fresh `Game` values, never
/// views into their parent.
///
/// Decision variables are numbered player-major: player p's strategy s maps
/// to the flat unknown `variable(p, s)`, shared by the equation builder, the
/// solver and the index calculator.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    strategies: Vec<usize>,
    payoffs: Vec<Tensor>,
}

impl Game {
    pub fn new(payoffs: Vec<Tensor>) -> Result<Self> {
        if payoffs.is_empty() {
            bail!("a game needs at least one player");
        }
        let strategies = payoffs.iter().map(Tensor::len).collect::<Vec<_>>();
        if strategies.contains(&0) {
            bail!("every player needs at least one strategy");
        }
        for (player, tensor) in payoffs.iter().enumerate() {
            let shape = tensor
                .shape()
                .with_context(|| format!("player {} payoff tensor", player))?;
            let expected = std::iter::once(strategies[player])
                .chain(
                    strategies
                        .iter()
                        .enumerate()
                        .filter(|&(q, _)| q != player)
                        .map(|(_, &n)| n),
                )
                .collect::<Vec<_>>();
            if shape != expected {
                bail!(
                    "player {} payoff tensor has shape {:?}, expected {:?}",
                    player,
                    shape,
                    expected
                );
            }
        }
        Ok(Self {
            strategies,
            payoffs,
        })
    }

    pub fn players(&self) -> usize {
        self.strategies.len()
    }
    pub fn strategies(&self) -> &[usize] {
        &self.strategies
    }
    /// the full strategy index range of one player.
    pub fn indices(&self, player: usize) -> Vec<usize> {
        (0..self.strategies[player]).collect()
    }
    /// total strategy count, and so the number of decision variables.
    pub fn unknowns(&self) -> usize {
        self.strategies.iter().sum()
    }
    /// flat decision-variable id of (player, strategy).
    pub fn variable(&self, player: usize, strategy: usize) -> usize {
        self.strategies[..player].iter().sum::<usize>() + strategy
    }

    /// payoff to `player` from pure `strategy` at a pure opponent profile.
    /// `profile` carries one entry per player; the player's own entry is
    /// ignored in favor of `strategy`.
    pub fn payoff(&self, player: usize, strategy: usize, profile: &[usize]) -> Payoff {
        let indices = std::iter::once(strategy)
            .chain(
                profile
                    .iter()
                    .enumerate()
                    .filter(|&(q, _)| q != player)
                    .map(|(_, &s)| s),
            )
            .collect::<Vec<_>>();
        self.payoffs[player].at(&indices)
    }

    /// every pure-strategy profile of the opponents of `player`, the
    /// player's own coordinate pinned to zero as a placeholder.
    pub fn opponent_profiles(&self, player: usize) -> Vec<Vec<usize>> {
        let mut shape = self.strategies.clone();
        shape[player] = 1;
        shape.iter().fold(vec![vec![]], |acc, &n| {
            acc.iter()
                .flat_map(|prefix| {
                    (0..n).map(move |s| {
                        let mut next = prefix.clone();
                        next.push(s);
                        next
                    })
                })
                .collect()
        })
    }

    /// the block game induced by a support profile: each tensor is sliced
    /// with the player's own support leading, then the opponents' supports
    /// in player order. strategy indices renumber to 0..k within the block.
    pub fn restrict(&self, support: &SupportProfile) -> Self {
        let payoffs = self
            .payoffs
            .iter()
            .enumerate()
            .map(|(player, tensor)| {
                let axes = std::iter::once(player)
                    .chain((0..self.players()).filter(|&q| q != player))
                    .map(|q| support.support(q).indices().to_vec())
                    .collect::<Vec<_>>();
                tensor.slice(&axes)
            })
            .collect();
        Self {
            strategies: support.supports().iter().map(|s| s.len()).collect(),
            payoffs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub fn matching_bonus() -> Game {
        // both players earn 2 on (0,0) and 1 on (1,1)
        Game::new(vec![
            Tensor::from(vec![vec![2., 0.], vec![0., 1.]]),
            Tensor::from(vec![vec![2., 0.], vec![0., 1.]]),
        ])
        .unwrap()
    }

    #[test]
    fn construction_validates_shapes() {
        let lopsided = Game::new(vec![
            Tensor::from(vec![vec![1., 0.], vec![0., 1.]]),
            Tensor::from(vec![vec![1., 0., 3.], vec![0., 1., 3.]]),
        ]);
        assert!(lopsided.is_err());
        let ragged = Game::new(vec![
            Tensor::from(vec![vec![1., 0.], vec![0.]]),
            Tensor::from(vec![vec![1., 0.], vec![0., 1.]]),
        ]);
        assert!(ragged.is_err());
    }

    #[test]
    fn variables_number_player_major() {
        let game = matching_bonus();
        assert_eq!(game.unknowns(), 4);
        assert_eq!(game.variable(0, 1), 1);
        assert_eq!(game.variable(1, 0), 2);
    }

    #[test]
    fn payoff_ignores_own_profile_entry() {
        let game = matching_bonus();
        assert_eq!(game.payoff(0, 0, &[1, 0]), 2.);
        assert_eq!(game.payoff(1, 1, &[1, 0]), 0.);
        assert_eq!(game.payoff(1, 1, &[1, 1]), 1.);
    }

    #[test]
    fn opponent_profiles_cover_rival_lattice() {
        let game = Game::new(vec![
            Tensor::from(vec![vec![vec![0.; 2]; 3], vec![vec![0.; 2]; 3]]),
            Tensor::from(vec![vec![vec![0.; 2]; 2], vec![vec![0.; 2]; 2], vec![
                vec![0.; 2];
                2
            ]]),
            Tensor::from(vec![vec![vec![0.; 3]; 2], vec![vec![0.; 3]; 2]]),
        ])
        .unwrap();
        let profiles = game.opponent_profiles(1);
        assert_eq!(profiles.len(), 2 * 2);
        assert!(profiles.iter().all(|p| p[1] == 0));
        assert!(profiles.contains(&vec![1, 0, 1]));
    }

    #[test]
    fn restriction_renumbers_and_preserves_payoffs() {
        let game = Game::new(vec![
            Tensor::from(vec![vec![1., 2., 3.], vec![4., 5., 6.]]),
            Tensor::from(vec![vec![10., 11.], vec![20., 21.], vec![30., 31.]]),
        ])
        .unwrap();
        let support = crate::game::support::SupportProfile::from(vec![vec![1], vec![0, 2]]);
        let block = game.restrict(&support);
        assert_eq!(block.strategies(), &[1, 2]);
        assert_eq!(block.payoff(0, 0, &[0, 0]), 4.);
        assert_eq!(block.payoff(0, 0, &[0, 1]), 6.);
        assert_eq!(block.payoff(1, 0, &[0, 0]), 11.);
        assert_eq!(block.payoff(1, 1, &[0, 0]), 31.);
        assert_eq!(game.payoff(0, 0, &[0, 0]), 1.);
    }
}
