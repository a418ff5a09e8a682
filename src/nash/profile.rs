use crate::Probability;
use crate::game::game::Game;
use crate::game::support::SupportProfile;
use std::fmt;

/// A mixed-strategy profile over the full game, one probability vector per
/// player in player order. Flattening follows the player-major decision
/// variable numbering, so these vectors substitute directly into the
/// symbolic systems.
#[derive(Clone, Debug, PartialEq)]
pub struct MixedProfile(Vec<Vec<Probability>>);

impl MixedProfile {
    /// lift block weights to the full strategy space: block probabilities
    /// land at their original indices, everything outside the support is
    /// zero.
    pub fn project(
        weights: &[Vec<Probability>],
        support: &SupportProfile,
        strategies: &[usize],
    ) -> Self {
        Self(
            strategies
                .iter()
                .enumerate()
                .map(|(player, &n)| {
                    (0..n)
                        .map(|s| match support.support(player).position(s) {
                            Some(inside) => weights[player][inside],
                            None => 0.,
                        })
                        .collect()
                })
                .collect(),
        )
    }

    /// drop back to block coordinates; inverts `project` on the support.
    pub fn restrict(&self, support: &SupportProfile) -> Vec<Vec<Probability>> {
        support
            .supports()
            .iter()
            .enumerate()
            .map(|(player, kept)| kept.indices().iter().map(|&s| self.0[player][s]).collect())
            .collect()
    }

    pub fn weights(&self) -> &[Vec<Probability>] {
        &self.0
    }
    pub fn weight(&self, player: usize, strategy: usize) -> Probability {
        self.0[player][strategy]
    }
    /// player-major concatenation, aligned with `Game::variable`.
    pub fn flatten(&self) -> Vec<Probability> {
        self.0.iter().flatten().copied().collect()
    }

    /// would `player` strictly gain by deviating to pure `strategy`? the
    /// numeric probabilities substitute into the symbolic expected-payoff
    /// polynomials of the full game.
    pub fn improves(&self, game: &Game, player: usize, strategy: usize) -> bool {
        let ref at = self.flatten();
        game.pure_payoff(player, strategy).eval_real(at)
            > game.mixed_payoff(player).eval_real(at)
    }
}

impl From<Vec<Vec<Probability>>> for MixedProfile {
    fn from(weights: Vec<Vec<Probability>>) -> Self {
        Self(weights)
    }
}

impl fmt::Display for MixedProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(|row| {
                    format!(
                        "({})",
                        row.iter()
                            .map(|p| format!("{:.3}", p))
                            .collect::<Vec<_>>()
                            .join(" ")
                    )
                })
                .collect::<Vec<_>>()
                .join(" × ")
        )
    }
}
