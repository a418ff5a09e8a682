use super::game::Game;

impl Game {
    /// is `strategy` strictly dominated by some rival pure strategy?
    ///
    /// a rival dominates when it is never worse at any opponent combination;
    /// all-tie comparisons count toward domination. a dominated strategy can
    /// never carry positive weight in a completely mixed equilibrium.
    pub fn dominated(&self, player: usize, strategy: usize) -> bool {
        let ref combos = self.opponent_profiles(player);
        (0..self.strategies()[player])
            .filter(|&rival| rival != strategy)
            .any(|rival| {
                combos.iter().all(|combo| {
                    self.payoff(player, strategy, combo) <= self.payoff(player, rival, combo)
                })
            })
    }

    /// a block is admissible iff no player keeps a strictly dominated pure
    /// strategy inside it.
    pub fn admissible(&self) -> bool {
        (0..self.players())
            .all(|p| (0..self.strategies()[p]).all(|s| !self.dominated(p, s)))
    }
}
