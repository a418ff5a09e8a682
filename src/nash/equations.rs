use crate::algebra::polynomial::Polynomial;
use crate::algebra::system::System;
use crate::game::game::Game;

impl Game {
    /// symbolic payoff to `player` from pure `strategy` while every rival
    /// mixes: a sum over rival pure combinations of payoff times the product
    /// of the rivals' decision variables.
    pub fn pure_payoff(&self, player: usize, strategy: usize) -> Polynomial {
        let arity = self.unknowns();
        let mut payoff = Polynomial::zero(arity);
        for combo in self.opponent_profiles(player) {
            let mut exponents = vec![0; arity];
            for q in (0..self.players()).filter(|&q| q != player) {
                exponents[self.variable(q, combo[q])] += 1;
            }
            payoff.accumulate(exponents, self.payoff(player, strategy, &combo));
        }
        payoff
    }

    /// probability-weighted payoff from the player's own mixed strategy.
    pub fn mixed_payoff(&self, player: usize) -> Polynomial {
        (0..self.strategies()[player])
            .map(|s| {
                Polynomial::variable(self.unknowns(), self.variable(player, s))
                    * self.pure_payoff(player, s)
            })
            .fold(Polynomial::zero(self.unknowns()), |acc, term| acc + term)
    }

    /// the player's decision variables must sum to one.
    pub fn normalization(&self, player: usize) -> Polynomial {
        (0..self.strategies()[player])
            .map(|s| Polynomial::variable(self.unknowns(), self.variable(player, s)))
            .fold(Polynomial::constant(self.unknowns(), -1.), |acc, var| {
                acc + var
            })
    }

    /// the square system whose real-positive zeros are this game's
    /// equilibrium candidates: per player, each strategy's expected payoff
    /// measured against the player's last strategy, then one normalization
    /// per player.
    pub fn indifference(&self) -> System {
        let mut equations = Vec::new();
        for player in 0..self.players() {
            let last = self.strategies()[player] - 1;
            for strategy in 0..last {
                equations
                    .push(self.pure_payoff(player, strategy) - self.pure_payoff(player, last));
            }
        }
        for player in 0..self.players() {
            equations.push(self.normalization(player));
        }
        System::new(equations)
    }

    /// the replicator field p·(E(s) − Ē), one equation per decision
    /// variable; its jacobian at an equilibrium carries the topological
    /// index.
    pub fn field(&self) -> System {
        let equations = (0..self.players())
            .flat_map(|player| {
                (0..self.strategies()[player]).map(move |strategy| {
                    Polynomial::variable(self.unknowns(), self.variable(player, strategy))
                        * (self.pure_payoff(player, strategy) - self.mixed_payoff(player))
                })
            })
            .collect();
        System::new(equations)
    }
}
