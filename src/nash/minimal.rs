use super::profile::MixedProfile;
use crate::Index;
use crate::ROOT_TOLERANCE;
use crate::game::game::Game;
use crate::game::support::SupportProfile;
use crate::solver::solver::Solver;
use anyhow::Result;
use std::fmt;

/// An equilibrium of the full game together with its topological index.
#[derive(Clone, Debug, PartialEq)]
pub struct Certified {
    pub equilibrium: MixedProfile,
    pub index: Index,
}

/// A support profile whose nested certified equilibria carry index mass
/// exactly 1, together with everything found inside it. Once yielded it is
/// final: later blocks may be pruned because of it, but it is never revisited.
#[derive(Clone, Debug)]
pub struct MinimalBlock {
    pub support: SupportProfile,
    pub nested: Vec<(SupportProfile, Vec<Certified>)>,
}

impl MinimalBlock {
    /// summed index over every nested equilibrium; 1 by construction.
    pub fn mass(&self) -> Index {
        self.nested
            .iter()
            .flat_map(|(_, certified)| certified.iter())
            .map(|c| c.index)
            .sum()
    }
    /// number of nested equilibria.
    pub fn count(&self) -> usize {
        self.nested.iter().map(|(_, certified)| certified.len()).sum()
    }
}

#[rustfmt::skip]
impl fmt::Display for MinimalBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "minimal block {}", self.support)?;
        writeln!(f, "┌──────────────────────┬──────────────────────────────────┬───────┐")?;
        writeln!(f, "│ Support              │ Equilibrium                      │ Index │")?;
        writeln!(f, "├──────────────────────┼──────────────────────────────────┼───────┤")?;
        for (support, certified) in self.nested.iter() {
            for c in certified.iter() {
                writeln!(
                    f,
                    "│ {:<20} │ {:<32} │ {:>+5} │",
                    support.to_string(),
                    c.equilibrium.to_string(),
                    c.index,
                )?;
            }
        }
        write!(f, "└──────────────────────┴──────────────────────────────────┴───────┘")
    }
}

/// Sequential enumeration of minimal blocks.
///
/// Supports arrive smallest and most balanced first, and the two prunes feed
/// on the state built so far: a support nesting an already-confirmed minimal
/// block is skipped outright, and equilibria found in earlier supports count
/// toward the index mass of every later support that nests them. Order is
/// load-bearing; this iterator is not reorderable.
pub struct MinimalBlocks<'a, S: Solver> {
    game: &'a Game,
    solver: &'a S,
    queue: std::vec::IntoIter<SupportProfile>,
    minimal: Vec<SupportProfile>,
    visited: Vec<(SupportProfile, Vec<Certified>)>,
}

impl Game {
    /// enumerate minimal blocks, smallest supports first. solver failures
    /// and degenerate candidates surface as `Err` items; the enumeration
    /// resumes at the next support afterwards.
    pub fn minimal_blocks<'a, S: Solver>(&'a self, solver: &'a S) -> MinimalBlocks<'a, S> {
        MinimalBlocks {
            game: self,
            solver,
            queue: SupportProfile::exhaust(self.strategies()).into_iter(),
            minimal: Vec::new(),
            visited: Vec::new(),
        }
    }

    /// every Nash equilibrium reachable through some admissible support,
    /// without pruning or index accounting.
    pub fn equilibria<S: Solver>(&self, solver: &S) -> Result<Vec<MixedProfile>> {
        let mut found = Vec::new();
        for support in SupportProfile::exhaust(self.strategies()) {
            let block = self.restrict(&support);
            if !block.admissible() {
                continue;
            }
            found.extend(
                self.candidates(&block, &support, solver)?
                    .into_iter()
                    .filter(|candidate| self.retained(candidate, &support)),
            );
        }
        Ok(found)
    }

    /// solve a block and lift its surviving real-positive roots to the full
    /// strategy space.
    fn candidates<S: Solver>(
        &self,
        block: &Game,
        support: &SupportProfile,
        solver: &S,
    ) -> Result<Vec<MixedProfile>> {
        let roots = solver.solve(&block.indifference(), ROOT_TOLERANCE)?;
        Ok(roots
            .candidates(ROOT_TOLERANCE, block.strategies())
            .into_iter()
            .map(|weights| MixedProfile::project(&weights, support, self.strategies()))
            .collect())
    }

    /// a candidate survives iff no player strictly gains from any pure
    /// strategy outside that player's support.
    fn retained(&self, candidate: &MixedProfile, support: &SupportProfile) -> bool {
        (0..self.players()).all(|player| {
            self.indices(player)
                .into_iter()
                .filter(|&s| !support.support(player).contains(s))
                .all(|s| !candidate.improves(self, player, s))
        })
    }
}

impl<'a, S: Solver> Iterator for MinimalBlocks<'a, S> {
    type Item = Result<MinimalBlock>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let support = self.queue.next()?;
            if self.minimal.iter().any(|minimal| support.contains(minimal)) {
                continue;
            }
            let block = self.game.restrict(&support);
            if !block.admissible() {
                continue;
            }
            let candidates = match self.game.candidates(&block, &support, self.solver) {
                Ok(candidates) => candidates,
                Err(failure) => return Some(Err(failure)),
            };
            let mut certified = Vec::new();
            for candidate in candidates
                .into_iter()
                .filter(|candidate| self.game.retained(candidate, &support))
            {
                match self.game.index(&candidate) {
                    Ok(index) => certified.push(Certified {
                        equilibrium: candidate,
                        index,
                    }),
                    Err(degeneracy) => return Some(Err(degeneracy)),
                }
            }
            if !certified.is_empty() {
                self.visited.push((support.clone(), certified));
            }
            let nested = self
                .visited
                .iter()
                .filter(|(inner, _)| support.contains(inner))
                .cloned()
                .collect::<Vec<_>>();
            let mass = nested
                .iter()
                .flat_map(|(_, certified)| certified.iter())
                .map(|c| c.index)
                .sum::<Index>();
            if mass == 1 {
                log::debug!("minimal block {} closes at mass 1", support);
                self.minimal.push(support.clone());
                return Some(Ok(MinimalBlock { support, nested }));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::system::System;
    use crate::game::tensor::Tensor;
    use crate::solver::newton::Newton;
    use crate::solver::roots::Roots;
    use std::cell::RefCell;

    /// counts how many systems reach the backend.
    struct Metered {
        inner: Newton,
        solves: RefCell<usize>,
    }
    impl Metered {
        fn new() -> Self {
            Self {
                inner: Newton::default(),
                solves: RefCell::new(0),
            }
        }
    }
    impl Solver for Metered {
        fn solve(&self, system: &System, tolerance: f64) -> Result<Roots> {
            *self.solves.borrow_mut() += 1;
            self.inner.solve(system, tolerance)
        }
    }

    fn matching_bonus() -> Game {
        Game::new(vec![
            Tensor::from(vec![vec![2., 0.], vec![0., 1.]]),
            Tensor::from(vec![vec![2., 0.], vec![0., 1.]]),
        ])
        .unwrap()
    }

    fn mismatched_interests() -> Game {
        // row wants to match, column wants to mismatch; unique interior
        // equilibrium at uniform mixing
        Game::new(vec![
            Tensor::from(vec![vec![2., 0.], vec![0., 2.]]),
            Tensor::from(vec![vec![0., 2.], vec![2., 0.]]),
        ])
        .unwrap()
    }

    #[test]
    fn interior_equilibrium_closes_the_full_support() {
        let game = mismatched_interests();
        let ref solver = Newton::default();
        let blocks = game
            .minimal_blocks(solver)
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(blocks.len(), 1);
        let block = &blocks[0];
        assert_eq!(block.support, SupportProfile::full(&[2, 2]));
        assert_eq!(block.count(), 1);
        assert_eq!(block.mass(), 1);
        let certified = &block.nested[0].1[0];
        assert_eq!(certified.index, 1);
        for weight in certified.equilibrium.flatten() {
            assert!((weight - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn pure_coordination_yields_two_pure_blocks() {
        let game = matching_bonus();
        let ref solver = Metered::new();
        let blocks = game
            .minimal_blocks(solver)
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[0].support,
            SupportProfile::from(vec![vec![0], vec![0]])
        );
        assert_eq!(
            blocks[1].support,
            SupportProfile::from(vec![vec![1], vec![1]])
        );
        for block in blocks.iter() {
            assert_eq!(block.mass(), 1);
            assert_eq!(block.count(), 1);
            assert_eq!(block.nested[0].1[0].index, 1);
        }
        // the four singleton supports are solved; every larger support is
        // either inadmissible or nests a confirmed minimal block
        assert_eq!(*solver.solves.borrow(), 4);
    }

    #[test]
    fn unpruned_enumeration_still_sees_the_mixed_companion() {
        let game = matching_bonus();
        let ref solver = Newton::default();
        let equilibria = game.equilibria(solver).unwrap();
        assert_eq!(equilibria.len(), 3);
        let third = 1. / 3.;
        let mixed = equilibria
            .iter()
            .find(|eq| (eq.weight(0, 0) - third).abs() < 1e-6)
            .unwrap();
        assert!((mixed.weight(1, 1) - 2. * third).abs() < 1e-6);
        assert_eq!(game.index(mixed).unwrap(), -1);
    }

    #[test]
    fn dominated_strategies_never_weigh_in() {
        // row strategy 1 is strictly dominated
        let game = Game::new(vec![
            Tensor::from(vec![vec![3., 3.], vec![1., 1.]]),
            Tensor::from(vec![vec![2., 1.], vec![1., 2.]]),
        ])
        .unwrap();
        let ref solver = Newton::default();
        let blocks = game
            .minimal_blocks(solver)
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert!(!blocks.is_empty());
        for block in blocks.iter() {
            for (_, certified) in block.nested.iter() {
                for c in certified.iter() {
                    assert_eq!(c.equilibrium.weight(0, 1), 0.);
                }
            }
        }
    }

    #[test]
    fn dominant_strategies_close_in_three_players() {
        // strategy 0 pays 2 and strategy 1 pays 1, whatever the others do
        let slab = |hi: f64, lo: f64| {
            Tensor::from(vec![vec![vec![hi; 2]; 2], vec![vec![lo; 2]; 2]])
        };
        let game = Game::new(vec![slab(2., 1.), slab(2., 1.), slab(2., 1.)]).unwrap();
        let ref solver = Newton::default();
        let blocks = game
            .minimal_blocks(solver)
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].support,
            SupportProfile::from(vec![vec![0], vec![0], vec![0]])
        );
        assert_eq!(blocks[0].mass(), 1);
        for player in 0..3 {
            assert_eq!(blocks[0].nested[0].1[0].equilibrium.weight(player, 1), 0.);
        }
    }
}
