use super::generate::random_game;
use super::record::Report;
use crate::SWEEP_LOG_INTERVAL;
use crate::solver::newton::Newton;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Instant;

/// Monte-Carlo sweep over two-player strategy shapes.
///
/// For every shape (rows, cols) with `rows` from 2 up to the first bound and
/// `cols` from `rows` up to the second, enumerate the minimal blocks of
/// `simulations` independent random games and record how many certified
/// equilibria each game carried. Runs are embarrassingly parallel: each task
/// owns its generator, game and enumeration state, and nothing is shared but
/// the progress counter.
pub struct Sweep {
    pub simulations: usize,
    pub strategies: (usize, usize),
    pub seed: u64,
}

impl Sweep {
    pub fn run(&self) -> Report {
        let mut report = Report::default();
        for rows in 2..=self.strategies.0 {
            for cols in rows..=self.strategies.1 {
                let shape = vec![rows, cols];
                let counts = self.survey(&shape);
                report.insert(shape, self.simulations, counts);
            }
        }
        report
    }

    fn survey(&self, shape: &[usize]) -> Vec<usize> {
        let started = Instant::now();
        let done = AtomicUsize::new(0);
        let checked = Mutex::new(Instant::now());
        let counts = (0..self.simulations)
            .into_par_iter()
            .map(|run| Self::trial(shape, self.seed, run as u64))
            .inspect(|_| {
                let done = done.fetch_add(1, Ordering::Relaxed) + 1;
                let mut last = checked.lock().expect("progress clock");
                if last.elapsed() >= SWEEP_LOG_INTERVAL {
                    *last = Instant::now();
                    log::info!(
                        "{:<16}{:>8} / {:<8}{:>8.1}s",
                        format!("{:?} games", shape),
                        done,
                        self.simulations,
                        started.elapsed().as_secs_f32(),
                    );
                }
            })
            .collect::<Vec<_>>();
        log::info!(
            "{:<16}{:>8} runs {:>8.1}s mean {:.3}",
            format!("{:?} games", shape),
            self.simulations,
            started.elapsed().as_secs_f32(),
            counts.iter().sum::<usize>() as f64 / counts.len().max(1) as f64,
        );
        counts
    }

    /// one independent game: generate, enumerate, count certified
    /// equilibria across all yielded minimal blocks.
    fn trial(shape: &[usize], seed: u64, run: u64) -> usize {
        let ref mut rng =
            SmallRng::seed_from_u64(seed ^ run.wrapping_mul(0x9E3779B97F4A7C15));
        let game = random_game(shape, rng);
        let ref solver = Newton::default();
        game.minimal_blocks(solver)
            .filter_map(|block| match block {
                Ok(block) => Some(block.count()),
                Err(failure) => {
                    log::warn!("dropping block of a random game: {}", failure);
                    None
                }
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiny_sweep_completes() {
        let sweep = Sweep {
            simulations: 3,
            strategies: (2, 2),
            seed: 11,
        };
        let report = sweep.run();
        assert!(!report.is_empty());
    }

    #[test]
    fn trials_are_reproducible() {
        assert_eq!(
            Sweep::trial(&[2, 2], 5, 1),
            Sweep::trial(&[2, 2], 5, 1),
        );
    }
}
