//! Inspect a single random game: its minimal blocks with certified
//! equilibria and indices, then the unpruned equilibrium list for contrast.

use anyhow::Context;
use clap::Parser;
use minblocks::sim::generate::random_game;
use minblocks::solver::newton::Newton;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser)]
#[command(about = "enumerate the minimal blocks of one random game")]
struct Args {
    /// strategy counts per player, e.g. 2x3 or 2x2x2
    #[arg(long, default_value = "2x2")]
    shape: String,
    /// generator seed
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    minblocks::log();
    let args = Args::parse();
    let shape = args
        .shape
        .split('x')
        .map(|n| n.parse::<usize>().context("strategy counts look like 2x3"))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let ref mut rng = SmallRng::seed_from_u64(args.seed);
    let game = random_game(&shape, rng);
    let ref solver = Newton::default();
    for block in game.minimal_blocks(solver) {
        match block {
            Ok(block) => println!("{}", block),
            Err(failure) => log::warn!("{}", failure),
        }
    }
    for equilibrium in game.equilibria(solver)? {
        log::info!("equilibrium {}", equilibrium);
    }
    Ok(())
}
