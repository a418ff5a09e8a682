//! Monte-Carlo driver: how many equilibria live inside minimal blocks of
//! random games, swept over two-player strategy shapes and persisted as CSV.

use clap::Parser;
use minblocks::sim::runner::Sweep;

#[derive(Parser)]
#[command(about = "sweep random games for minimal-block equilibrium counts")]
struct Args {
    /// independent random games per strategy shape
    #[arg(long, default_value_t = 100)]
    simulations: usize,
    /// largest strategy count for the row player
    #[arg(long, default_value_t = 2)]
    rows: usize,
    /// largest strategy count for the column player
    #[arg(long, default_value_t = 3)]
    cols: usize,
    /// base seed for the per-run generators
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// csv output path
    #[arg(long, default_value = "results.csv")]
    output: String,
}

fn main() -> anyhow::Result<()> {
    minblocks::log();
    let args = Args::parse();
    let sweep = Sweep {
        simulations: args.simulations,
        strategies: (args.rows, args.cols),
        seed: args.seed,
    };
    let report = sweep.run();
    report.save(&args.output)?;
    log::info!("results saved to {}", args.output);
    println!("{}", report);
    Ok(())
}
