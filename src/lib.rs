//! Enumeration of minimal game blocks in finite strategic-form games.
//!
//! A block is the sub-game induced by restricting every player to a subset of
//! strategies. Blocks are visited smallest-first, solved for their completely
//! mixed equilibria, and certified against the full game; a block whose nested
//! equilibria carry total topological index 1 is minimal, and no smaller
//! support can still hide an equilibrium from us.

pub mod algebra;
pub mod game;
pub mod nash;
pub mod sim;
pub mod solver;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Payoff entries and every quantity derived from them.
pub type Payoff = f64;
/// Mixed-strategy weights.
pub type Probability = f64;
/// Topological degree of an equilibrium, ±1 at non-degenerate solutions.
pub type Index = i32;

// ============================================================================
// NUMERIC PARAMETERS
// ============================================================================
/// Roots with any coordinate below this real part, or above it in imaginary
/// magnitude, are rejected as not real-positive enough.
pub const ROOT_TOLERANCE: f64 = 1e-6;
/// Residual norm at which a Newton iterate counts as a root.
pub const NEWTON_RESIDUAL: f64 = 1e-12;
/// Newton steps per start before giving up on it.
pub const NEWTON_ITERATIONS: usize = 64;
/// Random starts per solve, on top of the structured ones.
pub const NEWTON_STARTS: usize = 192;
/// Iterate norm beyond which a Newton path is declared divergent.
pub const NEWTON_DIVERGENCE: f64 = 1e8;
/// Two roots closer than this are the same root.
pub const NEWTON_DISTINCT: f64 = 1e-8;
/// Determinants below this magnitude are treated as singular.
pub const SINGULAR_DETERMINANT: f64 = 1e-12;

/// Interval between progress log messages during simulation sweeps.
pub const SWEEP_LOG_INTERVAL: std::time::Duration = std::time::Duration::from_secs(10);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
