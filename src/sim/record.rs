use anyhow::Context;
use anyhow::Result;
use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

/// Per-shape simulation outcomes: for each (strategy shape, simulation
/// count) key, one certified-equilibrium count per run.
#[derive(Default, Clone, Debug)]
pub struct Report {
    runs: BTreeMap<(Vec<usize>, usize), Vec<usize>>,
}

impl Report {
    pub fn insert(&mut self, shape: Vec<usize>, simulations: usize, counts: Vec<usize>) {
        self.runs.insert((shape, simulations), counts);
    }
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// csv persistence: one header row per key, then one row per simulation
    /// holding that run's total equilibrium count.
    pub fn save(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("create results file {}", path))?;
        let ref mut writer = std::io::BufWriter::new(file);
        for ((shape, simulations), counts) in self.runs.iter() {
            writeln!(writer, "game,{},simulations,{}", Self::label(shape), simulations)?;
            for count in counts.iter() {
                writeln!(writer, "{}", count)?;
            }
        }
        writer.flush()?;
        Ok(())
    }

    fn label(shape: &[usize]) -> String {
        shape
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join("x")
    }

    fn mean(counts: &[usize]) -> f64 {
        match counts.is_empty() {
            true => 0.,
            false => counts.iter().sum::<usize>() as f64 / counts.len() as f64,
        }
    }
}

#[rustfmt::skip]
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "┌────────────┬────────────┬────────────┐")?;
        writeln!(f, "│ Game       │ Runs       │ Mean NE    │")?;
        writeln!(f, "├────────────┼────────────┼────────────┤")?;
        for ((shape, simulations), counts) in self.runs.iter() {
            writeln!(
                f,
                "│ {:>10} │ {:>10} │ {:>10.3} │",
                Self::label(shape),
                simulations,
                Self::mean(counts),
            )?;
        }
        write!(f, "└────────────┴────────────┴────────────┘")
    }
}
