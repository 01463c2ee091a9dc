use crate::engines::generation::genome::{genome_to_string, Genome, Nucleotide};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Population states observed during one generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSnapshot {
    pub generation: usize,
    pub before_mutation: Vec<String>,
    pub after_mutation: Vec<String>,
    pub after_crossover: Vec<String>,
    pub best_fitness: f64,
}

/// Generation-by-generation record of one run.
///
/// Owned by the run that produced it; rendering with `to_string()` gives the
/// newline-delimited text handed to callers of `generate_password`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvolutionTrace {
    pub generations: Vec<GenerationSnapshot>,
    pub best_raw: String,
    pub best_normalized: String,
    pub password: String,
}

impl EvolutionTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, snapshot: GenerationSnapshot) {
        self.generations.push(snapshot);
    }

    pub fn finish(
        &mut self,
        best_raw: &[Nucleotide],
        best_normalized: &[Nucleotide],
        password: &str,
    ) {
        self.best_raw = genome_to_string(best_raw);
        self.best_normalized = genome_to_string(best_normalized);
        self.password = password.to_string();
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn snapshot(population: &[Genome]) -> Vec<String> {
    population.iter().map(|g| genome_to_string(g)).collect()
}

fn write_population(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    population: &[String],
) -> fmt::Result {
    writeln!(f, "  {}:", label)?;
    for (slot, genome) in population.iter().enumerate() {
        writeln!(f, "    [{}] {}", slot, genome)?;
    }
    Ok(())
}

impl fmt::Display for EvolutionTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for snapshot in &self.generations {
            writeln!(f, "Generation {}", snapshot.generation)?;
            write_population(f, "Before mutation", &snapshot.before_mutation)?;
            write_population(f, "After mutation", &snapshot.after_mutation)?;
            write_population(f, "After crossover", &snapshot.after_crossover)?;
            writeln!(f, "  Best fitness: {:.2}", snapshot.best_fitness)?;
        }
        writeln!(f, "Best genome (raw): {}", self.best_raw)?;
        writeln!(f, "Best genome (normalized): {}", self.best_normalized)?;
        write!(f, "Password: {}", self.password)
    }
}
