use crate::config::{validate_section, EvolutionConfig};
use crate::engines::evaluation::fitness;
use crate::engines::generation::{
    codec::{decode, normalize, random_sequence, NUCLEOTIDES_PER_CHAR},
    genome::{Genome, Nucleotide},
    operators::{best_index, crossover_population, mutate, select_next_generation},
    trace::{snapshot, EvolutionTrace, GenerationSnapshot},
};
use crate::error::{PasswordError, Result};
use log::{debug, info};
use rand::rngs::{OsRng, StdRng};
use rand::Rng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, stagnation: usize);
}

/// Shared flag that stops a run at the next generation boundary
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Best-so-far bookkeeping carried across generations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvolutionState {
    pub best_genome: Genome,
    pub best_fitness: f64,
    pub stagnation_count: usize,
    pub generation: usize,
}

impl EvolutionState {
    /// Record a generation's champion. Returns true when it beat the best so far.
    pub fn observe(&mut self, genome: &[Nucleotide], fitness: f64) -> bool {
        if fitness > self.best_fitness {
            self.best_genome = genome.to_vec();
            self.best_fitness = fitness;
            self.stagnation_count = 0;
            true
        } else {
            self.stagnation_count += 1;
            false
        }
    }
}

#[derive(Debug, Clone)]
pub struct EvolutionOutcome {
    pub password: String,
    pub best_fitness: f64,
    pub generations: usize,
    pub stagnation_count: usize,
    pub trace: Option<EvolutionTrace>,
}

impl EvolutionOutcome {
    /// Rendered trace, empty when tracing was disabled
    pub fn trace_text(&self) -> String {
        self.trace.as_ref().map(ToString::to_string).unwrap_or_default()
    }
}

pub struct EvolutionEngine<R: Rng = StdRng> {
    config: EvolutionConfig,
    rng: R,
    cancel: Option<CancelFlag>,
}

impl EvolutionEngine<StdRng> {
    /// Engine seeded from `config.seed`, or from the OS when no seed is set
    pub fn new(config: EvolutionConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(OsRng)?,
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> EvolutionEngine<R> {
    pub fn with_rng(config: EvolutionConfig, rng: R) -> Result<Self> {
        validate_section(&config)?;
        Ok(Self {
            config,
            rng,
            cancel: None,
        })
    }

    pub fn with_cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Evolve a password of `desired_length` characters
    pub fn run<C: ProgressCallback>(
        &mut self,
        desired_length: usize,
        mut callback: C,
    ) -> Result<EvolutionOutcome> {
        if desired_length == 0 {
            return Err(PasswordError::InvalidArgument(
                "Desired password length must be at least 1".to_string(),
            ));
        }
        let dna_length = desired_length.checked_mul(NUCLEOTIDES_PER_CHAR).ok_or_else(|| {
            PasswordError::InvalidArgument(format!(
                "Desired password length {} is too large",
                desired_length
            ))
        })?;

        let mut population = self.initialize_population(dna_length);
        let mut state = EvolutionState::default();
        let mut trace = self.config.record_trace.then(EvolutionTrace::new);

        while !self.converged(&state) {
            if self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled) {
                info!("Evolution cancelled after {} generations", state.generation);
                return Err(PasswordError::Cancelled {
                    generation: state.generation,
                });
            }

            state.generation += 1;
            callback.on_generation_start(state.generation);

            let before_mutation = trace.as_ref().map(|_| snapshot(&population));

            for genome in population.iter_mut() {
                mutate(genome, self.config.mutations_per_genome, &mut self.rng);
            }
            let after_mutation = trace.as_ref().map(|_| snapshot(&population));

            population = crossover_population(
                population,
                self.config.crossover_rate,
                self.config.swap_probability,
                &mut self.rng,
            );

            let fitnesses: Vec<f64> = population
                .iter()
                .map(|genome| fitness(genome, desired_length))
                .collect();

            let champion = best_index(&fitnesses).ok_or_else(|| {
                PasswordError::InvalidArgument("Population is empty".to_string())
            })?;
            if state.observe(&population[champion], fitnesses[champion]) {
                debug!(
                    "Generation {}: new best fitness {:.4}",
                    state.generation, state.best_fitness
                );
            }

            if let (Some(trace), Some(before_mutation), Some(after_mutation)) =
                (trace.as_mut(), before_mutation, after_mutation)
            {
                trace.record(GenerationSnapshot {
                    generation: state.generation,
                    before_mutation,
                    after_mutation,
                    after_crossover: snapshot(&population),
                    best_fitness: fitnesses[champion],
                });
            }

            callback.on_generation_complete(
                state.generation,
                state.best_fitness,
                state.stagnation_count,
            );

            population = select_next_generation(&population, &fitnesses, &mut self.rng)?;
        }

        info!(
            "Converged after {} generations with best fitness {:.4}",
            state.generation, state.best_fitness
        );

        let normalized = normalize(&state.best_genome, dna_length, &mut self.rng);
        let password = decode(&normalized, desired_length);

        if let Some(trace) = trace.as_mut() {
            trace.finish(&state.best_genome, &normalized, &password);
        }

        Ok(EvolutionOutcome {
            password,
            best_fitness: state.best_fitness,
            generations: state.generation,
            stagnation_count: state.stagnation_count,
            trace,
        })
    }

    fn converged(&self, state: &EvolutionState) -> bool {
        state.stagnation_count >= self.config.stagnation_limit
            || self
                .config
                .max_generations
                .is_some_and(|max| state.generation >= max)
    }

    fn initialize_population(&mut self, dna_length: usize) -> Vec<Genome> {
        (0..self.config.population_size)
            .map(|_| random_sequence(dna_length, &mut self.rng))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::generation::progress::NoopProgressCallback;

    fn seeded(config: EvolutionConfig, seed: u64) -> EvolutionEngine {
        EvolutionEngine::with_rng(config, StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn test_state_tracks_strict_improvement_only() {
        let mut state = EvolutionState::default();
        let genome = vec![Nucleotide::G; 4];

        assert!(state.observe(&genome, 12.0));
        assert!(!state.observe(&[Nucleotide::A], 12.0));
        assert!(!state.observe(&[Nucleotide::A], 3.0));

        assert_eq!(state.best_genome, genome);
        assert_eq!(state.stagnation_count, 2);

        assert!(state.observe(&[Nucleotide::C], 13.0));
        assert_eq!(state.stagnation_count, 0);
    }

    #[test]
    fn test_zero_length_is_rejected() {
        let mut engine = seeded(EvolutionConfig::default(), 1);
        let result = engine.run(0, NoopProgressCallback);
        assert!(matches!(result, Err(PasswordError::InvalidArgument(_))));
    }

    #[test]
    fn test_stops_after_stagnation_limit() {
        let config = EvolutionConfig {
            stagnation_limit: 15,
            ..Default::default()
        };
        let outcome = seeded(config, 2).run(8, NoopProgressCallback).unwrap();

        assert_eq!(outcome.stagnation_count, 15);
        assert!(outcome.generations >= 15);
        assert_eq!(outcome.password.chars().count(), 8);
    }

    #[test]
    fn test_max_generations_caps_run() {
        let config = EvolutionConfig {
            max_generations: Some(3),
            ..Default::default()
        };
        let outcome = seeded(config, 3).run(10, NoopProgressCallback).unwrap();

        assert_eq!(outcome.generations, 3);
        assert_eq!(outcome.trace.map(|t| t.generations.len()), Some(3));
    }

    #[test]
    fn test_cancelled_run_returns_error() {
        let flag = CancelFlag::new();
        flag.cancel();
        let mut engine = seeded(EvolutionConfig::default(), 4).with_cancel_flag(flag);

        let result = engine.run(8, NoopProgressCallback);
        assert!(matches!(result, Err(PasswordError::Cancelled { generation: 0 })));
    }

    #[test]
    fn test_same_seed_same_password() {
        let config = EvolutionConfig {
            stagnation_limit: 30,
            ..Default::default()
        };
        let first = seeded(config.clone(), 99).run(12, NoopProgressCallback).unwrap();
        let second = seeded(config, 99).run(12, NoopProgressCallback).unwrap();

        assert_eq!(first.password, second.password);
        assert_eq!(first.generations, second.generations);
    }

    #[test]
    fn test_trace_disabled_gives_empty_text() {
        let config = EvolutionConfig {
            record_trace: false,
            stagnation_limit: 5,
            ..Default::default()
        };
        let outcome = seeded(config, 5).run(8, NoopProgressCallback).unwrap();

        assert!(outcome.trace.is_none());
        assert!(outcome.trace_text().is_empty());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = EvolutionConfig {
            population_size: 1,
            ..Default::default()
        };
        assert!(EvolutionEngine::with_rng(config, StdRng::seed_from_u64(0)).is_err());
    }
}
