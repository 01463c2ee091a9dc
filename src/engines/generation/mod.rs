pub mod genome;
pub mod codec;
pub mod operators;
pub mod trace;
pub mod evolution_engine;
pub mod progress;

pub use genome::{Genome, Nucleotide};
pub use codec::{decode, encode, normalize, random_sequence};
pub use operators::{crossover_population, mutate, select_next_generation, MutationOperator};
pub use trace::{EvolutionTrace, GenerationSnapshot};
pub use evolution_engine::{
    CancelFlag, EvolutionEngine, EvolutionOutcome, EvolutionState, ProgressCallback,
};
pub use progress::{ConsoleProgressCallback, NoopProgressCallback};
