use crate::engines::generation::genome::{Genome, Nucleotide};
use crate::error::{PasswordError, Result};
use log::warn;
use rand::Rng;

/// Longest span duplication and translocation will move
pub const MAX_SPAN: usize = 4;

/// The five structural edits a genome can undergo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOperator {
    Insertion,
    Deletion,
    Substitution,
    Duplication,
    Translocation,
}

impl MutationOperator {
    pub const ALL: [MutationOperator; 5] = [
        MutationOperator::Insertion,
        MutationOperator::Deletion,
        MutationOperator::Substitution,
        MutationOperator::Duplication,
        MutationOperator::Translocation,
    ];

    pub fn apply<R: Rng + ?Sized>(self, genome: &mut Genome, rng: &mut R) {
        match self {
            MutationOperator::Insertion => insertion(genome, rng),
            MutationOperator::Deletion => deletion(genome, rng),
            MutationOperator::Substitution => substitution(genome, rng),
            MutationOperator::Duplication => duplication(genome, rng),
            MutationOperator::Translocation => translocation(genome, rng),
        }
    }
}

/// Insert one random nucleotide anywhere in [0, len]
pub fn insertion<R: Rng + ?Sized>(genome: &mut Genome, rng: &mut R) {
    let at = rng.gen_range(0..=genome.len());
    genome.insert(at, rng.gen());
}

/// Remove one nucleotide; genomes of length 0 or 1 are left alone
pub fn deletion<R: Rng + ?Sized>(genome: &mut Genome, rng: &mut R) {
    if genome.len() <= 1 {
        return;
    }
    let at = rng.gen_range(0..genome.len());
    genome.remove(at);
}

/// Overwrite one nucleotide with a random one
pub fn substitution<R: Rng + ?Sized>(genome: &mut Genome, rng: &mut R) {
    if genome.is_empty() {
        return;
    }
    let at = rng.gen_range(0..genome.len());
    genome[at] = rng.gen();
}

/// Copy a span of 1..=4 nucleotides and insert the copy somewhere in [0, len]
pub fn duplication<R: Rng + ?Sized>(genome: &mut Genome, rng: &mut R) {
    if genome.len() < 2 {
        return;
    }
    let (start, end) = random_span(genome.len(), rng);
    let copy: Vec<Nucleotide> = genome[start..end].to_vec();
    let at = rng.gen_range(0..=genome.len());
    genome.splice(at..at, copy);
}

/// Cut a span of 1..=4 nucleotides and reinsert it somewhere in the remainder
pub fn translocation<R: Rng + ?Sized>(genome: &mut Genome, rng: &mut R) {
    if genome.len() < 2 {
        return;
    }
    let (start, end) = random_span(genome.len(), rng);
    let cut: Vec<Nucleotide> = genome.drain(start..end).collect();
    let at = rng.gen_range(0..=genome.len());
    genome.splice(at..at, cut);
}

/// `start` in [0, len - 2], `end` in [start + 1, min(len, start + 4)]
fn random_span<R: Rng + ?Sized>(len: usize, rng: &mut R) -> (usize, usize) {
    let start = rng.gen_range(0..=len - 2);
    let end = rng.gen_range(start + 1..=len.min(start + MAX_SPAN));
    (start, end)
}

/// Mutation: apply `count` operators drawn uniformly with replacement
pub fn mutate<R: Rng + ?Sized>(genome: &mut Genome, count: usize, rng: &mut R) {
    for _ in 0..count {
        let operator = MutationOperator::ALL[rng.gen_range(0..MutationOperator::ALL.len())];
        operator.apply(genome, rng);
    }
}

/// Uniform crossover over the shared prefix of two parents.
///
/// Positions past the shorter parent are dropped, so both children have
/// length `min(len(a), len(b))`.
pub fn uniform_crossover<R: Rng + ?Sized>(
    parent1: &[Nucleotide],
    parent2: &[Nucleotide],
    swap_probability: f64,
    rng: &mut R,
) -> (Genome, Genome) {
    let len = parent1.len().min(parent2.len());
    let mut child1 = Vec::with_capacity(len);
    let mut child2 = Vec::with_capacity(len);

    for (&a, &b) in parent1.iter().zip(parent2) {
        if rng.gen::<f64>() < swap_probability {
            child1.push(a);
            child2.push(b);
        } else {
            child1.push(b);
            child2.push(a);
        }
    }

    (child1, child2)
}

/// Recombine consecutive pairs (0&1, 2&3, ...). An odd trailing genome passes through.
pub fn crossover_population<R: Rng + ?Sized>(
    population: Vec<Genome>,
    crossover_rate: f64,
    swap_probability: f64,
    rng: &mut R,
) -> Vec<Genome> {
    let mut next = Vec::with_capacity(population.len());
    let mut slots = population.into_iter();

    while let Some(parent1) = slots.next() {
        match slots.next() {
            Some(parent2) => {
                if rng.gen::<f64>() < crossover_rate {
                    let (child1, child2) =
                        uniform_crossover(&parent1, &parent2, swap_probability, rng);
                    next.push(child1);
                    next.push(child2);
                } else {
                    next.push(parent1);
                    next.push(parent2);
                }
            }
            None => next.push(parent1),
        }
    }

    next
}

/// Index of the highest fitness, first occurrence on ties
pub fn best_index(fitnesses: &[f64]) -> Option<usize> {
    fitnesses
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (idx, &fitness)| match best {
            Some((_, best_fitness)) if fitness <= best_fitness => best,
            _ => Some((idx, fitness)),
        })
        .map(|(idx, _)| idx)
}

/// Roulette wheel selection: probability proportional to fitness.
///
/// Falls back to a uniform pick when the total fitness is zero.
pub fn roulette_selection<R: Rng + ?Sized>(
    fitnesses: &[f64],
    total_fitness: f64,
    rng: &mut R,
) -> usize {
    if !(total_fitness > 0.0 && total_fitness.is_finite()) {
        return rng.gen_range(0..fitnesses.len());
    }

    let pick = rng.gen::<f64>();
    let mut cumulative = 0.0;

    for (idx, fitness) in fitnesses.iter().enumerate() {
        cumulative += fitness / total_fitness;
        if cumulative > pick {
            return idx;
        }
    }

    // Rounding left the cumulative sum just under `pick`
    fitnesses
        .iter()
        .rposition(|&fitness| fitness > 0.0)
        .unwrap_or(fitnesses.len() - 1)
}

/// Build the next generation: the best genome in slot 0, the rest by roulette.
pub fn select_next_generation<R: Rng + ?Sized>(
    population: &[Genome],
    fitnesses: &[f64],
    rng: &mut R,
) -> Result<Vec<Genome>> {
    if population.len() != fitnesses.len() {
        return Err(PasswordError::InvalidArgument(format!(
            "Population has {} genomes but {} fitness scores",
            population.len(),
            fitnesses.len()
        )));
    }

    let elite = best_index(fitnesses).ok_or_else(|| {
        PasswordError::InvalidArgument("Cannot select from an empty population".to_string())
    })?;

    let total_fitness: f64 = fitnesses.iter().sum();
    if total_fitness == 0.0 {
        warn!("All genomes scored zero fitness, selecting uniformly at random");
    }

    let mut next = Vec::with_capacity(population.len());
    next.push(population[elite].clone());

    for _ in 1..population.len() {
        let idx = roulette_selection(fitnesses, total_fitness, rng);
        next.push(population[idx].clone());
    }

    Ok(next)
}
