use crate::config::{BenchmarkConfig, EvolutionConfig};
use crate::engines::evaluation::fitness::{
    class_diversity_score, score_password, series_score, unique_chars_score,
};
use crate::engines::generation::codec::{MIN_PRINTABLE, PRINTABLE_SPAN};
use crate::engines::generation::evolution_engine::EvolutionEngine;
use crate::engines::generation::progress::NoopProgressCallback;
use crate::error::Result;
use log::info;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Letters, digits and punctuation: the same 94 characters the codec can emit
pub const BASELINE_CHARSET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Generator {
    /// Passwords evolved by the GA
    Genetic,
    /// Uniform draws from `BASELINE_CHARSET` with a seedable PRNG
    UniformRandom,
    /// Uniform draws from the operating system's random source
    OsRandom,
}

impl Generator {
    pub const ALL: [Generator; 3] = [
        Generator::Genetic,
        Generator::UniformRandom,
        Generator::OsRandom,
    ];
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Generator::Genetic => "GA",
            Generator::UniformRandom => "random",
            Generator::OsRandom => "os-random",
        };
        write!(f, "{}", name)
    }
}

pub fn uniform_random_password<R: Rng + ?Sized>(length: usize, rng: &mut R) -> String {
    let charset = BASELINE_CHARSET.as_bytes();
    (0..length)
        .map(|_| char::from(charset[rng.gen_range(0..charset.len())]))
        .collect()
}

/// Draw from the OS random source. Failures of the source are returned, not retried.
pub fn os_random_password(length: usize) -> Result<String> {
    // Rejection sampling over whole multiples of the span keeps the draw uniform
    let limit = u8::MAX - (u8::MAX % PRINTABLE_SPAN);
    let mut password = String::with_capacity(length);
    let mut buffer = [0u8; 64];

    while password.len() < length {
        OsRng.try_fill_bytes(&mut buffer)?;
        for &byte in buffer.iter().filter(|&&b| b < limit) {
            if password.len() == length {
                break;
            }
            password.push(char::from(MIN_PRINTABLE + byte % PRINTABLE_SPAN));
        }
    }

    Ok(password)
}

/// Generate password number `sample` of a batch. With a seed in `evolution`,
/// the sample uses `seed + sample`, so batches are reproducible.
pub fn generate_one(
    generator: Generator,
    sample: usize,
    length: usize,
    evolution: &EvolutionConfig,
) -> Result<String> {
    let seed = evolution.seed.map(|s| s.wrapping_add(sample as u64));
    match generator {
        Generator::Genetic => {
            let config = EvolutionConfig {
                seed,
                record_trace: false,
                ..evolution.clone()
            };
            let mut engine = EvolutionEngine::new(config)?;
            Ok(engine.run(length, NoopProgressCallback)?.password)
        }
        Generator::UniformRandom => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_rng(OsRng)?,
            };
            Ok(uniform_random_password(length, &mut rng))
        }
        Generator::OsRandom => os_random_password(length),
    }
}

/// Generate `samples` passwords in parallel. Each sample owns its RNG.
pub fn generate_batch(
    generator: Generator,
    samples: usize,
    length: usize,
    evolution: &EvolutionConfig,
) -> Result<Vec<String>> {
    (0..samples)
        .into_par_iter()
        .map(|i| generate_one(generator, i, length, evolution))
        .collect()
}

/// Mean strength components over a batch of passwords
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthSummary {
    pub generator: Generator,
    pub samples: usize,
    pub mean_unique_chars: f64,
    pub mean_class_diversity: f64,
    pub mean_series: f64,
    pub mean_total: f64,
}

impl StrengthSummary {
    pub fn from_passwords(generator: Generator, passwords: &[String]) -> Self {
        let mean = |score: fn(&str) -> f64| -> f64 {
            if passwords.is_empty() {
                return 0.0;
            }
            passwords.iter().map(|p| score(p)).sum::<f64>() / passwords.len() as f64
        };

        Self {
            generator,
            samples: passwords.len(),
            mean_unique_chars: mean(unique_chars_score),
            mean_class_diversity: mean(class_diversity_score),
            mean_series: mean(series_score),
            mean_total: mean(|p| score_password(p).total),
        }
    }
}

/// Strength of every generator at the configured length
pub fn compare_generators(
    benchmark: &BenchmarkConfig,
    evolution: &EvolutionConfig,
) -> Result<Vec<StrengthSummary>> {
    Generator::ALL
        .iter()
        .map(|&generator| -> Result<StrengthSummary> {
            let passwords = generate_batch(
                generator,
                benchmark.samples,
                benchmark.password_length,
                evolution,
            )?;
            let summary = StrengthSummary::from_passwords(generator, &passwords);
            info!(
                "{}: mean total {:.2} over {} samples",
                generator, summary.mean_total, summary.samples
            );
            Ok(summary)
        })
        .collect()
}

/// Mean wall-clock time per password for each configured length.
///
/// Samples run one after another on the calling thread so the figure is the
/// cost of a single password, not of a parallel batch.
pub fn mean_generation_time(
    generator: Generator,
    benchmark: &BenchmarkConfig,
    evolution: &EvolutionConfig,
) -> Result<Vec<(usize, Duration)>> {
    let samples = benchmark.samples.max(1);

    benchmark
        .timing_lengths
        .iter()
        .map(|&length| -> Result<(usize, Duration)> {
            let mut total = Duration::ZERO;
            for sample in 0..samples {
                let start = Instant::now();
                generate_one(generator, sample, length, evolution)?;
                total += start.elapsed();
            }
            Ok((length, total.div_f64(samples as f64)))
        })
        .collect()
}
