//! Password generation by evolving DNA-like genomes.
//!
//! A population of nucleotide sequences is mutated, recombined and selected
//! until the best fitness stops improving; the champion genome is then decoded
//! into a printable-ASCII password.
//!
//! ```no_run
//! let (password, trace) = genopass::generate_password(16)?;
//! assert_eq!(password.chars().count(), 16);
//! println!("{}", trace);
//! # Ok::<(), genopass::error::PasswordError>(())
//! ```

pub mod config;
pub mod engines;
pub mod error;

use crate::config::EvolutionConfig;
use crate::engines::generation::{EvolutionEngine, EvolutionOutcome, NoopProgressCallback};
use crate::error::Result;

/// Evolve a password with the default settings, seeded from the OS.
///
/// Returns the password and the rendered generation trace.
pub fn generate_password(desired_length: usize) -> Result<(String, String)> {
    let outcome = generate_password_with(desired_length, &EvolutionConfig::default())?;
    let trace = outcome.trace_text();
    Ok((outcome.password, trace))
}

pub fn generate_password_with(
    desired_length: usize,
    config: &EvolutionConfig,
) -> Result<EvolutionOutcome> {
    let mut engine = EvolutionEngine::new(config.clone())?;
    engine.run(desired_length, NoopProgressCallback)
}
