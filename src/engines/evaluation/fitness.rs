use crate::engines::generation::codec::{decode, MAX_PRINTABLE, MIN_PRINTABLE};
use crate::engines::generation::genome::Nucleotide;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Bonus awarded when every character is printable
pub const VALIDITY_BONUS: f64 = 10.0;
/// Weight of each character class present
pub const CLASS_WEIGHT: f64 = 2.0;

/// Per-component scores of one password
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitnessBreakdown {
    pub unique_chars: f64,
    pub validity: f64,
    pub class_diversity: f64,
    pub series: f64,
    pub total: f64,
}

/// Fitness of a genome, scored on the password it decodes to
pub fn fitness(genome: &[Nucleotide], desired_length: usize) -> f64 {
    let password = decode(genome, desired_length);
    score_password(&password).total
}

/// Score an arbitrary password with the same rules the GA optimizes
pub fn score_password(password: &str) -> FitnessBreakdown {
    if password.is_empty() {
        return FitnessBreakdown {
            unique_chars: 0.0,
            validity: 0.0,
            class_diversity: 0.0,
            series: 0.0,
            total: 0.0,
        };
    }

    let unique_chars = unique_chars_score(password);
    let validity = validity_score(password);
    let class_diversity = class_diversity_score(password);
    let series = series_score(password);

    FitnessBreakdown {
        unique_chars,
        validity,
        class_diversity,
        series,
        total: unique_chars + validity + CLASS_WEIGHT * class_diversity + series,
    }
}

/// Number of distinct characters
pub fn unique_chars_score(password: &str) -> f64 {
    password.chars().collect::<HashSet<_>>().len() as f64
}

pub fn validity_score(password: &str) -> f64 {
    let printable = password
        .chars()
        .all(|c| (u32::from(MIN_PRINTABLE)..=u32::from(MAX_PRINTABLE)).contains(&u32::from(c)));
    if printable {
        VALIDITY_BONUS
    } else {
        0.0
    }
}

/// How many of {digit, lowercase, uppercase, punctuation} appear (0-4)
pub fn class_diversity_score(password: &str) -> f64 {
    let classes: [fn(&char) -> bool; 4] = [
        char::is_ascii_digit,
        char::is_ascii_lowercase,
        char::is_ascii_uppercase,
        char::is_ascii_punctuation,
    ];

    classes
        .iter()
        .filter(|class| password.chars().any(|c| class(&c)))
        .count() as f64
}

/// Rewards runs of letters / digits / symbols close to a fifth of the length.
///
/// Runs are maximal stretches sharing the same (alphabetic, digit) signature.
pub fn series_score(password: &str) -> f64 {
    let length = password.chars().count() as f64;
    let preferred_run = length / 5.0;

    let penalty: f64 = run_lengths(password)
        .into_iter()
        .map(|run| (run as f64 - preferred_run).abs())
        .sum();

    (length * length - penalty).max(0.0) / 10.0
}

fn run_lengths(password: &str) -> Vec<usize> {
    let signature = |c: char| (c.is_ascii_alphabetic(), c.is_ascii_digit());

    let mut runs = Vec::new();
    let mut chars = password.chars();
    let Some(first) = chars.next() else {
        return runs;
    };

    let mut current = signature(first);
    let mut run = 1;
    for c in chars {
        let next = signature(c);
        if next == current {
            run += 1;
        } else {
            runs.push(run);
            current = next;
            run = 1;
        }
    }
    runs.push(run);

    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::generation::genome::parse_genome;

    #[test]
    fn test_unique_chars() {
        assert_eq!(unique_chars_score("aabbcc"), 3.0);
        assert_eq!(unique_chars_score("!!!!"), 1.0);
    }

    #[test]
    fn test_class_diversity_counts_each_class_once() {
        assert_eq!(class_diversity_score("abc"), 1.0);
        assert_eq!(class_diversity_score("aB3"), 3.0);
        assert_eq!(class_diversity_score("aB3#"), 4.0);
        assert_eq!(class_diversity_score("#$%"), 1.0);
    }

    #[test]
    fn test_runs_split_on_signature_change() {
        assert_eq!(run_lengths("abC12#$x"), vec![3, 2, 2, 1]);
        assert_eq!(run_lengths(""), Vec::<usize>::new());
    }

    #[test]
    fn test_series_score_for_uniform_password() {
        // One run of 10, preferred 2 -> penalty 8, (100 - 8) / 10
        assert!((series_score("aaaaaaaaaa") - 9.2).abs() < 1e-9);
        // Runs of exactly the preferred length -> no penalty
        assert!((series_score("ab12#$cd34") - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_adenine_genome_score() {
        let genome = vec![Nucleotide::A; 32];
        // "!!!!!!!!": 1 unique, valid, 1 class, one run of 8 (penalty 6.4)
        let expected = 1.0 + 10.0 + 2.0 * 1.0 + (64.0 - 6.4) / 10.0;
        assert!((fitness(&genome, 8) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_fitness_is_pure() {
        let genome = parse_genome("ACGTTGCAACGTGGCCATTAGCAT");
        assert_eq!(fitness(&genome, 6), fitness(&genome, 6));
    }

    #[test]
    fn test_empty_password_scores_zero() {
        assert_eq!(score_password("").total, 0.0);
        assert_eq!(fitness(&[], 0), 0.0);
    }
}
