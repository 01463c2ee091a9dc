use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Genome representation for the password GA
///
/// A genome is a variable-length sequence of nucleotides. Each nucleotide carries
/// two bits, so four nucleotides make up one byte of the decoded password:
/// - `A` = 00
/// - `C` = 01
/// - `T` = 10
/// - `G` = 11
///
/// Mutation and crossover grow and shrink genomes freely. The length only gets
/// pinned down when the final genome is normalized before decoding.
///
/// # Conversion
///
/// Use `codec::decode()` to turn a genome into a password and `codec::encode()`
/// for the reverse direction.
///
/// # Example
///
/// ```
/// use genopass::engines::generation::genome::{parse_genome, genome_to_string};
///
/// let genome = parse_genome("ACTG");
/// assert_eq!(genome_to_string(&genome), "ACTG");
/// ```
pub type Genome = Vec<Nucleotide>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nucleotide {
    A,
    C,
    T,
    G,
}

impl Nucleotide {
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::T, Nucleotide::G];

    /// Two-bit code of this nucleotide
    pub fn bits(self) -> u8 {
        match self {
            Nucleotide::A => 0b00,
            Nucleotide::C => 0b01,
            Nucleotide::T => 0b10,
            Nucleotide::G => 0b11,
        }
    }

    /// Inverse of `bits()`; only the low two bits are read
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Nucleotide::A,
            0b01 => Nucleotide::C,
            0b10 => Nucleotide::T,
            _ => Nucleotide::G,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::T => 'T',
            Nucleotide::G => 'G',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'A' => Some(Nucleotide::A),
            'C' => Some(Nucleotide::C),
            'T' => Some(Nucleotide::T),
            'G' => Some(Nucleotide::G),
            _ => None,
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Uniform draw over {A, C, T, G}
impl Distribution<Nucleotide> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Nucleotide {
        Nucleotide::ALL[rng.gen_range(0..Nucleotide::ALL.len())]
    }
}

/// Parse free text into a genome, skipping anything outside the alphabet
pub fn parse_genome(text: &str) -> Genome {
    text.chars().filter_map(Nucleotide::from_symbol).collect()
}

pub fn genome_to_string(genome: &[Nucleotide]) -> String {
    genome.iter().map(|n| n.symbol()).collect()
}
