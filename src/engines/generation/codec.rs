use crate::engines::generation::genome::{Genome, Nucleotide};
use crate::error::{PasswordError, Result};
use rand::Rng;

/// Lowest printable code point a decoded byte can map to (`!`)
pub const MIN_PRINTABLE: u8 = 33;
/// Highest printable code point a decoded byte can map to (`~`)
pub const MAX_PRINTABLE: u8 = 126;
/// Size of the printable range [33, 126]
pub const PRINTABLE_SPAN: u8 = MAX_PRINTABLE - MIN_PRINTABLE + 1;
/// Nucleotides needed for one password character
pub const NUCLEOTIDES_PER_CHAR: usize = 4;

/// Generate a random genome
pub fn random_sequence<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Genome {
    (0..length).map(|_| rng.gen::<Nucleotide>()).collect()
}

/// Force a genome to `target_length`: keep the front if too long, pad with
/// random nucleotides if too short.
pub fn normalize<R: Rng + ?Sized>(
    genome: &[Nucleotide],
    target_length: usize,
    rng: &mut R,
) -> Genome {
    let mut normalized = genome[..genome.len().min(target_length)].to_vec();
    if normalized.len() < target_length {
        let missing = target_length - normalized.len();
        normalized.extend(random_sequence(missing, rng));
    }
    normalized
}

/// Decode a genome into a printable-ASCII password of exactly `desired_length` characters.
///
/// Nucleotides are packed two bits at a time, most significant first. Missing
/// bits are zero; surplus nucleotides are ignored. Each byte `v` becomes the
/// character `33 + (v mod 94)`.
pub fn decode(genome: &[Nucleotide], desired_length: usize) -> String {
    let password: String = (0..desired_length)
        .map(|char_idx| {
            let start = char_idx * NUCLEOTIDES_PER_CHAR;
            let byte = (0..NUCLEOTIDES_PER_CHAR).fold(0u8, |acc, offset| {
                let bits = genome.get(start + offset).map_or(0, |n| n.bits());
                (acc << 2) | bits
            });
            byte_to_char(byte)
        })
        .collect();

    debug_assert_eq!(password.chars().count(), desired_length);
    password
}

/// Encode a printable password back into the genome `decode` turns into it
pub fn encode(password: &str) -> Result<Genome> {
    let mut genome = Vec::with_capacity(password.len() * NUCLEOTIDES_PER_CHAR);

    for ch in password.chars() {
        let code = u32::from(ch);
        if code < u32::from(MIN_PRINTABLE) || code > u32::from(MAX_PRINTABLE) {
            return Err(PasswordError::InvalidArgument(format!(
                "Character {:?} is outside the printable range {}..={}",
                ch, MIN_PRINTABLE, MAX_PRINTABLE
            )));
        }

        let value = (code - u32::from(MIN_PRINTABLE)) as u8;
        for shift in [6u8, 4, 2, 0] {
            genome.push(Nucleotide::from_bits(value >> shift));
        }
    }

    Ok(genome)
}

fn byte_to_char(byte: u8) -> char {
    char::from(MIN_PRINTABLE + byte % PRINTABLE_SPAN)
}
