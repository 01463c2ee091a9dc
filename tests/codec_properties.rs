use genopass::engines::evaluation::fitness;
use genopass::engines::generation::codec::{decode, normalize, random_sequence};
use genopass::engines::generation::genome::{parse_genome, Nucleotide};
use genopass::engines::generation::operators::{
    crossover_population, mutate, select_next_generation,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_decode_length_and_range() {
    let mut rng = StdRng::seed_from_u64(100);
    for length in 1..=64 {
        let password = decode(&random_sequence(length * 4, &mut rng), length);
        assert_eq!(password.chars().count(), length);
        assert!(password.bytes().all(|b| (33..=126).contains(&b)));
    }
}

#[test]
fn test_decode_length_ignores_genome_length() {
    let mut rng = StdRng::seed_from_u64(101);
    for genome_len in [0, 3, 17, 64, 200] {
        let genome = random_sequence(genome_len, &mut rng);
        assert_eq!(decode(&genome, 16).chars().count(), 16);
    }
}

#[test]
fn test_sixty_four_adenines() {
    let genome = parse_genome(&"A".repeat(64));
    assert_eq!(decode(&genome, 16), "!!!!!!!!!!!!!!!!");
}

#[test]
fn test_normalize_any_length() {
    let mut rng = StdRng::seed_from_u64(102);
    for _ in 0..100 {
        let input_len = rng.gen_range(0..150);
        let target = rng.gen_range(0..100);
        let genome = random_sequence(input_len, &mut rng);
        assert_eq!(normalize(&genome, target, &mut rng).len(), target);
    }
}

#[test]
fn test_mutation_keeps_alphabet() {
    let mut rng = StdRng::seed_from_u64(103);
    let mut genome = random_sequence(32, &mut rng);
    for _ in 0..300 {
        mutate(&mut genome, 5, &mut rng);
        let text: String = genome.iter().map(|n| n.symbol()).collect();
        assert!(text.chars().all(|c| "ACTG".contains(c)));
        assert_eq!(parse_genome(&text), genome);
    }
}

#[test]
fn test_generation_keeps_population_size_and_elite() {
    let mut rng = StdRng::seed_from_u64(104);
    for size in [2, 3, 10, 11] {
        let mut population: Vec<Vec<Nucleotide>> =
            (0..size).map(|_| random_sequence(32, &mut rng)).collect();
        for genome in population.iter_mut() {
            mutate(genome, 5, &mut rng);
        }

        let population = crossover_population(population, 0.8, 0.5, &mut rng);
        assert_eq!(population.len(), size);

        let scores: Vec<f64> = population.iter().map(|g| fitness(g, 8)).collect();
        let best = scores.iter().cloned().fold(f64::MIN, f64::max);
        let best_genome = &population[scores.iter().position(|&s| s == best).unwrap()];

        let next = select_next_generation(&population, &scores, &mut rng).unwrap();
        assert_eq!(next.len(), size);
        assert_eq!(&next[0], best_genome);
    }
}

#[test]
fn test_decode_and_fitness_are_pure() {
    let mut rng = StdRng::seed_from_u64(105);
    let genome = random_sequence(48, &mut rng);
    assert_eq!(decode(&genome, 12), decode(&genome, 12));
    assert_eq!(fitness(&genome, 12), fitness(&genome, 12));
}
