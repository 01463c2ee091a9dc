use genopass::config::EvolutionConfig;
use genopass::engines::metrics::{generate_batch, Generator, StrengthSummary};

#[test]
fn test_ga_passwords_at_least_as_strong_as_uniform_random() {
    let evolution = EvolutionConfig {
        seed: Some(2024),
        record_trace: false,
        ..Default::default()
    };
    let samples = 60;
    let length = 8;

    let ga = generate_batch(Generator::Genetic, samples, length, &evolution).unwrap();
    let random = generate_batch(Generator::UniformRandom, samples, length, &evolution).unwrap();

    let ga_summary = StrengthSummary::from_passwords(Generator::Genetic, &ga);
    let random_summary = StrengthSummary::from_passwords(Generator::UniformRandom, &random);

    println!("GA:     {:?}", ga_summary);
    println!("random: {:?}", random_summary);

    assert_eq!(ga_summary.samples, samples);
    assert!(
        ga_summary.mean_total >= random_summary.mean_total,
        "GA mean {:.3} below random mean {:.3}",
        ga_summary.mean_total,
        random_summary.mean_total
    );
}

#[test]
fn test_os_random_batch() {
    let passwords =
        generate_batch(Generator::OsRandom, 20, 12, &EvolutionConfig::default()).unwrap();
    assert_eq!(passwords.len(), 20);
    assert!(passwords.iter().all(|p| p.len() == 12));
}
