use genopass::config::{BenchmarkConfig, EvolutionConfig};
use genopass::engines::metrics::{compare_generators, mean_generation_time, Generator};
use std::env;

fn main() {
    env_logger::init();

    println!("=== genopass Baseline Comparison ===\n");

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let samples = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100);
    let password_length = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(8);
    let seed = args.get(3).and_then(|s| s.parse().ok());

    println!("Configuration:");
    println!("  Samples per generator: {}", samples);
    println!("  Password length: {}", password_length);
    println!("  Seed: {:?}", seed);
    println!();

    let benchmark = BenchmarkConfig {
        samples,
        password_length,
        ..Default::default()
    };
    let evolution = EvolutionConfig {
        seed,
        record_trace: false,
        ..Default::default()
    };

    println!("🚀 Generating passwords...\n");

    match compare_generators(&benchmark, &evolution) {
        Ok(summaries) => {
            println!("═══════════════════════════════════════════════");
            println!(
                "{:<10} {:>8} {:>8} {:>8} {:>8}",
                "Generator", "Unique", "Types", "Series", "Total"
            );
            println!("═══════════════════════════════════════════════");
            for summary in &summaries {
                println!(
                    "{:<10} {:>8.2} {:>8.2} {:>8.2} {:>8.2}",
                    summary.generator.to_string(),
                    summary.mean_unique_chars,
                    summary.mean_class_diversity,
                    summary.mean_series,
                    summary.mean_total
                );
            }
            println!("═══════════════════════════════════════════════\n");
        }
        Err(e) => {
            eprintln!("\n❌ Comparison failed: {}", e);
            std::process::exit(1);
        }
    }

    println!("⏱  Mean time per password:\n");
    for generator in Generator::ALL {
        match mean_generation_time(generator, &benchmark, &evolution) {
            Ok(timings) => {
                for (length, per_password) in timings {
                    println!(
                        "  {:<10} length {:>2}: {:>10.3} ms",
                        generator.to_string(),
                        length,
                        per_password.as_secs_f64() * 1000.0
                    );
                }
            }
            Err(e) => {
                eprintln!("\n❌ Timing failed for {}: {}", generator, e);
                std::process::exit(1);
            }
        }
    }
}
