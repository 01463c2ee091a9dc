use anyhow::{bail, Context, Result};
use genopass::config::ConfigManager;
use genopass::engines::generation::{ConsoleProgressCallback, EvolutionEngine};
use std::env;
use std::path::PathBuf;

const DEFAULT_LENGTH: usize = 16;
const CONFIG_ENV: &str = "GENOPASS_CONFIG";

/// Usage: genopass [LENGTH] [TRACE_FILE]
fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let length = match args.get(1) {
        Some(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("LENGTH must be a positive integer, got {:?}", raw))?,
        None => DEFAULT_LENGTH,
    };
    if length == 0 {
        bail!("LENGTH must be a positive integer, got 0");
    }
    let trace_path = args.get(2).map(PathBuf::from);

    let manager = ConfigManager::new();
    match env::var_os(CONFIG_ENV) {
        Some(path) => manager
            .load_from_file(&path)
            .with_context(|| format!("Failed to load {}", PathBuf::from(&path).display()))?,
        None => manager.load_from_env().context("Failed to read environment overrides")?,
    }

    let mut evolution = manager.get().evolution;
    evolution.record_trace = trace_path.is_some();

    let mut engine = EvolutionEngine::new(evolution)?;
    let outcome = engine.run(length, ConsoleProgressCallback::default())?;

    println!("{}", outcome.password);

    if let Some(path) = trace_path {
        std::fs::write(&path, outcome.trace_text())
            .with_context(|| format!("Failed to write trace to {}", path.display()))?;
        log::info!("Trace written to {}", path.display());
    }

    Ok(())
}
