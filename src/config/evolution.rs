use super::traits::ConfigSection;
use crate::error::PasswordError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub mutations_per_genome: usize,
    pub crossover_rate: f64,
    pub swap_probability: f64,
    /// Consecutive generations without improvement before the run converges
    pub stagnation_limit: usize,
    /// Hard cap on generations; `None` lets stagnation alone end the run
    pub max_generations: Option<usize>,
    pub record_trace: bool,
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            mutations_per_genome: 5,
            crossover_rate: 0.8,
            swap_probability: 0.5,
            stagnation_limit: 200,
            max_generations: None,
            record_trace: true,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), PasswordError> {
        if self.population_size < 2 {
            return Err(PasswordError::Configuration(
                "Population size must be at least 2".to_string()
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(PasswordError::Configuration(
                "Crossover rate must be between 0 and 1".to_string()
            ));
        }
        if !(0.0..=1.0).contains(&self.swap_probability) {
            return Err(PasswordError::Configuration(
                "Swap probability must be between 0 and 1".to_string()
            ));
        }
        if self.stagnation_limit == 0 {
            return Err(PasswordError::Configuration(
                "Stagnation limit must be at least 1".to_string()
            ));
        }
        if self.max_generations == Some(0) {
            return Err(PasswordError::Configuration(
                "Max generations must be at least 1 when set".to_string()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EvolutionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let bad = [
            EvolutionConfig { population_size: 1, ..Default::default() },
            EvolutionConfig { crossover_rate: 1.5, ..Default::default() },
            EvolutionConfig { swap_probability: -0.1, ..Default::default() },
            EvolutionConfig { stagnation_limit: 0, ..Default::default() },
            EvolutionConfig { max_generations: Some(0), ..Default::default() },
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{:?} should be rejected", config);
        }
    }
}
