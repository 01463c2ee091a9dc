use super::traits::ConfigSection;
use crate::error::PasswordError;
use serde::{Deserialize, Serialize};

/// Settings for comparing GA passwords against random baselines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    pub samples: usize,
    pub password_length: usize,
    pub timing_lengths: Vec<usize>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            samples: 100,
            password_length: 8,
            timing_lengths: vec![4, 6, 8, 10, 12, 14],
        }
    }
}

impl ConfigSection for BenchmarkConfig {
    fn section_name() -> &'static str {
        "benchmark"
    }

    fn validate(&self) -> Result<(), PasswordError> {
        if self.samples == 0 {
            return Err(PasswordError::Configuration(
                "Benchmark needs at least one sample".to_string()
            ));
        }
        if self.password_length == 0 || self.timing_lengths.contains(&0) {
            return Err(PasswordError::Configuration(
                "Benchmark password lengths must be positive".to_string()
            ));
        }
        Ok(())
    }
}
