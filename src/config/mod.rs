pub mod traits;
pub mod evolution;
pub mod benchmark;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::EvolutionConfig;
pub use benchmark::BenchmarkConfig;
pub use traits::{validate_section, ConfigSection};
