pub mod strength;

pub use strength::{
    compare_generators, generate_batch, generate_one, mean_generation_time, Generator,
    StrengthSummary,
};
