pub mod fitness;

pub use fitness::{fitness, score_password, FitnessBreakdown};
