use super::evolution_engine::ProgressCallback;
use log::{debug, info};

/// Reports progress through the `log` facade
pub struct ConsoleProgressCallback {
    /// Log every n-th generation at info level; the rest go to debug
    pub every: usize,
}

impl Default for ConsoleProgressCallback {
    fn default() -> Self {
        Self { every: 50 }
    }
}

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        debug!("Generation {} starting...", generation);
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, stagnation: usize) {
        if self.every > 0 && generation % self.every == 0 {
            info!(
                "Generation {} complete. Best fitness: {:.4}, stagnant for {} generations",
                generation, best_fitness, stagnation
            );
        } else {
            debug!(
                "Generation {} complete. Best fitness: {:.4}, stagnant for {} generations",
                generation, best_fitness, stagnation
            );
        }
    }
}

pub struct NoopProgressCallback;

impl ProgressCallback for NoopProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(
        &mut self,
        _generation: usize,
        _best_fitness: f64,
        _stagnation: usize,
    ) {
    }
}
