#[cfg(test)]
#[path = "../../tests/unit/evolution/config_test.rs"]
mod config_test;

use crate::evolution::TelemetryMode;
use crate::utils::{Environment, Float, GenericError, GenericResult};
use std::sync::Arc;

/// A configuration which controls evolution execution.
#[derive(Clone)]
pub struct EvolutionConfig {
    /// Amount of individuals in population.
    pub population_size: usize,
    /// Amount of generations which satisfied constraints before evolution stops.
    pub max_generations: usize,
    /// Amount of full population reseeds allowed when no individual survives selection.
    pub max_reseeds: usize,
    /// A rank ratio used to pick adaptive fitness threshold, e.g. `0.25` for 25th percentile.
    pub threshold_ratio: Float,
    /// A chance of swap mutation applied to each child.
    pub mutation_chance: Float,
    /// Amount of parents used by crossover.
    pub parents: usize,
    /// A telemetry mode.
    pub telemetry: TelemetryMode,
    /// An environment.
    pub environment: Arc<Environment>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 10_000,
            max_generations: 100,
            max_reseeds: 100,
            threshold_ratio: 0.25,
            mutation_chance: 0.2,
            parents: 2,
            telemetry: TelemetryMode::None,
            environment: Arc::new(Environment::default()),
        }
    }
}

/// Provides configurable way to build evolution configuration using fluent interface style.
#[derive(Default)]
pub struct EvolutionConfigBuilder {
    config: EvolutionConfig,
}

impl EvolutionConfigBuilder {
    /// Sets population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.config.population_size = population_size;
        self
    }

    /// Sets max generations to be run.
    pub fn with_max_generations(mut self, max_generations: usize) -> Self {
        self.config.max_generations = max_generations;
        self
    }

    /// Sets max amount of population reseeds.
    pub fn with_max_reseeds(mut self, max_reseeds: usize) -> Self {
        self.config.max_reseeds = max_reseeds;
        self
    }

    /// Sets threshold rank ratio.
    pub fn with_threshold_ratio(mut self, threshold_ratio: Float) -> Self {
        self.config.threshold_ratio = threshold_ratio;
        self
    }

    /// Sets mutation chance.
    pub fn with_mutation_chance(mut self, mutation_chance: Float) -> Self {
        self.config.mutation_chance = mutation_chance;
        self
    }

    /// Sets amount of crossover parents.
    pub fn with_parents(mut self, parents: usize) -> Self {
        self.config.parents = parents;
        self
    }

    /// Sets telemetry mode.
    pub fn with_telemetry(mut self, telemetry: TelemetryMode) -> Self {
        self.config.telemetry = telemetry;
        self
    }

    /// Sets environment.
    pub fn with_environment(mut self, environment: Arc<Environment>) -> Self {
        self.config.environment = environment;
        self
    }

    /// Builds and validates evolution configuration.
    pub fn build(self) -> GenericResult<EvolutionConfig> {
        let config = self.config;

        if config.population_size == 0 {
            return Err(GenericError::validation("population size should be greater than zero"));
        }

        if config.max_generations == 0 {
            return Err(GenericError::validation("max generations should be greater than zero"));
        }

        if config.parents == 0 {
            return Err(GenericError::validation("crossover requires at least one parent"));
        }

        if !(0. ..=1.).contains(&config.mutation_chance) {
            return Err(GenericError::validation(format!(
                "mutation chance should be in [0, 1] range, got: {}",
                config.mutation_chance
            )));
        }

        if !(0. ..=1.).contains(&config.threshold_ratio) {
            return Err(GenericError::validation(format!(
                "threshold ratio should be in [0, 1] range, got: {}",
                config.threshold_ratio
            )));
        }

        Ok(config)
    }
}
