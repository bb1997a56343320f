//! A module which provides simple logging of evolution progress.

#[cfg(test)]
#[path = "../../tests/unit/evolution/telemetry_test.rs"]
mod telemetry_test;

use crate::utils::{Float, InfoLogger, Timer};

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often, in generations, a generation line is logged. Generations which improve
        /// the champion are always logged.
        log_best: usize,
    },
}

/// Provides way to write information about evolution progress into log.
pub struct Telemetry {
    mode: TelemetryMode,
    time: Timer,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { mode, time: Timer::start() }
    }

    /// Reports initial population.
    pub fn on_initial(&self, population_size: usize, individual_size: usize, item_time: Timer) {
        self.log(
            format!(
                "[{}s] created initial population of {population_size} individuals of length {individual_size} in {}ms",
                self.time.elapsed_secs(),
                item_time.elapsed_millis()
            )
            .as_str(),
        );
    }

    /// Reports generation which had at least one survivor.
    pub fn on_generation(
        &self,
        generation: usize,
        survivors: usize,
        threshold: Float,
        champion: Float,
        is_improved: bool,
        generation_time: Timer,
    ) {
        let should_log = match &self.mode {
            TelemetryMode::OnlyLogging { log_best, .. } => generation % (*log_best).max(1) == 0 || is_improved,
            TelemetryMode::None => false,
        };

        if should_log {
            self.log(
                format!(
                    "[{}s] generation {generation} took {}ms, survivors: {survivors}, threshold: {threshold:.2}, \
                     champion: {champion:.2}{}",
                    self.time.elapsed_secs(),
                    generation_time.elapsed_millis(),
                    if is_improved { " (improved)" } else { "" }
                )
                .as_str(),
            );
        }
    }

    /// Reports population reseed.
    pub fn on_reseed(&self, reseeds: usize, max_reseeds: usize) {
        self.log(
            format!("[{}s] no survivors, reseeding population ({reseeds}/{max_reseeds})", self.time.elapsed_secs())
                .as_str(),
        );
    }

    /// Reports evolution interruption.
    pub fn on_interruption(&self, generation: usize) {
        self.log(
            format!("[{}s] evolution is interrupted at generation {generation}", self.time.elapsed_secs()).as_str(),
        );
    }

    /// Reports final result.
    pub fn on_result(&self, generations: usize, reseeds: usize, champion: Float, is_converged: bool) {
        let status = if is_converged { "converged" } else { "not converged, constraints were never jointly satisfied" };

        self.log(
            format!(
                "[{}s] evolution finished: generations: {generations}, reseeds: {reseeds}, champion: {:.2}, {status}",
                self.time.elapsed_secs(),
                champion
            )
            .as_str(),
        );
    }

    fn log(&self, message: &str) {
        if let TelemetryMode::OnlyLogging { logger, .. } = &self.mode {
            (logger)(message)
        }
    }
}
