#[cfg(test)]
#[path = "../../tests/unit/utils/environment_test.rs"]
mod environment_test;

use crate::utils::{DefaultRandom, Float, Random, Timer, get_cpus};
use rand::RngCore;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A logger type which is called with various information.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Specifies a computational quota for long running operations, e.g. evolution.
pub trait Quota {
    /// Returns true when computation should be stopped.
    fn is_reached(&self) -> bool;
}

/// A quota which is reached when a given amount of seconds has passed.
pub struct TimeQuota {
    start: Timer,
    limit_in_secs: Float,
}

impl TimeQuota {
    /// Creates a new instance of `TimeQuota`.
    pub fn new(limit_in_secs: Float) -> Self {
        Self { start: Timer::start(), limit_in_secs }
    }
}

impl Quota for TimeQuota {
    fn is_reached(&self) -> bool {
        self.start.elapsed_secs_as_float() > self.limit_in_secs
    }
}

/// A quota which is reached once cancellation is requested from outside, optionally combined
/// with another quota.
pub struct CancellationQuota {
    inner: Option<Arc<dyn Quota + Send + Sync>>,
    is_cancelled: Arc<AtomicBool>,
}

impl CancellationQuota {
    /// Creates a new instance of `CancellationQuota` listening to a given flag.
    pub fn new(is_cancelled: Arc<AtomicBool>, inner: Option<Arc<dyn Quota + Send + Sync>>) -> Self {
        Self { inner, is_cancelled }
    }
}

impl Quota for CancellationQuota {
    fn is_reached(&self) -> bool {
        self.is_cancelled.load(Ordering::Relaxed) || self.inner.as_ref().is_some_and(|inner| inner.is_reached())
    }
}

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,

    /// A global execution quota, checked once per generation.
    pub quota: Option<Arc<dyn Quota + Send + Sync>>,

    /// Amount of threads used to evaluate individuals.
    pub parallelism: usize,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(
        random: Arc<dyn Random + Send + Sync>,
        quota: Option<Arc<dyn Quota + Send + Sync>>,
        parallelism: usize,
        logger: InfoLogger,
    ) -> Self {
        Self { random, quota, parallelism, logger }
    }

    /// Creates a new instance of `Environment` with a time quota.
    pub fn new_with_time_quota(max_time: Option<usize>) -> Self {
        Self {
            quota: max_time.map::<Arc<dyn Quota + Send + Sync>, _>(|time| Arc::new(TimeQuota::new(time as Float))),
            ..Self::default()
        }
    }

    /// Returns a copy of environment with its own repeatable random generator seeded from this one.
    /// Forks taken in the same order from a repeatable environment produce the same sequences.
    pub fn fork(&self) -> Self {
        let seed = self.random.get_rng().next_u64();

        Self { random: Arc::new(DefaultRandom::new_repeatable(seed)), ..self.clone() }
    }

    /// Returns true if the quota is set and reached.
    pub fn is_quota_reached(&self) -> bool {
        self.quota.as_ref().is_some_and(|quota| quota.is_reached())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(DefaultRandom::default()), None, get_cpus(), Arc::new(|msg: &str| println!("{msg}")))
    }
}
