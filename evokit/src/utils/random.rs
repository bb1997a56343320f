#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use std::cell::RefCell;
use std::sync::Mutex;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&self, min: Float, max: Float) -> Float;

    /// Flips a coin and returns true if it is "heads", false otherwise.
    fn is_head_not_tails(&self) -> bool;

    /// Tests probability value in (0., 1.) range.
    fn is_hit(&self, probability: Float) -> bool;

    /// Returns RNG.
    fn get_rng(&self) -> RandomGen;
}

/// A default random implementation. Uses thread local generator unless created as repeatable.
#[derive(Default)]
pub struct DefaultRandom {
    seeded: Option<Mutex<SmallRng>>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` which produces the same sequence for the same seed.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { seeded: Some(Mutex::new(SmallRng::seed_from_u64(seed))) }
    }

    fn with_rng<R>(&self, action: impl FnOnce(&mut SmallRng) -> R) -> R {
        match &self.seeded {
            Some(rng) => {
                let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                action(&mut rng)
            }
            None => DEFAULT_RNG.with(|rng| action(&mut rng.borrow_mut())),
        }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.with_rng(|rng| rng.gen_range(min..=max))
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.with_rng(|rng| rng.gen_range(min..max))
    }

    fn is_head_not_tails(&self) -> bool {
        self.with_rng(|rng| rng.gen_bool(0.5))
    }

    fn is_hit(&self, probability: Float) -> bool {
        self.with_rng(|rng| rng.gen_bool(probability.clamp(0., 1.)))
    }

    fn get_rng(&self) -> RandomGen {
        self.with_rng(|rng| RandomGen { rng: SmallRng::seed_from_u64(rng.next_u64()) })
    }
}

thread_local! {
    static DEFAULT_RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_entropy());
}

/// Specifies underlying random generator type.
#[derive(Clone, Debug)]
pub struct RandomGen {
    rng: SmallRng,
}

impl RandomGen {
    /// Creates an instance of `RandomGen` which always starts from the same state.
    pub fn new_repeatable() -> Self {
        Self { rng: SmallRng::seed_from_u64(0) }
    }
}

impl RngCore for RandomGen {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}
