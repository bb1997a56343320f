use crate::prelude::*;
use std::sync::Mutex;

struct FakeDistribution<T> {
    values: Vec<T>,
}

impl<T> FakeDistribution<T> {
    pub fn new(values: Vec<T>) -> Self {
        let mut values = values;
        values.reverse();
        Self { values }
    }

    pub fn next(&mut self) -> T {
        self.values.pop().expect("fake distribution is exhausted")
    }
}

/// Returns predefined values in the given order.
pub struct FakeRandom {
    ints: Mutex<FakeDistribution<i32>>,
    reals: Mutex<FakeDistribution<Float>>,
}

impl FakeRandom {
    pub fn new(ints: Vec<i32>, reals: Vec<Float>) -> Self {
        Self { ints: Mutex::new(FakeDistribution::new(ints)), reals: Mutex::new(FakeDistribution::new(reals)) }
    }
}

impl Random for FakeRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        assert!(min <= max);
        let value = self.ints.lock().unwrap().next();
        assert!(value >= min && value <= max, "fake value {value} is outside of [{min}, {max}]");

        value
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        assert!(min < max);
        self.reals.lock().unwrap().next()
    }

    fn is_head_not_tails(&self) -> bool {
        self.uniform_int(0, 1) == 1
    }

    fn is_hit(&self, probability: Float) -> bool {
        self.uniform_real(0., 1.) < probability
    }

    fn get_rng(&self) -> RandomGen {
        RandomGen::new_repeatable()
    }
}
