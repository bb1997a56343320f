/// Alias to a scalar floating type used for distances, durations and fitness values.
pub type Float = f64;
