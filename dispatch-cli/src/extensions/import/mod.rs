//! Import of delivery data from external formats.

mod csv;
pub use self::csv::*;
