//! Contains functionality to configure and run route optimization.

pub mod config;
pub mod interruption;
