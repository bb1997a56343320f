//! Contains genetic operators which produce new individuals from existing ones.

mod crossover;
pub use self::crossover::uniform_crossover;

mod mutation;
pub use self::mutation::Mutation;

mod repair;
pub use self::repair::Repair;
