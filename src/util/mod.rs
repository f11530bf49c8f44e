pub mod math;
pub mod tests;

pub use math::{floor_sqrt, is_prime, perfect_sqrt};
