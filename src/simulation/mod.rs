pub mod curve_generator;
pub mod rate_shift;
