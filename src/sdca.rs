//! Stochastic Dual Coordinate Ascent

mod params;
mod update;

pub use self::params::Params;

mod solve;
pub use solve::{solve, solve_with_status};
