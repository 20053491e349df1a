//! Roulette curve geometry: parameters, sampling, simplification and path building.

pub mod params;
pub mod path;
pub mod polygon;
pub mod sampler;
pub mod simplify;
