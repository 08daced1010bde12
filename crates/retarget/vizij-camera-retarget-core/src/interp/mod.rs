//! Stateless curve math used by sampling and tangent linearization.

pub mod functions;

pub use functions::{distance, hermite, length_ratio, linear_tangent, polyline_length};
