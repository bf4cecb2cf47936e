//! Random sampling helpers

use rand::Rng;
use std::f64::consts::PI;

/// Sample from a Gaussian (normal) distribution using the Box-Muller transform.
///
/// # Arguments
/// * `rng` - Random number generator
/// * `mean` - Mean of the distribution
/// * `std_dev` - Standard deviation
///
/// # Returns
/// A sample from the normal distribution N(mean, std_dev²)
pub fn sample_gaussian(rng: &mut impl Rng, mean: f64, std_dev: f64) -> f64 {
    // u1 is drawn from (0, 1] so the logarithm stays finite
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}
