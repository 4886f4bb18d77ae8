//! Selectivity score to population percentile.
//!
//! Scores are standardized with mean 50 and standard deviation 10, so a score maps
//! to a z-value and the share of the population at or above it is the upper tail
//! of the standard normal distribution.

pub const SCORE_MEAN: f64 = 50.0;
pub const SCORE_STD_DEV: f64 = 10.0;

// ln(sqrt(2 * pi))
const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_8;

// Below this the power series is used, above it the continued fraction.
const SERIES_LIMIT: f64 = 3.0;
const CONTINUED_FRACTION_TERMS: u32 = 120;

pub fn pdf(z: f64) -> f64 {
    (-0.5 * z * z - LN_SQRT_2PI).exp()
}

pub fn cdf(z: f64) -> f64 {
    1.0 - upper_tail(z)
}

/// `P(Z >= z)` for a standard normal `Z`.
///
/// `0.5 - phi(z) * (z + z^3/3 + z^5/(3*5) + ...)` near the centre, the Laplace
/// continued fraction in the tails.
pub fn upper_tail(z: f64) -> f64 {
    if z.is_nan() {
        return f64::NAN;
    }
    if z < 0.0 {
        return 1.0 - upper_tail(-z);
    }
    if z < SERIES_LIMIT {
        return 0.5 - pdf(z) * central_series(z);
    }
    pdf(z) / tail_fraction(z)
}

fn central_series(z: f64) -> f64 {
    let q = z * z;
    let mut sum = z;
    let mut term = z;
    let mut prev = 0.0;
    let mut denom = 1.0;
    while sum != prev {
        prev = sum;
        denom += 2.0;
        term *= q / denom;
        sum += term;
    }
    sum
}

// z + 1/(z + 2/(z + 3/(z + ...))), innermost term first
fn tail_fraction(z: f64) -> f64 {
    let mut acc = z;
    for k in (1..=CONTINUED_FRACTION_TERMS).rev() {
        acc = z + f64::from(k) / acc;
    }
    acc
}

pub fn score_to_top_percentile(score: f64) -> f64 {
    let z = (score - SCORE_MEAN) / SCORE_STD_DEV;
    upper_tail(z) * 100.0
}

/// Percentage to probability. No range check: out-of-domain input passes through.
pub fn percentage_to_probability(percentage: f64) -> f64 {
    percentage / 100.0
}
