// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{EstimatorError, K_TOO_LARGE, Result};
use crate::estimators::approaches::common_nd::map_indices;

/// Count elements `e` of a sorted slice with `low < e < high`.
///
/// Two binary searches: the first index with a value above `low` and the
/// first index with a value at or above `high`. Values equal to either bound
/// are excluded.
///
/// ```
/// use ksgmeasure::count_within;
/// assert_eq!(count_within(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0], 2.0, 5.0), 2);
/// assert_eq!(count_within(&[1.0; 9], 1.0, 1.0), 0);
/// ```
pub fn count_within(sorted: &[f64], low: f64, high: f64) -> usize {
    let start = sorted.partition_point(|&v| v <= low);
    let end = sorted.partition_point(|&v| v < high);
    end.saturating_sub(start)
}

/// Count elements `e` of a sorted slice with `|e - center| < radius`.
///
/// The set is contiguous in sorted order because the distance to `center`
/// only decreases to the left of it and only grows to the right of it.
/// `center` itself is counted whenever it is present and `radius > 0`.
/// This is the range counter the estimators use for 1-D marginal counts.
pub fn count_within_radius(sorted: &[f64], center: f64, radius: f64) -> usize {
    let inside = |v: f64| (v - center).abs() < radius;
    let start = sorted.partition_point(|&v| v < center && !inside(v));
    let end = sorted.partition_point(|&v| v < center || inside(v));
    end.saturating_sub(start)
}

/// Per-point count of *other* points whose 1-D marginal value lies strictly
/// within `radii[i]` of `values[i]`.
pub fn marginal_counts(values: &[f64], radii: &[f64]) -> Vec<usize> {
    assert_eq!(values.len(), radii.len(), "one radius per value required");
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    map_indices(values.len(), |i| {
        count_within_radius(&sorted, values[i], radii[i]).saturating_sub(1)
    })
}

/// Number of neighbors `k` as supplied by the caller.
///
/// Implemented for all primitive integer and float types so that a
/// fractional value can be rejected explicitly instead of being truncated.
pub trait NeighborCount: Copy {
    /// The integral value of `k`, or [`EstimatorError::TypeMismatch`].
    fn integral_value(self) -> Result<i128>;
}

macro_rules! impl_neighbor_count_int {
    ($($t:ty),*) => {
        $(
            impl NeighborCount for $t {
                fn integral_value(self) -> Result<i128> {
                    Ok(self as i128)
                }
            }
        )*
    };
}

impl_neighbor_count_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_neighbor_count_float {
    ($($t:ty),*) => {
        $(
            impl NeighborCount for $t {
                fn integral_value(self) -> Result<i128> {
                    if !self.is_finite() || self.trunc() != self {
                        return Err(EstimatorError::TypeMismatch(format!(
                            "k must be an integer, got {}",
                            self
                        )));
                    }
                    // saturating cast; out-of-range values fail the range check
                    Ok(self as i128)
                }
            }
        )*
    };
}

impl_neighbor_count_float!(f32, f64);

/// Check `k` against the number of observations `n` and return it as `usize`.
pub fn validate_k(k: impl NeighborCount, n: usize) -> Result<usize> {
    let k = k.integral_value()?;
    if k <= 0 {
        return Err(EstimatorError::InvalidParameter(format!(
            "k must be positive, got {k}"
        )));
    }
    if k >= n as i128 {
        return Err(EstimatorError::InvalidParameter(K_TOO_LARGE.to_string()));
    }
    Ok(k as usize)
}

/// Check a logarithm base: finite, positive and not 1.
pub fn validate_base(base: f64) -> Result<f64> {
    if !base.is_finite() || base <= 0.0 || base == 1.0 {
        return Err(EstimatorError::InvalidParameter(format!(
            "log base must be finite, positive and != 1, got {base}"
        )));
    }
    Ok(base)
}

/// Map mutual information in nats to the correlation scale `sqrt(1 - exp(-2 I))`.
///
/// For a bivariate Gaussian this recovers `|rho|`. Non-positive estimates map to 0.
pub fn normalize_mi(mi: f64) -> f64 {
    if mi <= 0.0 {
        return 0.0;
    }
    (1.0 - (-2.0 * mi).exp()).sqrt()
}
