// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::ArrayView1;

use crate::error::Result;
use crate::estimators::approaches::ksg::utils::NeighborCount;
use crate::estimators::approaches::ksg::{KsgConditionalMutualInformation, KsgMutualInformation};
use crate::estimators::traits::GlobalValue;

/// Number of neighbors used when the caller has no preference.
pub const DEFAULT_K: usize = 3;

/// Mutual information estimation methods for continuous data
///
/// This struct provides static methods for creating mutual information
/// estimators. Construction validates the inputs; the estimate itself is
/// computed by [`GlobalValue::global_value`] or, pointwise, by
/// [`LocalValues::local_values`](crate::estimators::traits::LocalValues::local_values).
pub struct MutualInformation;

impl MutualInformation {
    /// Creates a KSG estimator for I(X;Y)
    ///
    /// # Arguments
    ///
    /// * `x`, `y` - Paired observations of the two variables
    /// * `k` - Number of nearest neighbors (1 <= k < N)
    pub fn new_ksg<'a>(
        x: impl Into<ArrayView1<'a, f64>>,
        y: impl Into<ArrayView1<'a, f64>>,
        k: impl NeighborCount,
    ) -> Result<KsgMutualInformation> {
        KsgMutualInformation::new(x.into(), y.into(), k)
    }

    /// Creates a KSG estimator for I(X;Y|Z)
    ///
    /// # Arguments
    ///
    /// * `x`, `y` - Paired observations of the two variables
    /// * `cond` - Observations of the conditioning variable
    /// * `k` - Number of nearest neighbors (1 <= k < N)
    pub fn new_ksg_conditional<'a>(
        x: impl Into<ArrayView1<'a, f64>>,
        y: impl Into<ArrayView1<'a, f64>>,
        cond: impl Into<ArrayView1<'a, f64>>,
        k: impl NeighborCount,
    ) -> Result<KsgConditionalMutualInformation> {
        KsgConditionalMutualInformation::new(x.into(), y.into(), cond.into(), k)
    }
}

/// Estimate the mutual information between `x` and `y` in nats.
///
/// The result may be slightly negative for (nearly) independent variables;
/// that is finite-sample noise, not an error.
pub fn estimate_single_mi(x: &[f64], y: &[f64], k: impl NeighborCount) -> Result<f64> {
    Ok(MutualInformation::new_ksg(x, y, k)?.global_value())
}

/// Estimate the mutual information between `x` and `y` conditioned on `cond`, in nats.
pub fn estimate_conditional_mi(
    x: &[f64],
    y: &[f64],
    cond: &[f64],
    k: impl NeighborCount,
) -> Result<f64> {
    Ok(MutualInformation::new_ksg_conditional(x, y, cond, k)?.global_value())
}
