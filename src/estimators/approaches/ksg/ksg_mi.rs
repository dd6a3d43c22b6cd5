// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use log::debug;
use ndarray::{Array1, ArrayView1};

use super::aggregate::mi_local_terms;
use super::utils::{NeighborCount, marginal_counts, normalize_mi, validate_base, validate_k};
use crate::error::{EstimatorError, Result, X_Y_DIFFERENT_LENGTH};
use crate::estimators::approaches::common_nd::dataset::NdDataset;
use crate::estimators::traits::{GlobalValue, LocalValues, MutualInformationEstimator};

/// Kraskov–Stögbauer–Grassberger (KSG, algorithm 1) mutual information estimator
///
/// I_hat = psi(k) - < psi(n_x + 1) + psi(n_y + 1) > + psi(N)
///
/// where the k-th neighbor radius of each point is taken in the joint (x, y)
/// space under the max-norm, and n_x, n_y count the other points strictly
/// inside that radius in the x and y projections.
pub struct KsgMutualInformation {
    pub nd: NdDataset<2>,
    pub k: usize,
    pub base: f64,
}

impl KsgMutualInformation {
    /// Validate the inputs and build the joint (x, y) dataset.
    ///
    /// Fails with [`EstimatorError::LengthMismatch`] if `x` and `y` differ in
    /// length, [`EstimatorError::TypeMismatch`] for a fractional `k` and
    /// [`EstimatorError::InvalidParameter`] unless `1 <= k < N`.
    pub fn new<'a>(
        x: ArrayView1<'a, f64>,
        y: ArrayView1<'a, f64>,
        k: impl NeighborCount,
    ) -> Result<Self> {
        if x.len() != y.len() {
            return Err(EstimatorError::LengthMismatch(X_Y_DIFFERENT_LENGTH));
        }
        let k = validate_k(k, x.len())?;
        debug!("KSG mutual information: n={}, k={}", x.len(), k);

        let nd = NdDataset::<2>::from_columns([x, y]);
        Ok(Self { nd, k, base: std::f64::consts::E })
    }

    /// Set logarithm base (default e)
    pub fn with_base(mut self, base: f64) -> Result<Self> {
        self.base = validate_base(base)?;
        Ok(self)
    }

    /// Max-norm distance from each point to its k-th nearest joint neighbor.
    pub fn radii(&self) -> Vec<f64> {
        self.nd.kth_neighbor_radii_chebyshev(self.k)
    }

    /// Marginal neighbor counts `(n_x, n_y)` for every point.
    pub fn marginal_counts(&self) -> (Vec<usize>, Vec<usize>) {
        let radii = self.radii();
        let nx = marginal_counts(&self.nd.column(0), &radii);
        let ny = marginal_counts(&self.nd.column(1), &radii);
        (nx, ny)
    }

    /// Estimate mapped to the correlation scale, see [`normalize_mi`].
    ///
    /// The mapping is defined for nats, so the base setting is ignored here.
    pub fn normalized_value(&self) -> f64 {
        let (nx, ny) = self.marginal_counts();
        let nats = mi_local_terms(self.k, &nx, &ny).mean().unwrap_or(0.0);
        normalize_mi(nats)
    }
}

impl GlobalValue for KsgMutualInformation {
    fn global_value(&self) -> f64 {
        let mi = self.global_from_local();
        debug!("KSG mutual information estimate: {mi}");
        mi
    }
}

impl LocalValues for KsgMutualInformation {
    fn local_values(&self) -> Array1<f64> {
        let (nx, ny) = self.marginal_counts();
        let ln_base = self.base.ln();
        mi_local_terms(self.k, &nx, &ny).mapv(|v| v / ln_base)
    }
}

impl MutualInformationEstimator for KsgMutualInformation {}
