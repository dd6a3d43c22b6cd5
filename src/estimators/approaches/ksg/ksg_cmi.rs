// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use log::{debug, trace};
use ndarray::{Array1, ArrayView1};

use super::aggregate::cmi_local_terms;
use super::utils::{NeighborCount, marginal_counts, normalize_mi, validate_base, validate_k};
use crate::error::{EstimatorError, Result, X_COND_DIFFERENT_LENGTH, X_Y_DIFFERENT_LENGTH};
use crate::estimators::approaches::common_nd::dataset::NdDataset;
use crate::estimators::traits::{ConditionalMutualInformationEstimator, GlobalValue, LocalValues};

/// Per-point neighbor counts of the conditional estimator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalCounts {
    /// Counts in the (x, cond) subspace.
    pub nxz: Vec<usize>,
    /// Counts in the (y, cond) subspace.
    pub nyz: Vec<usize>,
    /// Counts in the cond subspace.
    pub nz: Vec<usize>,
}

/// KSG conditional mutual information estimator I(X;Y|Z)
///
/// I_hat = psi(k) - < psi(n_xz + 1) + psi(n_yz + 1) - psi(n_z + 1) >
///
/// Radii come from the joint (x, y, z) space. The two-dimensional counts use
/// the KD-tree of the projected dataset, the z counts a sorted binary search.
pub struct KsgConditionalMutualInformation {
    pub nd: NdDataset<3>,
    pub k: usize,
    pub base: f64,
}

impl KsgConditionalMutualInformation {
    /// Validate the inputs and build the joint (x, y, cond) dataset.
    ///
    /// The x/y length check runs before the x/cond one, so a caller passing
    /// three mismatched sequences is told about x and y first.
    pub fn new<'a>(
        x: ArrayView1<'a, f64>,
        y: ArrayView1<'a, f64>,
        cond: ArrayView1<'a, f64>,
        k: impl NeighborCount,
    ) -> Result<Self> {
        if x.len() != y.len() {
            return Err(EstimatorError::LengthMismatch(X_Y_DIFFERENT_LENGTH));
        }
        if x.len() != cond.len() {
            return Err(EstimatorError::LengthMismatch(X_COND_DIFFERENT_LENGTH));
        }
        let k = validate_k(k, x.len())?;
        debug!("KSG conditional mutual information: n={}, k={}", x.len(), k);

        let nd = NdDataset::<3>::from_columns([x, y, cond]);
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

    pub fn marginal_counts(&self) -> ConditionalCounts {
        let radii = self.radii();
        let nxz = self.nd.project([0, 2]).count_strictly_within(&radii);
        let nyz = self.nd.project([1, 2]).count_strictly_within(&radii);
        let nz = marginal_counts(&self.nd.column(2), &radii);
        trace!("conditional counts computed for {} points", nz.len());
        ConditionalCounts { nxz, nyz, nz }
    }

    /// Estimate mapped to the correlation scale, see [`normalize_mi`].
    pub fn normalized_value(&self) -> f64 {
        let counts = self.marginal_counts();
        let nats = cmi_local_terms(self.k, &counts.nxz, &counts.nyz, &counts.nz)
            .mean()
            .unwrap_or(0.0);
        normalize_mi(nats)
    }
}

impl GlobalValue for KsgConditionalMutualInformation {
    fn global_value(&self) -> f64 {
        let cmi = self.global_from_local();
        debug!("KSG conditional mutual information estimate: {cmi}");
        cmi
    }
}

impl LocalValues for KsgConditionalMutualInformation {
    fn local_values(&self) -> Array1<f64> {
        let counts = self.marginal_counts();
        let ln_base = self.base.ln();
        cmi_local_terms(self.k, &counts.nxz, &counts.nyz, &counts.nz).mapv(|v| v / ln_base)
    }
}

impl ConditionalMutualInformationEstimator for KsgConditionalMutualInformation {}
