// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Digamma combination of per-point neighbor counts.
//!
//! All digamma arguments are at least 1 here: counts are non-negative and
//! enter as `count + 1`, `k >= 1` and `N > k`.

use ndarray::Array1;
use statrs::function::gamma::digamma;

/// Per-point KSG (algorithm 1) mutual information terms:
///
/// i_i = psi(k) + psi(N) - psi(n_x,i + 1) - psi(n_y,i + 1)
///
/// Their mean is the global estimate.
pub fn mi_local_terms(k: usize, nx: &[usize], ny: &[usize]) -> Array1<f64> {
    assert_eq!(nx.len(), ny.len(), "marginal counts must have equal length");
    let n = nx.len();
    let constant = digamma(k as f64) + digamma(n as f64);
    nx.iter()
        .zip(ny)
        .map(|(&a, &b)| constant - digamma(a as f64 + 1.0) - digamma(b as f64 + 1.0))
        .collect()
}

/// Per-point KSG conditional mutual information terms:
///
/// i_i = psi(k) - psi(n_xz,i + 1) - psi(n_yz,i + 1) + psi(n_z,i + 1)
pub fn cmi_local_terms(k: usize, nxz: &[usize], nyz: &[usize], nz: &[usize]) -> Array1<f64> {
    assert!(
        nxz.len() == nyz.len() && nyz.len() == nz.len(),
        "marginal counts must have equal length"
    );
    let psi_k = digamma(k as f64);
    nxz.iter()
        .zip(nyz)
        .zip(nz)
        .map(|((&a, &b), &c)| {
            psi_k - digamma(a as f64 + 1.0) - digamma(b as f64 + 1.0) + digamma(c as f64 + 1.0)
        })
        .collect()
}
