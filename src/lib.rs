// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # ksgmeasure
//!
//! Non-parametric estimation of mutual information (MI) and conditional mutual
//! information (CMI) between continuous random variables, using the
//! Kraskov–Stögbauer–Grassberger (KSG) k-nearest-neighbour estimator.
//!
//! ## Quick Start
//!
//! ```rust
//! use ksgmeasure::{estimate_conditional_mi, estimate_single_mi};
//!
//! let x = [0.1, 0.7, 0.3, 0.9, 0.5, 0.2, 0.8, 0.4];
//! let y = [0.2, 0.6, 0.35, 0.95, 0.4, 0.1, 0.85, 0.5];
//! let z = [0.5, 0.1, 0.9, 0.3, 0.7, 0.6, 0.2, 0.8];
//!
//! let mi = estimate_single_mi(&x, &y, 3).unwrap();
//! let cmi = estimate_conditional_mi(&x, &y, &z, 3).unwrap();
//! assert!(mi.is_finite() && cmi.is_finite());
//! ```
//!
//! ## Estimators
//!
//! | Measure | Joint space | Marginal counts |
//! |---------|-------------|-----------------|
//! | I(X;Y) | (x, y) | x, y (sorted binary search) |
//! | I(X;Y\|Z) | (x, y, z) | (x, z), (y, z) (KD-tree), z (sorted binary search) |
//!
//! Both are available as free functions ([`estimate_single_mi`],
//! [`estimate_conditional_mi`]) and as estimator types exposing local
//! (pointwise) values, see [`estimators::mutual_information::MutualInformation`].
//!
//! ## Feature Flags
//!
//! - `parallel` (default): run the per-point neighbour search on rayon's thread pool.
//!
//! Results are in nats unless a different logarithm base is selected with
//! `with_base`.

pub mod error;
pub mod estimators;

pub use error::{EstimatorError, Result};
pub use estimators::approaches::ksg::utils::{NeighborCount, count_within, normalize_mi};
pub use estimators::mutual_information::{
    DEFAULT_K, MutualInformation, estimate_conditional_mi, estimate_single_mi,
};
