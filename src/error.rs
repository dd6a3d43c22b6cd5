// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error type shared by all estimators.
//!
//! Every variant is a caller-usage error raised before any numeric work,
//! so a failed constructor never leaves partial results behind.

use thiserror::Error;

/// Errors raised while validating estimator inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EstimatorError {
    /// Two sequences that must correspond element-wise differ in length.
    /// The message names the offending pair.
    #[error("{0}")]
    LengthMismatch(&'static str),

    /// A parameter is outside its valid range (e.g. `k >= N` or `k <= 0`).
    #[error("{0}")]
    InvalidParameter(String),

    /// A parameter has the wrong numeric kind (e.g. a fractional `k`).
    #[error("{0}")]
    TypeMismatch(String),
}

pub type Result<T> = std::result::Result<T, EstimatorError>;

pub(crate) const X_Y_DIFFERENT_LENGTH: &str = "x and y must have same length";
pub(crate) const X_COND_DIFFERENT_LENGTH: &str = "x and cond must have same length";
pub(crate) const K_TOO_LARGE: &str = "k must be smaller than number of observations";
