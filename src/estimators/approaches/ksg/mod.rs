// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// KSG (Kraskov–Stögbauer–Grassberger) nearest-neighbor estimators and their
// counting and digamma helpers.

pub mod aggregate;
pub mod ksg_cmi;
pub mod ksg_mi;
pub mod utils;

pub use ksg_cmi::{ConditionalCounts, KsgConditionalMutualInformation};
pub use ksg_mi::KsgMutualInformation;
