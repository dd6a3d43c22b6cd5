// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use kiddo::traits::DistanceMetric;
use kiddo::{ImmutableKdTree, SquaredEuclidean};
use log::trace;
use ndarray::ArrayView1;
use std::num::NonZeroUsize;

use super::map_indices;

/// Relative slack added to Euclidean candidate radii so that rounding in the
/// squared-distance sums can never drop a point that is inside the max-norm ball.
const CANDIDATE_SLACK: f64 = 1e-6;

/// Chebyshev distance metric (L-infinity norm) for kiddo.
pub struct Chebyshev;

impl<const K: usize> DistanceMetric<f64, K> for Chebyshev {
    fn dist(a: &[f64; K], b: &[f64; K]) -> f64 {
        let mut max = 0.0;
        for i in 0..K {
            let diff = (a[i] - b[i]).abs();
            if diff > max {
                max = diff;
            }
        }
        max
    }

    fn dist1(a: f64, b: f64) -> f64 {
        (a - b).abs()
    }
}

/// Shared N-D dataset container with KD-tree for fast neighbor queries.
///
/// The tree is only ever queried with [`SquaredEuclidean`]; max-norm results
/// are obtained by filtering the Euclidean candidates with [`Chebyshev`], which
/// keeps every answer exact.
pub struct NdDataset<const K: usize> {
    pub points: Vec<[f64; K]>,
    pub n: usize,
    pub tree: ImmutableKdTree<f64, K>,
}

impl<const K: usize> NdDataset<K> {
    pub fn from_points(points: Vec<[f64; K]>) -> Self {
        let n = points.len();
        let tree = ImmutableKdTree::new_from_slice(&points);
        Self { points, n, tree }
    }

    /// Build joint points from K equally long columns (one per variable).
    pub fn from_columns(columns: [ArrayView1<'_, f64>; K]) -> Self {
        let n = columns.first().map_or(0, |c| c.len());
        assert!(
            columns.iter().all(|c| c.len() == n),
            "all columns must have the same length"
        );
        let points = (0..n)
            .map(|i| std::array::from_fn(|d| columns[d][i]))
            .collect();
        Self::from_points(points)
    }

    /// Copy of dimension `dim` across all points.
    pub fn column(&self, dim: usize) -> Vec<f64> {
        assert!(dim < K, "dimension out of range");
        self.points.iter().map(|p| p[dim]).collect()
    }

    /// Project onto the dimensions listed in `dims`, keeping point order.
    pub fn project<const M: usize>(&self, dims: [usize; M]) -> NdDataset<M> {
        assert!(dims.iter().all(|&d| d < K), "dimension out of range");
        let points = self
            .points
            .iter()
            .map(|p| std::array::from_fn(|j| p[dims[j]]))
            .collect();
        NdDataset::<M>::from_points(points)
    }

    /// Max-norm distance to the k-th nearest neighbor per point (self excluded).
    ///
    /// Exact: the Euclidean k-th distance `r` bounds the max-norm k-th distance,
    /// and every point within max-norm `r` lies within Euclidean `sqrt(K) * r`,
    /// so the k-th order statistic is selected from that candidate set.
    pub fn kth_neighbor_radii_chebyshev(&self, k: usize) -> Vec<f64> {
        assert!(k >= 1);
        if self.n == 0 {
            return Vec::new();
        }
        assert!(k < self.n, "k must be <= N-1 for self-queries");

        let radii = map_indices(self.n, |i| self.kth_radius_at(i, k));
        trace!("computed {} max-norm k-NN radii in {}-D (k={})", radii.len(), K, k);
        radii
    }

    /// Number of other points strictly closer than `radii[i]` (max-norm) to point i.
    ///
    /// A zero radius yields zero, coincident points included.
    pub fn count_strictly_within(&self, radii: &[f64]) -> Vec<usize> {
        assert_eq!(radii.len(), self.n, "one radius per point required");
        map_indices(self.n, |i| self.count_at(i, radii[i]))
    }

    fn kth_radius_at(&self, i: usize, k: usize) -> f64 {
        let p = &self.points[i];
        // k + 1 neighbors because the query point itself is part of the tree
        let mut neigh = self
            .tree
            .nearest_n::<SquaredEuclidean>(p, NonZeroUsize::MIN.saturating_add(k));
        let kth = neigh.remove(k);
        let (dist2, _idx): (f64, u64) = kth.into();

        let mut dists: Vec<f64> = self
            .tree
            .within_unsorted::<SquaredEuclidean>(p, candidate_bound::<K>(dist2))
            .into_iter()
            .map(|nn| {
                let (_d2, idx): (f64, u64) = nn.into();
                <Chebyshev as DistanceMetric<f64, K>>::dist(p, &self.points[idx as usize])
            })
            .collect();
        // Distances include self at 0.0, so index k is the k-th among the others
        dists.select_nth_unstable_by(k, f64::total_cmp);
        dists[k]
    }

    fn count_at(&self, i: usize, radius: f64) -> usize {
        if radius.is_nan() || radius <= 0.0 {
            return 0;
        }
        let p = &self.points[i];
        let inside = self
            .tree
            .within_unsorted::<SquaredEuclidean>(p, candidate_bound::<K>(radius * radius))
            .into_iter()
            .map(|nn| {
                let (_d2, idx): (f64, u64) = nn.into();
                <Chebyshev as DistanceMetric<f64, K>>::dist(p, &self.points[idx as usize])
            })
            .filter(|&d| d < radius)
            .count();
        // the query point itself is always inside a positive radius
        inside.saturating_sub(1)
    }
}

/// Squared Euclidean radius covering the max-norm ball whose squared radius is `r2`.
fn candidate_bound<const K: usize>(r2: f64) -> f64 {
    K as f64 * r2 * (1.0 + CANDIDATE_SLACK) + f64::MIN_POSITIVE
}
