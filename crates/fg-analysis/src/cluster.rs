//! Connected groups of foragers in a proximity matrix.

use std::collections::VecDeque;

use crate::ProximityMatrix;

/// Partition the nodes of `matrix` into clusters: connected components of
/// the graph whose edges have weight `>= interval`.
///
/// Every node lands in exactly one cluster.  Clusters are ordered by their
/// lowest member and members are listed in ascending order.
pub fn find_clusters(matrix: &ProximityMatrix, interval: f64) -> Vec<Vec<usize>> {
    let n = matrix.len();
    let mut visited = vec![false; n];
    let mut clusters = Vec::new();
    let mut queue = VecDeque::new();

    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        queue.push_back(start);
        let mut members = Vec::new();

        while let Some(node) = queue.pop_front() {
            members.push(node);
            for (next, &w) in matrix.row(node).iter().enumerate() {
                if !visited[next] && w >= interval {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
        members.sort_unstable();
        clusters.push(members);
    }
    clusters
}

/// Size of every cluster, in [`find_clusters`] order.
pub fn cluster_sizes(matrix: &ProximityMatrix, interval: f64) -> Vec<usize> {
    find_clusters(matrix, interval).iter().map(Vec::len).collect()
}

/// Size of the biggest cluster; 0 for an empty matrix.
pub fn largest_cluster(matrix: &ProximityMatrix, interval: f64) -> usize {
    cluster_sizes(matrix, interval).into_iter().max().unwrap_or(0)
}
