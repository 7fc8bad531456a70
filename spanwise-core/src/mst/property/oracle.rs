//! Sequential Kruskal oracle for MST property verification.
//!
//! Works directly on fixture triples with a plain parent vector, sharing no
//! code with the algorithms under test.

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct OracleForest {
    /// Total weight of the minimum spanning forest.
    pub total_weight: f64,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of connected components of the input.
    pub component_count: usize,
    /// Component root of every node.
    roots: Vec<usize>,
    /// Forest edges in acceptance order.
    edges: Vec<(usize, usize, f64)>,
}

impl OracleForest {
    /// Returns `true` when `left` and `right` share a component.
    pub(super) fn connected(&self, left: usize, right: usize) -> bool {
        self.roots[left] == self.roots[right]
    }

    /// Number of nodes in `node`'s component.
    pub(super) fn component_size(&self, node: usize) -> usize {
        let root = self.roots[node];
        self.roots.iter().filter(|&&other| other == root).count()
    }

    /// Minimum spanning tree weight of `node`'s component alone.
    pub(super) fn component_weight(&self, node: usize) -> f64 {
        let root = self.roots[node];
        self.edges
            .iter()
            .filter(|&&(source, _, _)| self.roots[source] == root)
            .map(|&(_, _, weight)| weight)
            .sum()
    }
}

/// Computes a minimum spanning forest using sequential Kruskal.
///
/// Sorts by `(weight, source, target)` with an unstable sort and
/// union-by-size, so ties resolve differently from the library's stable
/// sort while the total weight stays the same.
pub(super) fn sequential_kruskal(node_count: usize, edges: &[(usize, usize, f64)]) -> OracleForest {
    let mut sorted = edges.to_vec();
    sorted.sort_unstable_by(|left, right| {
        left.2
            .total_cmp(&right.2)
            .then(left.0.cmp(&right.0))
            .then(left.1.cmp(&right.1))
    });

    let mut parent: Vec<usize> = (0..node_count).collect();
    let mut size = vec![1_usize; node_count];
    let mut forest = Vec::new();
    let mut total_weight = 0.0;

    for (source, target, weight) in sorted {
        let mut left = find_root(&mut parent, source);
        let mut right = find_root(&mut parent, target);
        if left == right {
            continue;
        }
        if size[left] < size[right] {
            std::mem::swap(&mut left, &mut right);
        }
        parent[right] = left;
        size[left] += size[right];
        total_weight += weight;
        forest.push((source, target, weight));
    }

    let roots: Vec<usize> = (0..node_count)
        .map(|node| find_root(&mut parent, node))
        .collect();
    OracleForest {
        total_weight,
        edge_count: forest.len(),
        component_count: node_count - forest.len(),
        roots,
        edges: forest,
    }
}
