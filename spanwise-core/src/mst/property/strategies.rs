//! Strategy builders for MST property-based tests.
//!
//! Each generator draws a node count and a set of distinct canonical edges
//! from a seeded [`SmallRng`], so a failing case can be replayed from its
//! distribution and seed alone.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{MstFixture, WeightDistribution};

/// Minimum node count for most generated graphs.
const MIN_NODES: usize = 4;
/// Maximum node count for most generated graphs.
const MAX_NODES: usize = 48;
/// Maximum node count for dense graphs. Reverse-delete costs
/// `O(E * (V + E))`, so dense inputs stay small.
const DENSE_MAX_NODES: usize = 24;

/// Generates MST fixtures covering all five weight distributions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
///
/// Useful for targeted rstest cases where the distribution is chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

/// Draws a continuous weight in `[0.1, 100.0)`.
fn continuous_weight(rng: &mut SmallRng) -> f64 {
    rng.gen_range(0.1..100.0)
}

// ── Probabilistic graphs ────────────────────────────────────────────────

/// Adds each unique node pair with a probability sampled from
/// `edge_prob_range`, weighting it with `weight_generator`.
fn generate_probabilistic_graph(
    rng: &mut SmallRng,
    max_nodes: usize,
    edge_prob_range: (f64, f64),
    distribution: WeightDistribution,
    mut weight_generator: impl FnMut(&mut SmallRng) -> f64,
) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let edge_probability: f64 = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut builder = EdgeBuilder::default();

    for (source, target) in all_pairs(0, node_count) {
        if rng.gen_bool(edge_probability) {
            let weight = weight_generator(rng);
            builder.push(source, target, weight);
        }
    }
    if builder.edges.is_empty() {
        let weight = weight_generator(rng);
        builder.push(0, 1, weight);
    }

    builder.finish(node_count, distribution)
}

fn generate_unique_weights(rng: &mut SmallRng) -> MstFixture {
    generate_probabilistic_graph(
        rng,
        MAX_NODES,
        (0.2, 0.6),
        WeightDistribution::Unique,
        continuous_weight,
    )
}

/// Draws every weight from a pool of one to three small integers, so most
/// edges tie with many others.
fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<f64> = (0..pool_size)
        .map(|_| f64::from(rng.gen_range(1_u8..=10)))
        .collect();

    generate_probabilistic_graph(
        rng,
        MAX_NODES,
        (0.3, 0.7),
        WeightDistribution::ManyIdentical,
        move |r| pool[r.gen_range(0..pool.len())],
    )
}

fn generate_dense(rng: &mut SmallRng) -> MstFixture {
    generate_probabilistic_graph(
        rng,
        DENSE_MAX_NODES,
        (0.7, 0.95),
        WeightDistribution::Dense,
        continuous_weight,
    )
}

// ── Sparse ──────────────────────────────────────────────────────────────

/// Builds a random spanning path (guaranteeing connectivity), then adds
/// roughly `0.5n` to `n` extra edges.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut builder = EdgeBuilder::default();

    let mut order: Vec<usize> = (0..node_count).collect();
    shuffle(&mut order, rng);
    for pair in order.windows(2) {
        let weight = continuous_weight(rng);
        builder.push(pair[0], pair[1], weight);
    }

    let extra_count = rng.gen_range(node_count / 2..=node_count);
    for _ in 0..extra_count {
        let source = rng.gen_range(0..node_count);
        let target = rng.gen_range(0..node_count);
        let weight = continuous_weight(rng);
        builder.push(source, target, weight);
    }

    builder.finish(node_count, WeightDistribution::Sparse)
}

// ── Disconnected ────────────────────────────────────────────────────────

/// Builds two to five components of three to ten nodes each, with no
/// cross-component edges. Each component is connected.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=5);
    let sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(3..=10))
        .collect();
    let node_count: usize = sizes.iter().sum();
    let mut builder = EdgeBuilder::default();
    let mut offset = 0;

    for &size in &sizes {
        for node in offset + 1..offset + size {
            let parent = rng.gen_range(offset..node);
            let weight = continuous_weight(rng);
            builder.push(parent, node, weight);
        }
        let edge_probability: f64 = rng.gen_range(0.2..=0.6);
        for (source, target) in all_pairs(offset, size) {
            if rng.gen_bool(edge_probability) {
                let weight = continuous_weight(rng);
                builder.push(source, target, weight);
            }
        }
        offset += size;
    }

    builder.finish(node_count, WeightDistribution::Disconnected)
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Accumulates distinct canonical edges; repeats and self-loops are
/// dropped.
#[derive(Default)]
struct EdgeBuilder {
    edges: Vec<(usize, usize, f64)>,
    seen: HashSet<(usize, usize)>,
}

impl EdgeBuilder {
    fn push(&mut self, left: usize, right: usize, weight: f64) {
        if left == right {
            return;
        }
        let pair = (left.min(right), left.max(right));
        if self.seen.insert(pair) {
            self.edges.push((pair.0, pair.1, weight));
        }
    }

    fn finish(self, node_count: usize, distribution: WeightDistribution) -> MstFixture {
        MstFixture {
            node_count,
            edges: self.edges,
            distribution,
        }
    }
}

/// Returns all unique undirected pairs `(offset + i, offset + j)` where
/// `i < j < size`.
fn all_pairs(offset: usize, size: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..size).flat_map(move |i| ((i + 1)..size).map(move |j| (offset + i, offset + j)))
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

// `ManyIdentical` is sampled more often than the others since ties are
// where the algorithms are most likely to diverge.
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}
