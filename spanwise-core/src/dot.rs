//! Graphviz DOT rendering for weighted graphs.
//!
//! The output lists every node (with a pinned `pos` attribute when the node
//! carries a position) followed by every edge labelled with its weight.
//! Weights within `1e-9` of an integer are printed without a fractional
//! part.

use std::{fmt, io};

use crate::graph::{GraphBackend, WeightedGraph};

const INTEGER_TOLERANCE: f64 = 1e-9;

/// Displays a [`WeightedGraph`] in DOT syntax.
///
/// # Examples
/// ```
/// use spanwise_core::{AdjacencyGraph, Position, WeightedGraph, dot::Dot};
///
/// let mut graph = WeightedGraph::<AdjacencyGraph<&str>>::undirected();
/// graph.add_node("a", Some(Position { x: 1.0, y: 2.5 }));
/// graph.add_node("b", None);
/// graph.add_weighted_edge(&"a", &"b", 3.0)?;
///
/// let expected = "graph G {\n\"a\" [pos=\"1,2.5!\"];\n\"b\";\n\"a\" -- \"b\" [label=\"3\"];\n}\n";
/// assert_eq!(Dot::new(&graph).to_string(), expected);
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[derive(Debug)]
pub struct Dot<'g, G: GraphBackend> {
    graph: &'g WeightedGraph<G>,
}

impl<'g, G: GraphBackend> Dot<'g, G> {
    /// Wraps `graph` for rendering.
    #[must_use]
    pub const fn new(graph: &'g WeightedGraph<G>) -> Self {
        Self { graph }
    }
}

impl<G: GraphBackend> fmt::Display for Dot<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (header, connector) = if self.graph.is_directed() {
            ("digraph G {", "->")
        } else {
            ("graph G {", "--")
        };
        writeln!(f, "{header}")?;
        for node in self.graph.nodes() {
            let id = Quoted(node.id());
            match node.position() {
                Some(position) => {
                    writeln!(f, "{id} [pos=\"{},{}!\"];", position.x, position.y)?;
                }
                None => writeln!(f, "{id};")?,
            }
        }
        for (source, target, weight) in self.graph.weighted_edges() {
            writeln!(
                f,
                "{} {connector} {} [label=\"{}\"];",
                Quoted(source),
                Quoted(target),
                WeightLabel(weight),
            )?;
        }
        writeln!(f, "}}")
    }
}

/// Renders `graph` as a DOT document.
#[must_use]
pub fn render_dot<G: GraphBackend>(graph: &WeightedGraph<G>) -> String {
    Dot::new(graph).to_string()
}

/// Writes `graph` as a DOT document to `writer`.
///
/// # Errors
/// Propagates any I/O error from `writer`.
pub fn write_dot<G: GraphBackend>(
    graph: &WeightedGraph<G>,
    mut writer: impl io::Write,
) -> io::Result<()> {
    write!(writer, "{}", Dot::new(graph))?;
    writer.flush()
}

/// Formats an edge weight the way DOT labels show it.
///
/// # Examples
/// ```
/// use spanwise_core::dot::format_weight;
///
/// assert_eq!(format_weight(42.0), "42");
/// assert_eq!(format_weight(2.5), "2.5");
/// ```
#[must_use]
pub fn format_weight(weight: f64) -> String {
    WeightLabel(weight).to_string()
}

struct WeightLabel(f64);

impl fmt::Display for WeightLabel {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "only reached when the weight is already integral and finite"
    )]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let truncated = self.0.trunc();
        if self.0.is_finite()
            && self.0.fract().abs() < INTEGER_TOLERANCE
            && truncated.abs() < 9.0e15
        {
            write!(f, "{}", truncated as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A node id wrapped in double quotes, with `"` and `\` escaped.
struct Quoted<'a, N>(&'a N);

impl<N: fmt::Display> fmt::Display for Quoted<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.0.to_string();
        f.write_str("\"")?;
        for ch in rendered.chars() {
            if matches!(ch, '"' | '\\') {
                f.write_str("\\")?;
            }
            write!(f, "{ch}")?;
        }
        f.write_str("\"")
    }
}
