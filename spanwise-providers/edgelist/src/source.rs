//! Edge-list backed graph source.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use indexmap::IndexMap;
use spanwise_core::{AdjacencyGraph, GraphBackend, Node, Orientation, Position};

use crate::{
    errors::EdgeListError,
    parse::{Line, parse_line},
};

#[derive(Default)]
struct PendingNode {
    position: Option<Position>,
    declared: bool,
}

/// An unweighted graph read from an edge list.
///
/// Nodes are registered in order of first mention, whether that is a
/// declaration or an edge. A declaration supplies the node's position even
/// when an earlier edge already mentioned it; later declarations of the
/// same id are ignored. Repeated edges collapse into one.
#[derive(Clone, Debug)]
pub struct EdgeListSource {
    name: String,
    graph: AdjacencyGraph<String>,
}

impl EdgeListSource {
    /// Reads an edge list from `reader`.
    ///
    /// # Errors
    /// Returns [`EdgeListError::MalformedLine`],
    /// [`EdgeListError::InvalidCoordinate`] or [`EdgeListError::SelfLoop`]
    /// for bad lines, [`EdgeListError::EmptyInput`] when no node is
    /// declared, and [`EdgeListError::Io`] when reading fails.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    ///
    /// use spanwise_core::{GraphBackend, Orientation};
    /// use spanwise_providers_edgelist::EdgeListSource;
    ///
    /// let input = "node a 0 0\nnode b 1 0\na b\nb c # c is auto-registered\n";
    /// let source =
    ///     EdgeListSource::try_from_reader("demo", Cursor::new(input), Orientation::Undirected)?;
    /// assert_eq!(source.name(), "demo");
    /// assert_eq!(source.graph().node_count(), 3);
    /// assert_eq!(source.graph().edge_count(), 2);
    /// # Ok::<(), spanwise_providers_edgelist::EdgeListError>(())
    /// ```
    pub fn try_from_reader(
        name: impl Into<String>,
        reader: impl BufRead,
        orientation: Orientation,
    ) -> Result<Self, EdgeListError> {
        let mut nodes: IndexMap<String, PendingNode> = IndexMap::new();
        let mut edges: Vec<(String, String)> = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let raw = line?;
            match parse_line(index + 1, &raw)? {
                None => {}
                Some(Line::Node { id, position }) => {
                    let pending = nodes.entry(id.to_owned()).or_default();
                    if !pending.declared {
                        pending.declared = true;
                        pending.position = position;
                    }
                }
                Some(Line::Edge { left, right }) => {
                    nodes.entry(left.to_owned()).or_default();
                    nodes.entry(right.to_owned()).or_default();
                    edges.push((left.to_owned(), right.to_owned()));
                }
            }
        }

        if nodes.is_empty() {
            return Err(EdgeListError::EmptyInput);
        }

        let mut graph = AdjacencyGraph::new(orientation);
        for (id, pending) in nodes {
            graph.add_node(Node::with_position(id, pending.position));
        }
        for (left, right) in &edges {
            graph.add_edge(left, right);
        }

        Ok(Self {
            name: name.into(),
            graph,
        })
    }

    /// Reads the edge list at `path`, naming the source after the file
    /// stem.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Io`] when the file cannot be opened, plus
    /// every error [`EdgeListSource::try_from_reader`] reports.
    pub fn open(path: &Path, orientation: Orientation) -> Result<Self, EdgeListError> {
        let file = File::open(path)?;
        let name = path
            .file_stem()
            .map_or_else(|| "graph".to_owned(), |stem| stem.to_string_lossy().into_owned());
        Self::try_from_reader(name, BufReader::new(file), orientation)
    }

    /// Returns the source name.
    #[must_use]
    #[rustfmt::skip]
    pub fn name(&self) -> &str { &self.name }

    /// Returns the parsed graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph(&self) -> &AdjacencyGraph<String> { &self.graph }

    /// Consumes the source, returning the parsed graph.
    #[must_use]
    pub fn into_graph(self) -> AdjacencyGraph<String> {
        self.graph
    }
}
