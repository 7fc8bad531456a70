//! Graph nodes and their optional layout coordinates.

/// Planar coordinates attached to a node.
///
/// Positions are layout hints for downstream renderers; no algorithm reads
/// them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// A node identifier together with its optional [`Position`].
#[derive(Clone, Debug, PartialEq)]
pub struct Node<N> {
    id: N,
    position: Option<Position>,
}

impl<N> Node<N> {
    /// Creates a node without coordinates.
    #[must_use]
    pub const fn new(id: N) -> Self {
        Self { id, position: None }
    }

    /// Creates a node placed at `(x, y)`.
    #[must_use]
    pub const fn positioned(id: N, x: f64, y: f64) -> Self {
        Self {
            id,
            position: Some(Position { x, y }),
        }
    }

    /// Creates a node with an optional position.
    #[must_use]
    pub const fn with_position(id: N, position: Option<Position>) -> Self {
        Self { id, position }
    }

    /// Returns the node identifier.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> &N { &self.id }

    /// Returns the node coordinates, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn position(&self) -> Option<Position> { self.position }
}
