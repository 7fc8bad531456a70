//! Canonical edge keys.

/// Whether edges in a graph have a direction.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Orientation {
    /// Edges connect their endpoints symmetrically.
    #[default]
    Undirected,
    /// Edges point from their source to their target.
    Directed,
}

impl Orientation {
    /// Returns `true` for [`Orientation::Directed`].
    #[must_use]
    pub const fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }
}

/// The single key under which an edge and its weight are stored.
///
/// Undirected keys are canonicalised to `(min(u, v), max(u, v))` so that
/// inserting `(u, v)` and `(v, u)` addresses the same entry. Directed keys
/// keep the endpoints in the order given.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeKey<N> {
    source: N,
    target: N,
}

impl<N: Ord> EdgeKey<N> {
    /// Builds the key for the edge between `left` and `right`.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::{EdgeKey, Orientation};
    ///
    /// let forward = EdgeKey::new(3, 1, Orientation::Undirected);
    /// let backward = EdgeKey::new(1, 3, Orientation::Undirected);
    /// assert_eq!(forward, backward);
    /// assert_eq!(*forward.source(), 1);
    /// ```
    #[must_use]
    pub fn new(left: N, right: N, orientation: Orientation) -> Self {
        if orientation.is_directed() || left <= right {
            Self {
                source: left,
                target: right,
            }
        } else {
            Self {
                source: right,
                target: left,
            }
        }
    }
}

impl<N> EdgeKey<N> {
    /// Returns the first endpoint (the smaller one for undirected keys).
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> &N { &self.source }

    /// Returns the second endpoint (the larger one for undirected keys).
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> &N { &self.target }
}
