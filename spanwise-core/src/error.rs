//! Error types for the spanwise core library.
//!
//! Every public error enum carries a stable machine-readable code so the CLI
//! and log consumers can match on failures without parsing messages.

use std::fmt;

use thiserror::Error;

use crate::mst::MstAlgorithm;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while building or querying a [`crate::WeightedGraph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A referenced node id is not registered in the graph.
    #[error("node `{node}` is not registered in the graph")]
    UnknownNode {
        /// Rendered id of the missing node.
        node: String,
    },
    /// A weight was requested for a pair of nodes with no edge between them.
    #[error("no edge exists between `{left}` and `{right}`")]
    MissingEdge {
        /// Rendered id of the first endpoint.
        left: String,
        /// Rendered id of the second endpoint.
        right: String,
    },
    /// An edge weight was NaN or infinite.
    #[error("edge (`{left}`, `{right}`) has a non-finite weight")]
    NonFiniteWeight {
        /// Rendered id of the first endpoint.
        left: String,
        /// Rendered id of the second endpoint.
        right: String,
    },
}

impl GraphError {
    pub(crate) fn unknown_node(node: &impl fmt::Display) -> Self {
        Self::UnknownNode {
            node: node.to_string(),
        }
    }
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A referenced node id is not registered in the graph.
        UnknownNode => UnknownNode { .. } => "GRAPH_UNKNOWN_NODE",
        /// A weight was requested for a missing edge.
        MissingEdge => MissingEdge { .. } => "GRAPH_MISSING_EDGE",
        /// An edge weight was NaN or infinite.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
    }
}

/// Errors returned while computing a minimum spanning tree or forest.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// A spanning tree was requested for a directed graph.
    #[error("{algorithm} requires an undirected graph")]
    DirectedGraph {
        /// Algorithm that rejected the input.
        algorithm: MstAlgorithm,
    },
    /// The requested start node is not registered in the graph.
    #[error("start node `{node}` is not registered in the graph")]
    UnknownNode {
        /// Rendered id of the missing node.
        node: String,
    },
    /// A graph lookup failed while assembling the result tree.
    #[error("graph operation failed: {source}")]
    Graph {
        /// Underlying graph error.
        #[from]
        source: GraphError,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// A spanning tree was requested for a directed graph.
        DirectedGraph => DirectedGraph { .. } => "MST_DIRECTED_GRAPH",
        /// The requested start node is not registered in the graph.
        UnknownNode => UnknownNode { .. } => "MST_UNKNOWN_NODE",
        /// A graph lookup failed while assembling the result tree.
        GraphFailure => Graph { .. } => "MST_GRAPH_FAILURE",
    }
}

impl MstError {
    /// Retrieve the inner [`GraphErrorCode`] when the failure came from a graph lookup.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph { source } => Some(source.code()),
            _ => None,
        }
    }
}
