//! Line-level parsing.

use spanwise_core::Position;

use crate::errors::EdgeListError;

const NODE_KEYWORD: &str = "node";
const COMMENT: char = '#';

/// One meaningful line of an edge list.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Line<'a> {
    /// A node declaration.
    Node {
        id: &'a str,
        position: Option<Position>,
    },
    /// An edge between two ids.
    Edge { left: &'a str, right: &'a str },
}

/// Parses line `number` (one-based). Returns `Ok(None)` for blank and
/// comment-only lines.
///
/// A line whose first token is `node` is always a declaration, so a node
/// literally called `node` can only appear as the second endpoint of an
/// edge.
pub(crate) fn parse_line(number: usize, raw: &str) -> Result<Option<Line<'_>>, EdgeListError> {
    let content = raw
        .split_once(COMMENT)
        .map_or(raw, |(before, _)| before)
        .trim();
    if content.is_empty() {
        return Ok(None);
    }

    let tokens: Vec<&str> = content.split_whitespace().collect();
    let line = match *tokens.as_slice() {
        [NODE_KEYWORD, id] => Line::Node { id, position: None },
        [NODE_KEYWORD, id, x, y] => Line::Node {
            id,
            position: Some(Position {
                x: coordinate(number, x)?,
                y: coordinate(number, y)?,
            }),
        },
        [NODE_KEYWORD, ..] => return Err(malformed(number, content)),
        [left, right] if left == right => {
            return Err(EdgeListError::SelfLoop {
                line: number,
                node: left.to_owned(),
            });
        }
        [left, right] => Line::Edge { left, right },
        _ => return Err(malformed(number, content)),
    };
    Ok(Some(line))
}

fn coordinate(line: usize, token: &str) -> Result<f64, EdgeListError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| EdgeListError::InvalidCoordinate {
            line,
            value: token.to_owned(),
        })
}

fn malformed(line: usize, content: &str) -> EdgeListError {
    EdgeListError::MalformedLine {
        line,
        content: content.to_owned(),
    }
}
