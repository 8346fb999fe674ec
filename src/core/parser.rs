//! Reader for the line-oriented graph problem format.
//!
//! ```text
//! <name>
//! <num_nodes>
//! <x_0> <y_0>
//! ...
//! <start_node> <goal_node>
//! <num_edges>
//! <u_0> <v_0> <w_0>
//! ...
//! ```
//!
//! Fields are read strictly in order; blank lines are not skipped. Anything
//! after the last declared edge is ignored.

use tracing::debug;

use crate::core::graph::{Graph, GraphEdge, NodePosition};
use crate::error::{PlotError, PlotResult};

/// Upper bound on capacity reserved from a declared count. Larger inputs still
/// parse; the vectors just grow as lines arrive.
const MAX_PREALLOCATED_ITEMS: usize = 4096;

/// Parses one graph from its full text.
pub fn parse(text: &str) -> PlotResult<Graph> {
    parse_lines(text.split('\n'))
}

/// Parses one graph from already-split lines.
///
/// A trailing `\r` on each line is ignored so CRLF files read the same as LF.
pub fn parse_lines<I, S>(lines: I) -> PlotResult<Graph>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cursor = LineCursor::new(lines.into_iter());

    let (line_no, raw_name) = cursor.next_line("graph name")?;
    let name = raw_name.trim().to_owned();
    if name.is_empty() {
        return Err(PlotError::format(line_no, "graph name must not be empty"));
    }

    let num_nodes = cursor.next_count("node count")?;
    if num_nodes == 0 {
        return Err(PlotError::format(
            cursor.line_no,
            "node count must be positive",
        ));
    }

    let mut coordinates = Vec::with_capacity(num_nodes.min(MAX_PREALLOCATED_ITEMS));
    for node in 0..num_nodes {
        let (line_no, line) = cursor.next_line("node coordinates")?;
        let [x, y] = split_exact::<2>(line_no, &line)?;
        coordinates.push(NodePosition::new(
            parse_real(line_no, x, &format!("x coordinate of node {node}"))?,
            parse_real(line_no, y, &format!("y coordinate of node {node}"))?,
        ));
    }

    let (line_no, line) = cursor.next_line("start and goal nodes")?;
    let [start, goal] = split_exact::<2>(line_no, &line)?;
    let start_node = parse_node_index(line_no, start, "start_node", num_nodes)?;
    let goal_node = parse_node_index(line_no, goal, "goal_node", num_nodes)?;

    let num_edges = cursor.next_count("edge count")?;
    let mut edges = Vec::with_capacity(num_edges.min(MAX_PREALLOCATED_ITEMS));
    for edge_index in 0..num_edges {
        let (line_no, line) = cursor.next_line("edge")?;
        let [u, v, w] = split_exact::<3>(line_no, &line)?;
        edges.push(GraphEdge::new(
            parse_edge_endpoint(
                line_no,
                u,
                &format!("edge {edge_index} source"),
                num_nodes,
            )?,
            parse_edge_endpoint(
                line_no,
                v,
                &format!("edge {edge_index} target"),
                num_nodes,
            )?,
            parse_real(line_no, w, &format!("weight of edge {edge_index}"))?,
        ));
    }

    let graph = Graph::new(name, coordinates, start_node, goal_node, edges)?;
    debug!(
        name = graph.name(),
        num_nodes = graph.num_nodes(),
        num_edges = graph.edges().len(),
        "parsed graph"
    );
    Ok(graph)
}

struct LineCursor<I> {
    lines: I,
    line_no: usize,
}

impl<I, S> LineCursor<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    fn new(lines: I) -> Self {
        Self { lines, line_no: 0 }
    }

    fn next_line(&mut self, expected: &str) -> PlotResult<(usize, String)> {
        self.line_no += 1;
        let line = self.lines.next().ok_or_else(|| {
            PlotError::format(
                self.line_no,
                format!("unexpected end of input, expected {expected}"),
            )
        })?;
        let line = line.as_ref();
        Ok((
            self.line_no,
            line.strip_suffix('\r').unwrap_or(line).to_owned(),
        ))
    }

    fn next_count(&mut self, expected: &str) -> PlotResult<usize> {
        let (line_no, line) = self.next_line(expected)?;
        let [token] = split_exact::<1>(line_no, &line)?;
        token.parse::<usize>().map_err(|_| {
            PlotError::format(
                line_no,
                format!("{expected} must be a non-negative integer, found `{token}`"),
            )
        })
    }
}

fn split_exact<const N: usize>(line_no: usize, line: &str) -> PlotResult<[&str; N]> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let found = tokens.len();
    tokens.try_into().map_err(|_| {
        PlotError::format(
            line_no,
            format!("expected {N} whitespace-separated values, found {found}"),
        )
    })
}

fn parse_real(line_no: usize, token: &str, field: &str) -> PlotResult<f64> {
    let value = token.parse::<f64>().map_err(|_| {
        PlotError::format(line_no, format!("{field} is not a number: `{token}`"))
    })?;
    if !value.is_finite() {
        return Err(PlotError::format(
            line_no,
            format!("{field} must be finite, found `{token}`"),
        ));
    }
    Ok(value)
}

/// Reads the start or goal node: a plain integer token.
fn parse_node_index(
    line_no: usize,
    token: &str,
    field: &str,
    num_nodes: usize,
) -> PlotResult<usize> {
    let index = token.parse::<i64>().map_err(|_| {
        PlotError::format(line_no, format!("{field} is not an integer: `{token}`"))
    })?;
    check_node_index(index, field, num_nodes)
}

/// Reads an edge endpoint.
///
/// Integral real tokens such as `3.0` are accepted; fractional ones are not.
fn parse_edge_endpoint(
    line_no: usize,
    token: &str,
    field: &str,
    num_nodes: usize,
) -> PlotResult<usize> {
    let index = match token.parse::<i64>() {
        Ok(index) => index,
        Err(_) => {
            let value = token.parse::<f64>().map_err(|_| {
                PlotError::format(line_no, format!("{field} is not an integer: `{token}`"))
            })?;
            if !value.is_finite()
                || value.fract() != 0.0
                || value < i64::MIN as f64
                || value > i64::MAX as f64
            {
                return Err(PlotError::format(
                    line_no,
                    format!("{field} is not an integer: `{token}`"),
                ));
            }
            value as i64
        }
    };
    check_node_index(index, field, num_nodes)
}

fn check_node_index(index: i64, field: &str, num_nodes: usize) -> PlotResult<usize> {
    usize::try_from(index)
        .ok()
        .filter(|index| *index < num_nodes)
        .ok_or_else(|| PlotError::NodeIndexOutOfRange {
            field: field.to_owned(),
            index,
            num_nodes,
        })
}
