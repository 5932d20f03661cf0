//! Problem text format.
//!
//! ```text
//! V B E
//! b_1 ... b_B        branch vertices, 1-indexed
//! u v w              E edges, 1-indexed endpoints, integer weight
//! ```
//!
//! Tokens are whitespace separated; line breaks only matter for error
//! messages.

use std::str::FromStr;

use shortest_paths::{Graph, GraphError, Weight};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("line {line}: expected {expected}, found `{token}`")]
    InvalidNumber { line: usize, token: String, expected: &'static str },
    #[error("line {line}: vertex {vertex} is outside 1..={vertices}")]
    VertexOutOfRange { line: usize, vertex: usize, vertices: usize },
    #[error("line {line}: {source}")]
    Graph { line: usize, source: GraphError },
    #[error("line {line}: unexpected trailing token `{token}`")]
    TrailingInput { line: usize, token: String },
}

/// A parsed problem with 0-indexed vertices.
#[derive(Clone, Debug)]
pub struct Problem {
    pub graph: Graph,
    pub branches: Vec<usize>,
}

struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let inner = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |t| (i + 1, t)));
        Self { inner: Box::new(inner), line: 1 }
    }

    fn next_token(&mut self, expected: &'static str) -> Result<&'a str, InputError> {
        let (line, token) = self.inner.next().ok_or(InputError::UnexpectedEof { expected })?;
        self.line = line;
        Ok(token)
    }

    fn parse<T: FromStr>(&mut self, expected: &'static str) -> Result<T, InputError> {
        let token = self.next_token(expected)?;
        token.parse().map_err(|_| InputError::InvalidNumber {
            line: self.line,
            token: token.to_string(),
            expected,
        })
    }

    /// A 1-indexed vertex, returned 0-indexed.
    fn vertex(&mut self, vertices: usize, expected: &'static str) -> Result<usize, InputError> {
        let vertex: usize = self.parse(expected)?;
        if vertex == 0 || vertex > vertices {
            return Err(InputError::VertexOutOfRange { line: self.line, vertex, vertices });
        }
        Ok(vertex - 1)
    }
}

pub fn parse_problem(text: &str) -> Result<Problem, InputError> {
    let mut tokens = Tokens::new(text);
    let vertices: usize = tokens.parse("vertex count")?;
    let branch_count: usize = tokens.parse("branch count")?;
    let edge_count: usize = tokens.parse("edge count")?;

    let branches = (0..branch_count)
        .map(|_| tokens.vertex(vertices, "branch vertex"))
        .collect::<Result<Vec<_>, _>>()?;

    let mut graph = Graph::new(vertices);
    for _ in 0..edge_count {
        let u = tokens.vertex(vertices, "edge origin")?;
        let v = tokens.vertex(vertices, "edge destination")?;
        let w: Weight = tokens.parse("edge weight")?;
        graph
            .try_add_edge(u, v, w)
            .map_err(|source| InputError::Graph { line: tokens.line, source })?;
    }

    if let Some((line, token)) = tokens.inner.next() {
        return Err(InputError::TrailingInput { line, token: token.to_string() });
    }

    Ok(Problem { graph, branches })
}
