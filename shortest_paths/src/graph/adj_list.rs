//! Weighted adjacency list graph representation.
//!
//! Variables:
//!   V       = number of real vertices
//!   E       = number of directed edges
//!   adj[u]  = Vec<Edge> of edges leaving vertex u
//!
//! Equations:
//!   add_edge(u, v, w):  adj[u].push((u, v, w)),  E += 1      O(1)
//!   E = sum_u |adj[u]|
//!
//! Auxiliary source (Johnson):
//!   attach:  adj[V] = [(V, v, 0) for v in 0..V],  E += V
//!   detach:  drop adj[V],                          E -= V
//!
//!   Only the auxiliary vertex has edges to or from index V, so detaching
//!   restores the graph exactly.

use std::fmt;
use std::ops::Deref;

use thiserror::Error;

use super::distance::{Weight, MAX_EDGE_WEIGHT};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: Weight,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("edge {from} -> {to} references a vertex outside 0..{vertices}")]
    VertexOutOfRange { from: usize, to: usize, vertices: usize },
    #[error(
        "edge {from} -> {to} has weight {weight}, outside -{max}..={max}",
        max = MAX_EDGE_WEIGHT
    )]
    WeightOutOfRange { from: usize, to: usize, weight: Weight },
}

#[derive(Clone, Debug, Default)]
pub struct Graph {
    adj: Vec<Vec<Edge>>,
    edges: usize,
    real_vertices: usize,
}

impl Graph {
    /// Create an empty graph with `v` vertices and no edges, O(V).
    pub fn new(v: usize) -> Self {
        Self {
            adj: vec![Vec::new(); v],
            edges: 0,
            real_vertices: v,
        }
    }

    /// Build a graph from `(from, to, weight)` triples, validating every
    /// endpoint.
    pub fn from_edges<I>(v: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize, Weight)>,
    {
        let mut graph = Self::new(v);
        for (from, to, weight) in edges {
            graph.try_add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Working vertex count, including an attached auxiliary source.
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Vertices of the problem graph, never counting an auxiliary source.
    pub fn real_vertex_count(&self) -> usize {
        self.real_vertices
    }

    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Add a directed edge u -> v with weight w, O(1).
    ///
    /// Panics if either endpoint is out of range or `|w|` exceeds
    /// [`MAX_EDGE_WEIGHT`]; see [`Graph::try_add_edge`].
    pub fn add_edge(&mut self, u: usize, v: usize, w: Weight) {
        assert!(v < self.adj.len(), "edge target {v} out of range");
        assert!(weight_in_range(w), "edge weight {w} out of range");
        self.adj[u].push(Edge { from: u, to: v, weight: w });
        self.edges += 1;
    }

    pub fn try_add_edge(&mut self, u: usize, v: usize, w: Weight) -> Result<(), GraphError> {
        if u >= self.real_vertices || v >= self.real_vertices {
            return Err(GraphError::VertexOutOfRange {
                from: u,
                to: v,
                vertices: self.real_vertices,
            });
        }
        if !weight_in_range(w) {
            return Err(GraphError::WeightOutOfRange { from: u, to: v, weight: w });
        }
        self.add_edge(u, v, w);
        Ok(())
    }

    pub fn out_edges(&self, u: usize) -> &[Edge] {
        &self.adj[u]
    }

    /// Every edge, grouped by origin in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adj.iter().flatten()
    }

    /// Attach a vertex `q0 = V` with a zero-weight edge to every real
    /// vertex. The returned guard detaches it when dropped.
    pub fn attach_auxiliary_source(&mut self) -> AuxiliarySource<'_> {
        let source = self.adj.len();
        let links: Vec<Edge> = (0..self.real_vertices)
            .map(|v| Edge { from: source, to: v, weight: 0 })
            .collect();
        self.edges += links.len();
        self.adj.push(links);
        AuxiliarySource { graph: self, source }
    }

    fn detach_auxiliary_source(&mut self) {
        while self.adj.len() > self.real_vertices {
            if let Some(links) = self.adj.pop() {
                self.edges -= links.len();
            }
        }
    }
}

fn weight_in_range(w: Weight) -> bool {
    (-MAX_EDGE_WEIGHT..=MAX_EDGE_WEIGHT).contains(&w)
}

/// A graph with an auxiliary zero-weight source attached.
pub struct AuxiliarySource<'g> {
    graph: &'g mut Graph,
    source: usize,
}

impl AuxiliarySource<'_> {
    pub fn source(&self) -> usize {
        self.source
    }
}

impl Deref for AuxiliarySource<'_> {
    type Target = Graph;

    fn deref(&self) -> &Graph {
        &*self.graph
    }
}

impl Drop for AuxiliarySource<'_> {
    fn drop(&mut self) {
        self.graph.detach_auxiliary_source();
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.vertex_count(), self.edge_count())?;
        for (u, links) in self.adj.iter().enumerate() {
            write!(f, "{u:2}:")?;
            for edge in links {
                write!(f, " {:2}({})", edge.to, edge.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
