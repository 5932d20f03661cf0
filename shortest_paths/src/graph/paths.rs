use super::distance::Distance;

/// Single-source result: distance and shortest-path-tree parent per vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPaths {
    pub source: usize,
    pub distances: Vec<Distance>,
    pub predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    pub(crate) fn unreached(vertices: usize, source: usize) -> Self {
        let mut distances = vec![Distance::Unreachable; vertices];
        distances[source] = Distance::ZERO;
        Self {
            source,
            distances,
            predecessors: vec![None; vertices],
        }
    }

    pub fn distance(&self, v: usize) -> Distance {
        self.distances[v]
    }

    /// Vertices from the source to `target`, both included.
    ///
    /// `None` when `target` is unreachable. Predecessor chains longer than
    /// the vertex count (possible only after a truncated negative-cycle
    /// run) also yield `None`.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.distances.get(target)?.is_reachable() {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors[current]?;
            path.push(current);
            if path.len() > self.distances.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}
