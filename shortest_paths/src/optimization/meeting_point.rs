//! Meeting point: the vertex with the lowest total distance from all branches.
//!
//! Variables:
//!   B       = branch count
//!   d[b][v] = true-weight distance from branch b to v
//!
//! Equations:
//!   qualifies(v) = d[b][v] finite for every b
//!   total(v)     = sum_b d[b][v]
//!   answer       = argmin { total(v) | qualifies(v) }, lowest v on ties
//!
//! No qualifying vertex (including B = 0) => NoSolution.

use serde::Serialize;
use tracing::debug;

use crate::graph::adj_list::Graph;
use crate::graph::distance::Weight;
use crate::graph::johnson::{johnson, DistanceMatrix, JohnsonConfig, JohnsonError};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MeetingPoint {
    /// 0-indexed vertex.
    pub vertex: usize,
    pub total: Weight,
    /// Distance from each branch, in branch order.
    pub distances: Vec<Weight>,
}

impl MeetingPoint {
    /// 1-indexed vertex, as used by callers outside the graph.
    pub fn location(&self) -> usize {
        self.vertex + 1
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Selection {
    NoSolution,
    Found(MeetingPoint),
}

impl Selection {
    pub fn meeting_point(&self) -> Option<&MeetingPoint> {
        match self {
            Selection::Found(point) => Some(point),
            Selection::NoSolution => None,
        }
    }
}

pub fn select(matrix: &DistanceMatrix) -> Selection {
    if matrix.branch_count() == 0 {
        return Selection::NoSolution;
    }

    let mut best: Option<(usize, Weight)> = None;
    for v in 0..matrix.vertex_count() {
        let total = matrix
            .column(v)
            .try_fold(0 as Weight, |sum, d| d.finite().map(|d| sum.saturating_add(d)));
        let Some(total) = total else {
            continue;
        };
        if best.map_or(true, |(_, lowest)| total < lowest) {
            best = Some((v, total));
        }
    }

    match best {
        Some((vertex, total)) => {
            let distances = matrix.column(vertex).filter_map(|d| d.finite()).collect();
            debug!(vertex, total, "meeting point selected");
            Selection::Found(MeetingPoint { vertex, total, distances })
        }
        None => {
            debug!("no vertex is reachable from every branch");
            Selection::NoSolution
        }
    }
}

/// Run Johnson from `branches` and select the meeting point.
pub fn find_meeting_point(
    graph: &mut Graph,
    branches: &[usize],
    config: &JohnsonConfig,
) -> Result<Selection, JohnsonError> {
    let run = johnson(graph, branches, config)?;
    Ok(select(&run.matrix))
}
