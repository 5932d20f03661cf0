use std::fmt;

use serde::Serialize;
use shortest_paths::{JohnsonRun, Selection, Weight};

/// Route from one branch to the meeting point, 1-indexed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Route {
    pub branch: usize,
    pub vertices: Vec<usize>,
}

/// The answer as seen from outside the graph: 1-indexed vertices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report {
    NoSolution,
    Found {
        location: usize,
        total: Weight,
        distances: Vec<Weight>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        routes: Vec<Route>,
    },
}

impl Report {
    /// Build a report; routes are filled in only when `with_routes` is set.
    pub fn new(selection: &Selection, run: &JohnsonRun, with_routes: bool) -> Self {
        let Selection::Found(point) = selection else {
            return Report::NoSolution;
        };
        let routes = if with_routes {
            run.matrix
                .rows()
                .iter()
                .filter_map(|row| {
                    let path = row.path_to(point.vertex)?;
                    Some(Route {
                        branch: row.source + 1,
                        vertices: path.into_iter().map(|v| v + 1).collect(),
                    })
                })
                .collect()
        } else {
            Vec::new()
        };
        Report::Found {
            location: point.location(),
            total: point.total,
            distances: point.distances.clone(),
            routes,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::NoSolution => writeln!(f, "N"),
            Report::Found { location, total, distances, routes } => {
                writeln!(f, "{location} {total}")?;
                for d in distances {
                    write!(f, "{d} ")?;
                }
                writeln!(f)?;
                for route in routes {
                    let hops: Vec<String> = route.vertices.iter().map(|v| v.to_string()).collect();
                    writeln!(f, "{}: {}", route.branch, hops.join(" -> "))?;
                }
                Ok(())
            }
        }
    }
}
