//! Path cost with an explicit "no path" state.
//!
//! Variables:
//!   Finite(d)   = a path of total weight d exists
//!   Unreachable = no path is known (plays the role of +INF)
//!
//! Equations:
//!   Finite(a) < Finite(b)   iff a < b
//!   Finite(_) < Unreachable
//!   Finite(d) + w = Finite(d + w)   (saturating)
//!   Unreachable + w = Unreachable   (never computed through)

use std::fmt;

/// Edge weight and finite distance type.
pub type Weight = i64;

/// Largest edge weight magnitude a graph accepts.
///
/// With |w| <= 2^31 - 1 every path sum, potential, reduced cost and
/// reduced distance stays inside `Weight` for graphs below 2^30 vertices.
pub const MAX_EDGE_WEIGHT: Weight = i32::MAX as Weight;

// Variant order matters: the derived `Ord` puts `Unreachable` after every
// finite distance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(Weight),
    Unreachable,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn finite(self) -> Option<Weight> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Extend a path by one edge. Unreachable stays unreachable.
    pub fn extend(self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(weight)),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Unreachable => f.write_str("unreachable"),
        }
    }
}
