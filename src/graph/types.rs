//! Identifier, edge key and capacity bound types.

use std::fmt;

use crate::error::{ClusterError, Result};

/// Identifier of a node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical key of an undirected edge.
///
/// The endpoints are stored sorted, so `EdgeKey::new(a, b)` and
/// `EdgeKey::new(b, a)` are equal and hash identically.
///
/// ```
/// use u_capclust::graph::EdgeKey;
///
/// assert_eq!(EdgeKey::new("A", "B"), EdgeKey::new("B", "A"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeKey {
    low: NodeId,
    high: NodeId,
}

impl EdgeKey {
    pub fn new(a: impl Into<NodeId>, b: impl Into<NodeId>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Endpoints in canonical (ascending) order.
    pub fn endpoints(&self) -> (&NodeId, &NodeId) {
        (&self.low, &self.high)
    }

    pub fn is_self_loop(&self) -> bool {
        self.low == self.high
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}

/// Capacity window `[lower, upper]` for cluster weights.
///
/// `lower > upper` is accepted: no non-empty cluster can satisfy it, which
/// makes the greedy builder leave almost everything unassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub lower: u64,
    pub upper: u64,
}

impl Bounds {
    /// Builds bounds from signed input, rejecting negative values.
    pub fn new(lower: i64, upper: i64) -> Result<Self> {
        let lower = u64::try_from(lower).map_err(|_| ClusterError::NegativeBound {
            which: "lower",
            value: lower,
        })?;
        let upper = u64::try_from(upper).map_err(|_| ClusterError::NegativeBound {
            which: "upper",
            value: upper,
        })?;
        Ok(Self { lower, upper })
    }

    pub fn contains(&self, weight: u64) -> bool {
        self.lower <= weight && weight <= self.upper
    }

    pub fn is_degenerate(&self) -> bool {
        self.lower > self.upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_key_is_order_agnostic() {
        let ab = EdgeKey::new("A", "B");
        let ba = EdgeKey::new("B", "A");
        assert_eq!(ab, ba);
        assert_eq!(ab.endpoints().0.as_str(), "A");
        assert_eq!(ab.endpoints().1.as_str(), "B");
        assert!(!ab.is_self_loop());
        assert!(EdgeKey::new("C", "C").is_self_loop());
    }

    #[test]
    fn test_bounds_reject_negative() {
        assert_eq!(
            Bounds::new(-1, 10),
            Err(ClusterError::NegativeBound {
                which: "lower",
                value: -1
            })
        );
        assert_eq!(
            Bounds::new(0, -3),
            Err(ClusterError::NegativeBound {
                which: "upper",
                value: -3
            })
        );
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds::new(5, 10).unwrap();
        assert!(!bounds.contains(4));
        assert!(bounds.contains(5));
        assert!(bounds.contains(10));
        assert!(!bounds.contains(11));
    }

    #[test]
    fn test_degenerate_bounds_accepted() {
        let bounds = Bounds::new(10, 5).unwrap();
        assert!(bounds.is_degenerate());
        assert!(!bounds.contains(7));
    }
}
