use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::graph::trace::Trace;

/// Attributes carried by a single directed route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeAttrs {
    /// Physical length of the route
    pub distance: f64,
    /// Traversal cost without congestion
    pub base_cost: f64,
}

impl EdgeAttrs {
    pub fn new(distance: f64, base_cost: f64) -> Self {
        Self {
            distance,
            base_cost,
        }
    }

    /// Both values must be finite and strictly positive
    pub fn is_valid(&self) -> bool {
        is_positive(self.distance) && is_positive(self.base_cost)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Identity of a route: the ordered (origin, destination) pair
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RouteKey {
    pub origin: String,
    pub destination: String,
}

impl RouteKey {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

/// A directed route as seen by readers of the network
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub origin: String,
    pub destination: String,
    pub distance: f64,
    pub base_cost: f64,
}

impl Edge {
    pub fn new(origin: &str, destination: &str, attrs: EdgeAttrs) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            distance: attrs.distance,
            base_cost: attrs.base_cost,
        }
    }

    pub fn attrs(&self) -> EdgeAttrs {
        EdgeAttrs::new(self.distance, self.base_cost)
    }

    pub fn key(&self) -> RouteKey {
        RouteKey::new(self.origin.clone(), self.destination.clone())
    }
}

/// Sort order for route listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Shortest physical distance first
    #[default]
    Distance,
    /// Cheapest base cost first
    Cost,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "distance" => Ok(SortKey::Distance),
            "cost" | "time" => Ok(SortKey::Cost),
            _ => Err(format!(
                "unknown sort key '{}' (expected: distance or cost)",
                s
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Distance => write!(f, "distance"),
            SortKey::Cost => write!(f, "cost"),
        }
    }
}

/// Accumulated traversal cost along a partial path
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Total order over costs; NaN never enters the frontier because edge
    /// values are validated on insertion
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

/// Total cost reported for a query. Failed queries report `Unreachable`
/// rather than a number that could be mistaken for a real cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCost {
    Finite(f64),
    Unreachable,
}

impl fmt::Display for PathCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCost::Finite(cost) => write!(f, "{:.2}", cost),
            PathCost::Unreachable => write!(f, "unreachable"),
        }
    }
}

impl Serialize for PathCost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PathCost::Finite(cost) => serializer.serialize_f64(*cost),
            PathCost::Unreachable => serializer.serialize_str("unreachable"),
        }
    }
}

/// One traversed route of a found path, with the cost actually charged
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathLeg {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub base_cost: f64,
    pub effective_cost: f64,
}

/// Result of a successful least-cost path query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub source: String,
    pub destination: String,
    /// Nodes from source to destination, both inclusive
    pub path: Vec<String>,
    pub legs: Vec<PathLeg>,
    pub total_cost: f64,
    pub total_distance: f64,
    /// Congestion multiplier applied to every leg of this query
    pub multiplier: f64,
    pub trace: Trace,
}

impl PathResult {
    pub fn cost(&self) -> PathCost {
        PathCost::Finite(self.total_cost)
    }

    /// Number of routes traversed
    pub fn hops(&self) -> usize {
        self.legs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_attrs_validation() {
        assert!(EdgeAttrs::new(2.0, 6.0).is_valid());
        assert!(!EdgeAttrs::new(0.0, 6.0).is_valid());
        assert!(!EdgeAttrs::new(2.0, -1.0).is_valid());
        assert!(!EdgeAttrs::new(f64::NAN, 1.0).is_valid());
        assert!(!EdgeAttrs::new(1.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_route_key_display() {
        assert_eq!(RouteKey::new("CBD", "Harbour").to_string(), "CBD -> Harbour");
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("distance".parse::<SortKey>().unwrap(), SortKey::Distance);
        assert_eq!("COST".parse::<SortKey>().unwrap(), SortKey::Cost);
        assert_eq!("time".parse::<SortKey>().unwrap(), SortKey::Cost);
        assert!("speed".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_cost_addition_and_order() {
        let sum = Cost::new(1.5) + Cost::new(2.5);
        assert_eq!(sum.value(), 4.0);
        assert_eq!(
            Cost::ZERO.total_cmp(&Cost::new(0.1)),
            std::cmp::Ordering::Less
        );
    }

    #[test]
    fn test_path_cost_serialization() {
        assert_eq!(
            serde_json::to_value(PathCost::Finite(10.0)).unwrap(),
            serde_json::json!(10.0)
        );
        assert_eq!(
            serde_json::to_value(PathCost::Unreachable).unwrap(),
            serde_json::json!("unreachable")
        );
        assert_eq!(PathCost::Unreachable.to_string(), "unreachable");
        assert_eq!(PathCost::Finite(8.5).to_string(), "8.50");
    }
}
