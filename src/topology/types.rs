//! Topology type definitions.
//!
//! Node positions and the edges of the complete distance graph.

use serde::{Deserialize, Serialize};

/// Location of a sensor node in the deployment area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position
    pub fn distance_to(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns true if both coordinates lie in `[0, area_size)`
    pub fn is_within(&self, area_size: f64) -> bool {
        (0.0..area_size).contains(&self.x) && (0.0..area_size).contains(&self.y)
    }
}

/// An undirected weighted edge, reported with `a < b`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub weight: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_euclidean() {
        let origin = Position::new(0.0, 0.0);
        let p = Position::new(3.0, 4.0);
        assert_eq!(origin.distance_to(&p), 5.0);
        assert_eq!(p.distance_to(&origin), 5.0);
        assert_eq!(p.distance_to(&p), 0.0);
    }

    #[test]
    fn test_is_within_excludes_upper_bound() {
        assert!(Position::new(0.0, 99.9).is_within(100.0));
        assert!(!Position::new(100.0, 5.0).is_within(100.0));
        assert!(!Position::new(-0.1, 5.0).is_within(100.0));
    }
}
