use serde::{Deserialize, Serialize};

/// Whether the boundary of an areal operand covers points and lines lying exactly on it.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundaryRule {
    /// The boundary does not cover anything. A point on the boundary of a polygon survives `difference` and is not
    /// part of `intersection`. The same holds for line pieces running along the boundary.
    #[default]
    Open,
    /// Areas are closed sets: points and line pieces on the boundary are covered by the area.
    Closed,
}

impl BoundaryRule {
    /// Returns true if geometries on the boundary are covered by the area.
    pub fn covers_boundary(self) -> bool {
        self == BoundaryRule::Closed
    }
}

/// Settings of set operations.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayOptions {
    /// Treatment of points and lines lying on the boundary of an areal operand.
    pub boundary: BoundaryRule,
}
