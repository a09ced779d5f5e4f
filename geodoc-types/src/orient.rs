use crate::point::CartesianPoint2d;
use serde::{Deserialize, Serialize};

/// Orientation of a triplet of points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    Counterclockwise,
    /// Collinear
    Collinear,
}

impl Orientation {
    /// Determines orientation of the turn `p -> q -> r`.
    pub fn triplet(
        p: &impl CartesianPoint2d,
        q: &impl CartesianPoint2d,
        r: &impl CartesianPoint2d,
    ) -> Self {
        let pq = q.sub(p);
        let qr = r.sub(q);
        let cross = pq.y * qr.x - pq.x * qr.y;
        if cross > 0.0 {
            Self::Clockwise
        } else if cross < 0.0 {
            Self::Counterclockwise
        } else {
            Self::Collinear
        }
    }
}
