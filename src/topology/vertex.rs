use crate::math::Point3;

use super::{EdgeId, FaceId};

slotmap::new_key_type! {
    /// Unique identifier for a vertex in a die model.
    pub struct VertexId;
}

/// Data associated with a topological vertex.
///
/// Back-references to incident edges and faces are filled in during model
/// construction and never change afterwards.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The 3D position of the vertex.
    pub point: Point3,
    /// Incident edges, in creation order.
    pub edges: Vec<EdgeId>,
    /// Incident faces, in discovery order.
    pub faces: Vec<FaceId>,
}

impl VertexData {
    /// Creates a new vertex at the given point, with no incidences yet.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self {
            point,
            edges: Vec::new(),
            faces: Vec::new(),
        }
    }
}
