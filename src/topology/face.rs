use crate::math::Vector3;

use super::{EdgeId, VertexId};

slotmap::new_key_type! {
    /// Unique identifier for a face in a die model.
    pub struct FaceId;
}

/// Data associated with a polygonal face.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// Vertex cycle, counter-clockwise as seen from outside along `normal`.
    pub vertices: Vec<VertexId>,
    /// Boundary edge cycle.
    pub edges: Vec<EdgeId>,
    /// Outward unit normal.
    pub normal: Vector3,
}
