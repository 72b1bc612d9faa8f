use super::{FaceId, VertexId};

slotmap::new_key_type! {
    /// Unique identifier for an edge in a die model.
    pub struct EdgeId;
}

/// Data associated with a topological edge.
///
/// An edge connects an unordered pair of vertices. A closed solid requires
/// every edge to border exactly two faces; the face list is validated at the
/// end of model construction.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// The two endpoint vertices.
    pub vertices: [VertexId; 2],
    /// Incident faces; exactly two once construction succeeds.
    pub faces: Vec<FaceId>,
}

impl EdgeData {
    /// Creates a new edge between two vertices, with no incident faces yet.
    #[must_use]
    pub fn new(a: VertexId, b: VertexId) -> Self {
        Self {
            vertices: [a, b],
            faces: Vec::new(),
        }
    }

    /// Returns the endpoint opposite `v`.
    #[must_use]
    pub fn other_vertex(&self, v: VertexId) -> VertexId {
        if self.vertices[1] == v {
            self.vertices[0]
        } else {
            self.vertices[1]
        }
    }
}
