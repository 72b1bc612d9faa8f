pub mod edge;
pub mod face;
pub mod vertex;

pub use edge::{EdgeData, EdgeId};
pub use face::{FaceData, FaceId};
pub use vertex::{VertexData, VertexId};

use crate::error::TopologyError;
use slotmap::SlotMap;

/// Complete topology for one die shape.
///
/// Entities live in slotmap arenas and reference each other via typed IDs
/// (generational indices), avoiding self-referential structures. Separate
/// insertion-order lists preserve construction order: a face's position in
/// [`Model::faces`] is the face index used by result tables and texture
/// cells.
///
/// A model is built once per shape by
/// [`BuildModel`](crate::operations::BuildModel) and is read-only afterwards,
/// so it can be shared across every die of that shape.
#[derive(Debug)]
pub struct Model {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    faces: SlotMap<FaceId, FaceData>,
    vertex_order: Vec<VertexId>,
    edge_order: Vec<EdgeId>,
    face_order: Vec<FaceId>,
}

impl Model {
    /// Creates a new, empty model.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            vertices: SlotMap::default(),
            edges: SlotMap::default(),
            faces: SlotMap::default(),
            vertex_order: Vec::new(),
            edge_order: Vec::new(),
            face_order: Vec::new(),
        }
    }

    /// Inserts a vertex and returns its ID.
    pub(crate) fn add_vertex(&mut self, data: VertexData) -> VertexId {
        let id = self.vertices.insert(data);
        self.vertex_order.push(id);
        id
    }

    /// Inserts an edge and returns its ID.
    pub(crate) fn add_edge(&mut self, data: EdgeData) -> EdgeId {
        let id = self.edges.insert(data);
        self.edge_order.push(id);
        id
    }

    /// Inserts a face and returns its ID.
    pub(crate) fn add_face(&mut self, data: FaceData) -> FaceId {
        let id = self.faces.insert(data);
        self.face_order.push(id);
        id
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the model.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, TopologyError> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the model.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    /// Returns a mutable reference to the edge data, or an error if not found.
    pub(crate) fn edge_mut(&mut self, id: EdgeId) -> Result<&mut EdgeData, TopologyError> {
        self.edges
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the model.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    /// Vertex IDs in input-point order.
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertex_order
    }

    /// Edge IDs in creation order.
    #[must_use]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edge_order
    }

    /// Face IDs in discovery order.
    #[must_use]
    pub fn faces(&self) -> &[FaceId] {
        &self.face_order
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_order.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_order.len()
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.face_order.len()
    }

    /// Position of a vertex in input-point order.
    #[must_use]
    pub fn vertex_index(&self, id: VertexId) -> Option<usize> {
        self.vertex_order.iter().position(|&v| v == id)
    }

    /// Position of a face in discovery order.
    #[must_use]
    pub fn face_index(&self, id: FaceId) -> Option<usize> {
        self.face_order.iter().position(|&f| f == id)
    }
}
