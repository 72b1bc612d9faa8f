use crate::error::{Result, TopologyError};
use crate::math::{Point3, Vector3};
use crate::topology::Model;

/// Convex-hull collision descriptor for the physics collaborator.
///
/// Vertex positions share units and frame with the render geometry; faces
/// index into `vertices` counter-clockwise as seen from outside.
#[derive(Debug, Clone)]
pub struct ConvexHullShape {
    /// Hull corner positions, in model vertex order.
    pub vertices: Vec<Point3>,
    /// Outward face normals, in face order.
    pub normals: Vec<Vector3>,
    /// Per-face vertex index lists.
    pub faces: Vec<Vec<u32>>,
}

impl ConvexHullShape {
    /// Derives the hull descriptor from a model.
    ///
    /// # Errors
    ///
    /// Returns an error if the model's adjacency references are
    /// inconsistent.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_model(model: &Model) -> Result<Self> {
        let mut vertices = Vec::with_capacity(model.vertex_count());
        for &vertex in model.vertices() {
            vertices.push(model.vertex(vertex)?.point);
        }

        let mut normals = Vec::with_capacity(model.face_count());
        let mut faces = Vec::with_capacity(model.face_count());
        for &face_id in model.faces() {
            let face = model.face(face_id)?;
            normals.push(face.normal);

            let mut indices = Vec::with_capacity(face.vertices.len());
            for &v in &face.vertices {
                let index = model
                    .vertex_index(v)
                    .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))?;
                indices.push(index as u32);
            }
            faces.push(indices);
        }

        Ok(Self {
            vertices,
            normals,
            faces,
        })
    }
}
