use crate::error::{ConstructionError, Result};
use crate::math::{Matrix3, Point3, Vector3, TOLERANCE};
use crate::topology::Model;

/// Computes the rounded-corner center for every vertex, in input order.
///
/// Solves the 3x3 system `normal_i . y = -rounding` over the vertex's first
/// three incident face normals; the resulting offset places every rounded
/// face tangent to a sphere of the rounding radius centred at the vertex
/// center. Vertices with more than three incident faces must satisfy the
/// same tangency, which is verified against every incident face.
pub(super) fn vertex_centers(model: &Model, rounding: f64) -> Result<Vec<Point3>> {
    let mut centers = Vec::with_capacity(model.vertex_count());

    for (index, &vertex_id) in model.vertices().iter().enumerate() {
        let vertex = model.vertex(vertex_id)?;
        if vertex.faces.len() < 3 {
            return Err(ConstructionError::DegenerateVertex {
                vertex: index,
                reason: format!("only {} incident faces", vertex.faces.len()),
            }
            .into());
        }

        let n0 = model.face(vertex.faces[0])?.normal;
        let n1 = model.face(vertex.faces[1])?.normal;
        let n2 = model.face(vertex.faces[2])?.normal;

        let system = Matrix3::from_rows(&[n0.transpose(), n1.transpose(), n2.transpose()]);
        let inverse = system
            .try_inverse()
            .ok_or_else(|| ConstructionError::DegenerateVertex {
                vertex: index,
                reason: "singular incident-normal system".into(),
            })?;
        let offset = inverse * Vector3::repeat(-rounding);

        for &face in &vertex.faces {
            let normal = model.face(face)?.normal;
            if (normal.dot(&offset) + rounding).abs() > TOLERANCE {
                return Err(ConstructionError::DegenerateVertex {
                    vertex: index,
                    reason: "incident faces are not tangent to the rounding sphere".into(),
                }
                .into());
            }
        }

        centers.push(vertex.point + offset);
    }

    Ok(centers)
}
