use crate::error::{ConstructionError, Result};
use crate::math::polygon_3d::{centroid, winding_normal};
use crate::math::{Point3, TOLERANCE};
use crate::topology::{EdgeData, EdgeId, FaceData, Model, VertexData, VertexId};

/// Derives the complete topology of a convex polyhedron from its point
/// cloud.
///
/// Vertices are taken in input order. Edges are every unordered vertex pair
/// whose distance matches one of the valid edge lengths; the length list is
/// what disambiguates true polyhedron edges from arbitrary point-pair
/// distances (a square's edge from its diagonal). Faces are discovered as
/// minimal boundary cycles by a depth-bounded path search, deduplicated by
/// normal and filtered to outward orientation.
pub struct BuildModel {
    points: Vec<Point3>,
    edge_lengths: Vec<f64>,
    expected_faces: usize,
}

impl BuildModel {
    /// Creates a new `BuildModel` operation.
    #[must_use]
    pub fn new(points: Vec<Point3>, edge_lengths: Vec<f64>, expected_faces: usize) -> Self {
        Self {
            points,
            edge_lengths,
            expected_faces,
        }
    }

    /// Executes the construction, returning the finished model.
    ///
    /// # Errors
    ///
    /// Returns an error if any edge ends up bordering a number of faces
    /// other than 2, or if the number of discovered faces differs from the
    /// expected face count.
    pub fn execute(&self) -> Result<Model> {
        let mut model = Model::new();

        self.connect_edges(&mut model)?;

        // Bound the cycle search by the expected edges-per-face so it
        // terminates even on adversarial inputs.
        #[allow(clippy::cast_precision_loss)]
        let max_depth = 2.0 * model.edge_count() as f64 / self.expected_faces as f64;

        let mut cycles = Vec::new();
        for &vertex in model.vertices() {
            cycles.extend(find_cycles(&model, vertex, max_depth)?);
        }

        for cycle in cycles {
            register_face(&mut model, &cycle)?;
        }

        for (index, &edge) in model.edges().iter().enumerate() {
            let count = model.edge(edge)?.faces.len();
            if count != 2 {
                return Err(ConstructionError::NonManifoldEdge { edge: index, count }.into());
            }
        }

        if model.face_count() != self.expected_faces {
            return Err(ConstructionError::FaceCountMismatch {
                expected: self.expected_faces,
                found: model.face_count(),
            }
            .into());
        }

        tracing::debug!(
            vertices = model.vertex_count(),
            edges = model.edge_count(),
            faces = model.face_count(),
            "model constructed"
        );

        Ok(model)
    }

    /// Creates one vertex per input point and connects every pair whose
    /// distance matches a valid edge length within tolerance.
    fn connect_edges(&self, model: &mut Model) -> Result<()> {
        for &point in &self.points {
            let v1 = model.add_vertex(VertexData::new(point));
            let earlier: Vec<VertexId> = model.vertices()[..model.vertex_count() - 1].to_vec();

            for v2 in earlier {
                let distance = (point - model.vertex(v2)?.point).norm();
                if self
                    .edge_lengths
                    .iter()
                    .any(|length| (length - distance).abs() < TOLERANCE)
                {
                    let edge = model.add_edge(EdgeData::new(v1, v2));
                    model.vertex_mut(v1)?.edges.push(edge);
                    model.vertex_mut(v2)?.edges.push(edge);
                }
            }
        }
        Ok(())
    }
}

/// Enumerates simple cycles through `target` without edge reuse, up to the
/// depth bound.
fn find_cycles(model: &Model, target: VertexId, max_depth: f64) -> Result<Vec<Vec<EdgeId>>> {
    let mut cycles = Vec::new();
    let mut stack: Vec<(VertexId, Vec<EdgeId>)> = vec![(target, Vec::new())];

    while let Some((node, path)) = stack.pop() {
        for &edge in &model.vertex(node)?.edges {
            if path.contains(&edge) {
                continue;
            }

            let next = model.edge(edge)?.other_vertex(node);
            if next == target {
                let mut cycle = path.clone();
                cycle.push(edge);
                cycles.push(cycle);
            } else {
                #[allow(clippy::cast_precision_loss)]
                let depth = (path.len() + 1) as f64;
                if depth < max_depth {
                    let mut extended = path.clone();
                    extended.push(edge);
                    stack.push((next, extended));
                }
            }
        }
    }

    Ok(cycles)
}

/// Registers a candidate boundary cycle as a face, unless it duplicates an
/// already-registered orientation or winds inward.
fn register_face(model: &mut Model, cycle: &[EdgeId]) -> Result<()> {
    let mut cycle_vertices: Vec<VertexId> = Vec::new();
    for &edge in cycle {
        for &v in &model.edge(edge)?.vertices {
            if !cycle_vertices.contains(&v) {
                cycle_vertices.push(v);
            }
        }
    }

    let p0 = model.vertex(cycle_vertices[0])?.point;
    let p1 = model.vertex(cycle_vertices[1])?.point;
    let p2 = model.vertex(cycle_vertices[2])?.point;

    let cross = (p1 - p0).cross(&(p2 - p0));
    if cross.norm() < TOLERANCE {
        return Ok(());
    }
    let normal = cross.normalize();

    for &existing in model.faces() {
        if (model.face(existing)?.normal - normal).norm() < TOLERANCE {
            return Ok(());
        }
    }

    let mut points = Vec::with_capacity(cycle_vertices.len());
    for &v in &cycle_vertices {
        points.push(model.vertex(v)?.point);
    }
    let center = centroid(&points);
    if center.coords.dot(&normal) < 0.0 {
        return Ok(());
    }

    let ordered = order_cycle(model, cycle, &normal)?;

    let face = model.add_face(FaceData {
        vertices: ordered.clone(),
        edges: cycle.to_vec(),
        normal,
    });
    for &v in &ordered {
        model.vertex_mut(v)?.faces.push(face);
    }
    for &edge in cycle {
        model.edge_mut(edge)?.faces.push(face);
    }

    Ok(())
}

/// Walks the edge path into a vertex cycle, counter-clockwise about the
/// outward normal.
fn order_cycle(model: &Model, cycle: &[EdgeId], normal: &crate::math::Vector3) -> Result<Vec<VertexId>> {
    let first = model.edge(cycle[0])?;
    let last = model.edge(cycle[cycle.len() - 1])?;

    let start = if last.vertices.contains(&first.vertices[0]) {
        first.vertices[0]
    } else {
        first.vertices[1]
    };

    let mut ordered = vec![start];
    let mut current = start;
    for &edge in &cycle[..cycle.len() - 1] {
        current = model.edge(edge)?.other_vertex(current);
        ordered.push(current);
    }

    let mut points = Vec::with_capacity(ordered.len());
    for &v in &ordered {
        points.push(model.vertex(v)?.point);
    }
    if winding_normal(&points).dot(normal) < 0.0 {
        ordered.reverse();
    }

    Ok(ordered)
}
