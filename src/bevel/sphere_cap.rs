use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::math::{Point2, Point3, Vector3};

use super::SurfaceMesh;

/// Generates the rounded cap at one vertex center: a lat/long sphere of the
/// rounding radius.
///
/// Caps are untextured; every UV is pinned to the origin so samplers read a
/// single texel. Resolution scales with the edge detail so caps match the
/// fillet tessellation.
#[allow(clippy::cast_possible_truncation)]
pub(super) fn generate(center: Point3, radius: f64, edge_detail: usize) -> SurfaceMesh {
    let n_u = 4 * edge_detail.max(2);
    let n_v = 2 * edge_detail.max(2);

    let rows = n_v + 1;
    let cols = n_u + 1;

    let mut mesh = SurfaceMesh::default();
    mesh.positions.reserve(rows * cols);
    mesh.normals.reserve(rows * cols);
    mesh.uvs.reserve(rows * cols);
    mesh.indices.reserve(n_u * n_v * 2);

    for iv in 0..rows {
        #[allow(clippy::cast_precision_loss)]
        let v = -FRAC_PI_2 + PI * iv as f64 / n_v as f64;
        for iu in 0..cols {
            #[allow(clippy::cast_precision_loss)]
            let u = TAU * iu as f64 / n_u as f64;
            let normal = Vector3::new(v.cos() * u.cos(), v.cos() * u.sin(), v.sin());
            mesh.positions.push(center + normal * radius);
            mesh.normals.push(normal);
            mesh.uvs.push(Point2::origin());
        }
    }

    for iv in 0..n_v {
        for iu in 0..n_u {
            let i00 = (iv * cols + iu) as u32;
            let i10 = (iv * cols + iu + 1) as u32;
            let i01 = ((iv + 1) * cols + iu) as u32;
            let i11 = ((iv + 1) * cols + iu + 1) as u32;
            mesh.indices.push([i00, i10, i11]);
            mesh.indices.push([i00, i11, i01]);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_is_a_sphere_of_the_given_radius() {
        let center = Point3::new(1.0, -2.0, 0.5);
        let mesh = generate(center, 0.09, 5);

        for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
            assert!(((p - center).norm() - 0.09).abs() < 1e-12);
            assert!(((p - center).normalize() - n).norm() < 1e-12);
        }
    }

    #[test]
    fn cap_triangles_face_outward() {
        let center = Point3::new(0.0, 0.0, 0.0);
        let mesh = generate(center, 1.0, 3);

        for tri in &mesh.indices {
            let p0 = mesh.positions[tri[0] as usize];
            let p1 = mesh.positions[tri[1] as usize];
            let p2 = mesh.positions[tri[2] as usize];
            let cross = (p1 - p0).cross(&(p2 - p0));
            if cross.norm() > 1e-12 {
                let centroid = (p0.coords + p1.coords + p2.coords) / 3.0;
                assert!(cross.dot(&centroid) > 0.0);
            }
        }
    }
}
