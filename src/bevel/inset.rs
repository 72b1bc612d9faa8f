use crate::error::Result;
use crate::math::polygon_3d::{centroid, sort_ccw};
use crate::math::{Point3, Vector2};
use crate::topology::Model;

use super::{center_of, InsetChart, RawChart};

/// Insets each flat face along its normal by the rounding radius.
///
/// The inset corners are the face's vertex-centers pushed out along the face
/// normal, sorted counter-clockwise around the inset centroid. Chart
/// coordinates are cell-local: centered on the face and uniformly scaled by
/// the maximum extent, so the polygon fits `[-0.5, 0.5]` on both axes.
pub(super) fn generate(model: &Model, centers: &[Point3], rounding: f64) -> Result<Vec<InsetChart>> {
    let mut charts = Vec::with_capacity(model.face_count());

    for (cell, &face_id) in model.faces().iter().enumerate() {
        let face = model.face(face_id)?;
        let normal = face.normal;

        let mut inset = Vec::with_capacity(face.vertices.len());
        for &v in &face.vertices {
            inset.push(center_of(model, centers, v)? + normal * rounding);
        }
        let ccw = sort_ccw(&inset, &normal);
        let center = centroid(&ccw);

        let u0 = (ccw[1] - center).normalize();
        let u1 = u0.cross(&normal);

        let offsets: Vec<(Point3, Vector2)> = ccw
            .iter()
            .map(|&corner| {
                let diff = corner - center;
                (corner, Vector2::new(diff.dot(&u1), diff.dot(&u0)))
            })
            .collect();

        let mut min = Vector2::zeros();
        let mut max = Vector2::zeros();
        for (_, uv) in &offsets {
            min.x = min.x.min(uv.x);
            min.y = min.y.min(uv.y);
            max.x = max.x.max(uv.x);
            max.y = max.y.max(uv.y);
        }
        let range = (-min.x).max(-min.y).max(max.x).max(max.y);

        let corners = offsets
            .into_iter()
            .map(|(p, uv)| (p, Vector2::new(uv.x / (2.0 * range), uv.y / (2.0 * range))))
            .collect();

        charts.push(InsetChart {
            raw: RawChart { corners, normal },
            cell,
        });
    }

    Ok(charts)
}
