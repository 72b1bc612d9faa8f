use crate::error::{GeometryError, Result};
use crate::math::{Point3, Quat, Vector2, Vector3};
use crate::topology::Model;

use super::{center_of, BevelParams, RawChart};

/// Fillet strips for every edge, with their accumulated atlas extents.
pub(super) struct FilletStrips {
    pub charts: Vec<RawChart>,
    /// Accumulated strip width, in model units of arc length.
    pub width: f64,
    /// Tallest strip height: the longest rounded edge.
    pub height: f64,
}

/// Sweeps each edge's dihedral angle into a strip of fillet quads.
///
/// The rotation between the two incident face normals is interpolated in
/// `edge_detail` slerp steps; each step offsets the endpoint vertex-centers
/// along the interpolated normal by the rounding radius. Atlas x advances by
/// the step's angular width (rounded up to 1/100 units), atlas y spans the
/// rounded edge length.
pub(super) fn generate(model: &Model, centers: &[Point3], params: BevelParams) -> Result<FilletStrips> {
    let rounding = params.rounding;
    #[allow(clippy::cast_precision_loss)]
    let detail = params.edge_detail as f64;

    let mut strips = FilletStrips {
        charts: Vec::with_capacity(model.edge_count() * params.edge_detail),
        width: 0.0,
        height: 0.0,
    };

    for &edge_id in model.edges() {
        let edge = model.edge(edge_id)?;
        let o1 = center_of(model, centers, edge.vertices[0])?;
        let o2 = center_of(model, centers, edge.vertices[1])?;

        let n0 = model.face(edge.faces[0])?.normal;
        let n1 = model.face(edge.faces[1])?.normal;

        let q1 = Quat::identity();
        let q2 = Quat::rotation_between(&n0, &n1).ok_or(GeometryError::ZeroVector)?;

        let a = q1 * Vector3::x();
        let b = q2 * Vector3::x();
        let width = a.dot(&b).clamp(-1.0, 1.0).acos() * rounding / detail;
        let height = (o1 - o2).norm();

        for step in 0..params.edge_detail {
            #[allow(clippy::cast_precision_loss)]
            let step = step as f64;
            let swing = |t: f64| q1.slerp(&q2, t);

            let v11 = o1 + swing(step / detail) * (n0 * rounding);
            let v21 = o2 + swing(step / detail) * (n0 * rounding);
            let v12 = o1 + swing((step + 1.0) / detail) * (n0 * rounding);
            let v22 = o2 + swing((step + 1.0) / detail) * (n0 * rounding);
            let normal = swing((step + 0.5) / detail) * n0;

            let t0 = strips.width;
            strips.width += (width * 100.0).ceil() / 100.0;
            strips.height = strips.height.max(height);

            let mut corners = vec![
                (v11, Vector2::new(t0, 0.0)),
                (v21, Vector2::new(t0, height)),
                (v22, Vector2::new(t0 + width, height)),
                (v12, Vector2::new(t0 + width, 0.0)),
            ];
            if (v21 - v11).cross(&(v12 - v11)).dot(&normal) < 0.0 {
                corners.reverse();
            }

            strips.charts.push(RawChart { corners, normal });
        }
    }

    Ok(strips)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::vertex_center::vertex_centers;
    use super::*;
    use crate::operations::BuildModel;

    fn cube_model() -> Model {
        let points: Vec<Point3> = (0..8)
            .map(|i| {
                Point3::new(
                    if i & 0b001 == 0 { -0.5 } else { 0.5 },
                    if i & 0b010 == 0 { -0.5 } else { 0.5 },
                    if i & 0b100 == 0 { -0.5 } else { 0.5 },
                )
            })
            .collect();
        BuildModel::new(points, vec![1.0], 6).execute().unwrap()
    }

    #[test]
    fn one_chart_per_segment() {
        let model = cube_model();
        let params = BevelParams {
            rounding: 0.09,
            edge_detail: 5,
        };
        let centers = vertex_centers(&model, params.rounding).unwrap();
        let strips = generate(&model, &centers, params).unwrap();

        assert_eq!(strips.charts.len(), 12 * 5);
        assert!(strips.width > 0.0);
        // Rounded cube edges shrink by one rounding radius at each end.
        assert!((strips.height - (1.0 - 2.0 * 0.09)).abs() < 1e-9);
    }

    #[test]
    fn corners_sit_on_the_rounding_arc() {
        let model = cube_model();
        let params = BevelParams {
            rounding: 0.09,
            edge_detail: 4,
        };
        let centers = vertex_centers(&model, params.rounding).unwrap();
        let strips = generate(&model, &centers, params).unwrap();

        // Every fillet corner lies exactly one rounding radius away from
        // one of the two endpoint centers.
        for chart in &strips.charts {
            for &(p, _) in &chart.corners {
                let nearest = centers
                    .iter()
                    .map(|c| (p - c).norm())
                    .fold(f64::INFINITY, f64::min);
                assert!((nearest - params.rounding).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn quads_wind_with_their_normal() {
        let model = cube_model();
        let params = BevelParams {
            rounding: 0.09,
            edge_detail: 5,
        };
        let centers = vertex_centers(&model, params.rounding).unwrap();
        let strips = generate(&model, &centers, params).unwrap();

        for chart in &strips.charts {
            let (p0, _) = chart.corners[0];
            let (p1, _) = chart.corners[1];
            let (p2, _) = chart.corners[2];
            assert!((p1 - p0).cross(&(p2 - p0)).dot(&chart.normal) > 0.0);
        }
    }
}
