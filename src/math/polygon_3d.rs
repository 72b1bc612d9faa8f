use std::f64::consts::TAU;

use super::{Point3, Vector3};

/// Computes the centroid of a set of points.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid(points: &[Point3]) -> Point3 {
    let sum: Vector3 = points.iter().map(|p| p.coords).sum();
    Point3::from(sum / points.len() as f64)
}

/// Counter-clockwise angle of `p` around `origin`, measured from `reference`,
/// as seen from outside the solid along `normal`.
///
/// Returns a value in `[0, 2*pi)`.
#[must_use]
pub fn angle_ccw(reference: &Point3, p: &Point3, origin: &Point3, normal: &Vector3) -> f64 {
    let v1 = reference - origin;
    let v2 = p - origin;
    let cosine = (v1.dot(&v2) / (v1.norm() * v2.norm())).clamp(-1.0, 1.0);
    let theta = cosine.acos();

    if v1.cross(&v2).dot(normal) >= 0.0 {
        theta
    } else {
        TAU - theta
    }
}

/// Sorts points counter-clockwise around their centroid as seen along
/// `normal`, using the first point as the angular reference.
#[must_use]
pub fn sort_ccw(points: &[Point3], normal: &Vector3) -> Vec<Point3> {
    let center = centroid(points);
    let reference = points[0];

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| {
        angle_ccw(&reference, a, &center, normal).total_cmp(&angle_ccw(&reference, b, &center, normal))
    });
    sorted
}

/// Winding normal of a closed polygon: the sum of cross products of
/// consecutive rim vectors about the centroid.
///
/// Parallel to the plane normal; its direction encodes the winding order, so
/// a negative dot with an outward normal means the cycle runs clockwise.
#[must_use]
pub fn winding_normal(points: &[Point3]) -> Vector3 {
    let center = centroid(points);
    let mut sum = Vector3::zeros();
    for i in 0..points.len() {
        let a = points[i] - center;
        let b = points[(i + 1) % points.len()] - center;
        sum += a.cross(&b);
    }
    sum
}
