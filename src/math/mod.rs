pub mod polygon_3d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 matrix type.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Unit quaternion type used for orientations and normal sweeps.
pub type Quat = nalgebra::UnitQuaternion<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Derived solids (trapezohedron, dodecahedron, icosahedron) have irrational
/// coordinates, so edge lengths and face normals are always compared within
/// this absolute tolerance, never for exact equality.
pub const TOLERANCE: f64 = 1e-6;
