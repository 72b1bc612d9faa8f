//! Canonical die shape definitions.
//!
//! Point clouds, valid edge lengths, result tables, and label layouts for
//! the six standard dice. Derived solids are constructed from quaternion
//! sweeps and golden-ratio coordinates, so every distance comparison during
//! model construction runs under the global tolerance.

use std::f64::consts::{FRAC_PI_2, PI, SQRT_2, TAU};
use std::sync::Arc;

use crate::error::Result;
use crate::math::{Point3, Quat, Vector3};
use crate::operations::BuildModel;
use crate::texture::{FaceLabel, LabelTexture, TextureSource};

use super::{Die, DieFactory};

fn factory(
    points: Vec<Point3>,
    edge_lengths: Vec<f64>,
    faces: usize,
    labels: &[(&'static str, usize, f64, f64)],
    glyph_height: f64,
    results: Vec<u32>,
) -> Result<DieFactory> {
    let model = Arc::new(BuildModel::new(points, edge_lengths, faces).execute()?);
    let labels = labels
        .iter()
        .map(|&(text, face, rotation, offset)| FaceLabel::new(text, face, rotation, offset))
        .collect();
    let texture = TextureSource::Labels(LabelTexture::new(labels, glyph_height));
    DieFactory::new(model, texture, results)
}

/// Four-sided die: a regular tetrahedron resting on a face, apex up.
///
/// Each face prints three values; the one read upright at the apex belongs
/// to the face pointing down.
///
/// # Errors
///
/// Returns an error if the fixed shape definition fails construction.
pub fn d4() -> Result<DieFactory> {
    #[rustfmt::skip]
    const LABELS: [(&str, usize, f64, f64); 12] = [
        ("1", 0, 0.0,       -125.0),
        ("2", 0, 2.0 / 3.0, -125.0),
        ("3", 0, 4.0 / 3.0, -125.0),
        ("1", 1, 0.0,       -125.0),
        ("4", 1, 4.0 / 3.0, -125.0),
        ("3", 1, 2.0 / 3.0, -125.0),
        ("1", 2, 0.0,       -125.0),
        ("4", 2, 2.0 / 3.0, -125.0),
        ("2", 2, 4.0 / 3.0, -125.0),
        ("4", 3, 0.0,       -125.0),
        ("2", 3, 4.0 / 3.0, -125.0),
        ("3", 3, 2.0 / 3.0, -125.0),
    ];

    let edge = 20.0 / 16.0;

    let q2 = Quat::from_axis_angle(&Vector3::z_axis(), -(-1.0_f64 / 3.0).acos());
    let q3 = Quat::from_axis_angle(&Vector3::y_axis(), TAU / 3.0) * q2;
    let q4 = Quat::from_axis_angle(&Vector3::y_axis(), -TAU / 3.0) * q2;

    let leg = Vector3::y() * (edge * 6.0_f64.sqrt() / 4.0);

    let points = vec![
        Point3::from(leg),
        Point3::from(q2 * leg),
        Point3::from(q3 * leg),
        Point3::from(q4 * leg),
    ];

    factory(points, vec![edge], 4, &LABELS, 130.0, vec![2, 3, 4, 1])
}

/// Six-sided die: a unit cube.
///
/// # Errors
///
/// Returns an error if the fixed shape definition fails construction.
pub fn d6() -> Result<DieFactory> {
    #[rustfmt::skip]
    const LABELS: [(&str, usize, f64, f64); 6] = [
        ("1", 0, 3.0 / 4.0, 20.0),
        ("2", 2, 1.0 / 4.0, 20.0),
        ("3", 1, 7.0 / 4.0, 20.0),
        ("4", 3, 1.0 / 4.0, 20.0),
        ("5", 5, 7.0 / 4.0, 20.0),
        ("6", 4, 1.0 / 4.0, 20.0),
    ];

    let edge = 1.0;

    let mut points = Vec::with_capacity(8);
    for i in 0..8_u8 {
        points.push(Point3::new(
            if i & 0b001 == 0 { -edge / 2.0 } else { edge / 2.0 },
            if i & 0b010 == 0 { -edge / 2.0 } else { edge / 2.0 },
            if i & 0b100 == 0 { -edge / 2.0 } else { edge / 2.0 },
        ));
    }

    factory(points, vec![edge], 6, &LABELS, 240.0, vec![6, 4, 5, 3, 1, 2])
}

/// Eight-sided die: a regular octahedron.
///
/// # Errors
///
/// Returns an error if the fixed shape definition fails construction.
pub fn d8() -> Result<DieFactory> {
    #[rustfmt::skip]
    const LABELS: [(&str, usize, f64, f64); 8] = [
        ("1", 0, 4.0 / 3.0, 0.0),
        ("2", 1, 4.0 / 3.0, 0.0),
        ("3", 2, 2.0 / 3.0, 0.0),
        ("4", 3, 2.0 / 3.0, 0.0),
        ("5", 5, 4.0 / 3.0, 0.0),
        ("6", 4, 4.0 / 3.0, 0.0),
        ("7", 6, 2.0 / 3.0, 0.0),
        ("8", 7, 2.0 / 3.0, 0.0),
    ];

    let edge = 18.5 / 16.0;
    let x = edge / SQRT_2;

    let points = vec![
        Point3::new(x, 0.0, 0.0),
        Point3::new(-x, 0.0, 0.0),
        Point3::new(0.0, x, 0.0),
        Point3::new(0.0, -x, 0.0),
        Point3::new(0.0, 0.0, x),
        Point3::new(0.0, 0.0, -x),
    ];

    factory(points, vec![edge], 8, &LABELS, 200.0, vec![8, 7, 6, 5, 3, 4, 2, 1])
}

/// Ten-sided die: a pentagonal trapezohedron.
///
/// The kite geometry comes from the law-of-sines construction: the apex
/// half-height follows from the kite's tip angle, and the zig-zag belt
/// spokes are swept around the axis in fifths of a turn.
///
/// # Errors
///
/// Returns an error if the fixed shape definition fails construction.
pub fn d10() -> Result<DieFactory> {
    #[rustfmt::skip]
    const LABELS: [(&str, usize, f64, f64); 10] = [
        ("1", 0, 0.0, 0.0),
        ("2", 8, 1.0, 0.0),
        ("3", 4, 0.0, 0.0),
        ("4", 5, 1.0, 0.0),
        ("5", 2, 0.0, 0.0),
        ("6", 9, 1.0, 0.0),
        ("7", 1, 0.0, 0.0),
        ("8", 7, 1.0, 0.0),
        ("9", 3, 0.0, 0.0),
        ("10", 6, 1.0, 0.0),
    ];

    let edge = 1.0;
    let theta = TAU / 5.0;
    let tip = PI * 0.27;

    let r1 = tip.sin() * edge;
    let h1 = tip.cos() * edge;
    let r2 = (theta / 2.0).cos() * r1;
    let a2 = (r2 / h1).atan();
    let a3 = PI - tip - a2;
    let height = edge / a2.sin() * a3.sin();

    let leg_length = (height * height / 4.0 + edge * edge - height * edge * tip.cos()).sqrt();
    let leg_angle = FRAC_PI_2 - (edge * tip.sin() / leg_length).asin();

    let q1 = Quat::from_axis_angle(&Vector3::y_axis(), theta);
    let q2 = Quat::from_axis_angle(&Vector3::z_axis(), leg_angle);

    let tall = Vector3::y() * (height / 2.0);
    let leg = Vector3::x() * leg_length;

    let mut points = Vec::with_capacity(12);
    points.push(Point3::from(tall));
    let mut spoke = q2 * leg;
    for _ in 0..5 {
        points.push(Point3::from(spoke));
        spoke = q1 * spoke;
    }
    points.push(Point3::from(-tall));
    let mut spoke = q2 * (-leg);
    for _ in 0..5 {
        points.push(Point3::from(spoke));
        spoke = q1 * spoke;
    }

    let edge_lengths = vec![(points[1] - points[0]).norm(), (points[7] - points[3]).norm()];

    factory(
        points,
        edge_lengths,
        10,
        &LABELS,
        160.0,
        vec![10, 4, 6, 2, 8, 7, 1, 3, 9, 5],
    )
}

/// Twelve-sided die: a regular dodecahedron scaled to a half-unit edge.
///
/// # Errors
///
/// Returns an error if the fixed shape definition fails construction.
pub fn d12() -> Result<DieFactory> {
    #[rustfmt::skip]
    const LABELS: [(&str, usize, f64, f64); 12] = [
        ("1", 0, 0.0,       20.0),
        ("2", 2, 8.0 / 5.0, 20.0),
        ("3", 1, 2.0 / 5.0, 20.0),
        ("4", 7, 0.0,       20.0),
        ("5", 6, 6.0 / 5.0, 20.0),
        ("6", 5, 6.0 / 5.0, 20.0),
        ("7", 3, 8.0 / 5.0, 20.0),
        ("8", 8, 8.0 / 5.0, 20.0),
        ("9", 4, 4.0 / 5.0, 20.0),
        ("10", 10, 4.0 / 5.0, 20.0),
        ("11", 9, 8.0 / 5.0, 20.0),
        ("12", 11, 6.0 / 5.0, 20.0),
    ];

    let edge = 0.5;
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let scale = edge * phi / 2.0;

    #[rustfmt::skip]
    let raw = [
        (1.0, 1.0, 1.0),
        (-1.0, 1.0, 1.0),
        (1.0, -1.0, 1.0),
        (1.0, 1.0, -1.0),
        (-1.0, -1.0, 1.0),
        (1.0, -1.0, -1.0),
        (-1.0, 1.0, -1.0),
        (-1.0, -1.0, -1.0),
        (0.0, phi, 1.0 / phi),
        (0.0, -phi, 1.0 / phi),
        (0.0, phi, -1.0 / phi),
        (0.0, -phi, -1.0 / phi),
        (1.0 / phi, 0.0, phi),
        (1.0 / phi, 0.0, -phi),
        (-1.0 / phi, 0.0, phi),
        (-1.0 / phi, 0.0, -phi),
        (phi, 1.0 / phi, 0.0),
        (-phi, 1.0 / phi, 0.0),
        (phi, -1.0 / phi, 0.0),
        (-phi, -1.0 / phi, 0.0),
    ];
    let points = raw
        .iter()
        .map(|&(x, y, z)| Point3::new(x * scale, y * scale, z * scale))
        .collect();

    factory(
        points,
        vec![edge],
        12,
        &LABELS,
        240.0,
        vec![12, 10, 11, 6, 4, 7, 8, 9, 5, 2, 3, 1],
    )
}

/// Twenty-sided die: a regular icosahedron.
///
/// # Errors
///
/// Returns an error if the fixed shape definition fails construction.
pub fn d20() -> Result<DieFactory> {
    #[rustfmt::skip]
    const LABELS: [(&str, usize, f64, f64); 20] = [
        ("1", 0, 0.0,       35.0),
        ("2", 12, 0.0,      35.0),
        ("3", 1, 2.0 / 3.0, 35.0),
        ("4", 13, 2.0 / 3.0, 35.0),
        ("5", 10, 0.0,      35.0),
        ("6", 7, 0.0,       35.0),
        ("7", 2, 4.0 / 3.0, 35.0),
        ("8", 18, 2.0 / 3.0, 35.0),
        ("9", 6, 2.0 / 3.0, 35.0),
        ("10", 16, 0.0,     35.0),
        ("11", 19, 0.0,     35.0),
        ("12", 9, 4.0 / 3.0, 35.0),
        ("13", 17, 4.0 / 3.0, 35.0),
        ("14", 14, 2.0 / 3.0, 35.0),
        ("15", 11, 0.0,     35.0),
        ("16", 5, 0.0,      35.0),
        ("17", 3, 4.0 / 3.0, 35.0),
        ("18", 8, 2.0 / 3.0, 35.0),
        ("19", 4, 2.0 / 3.0, 35.0),
        ("20", 15, 0.0,     35.0),
    ];

    let edge = 0.8;
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let scale = edge / 2.0;

    #[rustfmt::skip]
    let raw = [
        (0.0, 1.0, phi),
        (0.0, -1.0, phi),
        (0.0, 1.0, -phi),
        (0.0, -1.0, -phi),
        (1.0, phi, 0.0),
        (-1.0, phi, 0.0),
        (1.0, -phi, 0.0),
        (-1.0, -phi, 0.0),
        (phi, 0.0, 1.0),
        (phi, 0.0, -1.0),
        (-phi, 0.0, 1.0),
        (-phi, 0.0, -1.0),
    ];
    let points = raw
        .iter()
        .map(|&(x, y, z)| Point3::new(x * scale, y * scale, z * scale))
        .collect();

    factory(
        points,
        vec![edge],
        20,
        &LABELS,
        180.0,
        vec![20, 18, 14, 4, 2, 5, 12, 15, 3, 9, 16, 6, 19, 17, 7, 1, 11, 8, 13, 10],
    )
}

/// The six standard dice built at the canonical rounding and tessellation.
///
/// # Errors
///
/// Returns an error if any shape definition fails construction.
pub fn standard_set() -> Result<[Die; 6]> {
    Ok([
        d4()?.build(0.05, 5)?,
        d6()?.build(0.09, 5)?,
        d8()?.build(0.09, 5)?,
        d10()?.build(0.09, 5)?,
        d12()?.build(0.09, 5)?,
        d20()?.build(0.09, 5)?,
    ])
}
