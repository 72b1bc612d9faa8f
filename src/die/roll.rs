use std::f64::consts::TAU;

use crate::math::{Point3, Quat, Vector3};

/// Initial kinematic state for a freshly spawned die body.
///
/// Consumed once at spawn by the physics collaborator; the kernel never
/// integrates it.
#[derive(Debug, Clone)]
pub struct Roll {
    /// Spawn position.
    pub position: Point3,
    /// Spawn orientation.
    pub orientation: Quat,
    /// Initial linear velocity.
    pub velocity: Vector3,
    /// Initial angular velocity.
    pub angular_velocity: Vector3,
}

impl Roll {
    /// Tabletop scatter throw: a random tumble flung across the tray.
    ///
    /// Planar velocity of magnitude 3 at a random heading, biased 8 units
    /// along +X, with the spin axis drawn from a random orientation.
    pub fn scatter(position: Point3, mut random: impl FnMut() -> f64) -> Self {
        let orientation = random_orientation(&mut random);

        let heading = random() * TAU;
        let velocity =
            Vector3::new(heading.cos(), 0.0, heading.sin()) * 3.0 + Vector3::new(8.0, 0.0, 0.0);

        let spin = random_orientation(&mut random);
        let angular_velocity = spin * (Vector3::y() * 30.0);

        Self {
            position,
            orientation,
            velocity,
            angular_velocity,
        }
    }
}

/// Uniform random unit quaternion from three uniform samples in `[0, 1)`.
///
/// The RNG is supplied as a closure so the kernel stays deterministic and
/// free of any random-number dependency.
pub fn random_orientation(mut random: impl FnMut() -> f64) -> Quat {
    let u = random();
    let v = random();
    let w = random();

    Quat::from_quaternion(nalgebra::Quaternion::new(
        u.sqrt() * (TAU * w).cos(),
        (1.0 - u).sqrt() * (TAU * v).sin(),
        (1.0 - u).sqrt() * (TAU * v).cos(),
        u.sqrt() * (TAU * w).sin(),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Deterministic low-discrepancy sequence standing in for an RNG.
    fn sequence() -> impl FnMut() -> f64 {
        let mut state = 0.0_f64;
        move || {
            state = (state + 0.618_033_988_749_894_9) % 1.0;
            state
        }
    }

    #[test]
    fn orientations_are_unit() {
        let mut random = sequence();
        for _ in 0..32 {
            let q = random_orientation(&mut random);
            assert!((q.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn orientations_vary() {
        let mut random = sequence();
        let a = random_orientation(&mut random);
        let b = random_orientation(&mut random);
        assert!(a.angle_to(&b) > 1e-3);
    }

    #[test]
    fn scatter_flings_toward_positive_x() {
        let roll = Roll::scatter(Point3::new(0.0, 2.0, 0.0), sequence());

        // Heading magnitude 3 around the +8 X bias.
        assert!(roll.velocity.x >= 5.0 && roll.velocity.x <= 11.0);
        assert!(roll.velocity.y.abs() < 1e-12);
        assert!(roll.velocity.z.abs() <= 3.0);
    }

    #[test]
    fn scatter_spins_hard() {
        let roll = Roll::scatter(Point3::origin(), sequence());
        assert!((roll.angular_velocity.norm() - 30.0).abs() < 1e-9);
    }
}
