use crate::math::{Quat, Vector3};
use crate::topology::Model;

/// Speed-squared threshold below which a body counts as settled.
const SETTLE_SPEED_SQ: f64 = 1e-4;

/// Rotated-normal dot threshold for a face pointing straight down.
///
/// -0.999 keeps the acceptance cone within ~2.6 degrees so two faces cannot
/// qualify near-simultaneously.
const FACE_DOWN_DOT: f64 = -0.999;

/// Live physics state for one rolled die at a simulation tick.
///
/// Supplied by the external physics collaborator; the resolver never reads
/// the simulation directly.
#[derive(Debug, Clone, Copy)]
pub struct RollState {
    /// Unit orientation quaternion of the body.
    pub orientation: Quat,
    /// Linear velocity.
    pub velocity: Vector3,
    /// Angular velocity.
    pub angular_velocity: Vector3,
    /// Overrides the speed thresholds when the body has been frozen.
    pub is_static: bool,
}

/// Reads the settled face value out of a die's physics state.
///
/// A pure, non-blocking query; callers evaluate it once per tick until a
/// definite value appears.
pub struct ResolveRoll {
    state: RollState,
}

impl ResolveRoll {
    /// Creates a new `ResolveRoll` query.
    #[must_use]
    pub fn new(state: RollState) -> Self {
        Self { state }
    }

    /// Executes the query against a model and its result table.
    ///
    /// Returns the printed value of the face currently pointing up, or
    /// `None` while the body has not settled. A settled body with zero or
    /// multiple downward faces is a soft ambiguity from numerical noise at
    /// rest: it is logged and resolves to `None` until a later tick reads a
    /// definite value.
    #[must_use]
    pub fn execute(&self, model: &Model, results: &[u32]) -> Option<u32> {
        let settled = self.state.is_static
            || (self.state.angular_velocity.norm_squared() < SETTLE_SPEED_SQ
                && self.state.velocity.norm_squared() < SETTLE_SPEED_SQ);
        if !settled {
            return None;
        }

        // A face whose rotated normal points straight down has its printed
        // value facing up.
        let mut down = None;
        let mut qualifying = 0_usize;
        for (index, &face_id) in model.faces().iter().enumerate() {
            let Ok(face) = model.face(face_id) else {
                continue;
            };
            let world = self.state.orientation * face.normal;
            if world.dot(&Vector3::y()) < FACE_DOWN_DOT {
                qualifying += 1;
                if down.is_none() {
                    down = Some(index);
                }
            }
        }

        match (down, qualifying) {
            (Some(index), 1) => results.get(index).copied(),
            _ => {
                tracing::warn!(qualifying, "settled die has no unambiguous down face");
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_4;

    use super::*;
    use crate::math::Point3;
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

    fn results(model: &Model) -> Vec<u32> {
        #[allow(clippy::cast_possible_truncation)]
        let count = model.face_count() as u32;
        (1..=count).collect()
    }

    fn down_face_index(model: &Model) -> usize {
        model
            .faces()
            .iter()
            .position(|&f| model.face(f).unwrap().normal.dot(&Vector3::y()) < -0.999)
            .unwrap()
    }

    fn rest_state(orientation: Quat) -> RollState {
        RollState {
            orientation,
            velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            is_static: false,
        }
    }

    #[test]
    fn identity_orientation_reads_down_face() {
        let model = cube_model();
        let results = results(&model);
        let expected = results[down_face_index(&model)];

        let value = ResolveRoll::new(rest_state(Quat::identity())).execute(&model, &results);
        assert_eq!(value, Some(expected));
    }

    #[test]
    fn spinning_body_is_unsettled() {
        let model = cube_model();
        let results = results(&model);

        let state = RollState {
            orientation: Quat::identity(),
            velocity: Vector3::zeros(),
            // 2e-4 squared speed sits just above the settle threshold.
            angular_velocity: Vector3::new(2e-4_f64.sqrt(), 0.0, 0.0),
            is_static: false,
        };
        assert_eq!(ResolveRoll::new(state).execute(&model, &results), None);
    }

    #[test]
    fn static_flag_overrides_speed() {
        let model = cube_model();
        let results = results(&model);

        let state = RollState {
            orientation: Quat::identity(),
            velocity: Vector3::new(5.0, 0.0, 0.0),
            angular_velocity: Vector3::new(5.0, 0.0, 0.0),
            is_static: true,
        };
        let expected = results[down_face_index(&model)];
        assert_eq!(ResolveRoll::new(state).execute(&model, &results), Some(expected));
    }

    #[test]
    fn tilted_die_is_ambiguous() {
        let model = cube_model();
        let results = results(&model);

        // Balanced on an edge: no face within the acceptance cone.
        let tilt = Quat::from_axis_angle(&Vector3::z_axis(), FRAC_PI_4);
        assert_eq!(ResolveRoll::new(rest_state(tilt)).execute(&model, &results), None);
    }

    #[test]
    fn quarter_turn_moves_the_result() {
        let model = cube_model();
        let results = results(&model);

        // After a quarter turn about Z, the face that was pointing towards
        // -X now points down.
        let turn = Quat::from_axis_angle(&Vector3::z_axis(), -std::f64::consts::FRAC_PI_2);
        let expected_index = model
            .faces()
            .iter()
            .position(|&f| {
                let n = model.face(f).unwrap().normal;
                (turn * n).dot(&Vector3::y()) < -0.999
            })
            .unwrap();

        let value = ResolveRoll::new(rest_state(turn)).execute(&model, &results);
        assert_eq!(value, Some(results[expected_index]));
    }

    #[test]
    fn every_face_is_reachable() {
        let model = cube_model();
        let results = results(&model);

        for &face_id in model.faces() {
            let normal = model.face(face_id).unwrap().normal;
            // Rotate this face's normal onto world-down; the up-facing
            // normal needs an explicit half-turn.
            let orientation = Quat::rotation_between(&normal, &-Vector3::y())
                .unwrap_or_else(|| Quat::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI));
            let value = ResolveRoll::new(rest_state(orientation))
                .execute(&model, &results)
                .unwrap();
            let index = model.face_index(face_id).unwrap();
            assert_eq!(value, results[index]);
        }
    }
}
