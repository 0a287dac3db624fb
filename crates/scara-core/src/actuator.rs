//! Mapping between motor step counts and absolute joint angles.
//!
//! Joint 1's step count is zero when link 1 points along the positive X-axis.
//! Joint 2's zero sits at an offset from the X-axis, by default 180 degrees,
//! which leaves the arm folded back over itself at power-on.
//!
//! Moves are planned relative to the current step counts so that each joint
//! takes the short way round to its target angle.

use crate::{
    angle::{FULL_TURN, shortest_rotation, wrap_degrees},
    error::KinematicsError,
    kinematics::{JointAngles, Position, TwoLinkKinematics},
};

/// Per-axis distance from the origin, in millimetres, below which a target
/// counts as the origin itself.
pub const CLOSE_TO_ORIGIN_TOLERANCE: f64 = 1.0;

pub const DEFAULT_ORIGIN_THETA2_OFFSET: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActuatorMap {
    steps_per_rot: [f64; 2],
    origin_theta2_offset: f64,
    max_radius: Option<f64>,
}

impl ActuatorMap {
    pub fn new(steps_per_rot: [f64; 2], origin_theta2_offset: f64) -> Result<Self, KinematicsError> {
        for (joint, steps) in steps_per_rot.into_iter().enumerate() {
            if !(steps.is_finite() && steps > 0.0) {
                return Err(KinematicsError::InvalidStepsPerRotation { joint, steps });
            }
        }
        if !origin_theta2_offset.is_finite() {
            return Err(KinematicsError::InvalidOriginOffset {
                offset: origin_theta2_offset,
            });
        }
        Ok(Self {
            steps_per_rot,
            origin_theta2_offset,
            max_radius: None,
        })
    }

    /// Refuse targets farther than `radius` from the origin, even when the
    /// links could reach them.
    pub fn with_max_radius(self, radius: f64) -> Result<Self, KinematicsError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(KinematicsError::InvalidMaxRadius { radius });
        }
        Ok(Self {
            max_radius: Some(radius),
            ..self
        })
    }

    pub fn steps_per_rot(&self) -> [f64; 2] {
        self.steps_per_rot
    }

    pub fn origin_theta2_offset(&self) -> f64 {
        self.origin_theta2_offset
    }

    pub fn max_radius(&self) -> Option<f64> {
        self.max_radius
    }

    /// Absolute joint angles, wrapped to `[0, 360)`, for the given step counts.
    pub fn angles_from_steps(&self, steps: [i64; 2]) -> JointAngles {
        JointAngles::new(
            wrap_degrees(steps[0] as f64 * FULL_TURN / self.steps_per_rot[0]),
            wrap_degrees(
                steps[1] as f64 * FULL_TURN / self.steps_per_rot[1] + self.origin_theta2_offset,
            ),
        )
    }

    /// Absolute step counts that bring each joint to `target` along the
    /// shortest rotation from `current_steps`.
    pub fn steps_for_angles(&self, target: JointAngles, current_steps: [i64; 2]) -> [i64; 2] {
        let current = self.angles_from_steps(current_steps);
        let rotations = [
            shortest_rotation(target.theta1, current.theta1),
            shortest_rotation(target.theta2, current.theta2),
        ];
        let mut out = current_steps;
        for (joint, rotation) in rotations.into_iter().enumerate() {
            out[joint] += (rotation * self.steps_per_rot[joint] / FULL_TURN).round() as i64;
        }
        out
    }

    /// Step counts placing the end effector at `target`, or `None` when it is
    /// out of reach or beyond the configured maximum radius.
    ///
    /// Of the two inverse solutions the one needing the smaller link 1
    /// rotation wins. Within [`CLOSE_TO_ORIGIN_TOLERANCE`] of the origin
    /// link 1 stays put and link 2 folds back over it.
    pub fn point_to_steps(
        &self,
        kin: &TwoLinkKinematics,
        target: Position,
        current_steps: [i64; 2],
    ) -> Option<[i64; 2]> {
        // a NaN radius fails the comparison and is refused
        let within_cap = self.max_radius.is_none_or(|max| target.radius() <= max);
        if !within_cap {
            return None;
        }

        let current = self.angles_from_steps(current_steps);
        let near_origin = target.x.abs() < CLOSE_TO_ORIGIN_TOLERANCE
            && target.y.abs() < CLOSE_TO_ORIGIN_TOLERANCE;

        // folding back only lands on the origin when both links are equal
        let angles = if near_origin && kin.is_reachable(Position::ORIGIN) {
            JointAngles::new(current.theta1, current.theta1 + self.origin_theta2_offset).normalized()
        } else {
            let (_, angles) = kin.inverse(target)?.closest_to(&current);
            angles
        };

        Some(self.steps_for_angles(angles, current_steps))
    }

    /// End-effector position for the given step counts.
    pub fn steps_to_point(&self, kin: &TwoLinkKinematics, steps: [i64; 2]) -> Position {
        kin.forward(self.angles_from_steps(steps))
    }
}

impl Default for ActuatorMap {
    fn default() -> Self {
        Self {
            steps_per_rot: [3200.0, 3200.0],
            origin_theta2_offset: DEFAULT_ORIGIN_THETA2_OFFSET,
            max_radius: None,
        }
    }
}
