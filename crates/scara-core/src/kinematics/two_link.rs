// Two-link planar (single arm SCARA) kinematics with absolute joint angles

use crate::{
    error::{KinematicsError, Link},
    kinematics::{JointAngles, Position, SolutionPair},
};
use std::f64::consts::PI;

/// Slack on the reachable annulus, in length units.
pub const REACH_TOLERANCE: f64 = 1e-6;

/// Two-link arm whose joint angles are both measured from the positive
/// X-axis.
///
/// The solver is an immutable pair of link lengths plus the derived bounds of
/// the reachable annulus. Every method is a pure function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoLinkKinematics {
    l1: f64,
    l2: f64,
    max_radius: f64,
    min_radius: f64,
}

impl TwoLinkKinematics {
    pub fn new(l1: f64, l2: f64) -> Result<Self, KinematicsError> {
        check_length(Link::First, l1)?;
        check_length(Link::Second, l2)?;
        Ok(Self {
            l1,
            l2,
            max_radius: l1 + l2,
            min_radius: (l1 - l2).abs(),
        })
    }

    pub fn l1(&self) -> f64 {
        self.l1
    }

    pub fn l2(&self) -> f64 {
        self.l2
    }

    /// Outer edge of the reachable annulus (arm fully extended)
    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    /// Inner edge of the reachable annulus (arm fully folded)
    pub fn min_radius(&self) -> f64 {
        self.min_radius
    }

    /// Whether `target` lies in the reachable annulus, within
    /// [`REACH_TOLERANCE`].
    pub fn is_reachable(&self, target: Position) -> bool {
        self.radius_reachable(target.radius())
    }

    fn radius_reachable(&self, l3: f64) -> bool {
        // written so that a NaN radius is rejected
        l3 >= self.min_radius - REACH_TOLERANCE && l3 <= self.max_radius + REACH_TOLERANCE
    }

    /// End-effector position for the given absolute joint angles.
    pub fn forward(&self, angles: JointAngles) -> Position {
        let (sin1, cos1) = angles.theta1.to_radians().sin_cos();
        let (sin2, cos2) = angles.theta2.to_radians().sin_cos();
        Position {
            x: self.l1 * cos1 + self.l2 * cos2,
            y: self.l1 * sin1 + self.l2 * sin2,
        }
    }

    /// Both joint-angle solutions reaching `target`, or `None` when the
    /// target lies outside the reachable annulus.
    ///
    /// Angles are wrapped to `[0, 360)`. The positive-elbow branch comes first
    /// and neither branch is preferred.
    pub fn inverse(&self, target: Position) -> Option<SolutionPair> {
        // Third side of the triangle formed with the two links
        let l3 = target.radius();
        if !self.radius_reachable(l3) {
            return None;
        }

        let (l1, l2) = (self.l1, self.l2);

        // At the origin atan2 is undefined and the base ratio is 0/0
        let (target_angle, cos_base) = if l3 == 0.0 {
            (0.0, 1.0)
        } else {
            (
                target.y.atan2(target.x),
                (l1 * l1 + l3 * l3 - l2 * l2) / (2.0 * l1 * l3),
            )
        };

        // Angle between the links, opposite the third side
        let cos_elbow = (l1 * l1 + l2 * l2 - l3 * l3) / (2.0 * l1 * l2);
        let elbow = cos_elbow.clamp(-1.0, 1.0).acos();

        // Angle between link 1 and the line to the target
        let base = cos_base.clamp(-1.0, 1.0).acos();

        Some(SolutionPair::new(
            absolute_branch(target_angle - base, elbow),
            absolute_branch(target_angle + base, -elbow),
        ))
    }
}

fn check_length(link: Link, length: f64) -> Result<(), KinematicsError> {
    if length.is_finite() && length > 0.0 {
        Ok(())
    } else {
        Err(KinematicsError::InvalidGeometry { link, length })
    }
}

/// Turn link 1's direction and the signed elbow angle into absolute joint
/// angles. Link 2 points back along link 1 (`theta1 + pi`) rotated by the
/// elbow angle.
fn absolute_branch(theta1: f64, elbow: f64) -> JointAngles {
    let theta2 = theta1 + PI - elbow;
    JointAngles::new(theta1.to_degrees(), theta2.to_degrees()).normalized()
}
