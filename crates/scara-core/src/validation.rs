//! Comparison of solver output against reference angle pairs.
//!
//! A reference case pairs a target position with the joint angles some other
//! system (usually the arm firmware) reported for it. The solver returns two
//! branches and has no opinion on which one the reference used, so the
//! comparison picks the branch whose `theta1` is closer to the reference.

use crate::{
    angle::angular_error,
    error::KinematicsError,
    kinematics::{Branch, JointAngles, Position, TwoLinkKinematics},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Link length of the arm that produced [`FIRMWARE_LOG`].
pub const FIRMWARE_ARM_MM: f64 = 150.0;

/// Positions and angles from a firmware WebUI session, sweeping a 261mm
/// circle in 7.2 degree steps with both links 150mm long.
pub const FIRMWARE_LOG: [ReferenceCase; 13] = [
    ReferenceCase::new(261.00, 0.00, 330.46, 29.54),
    ReferenceCase::new(258.94, 32.71, 337.66, 36.74),
    ReferenceCase::new(252.80, 64.91, 344.86, 43.94),
    ReferenceCase::new(242.67, 96.08, 352.06, 51.14),
    ReferenceCase::new(228.72, 125.74, 359.26, 58.34),
    ReferenceCase::new(211.15, 153.41, 6.46, 65.54),
    ReferenceCase::new(190.26, 178.67, 13.66, 72.74),
    ReferenceCase::new(166.37, 201.10, 20.86, 79.94),
    ReferenceCase::new(139.85, 220.37, 28.06, 87.14),
    ReferenceCase::new(111.13, 236.16, 35.26, 94.34),
    ReferenceCase::new(80.65, 248.23, 42.46, 101.54),
    ReferenceCase::new(48.91, 256.38, 49.66, 108.74),
    ReferenceCase::new(16.39, 260.48, 56.86, 115.94),
];

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCase {
    pub position: Position,
    pub expected: JointAngles,
}

impl ReferenceCase {
    pub const fn new(x: f64, y: f64, theta1: f64, theta2: f64) -> Self {
        Self {
            position: Position::new(x, y),
            expected: JointAngles::new(theta1, theta2),
        }
    }
}

/// A set of reference cases together with the arm geometry they were
/// recorded on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSet {
    pub l1: f64,
    pub l2: f64,
    pub cases: Vec<ReferenceCase>,
}

impl ReferenceSet {
    pub fn firmware_log() -> Self {
        Self {
            l1: FIRMWARE_ARM_MM,
            l2: FIRMWARE_ARM_MM,
            cases: FIRMWARE_LOG.to_vec(),
        }
    }

    pub fn solver(&self) -> Result<TwoLinkKinematics, KinematicsError> {
        TwoLinkKinematics::new(self.l1, self.l2)
    }

    pub fn compare(&self) -> Result<Vec<Comparison>, KinematicsError> {
        Ok(compare(&self.solver()?, &self.cases))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Unreachable,
    Solved {
        branch: Branch,
        computed: JointAngles,
        theta1_error: f64,
        theta2_error: f64,
        /// Distance between the reference position and the forward
        /// kinematics of the reference angles
        position_error: f64,
        /// Distance between the reference position and the forward
        /// kinematics of the computed angles
        round_trip_error: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Comparison {
    pub case: ReferenceCase,
    pub outcome: Outcome,
}

impl Comparison {
    /// Larger of the two joint errors, or `None` if the solver found no
    /// solution.
    pub fn max_angle_error(&self) -> Option<f64> {
        match self.outcome {
            Outcome::Unreachable => None,
            Outcome::Solved {
                theta1_error,
                theta2_error,
                ..
            } => Some(theta1_error.max(theta2_error)),
        }
    }

    /// Whether both joints match the reference within `tolerance` degrees.
    pub fn within(&self, tolerance: f64) -> bool {
        self.max_angle_error().is_some_and(|err| err <= tolerance)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ReferenceCase { position, expected } = self.case;
        write!(
            f,
            "({:8.2}, {:8.2})  ref {:6.2}° {:6.2}°",
            position.x, position.y, expected.theta1, expected.theta2
        )?;
        match self.outcome {
            Outcome::Unreachable => write!(f, "  unreachable"),
            Outcome::Solved {
                branch,
                computed,
                theta1_error,
                theta2_error,
                position_error,
                round_trip_error,
            } => write!(
                f,
                "  got {:6.2}° {:6.2}° [{branch}]  err {theta1_error:.2}° {theta2_error:.2}°  fk {position_error:.3}  rt {round_trip_error:.1e}",
                computed.theta1, computed.theta2
            ),
        }
    }
}

/// Run every case through `kin` and measure the result against its
/// reference.
pub fn compare(kin: &TwoLinkKinematics, cases: &[ReferenceCase]) -> Vec<Comparison> {
    cases
        .iter()
        .map(|case| Comparison {
            case: *case,
            outcome: solve_case(kin, case),
        })
        .collect()
}

fn solve_case(kin: &TwoLinkKinematics, case: &ReferenceCase) -> Outcome {
    let Some(pair) = kin.inverse(case.position) else {
        return Outcome::Unreachable;
    };
    let (branch, computed) = pair.closest_to(&case.expected);
    Outcome::Solved {
        branch,
        computed,
        theta1_error: angular_error(computed.theta1, case.expected.theta1),
        theta2_error: angular_error(computed.theta2, case.expected.theta2),
        position_error: position_error(&kin.forward(case.expected), &case.position),
        round_trip_error: position_error(&kin.forward(computed), &case.position),
    }
}

/// Euclidean distance between two positions
pub fn position_error(a: &Position, b: &Position) -> f64 {
    a.distance(b)
}
