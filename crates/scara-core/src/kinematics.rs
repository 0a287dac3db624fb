// Kinematics value types

use crate::angle::{angular_error, normalize_degrees};
use serde::{Deserialize, Serialize};
use std::{fmt, ops::Index};

pub mod two_link;

pub use two_link::{REACH_TOLERANCE, TwoLinkKinematics};

/// Cartesian end-effector position, in the same unit as the link lengths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from the origin
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another position
    pub fn distance(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Joint angles in degrees, both measured anticlockwise from the positive
/// X-axis.
///
/// `theta2` is the absolute direction of the second link, not its angle
/// relative to the first link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JointAngles {
    pub theta1: f64,
    pub theta2: f64,
}

impl JointAngles {
    pub const fn new(theta1: f64, theta2: f64) -> Self {
        Self { theta1, theta2 }
    }

    /// Both angles wrapped to `[0, 360)`
    pub fn normalized(self) -> Self {
        Self {
            theta1: normalize_degrees(self.theta1),
            theta2: normalize_degrees(self.theta2),
        }
    }

    /// Largest per-joint wraparound-aware difference to `other`
    pub fn max_error(&self, other: &JointAngles) -> f64 {
        angular_error(self.theta1, other.theta1).max(angular_error(self.theta2, other.theta2))
    }
}

/// The two inverse kinematics branches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    /// Branch using `+acos` for the elbow angle; always returned first.
    PositiveElbow,
    /// Branch using `-acos` for the elbow angle.
    NegativeElbow,
}

impl Branch {
    pub const ALL: [Branch; 2] = [Branch::PositiveElbow, Branch::NegativeElbow];

    /// Parse a branch name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "+" | "pos" | "positive" | "elbow+" | "positive_elbow" => Some(Branch::PositiveElbow),
            "-" | "neg" | "negative" | "elbow-" | "negative_elbow" => Some(Branch::NegativeElbow),
            _ => None,
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::PositiveElbow => f.write_str("elbow+"),
            Branch::NegativeElbow => f.write_str("elbow-"),
        }
    }
}

/// Both joint-angle solutions for one target position.
///
/// At the edges of the reachable annulus the two entries coincide.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolutionPair {
    pub positive_elbow: JointAngles,
    pub negative_elbow: JointAngles,
}

impl SolutionPair {
    pub const fn new(positive_elbow: JointAngles, negative_elbow: JointAngles) -> Self {
        Self {
            positive_elbow,
            negative_elbow,
        }
    }

    pub fn get(&self, branch: Branch) -> JointAngles {
        match branch {
            Branch::PositiveElbow => self.positive_elbow,
            Branch::NegativeElbow => self.negative_elbow,
        }
    }

    /// Branches in their fixed order, positive elbow first
    pub fn iter(&self) -> impl Iterator<Item = (Branch, JointAngles)> + '_ {
        Branch::ALL.into_iter().map(|branch| (branch, self.get(branch)))
    }

    /// Pick the branch whose `theta1` is nearest to `current.theta1`.
    ///
    /// Ties go to the positive-elbow branch.
    pub fn closest_to(&self, current: &JointAngles) -> (Branch, JointAngles) {
        let pos = angular_error(self.positive_elbow.theta1, current.theta1);
        let neg = angular_error(self.negative_elbow.theta1, current.theta1);
        if neg < pos {
            (Branch::NegativeElbow, self.negative_elbow)
        } else {
            (Branch::PositiveElbow, self.positive_elbow)
        }
    }

    /// Whether both branches describe the same arm pose within `tolerance`
    /// degrees.
    pub fn is_degenerate(&self, tolerance: f64) -> bool {
        self.positive_elbow.max_error(&self.negative_elbow) <= tolerance
    }
}

impl Index<Branch> for SolutionPair {
    type Output = JointAngles;

    fn index(&self, branch: Branch) -> &JointAngles {
        match branch {
            Branch::PositiveElbow => &self.positive_elbow,
            Branch::NegativeElbow => &self.negative_elbow,
        }
    }
}
