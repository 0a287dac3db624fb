//! Kinematics for two-link planar (single arm SCARA) robots.
//!
//! Both joint angles are measured from the positive X-axis rather than the
//! second one being relative to the first link. This crate intentionally
//! avoids any configuration, transport or logging dependencies.

pub mod actuator;
pub mod angle;
pub mod error;
pub mod kinematics;
pub mod validation;

pub use error::{KinematicsError, Link};
pub use kinematics::{Branch, JointAngles, Position, SolutionPair, TwoLinkKinematics};
