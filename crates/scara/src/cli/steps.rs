use super::GlobalArgs;
use anyhow::{Result, anyhow};
use clap::Args;
use scara_core::{JointAngles, Position};
use serde::Serialize;

#[derive(Args)]
pub struct StepsArgs {
    /// Target X coordinate.
    #[arg(allow_negative_numbers = true)]
    pub x: f64,

    /// Target Y coordinate.
    #[arg(allow_negative_numbers = true)]
    pub y: f64,

    /// Current absolute step counts of joint 1 and joint 2.
    #[arg(
        long,
        num_args = 2,
        value_names = ["JOINT1", "JOINT2"],
        default_values = ["0", "0"],
        allow_negative_numbers = true
    )]
    pub current: Vec<i64>,
}

#[derive(Debug, Serialize)]
struct StepsOutput {
    steps: [i64; 2],
    angles: JointAngles,
}

impl StepsArgs {
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let config = global.load_config()?;
        let kin = config.kinematics()?;
        let map = config.actuator_map()?;

        let current: [i64; 2] = self
            .current
            .as_slice()
            .try_into()
            .map_err(|_| anyhow!("--current takes exactly two step counts"))?;
        let target = Position::new(self.x, self.y);

        let max_radius = map
            .max_radius()
            .map_or(kin.max_radius(), |cap| cap.min(kin.max_radius()));
        let steps = map.point_to_steps(&kin, target, current).ok_or_else(|| {
            tracing::warn!(
                x = target.x,
                y = target.y,
                radius = target.radius(),
                max_radius,
                "step target out of reach"
            );
            anyhow!(
                "target ({}, {}) is unreachable: distance {:.4} is outside [{:.4}, {:.4}]",
                target.x,
                target.y,
                target.radius(),
                kin.min_radius(),
                max_radius
            )
        })?;

        let output = StepsOutput {
            steps,
            angles: config.output.from_solver(map.angles_from_steps(steps)),
        };
        tracing::debug!(?current, ?output, "step targets");

        global.emit(&output, || format!("{} {}", steps[0], steps[1]))
    }
}
