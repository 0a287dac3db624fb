use super::GlobalArgs;
use anyhow::{Result, bail};
use clap::Args;
use scara_core::{Branch, Position, SolutionPair};

#[derive(Args)]
pub struct InverseArgs {
    /// Target X coordinate.
    #[arg(allow_negative_numbers = true)]
    pub x: f64,

    /// Target Y coordinate.
    #[arg(allow_negative_numbers = true)]
    pub y: f64,

    /// Only print one branch (`positive` or `negative` elbow).
    #[arg(long, value_parser = parse_branch)]
    pub branch: Option<Branch>,
}

fn parse_branch(s: &str) -> Result<Branch, String> {
    Branch::parse(s).ok_or_else(|| format!("unknown branch `{s}`, expected positive or negative"))
}

impl InverseArgs {
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let config = global.load_config()?;
        let kin = config.kinematics()?;
        let target = Position::new(self.x, self.y);

        let Some(pair) = kin.inverse(target) else {
            tracing::warn!(
                x = target.x,
                y = target.y,
                radius = target.radius(),
                "target outside reachable annulus"
            );
            bail!(
                "target ({}, {}) is unreachable: distance {:.4} is outside [{:.4}, {:.4}]",
                target.x,
                target.y,
                target.radius(),
                kin.min_radius(),
                kin.max_radius()
            );
        };

        let pair = SolutionPair::new(
            config.output.from_solver(pair.positive_elbow),
            config.output.from_solver(pair.negative_elbow),
        );
        for (branch, angles) in pair.iter() {
            tracing::debug!(%branch, theta1 = angles.theta1, theta2 = angles.theta2, "solution");
        }

        match self.branch {
            Some(branch) => {
                let angles = pair[branch];
                global.emit(&angles, || {
                    format!("{branch} {:.4} {:.4}", angles.theta1, angles.theta2)
                })
            }
            None => global.emit(&pair, || {
                pair.iter()
                    .map(|(branch, angles)| {
                        format!("{branch} {:.4} {:.4}", angles.theta1, angles.theta2)
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            }),
        }
    }
}
