use super::GlobalArgs;
use anyhow::Result;
use clap::Args;
use scara_core::JointAngles;

#[derive(Args)]
pub struct ForwardArgs {
    /// Link 1 angle from the X-axis, in degrees.
    #[arg(allow_negative_numbers = true)]
    pub theta1: f64,

    /// Link 2 angle from the X-axis, in degrees, including any configured
    /// theta2 offset.
    #[arg(allow_negative_numbers = true)]
    pub theta2: f64,
}

impl ForwardArgs {
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let config = global.load_config()?;
        let kin = config.kinematics()?;

        let angles = config
            .output
            .to_solver(JointAngles::new(self.theta1, self.theta2));
        let position = kin.forward(angles);
        tracing::debug!(?angles, ?position, "forward kinematics");

        global.emit(&position, || format!("{:.4} {:.4}", position.x, position.y))
    }
}
