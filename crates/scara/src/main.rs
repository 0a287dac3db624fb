use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Command::Forward(args) => args.run(&cli.global),
        Command::Inverse(args) => args.run(&cli.global),
        Command::Steps(args) => args.run(&cli.global),
        Command::Compare(args) => args.run(&cli.global),
    }
}

/// Logs go to stderr so stdout only carries results. Defaults to warnings,
/// override with `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Parser)]
#[command(name = "scara", about = "Two-link SCARA arm kinematics")]
struct Cli {
    #[command(flatten)]
    global: cli::GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the end-effector position for two joint angles.
    Forward(cli::forward::ForwardArgs),
    /// Compute both joint-angle solutions for a target position.
    Inverse(cli::inverse::InverseArgs),
    /// Compute motor step targets for a position from the current steps.
    Steps(cli::steps::StepsArgs),
    /// Check the solver against reference angles recorded from firmware.
    Compare(cli::compare::CompareArgs),
}
