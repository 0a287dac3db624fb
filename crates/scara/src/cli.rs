use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

pub mod compare;
pub mod forward;
pub mod inverse;
pub mod steps;

/// Options shared by every subcommand
#[derive(Args)]
pub struct GlobalArgs {
    /// Path to the configuration file (TOML or JSON).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Length of link 1, overriding the configuration.
    #[arg(long, global = true)]
    pub l1: Option<f64>,

    /// Length of link 2, overriding the configuration.
    #[arg(long, global = true)]
    pub l2: Option<f64>,

    /// Furthest reachable distance for step targets, overriding the
    /// configuration.
    #[arg(long, global = true)]
    pub max_radius: Option<f64>,

    /// Offset in degrees added to reported theta2 values, overriding the
    /// configuration.
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub theta2_offset: Option<f64>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalArgs {
    /// Load the configuration file, if any, and apply command-line overrides.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(l1) = self.l1 {
            config.arm.l1_mm = l1;
        }
        if let Some(l2) = self.l2 {
            config.arm.l2_mm = l2;
        }
        if let Some(radius) = self.max_radius {
            config.arm.max_radius_mm = Some(radius);
        }
        if let Some(offset) = self.theta2_offset {
            config.output.theta2_offset_deg = offset;
        }

        config.validate()?;

        tracing::info!(
            l1 = config.arm.l1_mm,
            l2 = config.arm.l2_mm,
            max_radius = ?config.arm.max_radius_mm,
            theta2_offset = config.output.theta2_offset_deg,
            "arm geometry"
        );

        Ok(config)
    }

    /// Print `value` as JSON, or the text rendering otherwise.
    pub fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<()> {
        if self.json {
            let json = serde_json::to_string_pretty(value).context("failed to render JSON")?;
            println!("{json}");
        } else {
            println!("{}", text());
        }
        Ok(())
    }
}
