use super::GlobalArgs;
use crate::config::load_document;
use anyhow::{Context, Result, bail};
use clap::Args;
use scara_core::validation::{Comparison, ReferenceSet};
use std::path::PathBuf;

#[derive(Args)]
pub struct CompareArgs {
    /// Reference cases (TOML or JSON) with their arm geometry.
    ///
    /// Defaults to the built-in firmware log.
    #[arg(long)]
    pub reference: Option<PathBuf>,

    /// Largest acceptable per-joint error, in degrees.
    #[arg(long, default_value_t = 0.2)]
    pub tolerance: f64,
}

impl CompareArgs {
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let set: ReferenceSet = match &self.reference {
            Some(path) => load_document(path)?,
            None => ReferenceSet::firmware_log(),
        };
        tracing::info!(
            cases = set.cases.len(),
            l1 = set.l1,
            l2 = set.l2,
            "comparing against reference"
        );

        let comparisons = set.compare().context("invalid reference geometry")?;
        global.emit(&comparisons, || render(&comparisons, self.tolerance))?;

        let failures = comparisons
            .iter()
            .filter(|c| !c.within(self.tolerance))
            .count();
        if failures > 0 {
            bail!(
                "{failures} of {} cases exceed {}°",
                comparisons.len(),
                self.tolerance
            );
        }
        Ok(())
    }
}

fn render(comparisons: &[Comparison], tolerance: f64) -> String {
    let mut out: Vec<String> = comparisons.iter().map(|c| c.to_string()).collect();
    out.push(summary(comparisons, tolerance));
    out.join("\n")
}

fn summary(comparisons: &[Comparison], tolerance: f64) -> String {
    let failures = comparisons.iter().filter(|c| !c.within(tolerance)).count();
    let worst = comparisons
        .iter()
        .filter_map(Comparison::max_angle_error)
        .fold(0.0, f64::max);
    format!(
        "{} cases, {failures} over {tolerance}°, worst {worst:.3}°",
        comparisons.len()
    )
}
