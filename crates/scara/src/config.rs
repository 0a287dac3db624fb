use anyhow::{Context, Result};
use scara_core::{JointAngles, TwoLinkKinematics, actuator::ActuatorMap};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::{fs, path::Path};

/// Arm configuration for the command-line tools
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Link geometry
    #[serde(default)]
    pub arm: ArmConfig,

    /// Caller-side adjustments applied to solver input and output
    #[serde(default)]
    pub output: OutputConfig,

    /// Motor step mapping
    #[serde(default)]
    pub actuator: ActuatorConfig,
}

/// Link lengths in millimetres
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArmConfig {
    #[serde(default = "default_link_mm")]
    pub l1_mm: f64,

    #[serde(default = "default_link_mm")]
    pub l2_mm: f64,

    /// Furthest distance from the origin a step target may be, defaulting to
    /// the full reach `l1_mm + l2_mm`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_radius_mm: Option<f64>,
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            l1_mm: default_link_mm(),
            l2_mm: default_link_mm(),
            max_radius_mm: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Added to theta2 reported by the solver, and removed from theta2
    /// before forward kinematics
    #[serde(default)]
    pub theta2_offset_deg: f64,
}

impl OutputConfig {
    /// Convert angles given on the command line into the solver's frame
    pub fn to_solver(&self, angles: JointAngles) -> JointAngles {
        JointAngles::new(angles.theta1, angles.theta2 - self.theta2_offset_deg)
    }

    /// Convert solver angles into the frame reported to the user
    pub fn from_solver(&self, angles: JointAngles) -> JointAngles {
        JointAngles::new(angles.theta1, angles.theta2 + self.theta2_offset_deg).normalized()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActuatorConfig {
    /// Motor steps for one full turn of each joint
    #[serde(default = "default_steps_per_rot")]
    pub steps_per_rot: [f64; 2],

    /// Absolute theta2 when joint 2 is at step zero
    #[serde(default = "default_origin_theta2_offset")]
    pub origin_theta2_offset_deg: f64,
}

impl Default for ActuatorConfig {
    fn default() -> Self {
        Self {
            steps_per_rot: default_steps_per_rot(),
            origin_theta2_offset_deg: default_origin_theta2_offset(),
        }
    }
}

fn default_link_mm() -> f64 {
    100.0
}

fn default_steps_per_rot() -> [f64; 2] {
    ActuatorMap::default().steps_per_rot()
}

fn default_origin_theta2_offset() -> f64 {
    scara_core::actuator::DEFAULT_ORIGIN_THETA2_OFFSET
}

/// Load a serde document from a file, auto-detecting TOML or JSON format
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let parsed = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => from_toml(&content),
        Some("json") => from_json(&content),
        // Try TOML first (preferred), fall back to JSON
        _ => from_toml(&content).or_else(|_| from_json(&content)),
    };
    parsed.with_context(|| format!("failed to load {}", path.display()))
}

fn from_toml<T: DeserializeOwned>(content: &str) -> Result<T> {
    toml::from_str(content).context("failed to parse as TOML")
}

fn from_json<T: DeserializeOwned>(content: &str) -> Result<T> {
    serde_json::from_str(content).context("failed to parse as JSON")
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_document(path.as_ref())
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        from_toml(content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        from_json(content)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.kinematics()?;
        self.actuator_map()?;
        if !self.output.theta2_offset_deg.is_finite() {
            anyhow::bail!(
                "output.theta2_offset_deg must be finite, got {}",
                self.output.theta2_offset_deg
            );
        }
        Ok(())
    }

    pub fn kinematics(&self) -> Result<TwoLinkKinematics> {
        TwoLinkKinematics::new(self.arm.l1_mm, self.arm.l2_mm).context("invalid [arm] geometry")
    }

    pub fn actuator_map(&self) -> Result<ActuatorMap> {
        let map = ActuatorMap::new(
            self.actuator.steps_per_rot,
            self.actuator.origin_theta2_offset_deg,
        )
        .context("invalid [actuator] settings")?;

        match self.arm.max_radius_mm {
            Some(radius) => map.with_max_radius(radius).context("invalid [arm] max_radius_mm"),
            None => Ok(map),
        }
    }
}
