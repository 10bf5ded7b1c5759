use crate::model::Point;
use serde::{Deserialize, Serialize};

/// Spiral step used when none is configured.
pub const DEFAULT_STEP: i32 = 10;
/// Spiral points drawn for one rectangle before the search gives up.
pub const DEFAULT_MAX_SPIRAL_ATTEMPTS: u64 = 1_000_000;

/// Layouter configuration. Fixed for the lifetime of a layouter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayouterConfig {
    /// Point the cloud grows around.
    #[serde(default)]
    pub center: Point,
    /// Spiral growth rate: the radius gains `step` pixels per full turn (360 angle units).
    #[serde(default = "default_step")]
    pub step: i32,
    /// Cap on spiral points tried for a single rectangle. None searches without limit.
    #[serde(default = "default_max_spiral_attempts")]
    pub max_spiral_attempts: Option<u64>,
}

impl Default for LayouterConfig {
    fn default() -> Self {
        Self {
            center: Point::default(),
            step: default_step(),
            max_spiral_attempts: default_max_spiral_attempts(),
        }
    }
}

impl LayouterConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns an error if:
    /// - `step` is zero or negative
    /// - `max_spiral_attempts` is `Some(0)`
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::CloudError;

        if self.step <= 0 {
            return Err(CloudError::InvalidConfig(format!(
                "step must be greater than zero (got {})",
                self.step
            )));
        }
        if self.max_spiral_attempts == Some(0) {
            return Err(CloudError::InvalidConfig(
                "max_spiral_attempts must be at least 1 (use none to disable the cap)".into(),
            ));
        }
        Ok(())
    }
}

fn default_step() -> i32 {
    DEFAULT_STEP
}
fn default_max_spiral_attempts() -> Option<u64> {
    Some(DEFAULT_MAX_SPIRAL_ATTEMPTS)
}

/// Builder for `LayouterConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct LayouterConfigBuilder {
    cfg: LayouterConfig,
}

impl LayouterConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: LayouterConfig::default(),
        }
    }
    pub fn center(mut self, x: i32, y: i32) -> Self {
        self.cfg.center = Point::new(x, y);
        self
    }
    pub fn step(mut self, v: i32) -> Self {
        self.cfg.step = v;
        self
    }
    pub fn max_spiral_attempts(mut self, v: Option<u64>) -> Self {
        self.cfg.max_spiral_attempts = v;
        self
    }
    pub fn build(self) -> LayouterConfig {
        self.cfg
    }
}

impl LayouterConfig {
    /// Create a fluent builder for `LayouterConfig`.
    pub fn builder() -> LayouterConfigBuilder {
        LayouterConfigBuilder::new()
    }
}
