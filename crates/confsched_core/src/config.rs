//! Pipeline configuration.

use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_OUTPUT_CAPACITY: usize = 16;
const DEFAULT_INPUT_CAPACITY: usize = 16;

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroCapacity(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroCapacity(field) => write!(f, "{field} must be greater than zero"),
        }
    }
}

impl Error for ConfigError {}

/// Buffering knobs for the aggregation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Schedules buffered for a slow subscriber before recomputation waits.
    pub output_capacity: usize,
    /// Capacity of input feeds created via `SchedulePipeline::input_channel`.
    pub input_capacity: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_capacity: DEFAULT_OUTPUT_CAPACITY,
            input_capacity: DEFAULT_INPUT_CAPACITY,
        }
    }
}

impl PipelineConfig {
    /// Rejects configurations that tokio channels cannot be built from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_capacity == 0 {
            return Err(ConfigError::ZeroCapacity("output_capacity"));
        }
        if self.input_capacity == 0 {
            return Err(ConfigError::ZeroCapacity("input_capacity"));
        }
        Ok(())
    }
}
