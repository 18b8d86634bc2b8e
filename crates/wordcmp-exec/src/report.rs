//! Run report emitted by `Pipeline::run`.

use std::fmt;

use serde::{Deserialize, Serialize};

use wordcmp_core::config::PipelineConfig;
use wordcmp_operators::{FilterStats, LoadStats};

use crate::pipeline::ExecError;

/// Stages that can fail. Sorting is in memory and cannot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Load,
    Filter,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Load => "load",
            Stage::Filter => "filter",
            Stage::Write => "write",
        };
        f.write_str(s)
    }
}

/// A stage that stopped early.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageFailure {
    pub stage: Stage,
    pub resource: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub config: PipelineConfig,
    pub load: LoadStats,
    pub filter: FilterStats,
    /// Lines written to the output resource.
    pub written: usize,
    /// Buffer growths across both sets.
    pub reallocations: usize,
    pub failures: Vec<StageFailure>,
    pub started_ms: u64,
    pub finished_ms: u64,
}

impl RunReport {
    pub fn new(config: PipelineConfig, started_ms: u64) -> Self {
        Self {
            config,
            load: LoadStats::default(),
            filter: FilterStats::default(),
            written: 0,
            reallocations: 0,
            failures: Vec::new(),
            started_ms,
            finished_ms: started_ms,
        }
    }

    /// True when every stage completed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed(&self, stage: Stage) -> bool {
        self.failures.iter().any(|f| f.stage == stage)
    }

    pub fn to_json_pretty(&self) -> Result<String, ExecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
