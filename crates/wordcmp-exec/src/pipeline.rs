//! Pipeline: load -> filter -> sort -> write, producing a `RunReport`.
//!
//! Behavior on failure:
//! - a stage whose resource cannot be opened (or breaks mid-stream) is recorded
//!   as a `StageFailure` and does no further work;
//! - later stages still run on whatever state exists, so an unreadable reference
//!   list yields an empty output file;
//! - `run` itself never fails.

use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use wordcmp_core::prelude::{LineStore, PipelineConfig};
use wordcmp_io::FsLineStore;
use wordcmp_operators::WordSet;

use crate::metrics::stage_done;
use crate::report::{RunReport, Stage, StageFailure};

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("{stage} stage: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: wordcmp_core::prelude::Error,
    },
    #[error("report encoding: {0}")]
    Report(#[from] serde_json::Error),
}

/// Pipeline owns its configuration and the store that resolves resource names.
pub struct Pipeline {
    cfg: PipelineConfig,
    store: Box<dyn LineStore>,
}

impl Pipeline {
    pub fn new(cfg: PipelineConfig, store: Box<dyn LineStore>) -> Self {
        Self { cfg, store }
    }

    /// Pipeline over local files.
    pub fn with_fs(cfg: PipelineConfig) -> Self {
        Self::new(cfg, Box::new(FsLineStore::new()))
    }

    /// Run all four stages and return what happened.
    pub fn run(&self) -> RunReport {
        let mut report = RunReport::new(self.cfg.clone(), now_millis());

        let mut reference = WordSet::new();
        if let Err(e) = self.load(&mut reference, &mut report) {
            record(&mut report, e);
        }

        let mut found = WordSet::new();
        if let Err(e) = self.filter(&reference, &mut found, &mut report) {
            record(&mut report, e);
        }

        found.sort_all();
        stage_done("sort", "-", &[("words", found.len())]);

        if let Err(e) = self.write(&found, &mut report) {
            record(&mut report, e);
        }

        report.reallocations = reference.reallocations() + found.reallocations();
        report.finished_ms = now_millis();
        report
    }

    fn load(&self, reference: &mut WordSet, report: &mut RunReport) -> Result<(), ExecError> {
        let stage = Stage::Load;
        let mut source = self
            .store
            .open_source(&self.cfg.source_path)
            .map_err(|source| ExecError::Stage { stage, source })?;
        report.load = reference
            .load(source.as_mut())
            .map_err(|source| ExecError::Stage { stage, source })?;
        stage_done(
            "load",
            &self.cfg.source_path,
            &[
                ("inserted", report.load.inserted),
                ("skipped", report.load.skipped),
            ],
        );
        Ok(())
    }

    fn filter(
        &self,
        reference: &WordSet,
        found: &mut WordSet,
        report: &mut RunReport,
    ) -> Result<(), ExecError> {
        let stage = Stage::Filter;
        let mut source = self
            .store
            .open_source(&self.cfg.filter_path)
            .map_err(|source| ExecError::Stage { stage, source })?;
        report.filter = reference
            .filter_into(source.as_mut(), found)
            .map_err(|source| ExecError::Stage { stage, source })?;
        stage_done(
            "filter",
            &self.cfg.filter_path,
            &[("read", report.filter.read), ("matched", report.filter.matched)],
        );
        Ok(())
    }

    fn write(&self, found: &WordSet, report: &mut RunReport) -> Result<(), ExecError> {
        let stage = Stage::Write;
        let mut sink = self
            .store
            .create_sink(&self.cfg.output_path)
            .map_err(|source| ExecError::Stage { stage, source })?;
        report.written = found
            .serialize(sink.as_mut())
            .map_err(|source| ExecError::Stage { stage, source })?;
        stage_done("write", &self.cfg.output_path, &[("written", report.written)]);
        Ok(())
    }
}

fn record(report: &mut RunReport, err: ExecError) {
    #[cfg(feature = "tracing")]
    tracing::warn!(error = %err, "stage failed");

    if let ExecError::Stage { stage, source } = err {
        report.failures.push(StageFailure {
            stage,
            resource: source.resource().map(str::to_string),
            message: source.to_string(),
        });
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
