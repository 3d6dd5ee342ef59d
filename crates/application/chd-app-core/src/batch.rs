//! Sequential multi-file driver.
//!
//! Files are converted strictly one after another. Every file gets a
//! `FileStarted` event (which resets progress to zero), the converter's live
//! progress and output, and a `FileFinished` verdict. A file that cannot even
//! be turned into a job, or whose converter errors out, counts as a failure
//! and the batch moves on.

use std::path::{Path, PathBuf};

use chd_core::{ConversionJob, DiscPath, SystemProfile};
use chd_infra::RunObserver;

use crate::pipeline::ConversionRunEvent;
use crate::ports::ConverterPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchKind {
    /// One file with a user-chosen output path.
    Single,
    /// Outputs land next to their sources.
    Batch,
}

impl BatchKind {
    pub fn summary_title(self) -> &'static str {
        match self {
            BatchKind::Single => "Conversion Complete",
            BatchKind::Batch => "Batch Complete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
}

impl BatchItem {
    pub fn beside_source(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
        }
    }

    pub fn with_output(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: Some(output.into()),
        }
    }

    fn job(&self, system: SystemProfile) -> Result<ConversionJob, chd_core::JobError> {
        match &self.output {
            Some(output) => ConversionJob::new(self.input.clone(), output.clone(), system),
            None => ConversionJob::beside_source(self.input.clone(), system),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    pub kind: BatchKind,
    pub system: SystemProfile,
    pub items: Vec<BatchItem>,
}

impl BatchRequest {
    pub fn single(
        system: SystemProfile,
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            kind: BatchKind::Single,
            system,
            items: vec![BatchItem::with_output(input, output)],
        }
    }

    pub fn beside_sources(system: SystemProfile, inputs: Vec<PathBuf>) -> Self {
        Self {
            kind: BatchKind::Batch,
            system,
            items: inputs.into_iter().map(BatchItem::beside_source).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Counts only; per-file detail lives in the diagnostic log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub kind: BatchKind,
    pub system: SystemProfile,
    pub converted: usize,
    pub total: usize,
}

impl BatchSummary {
    pub fn failed(&self) -> usize {
        self.total - self.converted
    }

    pub fn all_succeeded(&self) -> bool {
        self.converted == self.total
    }

    pub fn title(&self) -> &'static str {
        self.kind.summary_title()
    }

    pub fn message(&self) -> String {
        format!(
            "{}\nConverted: {}\nFailed: {}",
            self.system.name(),
            self.converted,
            self.failed()
        )
    }
}

struct EventObserver<'a, 'b> {
    emit: &'a mut (dyn FnMut(ConversionRunEvent) + 'b),
}

impl RunObserver for EventObserver<'_, '_> {
    fn on_progress(&mut self, percent: f32) {
        (self.emit)(ConversionRunEvent::Progress(percent));
    }

    fn on_output(&mut self, tail: &str) {
        (self.emit)(ConversionRunEvent::OutputTail(tail.to_string()));
    }
}

pub fn run_batch(
    converter: &dyn ConverterPort,
    tool: &Path,
    request: &BatchRequest,
    emit: &mut dyn FnMut(ConversionRunEvent),
) -> BatchSummary {
    let total = request.len();
    let mut converted = 0;

    for (ix, item) in request.items.iter().enumerate() {
        emit(ConversionRunEvent::FileStarted {
            index: ix + 1,
            total,
            name: DiscPath::display_name(&item.input),
        });

        let ok = match item.job(request.system) {
            Ok(job) => {
                let mut observer = EventObserver { emit: &mut *emit };
                match converter.convert(tool, &job, &mut observer) {
                    Ok(ok) => ok,
                    Err(e) => {
                        tracing::warn!("Conversion of {} failed: {e:#}", item.input.display());
                        false
                    }
                }
            }
            Err(e) => {
                tracing::warn!("Skipping {}: {e}", item.input.display());
                false
            }
        };

        if ok {
            converted += 1;
        }
        emit(ConversionRunEvent::FileFinished { ok });
    }

    let summary = BatchSummary {
        kind: request.kind,
        system: request.system,
        converted,
        total,
    };
    tracing::info!(
        "{}: {} of {} converted",
        summary.title(),
        summary.converted,
        summary.total
    );
    summary
}
