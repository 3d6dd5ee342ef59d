use uuid::Uuid;

use crate::batch::BatchSummary;

pub type ConversionRunId = Uuid;

pub const IDLE_STATUS: &str = "Idle";

#[derive(Debug, Clone)]
pub enum ConversionRunEvent {
    Started {
        total: usize,
    },
    FileStarted {
        index: usize,
        total: usize,
        name: String,
    },
    Progress(f32),
    OutputTail(String),
    FileFinished {
        ok: bool,
    },
    Completed {
        summary: BatchSummary,
    },
    Failed {
        message: String,
    },
}

/// Live state of the current (or last) conversion run.
#[derive(Debug, Clone)]
pub struct ConversionState {
    pub run_id: Option<ConversionRunId>,
    pub running: bool,
    pub status: String,
    pub progress: f32,
    /// `None` hides the percent label.
    pub percent: Option<f32>,
    pub output_tail: String,
    pub converted: usize,
    pub failed: usize,
    pub last_summary: Option<BatchSummary>,
}

impl Default for ConversionState {
    fn default() -> Self {
        Self::idle()
    }
}

impl ConversionState {
    pub fn idle() -> Self {
        Self {
            run_id: None,
            running: false,
            status: IDLE_STATUS.to_string(),
            progress: 0.0,
            percent: None,
            output_tail: String::new(),
            converted: 0,
            failed: 0,
            last_summary: None,
        }
    }

    pub fn with_run_id(mut self, run_id: Option<ConversionRunId>) -> Self {
        self.run_id = run_id;
        self
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_progress(&mut self, percent: f32) {
        let clamped = percent.clamp(0.0, 100.0);
        self.progress = clamped;
        self.percent = Some(clamped);
    }

    /// Back to the resting state after a run; the output tail stays for inspection.
    pub fn finish(&mut self) {
        self.running = false;
        self.status = IDLE_STATUS.to_string();
        self.progress = 0.0;
        self.percent = None;
    }
}
