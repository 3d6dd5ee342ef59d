use std::path::{Path, PathBuf};

use chd_core::ConversionJob;
use chd_infra::{resolve_tool, ChdmanRunner, DiagnosticLog, RunObserver, ToolLocator};

use crate::ports::ConverterPort;

pub struct ChdmanConverter {
    locator: ToolLocator,
    tool_override: Option<PathBuf>,
    log_path: Option<PathBuf>,
}

impl Default for ChdmanConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChdmanConverter {
    pub fn new() -> Self {
        Self {
            locator: ToolLocator::new(),
            tool_override: None,
            log_path: Some(DiagnosticLog::default_path()),
        }
    }

    pub fn with_locator(mut self, locator: ToolLocator) -> Self {
        self.locator = locator;
        self
    }

    pub fn with_tool_override(mut self, tool: Option<PathBuf>) -> Self {
        self.tool_override = tool;
        self
    }

    pub fn with_log_path(mut self, log_path: Option<PathBuf>) -> Self {
        self.log_path = log_path;
        self
    }
}

impl ConverterPort for ChdmanConverter {
    fn locate_tool(&self) -> Option<PathBuf> {
        match self.tool_override.as_deref() {
            Some(path) => resolve_tool(Some(path)),
            None => self.locator.locate(),
        }
    }

    fn convert(
        &self,
        tool: &Path,
        job: &ConversionJob,
        observer: &mut dyn RunObserver,
    ) -> anyhow::Result<bool> {
        let outcome = ChdmanRunner::new(tool)
            .with_log_path(self.log_path.clone())
            .run(job, observer)?;
        Ok(outcome.success())
    }
}
