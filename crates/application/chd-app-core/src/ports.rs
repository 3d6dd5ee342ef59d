use std::path::{Path, PathBuf};

use chd_core::ConversionJob;
use chd_infra::RunObserver;

/// Drives the external converter for one job at a time.
pub trait ConverterPort: Send + Sync + 'static {
    /// Resolve the converter binary, `None` if it cannot be found.
    fn locate_tool(&self) -> Option<PathBuf>;

    /// Run one job to completion. `Ok(true)` only when the converter exited cleanly.
    fn convert(
        &self,
        tool: &Path,
        job: &ConversionJob,
        observer: &mut dyn RunObserver,
    ) -> anyhow::Result<bool>;
}
