use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chd_core::ConversionJob;

/// Append-only copy of everything the converter printed, for post-hoc inspection.
pub struct DiagnosticLog {
    path: PathBuf,
    file: File,
}

impl DiagnosticLog {
    /// `chd_output.log` in the program directory, or the working directory if that is unknown.
    pub fn default_path() -> PathBuf {
        crate::locate::program_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(chd_config::DIAGNOSTIC_LOG_NAME)
    }

    /// A log that cannot be opened is skipped; conversion proceeds without it.
    pub fn open(path: &Path) -> Option<Self> {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(Self {
                path: path.to_path_buf(),
                file,
            }),
            Err(e) => {
                tracing::warn!("Diagnostic log {} unavailable: {e}", path.display());
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn begin(&mut self, tool: &Path, job: &ConversionJob) {
        let header = format!(
            "\n=== {} {} {} -i {} -o {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            tool.display(),
            job.subcommand(),
            job.input_path().display(),
            job.output_path().display(),
        );
        self.write(&header);
    }

    pub fn write(&mut self, chunk: &str) {
        let res = self
            .file
            .write_all(chunk.as_bytes())
            .and_then(|_| self.file.flush());
        if let Err(e) = res {
            tracing::debug!("Diagnostic log write failed: {e}");
        }
    }

    pub fn end(&mut self, exit_code: Option<i32>) {
        let footer = match exit_code {
            Some(code) => format!("\n=== exit code {code}\n"),
            None => "\n=== terminated without exit code\n".to_string(),
        };
        self.write(&footer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chd_core::SystemProfile;

    #[test]
    fn appends_across_sessions() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("chd_output.log");
        let job = ConversionJob::beside_source("in.cue", SystemProfile::Saturn).expect("job");

        for chunk in ["first run", "second run"] {
            let mut log = DiagnosticLog::open(&path).expect("open");
            log.begin(Path::new("chdman"), &job);
            log.write(chunk);
            log.end(Some(0));
        }

        let text = std::fs::read_to_string(&path).expect("read");
        assert!(text.contains("chdman createcd -i in.cue -o in.chd"));
        let first = text.find("first run").expect("first");
        let second = text.find("second run").expect("second");
        assert!(first < second);
        assert_eq!(text.matches("=== exit code 0").count(), 2);
    }

    #[test]
    fn unopenable_path_is_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing-dir").join("chd_output.log");
        assert!(DiagnosticLog::open(&path).is_none());
    }
}
