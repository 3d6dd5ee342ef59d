use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use thiserror::Error;

use chd_core::{ConversionJob, ProgressExtractor, COMPLETE_PERCENT};

use crate::diagnostics::DiagnosticLog;

mod decode;
use decode::ChunkDecoder;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("converter not found: {0}")]
    ToolNotFound(PathBuf),
    #[error("failed to start converter: {0}")]
    Spawn(#[source] io::Error),
    #[error("converter output stream failed: {0}")]
    Stream(#[source] io::Error),
}

/// Receives live updates while the converter runs.
pub trait RunObserver {
    fn on_progress(&mut self, percent: f32);

    /// Latest output tail, CR/LF flattened.
    fn on_output(&mut self, _tail: &str) {}
}

impl<F: FnMut(f32)> RunObserver for F {
    fn on_progress(&mut self, percent: f32) {
        self(percent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub exit_code: Option<i32>,
}

impl RunOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Launches the converter for one job and streams its merged output.
pub struct ChdmanRunner {
    tool: PathBuf,
    log_path: Option<PathBuf>,
}

impl ChdmanRunner {
    pub fn new(tool: impl Into<PathBuf>) -> Self {
        Self {
            tool: tool.into(),
            log_path: Some(DiagnosticLog::default_path()),
        }
    }

    pub fn with_log_path(mut self, log_path: Option<PathBuf>) -> Self {
        self.log_path = log_path;
        self
    }

    pub fn tool(&self) -> &Path {
        &self.tool
    }

    pub fn run(
        &self,
        job: &ConversionJob,
        observer: &mut dyn RunObserver,
    ) -> Result<RunOutcome, RunError> {
        if !self.tool.is_file() {
            return Err(RunError::ToolNotFound(self.tool.clone()));
        }

        let mut cmd = Command::new(&self.tool);
        cmd.args(job.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        #[cfg(target_os = "windows")]
        {
            use std::os::windows::process::CommandExt;
            const CREATE_NO_WINDOW: u32 = 0x0800_0000;
            cmd.creation_flags(CREATE_NO_WINDOW);
        }

        tracing::info!(
            "Running {} {} -i {} -o {}",
            self.tool.display(),
            job.subcommand(),
            job.input_path().display(),
            job.output_path().display()
        );

        let mut child = cmd.spawn().map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => RunError::ToolNotFound(self.tool.clone()),
            _ => RunError::Spawn(e),
        })?;

        let mut log = self.log_path.as_deref().and_then(DiagnosticLog::open);
        if let Some(log) = log.as_mut() {
            log.begin(&self.tool, job);
        }

        // stdout and stderr are pumped on their own threads into one channel,
        // which yields a single stream in arrival order.
        let (tx, rx) = mpsc::channel::<String>();
        let mut pumps = Vec::with_capacity(2);
        let sources: [(&str, Option<Box<dyn Read + Send>>); 2] = [
            (
                "chd-stdout",
                child.stdout.take().map(|s| Box::new(s) as Box<dyn Read + Send>),
            ),
            (
                "chd-stderr",
                child.stderr.take().map(|s| Box::new(s) as Box<dyn Read + Send>),
            ),
        ];
        for (name, source) in sources {
            let Some(source) = source else { continue };
            match spawn_pump(name, source, tx.clone()) {
                Ok(handle) => pumps.push(handle),
                Err(e) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(RunError::Stream(e));
                }
            }
        }
        drop(tx);

        let mut extractor = ProgressExtractor::new();
        for chunk in rx {
            if let Some(log) = log.as_mut() {
                log.write(&chunk);
            }
            extractor.feed(&chunk, |pct| observer.on_progress(pct));
            observer.on_output(extractor.tail());
        }

        let mut stream_error = None;
        for pump in pumps {
            match pump.join() {
                Ok(Ok(())) => {}
                Ok(Err(e)) => stream_error = Some(e),
                Err(_) => {
                    stream_error = Some(io::Error::other("output reader thread panicked"));
                }
            }
        }

        let status = child.wait().map_err(RunError::Stream)?;
        let outcome = RunOutcome {
            exit_code: status.code(),
        };
        if let Some(log) = log.as_mut() {
            log.end(outcome.exit_code);
        }

        if let Some(e) = stream_error {
            return Err(RunError::Stream(e));
        }

        if outcome.success() {
            observer.on_progress(COMPLETE_PERCENT);
        } else {
            tracing::warn!(
                "{} exited with {:?} for {}",
                self.tool.display(),
                outcome.exit_code,
                job.input_path().display()
            );
        }
        Ok(outcome)
    }
}

fn spawn_pump(
    name: &str,
    mut source: Box<dyn Read + Send>,
    tx: mpsc::Sender<String>,
) -> io::Result<thread::JoinHandle<io::Result<()>>> {
    thread::Builder::new().name(name.into()).spawn(move || {
        let mut decoder = ChunkDecoder::default();
        let mut buf = [0u8; chd_config::READ_CHUNK_BYTES];
        loop {
            let n = match source.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            let text = decoder.decode(&buf[..n]);
            if !text.is_empty() && tx.send(text).is_err() {
                return Ok(());
            }
        }
        let rest = decoder.finish();
        if !rest.is_empty() {
            let _ = tx.send(rest);
        }
        Ok(())
    })
}
