use std::path::{Path, PathBuf};
use std::sync::Arc;

use chd_core::SystemProfile;
use tokio::sync::mpsc;

use crate::app_core::{reduce, AppCommand, DomainEvent};
use crate::batch::BatchRequest;
use crate::converter::ChdmanConverter;
use crate::discovery::{collect_dropped, collect_folder_inputs};
use crate::domain::{Alert, AppState};
use crate::orchestrator::ConversionOrchestrator;
use crate::pipeline::{ConversionRunEvent, ConversionRunId};
use crate::ports::ConverterPort;

pub struct ChdApplication {
    pub state: AppState,

    converter: Arc<dyn ConverterPort>,
    orchestrator: ConversionOrchestrator,

    msg_rx: mpsc::Receiver<DomainEvent>,
    msg_tx: mpsc::Sender<DomainEvent>,
}

impl Default for ChdApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl ChdApplication {
    pub fn new() -> Self {
        Self::with_converter(Arc::new(ChdmanConverter::new()))
    }

    pub fn with_converter(converter: Arc<dyn ConverterPort>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(100);
        Self {
            state: AppState::default(),
            orchestrator: ConversionOrchestrator::new(converter.clone(), msg_tx.clone()),
            converter,
            msg_rx,
            msg_tx,
        }
    }

    pub fn dispatch(&mut self, cmd: AppCommand) -> anyhow::Result<()> {
        match cmd {
            AppCommand::SelectSystem(system) => {
                self.select_system(system);
                Ok(())
            }
            AppCommand::ConvertSingle { input, output } => self.convert_single(input, output),
            AppCommand::ConvertFolder(folder) => self.convert_folder(&folder),
            AppCommand::ConvertDropped(paths) => self.convert_dropped(&paths),
        }
    }

    // --- Actions ---

    pub fn select_system(&mut self, system: SystemProfile) {
        self.apply(DomainEvent::SystemSelected(system));
    }

    /// One file to a user-chosen output path.
    pub fn convert_single(&mut self, input: PathBuf, output: PathBuf) -> anyhow::Result<()> {
        if self.reject_if_busy() {
            return Ok(());
        }
        let request = BatchRequest::single(self.state.system, input, output);
        self.start_run(request)
    }

    /// Every matching disc image directly inside `folder`, written beside its source.
    pub fn convert_folder(&mut self, folder: &Path) -> anyhow::Result<()> {
        if self.reject_if_busy() {
            return Ok(());
        }
        let system = self.state.system;
        let files = match collect_folder_inputs(folder, system.extensions()) {
            Ok(files) => files,
            Err(e) => {
                self.apply(DomainEvent::UserAlert(Alert::error("Error", format!("{e:#}"))));
                return Err(e);
            }
        };
        if files.is_empty() {
            tracing::info!("No {} inputs in {}", system.name(), folder.display());
            self.apply(DomainEvent::UserAlert(Alert::no_matching_files()));
            return Ok(());
        }
        self.start_run(BatchRequest::beside_sources(system, files))
    }

    /// Dropped files and folders; an empty result is ignored without a notice.
    pub fn convert_dropped(&mut self, paths: &[PathBuf]) -> anyhow::Result<()> {
        if self.reject_if_busy() {
            return Ok(());
        }
        let files = collect_dropped(paths);
        if files.is_empty() {
            tracing::debug!("Drop of {} path(s) had no disc images", paths.len());
            return Ok(());
        }
        self.start_run(BatchRequest::beside_sources(self.state.system, files))
    }

    fn reject_if_busy(&mut self) -> bool {
        if self.is_busy() {
            tracing::info!("Rejected request while a conversion is running");
            self.apply(DomainEvent::UserAlert(Alert::busy()));
            return true;
        }
        false
    }

    fn start_run(&mut self, request: BatchRequest) -> anyhow::Result<()> {
        let Some(tool) = self.converter.locate_tool() else {
            tracing::error!("Converter binary not found");
            self.apply(DomainEvent::UserAlert(Alert::tool_not_found()));
            return Ok(());
        };

        let run_id: ConversionRunId = uuid::Uuid::new_v4();
        self.state.conversion.run_id = Some(run_id);
        self.apply(DomainEvent::ConversionEvent {
            run_id,
            ev: ConversionRunEvent::Started {
                total: request.len(),
            },
        });

        if let Err(e) = self.orchestrator.start(run_id, tool, request) {
            self.apply(DomainEvent::ConversionEvent {
                run_id,
                ev: ConversionRunEvent::Failed {
                    message: e.to_string(),
                },
            });
            return Err(e);
        }
        Ok(())
    }

    // --- State Management ---

    /// Call this from the UI tick to fold worker events into the state.
    pub fn handle_events(&mut self) {
        while let Ok(ev) = self.msg_rx.try_recv() {
            if let DomainEvent::ConversionEvent { run_id, .. } = &ev {
                if self.state.conversion.run_id != Some(*run_id) {
                    continue;
                }
            }
            self.apply(ev);
        }
    }

    pub fn sender(&self) -> mpsc::Sender<DomainEvent> {
        self.msg_tx.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.state.conversion.is_running()
    }

    /// Oldest pending notice, if any.
    pub fn take_alert(&mut self) -> Option<Alert> {
        self.state.alerts.pop_front()
    }

    fn apply(&mut self, ev: DomainEvent) {
        self.state = reduce(std::mem::take(&mut self.state), ev);
    }
}
