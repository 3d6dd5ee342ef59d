use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::sync::mpsc;

use crate::app_core::DomainEvent;
use crate::batch::{run_batch, BatchRequest};
use crate::pipeline::{ConversionRunEvent, ConversionRunId};
use crate::ports::ConverterPort;

/// Runs conversion batches on a dedicated worker thread and reports back over the event channel.
pub struct ConversionOrchestrator {
    converter: Arc<dyn ConverterPort>,
    tx: mpsc::Sender<DomainEvent>,
}

impl ConversionOrchestrator {
    pub fn new(converter: Arc<dyn ConverterPort>, tx: mpsc::Sender<DomainEvent>) -> Self {
        Self { converter, tx }
    }

    pub fn start(
        &self,
        run_id: ConversionRunId,
        tool: PathBuf,
        request: BatchRequest,
    ) -> anyhow::Result<()> {
        let tx = self.tx.clone();
        let converter = self.converter.clone();

        std::thread::Builder::new()
            .name("chd-convert".into())
            .spawn(move || {
                let mut emit = |ev: ConversionRunEvent| {
                    // The receiver only goes away when the application shuts down.
                    let _ = tx.blocking_send(DomainEvent::ConversionEvent { run_id, ev });
                };

                let summary = run_batch(converter.as_ref(), &tool, &request, &mut emit);
                emit(ConversionRunEvent::Completed { summary });
            })
            .map(|_| ())
            .context("Failed to start conversion worker thread")
    }
}
