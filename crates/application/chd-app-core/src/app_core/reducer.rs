use crate::domain::{Alert, AppState};
use crate::pipeline::{ConversionRunEvent, ConversionState};

use super::events::DomainEvent;

pub fn reduce(mut state: AppState, ev: DomainEvent) -> AppState {
    match ev {
        DomainEvent::SystemSelected(system) => {
            // Locked while a run is using the current selection.
            if !state.conversion.is_running() {
                state.system = system;
            }
        }

        DomainEvent::ConversionEvent { run_id: _, ev } => apply_conversion_event(&mut state, ev),

        DomainEvent::UserAlert(alert) => state.alerts.push_back(alert),
    }
    state
}

fn apply_conversion_event(state: &mut AppState, ev: ConversionRunEvent) {
    match ev {
        ConversionRunEvent::Started { total } => {
            tracing::debug!("Conversion run started with {total} file(s)");
            state.conversion = ConversionState::idle().with_run_id(state.conversion.run_id);
            state.conversion.running = true;
        }

        ConversionRunEvent::FileStarted { index, total, name } => {
            state.conversion.status = format!("[{index}/{total}] Converting: {name}");
            state.conversion.set_progress(0.0);
        }

        ConversionRunEvent::Progress(pct) => state.conversion.set_progress(pct),

        ConversionRunEvent::OutputTail(tail) => state.conversion.output_tail = tail,

        ConversionRunEvent::FileFinished { ok } => {
            if ok {
                state.conversion.converted += 1;
            } else {
                state.conversion.failed += 1;
            }
        }

        ConversionRunEvent::Completed { summary } => {
            state.conversion.finish();
            state
                .alerts
                .push_back(Alert::info(summary.title(), summary.message()));
            state.conversion.last_summary = Some(summary);
        }

        ConversionRunEvent::Failed { message } => {
            state.conversion.finish();
            state.alerts.push_back(Alert::error("Error", message));
        }
    }
}
