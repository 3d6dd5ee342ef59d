use chd_core::SystemProfile;

use crate::domain::Alert;
use crate::pipeline::{ConversionRunEvent, ConversionRunId};

#[derive(Debug, Clone)]
pub enum DomainEvent {
    // Selection
    SystemSelected(SystemProfile),

    // Conversion runs
    ConversionEvent {
        run_id: ConversionRunId,
        ev: ConversionRunEvent,
    },

    // User-visible notices
    UserAlert(Alert),
}
