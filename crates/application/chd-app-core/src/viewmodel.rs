use chd_core::SystemProfile;

use crate::app::ChdApplication;
use crate::domain::AppState;

#[derive(Debug, Clone)]
pub struct SystemOptionVm {
    pub system: SystemProfile,
    pub label: &'static str,
}

#[derive(Debug, Clone)]
pub struct MainVm {
    pub busy: bool,
    pub status_badge: &'static str,
    pub selected: SystemProfile,
    pub systems: Vec<SystemOptionVm>,
    pub can_start: bool,
    pub status_line: String,
    /// 0.0..=1.0 for the progress bar.
    pub progress: f32,
    /// Empty when idle.
    pub percent_label: String,
    pub output_tail: String,
}

pub fn main_vm(state: &AppState) -> MainVm {
    let busy = state.conversion.is_running();
    MainVm {
        busy,
        status_badge: if busy { "BUSY" } else { "IDLE" },
        selected: state.system,
        systems: SystemProfile::sorted()
            .into_iter()
            .map(|system| SystemOptionVm {
                system,
                label: system.name(),
            })
            .collect(),
        can_start: !busy,
        status_line: state.conversion.status.clone(),
        progress: state.conversion.progress / 100.0,
        percent_label: state
            .conversion
            .percent
            .map(|p| format!("{p:.1}%"))
            .unwrap_or_default(),
        output_tail: state.conversion.output_tail.clone(),
    }
}

/// Extensions without the dot, as native file dialogs expect them.
pub fn picker_extensions(system: SystemProfile) -> Vec<&'static str> {
    system
        .extensions()
        .iter()
        .map(|ext| ext.trim_start_matches('.'))
        .collect()
}

impl ChdApplication {
    pub fn main_vm(&self) -> MainVm {
        main_vm(&self.state)
    }
}
