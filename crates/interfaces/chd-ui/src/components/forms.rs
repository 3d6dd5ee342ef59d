use crate::utils::section_label;
use chd_app_core::viewmodel::SystemOptionVm;
use chd_core::SystemProfile;
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

/// System selector; returns the newly picked profile, if any. Disabled while busy.
pub fn system_field<'a>(
    tui: impl TuiBuilderLogic<'a>,
    options: &[SystemOptionVm],
    selected: SystemProfile,
    enabled: bool,
) -> Option<SystemProfile> {
    let mut picked = None;
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        align_items: Some(taffy::AlignItems::Center),
        gap: length(2.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| section_label(ui, "SYSTEM"));
        tui.ui(|ui| {
            ui.add_enabled_ui(enabled, |ui| {
                let mut current = selected;
                egui::ComboBox::from_id_salt("system-profile")
                    .selected_text(selected.name())
                    .width(320.0)
                    .show_ui(ui, |ui| {
                        for opt in options {
                            ui.selectable_value(&mut current, opt.system, opt.label);
                        }
                    });
                if current != selected {
                    picked = Some(current);
                }
            });
        });
    });
    picked
}
