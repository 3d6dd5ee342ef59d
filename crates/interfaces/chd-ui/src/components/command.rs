use crate::utils::cmd_button;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub struct CommandResponse {
    pub convert_single: bool,
    pub convert_folder: bool,
    pub quit: bool,
}

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, can_start: bool) -> CommandResponse {
    let mut resp = CommandResponse {
        convert_single: false,
        convert_folder: false,
        quit: false,
    };

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(10.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        resp.convert_single = tui
            .ui(|ui| cmd_button(ui, "Convert Single File", "primary", can_start))
            .clicked();
        resp.convert_folder = tui
            .ui(|ui| cmd_button(ui, "Batch Convert Folder", "primary", can_start))
            .clicked();
        resp.quit = tui
            .ui(|ui| cmd_button(ui, "Quit", "danger", true))
            .clicked();
    });

    resp
}
