use crate::components::{command, forms, readout};
use crate::dialogs;
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

use chd_app_core::viewmodel::MainVm;
use chd_app_core::{AppCommand, ChdApplication};

pub struct ScreenResponse {
    pub quit: bool,
}

pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    vm: &MainVm,
    app: &mut ChdApplication,
) -> ScreenResponse {
    let mut quit = false;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(14.0),
        size: percent(1.),
        overflow: taffy::Point {
            x: taffy::Overflow::Hidden,
            y: taffy::Overflow::Scroll,
        },
        min_size: taffy::Size {
            width: length(0.0),
            height: length(0.0),
        },
        ..Default::default()
    })
    .add(|tui| {
        if let Some(system) = forms::system_field(&mut *tui, &vm.systems, vm.selected, !vm.busy) {
            tracing::debug!("Selected system {system}");
            if let Err(e) = app.dispatch(AppCommand::SelectSystem(system)) {
                tracing::error!("Failed to select system: {e}");
            }
        }

        let cmd_resp = command::draw(&mut *tui, vm.can_start);
        if cmd_resp.convert_single {
            if let Some((input, output)) = dialogs::pick_single(vm.selected) {
                if let Err(e) = app.dispatch(AppCommand::ConvertSingle { input, output }) {
                    tracing::error!("Failed to start conversion: {e}");
                }
            }
        }
        if cmd_resp.convert_folder {
            if let Some(folder) = dialogs::pick_folder() {
                if let Err(e) = app.dispatch(AppCommand::ConvertFolder(folder)) {
                    tracing::error!("Failed to start batch conversion: {e:#}");
                }
            }
        }
        quit = cmd_resp.quit;

        readout::draw(&mut *tui, vm);

        tui.label(
            egui::RichText::new("Tip: drop disc images or folders onto the window")
                .size(10.0)
                .color(crate::theme::COL_TEXT_DIM),
        );
    });

    ScreenResponse { quit }
}
