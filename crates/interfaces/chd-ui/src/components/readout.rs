use crate::theme::*;
use chd_app_core::viewmodel::MainVm;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

/// Status line, progress bar with its percent label, and the live tool output tail.
pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &MainVm) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(6.0),
        padding: length(10.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_BG_DARK)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.label(egui::RichText::new(&vm.status_line).color(COL_TEXT));

            tui.style(taffy::Style {
                size: taffy::Size {
                    width: percent(1.),
                    height: length(10.0),
                },
                ..Default::default()
            })
            .ui(|ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 2.0, COL_BUTTON);
                let fill_w = rect.width() * vm.progress.clamp(0.0, 1.0);
                if fill_w > 0.0 {
                    let fill_rect =
                        egui::Rect::from_min_size(rect.min, egui::vec2(fill_w, rect.height()));
                    ui.painter().rect_filled(fill_rect, 2.0, COL_ACCENT);
                }
            });

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                justify_content: Some(taffy::JustifyContent::Center),
                size: taffy::Size {
                    width: percent(1.),
                    height: auto(),
                },
                ..Default::default()
            })
            .add(|tui| {
                tui.label(
                    egui::RichText::new(&vm.percent_label)
                        .color(COL_ACCENT)
                        .monospace(),
                );
            });

            tui.label(
                egui::RichText::new(&vm.output_tail)
                    .size(10.0)
                    .color(COL_TEXT_DIM)
                    .monospace(),
            );
        },
    );
}
