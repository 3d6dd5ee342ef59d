use crate::theme::*;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, is_busy: bool, status_badge: &str) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        padding: length(8.0),
        size: taffy::Size {
            width: percent(1.),
            height: percent(1.),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_BG_DARK)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.label(
                egui::RichText::new("BIN/CUE \u{2192} CHD Converter")
                    .size(16.0)
                    .strong()
                    .color(COL_TEXT),
            );

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(6.0),
                ..Default::default()
            })
            .add(|tui| {
                let color = if is_busy {
                    tui.ui_add(egui::Spinner::new());
                    COL_WARN
                } else {
                    COL_ACCENT
                };
                tui.label(
                    egui::RichText::new(format!("STATUS: {status_badge}"))
                        .color(color)
                        .size(10.0),
                );
            });
        },
    );
}
