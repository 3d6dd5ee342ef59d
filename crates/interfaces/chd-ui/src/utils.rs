use crate::theme::*;
use eframe::egui;
use eframe::egui::Color32;

pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(10.0)
            .color(COL_TEXT_DIM)
            .strong(),
    );
}

/// Tall full-width command button; `variant` is "primary", "danger" or anything else for plain.
pub fn cmd_button(ui: &mut egui::Ui, label: &str, variant: &str, enabled: bool) -> egui::Response {
    let (fill, stroke_col, text_col) = match variant {
        "primary" => (COL_BUTTON, COL_ACCENT, COL_TEXT),
        "danger" => (Color32::TRANSPARENT, COL_DANGER, COL_DANGER),
        _ => (COL_BUTTON, COL_BORDER, COL_TEXT),
    };

    let text = egui::RichText::new(label)
        .size(14.0)
        .color(if enabled { text_col } else { COL_TEXT_DIM });

    let btn = egui::Button::new(text)
        .min_size(egui::vec2(ui.available_width(), 50.0))
        .fill(if enabled { fill } else { COL_BG_DARK })
        .stroke(egui::Stroke::new(
            1.0,
            if enabled { stroke_col } else { COL_BORDER },
        ));

    ui.add_enabled(enabled, btn)
}
