use eframe::egui::{self, Color32, FontFamily, FontId, Stroke, TextStyle, Visuals};

// Dark palette
pub const COL_BG: Color32 = Color32::from_rgb(0x1e, 0x1e, 0x1e);
pub const COL_BG_DARK: Color32 = Color32::from_rgb(0x17, 0x17, 0x17);
pub const COL_BUTTON: Color32 = Color32::from_rgb(0x2d, 0x2d, 0x30);
pub const COL_BUTTON_ACTIVE: Color32 = Color32::from_rgb(0x3e, 0x3e, 0x40);
pub const COL_BORDER: Color32 = Color32::from_rgb(0x2d, 0x2d, 0x30);
pub const COL_TEXT: Color32 = Color32::WHITE;
pub const COL_TEXT_DIM: Color32 = Color32::from_rgb(160, 160, 160);
pub const COL_ACCENT: Color32 = Color32::from_rgb(0x00, 0xaa, 0xff);
pub const COL_WARN: Color32 = Color32::from_rgb(250, 204, 21);
pub const COL_DANGER: Color32 = Color32::from_rgb(225, 29, 72);

pub fn setup(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = COL_BG;
    visuals.panel_fill = COL_BG;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COL_BORDER);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, COL_TEXT);
    visuals.widgets.inactive.bg_fill = COL_BUTTON;
    visuals.widgets.inactive.weak_bg_fill = COL_BUTTON;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, COL_TEXT);

    visuals.widgets.hovered.bg_fill = COL_BUTTON_ACTIVE;
    visuals.widgets.hovered.weak_bg_fill = COL_BUTTON_ACTIVE;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, COL_ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, COL_TEXT);

    visuals.widgets.active.bg_fill = COL_ACCENT;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, COL_BG);

    visuals.selection.bg_fill = COL_ACCENT.linear_multiply(0.4);
    visuals.selection.stroke = Stroke::new(1.0, COL_ACCENT);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Heading, FontId::new(18.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(13.0, FontFamily::Proportional)),
        (
            TextStyle::Monospace,
            FontId::new(11.0, FontFamily::Monospace),
        ),
        (TextStyle::Button, FontId::new(13.0, FontFamily::Proportional)),
        (TextStyle::Small, FontId::new(10.0, FontFamily::Proportional)),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    style.visuals.button_frame = true;

    ctx.set_style(style);
}
