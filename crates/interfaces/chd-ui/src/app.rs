use crate::components::header;
use crate::screens::converter;
use crate::{dialogs, theme};
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};

use chd_app_core::{AppCommand, ChdApplication};

pub struct ChdUiApp {
    core: ChdApplication,
}

impl ChdUiApp {
    pub fn new(core: ChdApplication) -> Self {
        Self { core }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let paths: Vec<_> = dropped.into_iter().filter_map(|f| f.path).collect();
        if paths.is_empty() {
            return;
        }
        tracing::info!("Received {} dropped path(s)", paths.len());
        if let Err(e) = self.core.dispatch(AppCommand::ConvertDropped(paths)) {
            tracing::error!("Failed to start dropped conversion: {e}");
        }
    }

    fn show_pending_alerts(&mut self) {
        while let Some(alert) = self.core.take_alert() {
            dialogs::show_alert(&alert);
        }
    }
}

impl eframe::App for ChdUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.core.handle_events();
        self.handle_dropped_files(ctx);

        if let Some(passes) = std::num::NonZeroUsize::new(3) {
            ctx.options_mut(|options| options.max_passes = passes);
        }
        ctx.style_mut(|style| {
            // Width-independent text measurement for the multi-pass taffy layout.
            style.wrap_mode = Some(egui::TextWrapMode::Extend);
        });

        let vm = self.core.main_vm();
        let mut quit = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    min_size: taffy::Size {
                        width: percent(1.),
                        height: length(0.0),
                    },
                    ..Default::default()
                })
                .show(|tui| {
                    tui.style(taffy::Style {
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(36.0),
                        },
                        flex_shrink: 0.0,
                        ..Default::default()
                    })
                    .add(|tui| header::draw(tui, vm.busy, vm.status_badge));

                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        size: taffy::Size {
                            width: percent(1.),
                            height: auto(),
                        },
                        flex_grow: 1.0,
                        flex_basis: length(0.0),
                        min_size: taffy::Size {
                            width: length(0.0),
                            height: length(0.0),
                        },
                        padding: length(20.0),
                        ..Default::default()
                    })
                    .add(|tui| {
                        let resp = converter::draw(tui, &vm, &mut self.core);
                        quit = resp.quit;
                    });
                });
        });

        if ctx.input(|i| !i.raw.hovered_files.is_empty()) {
            egui::Area::new(egui::Id::new("drop-hint"))
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.label(
                        egui::RichText::new("Drop to convert")
                            .size(20.0)
                            .strong()
                            .color(theme::COL_ACCENT),
                    );
                });
        }

        self.show_pending_alerts();

        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        if self.core.is_busy() {
            ctx.request_repaint();
        }
    }
}
