//! Time controls bar at the bottom of the screen.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::colors;
use super::icons;
use crate::types::OrbitClock;

/// Format a clock scale for display, e.g. `0.25x`, `8x`.
pub fn format_scale(scale: f64) -> String {
    if scale.fract() == 0.0 {
        format!("{}x", scale as i64)
    } else {
        format!("{}x", scale)
    }
}

/// System that renders the time controls bar.
pub fn time_controls_panel(mut contexts: EguiContexts, mut clock: ResMut<OrbitClock>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::bottom("time_controls")
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(16, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                let (icon, hint) = if clock.paused {
                    (icons::PLAY, "Resume (Space)")
                } else {
                    (icons::PAUSE, "Pause (Space)")
                };
                if ui.button(icon).on_hover_text(hint).clicked() {
                    clock.paused = !clock.paused;
                }

                ui.separator();

                if ui.button(icons::SLOWER).on_hover_text("Slower ([)").clicked() {
                    clock.slower();
                }
                ui.label(egui::RichText::new(format_scale(clock.scale)).monospace());
                if ui.button(icons::FASTER).on_hover_text("Faster (])").clicked() {
                    clock.faster();
                }

                ui.separator();

                ui.label(
                    egui::RichText::new(format!("{} t = {:.0}", icons::CLOCK, clock.elapsed))
                        .monospace()
                        .color(colors::MUTED),
                );
            });
        });
}
