//! Floating scene panel: planet shortcuts and view reset.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::colors;
use super::icons;
use crate::orbit::planets::PLANETS;
use crate::types::{BodyKey, Focus};

/// System that renders the scene panel in the top-left corner.
pub fn scene_panel(mut contexts: EguiContexts, mut focus: ResMut<Focus>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("Solar System")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(16.0, 16.0))
        .resizable(false)
        .collapsible(true)
        .title_bar(true)
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .corner_radius(8)
                .inner_margin(egui::Margin::same(10)),
        )
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(format!("{} Sun", icons::SUN)).color(colors::MUTED));

            for planet in &PLANETS {
                let key = planet.key();
                let selected = focus.target.as_ref() == Some(&key);
                if ui
                    .selectable_label(selected, format!("{} {}", icons::PLANET, planet.name))
                    .clicked()
                {
                    focus.target = if selected { None } else { Some(key) };
                    if let Some(BodyKey::Planet(name)) = &focus.target {
                        info!("Focused planet {}", name);
                    }
                }
            }

            ui.add_space(6.0);
            if ui
                .add_enabled(
                    focus.target.is_some(),
                    egui::Button::new(format!("{} Reset view", icons::RESET)),
                )
                .on_hover_text("Return to the overview (Esc)")
                .clicked()
            {
                focus.target = None;
                info!("View reset");
            }
        });
}
