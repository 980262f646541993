use client_core::PanelClass;
use eframe::egui;

use crate::controller::view_model::HealthBadge;

pub const BAR_TRACK: egui::Color32 = egui::Color32::from_rgb(0xe9, 0xec, 0xef);
pub const PANEL_TEXT: egui::Color32 = egui::Color32::from_rgb(0x21, 0x25, 0x29);

pub fn lighten_color(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

pub fn bar_color(panel: PanelClass) -> egui::Color32 {
    let [r, g, b] = panel.bar_rgb();
    egui::Color32::from_rgb(r, g, b)
}

/// Background and border of the result panel for a class.
pub fn panel_colors(panel: PanelClass) -> (egui::Color32, egui::Color32) {
    let base = bar_color(panel);
    (lighten_color(base, 0.82), lighten_color(base, 0.45))
}

pub fn health_color(badge: &HealthBadge) -> egui::Color32 {
    match badge {
        HealthBadge::Up => bar_color(PanelClass::Positive),
        HealthBadge::Degraded { .. } | HealthBadge::Unreachable => {
            bar_color(PanelClass::Negative)
        }
        HealthBadge::Unknown | HealthBadge::Checking => bar_color(PanelClass::Neutral),
    }
}

#[cfg(test)]
#[path = "tests/theme_tests.rs"]
mod tests;
