use client_core::RenderSpec;
use eframe::egui;

use crate::controller::view_model::PanelContent;
use crate::ui::theme;

const BAR_HEIGHT: f32 = 12.0;

pub fn show_result_panel(ui: &mut egui::Ui, content: &PanelContent) {
    let panel = content.panel();
    let (fill, border) = theme::panel_colors(panel);

    egui::Frame::NONE
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, border))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            match content {
                PanelContent::Success(view) => {
                    ui.label(
                        egui::RichText::new(format!("Predicción: {}", view.prediction))
                            .strong()
                            .color(theme::bar_color(panel)),
                    );
                    ui.label(
                        egui::RichText::new(format!("Probabilidad: {}%", view.probability_text))
                            .color(theme::PANEL_TEXT),
                    );
                    ui.add_space(6.0);
                    show_probability_bar(ui, view);
                }
                PanelContent::Failure(view) => {
                    ui.label(egui::RichText::new(view.message).color(theme::PANEL_TEXT));
                }
            }
        });
}

fn show_probability_bar(ui: &mut egui::Ui, view: &RenderSpec) {
    let track_width = ui.available_width();
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(track_width, BAR_HEIGHT), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, BAR_HEIGHT / 2.0, theme::BAR_TRACK);

    let fill_width = bar_fill_width(track_width, view.bar_width_percent);
    if fill_width > 0.0 {
        let fill = egui::Rect::from_min_size(rect.min, egui::vec2(fill_width, rect.height()));
        painter.rect_filled(fill, BAR_HEIGHT / 2.0, theme::bar_color(view.panel));
    }
}

/// Pixel width of the filled part. Not clamped to the track: widths above 100%
/// draw past it, up to twice the track. Negative widths draw nothing.
pub fn bar_fill_width(track_width: f32, width_percent: f64) -> f32 {
    let width = track_width * (width_percent / 100.0) as f32;
    if width.is_nan() {
        0.0
    } else {
        width.clamp(0.0, track_width * 2.0)
    }
}

#[cfg(test)]
#[path = "tests/panels_tests.rs"]
mod tests;
