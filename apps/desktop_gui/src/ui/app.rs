use std::time::Duration;

use client_core::AnalysisController;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::error::RequestError;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::view_model::{HealthBadge, ResultPanelModel};
use crate::ui::{panels, theme};

pub struct SentimentApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    api_base_url: String,
    controller: AnalysisController,
    panel: ResultPanelModel,
    input: String,
    status: String,
    health: HealthBadge,
}

impl SentimentApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        api_base_url: String,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            api_base_url,
            controller: AnalysisController::new(),
            panel: ResultPanelModel::default(),
            input: String::new(),
            status: "Iniciando...".to_string(),
            health: HealthBadge::default(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::AnalysisResolved(outcome) => {
                    self.controller.resolve(outcome, &mut self.panel);
                }
                UiEvent::HealthChecked(outcome) => {
                    if let Err(err) = &outcome {
                        tracing::warn!("health check failed: {err}");
                    }
                    self.health = HealthBadge::from_outcome(&outcome);
                }
            }
        }
    }

    fn try_analyze(&mut self) {
        let Ok(request) = self.controller.begin(&self.input, &mut self.panel) else {
            return;
        };

        if let Err(reason) = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::Analyze { request },
            &mut self.status,
        ) {
            self.controller
                .resolve(Err(RequestError::Transport(reason)), &mut self.panel);
        }
    }

    fn check_health(&mut self) {
        if self.health.is_pending() {
            return;
        }
        if dispatch_backend_command(&self.cmd_tx, BackendCommand::CheckHealth, &mut self.status)
            .is_ok()
        {
            self.health = HealthBadge::Checking;
        } else {
            self.health = HealthBadge::Unreachable;
        }
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Análisis de sentimiento");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let pending = self.health.is_pending();
                if ui
                    .add_enabled(!pending, egui::Button::new("Comprobar servicio"))
                    .clicked()
                {
                    self.check_health();
                }
                ui.label(
                    egui::RichText::new(self.health.label()).color(theme::health_color(&self.health)),
                );
            });
        });
        ui.label(egui::RichText::new(&self.api_base_url).small().weak());
    }

    fn show_input(&mut self, ui: &mut egui::Ui) {
        let response = ui.add(
            egui::TextEdit::multiline(&mut self.input)
                .desired_rows(6)
                .desired_width(f32::INFINITY)
                .hint_text("Escribe un texto para analizar..."),
        );
        let submit_shortcut = response.has_focus()
            && ui.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter));

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let idle = !self.controller.is_busy();
            let clicked = ui
                .add_enabled(idle, egui::Button::new("Analizar sentimiento"))
                .clicked();
            if clicked || (idle && submit_shortcut) {
                self.try_analyze();
            }
            if self.panel.loading {
                ui.spinner();
                ui.label("Analizando...");
            }
        });
    }

    fn show_notice_modal(&mut self, ctx: &egui::Context) {
        let Some(message) = self.panel.notice.clone() else {
            return;
        };

        let modal = egui::Modal::new(egui::Id::new("validation_notice")).show(ctx, |ui| {
            ui.set_width(320.0);
            ui.heading("Aviso");
            ui.label(message);
            ui.add_space(8.0);
            ui.button("Aceptar").clicked()
        });
        if modal.inner || modal.should_close() {
            self.panel.acknowledge_notice();
        }
    }
}

impl eframe::App for SentimentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(egui::RichText::new(&self.status).small());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_header(ui);
            ui.separator();
            self.show_input(ui);
            ui.add_space(12.0);
            if let Some(content) = &self.panel.content {
                panels::show_result_panel(ui, content);
            }
        });

        self.show_notice_modal(ctx);

        if self.controller.is_busy() || self.health.is_pending() {
            ctx.request_repaint_after(Duration::from_millis(50));
        } else {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
