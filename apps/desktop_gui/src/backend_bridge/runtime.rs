//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{ClassificationService, Endpoints, HttpClassificationService, ServiceProbe};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, endpoints: Endpoints) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Info(format!(
                    "Backend worker startup failure: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                // Dropping cmd_rx here makes every later dispatch fail fast.
                return;
            }
        };

        runtime.block_on(async move {
            let service = HttpClassificationService::new(endpoints.analyze.clone());
            let probe = ServiceProbe::new(endpoints);
            tracing::info!(endpoint = %service.endpoint(), "backend worker ready");
            let _ = ui_tx.try_send(UiEvent::Info("Listo".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Analyze { request } => {
                        let outcome = service.classify(&request).await;
                        // Blocking send: the UI is waiting on exactly this event.
                        if ui_tx.send(UiEvent::AnalysisResolved(outcome)).is_err() {
                            break;
                        }
                    }
                    BackendCommand::CheckHealth => {
                        let outcome = probe.check_health().await;
                        if ui_tx.send(UiEvent::HealthChecked(outcome)).is_err() {
                            break;
                        }
                    }
                }
            }
            tracing::debug!("backend worker stopped");
        });
    });
}
