//! Terminal rendering of the result panel.

use std::{io::Write, time::Duration};

use client_core::{FailureView, PanelClass, Presenter, RenderSpec};
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use shared::protocol::{HealthReport, StatsSnapshot};
use tracing::warn;

pub const BAR_CELLS: usize = 40;

#[derive(Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
enum JsonPanel<'a> {
    Success {
        #[serde(flatten)]
        view: &'a RenderSpec,
    },
    Failure {
        #[serde(flatten)]
        view: &'a FailureView,
    },
}

pub struct TerminalPresenter<W: Write, E: Write> {
    out: W,
    err: E,
    json: bool,
    spinner: Option<ProgressBar>,
    show_spinner: bool,
}

impl<W: Write, E: Write> TerminalPresenter<W, E> {
    pub fn new(out: W, err: E, json: bool) -> Self {
        Self {
            out,
            err,
            json,
            spinner: None,
            show_spinner: true,
        }
    }

    pub fn without_spinner(mut self) -> Self {
        self.show_spinner = false;
        self
    }

    fn emit(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}") {
            warn!("failed to write result: {err}");
        }
    }

    fn emit_json(&mut self, panel: &JsonPanel<'_>) {
        match serde_json::to_string_pretty(panel) {
            Ok(text) => self.emit(&text),
            Err(err) => warn!("failed to encode result as json: {err}"),
        }
    }
}

impl<W: Write, E: Write> Presenter for TerminalPresenter<W, E> {
    fn set_loading(&mut self, loading: bool) {
        if loading {
            if self.show_spinner {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(
                    ProgressStyle::with_template("{spinner} {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
                );
                spinner.set_message("Analizando...");
                spinner.enable_steady_tick(Duration::from_millis(80));
                self.spinner = Some(spinner);
            }
        } else if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    // Nothing is on screen between runs of the CLI.
    fn clear_result(&mut self) {}

    fn render_success(&mut self, view: &RenderSpec) {
        if self.json {
            self.emit_json(&JsonPanel::Success { view });
            return;
        }
        let headline = format!(
            "{} {}  {}%",
            "●".color_panel(view.panel),
            view.prediction.as_str().color_panel(view.panel).bold(),
            view.probability_text
        );
        let bar = render_bar(view.panel, view.bar_width_percent);
        self.emit(&headline);
        self.emit(&bar);
    }

    fn render_failure(&mut self, view: &FailureView) {
        if self.json {
            self.emit_json(&JsonPanel::Failure { view });
            return;
        }
        let line = view.message.color_panel(view.panel).to_string();
        self.emit(&line);
    }

    fn show_notice(&mut self, message: &str) {
        if let Err(err) = writeln!(self.err, "{} {message}", "⚠".yellow().bold()) {
            warn!("failed to write notice: {err}");
        }
    }
}

trait PanelColor {
    fn color_panel(self, panel: PanelClass) -> ColoredString;
}

impl PanelColor for &str {
    fn color_panel(self, panel: PanelClass) -> ColoredString {
        let [r, g, b] = panel.bar_rgb();
        self.truecolor(r, g, b)
    }
}

/// Most cells a bar may draw. Widths past this spill no further.
pub const MAX_BAR_CELLS: usize = BAR_CELLS * 2;

/// Number of filled cells for a bar width in percent. Widths above 100 spill
/// past the track up to [`MAX_BAR_CELLS`]; negative widths draw nothing.
pub fn filled_cells(width_percent: f64) -> usize {
    let cells = (width_percent / 100.0 * BAR_CELLS as f64).round();
    if cells.is_nan() || cells <= 0.0 {
        0
    } else {
        cells.min(MAX_BAR_CELLS as f64) as usize
    }
}

pub fn render_bar(panel: PanelClass, width_percent: f64) -> String {
    let filled = filled_cells(width_percent);
    let track = BAR_CELLS.saturating_sub(filled);
    format!(
        "[{}{}]",
        "█".repeat(filled).as_str().color_panel(panel),
        "░".repeat(track).dimmed()
    )
}

pub fn format_health(report: &HealthReport) -> String {
    let status = if report.is_up() {
        report.status.as_str().green().bold()
    } else {
        report.status.as_str().red().bold()
    };
    let mut line = format!("service: {status}");
    if let Some(ml) = &report.ml_service_status {
        line.push_str(&format!("  classifier: {ml}"));
    }
    if let Some(uptime) = &report.uptime {
        line.push_str(&format!("  uptime: {uptime}"));
    }
    line
}

pub fn format_stats(stats: &StatsSnapshot) -> String {
    let rows = [
        (
            PanelClass::Positive,
            "Positivo",
            stats.positive_count,
            stats.positive_percentage,
            stats.average_probability_positive,
        ),
        (
            PanelClass::Negative,
            "Negativo",
            stats.negative_count,
            stats.negative_percentage,
            stats.average_probability_negative,
        ),
        (
            PanelClass::Neutral,
            "Neutro",
            stats.neutral_count,
            stats.neutral_percentage,
            stats.average_probability_neutral,
        ),
    ];

    let mut out = format!("total analyses: {}\n", stats.total);
    for (panel, label, count, percentage, avg_probability) in rows {
        out.push_str(&format!(
            "{} {:>6}  {:>6.2}%  avg {:>6.2}%\n",
            format!("{label:<9}").as_str().color_panel(panel),
            count,
            percentage,
            avg_probability * 100.0
        ));
    }
    out
}

#[cfg(test)]
#[path = "tests/terminal_tests.rs"]
mod tests;
