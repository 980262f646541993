//! Request lifecycle for one analysis at a time.
//!
//! A cycle is `begin` (validate, enter `Loading`) followed by exactly one
//! `resolve`. Front ends that own an event loop call the two halves
//! separately; `analyze` runs both around a [`ClassificationService`] call.

use shared::{
    domain::{AnalysisRequest, AnalysisResult},
    error::{RequestError, ValidationError},
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    presentation::{render_spec, FailureView, RenderSpec},
    service::ClassificationService,
    validation::validate,
};

/// Capabilities the controller needs from whatever draws the result.
pub trait Presenter {
    fn set_loading(&mut self, loading: bool);
    /// Hides the result panel from a previous cycle.
    fn clear_result(&mut self);
    fn render_success(&mut self, view: &RenderSpec);
    fn render_failure(&mut self, view: &FailureView);
    /// Blocking notice the user has to acknowledge.
    fn show_notice(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success(AnalysisResult),
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriggerRejected {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("an analysis is already in flight")]
    Busy,
}

#[derive(Debug, Default)]
pub struct AnalysisController {
    state: UiState,
    cycle: u64,
}

impl AnalysisController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// True while a request is in flight. New triggers are ignored meanwhile.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, UiState::Loading)
    }

    /// Starts a cycle and returns the request to send.
    ///
    /// Blank input shows the notice and leaves the current state untouched.
    pub fn begin<P>(
        &mut self,
        raw: &str,
        presenter: &mut P,
    ) -> Result<AnalysisRequest, TriggerRejected>
    where
        P: Presenter + ?Sized,
    {
        if self.is_busy() {
            debug!(cycle = self.cycle, "trigger ignored while a request is in flight");
            return Err(TriggerRejected::Busy);
        }

        let text = match validate(raw) {
            Ok(text) => text,
            Err(err) => {
                presenter.show_notice(err.notice());
                return Err(err.into());
            }
        };

        self.cycle += 1;
        self.state = UiState::Loading;
        presenter.clear_result();
        presenter.set_loading(true);
        debug!(cycle = self.cycle, "analysis cycle started");
        Ok(text.into_request())
    }

    /// Settles the in-flight cycle. Outcomes arriving with nothing in flight
    /// are dropped.
    pub fn resolve<P>(
        &mut self,
        outcome: Result<AnalysisResult, RequestError>,
        presenter: &mut P,
    ) -> &UiState
    where
        P: Presenter + ?Sized,
    {
        if !self.is_busy() {
            warn!(cycle = self.cycle, "dropping outcome with no request in flight");
            return &self.state;
        }

        InFlight::new(&mut self.state, presenter).settle(self.cycle, outcome);
        &self.state
    }

    /// Runs one full cycle against `service`.
    pub async fn analyze<S, P>(
        &mut self,
        service: &S,
        raw: &str,
        presenter: &mut P,
    ) -> Result<&UiState, TriggerRejected>
    where
        S: ClassificationService + ?Sized,
        P: Presenter + ?Sized,
    {
        let request = self.begin(raw, presenter)?;
        {
            let mut in_flight = InFlight::new(&mut self.state, presenter);
            let outcome = service.classify(&request).await;
            in_flight.settle(self.cycle, outcome);
        }
        Ok(&self.state)
    }
}

/// Scope of the `Loading` phase. Dropping it hides the loading indicator,
/// including during a panic in a render call, and falls back to `Idle` if the
/// cycle never settled.
struct InFlight<'a, P: Presenter + ?Sized> {
    state: &'a mut UiState,
    presenter: &'a mut P,
}

impl<'a, P: Presenter + ?Sized> InFlight<'a, P> {
    fn new(state: &'a mut UiState, presenter: &'a mut P) -> Self {
        Self { state, presenter }
    }

    fn settle(&mut self, cycle: u64, outcome: Result<AnalysisResult, RequestError>) {
        // Commit state before rendering: a panicking presenter must not leave
        // the controller in `Loading`.
        match outcome {
            Ok(result) => {
                let view = render_spec(&result);
                info!(
                    cycle,
                    prediction = %result.prediction,
                    probability = result.probability,
                    "analysis succeeded"
                );
                *self.state = UiState::Success(result);
                self.presenter.render_success(&view);
            }
            Err(err) => {
                warn!(cycle, error = %err, "analysis failed");
                *self.state = UiState::Failure;
                self.presenter.render_failure(&FailureView::default());
            }
        }
    }
}

impl<P: Presenter + ?Sized> Drop for InFlight<'_, P> {
    fn drop(&mut self) {
        if matches!(self.state, UiState::Loading) {
            *self.state = UiState::Idle;
        }
        self.presenter.set_loading(false);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
