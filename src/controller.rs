//! Request lifecycle state machine.
//!
//! `Lifecycle::step` is a pure function from the current lifecycle and an
//! event to the next lifecycle and an effect. The controller owns the
//! current value and is the only writer of `RequestState`; performing the
//! effect (the network call) is left to the caller.
//!
//! # In-flight tracking
//!
//! Every dispatched request gets a `Ticket`. The ticket stays in flight
//! until its outcome is resolved, even if the user clears in the meantime,
//! so there is never more than one outstanding call. An outcome arriving
//! after a clear is dropped without touching the (now idle) state.

use thiserror::Error;

use crate::client::AnalysisClient;
use crate::error::AnalysisError;
use crate::model::{AnalysisRequest, AnalysisResult};

/// Default minimum number of non-whitespace-trimmed characters.
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 10;

/// What the user currently sees.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(AnalysisResult),
    Error(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            RequestState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Loading => "loading",
            RequestState::Success(_) => "success",
            RequestState::Error(_) => "error",
        }
    }
}

/// Identifies one dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Submit {
        text: String,
    },
    Resolved {
        ticket: Ticket,
        outcome: Result<AnalysisResult, AnalysisError>,
    },
    Clear,
}

/// A request the caller must send to the analysis service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub ticket: Ticket,
    pub request: AnalysisRequest,
}

/// Why a submit did not dispatch anything.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("An analysis is already in progress.")]
    Busy,

    #[error(transparent)]
    Invalid(AnalysisError),
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Dispatch(Dispatch),
    Rejected(SubmitError),
    /// An outcome was dropped: stale ticket or cleared while in flight.
    Discarded(Ticket),
}

/// Complete controller state: the visible request state plus bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct Lifecycle {
    state: RequestState,
    input: Option<String>,
    in_flight: Option<Ticket>,
    next_ticket: u64,
    min_length: usize,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TEXT_LENGTH)
    }
}

impl Lifecycle {
    pub fn new(min_length: usize) -> Self {
        Self {
            state: RequestState::Idle,
            input: None,
            in_flight: None,
            next_ticket: 1,
            min_length,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn in_flight(&self) -> Option<Ticket> {
        self.in_flight
    }

    /// Apply one event.
    pub fn step(self, event: Event) -> (Lifecycle, Effect) {
        match event {
            Event::Submit { text } => self.on_submit(text),
            Event::Resolved { ticket, outcome } => self.on_resolved(ticket, outcome),
            Event::Clear => (
                Lifecycle {
                    state: RequestState::Idle,
                    input: None,
                    ..self
                },
                Effect::None,
            ),
        }
    }

    fn on_submit(self, text: String) -> (Lifecycle, Effect) {
        if self.in_flight.is_some() {
            return (self, Effect::Rejected(SubmitError::Busy));
        }

        let actual = text.trim().chars().count();
        if actual < self.min_length {
            let err = AnalysisError::Validation {
                min_length: self.min_length,
                actual,
            };
            let next = Lifecycle {
                state: RequestState::Error(err.user_message()),
                input: None,
                ..self
            };
            return (next, Effect::Rejected(SubmitError::Invalid(err)));
        }

        let ticket = Ticket(self.next_ticket);
        let request = AnalysisRequest::new(text.clone());
        let next = Lifecycle {
            state: RequestState::Loading,
            input: Some(text),
            in_flight: Some(ticket),
            next_ticket: self.next_ticket + 1,
            ..self
        };
        (next, Effect::Dispatch(Dispatch { ticket, request }))
    }

    fn on_resolved(
        self,
        ticket: Ticket,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) -> (Lifecycle, Effect) {
        if self.in_flight != Some(ticket) {
            return (self, Effect::Discarded(ticket));
        }

        if !self.state.is_loading() {
            // Cleared while the call was running; only release the slot.
            let next = Lifecycle {
                in_flight: None,
                ..self
            };
            return (next, Effect::Discarded(ticket));
        }

        let next = match outcome {
            Ok(result) => Lifecycle {
                state: RequestState::Success(result),
                in_flight: None,
                ..self
            },
            Err(err) => Lifecycle {
                state: RequestState::Error(err.user_message()),
                input: None,
                in_flight: None,
                ..self
            },
        };
        (next, Effect::None)
    }
}

/// Owner of the request lifecycle.
#[derive(Debug, Default)]
pub struct RequestLifecycleController {
    lifecycle: Lifecycle,
}

impl RequestLifecycleController {
    pub fn new(min_length: usize) -> Self {
        Self {
            lifecycle: Lifecycle::new(min_length),
        }
    }

    pub fn state(&self) -> &RequestState {
        self.lifecycle.state()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.lifecycle.state.result()
    }

    /// Text that produced the current loading/success state.
    pub fn input_text(&self) -> Option<&str> {
        self.lifecycle.input.as_deref()
    }

    /// Whether a request is outstanding (also true after a clear until it resolves).
    pub fn is_busy(&self) -> bool {
        self.lifecycle.in_flight.is_some()
    }

    pub fn min_length(&self) -> usize {
        self.lifecycle.min_length
    }

    /// Validate `text` and, if accepted, move to `Loading`.
    ///
    /// Returns the request to send. Rejections leave no request behind.
    pub fn submit(&mut self, text: &str) -> Result<Dispatch, SubmitError> {
        match self.apply(Event::Submit {
            text: text.to_string(),
        }) {
            Effect::Dispatch(dispatch) => Ok(dispatch),
            Effect::Rejected(err) => Err(err),
            other => {
                tracing::error!(?other, "unexpected effect for submit");
                Err(SubmitError::Busy)
            }
        }
    }

    /// Record the outcome of a dispatched request.
    ///
    /// Returns `false` when the outcome was discarded.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) -> bool {
        !matches!(
            self.apply(Event::Resolved { ticket, outcome }),
            Effect::Discarded(_)
        )
    }

    /// Reset to `Idle`, dropping any result, error and input text.
    pub fn clear(&mut self) {
        self.apply(Event::Clear);
    }

    /// Submit and wait for the outcome in one go.
    pub async fn run(
        &mut self,
        client: &dyn AnalysisClient,
        text: &str,
    ) -> Result<&RequestState, SubmitError> {
        let dispatch = self.submit(text)?;
        let outcome = client.analyze(&dispatch.request).await;
        self.resolve(dispatch.ticket, outcome);
        Ok(self.state())
    }

    fn apply(&mut self, event: Event) -> Effect {
        let before = self.lifecycle.state.name();
        let current = std::mem::take(&mut self.lifecycle);
        let (next, effect) = current.step(event);
        self.lifecycle = next;
        tracing::debug!(
            from = before,
            to = self.lifecycle.state.name(),
            ?effect,
            "request transition"
        );
        effect
    }
}
