use tokio::sync::watch;
use tracing::debug;

use crate::{consts::consts::EntityId, model::person::Person};

/// Pending navigation targets the presentation layer executes.
#[derive(Clone, Debug, PartialEq)]
pub enum NavEvent {
    ToPeopleList,
    ToPersonDetail(EntityId),
    ToPersonInput,
}

/// Undo is a value, not a callback, so error events stay comparable.
#[derive(Clone, Debug, PartialEq)]
pub enum UndoAction {
    ReinsertPerson(Person),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ErrorParams {
    pub message: String,
    pub nav_event: Option<NavEvent>,
    pub undo_action: Option<UndoAction>,
}

impl ErrorParams {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            nav_event: None,
            undo_action: None,
        }
    }

    pub fn with_undo(message: impl Into<String>, undo_action: UndoAction) -> Self {
        Self {
            message: message.into(),
            nav_event: None,
            undo_action: Some(undo_action),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ErrorState {
    pub params: Option<ErrorParams>,
}

/// One-shot event slot: set, observe, acknowledge. A single nullable value
/// rather than a queue; a newer error overwrites an unconsumed one only
/// when it differs by value.
pub struct ErrorHandler {
    error_state: watch::Sender<ErrorState>,
}

impl ErrorHandler {
    pub fn new() -> Self {
        let (error_state, _) = watch::channel(ErrorState::default());

        Self { error_state }
    }

    pub fn subscribe(&self) -> watch::Receiver<ErrorState> {
        self.error_state.subscribe()
    }

    pub fn current_error(&self) -> Option<ErrorParams> {
        self.error_state.borrow().params.clone()
    }

    pub fn on_error_event(&self, params: ErrorParams) {
        self.error_state.send_if_modified(|state| {
            // Re-raising the pending error is a no-op
            if state.params.as_ref() == Some(&params) {
                return false;
            }

            debug!(message = %params.message, "error event");

            state.params = Some(params);

            true
        });
    }

    /// Presentation-driven acknowledgement, clears the slot. A newer error
    /// set in between simply wins on the next observation.
    pub fn on_error_event_handled(&self) {
        debug!("error event handled");

        self.error_state.send_modify(|state| state.params = None);
    }
}

impl Default for ErrorHandler {
    fn default() -> Self {
        Self::new()
    }
}
