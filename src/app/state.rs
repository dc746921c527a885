//! Form state management
//!
//! Defines the form's lifecycle state machine and the event alphabet the
//! controller reacts to. The state is a snapshot of the order record, its
//! current validation report, and the lifecycle phase.

use crate::domain::order::Order;
use crate::domain::validation::ValidationReport;

/// Lifecycle phase of the form
///
/// `Empty` is the pristine form with errors hidden; any change moves to
/// `Valid` or `Invalid` depending on the validation report; a successful
/// submit moves `Valid` to `Submitted`, and the next interaction clears back
/// to `Empty` before being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Nothing has been touched yet; validation errors are not displayed
    #[default]
    Empty,
    /// The form has been edited and currently fails validation
    Invalid,
    /// The form has been edited and passes validation
    Valid,
    /// A submission was just accepted; the confirmation banner is showing
    Submitted,
}

/// Input events produced by the frontend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The name text input changed
    NameChanged(String),
    /// The size select changed; empty string selects the blank option
    SizeChanged(String),
    /// A topping checkbox was toggled, identified by id or name
    ToppingToggled(String),
    /// The submit control was activated
    SubmitRequested,
}

/// Internal transition events fed to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateEvent {
    /// A field changed; `valid` is the validation outcome after the change
    Changed { valid: bool },
    /// A submission passed the final validation pass
    SubmitAccepted,
    /// A submission failed the final validation pass
    SubmitRejected,
    /// The post-submit banner state was dismissed by new interaction
    Cleared,
}

/// State machine for form lifecycle transitions
pub struct StateMachine;

impl StateMachine {
    /// Processes a transition event and returns the new phase
    pub fn process_event(current: FormPhase, event: StateEvent) -> FormPhase {
        match (current, event) {
            (FormPhase::Submitted, StateEvent::Cleared) => {
                tracing::debug!("form state: Submitted -> Empty");
                FormPhase::Empty
            }

            (_, StateEvent::Changed { valid: true }) => FormPhase::Valid,
            (_, StateEvent::Changed { valid: false }) => FormPhase::Invalid,

            (FormPhase::Valid, StateEvent::SubmitAccepted) => {
                tracing::debug!("form state: Valid -> Submitted");
                FormPhase::Submitted
            }

            (_, StateEvent::SubmitRejected) => FormPhase::Invalid,

            // Invalid transitions keep the current phase
            (phase, _) => phase,
        }
    }
}

/// Snapshot of everything the presenter tracks
///
/// Invariant: `report` is always the validator's output for `order`; the
/// controller re-runs validation after every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// The in-progress order record
    pub order: Order,
    /// Validation report for the current order
    pub report: ValidationReport,
    /// Confirmation banner from the last accepted submission, if any
    pub confirmation: Option<String>,
    /// Current lifecycle phase
    pub phase: FormPhase,
}

impl FormState {
    /// Returns true if validation errors should be displayed
    ///
    /// A pristine form fails validation (both required fields are empty)
    /// but shows no errors until the user has interacted with it.
    pub fn shows_errors(&self) -> bool {
        matches!(self.phase, FormPhase::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_phase_is_empty() {
        assert_eq!(FormPhase::default(), FormPhase::Empty);
        let state = FormState::default();
        assert_eq!(state.phase, FormPhase::Empty);
        assert!(!state.shows_errors());
        assert!(state.confirmation.is_none());
    }

    #[test]
    fn change_moves_to_valid_or_invalid() {
        let phase = StateMachine::process_event(FormPhase::Empty, StateEvent::Changed { valid: false });
        assert_eq!(phase, FormPhase::Invalid);

        let phase = StateMachine::process_event(phase, StateEvent::Changed { valid: true });
        assert_eq!(phase, FormPhase::Valid);
    }

    #[test]
    fn accepted_submit_requires_valid_phase() {
        let phase = StateMachine::process_event(FormPhase::Valid, StateEvent::SubmitAccepted);
        assert_eq!(phase, FormPhase::Submitted);

        // Accepting from any other phase is not a legal transition
        for phase in [FormPhase::Empty, FormPhase::Invalid, FormPhase::Submitted] {
            assert_eq!(
                StateMachine::process_event(phase, StateEvent::SubmitAccepted),
                phase
            );
        }
    }

    #[test]
    fn rejected_submit_shows_errors() {
        let phase = StateMachine::process_event(FormPhase::Empty, StateEvent::SubmitRejected);
        assert_eq!(phase, FormPhase::Invalid);
    }

    #[test]
    fn cleared_only_applies_after_submission() {
        let phase = StateMachine::process_event(FormPhase::Submitted, StateEvent::Cleared);
        assert_eq!(phase, FormPhase::Empty);

        for phase in [FormPhase::Empty, FormPhase::Invalid, FormPhase::Valid] {
            assert_eq!(StateMachine::process_event(phase, StateEvent::Cleared), phase);
        }
    }

    #[test]
    fn errors_display_only_in_invalid_phase() {
        let mut state = FormState::default();
        for (phase, shown) in [
            (FormPhase::Empty, false),
            (FormPhase::Invalid, true),
            (FormPhase::Valid, false),
            (FormPhase::Submitted, false),
        ] {
            state.phase = phase;
            assert_eq!(state.shows_errors(), shown, "phase {phase:?}");
        }
    }
}
