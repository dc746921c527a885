//! Form controller and coordination layer
//!
//! The controller applies frontend events to the order record, re-runs the
//! validator after every change (reactive revalidation), gates submission,
//! and composes the confirmation message. It owns the stable configuration
//! and the mutable form state.

use crate::app::state::{FormEvent, FormPhase, FormState, StateEvent, StateMachine};
use crate::config::FormConfig;
use crate::domain::confirmation;
use crate::domain::order::Order;
use crate::domain::validation::validate;

/// Result of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The order was accepted; carries the confirmation sentence
    Accepted { confirmation: String },
    /// The order failed validation and was not submitted
    Rejected,
}

/// Main form controller
///
/// Holds the validated configuration (stable) and the form state (mutable).
/// All mutation goes through [`FormController::apply`] or the per-event
/// handlers, which keep the state's validation report current.
pub struct FormController {
    config: FormConfig,
    state: FormState,
}

impl FormController {
    /// Creates a controller for the given configuration
    pub fn new(config: FormConfig) -> Self {
        let mut state = FormState::default();
        state.report = validate(&state.order, &config.rules());
        Self { config, state }
    }

    /// Creates a controller with the standard form configuration
    pub fn standard() -> Self {
        Self::new(FormConfig::standard())
    }

    /// The current form state snapshot
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The stable form configuration
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Returns true if the submit control should be actionable
    ///
    /// Requires an empty error report and both required fields non-empty.
    /// With required-field checks in the validator the two conditions
    /// coincide, but the gate states them both.
    pub fn can_submit(&self) -> bool {
        self.state.report.is_valid() && self.state.order.has_required_fields()
    }

    /// Dispatches a frontend event to the matching handler
    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::NameChanged(text) => self.handle_name_change(text),
            FormEvent::SizeChanged(code) => self.handle_size_change(code),
            FormEvent::ToppingToggled(raw) => self.handle_topping_toggle(&raw),
            FormEvent::SubmitRequested => {
                self.handle_submit();
            }
        }
    }

    /// Handles a change to the name text input
    pub fn handle_name_change(&mut self, text: String) {
        tracing::debug!(len = text.len(), "name changed");
        let order = std::mem::take(&mut self.state.order);
        self.state.order = order.with_full_name(text);
        self.revalidate();
    }

    /// Handles a change to the size select
    ///
    /// The raw value is stored as-is; an out-of-range value is flagged by
    /// the validator rather than rejected here.
    pub fn handle_size_change(&mut self, code: String) {
        tracing::debug!(size = %code, "size changed");
        let order = std::mem::take(&mut self.state.order);
        self.state.order = order.with_size(code);
        self.revalidate();
    }

    /// Handles a topping checkbox toggle
    ///
    /// The input is resolved against the catalog; unknown toppings are
    /// ignored with a warning and leave the state untouched.
    pub fn handle_topping_toggle(&mut self, raw: &str) {
        let Some(topping) = self.config.catalog().resolve(raw) else {
            tracing::warn!(input = %raw, "unknown topping ignored");
            return;
        };
        let name = topping.name().to_string();
        tracing::debug!(topping = %name, "topping toggled");
        let order = std::mem::take(&mut self.state.order);
        self.state.order = order.with_topping_toggled(name);
        self.revalidate();
    }

    /// Handles a submission attempt
    ///
    /// Re-runs validation before accepting, independent of the report kept
    /// current on each change. On acceptance the confirmation is composed
    /// and the order is reset to its empty form.
    pub fn handle_submit(&mut self) -> SubmitOutcome {
        self.state.report = validate(&self.state.order, &self.config.rules());
        if !self.can_submit() {
            tracing::info!(errors = self.state.report.len(), "submission rejected");
            self.state.phase =
                StateMachine::process_event(self.state.phase, StateEvent::SubmitRejected);
            return SubmitOutcome::Rejected;
        }

        let Some(message) = confirmation::compose(&self.state.order) else {
            // A valid order always has a parseable size
            tracing::error!(size = %self.state.order.size, "valid order without parseable size");
            self.state.phase =
                StateMachine::process_event(self.state.phase, StateEvent::SubmitRejected);
            return SubmitOutcome::Rejected;
        };

        tracing::info!(name = %self.state.order.trimmed_name(), "order submitted");
        self.state.order = Order::default();
        self.state.report = validate(&self.state.order, &self.config.rules());
        self.state.confirmation = Some(message.clone());
        self.state.phase = StateMachine::process_event(self.state.phase, StateEvent::SubmitAccepted);
        SubmitOutcome::Accepted {
            confirmation: message,
        }
    }

    /// Re-runs validation and advances the lifecycle phase after a change
    fn revalidate(&mut self) {
        if self.state.phase == FormPhase::Submitted {
            // New interaction dismisses the confirmation banner
            self.state.confirmation = None;
            self.state.phase = StateMachine::process_event(self.state.phase, StateEvent::Cleared);
        }

        self.state.report = validate(&self.state.order, &self.config.rules());
        self.state.phase = StateMachine::process_event(
            self.state.phase,
            StateEvent::Changed {
                valid: self.state.report.is_valid(),
            },
        );
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::standard()
    }
}
