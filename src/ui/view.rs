//! Screen layout and text rendering for the form
//!
//! `FormScreen` is the view model: field rows with their inline errors,
//! checkbox rows for the catalog, the submit gate, and the success banner.
//! It is computed from a state snapshot and then rendered line by line.

use crate::app::state::FormState;
use crate::config::FormConfig;
use crate::domain::validation::Field;

/// A labeled input row with its current value and inline error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub label: &'static str,
    pub value: String,
    pub error: Option<String>,
}

/// A checkbox row for one catalog topping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToppingRow {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

/// Pre-computed layout of the rendered form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormScreen {
    /// Success banner from the last accepted submission
    pub banner: Option<String>,
    /// The name and size rows, in display order
    pub fields: Vec<FieldRow>,
    /// One row per catalog topping
    pub toppings: Vec<ToppingRow>,
    /// Whether the submit control is currently actionable
    pub submit_enabled: bool,
}

impl FormScreen {
    /// Builds the screen layout from a state snapshot
    ///
    /// Inline errors are only populated when the state says errors should be
    /// displayed, so a pristine form renders clean.
    pub fn from_state(state: &FormState, config: &FormConfig, submit_enabled: bool) -> Self {
        let error_for = |field: Field| {
            if state.shows_errors() {
                state.report.message_for(field)
            } else {
                None
            }
        };

        let size_value = if state.order.size.is_empty() {
            "(choose size)".to_string()
        } else {
            state.order.size.clone()
        };

        let fields = vec![
            FieldRow {
                label: "Full Name",
                value: state.order.full_name.clone(),
                error: error_for(Field::FullName),
            },
            FieldRow {
                label: "Size",
                value: size_value,
                error: error_for(Field::Size),
            },
        ];

        let toppings = config
            .catalog()
            .toppings()
            .iter()
            .map(|topping| ToppingRow {
                id: topping.id().to_string(),
                name: topping.name().to_string(),
                selected: state.order.has_topping(topping.name()),
            })
            .collect();

        Self {
            banner: state.confirmation.clone(),
            fields,
            toppings,
            submit_enabled,
        }
    }

    /// Renders the layout to plain text
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        lines.push("Order Your Pizza".to_string());
        lines.push("================".to_string());

        if let Some(banner) = &self.banner {
            lines.push(String::new());
            lines.push(format!("* {banner}"));
        }

        lines.push(String::new());
        for field in &self.fields {
            lines.push(format!("{}: {}", field.label, field.value));
            if let Some(error) = &field.error {
                lines.push(format!("  ! {error}"));
            }
        }

        lines.push("Toppings:".to_string());
        for topping in &self.toppings {
            let marker = if topping.selected { "x" } else { " " };
            lines.push(format!("  [{marker}] {}. {}", topping.id, topping.name));
        }

        if self.submit_enabled {
            lines.push("Submit: ready (type 'submit')".to_string());
        } else {
            lines.push("Submit: disabled".to_string());
        }

        lines.join("\n")
    }
}
