//! Pure order validation
//!
//! `validate` maps an order record to a per-field error report. It collects
//! every applicable failure instead of short-circuiting, so the presenter can
//! display all errors at once. No I/O, no side effects.

use std::collections::BTreeMap;

use crate::domain::order::{Order, Size};
use thiserror::Error;

/// The fields validation can flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FullName,
    Size,
}

impl Field {
    /// Human-readable label used inside error messages
    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "full name",
            Field::Size => "size",
        }
    }

    /// Stable key identifying the field, matching the form control name
    pub fn key(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Size => "size",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty (or whitespace-only for text)
    #[error("{0} is required")]
    Required(Field),
    /// Trimmed text is shorter than the configured minimum
    #[error("{field} must be at least {min} characters")]
    TooShort { field: Field, min: usize },
    /// Trimmed text is longer than the configured maximum
    #[error("{field} must be at most {max} characters")]
    TooLong { field: Field, max: usize },
    /// Value is not one of the allowed choices
    #[error("{field} must be {allowed}")]
    InvalidChoice { field: Field, allowed: &'static str },
}

/// Length bounds the validator applies to the full name
///
/// Kept separate from the application config so the domain layer stays
/// self-contained; the config layer produces one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub name_min: usize,
    pub name_max: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            name_min: 3,
            name_max: 20,
        }
    }
}

/// Per-field validation outcome
///
/// At most one error is recorded per field; an empty report means the order
/// is valid. Iteration order follows [`Field`] ordering so rendering is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<Field, ValidationError>,
}

impl ValidationReport {
    /// Returns true if no field failed validation
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields that failed
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if the report records no failures
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The failure recorded for a field, if any
    pub fn error_for(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// The rendered message for a field, if it failed
    pub fn message_for(&self, field: Field) -> Option<String> {
        self.errors.get(&field).map(|e| e.to_string())
    }

    /// Iterates failures in field order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    fn record(&mut self, field: Field, error: ValidationError) {
        self.errors.insert(field, error);
    }
}

/// Validates an order against the given rules
///
/// Checks every field and reports at most one failure per field, with
/// emptiness taking precedence over length and choice checks.
///
/// # Example
/// ```rust
/// use pizza_form::domain::order::Order;
/// use pizza_form::domain::validation::{validate, Field, ValidationRules};
///
/// let order = Order::default().with_full_name("Al").with_size("XL");
/// let report = validate(&order, &ValidationRules::default());
/// assert_eq!(
///     report.message_for(Field::FullName).unwrap(),
///     "full name must be at least 3 characters"
/// );
/// assert_eq!(
///     report.message_for(Field::Size).unwrap(),
///     "size must be S or M or L"
/// );
/// ```
pub fn validate(order: &Order, rules: &ValidationRules) -> ValidationReport {
    let mut report = ValidationReport::default();

    let name = order.trimmed_name();
    if name.is_empty() {
        report.record(Field::FullName, ValidationError::Required(Field::FullName));
    } else if name.chars().count() < rules.name_min {
        report.record(
            Field::FullName,
            ValidationError::TooShort {
                field: Field::FullName,
                min: rules.name_min,
            },
        );
    } else if name.chars().count() > rules.name_max {
        report.record(
            Field::FullName,
            ValidationError::TooLong {
                field: Field::FullName,
                max: rules.name_max,
            },
        );
    }

    if order.size.is_empty() {
        report.record(Field::Size, ValidationError::Required(Field::Size));
    } else if Size::parse(&order.size).is_none() {
        report.record(
            Field::Size,
            ValidationError::InvalidChoice {
                field: Field::Size,
                allowed: "S or M or L",
            },
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> ValidationRules {
        ValidationRules::default()
    }

    #[test]
    fn valid_order_yields_empty_report() {
        let order = Order::default().with_full_name("Alice").with_size("M");
        let report = validate(&order, &rules());
        assert!(report.is_valid());
        assert_eq!(report.len(), 0);
    }

    #[test]
    fn blank_order_flags_both_required_fields() {
        let report = validate(&Order::default(), &rules());
        assert!(!report.is_valid());
        assert_eq!(report.len(), 2);
        assert!(matches!(
            report.error_for(Field::FullName),
            Some(ValidationError::Required(Field::FullName))
        ));
        assert!(matches!(
            report.error_for(Field::Size),
            Some(ValidationError::Required(Field::Size))
        ));
        assert_eq!(
            report.message_for(Field::FullName).unwrap(),
            "full name is required"
        );
        assert_eq!(report.message_for(Field::Size).unwrap(), "size is required");
    }

    #[test]
    fn short_names_fail_with_minimum_message() {
        for name in ["Al", "x", "ab"] {
            let order = Order::default().with_full_name(name).with_size("M");
            let report = validate(&order, &rules());
            assert_eq!(
                report.message_for(Field::FullName).unwrap(),
                "full name must be at least 3 characters",
                "name {name:?} should be too short"
            );
        }
    }

    #[test]
    fn long_names_fail_with_maximum_message() {
        let order = Order::default()
            .with_full_name("a".repeat(21))
            .with_size("M");
        let report = validate(&order, &rules());
        assert_eq!(
            report.message_for(Field::FullName).unwrap(),
            "full name must be at most 20 characters"
        );
    }

    #[test]
    fn name_length_is_measured_after_trimming() {
        // 2 visible characters padded with whitespace
        let order = Order::default().with_full_name("  Al  ").with_size("M");
        let report = validate(&order, &rules());
        assert!(matches!(
            report.error_for(Field::FullName),
            Some(ValidationError::TooShort { .. })
        ));

        // 20 visible characters padded with whitespace is fine
        let padded = format!("  {}  ", "a".repeat(20));
        let order = Order::default().with_full_name(padded).with_size("M");
        assert!(validate(&order, &rules()).is_valid());
    }

    #[test]
    fn whitespace_only_name_counts_as_required() {
        let order = Order::default().with_full_name("   ").with_size("M");
        let report = validate(&order, &rules());
        assert!(matches!(
            report.error_for(Field::FullName),
            Some(ValidationError::Required(Field::FullName))
        ));
    }

    #[test]
    fn boundary_lengths_are_accepted() {
        for name in ["abc", "a".repeat(20).as_str()] {
            let order = Order::default().with_full_name(name).with_size("S");
            assert!(validate(&order, &rules()).is_valid(), "name {name:?}");
        }
    }

    #[test]
    fn invalid_sizes_fail_with_choice_message() {
        for size in ["XL", "s", "m", "l", "Small", "0"] {
            let order = Order::default().with_full_name("Alice").with_size(size);
            let report = validate(&order, &rules());
            assert_eq!(
                report.message_for(Field::Size).unwrap(),
                "size must be S or M or L",
                "size {size:?} should be rejected"
            );
        }
    }

    #[test]
    fn all_failures_are_collected() {
        let order = Order::default().with_full_name("Al").with_size("XL");
        let report = validate(&order, &rules());
        assert_eq!(report.len(), 2);
        let fields: Vec<Field> = report.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![Field::FullName, Field::Size]);
    }

    #[test]
    fn field_keys_match_control_names() {
        assert_eq!(Field::FullName.key(), "fullName");
        assert_eq!(Field::Size.key(), "size");
    }

    #[test]
    fn custom_rules_are_honored() {
        let rules = ValidationRules {
            name_min: 5,
            name_max: 8,
        };
        let order = Order::default().with_full_name("Lara").with_size("M");
        let report = validate(&order, &rules);
        assert_eq!(
            report.message_for(Field::FullName).unwrap(),
            "full name must be at least 5 characters"
        );
    }
}
