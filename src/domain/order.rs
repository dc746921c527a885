//! The in-progress order record and its structural updates
//!
//! The `Order` mirrors the raw values of the form controls: the name as
//! typed, the size as delivered by the select control, and the chosen
//! toppings. Every update consumes the record and returns the new one, so
//! callers never observe partial mutation.

use std::collections::BTreeSet;

/// Pizza size choices offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// Parses the raw select value (`S`, `M`, `L`) into a size
    ///
    /// Returns None for the empty option or any unrecognized value.
    /// Matching is case-sensitive because a select control only ever
    /// delivers the exact option codes.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "S" => Some(Size::Small),
            "M" => Some(Size::Medium),
            "L" => Some(Size::Large),
            _ => None,
        }
    }

    /// Returns the option code as shown in the select control
    pub fn code(&self) -> &'static str {
        match self {
            Size::Small => "S",
            Size::Medium => "M",
            Size::Large => "L",
        }
    }

    /// Returns the lowercase label used in the confirmation sentence
    pub fn label(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

/// The form record: a name, a size, and a set of toppings
///
/// `size` holds the raw select value rather than a parsed [`Size`] so that
/// the validator can flag out-of-range values instead of the record
/// silently rejecting them.
///
/// # Example
/// ```rust
/// use pizza_form::domain::order::Order;
///
/// let order = Order::default()
///     .with_full_name("Alice")
///     .with_size("L")
///     .with_topping_toggled("Ham");
/// assert_eq!(order.topping_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    /// Full name as typed, untrimmed
    pub full_name: String,
    /// Raw size select value; empty string means unselected
    pub size: String,
    /// Canonical topping names, ordered for deterministic display
    pub toppings: BTreeSet<String>,
}

impl Order {
    /// Returns a copy with the full name replaced
    pub fn with_full_name(mut self, name: impl Into<String>) -> Self {
        self.full_name = name.into();
        self
    }

    /// Returns a copy with the size selection replaced
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    /// Returns a copy with the topping's membership toggled
    ///
    /// Inserts the topping if absent, removes it if present. Toggling the
    /// same topping twice therefore restores the original set.
    pub fn with_topping_toggled(mut self, topping: impl Into<String>) -> Self {
        let topping = topping.into();
        if !self.toppings.remove(&topping) {
            self.toppings.insert(topping);
        }
        self
    }

    /// Returns true if the given topping is currently selected
    pub fn has_topping(&self, topping: &str) -> bool {
        self.toppings.contains(topping)
    }

    /// Number of selected toppings
    pub fn topping_count(&self) -> usize {
        self.toppings.len()
    }

    /// The full name with surrounding whitespace removed
    ///
    /// Validation and the confirmation sentence both work on this form.
    pub fn trimmed_name(&self) -> &str {
        self.full_name.trim()
    }

    /// The size selection parsed into a [`Size`], if it is a valid code
    pub fn selected_size(&self) -> Option<Size> {
        Size::parse(&self.size)
    }

    /// Returns true if both required fields carry a non-empty value
    ///
    /// This is the coarse submit gate; it says nothing about whether the
    /// values are actually valid.
    pub fn has_required_fields(&self) -> bool {
        !self.trimmed_name().is_empty() && !self.size.is_empty()
    }

    /// Returns true if no field has been filled in yet
    pub fn is_blank(&self) -> bool {
        self.full_name.is_empty() && self.size.is_empty() && self.toppings.is_empty()
    }
}
