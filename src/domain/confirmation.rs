//! Confirmation sentence synthesis
//!
//! Builds the fixed-template sentence shown after a successful submission.
//! Pure string composition; callers are expected to validate the order first.

use crate::domain::order::Order;

/// Composes the confirmation sentence for a submitted order
///
/// Returns None when the size selection does not parse, which a validated
/// order never hits.
///
/// # Example
/// ```rust
/// use pizza_form::domain::confirmation::compose;
/// use pizza_form::domain::order::Order;
///
/// let order = Order::default()
///     .with_full_name("Alice")
///     .with_size("L")
///     .with_topping_toggled("Ham");
/// assert_eq!(
///     compose(&order).unwrap(),
///     "Thank you for your order, Alice! Your large pizza with 1 topping is on the way."
/// );
/// ```
pub fn compose(order: &Order) -> Option<String> {
    let size = order.selected_size()?;
    Some(format!(
        "Thank you for your order, {}! Your {} pizza {} is on the way.",
        order.trimmed_name(),
        size.label(),
        toppings_phrase(order.topping_count()),
    ))
}

/// Pluralized topping-count phrase: `with no toppings`, `with 1 topping`,
/// `with 2 toppings`, ...
pub fn toppings_phrase(count: usize) -> String {
    match count {
        0 => "with no toppings".to_string(),
        1 => "with 1 topping".to_string(),
        n => format!("with {} toppings", n),
    }
}
