//! The fixed topping catalog
//!
//! Maps the short ids shown in the terminal form to canonical topping names,
//! the way a checkbox group binds stable ids to labels. Lookup is pure and
//! has no knowledge of the order record.

/// A single topping offered by the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topping {
    id: String,
    name: String,
}

impl Topping {
    /// Creates a topping entry with a stable id and display name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Stable id used for terse selection (`topping 5`)
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Canonical display name, also the value stored in the order
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered collection of the toppings the form offers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    toppings: Vec<Topping>,
}

impl Catalog {
    /// Builds a catalog from the given entries, preserving their order
    pub fn new(toppings: Vec<Topping>) -> Self {
        Self { toppings }
    }

    /// The standard five-topping catalog
    pub fn standard() -> Self {
        Self::new(vec![
            Topping::new("1", "Pepperoni"),
            Topping::new("2", "Green Peppers"),
            Topping::new("3", "Pineapple"),
            Topping::new("4", "Mushrooms"),
            Topping::new("5", "Ham"),
        ])
    }

    /// All toppings in display order
    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    /// Number of toppings on offer
    pub fn len(&self) -> usize {
        self.toppings.len()
    }

    /// Returns true if the catalog offers no toppings
    pub fn is_empty(&self) -> bool {
        self.toppings.is_empty()
    }

    /// Resolves user input to a catalog entry
    ///
    /// Accepts either the stable id (`"5"`) or the topping name. Name
    /// matching is case-insensitive so `topping ham` works at the prompt,
    /// but the resolved entry always carries the canonical spelling.
    ///
    /// # Example
    /// ```rust
    /// use pizza_form::domain::catalog::Catalog;
    ///
    /// let catalog = Catalog::standard();
    /// assert_eq!(catalog.resolve("ham").unwrap().name(), "Ham");
    /// assert_eq!(catalog.resolve("2").unwrap().name(), "Green Peppers");
    /// assert!(catalog.resolve("Anchovies").is_none());
    /// ```
    pub fn resolve(&self, input: &str) -> Option<&Topping> {
        let input = input.trim();
        self.toppings
            .iter()
            .find(|t| t.id == input || t.name.eq_ignore_ascii_case(input))
    }

    /// Returns true if the given name is a canonical catalog entry
    pub fn contains_name(&self, name: &str) -> bool {
        self.toppings.iter().any(|t| t.name == name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
