use crate::domain::catalog::Catalog;
use crate::domain::validation::ValidationRules;
use thiserror::Error;

/// Validated configuration for the order form
///
/// Holds the name-length bounds and the topping catalog. Construction
/// sanitizes the bounds into the supported range and rejects catalogs the
/// form cannot render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    name_min: usize,
    name_max: usize,
    catalog: Catalog,
}

impl FormConfig {
    pub const DEFAULT_NAME_MIN: usize = 3;
    pub const DEFAULT_NAME_MAX: usize = 20;
    /// Hard cap on the configurable maximum, keeps rendering single-line
    pub const NAME_LENGTH_LIMIT: usize = 100;

    /// The standard form: 3-20 character names, five-topping catalog
    pub fn standard() -> Self {
        Self {
            name_min: Self::DEFAULT_NAME_MIN,
            name_max: Self::DEFAULT_NAME_MAX,
            catalog: Catalog::standard(),
        }
    }

    /// Builds a custom configuration
    ///
    /// Bounds are sanitized into `1..=NAME_LENGTH_LIMIT` before checking;
    /// an inverted range or an unusable catalog is rejected.
    pub fn new(name_min: usize, name_max: usize, catalog: Catalog) -> Result<Self, FormConfigError> {
        let name_min = Self::sanitize_bound(name_min);
        let name_max = Self::sanitize_bound(name_max);
        if name_min > name_max {
            return Err(FormConfigError::InvalidNameBounds { name_min, name_max });
        }
        if catalog.is_empty() {
            return Err(FormConfigError::EmptyCatalog);
        }
        if let Some(name) = duplicate_entry(&catalog) {
            return Err(FormConfigError::DuplicateTopping { name });
        }

        Ok(Self {
            name_min,
            name_max,
            catalog,
        })
    }

    /// Clamps a length bound into the supported range
    pub fn sanitize_bound(value: usize) -> usize {
        value.clamp(1, Self::NAME_LENGTH_LIMIT)
    }

    /// The validation rules derived from this configuration
    pub fn rules(&self) -> ValidationRules {
        ValidationRules {
            name_min: self.name_min,
            name_max: self.name_max,
        }
    }

    /// The topping catalog the form offers
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn name_min(&self) -> usize {
        self.name_min
    }

    pub fn name_max(&self) -> usize {
        self.name_max
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Looks for two catalog entries sharing an id or a name
fn duplicate_entry(catalog: &Catalog) -> Option<String> {
    let toppings = catalog.toppings();
    for (i, a) in toppings.iter().enumerate() {
        for b in &toppings[i + 1..] {
            if a.id() == b.id() || a.name().eq_ignore_ascii_case(b.name()) {
                return Some(b.name().to_string());
            }
        }
    }
    None
}

#[derive(Debug, Error)]
pub enum FormConfigError {
    #[error("name bounds are inverted: min {name_min} exceeds max {name_max}")]
    InvalidNameBounds { name_min: usize, name_max: usize },
    #[error("topping catalog must offer at least one topping")]
    EmptyCatalog,
    #[error("topping catalog lists '{name}' more than once")]
    DuplicateTopping { name: String },
}
