use super::errors::MenuError;

/// A dish offered by a restaurant. Immutable once fetched from the
/// menu provider.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Result<Self, MenuError> {
        let id = id.into();
        let name = name.into();

        if id.trim().is_empty() || name.trim().is_empty() {
            return Err(MenuError::InvalidItem);
        }

        if !price.is_finite() || price < 0.0 {
            return Err(MenuError::InvalidItem);
        }

        Ok(Self {
            id,
            name,
            description: description.into(),
            price,
        })
    }
}
