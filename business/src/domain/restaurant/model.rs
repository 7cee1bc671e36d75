use super::errors::RestaurantError;
use crate::domain::menu::model::MenuItem;

/// A restaurant from the catalog. The record itself is created once at
/// startup and never restructured; the only mutation is populating `menu`
/// after the first successful fetch of the session.
#[derive(Debug, Clone)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub image_url: String,
    pub description: String,
    pub menu: Option<Vec<MenuItem>>,
}

impl Restaurant {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cuisine: impl Into<String>,
        image_url: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, RestaurantError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RestaurantError::NameEmpty);
        }

        Ok(Self {
            id: id.into(),
            name,
            cuisine: cuisine.into(),
            image_url: image_url.into(),
            description: description.into(),
            menu: None,
        })
    }

    /// Stores a successfully fetched menu. An empty list is a legitimate
    /// cache entry ("fetched and empty"), distinct from never fetched.
    pub fn cache_menu(&mut self, items: Vec<MenuItem>) {
        self.menu = Some(items);
    }

    pub fn cached_menu(&self) -> Option<&[MenuItem]> {
        self.menu.as_deref()
    }

    pub fn has_cached_menu(&self) -> bool {
        self.menu.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant() -> Restaurant {
        Restaurant::new(
            "r1",
            "Campus Bites",
            "American Fast Food",
            "https://example.com/campus-bites.jpg",
            "Classic comfort food between classes.",
        )
        .unwrap()
    }

    #[test]
    fn should_create_restaurant_without_menu() {
        let r = restaurant();

        assert!(!r.has_cached_menu());
        assert!(r.cached_menu().is_none());
    }

    #[test]
    fn should_reject_when_name_empty() {
        let result = Restaurant::new("r1", "  ", "Cafe", "", "");

        assert!(matches!(result.unwrap_err(), RestaurantError::NameEmpty));
    }

    #[test]
    fn should_cache_menu_once_fetched() {
        let mut r = restaurant();
        let item = MenuItem::new("m1", "Burger", "", 8.0).unwrap();

        r.cache_menu(vec![item.clone()]);

        assert!(r.has_cached_menu());
        assert_eq!(r.cached_menu(), Some(&[item][..]));
    }

    #[test]
    fn should_treat_empty_fetched_menu_as_cached() {
        let mut r = restaurant();

        r.cache_menu(vec![]);

        assert!(r.has_cached_menu());
        assert_eq!(r.cached_menu(), Some(&[][..]));
    }
}
