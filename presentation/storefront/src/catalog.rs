use business::domain::restaurant::catalog::CatalogProvider;
use business::domain::restaurant::model::Restaurant;
use uuid::Uuid;

/// Fixed on-campus catalog, seeded once at startup. Menus start
/// unpopulated and are filled in lazily per restaurant.
pub struct StaticCatalog;

impl StaticCatalog {
    fn restaurant(name: &str, cuisine: &str, image_url: &str, description: &str) -> Restaurant {
        // Seed data is hand-maintained; a name can't be empty here.
        Restaurant::new(Uuid::new_v4().to_string(), name, cuisine, image_url, description)
            .expect("static catalog entry must be valid")
    }
}

impl CatalogProvider for StaticCatalog {
    fn load(&self) -> Vec<Restaurant> {
        vec![
            Self::restaurant(
                "Campus Bites",
                "American Fast Food",
                "https://picsum.photos/id/1080/400/300",
                "Classic American comfort food, perfect for a quick bite between classes.",
            ),
            Self::restaurant(
                "The Noodle Hub",
                "Asian Cuisine",
                "https://picsum.photos/id/200/400/300",
                "Authentic noodles and rice dishes with a spicy kick!",
            ),
            Self::restaurant(
                "Healthy Greens",
                "Salads & Wraps",
                "https://picsum.photos/id/300/400/300",
                "Fresh, nutritious salads and wraps for a healthy campus lifestyle.",
            ),
            Self::restaurant(
                "Pizza Palace",
                "Italian & Pizza",
                "https://picsum.photos/id/400/400/300",
                "Piping hot pizzas and classic Italian pasta dishes.",
            ),
            Self::restaurant(
                "Coffee & Co.",
                "Cafe & Snacks",
                "https://picsum.photos/id/500/400/300",
                "Your go-to spot for coffee, pastries, and light snacks.",
            ),
        ]
    }
}
