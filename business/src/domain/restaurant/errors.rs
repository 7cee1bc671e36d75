#[derive(Debug, thiserror::Error)]
pub enum RestaurantError {
    #[error("restaurant.name_empty")]
    NameEmpty,
}
