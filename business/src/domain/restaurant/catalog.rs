use super::model::Restaurant;

/// Port for the catalog collaborator: supplies the fixed, ordered list of
/// restaurants once at startup. No update interface is required.
pub trait CatalogProvider: Send + Sync {
    fn load(&self) -> Vec<Restaurant>;
}
