/// Menu errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("menu.generation_failed")]
    GenerationFailed,
    #[error("menu.invalid_item")]
    InvalidItem,
}
