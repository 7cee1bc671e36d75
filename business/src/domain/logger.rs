/// Logging port for the storefront. Domain and application code only see
/// these four levels; the presentation layer decides the backing sink
/// (tracing in production, mocks in tests).
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
