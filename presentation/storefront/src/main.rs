use dotenvy::dotenv;

mod catalog;
mod config;
mod session;
mod setup;

use setup::{dependency_injection::DependencyContainer, shell::Shell};

/// Storefront Entry Point
///
/// Initializes the application, wires dependencies, and runs the
/// interactive shell.
///
/// Hexagonal layering, mirrored across the workspace:
/// - config/: Application configuration (Gemini credentials)
/// - setup/: Dependency injection and the shell loop
/// - catalog.rs / session.rs: catalog seed and the view-shell session
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Wire dependencies
    let container = DependencyContainer::new();

    // 4. Run the interactive shell
    Shell::run(container).await?;

    Ok(())
}
