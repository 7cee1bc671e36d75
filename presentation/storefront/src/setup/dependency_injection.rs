use std::sync::Arc;

use logger::TracingLogger;

use gemini::client::GeminiClient;
use gemini::menu_generator::MenuGeneratorGemini;

use business::application::cart::checkout::CheckoutUseCaseImpl;
use business::application::menu::load::LoadMenuUseCaseImpl;
use business::domain::menu::use_cases::load::LoadMenuUseCase;

use crate::catalog::StaticCatalog;
use crate::config::gemini_config::GeminiConfig;
use crate::session::StorefrontSession;

pub struct DependencyContainer {
    pub session: StorefrontSession,
    pub load_menu: Arc<dyn LoadMenuUseCase>,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let gemini_config = GeminiConfig::from_env();
        let gemini_client = GeminiClient::new(gemini_config.api_key);
        let menu_generator = Arc::new(MenuGeneratorGemini::new(gemini_client));

        // Use cases
        let load_menu: Arc<dyn LoadMenuUseCase> = Arc::new(LoadMenuUseCaseImpl {
            generator: menu_generator,
            logger: logger.clone(),
        });
        let checkout_use_case = Arc::new(CheckoutUseCaseImpl {
            logger: logger.clone(),
        });

        let session = StorefrontSession::new(&StaticCatalog, checkout_use_case, logger);

        Self { session, load_menu }
    }
}
