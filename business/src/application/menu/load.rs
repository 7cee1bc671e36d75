use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::menu::errors::MenuError;
use crate::domain::menu::model::MenuItem;
use crate::domain::menu::services::MenuGeneratorService;
use crate::domain::menu::use_cases::load::{LoadMenuParams, LoadMenuUseCase};

pub struct LoadMenuUseCaseImpl {
    pub generator: Arc<dyn MenuGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadMenuUseCase for LoadMenuUseCaseImpl {
    async fn execute(&self, params: LoadMenuParams) -> Result<Vec<MenuItem>, MenuError> {
        self.logger
            .info(&format!("Loading menu for: {}", params.restaurant_name));

        let items = self
            .generator
            .generate(&params.restaurant_name)
            .await
            .map_err(|e| {
                // Diagnostics only; the user sees the fixed view message.
                self.logger.error(&format!(
                    "Menu generation failed for {}: {}",
                    params.restaurant_name, e
                ));
                MenuError::GenerationFailed
            })?;

        self.logger.info(&format!(
            "Loaded {} menu items for {}",
            items.len(),
            params.restaurant_name
        ));

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub MenuGenerator {}

        #[async_trait]
        impl MenuGeneratorService for MenuGenerator {
            async fn generate(&self, restaurant_name: &str) -> Result<Vec<MenuItem>, MenuError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn sample_items() -> Vec<MenuItem> {
        vec![
            MenuItem::new("m1", "Campus Burger", "Double patty", 8.5).unwrap(),
            MenuItem::new("m2", "Curly Fries", "With dip", 4.0).unwrap(),
        ]
    }

    #[tokio::test]
    async fn should_return_items_from_generator() {
        let mut generator = MockMenuGenerator::new();
        generator
            .expect_generate()
            .withf(|name| name == "Campus Bites")
            .returning(|_| Ok(sample_items()));

        let use_case = LoadMenuUseCaseImpl {
            generator: Arc::new(generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoadMenuParams {
                restaurant_name: "Campus Bites".to_string(),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_propagate_generation_failure() {
        let mut generator = MockMenuGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Err(MenuError::GenerationFailed));

        let use_case = LoadMenuUseCaseImpl {
            generator: Arc::new(generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoadMenuParams {
                restaurant_name: "Campus Bites".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), MenuError::GenerationFailed));
    }

    #[tokio::test]
    async fn should_log_underlying_error_on_failure() {
        let mut generator = MockMenuGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Err(MenuError::GenerationFailed));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_error()
            .withf(|msg| msg.contains("menu.generation_failed"))
            .times(1)
            .returning(|_| ());

        let use_case = LoadMenuUseCaseImpl {
            generator: Arc::new(generator),
            logger: Arc::new(logger),
        };

        let _ = use_case
            .execute(LoadMenuParams {
                restaurant_name: "The Noodle Hub".to_string(),
            })
            .await;
    }

    #[tokio::test]
    async fn should_pass_through_empty_menu() {
        let mut generator = MockMenuGenerator::new();
        generator.expect_generate().returning(|_| Ok(vec![]));

        let use_case = LoadMenuUseCaseImpl {
            generator: Arc::new(generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoadMenuParams {
                restaurant_name: "Healthy Greens".to_string(),
            })
            .await;

        assert!(result.unwrap().is_empty());
    }
}
