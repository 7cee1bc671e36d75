use async_trait::async_trait;

use crate::domain::menu::errors::MenuError;
use crate::domain::menu::model::MenuItem;

pub struct LoadMenuParams {
    pub restaurant_name: String,
}

#[async_trait]
pub trait LoadMenuUseCase: Send + Sync {
    async fn execute(&self, params: LoadMenuParams) -> Result<Vec<MenuItem>, MenuError>;
}
