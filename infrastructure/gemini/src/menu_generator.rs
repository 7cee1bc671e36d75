use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;

use business::domain::menu::errors::MenuError;
use business::domain::menu::model::MenuItem;
use business::domain::menu::services::MenuGeneratorService;

use crate::client::GeminiClient;

const MODEL: &str = "gemini-2.5-flash";

pub struct MenuGeneratorGemini {
    client: GeminiClient,
}

impl MenuGeneratorGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn build_prompt(restaurant_name: &str) -> String {
        format!(
            "Generate 5 affordable and popular menu items for a university \
             student-friendly restaurant called \"{}\". For each item, provide \
             a name, a short description, and a price between 5.00 and 15.00.",
            restaurant_name
        )
    }

    /// Response schema matching the expected payload: an ordered array of
    /// id/name/description/price objects.
    fn response_schema() -> serde_json::Value {
        json!({
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "id": {
                        "type": "STRING",
                        "description": "A unique identifier for the menu item.",
                    },
                    "name": {
                        "type": "STRING",
                        "description": "The name of the menu item.",
                    },
                    "description": {
                        "type": "STRING",
                        "description": "A short description of the menu item.",
                    },
                    "price": {
                        "type": "NUMBER",
                        "description": "The price of the menu item.",
                    },
                },
                "required": ["id", "name", "description", "price"],
                "propertyOrdering": ["id", "name", "description", "price"],
            },
        })
    }

    fn parse_response(content: &str) -> Result<Vec<MenuItem>, MenuError> {
        // Remove markdown code blocks if present
        let mut json_text = content.trim().to_string();
        if json_text.starts_with("```json") {
            json_text = json_text
                .replace("```json", "")
                .replace("```", "")
                .trim()
                .to_string();
        } else if json_text.starts_with("```") {
            json_text = json_text.replace("```", "").trim().to_string();
        }

        let parsed: Vec<serde_json::Value> =
            serde_json::from_str(&json_text).map_err(|_| MenuError::GenerationFailed)?;

        let items = parsed
            .iter()
            .filter_map(|entry| {
                let id = entry
                    .get("id")
                    .and_then(|v| v.as_str())
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| Uuid::new_v4().to_string());

                let name = entry.get("name").and_then(|v| v.as_str()).unwrap_or("");

                let description = entry
                    .get("description")
                    .and_then(|v| v.as_str())
                    .unwrap_or("");

                let price = entry.get("price").and_then(|v| v.as_f64())?;

                // Malformed entries are skipped rather than failing the batch.
                MenuItem::new(id, name, description, price).ok()
            })
            .collect();

        Ok(items)
    }
}

#[async_trait]
impl MenuGeneratorService for MenuGeneratorGemini {
    async fn generate(&self, restaurant_name: &str) -> Result<Vec<MenuItem>, MenuError> {
        let body = json!({
            "contents": [
                {"parts": [{"text": Self::build_prompt(restaurant_name)}]},
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": Self::response_schema(),
            },
        });

        let response = self
            .client
            .client
            .post(self.client.generate_content_url(MODEL))
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.client.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|_| MenuError::GenerationFailed)?;

        if !response.status().is_success() {
            return Err(MenuError::GenerationFailed);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| MenuError::GenerationFailed)?;

        let content = data["candidates"]
            .as_array()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate["content"]["parts"].as_array())
            .and_then(|parts| parts.first())
            .and_then(|part| part["text"].as_str())
            .ok_or(MenuError::GenerationFailed)?;

        Self::parse_response(content)
    }
}
