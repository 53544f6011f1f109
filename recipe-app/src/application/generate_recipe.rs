use crate::config::LlmConfig;
use crate::domain::{IngredientList, Recipe};
use crate::infrastructure::llm::ChatCompletionClient;
use recipe_errors::AppError;

pub struct GenerateRecipe {
    client: ChatCompletionClient,
}

impl GenerateRecipe {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            client: ChatCompletionClient::new(config),
        }
    }

    pub async fn execute(&self, ingredients: IngredientList) -> Result<Recipe, AppError> {
        tracing::info!(model = self.client.model(), "Generating recipe");

        let text = self.client.generate_recipe(ingredients.as_str()).await?;
        Ok(Recipe::new(ingredients.into_inner(), text))
    }
}
