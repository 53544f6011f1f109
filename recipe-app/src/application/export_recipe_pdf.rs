use crate::domain::Recipe;
use crate::infrastructure::pdf::PdfExporter;
use recipe_errors::AppError;
use std::path::PathBuf;

pub struct ExportRecipePdf {
    exporter: PdfExporter,
}

impl ExportRecipePdf {
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            exporter: PdfExporter::new(output_path),
        }
    }

    pub async fn execute(&self, recipe: Option<&Recipe>) -> Result<Vec<u8>, AppError> {
        let recipe = recipe.ok_or(AppError::NoRecipe)?;
        self.exporter.export(&recipe.text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_without_recipe() {
        let export = ExportRecipePdf::new(std::env::temp_dir().join("unused-recipe.pdf"));
        assert_eq!(export.execute(None).await.unwrap_err(), AppError::NoRecipe);
    }

    #[tokio::test]
    async fn test_with_recipe() {
        let path = std::env::temp_dir().join(format!("recipe-{}.pdf", uuid::Uuid::new_v4()));
        let export = ExportRecipePdf::new(path.clone());
        let recipe = Recipe::new("tomato".to_string(), "Tomato salad".to_string());

        let bytes = export.execute(Some(&recipe)).await.unwrap();

        assert!(bytes.starts_with(b"%PDF"));
        assert!(path.exists());
        std::fs::remove_file(&path).unwrap();
    }
}
