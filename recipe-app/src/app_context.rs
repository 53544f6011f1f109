use crate::application::{ExportRecipePdf, GenerateRecipe};
use crate::config::AppConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub generate_recipe: Arc<GenerateRecipe>,
    pub export_pdf: Arc<ExportRecipePdf>,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            generate_recipe: Arc::new(GenerateRecipe::new(config.llm.clone())),
            export_pdf: Arc::new(ExportRecipePdf::new(config.pdf_path.clone())),
        }
    }
}
