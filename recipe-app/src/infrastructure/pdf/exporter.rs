use super::layout::{layout_pages, to_pdf_charset, FONT_SIZE_PT};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use recipe_errors::AppError;
use std::path::PathBuf;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const LINE_HEIGHT_MM: f32 = 10.0;
const LAYER_NAME: &str = "Recipe";

/// Writes recipe text to a PDF at a fixed location, replacing whatever was
/// there before.
#[derive(Debug, Clone)]
pub struct PdfExporter {
    output_path: PathBuf,
}

impl PdfExporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    /// Renders `text`, writes it to the output path and returns the bytes.
    pub async fn export(&self, text: &str) -> Result<Vec<u8>, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::NoRecipe);
        }

        let text = text.to_string();
        let bytes = tokio::task::spawn_blocking(move || render_pdf(&text))
            .await
            .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

        tokio::fs::write(&self.output_path, &bytes)
            .await
            .map_err(|e| {
                AppError::PdfExport(format!("{}: {}", self.output_path.display(), e))
            })?;

        tracing::info!(
            path = %self.output_path.display(),
            size = bytes.len(),
            "Recipe PDF written"
        );
        Ok(bytes)
    }
}

/// Lays `text` out in a single Helvetica column, one page after another.
fn render_pdf(text: &str) -> Result<Vec<u8>, AppError> {
    let pages = layout_pages(&to_pdf_charset(text));

    let (doc, first_page, first_layer) = PdfDocument::new(
        "Recipe",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        LAYER_NAME,
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::PdfExport(e.to_string()))?;

    let mut targets = vec![(first_page, first_layer)];
    for _ in 1..pages.len() {
        targets.push(doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME));
    }

    for ((page, layer), lines) in targets.into_iter().zip(&pages) {
        let layer = doc.get_page(page).get_layer(layer);

        for (row, line) in lines.iter().enumerate() {
            let baseline = PAGE_HEIGHT_MM - MARGIN_MM - LINE_HEIGHT_MM * (row as f32 + 1.0)
                + LINE_HEIGHT_MM / 2.0;
            layer.use_text(line.as_str(), FONT_SIZE_PT, Mm(MARGIN_MM), Mm(baseline), &font);
        }
    }

    doc.save_to_bytes()
        .map_err(|e| AppError::PdfExport(e.to_string()))
}
