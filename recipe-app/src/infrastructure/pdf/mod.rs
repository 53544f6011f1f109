mod exporter;
mod layout;

pub use exporter::PdfExporter;
