mod pdf;

pub use pdf::PdfRecipeExporter;
