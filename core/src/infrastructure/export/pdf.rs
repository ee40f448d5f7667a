use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use tracing::{debug, error};

use crate::domain::{
    common::entities::app_errors::CoreError, export::ports::DocumentExporter,
    recipe::entities::GeneratedRecipe,
};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const BODY_SIZE: f32 = 12.0;
const HEADING_SIZE: f32 = 14.0;
const LINE_HEIGHT: f32 = 7.0;
const SECTION_GAP: f32 = 10.0;
/// Helvetica at 12pt fits roughly this many characters between the margins.
const MAX_LINE_CHARS: usize = 85;
/// Average Helvetica glyph width as a fraction of the font size, in mm per point.
const GLYPH_WIDTH_MM_PER_PT: f32 = 0.19;

/// Renders recipes into an A4 PDF using the built-in Helvetica fonts.
#[derive(Debug, Clone, Default)]
pub struct PdfRecipeExporter;

impl PdfRecipeExporter {
    pub fn new() -> Self {
        Self
    }
}

/// Builtin PDF fonts only cover Latin-1. Anything else is dropped.
fn latin1(text: &str) -> String {
    text.chars()
        .filter(|c| *c == '\n' || ((*c as u32) < 0x100 && !c.is_control()))
        .collect()
}

/// Greedy word wrap. Words longer than `width` are split.
fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let mut word = word.to_string();
            while word.chars().count() > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let head: String = word.chars().take(width).collect();
                word = word.chars().skip(width).collect();
                lines.push(head);
            }

            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&word);
        }
        lines.push(current);
    }

    lines
}

struct Cursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
    pages: usize,
}

impl Cursor<'_> {
    fn ensure_room(&mut self, height: f32) {
        if self.y - height < MARGIN {
            self.pages += 1;
            let (page, layer) = self.doc.add_page(
                Mm(PAGE_WIDTH),
                Mm(PAGE_HEIGHT),
                format!("Page {}", self.pages),
            );
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN;
        }
    }

    fn line(&mut self, text: &str, size: f32, x: f32, font: &IndirectFontRef) {
        self.ensure_room(LINE_HEIGHT);
        self.y -= LINE_HEIGHT;
        if !text.is_empty() {
            self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
        }
    }
}

fn font_error(e: printpdf::Error) -> CoreError {
    error!("Failed to prepare PDF document: {}", e);
    CoreError::ExportError(e.to_string())
}

impl DocumentExporter for PdfRecipeExporter {
    fn export(&self, recipes: &[GeneratedRecipe]) -> Result<Vec<u8>, CoreError> {
        let (doc, page, layer) =
            PdfDocument::new("Recipes", Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Page 1");
        let body_font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(font_error)?;
        let heading_font = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(font_error)?;

        let mut cursor = Cursor {
            layer: doc.get_page(page).get_layer(layer),
            doc: &doc,
            y: PAGE_HEIGHT - MARGIN,
            pages: 1,
        };

        for (i, recipe) in recipes.iter().enumerate() {
            if i > 0 {
                cursor.ensure_room(SECTION_GAP);
                cursor.y -= SECTION_GAP;
            }

            let heading = format!("Recipe {}", i + 1);
            let heading_width = heading.len() as f32 * HEADING_SIZE * GLYPH_WIDTH_MM_PER_PT;
            let heading_x = ((PAGE_WIDTH - heading_width) / 2.0).max(MARGIN);
            cursor.line(&heading, HEADING_SIZE, heading_x, &heading_font);

            for line in wrap_lines(&latin1(&recipe.text), MAX_LINE_CHARS) {
                cursor.line(&line, BODY_SIZE, MARGIN, &body_font);
            }
        }

        let pages = cursor.pages;
        drop(cursor);
        let bytes = doc.save_to_bytes().map_err(|e| {
            error!("Failed to write PDF document: {}", e);
            CoreError::ExportError(e.to_string())
        })?;

        debug!(recipes = recipes.len(), pages, size = bytes.len(), "Exported recipes to PDF");
        Ok(bytes)
    }

    fn content_type(&self) -> &'static str {
        "application/pdf"
    }

    fn file_name(&self) -> &'static str {
        "recipes.pdf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_lines_respects_width() {
        let lines = wrap_lines("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
        assert!(lines.iter().all(|l| l.chars().count() <= 9));
    }

    #[test]
    fn test_wrap_lines_keeps_paragraphs_and_splits_long_words() {
        let lines = wrap_lines("abcdefghij\n\nxy", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij", "", "xy"]);
    }

    #[test]
    fn test_latin1_drops_unsupported_characters() {
        assert_eq!(latin1("Sauté 🍅 at 200°C"), "Sauté  at 200°C");
    }

    #[test]
    fn test_export_produces_pdf() {
        let long_text = "Stir the rice gently. ".repeat(400);
        let recipes = vec![
            GeneratedRecipe::new("Tomato Rice\nIngredients: rice, tomato".to_string()),
            GeneratedRecipe::new(long_text),
            GeneratedRecipe::fallback("Unable to generate recipe at this time."),
        ];

        let bytes = PdfRecipeExporter::new().export(&recipes).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
