/*!
 * Renderers turn a `CompiledDocument` into bytes.
 *
 * Binary office formats are produced by an external writer that consumes the
 * JSON form; the plain text outline is for terminals and quick review.
 */

use std::fmt::Write as _;

use anyhow::{Context, Result};

use crate::report::document::{CompiledDocument, ImageCell};

/// Output formats offered by the built-in renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

pub trait DocumentRenderer: Send + Sync {
    /// File extension for rendered output, without the dot
    fn extension(&self) -> &'static str;

    fn render(&self, document: &CompiledDocument) -> Result<Vec<u8>>;
}

/// Pretty-printed JSON with images as data URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl DocumentRenderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, document: &CompiledDocument) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(document).context("Failed to serialize compiled document")
    }
}

/// Readable outline of the document.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl PlainTextRenderer {
    fn outline(document: &CompiledDocument) -> Result<String, std::fmt::Error> {
        let mut out = String::new();

        if let Some(letterhead) = &document.header.letterhead {
            writeln!(out, "[letterhead {}x{}]", letterhead.width, letterhead.height)?;
        }
        for line in &document.header.lines {
            writeln!(out, "{}", line)?;
        }
        writeln!(out)?;

        for line in &document.patient_summary.lines {
            writeln!(out, "{}", line)?;
        }
        writeln!(out)?;

        writeln!(out, "{}", document.report_title)?;
        writeln!(out, "{}", "=".repeat(document.report_title.chars().count()))?;
        for section in &document.sections {
            writeln!(out)?;
            writeln!(out, "{}", section.title)?;
            for line in &section.body_lines {
                writeln!(out, "  {}", line)?;
            }
        }

        for page in &document.image_pages {
            writeln!(out)?;
            writeln!(out, "{}", page.title)?;
            for row in &page.rows {
                let cells: Vec<String> = row.iter().map(describe_cell).collect();
                writeln!(out, "  {}", cells.join(" | "))?;
            }
            if page.page_break_after {
                writeln!(out, "\u{000C}")?;
            }
        }

        Ok(out)
    }
}

fn describe_cell(cell: &ImageCell) -> String {
    match cell {
        ImageCell::Image {
            caption: Some(caption),
            ..
        } => format!("[image: {}]", caption),
        ImageCell::Image { .. } => "[image]".to_string(),
        ImageCell::Invalid { marker, .. } => format!("[{}]", marker),
    }
}

impl DocumentRenderer for PlainTextRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, document: &CompiledDocument) -> Result<Vec<u8>> {
        let outline = Self::outline(document).context("Failed to write text outline")?;
        Ok(outline.into_bytes())
    }
}

pub fn renderer_for(format: OutputFormat) -> Box<dyn DocumentRenderer> {
    match format {
        OutputFormat::Json => Box::new(JsonRenderer),
        OutputFormat::Text => Box::new(PlainTextRenderer),
    }
}
