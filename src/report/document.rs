/*!
 * Renderer-agnostic model of a compiled report.
 *
 * A `CompiledDocument` holds everything a binary writer needs, already in
 * final order: header, patient summary, findings sections, then image pages.
 */

use serde::{Deserialize, Serialize};

use crate::exam::image_data::ImageData;
use crate::language_utils::ReportLanguage;

/// Horizontal placement of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
}

/// An image placed at a fixed size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageBlock {
    pub data: ImageData,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub alignment: Alignment,
}

/// Letterhead and clinic identity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentHeader {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letterhead: Option<ImageBlock>,

    /// Clinic text lines, centered, blank fields already dropped
    pub lines: Vec<String>,
}

/// Patient identity and exam metadata lines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PatientSummary {
    pub lines: Vec<String>,
}

impl PatientSummary {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Findings for one structure. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub body_lines: Vec<String>,
}

/// One grid cell of an image page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageCell {
    /// A decodable image with its caption
    Image {
        image_id: String,
        block: ImageBlock,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    /// Placeholder for an image that failed to decode
    Invalid { image_id: String, marker: String },
}

impl ImageCell {
    pub fn image_id(&self) -> &str {
        match self {
            ImageCell::Image { image_id, .. } | ImageCell::Invalid { image_id, .. } => image_id,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, ImageCell::Invalid { .. })
    }
}

/// A page of images laid out in rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePage {
    pub title: String,
    pub rows: Vec<Vec<ImageCell>>,

    /// Explicit page break after this page (never set on the last page)
    pub page_break_after: bool,
}

impl ImagePage {
    pub fn image_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Cells in reading order.
    pub fn cells(&self) -> impl Iterator<Item = &ImageCell> {
        self.rows.iter().flatten()
    }
}

/// The finished report, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledDocument {
    pub language: ReportLanguage,
    pub header: DocumentHeader,
    pub patient_summary: PatientSummary,

    /// Heading printed above the sections
    pub report_title: String,
    pub sections: Vec<Section>,
    pub image_pages: Vec<ImagePage>,

    /// Suggested base file name for the exported document
    pub file_stem: String,
}

impl CompiledDocument {
    pub fn section_titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }

    pub fn image_count(&self) -> usize {
        self.image_pages.iter().map(ImagePage::image_count).sum()
    }

    pub fn page_break_count(&self) -> usize {
        self.image_pages.iter().filter(|p| p.page_break_after).count()
    }

    /// Image ids in document order.
    pub fn image_ids(&self) -> Vec<&str> {
        self.image_pages
            .iter()
            .flat_map(ImagePage::cells)
            .map(ImageCell::image_id)
            .collect()
    }
}
