/*!
 * Report compiler.
 *
 * Turns a patient, one of their exams, the clinic profile and the structure
 * order of the exam type into a `CompiledDocument`. Compilation is a pure
 * function of its inputs. Only a missing patient or exam is fatal; a corrupt
 * image or an absent structure entry degrades inside the document instead.
 */

use std::fmt::Write as _;

use chrono::NaiveDate;
use log::debug;

use crate::errors::CompilationError;
use crate::exam::catalog::ExamCatalog;
use crate::exam::model::{ClinicProfile, Exam, ExamImage, Patient};
use crate::language_utils::ReportLanguage;
use crate::report::document::{
    Alignment, CompiledDocument, DocumentHeader, ImageBlock, ImageCell, ImagePage,
    PatientSummary, Section,
};
use crate::report::labels::ReportLabels;
use crate::report::layout::{GridLayout, LayoutConfig};

/// Separator between fields that share a summary or header line
const FIELD_SEPARATOR: &str = " • ";

/// Default date pattern, day/month/year
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Compiles exams into renderer-agnostic documents.
pub struct ReportCompiler<'a> {
    catalog: &'a dyn ExamCatalog,
    labels: ReportLabels,
    layout: LayoutConfig,
    date_format: String,
}

impl<'a> ReportCompiler<'a> {
    /// Compiler with default layout and labels in the catalog's language.
    pub fn new(catalog: &'a dyn ExamCatalog) -> Self {
        Self {
            catalog,
            labels: ReportLabels::for_language(catalog.language()),
            layout: LayoutConfig::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_date_format(mut self, date_format: &str) -> Self {
        self.date_format = date_format.to_string();
        self
    }

    pub fn language(&self) -> ReportLanguage {
        self.catalog.language()
    }

    /// Compile a report using an explicit structure order.
    pub fn compile(
        &self,
        patient: Option<&Patient>,
        exam: Option<&Exam>,
        clinic: &ClinicProfile,
        structure_order: &[String],
    ) -> Result<CompiledDocument, CompilationError> {
        let patient = patient.ok_or(CompilationError::MissingPatient)?;
        let exam = exam.ok_or(CompilationError::MissingExam)?;

        debug!(
            "Compiling exam '{}' for patient '{}' ({} structures, {} images)",
            exam.id,
            patient.name,
            structure_order.len(),
            exam.images.len()
        );

        Ok(CompiledDocument {
            language: self.language(),
            header: self.build_header(clinic),
            patient_summary: self.build_summary(patient, exam),
            report_title: self.labels.report_title.clone(),
            sections: build_sections(exam, structure_order),
            image_pages: self.build_image_pages(&exam.images),
            file_stem: file_stem(&self.labels.file_prefix, &patient.name),
        })
    }

    /// Compile a report with the structure order the catalog gives for the exam type.
    pub fn compile_exam(
        &self,
        patient: Option<&Patient>,
        exam: Option<&Exam>,
        clinic: &ClinicProfile,
    ) -> Result<CompiledDocument, CompilationError> {
        let order = match exam {
            Some(exam) => self.catalog.structure_order(&exam.exam_type, patient),
            None => Vec::new(),
        };
        self.compile(patient, exam, clinic, &order)
    }

    fn build_header(&self, clinic: &ClinicProfile) -> DocumentHeader {
        let letterhead = clinic.letterhead.as_ref().and_then(|data| {
            if !data.is_image_typed() {
                debug!("Letterhead is not an image, using text header only");
                return None;
            }
            if !data.decodes() {
                debug!("Letterhead could not be decoded, using text header only");
                return None;
            }
            Some(ImageBlock {
                data: data.clone(),
                width: self.layout.letterhead_width,
                height: self.layout.letterhead_height,
                alignment: Alignment::Center,
            })
        });

        let mut lines = Vec::new();
        push_if_present(&mut lines, &clinic.name);
        push_if_present(&mut lines, &self.veterinarian_line(clinic));
        push_if_present(&mut lines, &clinic.address);

        DocumentHeader { letterhead, lines }
    }

    fn veterinarian_line(&self, clinic: &ClinicProfile) -> String {
        let vet = clinic.veterinarian_name.trim();
        let license = clinic.license_number.trim();

        match (vet.is_empty(), license.is_empty()) {
            (_, true) => vet.to_string(),
            (true, false) => format!("{} {}", self.labels.license, license),
            (false, false) => {
                format!("{}{}{} {}", vet, FIELD_SEPARATOR, self.labels.license, license)
            }
        }
    }

    fn build_summary(&self, patient: &Patient, exam: &Exam) -> PatientSummary {
        let labels = &self.labels;
        let species = self.catalog.species_name(&patient.species);

        let mut lines = vec![format!("{}: {} ({})", labels.patient, patient.name, species)];

        let exam_weight = exam.exam_weight.or(patient.weight);
        let mut details = Vec::new();
        if !patient.breed.trim().is_empty() {
            details.push(format!("{}: {}", labels.breed, patient.breed.trim()));
        }
        if let Some(weight) = patient.weight {
            details.push(format!("{}: {} kg", labels.registered_weight, weight));
        }
        if let Some(weight) = exam_weight {
            details.push(format!("{}: {} kg", labels.exam_weight, weight));
        }
        if !details.is_empty() {
            lines.push(details.join(FIELD_SEPARATOR));
        }

        lines.push(format!(
            "{}: {}",
            labels.exam_type,
            self.catalog.exam_type_name(&exam.exam_type)
        ));
        lines.push(format!(
            "{}: {}",
            labels.exam_date,
            format_date(exam.exam_date, &self.date_format)
        ));

        PatientSummary { lines }
    }

    fn build_image_pages(&self, images: &[ExamImage]) -> Vec<ImagePage> {
        let grid = GridLayout::from_config(&self.layout);
        let pages = grid.paginate(images);
        let last = pages.len().saturating_sub(1);

        pages
            .into_iter()
            .enumerate()
            .map(|(index, rows)| ImagePage {
                title: self.labels.images_title.clone(),
                rows: rows
                    .into_iter()
                    .map(|row| row.iter().map(|image| self.image_cell(image)).collect())
                    .collect(),
                page_break_after: index < last,
            })
            .collect()
    }

    fn image_cell(&self, image: &ExamImage) -> ImageCell {
        if !image.data.decodes() {
            debug!("Image '{}' could not be decoded, placing marker", image.id);
            return ImageCell::Invalid {
                image_id: image.id.clone(),
                marker: self.labels.invalid_image.clone(),
            };
        }

        ImageCell::Image {
            image_id: image.id.clone(),
            block: ImageBlock {
                data: image.data.clone(),
                width: self.layout.image_width,
                height: self.layout.image_height,
                alignment: Alignment::Center,
            },
            caption: image
                .structure_label
                .as_ref()
                .filter(|label| !label.trim().is_empty())
                .cloned(),
        }
    }
}

/// One section per ordered structure whose first entry has findings.
fn build_sections(exam: &Exam, structure_order: &[String]) -> Vec<Section> {
    structure_order
        .iter()
        .filter_map(|name| {
            let Some(entry) = exam.entry(name) else {
                debug!("No entry stored for structure '{}'", name);
                return None;
            };
            if !entry.has_findings() {
                return None;
            }
            Some(Section {
                title: name.clone(),
                body_lines: split_lines(&entry.report_text),
            })
        })
        .collect()
}

/// Default export file name without extension, safe to use as a single path component.
fn file_stem(prefix: &str, patient_name: &str) -> String {
    let name: String = patient_name
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{}_{}", prefix, name)
}

/// Split on `\n`, dropping a trailing `\r` from each line.
fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

fn push_if_present(lines: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        lines.push(value.to_string());
    }
}

/// Format a date, falling back to ISO 8601 when the pattern is invalid.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        debug!("Invalid date format '{}', using ISO 8601", pattern);
        return date.format("%Y-%m-%d").to_string();
    }
    out
}
