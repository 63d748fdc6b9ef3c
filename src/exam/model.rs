/*!
 * Core exam data model.
 *
 * Patients, exams, per-structure findings and attached images. These are the
 * records the report compiler reads; persisting them is the caller's concern.
 */

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::exam::image_data::ImageData;

/// Biological sex of a patient, used to pick reproductive structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// A registered patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Store identifier
    #[serde(default)]
    pub id: String,

    /// Patient name
    pub name: String,

    /// Species tag (e.g. "dog", "cat")
    pub species: String,

    /// Breed, free text
    #[serde(default)]
    pub breed: String,

    /// Registered weight in kg
    #[serde(default)]
    pub weight: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,

    #[serde(default)]
    pub is_neutered: bool,
}

impl Patient {
    pub fn new(name: &str, species: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            species: species.to_string(),
            breed: String::new(),
            weight: None,
            sex: None,
            is_neutered: false,
        }
    }

    pub fn with_breed(mut self, breed: &str) -> Self {
        self.breed = breed.to_string();
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_sex(mut self, sex: Sex, is_neutered: bool) -> Self {
        self.sex = Some(sex);
        self.is_neutered = is_neutered;
        self
    }
}

/// One recorded measurement of a structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    pub unit: String,
    #[serde(default)]
    pub is_abnormal: bool,
}

impl Measurement {
    pub fn new(value: f64, unit: &str) -> Self {
        Self {
            value,
            unit: unit.to_string(),
            is_abnormal: false,
        }
    }

    /// Flag the measurement against a reference range with the same unit.
    pub fn checked_against(mut self, range: &ReferenceRange) -> Self {
        if range.unit == self.unit {
            self.is_abnormal = range.is_abnormal(self.value);
        }
        self
    }
}

/// Reference interval for a measurement type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRange {
    pub measurement_type: String,
    pub unit: String,
    pub min_value: f64,
    pub max_value: f64,
}

impl ReferenceRange {
    /// A value outside `[min_value, max_value]` is abnormal.
    pub fn is_abnormal(&self, value: f64) -> bool {
        value < self.min_value || value > self.max_value
    }
}

/// Findings for one anatomical or diagnostic structure of an exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureEntry {
    /// Structure identifier, unique within an exam
    #[serde(rename = "organ_name", alias = "structure_name")]
    pub structure_name: String,

    /// Measurements keyed by measurement type
    #[serde(default)]
    pub measurements: BTreeMap<String, Measurement>,

    /// Free-form findings text; may carry `{MEDIDA}` tokens and `**bold**`/`*italic*` markup
    #[serde(default, rename = "report_text", alias = "reportText")]
    pub report_text: String,
}

impl StructureEntry {
    /// Create an empty entry for a structure.
    pub fn new(structure_name: &str) -> Self {
        Self {
            structure_name: structure_name.to_string(),
            measurements: BTreeMap::new(),
            report_text: String::new(),
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.report_text = text.to_string();
        self
    }

    /// Record a measurement under the next sequential key (`medida_1`, `medida_2`, ...).
    pub fn record_measurement(&mut self, measurement: Measurement) -> String {
        let key = format!("medida_{}", self.measurements.len() + 1);
        self.measurements.insert(key.clone(), measurement);
        key
    }

    /// Append a predefined finding text on its own line.
    pub fn append_template_text(&mut self, template_text: &str) {
        if self.report_text.is_empty() {
            self.report_text = template_text.to_string();
        } else {
            self.report_text.push('\n');
            self.report_text.push_str(template_text);
        }
    }

    /// Whether the entry produces a report section.
    pub fn has_findings(&self) -> bool {
        !self.report_text.trim().is_empty()
    }
}

/// One image attached to an exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamImage {
    /// Unique identifier
    pub id: String,

    /// Original file name, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Image payload
    pub data: ImageData,

    /// Structure this image documents, if tagged
    #[serde(default, rename = "organ", alias = "structure_label")]
    pub structure_label: Option<String>,
}

impl ExamImage {
    pub fn new(data: ImageData) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            filename: None,
            data,
            structure_label: None,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.structure_label = Some(label.to_string());
        self
    }
}

/// An exam: ordered structure findings plus images in upload order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exam {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub patient_id: String,

    /// Exam type tag (e.g. "ultrasound_abd")
    pub exam_type: String,

    pub exam_date: NaiveDate,

    /// Weight measured at the exam, in kg
    #[serde(default)]
    pub exam_weight: Option<f64>,

    /// Structure entries, in definition order
    #[serde(default, rename = "organs_data", alias = "structures")]
    pub structures: Vec<StructureEntry>,

    /// Images, in upload order
    #[serde(default)]
    pub images: Vec<ExamImage>,
}

impl Exam {
    /// Open an exam with one empty entry per structure, in the given order.
    pub fn new(patient_id: &str, exam_type: &str, exam_date: NaiveDate, structure_order: &[String]) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            patient_id: patient_id.to_string(),
            exam_type: exam_type.to_string(),
            exam_date,
            exam_weight: None,
            structures: structure_order.iter().map(|name| StructureEntry::new(name)).collect(),
            images: Vec::new(),
        }
    }

    /// First entry with exactly this structure name.
    pub fn entry(&self, structure_name: &str) -> Option<&StructureEntry> {
        self.structures.iter().find(|e| e.structure_name == structure_name)
    }

    /// Mutable access to the first entry with exactly this structure name.
    pub fn entry_mut(&mut self, structure_name: &str) -> Option<&mut StructureEntry> {
        self.structures.iter_mut().find(|e| e.structure_name == structure_name)
    }

    /// Append an image; returns its id.
    pub fn add_image(&mut self, image: ExamImage) -> String {
        let id = image.id.clone();
        self.images.push(image);
        id
    }

    /// Remove an image by id, keeping the order of the rest.
    pub fn remove_image(&mut self, id: &str) -> Option<ExamImage> {
        let position = self.images.iter().position(|img| img.id == id)?;
        Some(self.images.remove(position))
    }
}

/// Clinic identity printed in the report header.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClinicProfile {
    #[serde(default, alias = "clinic_name")]
    pub name: String,

    #[serde(default, alias = "clinic_address")]
    pub address: String,

    #[serde(default)]
    pub veterinarian_name: String,

    /// Professional license number (CRMV in Brazil)
    #[serde(default, alias = "crmv")]
    pub license_number: String,

    /// Letterhead image, as a data URL in serialized form
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "letterhead_path")]
    pub letterhead: Option<ImageData>,
}

/// A patient and one of their exams, as exported by the store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExamBundle {
    #[serde(default)]
    pub patient: Option<Patient>,

    #[serde(default)]
    pub exam: Option<Exam>,
}
