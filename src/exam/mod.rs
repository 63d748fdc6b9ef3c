/*!
 * Exam records and the exam-type catalog.
 *
 * - `model`: patients, exams, structure entries, images, clinic profile
 * - `image_data`: data-URL image payloads
 * - `catalog`: exam types, structure order and display names
 */

pub mod catalog;
pub mod image_data;
pub mod model;

pub use catalog::{ExamCatalog, ExamType, StandardCatalog};
pub use image_data::ImageData;
pub use model::{
    ClinicProfile, Exam, ExamBundle, ExamImage, Measurement, Patient, ReferenceRange, Sex,
    StructureEntry,
};
