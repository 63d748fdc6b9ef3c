/*!
 * # vetreport - Veterinary exam report compiler
 *
 * A Rust library that turns veterinary exam records into structured,
 * renderer-agnostic report documents, with offline Portuguese/English
 * localization driven by a fixed clinical glossary.
 *
 * ## Features
 *
 * - Compile a patient, an exam and the clinic profile into a document:
 *   - Letterhead and clinic header
 *   - Patient summary with localized labels
 *   - One findings section per structure, in catalog order
 *   - Paginated image grid with placeholders for broken images
 * - Catalog of exam types and their ordered structures
 * - Glossary substitution between Portuguese and English
 * - JSON and plain text rendering
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `exam`: Patient and exam records, image payloads, exam-type catalog
 * - `translation`: Glossary and substitution engine
 * - `report`: Document model, layout, compiler and renderers
 * - `app_controller`: Main application controller
 * - `language_utils`: Report language parsing
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod exam;
pub mod language_utils;
pub mod report;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, CompilationError, ImageDataError, UnsupportedLanguageError};
pub use exam::{ClinicProfile, Exam, ExamBundle, ExamImage, Patient, StructureEntry};
pub use language_utils::ReportLanguage;
pub use report::{CompiledDocument, ReportCompiler};
pub use translation::{translate, translate_report, translate_tagged, Translator};
