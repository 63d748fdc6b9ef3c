/*!
 * Report compilation.
 *
 * - `document`: the compiled, renderer-agnostic document model
 * - `layout`: image grid and pagination geometry
 * - `labels`: fixed captions per report language
 * - `compiler`: builds a document from patient, exam and clinic data
 * - `render`: turns a compiled document into output bytes
 */

pub mod compiler;
pub mod document;
pub mod labels;
pub mod layout;
pub mod render;

pub use compiler::ReportCompiler;
pub use document::{
    CompiledDocument, DocumentHeader, ImageBlock, ImageCell, ImagePage, PatientSummary, Section,
};
pub use labels::ReportLabels;
pub use layout::{GridLayout, LayoutConfig};
pub use render::{DocumentRenderer, JsonRenderer, OutputFormat, PlainTextRenderer};
