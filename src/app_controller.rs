use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::exam::catalog::{ExamCatalog, StandardCatalog};
use crate::exam::model::{ExamBundle, Patient};
use crate::language_utils::ReportLanguage;
use crate::report::compiler::ReportCompiler;
use crate::report::document::CompiledDocument;
use crate::report::render::{renderer_for, OutputFormat};
use crate::translation::{standard_translator, Translator};

/// Main application controller for report export
pub struct Controller {
    config: Config,
    translator: &'static Translator,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a controller; the configuration is validated first.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self {
            config,
            translator: standard_translator(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Language reports are exported in when none is requested
    pub fn default_language(&self) -> Result<ReportLanguage> {
        self.config.language()
    }

    /// Compile a bundle into a document in the requested language.
    ///
    /// Exams are authored in Portuguese; other languages translate the
    /// structure entries first and use the catalog in the same language so
    /// section titles line up with the translated entries.
    pub fn export(&self, bundle: &ExamBundle, language: ReportLanguage) -> Result<CompiledDocument> {
        let exam = match (&bundle.exam, language) {
            (Some(exam), ReportLanguage::English) => {
                Some(self.translator.translate_report(exam, language))
            }
            (exam, _) => exam.clone(),
        };

        let catalog = StandardCatalog::new(language);
        let order = match &exam {
            Some(exam) => catalog.structure_order(&exam.exam_type, bundle.patient.as_ref()),
            None => Vec::new(),
        };

        let compiler = ReportCompiler::new(&catalog)
            .with_layout(self.config.layout.clone())
            .with_date_format(&self.config.date_format);

        let document = compiler.compile(
            bundle.patient.as_ref(),
            exam.as_ref(),
            &self.config.clinic,
            &order,
        )?;

        debug!(
            "Compiled '{}': {} sections, {} images on {} pages",
            document.file_stem,
            document.sections.len(),
            document.image_count(),
            document.image_pages.len()
        );
        Ok(document)
    }

    /// Render a compiled document in the given format.
    pub fn render(&self, document: &CompiledDocument, format: OutputFormat) -> Result<Vec<u8>> {
        renderer_for(format).render(document)
    }

    /// Export a bundle and write the rendered document.
    ///
    /// Without an explicit output path the file is named after the patient
    /// in the current directory.
    pub fn export_to_file(
        &self,
        bundle: &ExamBundle,
        language: ReportLanguage,
        format: OutputFormat,
        output: Option<&Path>,
    ) -> Result<PathBuf> {
        let document = self.export(bundle, language)?;
        let renderer = renderer_for(format);
        let bytes = renderer.render(&document)?;

        let path = match output {
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(format!("{}.{}", document.file_stem, renderer.extension())),
        };
        std::fs::write(&path, bytes)
            .context(format!("Failed to write report to file: {}", path.display()))?;

        info!("Report written to {}", path.display());
        Ok(path)
    }

    /// Translate free text given a language tag.
    pub fn translate_text(&self, text: &str, target_tag: &str) -> Result<String> {
        let target = ReportLanguage::parse(target_tag)?;
        Ok(self.translator.translate(text, target))
    }

    /// Ordered structure names for an exam type in the given language.
    pub fn structures(
        &self,
        exam_type: &str,
        patient: Option<&Patient>,
        language: ReportLanguage,
    ) -> Vec<String> {
        StandardCatalog::new(language).structure_order(exam_type, patient)
    }

    /// Read a `{ "patient": ..., "exam": ... }` bundle from disk.
    pub fn load_bundle(path: &Path) -> Result<ExamBundle> {
        let file = File::open(path)
            .context(format!("Failed to open exam bundle: {}", path.display()))?;
        let reader = BufReader::new(file);
        let bundle: ExamBundle = serde_json::from_reader(reader)
            .context(format!("Failed to parse exam bundle: {}", path.display()))?;
        Ok(bundle)
    }
}
