/*!
 * Tests for the report compiler
 */

use vetreport::errors::CompilationError;
use vetreport::exam::catalog::StandardCatalog;
use vetreport::exam::image_data::ImageData;
use vetreport::exam::model::{ExamImage, StructureEntry};
use vetreport::language_utils::ReportLanguage;
use vetreport::report::compiler::ReportCompiler;
use vetreport::report::document::ImageCell;
use vetreport::report::layout::LayoutConfig;

use crate::common;

fn portuguese() -> StandardCatalog {
    StandardCatalog::new(ReportLanguage::Portuguese)
}

fn english() -> StandardCatalog {
    StandardCatalog::new(ReportLanguage::English)
}

#[test]
fn test_compile_withExampleScenario_shouldProduceOneSectionAndOnePage() {
    let catalog = english();
    let compiler = ReportCompiler::new(&catalog);
    let patient = common::sample_patient();
    let mut exam = common::exam_with_findings(
        &patient,
        "ultrasound_abd",
        &[
            ("Stomach", ""),
            ("Liver", "Liver enlarged, measuring {MEDIDA}."),
            ("Spleen", ""),
        ],
    );
    common::add_images(&mut exam, 2, "Liver");
    let order = common::order(&["Stomach", "Liver", "Spleen"]);

    let document = compiler
        .compile(Some(&patient), Some(&exam), &common::sample_clinic(), &order)
        .unwrap();

    assert_eq!(document.section_titles(), vec!["Liver"]);
    assert_eq!(document.sections[0].body_lines, vec!["Liver enlarged, measuring {MEDIDA}."]);
    assert_eq!(document.image_pages.len(), 1);
    assert_eq!(document.image_pages[0].image_count(), 2);
    assert_eq!(document.page_break_count(), 0);

    let summary = document.patient_summary.text();
    assert!(summary.contains("Rex"));
    assert!(summary.contains("Dog"));
    assert!(summary.contains("12.5"));
}

#[test]
fn test_compile_withEnglishCatalog_shouldLocalizeSummaryLines() {
    let catalog = english();
    let patient = common::sample_patient();
    let exam = common::exam_with_findings(&patient, "ultrasound_abd", &[("Liver", "enlarged")]);

    let document = ReportCompiler::new(&catalog)
        .compile(Some(&patient), Some(&exam), &common::sample_clinic(), &common::order(&["Liver"]))
        .unwrap();

    assert_eq!(
        document.patient_summary.lines,
        vec![
            "Patient: Rex (Dog)",
            "Breed: SRD • Registered weight: 12.5 kg • Exam weight: 12.5 kg",
            "Exam Type: Abdominal Ultrasound",
            "Exam date: 15/03/2024",
        ]
    );
    assert_eq!(document.report_title, "Report");
    assert_eq!(document.file_stem, "report_Rex");
}

#[test]
fn test_compile_withExamWeight_shouldPreferItOverRegisteredWeight() {
    let catalog = portuguese();
    let patient = common::sample_patient();
    let mut exam = common::exam_with_findings(&patient, "ultrasound_abd", &[("Fígado", "x")]);
    exam.exam_weight = Some(13.0);

    let document = ReportCompiler::new(&catalog)
        .compile(Some(&patient), Some(&exam), &common::sample_clinic(), &common::order(&["Fígado"]))
        .unwrap();

    assert_eq!(document.patient_summary.lines[0], "Paciente: Rex (Cão)");
    assert_eq!(
        document.patient_summary.lines[1],
        "Raça: SRD • Peso cadastrado: 12.5 kg • Peso no exame: 13 kg"
    );
    assert_eq!(document.patient_summary.lines[2], "Tipo de Exame: Ultrassom Abdominal");
    assert_eq!(document.patient_summary.lines[3], "Data do exame: 15/03/2024");
    assert_eq!(document.report_title, "Laudo");
}

#[test]
fn test_compile_withUnknownExamType_shouldUseGenericExamName() {
    let catalog = portuguese();
    let patient = common::sample_patient();
    let exam = common::exam_with_findings(&patient, "mri", &[]);

    let document = ReportCompiler::new(&catalog)
        .compile(Some(&patient), Some(&exam), &common::sample_clinic(), &[])
        .unwrap();

    assert!(document.patient_summary.lines.contains(&"Tipo de Exame: Exame".to_string()));
    assert!(document.sections.is_empty());
    assert!(document.image_pages.is_empty());
}

#[test]
fn test_compile_withOnlyFirstAndLastFindings_shouldSkipMiddleStructure() {
    let catalog = portuguese();
    let patient = common::sample_patient();
    let exam = common::exam_with_findings(
        &patient,
        "ultrasound_abd",
        &[("A", "achado A"), ("B", ""), ("C", "achado C")],
    );

    let document = ReportCompiler::new(&catalog)
        .compile(Some(&patient), Some(&exam), &common::sample_clinic(), &common::order(&["A", "B", "C"]))
        .unwrap();

    assert_eq!(document.section_titles(), vec!["A", "C"]);
}

#[test]
fn test_compile_withWhitespaceOnlyText_shouldSkipSection() {
    let catalog = portuguese();
    let patient = common::sample_patient();
    let exam = common::exam_with_findings(&patient, "ultrasound_abd", &[("Baço", " \n\t ")]);

    let document = ReportCompiler::new(&catalog)
        .compile(Some(&patient), Some(&exam), &common::sample_clinic(), &common::order(&["Baço"]))
        .unwrap();

    assert!(document.sections.is_empty());
}

#[test]
fn test_compile_withNameMissingFromExam_shouldSkipSilently() {
    let catalog = portuguese();
    let patient = common::sample_patient();
    let exam = common::exam_with_findings(&patient, "ultrasound_abd", &[("Fígado", "normal")]);

    let document = ReportCompiler::new(&catalog)
        .compile(
            Some(&patient),
            Some(&exam),
            &common::sample_clinic(),
            &common::order(&["Estômago", "Fígado", "Próstata"]),
        )
        .unwrap();

    assert_eq!(document.section_titles(), vec!["Fígado"]);
}

#[test]
fn test_compile_withDuplicateEntries_shouldUseFirstMatch() {
    let catalog = portuguese();
    let patient = common::sample_patient();
    let mut exam = common::exam_with_findings(&patient, "ultrasound_abd", &[("Fígado", "primeiro")]);
    exam.structures.push(StructureEntry::new("Fígado").with_text("segundo"));

    let document = ReportCompiler::new(&catalog)
        .compile(Some(&patient), Some(&exam), &common::sample_clinic(), &common::order(&["Fígado"]))
        .unwrap();

    assert_eq!(document.sections.len(), 1);
    assert_eq!(document.sections[0].body_lines, vec!["primeiro"]);
}

#[test]
fn test_compile_withMultilineText_shouldSplitBodyLines() {
    let catalog = portuguese();
    let patient = common::sample_patient();
    let exam = common::exam_with_findings(
        &patient,
        "ultrasound_abd",
        &[("Fígado", "**Dimensões** aumentadas\n\nEcogenicidade *preservada*")],
    );

    let document = ReportCompiler::new(&catalog)
        .compile(Some(&patient), Some(&exam), &common::sample_clinic(), &common::order(&["Fígado"]))
        .unwrap();

    assert_eq!(
        document.sections[0].body_lines,
        vec!["**Dimensões** aumentadas", "", "Ecogenicidade *preservada*"]
    );
}

#[test]
fn test_compile_withThirteenImages_shouldPaginateSixSixOne() {
    let catalog = portuguese();
    let patient = common::sample_patient();
    let mut exam = common::exam_with_findings(&patient, "ultrasound_abd", &[]);
    let ids = common::add_images(&mut exam, 13, "Fígado");

    let document = ReportCompiler::new(&catalog)
        .compile(Some(&patient), Some(&exam), &common::sample_clinic(), &[])
        .unwrap();

    let sizes: Vec<usize> = document.image_pages.iter().map(|p| p.image_count()).collect();
    assert_eq!(sizes, vec![6, 6, 1]);

    let breaks: Vec<bool> = document.image_pages.iter().map(|p| p.page_break_after).collect();
    assert_eq!(breaks, vec![true, true, false]);

    let row_sizes: Vec<usize> = document.image_pages[0].rows.iter().map(Vec::len).collect();
    assert_eq!(row_sizes, vec![3, 3]);

    assert_eq!(document.image_ids(), ids.iter().map(String::as_str).collect::<Vec<_>>());
    assert!(document.image_pages.iter().all(|p| p.title == "Imagens"));
}

#[test]
fn test_compile_withCorruptImage_shouldKeepItsCellAsPlaceholder() {
    let catalog = portuguese();
    let patient = common::sample_patient();
    let mut exam = common::exam_with_findings(&patient, "ultrasound_abd", &[]);
    let first = common::add_images(&mut exam, 1, "Baço");
    let broken = exam.add_image(ExamImage::new(common::corrupt_image()));
    let rest = common::add_images(&mut exam, 3, "Baço");

    let document = ReportCompiler::new(&catalog)
        .compile(Some(&patient), Some(&exam), &common::sample_clinic(), &[])
        .unwrap();

    let cells: Vec<&ImageCell> = document.image_pages[0].cells().collect();
    assert_eq!(cells.len(), 5);
    assert_eq!(cells[0].image_id(), first[0]);
    assert_eq!(
        cells[1],
        &ImageCell::Invalid {
            image_id: broken,
            marker: "Imagem inválida".to_string(),
        }
    );
    assert_eq!(cells[2].image_id(), rest[0]);
    assert!(cells.iter().filter(|c| c.is_invalid()).count() == 1);
}

#[test]
fn test_compile_withEmptyPayload_shouldRenderInvalidImage() {
    let catalog = english();
    let patient = common::sample_patient();
    let mut exam = common::exam_with_findings(&patient, "ultrasound_abd", &[]);
    exam.add_image(ExamImage::new(ImageData::from("not a data url".to_string())));

    let document = ReportCompiler::new(&catalog)
        .compile(Some(&patient), Some(&exam), &common::sample_clinic(), &[])
        .unwrap();

    match document.image_pages[0].cells().next() {
        Some(ImageCell::Invalid { marker, .. }) => assert_eq!(marker, "Invalid image"),
        other => panic!("expected invalid image cell, got {:?}", other),
    }
}

#[test]
fn test_compile_withValidImage_shouldUseCellBoxAndCaption() {
    let catalog = portuguese();
    let patient = common::sample_patient();
    let mut exam = common::exam_with_findings(&patient, "ultrasound_abd", &[]);
    common::add_images(&mut exam, 1, "Rim Direito");
    exam.add_image(ExamImage::new(common::valid_image()));

    let document = ReportCompiler::new(&catalog)
        .compile(Some(&patient), Some(&exam), &common::sample_clinic(), &[])
        .unwrap();

    let cells: Vec<&ImageCell> = document.image_pages[0].cells().collect();
    match cells[0] {
        ImageCell::Image { block, caption, .. } => {
            assert_eq!((block.width, block.height), (180, 140));
            assert_eq!(caption.as_deref(), Some("Rim Direito"));
        }
        other => panic!("expected image cell, got {:?}", other),
    }
    match cells[1] {
        ImageCell::Image { caption, .. } => assert!(caption.is_none()),
        other => panic!("expected image cell, got {:?}", other),
    }
}

#[test]
fn test_compile_withCustomLayout_shouldFollowConfiguredGrid() {
    let catalog = portuguese();
    let patient = common::sample_patient();
    let mut exam = common::exam_with_findings(&patient, "ultrasound_abd", &[]);
    common::add_images(&mut exam, 5, "Fígado");
    let layout = LayoutConfig {
        images_per_page: 4,
        grid_columns: 2,
        ..LayoutConfig::default()
    };

    let document = ReportCompiler::new(&catalog)
        .with_layout(layout)
        .compile(Some(&patient), Some(&exam), &common::sample_clinic(), &[])
        .unwrap();

    let sizes: Vec<usize> = document.image_pages.iter().map(|p| p.image_count()).collect();
    assert_eq!(sizes, vec![4, 1]);
    assert_eq!(document.image_pages[0].rows.len(), 2);
}

#[test]
fn test_compile_withLetterhead_shouldEmitCenteredImageBlock() {
    let catalog = portuguese();
    let patient = common::sample_patient();
    let exam = common::exam_with_findings(&patient, "ultrasound_abd", &[]);
    let mut clinic = common::sample_clinic();
    clinic.letterhead = Some(common::valid_image());

    let document = ReportCompiler::new(&catalog)
        .compile(Some(&patient), Some(&exam), &clinic, &[])
        .unwrap();

    let letterhead = document.header.letterhead.expect("letterhead block");
    assert_eq!((letterhead.width, letterhead.height), (600, 120));
    assert_eq!(document.header.lines.len(), 3);
}

#[test]
fn test_compile_withCorruptLetterhead_shouldFallBackToTextHeader() {
    let catalog = portuguese();
    let patient = common::sample_patient();
    let exam = common::exam_with_findings(&patient, "ultrasound_abd", &[]);
    let mut clinic = common::sample_clinic();
    clinic.letterhead = Some(common::corrupt_image());

    let document = ReportCompiler::new(&catalog)
        .compile(Some(&patient), Some(&exam), &clinic, &[])
        .unwrap();

    assert!(document.header.letterhead.is_none());
    assert_eq!(
        document.header.lines,
        vec![
            "Clínica Veterinária Aurora",
            "Dra. Ana Souza • CRMV SP-12345",
            "Rua das Flores, 100",
        ]
    );
}

#[test]
fn test_compile_withNonImageLetterhead_shouldSkipImageBlock() {
    let catalog = portuguese();
    let patient = common::sample_patient();
    let exam = common::exam_with_findings(&patient, "ultrasound_abd", &[]);
    let mut clinic = common::sample_clinic();
    clinic.letterhead = Some(ImageData::with_mime("application/pdf", common::png_bytes(2, 2)));

    let document = ReportCompiler::new(&catalog)
        .compile(Some(&patient), Some(&exam), &clinic, &[])
        .unwrap();

    assert!(document.header.letterhead.is_none());
}

#[test]
fn test_compile_withBlankClinicFields_shouldOmitThem() {
    let catalog = portuguese();
    let patient = common::sample_patient();
    let exam = common::exam_with_findings(&patient, "ultrasound_abd", &[]);
    let mut clinic = common::sample_clinic();
    clinic.address = "  ".to_string();
    clinic.veterinarian_name = String::new();

    let document = ReportCompiler::new(&catalog)
        .compile(Some(&patient), Some(&exam), &clinic, &[])
        .unwrap();

    assert_eq!(document.header.lines, vec!["Clínica Veterinária Aurora", "CRMV SP-12345"]);
}

#[test]
fn test_compile_withoutPatient_shouldFailWithMissingPatient() {
    let catalog = portuguese();
    let patient = common::sample_patient();
    let exam = common::exam_with_findings(&patient, "ultrasound_abd", &[]);

    let result = ReportCompiler::new(&catalog).compile(None, Some(&exam), &common::sample_clinic(), &[]);

    assert_eq!(result.unwrap_err(), CompilationError::MissingPatient);
}

#[test]
fn test_compile_withoutExam_shouldFailWithMissingExam() {
    let catalog = portuguese();
    let patient = common::sample_patient();

    let result = ReportCompiler::new(&catalog).compile(Some(&patient), None, &common::sample_clinic(), &[]);

    assert_eq!(result.unwrap_err(), CompilationError::MissingExam);
}

#[test]
fn test_compileExam_shouldUseCatalogOrder() {
    let catalog = portuguese();
    let patient = common::sample_patient();
    let exam = common::exam_with_findings(
        &patient,
        "ultrasound_abd",
        &[("Testículo Direito", "normal"), ("Fígado", "normal"), ("Estômago", "normal")],
    );

    let document = ReportCompiler::new(&catalog)
        .compile_exam(Some(&patient), Some(&exam), &common::sample_clinic())
        .unwrap();

    assert_eq!(document.section_titles(), vec!["Estômago", "Fígado", "Testículo Direito"]);
}

#[test]
fn test_compile_withCustomDateFormat_shouldFormatExamDate() {
    let catalog = portuguese();
    let patient = common::sample_patient();
    let exam = common::exam_with_findings(&patient, "ultrasound_abd", &[]);

    let document = ReportCompiler::new(&catalog)
        .with_date_format("%Y-%m-%d")
        .compile(Some(&patient), Some(&exam), &common::sample_clinic(), &[])
        .unwrap();

    assert!(document.patient_summary.lines.contains(&"Data do exame: 2024-03-15".to_string()));
}
