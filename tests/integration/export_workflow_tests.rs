/*!
 * End-to-end tests from exam bundle to exported document
 */

use anyhow::Result;

use vetreport::app_config::Config;
use vetreport::app_controller::Controller;
use vetreport::errors::CompilationError;
use vetreport::exam::model::ExamBundle;
use vetreport::language_utils::ReportLanguage;
use vetreport::report::render::OutputFormat;
use vetreport::translation::translate_report;

use crate::common;

#[test]
fn test_export_inPortuguese_shouldKeepAuthoredText() -> Result<()> {
    common::init_logging();
    let controller = Controller::new_for_test()?;

    let document = controller.export(&common::sample_bundle(), ReportLanguage::Portuguese)?;

    assert_eq!(document.section_titles(), vec!["Fígado", "Rim Esquerdo"]);
    assert_eq!(document.sections[0].body_lines, vec!["Fígado aumentado", "Contornos regulares"]);
    assert_eq!(document.header.lines, vec!["TVUSVET Laudos"]);
    assert_eq!(document.image_count(), 2);
    assert_eq!(document.file_stem, "laudo_Rex");
    Ok(())
}

#[test]
fn test_export_inEnglish_shouldTranslateTitlesAndFindings() -> Result<()> {
    common::init_logging();
    let controller = Controller::new_for_test()?;

    let document = controller.export(&common::sample_bundle(), ReportLanguage::English)?;

    assert_eq!(document.section_titles(), vec!["Liver", "Left Kidney"]);
    assert_eq!(document.sections[0].body_lines[0], "Liver enlarged");
    assert_eq!(document.sections[1].body_lines, vec!["Left Kidney normal"]);
    assert_eq!(document.report_title, "Report");
    assert!(document.patient_summary.text().contains("Patient: Rex (Dog)"));
    assert!(document.patient_summary.text().contains("Exam weight: 13 kg"));
    Ok(())
}

#[test]
fn test_export_withConfiguredClinic_shouldBuildHeader() -> Result<()> {
    let mut config = Config::default();
    config.clinic = common::sample_clinic();
    config.clinic.letterhead = Some(common::valid_image());
    let controller = Controller::with_config(config)?;

    let document = controller.export(&common::sample_bundle(), ReportLanguage::Portuguese)?;

    assert!(document.header.letterhead.is_some());
    assert_eq!(document.header.lines[1], "Dra. Ana Souza • CRMV SP-12345");
    Ok(())
}

#[test]
fn test_export_withMissingRecords_shouldSurfaceCompilationError() -> Result<()> {
    common::init_logging();
    let controller = Controller::new_for_test()?;
    let mut bundle = common::sample_bundle();
    bundle.patient = None;

    let err = controller.export(&bundle, ReportLanguage::English).unwrap_err();
    assert_eq!(err.downcast_ref::<CompilationError>(), Some(&CompilationError::MissingPatient));

    let no_exam = ExamBundle {
        patient: common::sample_bundle().patient,
        exam: None,
    };
    let err = controller.export(&no_exam, ReportLanguage::Portuguese).unwrap_err();
    assert_eq!(err.downcast_ref::<CompilationError>(), Some(&CompilationError::MissingExam));
    Ok(())
}

#[test]
fn test_translateReport_roundTrip_shouldKeepStructureNames() {
    let bundle = common::sample_bundle();
    let exam = bundle.exam.expect("sample exam");

    let english = translate_report(&exam, ReportLanguage::English);
    let back = translate_report(&english, ReportLanguage::Portuguese);

    assert_eq!(back.structures.len(), exam.structures.len());
    assert!(back.structures.iter().all(|s| !s.structure_name.is_empty()));
    assert_eq!(
        back.entry("Fígado").map(|e| e.report_text.as_str()),
        Some("Fígado aumentado\nContornos regulares")
    );
    assert_eq!(back.images, exam.images);
    assert_eq!(back.exam_date, exam.exam_date);
}

#[test]
fn test_exportToFile_shouldWriteRenderedDocument() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let output = dir.path().join("rex.txt");
    common::init_logging();
    let controller = Controller::new_for_test()?;

    let path = controller.export_to_file(
        &common::sample_bundle(),
        ReportLanguage::English,
        OutputFormat::Text,
        Some(&output),
    )?;

    let text = std::fs::read_to_string(path)?;
    assert!(text.contains("Liver"));
    assert!(text.contains("Images"));
    Ok(())
}

#[test]
fn test_exportToFile_withPathLikePatientName_shouldWriteInsideWorkingDirectory() -> Result<()> {
    common::init_logging();
    let controller = Controller::new_for_test()?;
    let mut bundle = common::sample_bundle();
    if let Some(patient) = bundle.patient.as_mut() {
        patient.name = "Rex/../../escape".to_string();
    }

    let document = controller.export(&bundle, ReportLanguage::Portuguese)?;
    assert_eq!(document.file_stem, "laudo_Rex_______escape");

    let path = std::path::PathBuf::from(format!("{}.json", document.file_stem));
    let components: Vec<_> = path.components().collect();
    assert_eq!(components.len(), 1);
    assert!(matches!(components[0], std::path::Component::Normal(_)));
    Ok(())
}

#[test]
fn test_loadBundle_withStoreFieldNames_shouldCompile() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let json = r#"{
        "patient": { "id": "p1", "name": "Luna", "species": "cat", "breed": "Siamês", "weight": 4.2,
                     "sex": "female", "is_neutered": true },
        "exam": {
            "id": "e1", "patient_id": "p1", "exam_type": "ultrasound_abd", "exam_date": "2024-01-20",
            "organs_data": [
                { "organ_name": "Fígado", "report_text": "Dimensões normais" },
                { "organ_name": "Baço", "report_text": "" }
            ],
            "images": [ { "id": "i1", "data": "garbage", "organ": "Fígado" } ]
        }
    }"#;
    let path = common::create_test_file(dir.path(), "bundle.json", json)?;

    let bundle = Controller::load_bundle(&path)?;
    let document = Controller::new_for_test()?.export(&bundle, ReportLanguage::Portuguese)?;

    assert_eq!(document.section_titles(), vec!["Fígado"]);
    assert!(document.patient_summary.lines.contains(&"Paciente: Luna (Gato)".to_string()));
    assert!(document.patient_summary.lines.contains(&"Data do exame: 20/01/2024".to_string()));
    assert!(document.image_pages[0].rows[0][0].is_invalid());
    Ok(())
}

#[test]
fn test_translateText_withUnsupportedTag_shouldFail() -> Result<()> {
    common::init_logging();
    let controller = Controller::new_for_test()?;

    assert_eq!(controller.translate_text("Baço", "en")?, "Spleen");
    assert!(controller.translate_text("Baço", "klingon").is_err());
    Ok(())
}

#[test]
fn test_structures_shouldFollowRequestedLanguage() -> Result<()> {
    common::init_logging();
    let controller = Controller::new_for_test()?;

    let names = controller.structures("ecg", None, ReportLanguage::Portuguese);
    assert_eq!(names.first().map(String::as_str), Some("Traçado DII"));
    Ok(())
}
