use serde::{Deserialize, Serialize};

use crate::language_utils::ReportLanguage;

/// Fixed captions printed around the report content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLabels {
    pub patient: String,
    pub breed: String,
    pub registered_weight: String,
    pub exam_weight: String,
    pub exam_type: String,
    pub exam_date: String,
    pub report_title: String,
    pub images_title: String,
    pub invalid_image: String,
    pub license: String,
    pub file_prefix: String,
}

impl ReportLabels {
    pub fn for_language(language: ReportLanguage) -> Self {
        match language {
            ReportLanguage::Portuguese => Self {
                patient: "Paciente".to_string(),
                breed: "Raça".to_string(),
                registered_weight: "Peso cadastrado".to_string(),
                exam_weight: "Peso no exame".to_string(),
                exam_type: "Tipo de Exame".to_string(),
                exam_date: "Data do exame".to_string(),
                report_title: "Laudo".to_string(),
                images_title: "Imagens".to_string(),
                invalid_image: "Imagem inválida".to_string(),
                license: "CRMV".to_string(),
                file_prefix: "laudo".to_string(),
            },
            ReportLanguage::English => Self {
                patient: "Patient".to_string(),
                breed: "Breed".to_string(),
                registered_weight: "Registered weight".to_string(),
                exam_weight: "Exam weight".to_string(),
                exam_type: "Exam Type".to_string(),
                exam_date: "Exam date".to_string(),
                report_title: "Report".to_string(),
                images_title: "Images".to_string(),
                invalid_image: "Invalid image".to_string(),
                license: "License".to_string(),
                file_prefix: "report".to_string(),
            },
        }
    }
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self::for_language(ReportLanguage::default())
    }
}
