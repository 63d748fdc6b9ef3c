/*!
 * Exam-type catalog.
 *
 * Maps an exam-type tag to its canonical, ordered list of structures and
 * provides the display names the report header needs. Structure names are
 * authored in Portuguese; the English catalog derives its names through the
 * glossary so they line up with translated exams.
 */

use log::warn;
use std::fmt;

use crate::exam::model::{Patient, Sex};
use crate::language_utils::ReportLanguage;
use crate::translation::engine;

pub const ABDOMINAL_ORGANS: &[&str] = &[
    "Estômago", "Fígado", "Baço", "Rim Esquerdo", "Rim Direito",
    "Vesícula Urinária", "Adrenal Esquerda", "Adrenal Direita",
    "Duodeno", "Jejuno", "Cólon", "Ceco", "Íleo", "Linfonodos",
];

pub const REPRODUCTIVE_ORGANS_MALE: &[&str] = &["Próstata", "Testículo Direito", "Testículo Esquerdo"];
pub const REPRODUCTIVE_ORGANS_MALE_NEUTERED: &[&str] = &["Próstata"];
pub const REPRODUCTIVE_ORGANS_FEMALE: &[&str] = &[
    "Corpo Uterino", "Corno Uterino Direito", "Corno Uterino Esquerdo",
    "Ovário Direito", "Ovário Esquerdo",
];

pub const ECHOCARDIOGRAM_STRUCTURES: &[&str] = &[
    "Valva Mitral",
    "Valva Aórtica",
    "Valva Tricúspide",
    "Valva Pulmonar",
    "Ventrículo Esquerdo (Modo M)",
    "Ventrículo Direito",
    "Átrio Esquerdo",
    "Átrio Direito",
    "Septo Interventricular",
    "Parede Livre VE",
    "Aorta",
    "Artéria Pulmonar",
    "Doppler Aórtico",
    "Doppler Mitral",
    "Doppler Tricúspide",
    "Derrame Pericárdico",
    "Função Sistólica",
    "Função Diastólica",
];

pub const ECG_LEADS: &[&str] = &[
    "Traçado DII",
    "Análise de Ritmo",
    "Frequência Cardíaca",
    "Intervalo PR",
    "Duração QRS",
    "Intervalo QT",
    "Segmento ST",
    "Onda P",
    "Onda T",
    "Eixo Elétrico",
    "Arritmias",
    "Conclusão",
];

pub const RADIOGRAPHY_VIEWS: &[&str] = &[
    "Projeção VD (Ventro-Dorsal)",
    "Projeção LL (Látero-Lateral)",
    "Tórax - Campos Pulmonares",
    "Tórax - Silhueta Cardíaca",
    "Tórax - Traqueia e Brônquios",
    "Tórax - Mediastino",
    "Abdômen - Órgãos",
    "Abdômen - Intestinos",
    "Abdômen - Bexiga",
    "Musculoesquelético",
    "Coluna Vertebral",
    "Conclusão Radiográfica",
];

pub const TOMOGRAPHY_SCANS: &[&str] = &[
    "Região Escaneada",
    "Plano de Corte",
    "Uso de Contraste",
    "Fase Arterial",
    "Fase Venosa",
    "Fase Tardia",
    "Achados Crânio",
    "Achados Tórax",
    "Achados Abdômen",
    "Achados Membros",
    "Achados Coluna",
    "Medidas e Dimensões",
    "Conclusão Tomográfica",
];

/// Supported exam modalities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExamType {
    AbdominalUltrasound,
    Echocardiogram,
    Electrocardiogram,
    Radiography,
    Tomography,
}

impl ExamType {
    pub const ALL: [ExamType; 5] = [
        ExamType::AbdominalUltrasound,
        ExamType::Echocardiogram,
        ExamType::Electrocardiogram,
        ExamType::Radiography,
        ExamType::Tomography,
    ];

    /// Stored tag
    pub fn tag(&self) -> &'static str {
        match self {
            Self::AbdominalUltrasound => "ultrasound_abd",
            Self::Echocardiogram => "echocardiogram",
            Self::Electrocardiogram => "ecg",
            Self::Radiography => "radiography",
            Self::Tomography => "tomography",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.tag() == tag.trim())
    }

    /// Portuguese display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::AbdominalUltrasound => "Ultrassom Abdominal",
            Self::Echocardiogram => "Ecocardiograma",
            Self::Electrocardiogram => "Eletrocardiograma",
            Self::Radiography => "Radiografia",
            Self::Tomography => "Tomografia",
        }
    }

    /// Canonical structures, in report order, authored in Portuguese.
    ///
    /// Abdominal ultrasound appends reproductive organs by sex and neuter
    /// status; a patient without a recorded sex is treated like a female.
    pub fn structures(&self, patient: Option<&Patient>) -> Vec<&'static str> {
        match self {
            Self::AbdominalUltrasound => {
                let mut structures = ABDOMINAL_ORGANS.to_vec();
                let is_neutered = patient.is_some_and(|p| p.is_neutered);
                match patient.and_then(|p| p.sex) {
                    Some(Sex::Male) if is_neutered => {
                        structures.extend_from_slice(REPRODUCTIVE_ORGANS_MALE_NEUTERED)
                    }
                    Some(Sex::Male) => structures.extend_from_slice(REPRODUCTIVE_ORGANS_MALE),
                    _ if !is_neutered => structures.extend_from_slice(REPRODUCTIVE_ORGANS_FEMALE),
                    _ => {}
                }
                structures
            }
            Self::Echocardiogram => ECHOCARDIOGRAM_STRUCTURES.to_vec(),
            Self::Electrocardiogram => ECG_LEADS.to_vec(),
            Self::Radiography => RADIOGRAPHY_VIEWS.to_vec(),
            Self::Tomography => TOMOGRAPHY_SCANS.to_vec(),
        }
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Lookup the compiler uses for structure order and display names.
pub trait ExamCatalog: Send + Sync {
    /// Language the catalog's names are written in
    fn language(&self) -> ReportLanguage;

    /// Ordered structure names for an exam type
    fn structure_order(&self, exam_type: &str, patient: Option<&Patient>) -> Vec<String>;

    /// Human-readable exam type name
    fn exam_type_name(&self, exam_type: &str) -> String;

    /// Human-readable species name
    fn species_name(&self, species: &str) -> String;
}

/// Built-in catalog of the five exam modalities.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCatalog {
    language: ReportLanguage,
}

impl StandardCatalog {
    pub fn new(language: ReportLanguage) -> Self {
        Self { language }
    }

    fn localize(&self, name: &str) -> String {
        match self.language {
            ReportLanguage::Portuguese => name.to_string(),
            lang => engine::translate(name, lang),
        }
    }
}

impl ExamCatalog for StandardCatalog {
    fn language(&self) -> ReportLanguage {
        self.language
    }

    fn structure_order(&self, exam_type: &str, patient: Option<&Patient>) -> Vec<String> {
        let resolved = ExamType::from_tag(exam_type).unwrap_or_else(|| {
            warn!("Unknown exam type: {}, defaulting to {}", exam_type, ExamType::AbdominalUltrasound);
            ExamType::AbdominalUltrasound
        });

        resolved
            .structures(patient)
            .into_iter()
            .map(|name| self.localize(name))
            .collect()
    }

    fn exam_type_name(&self, exam_type: &str) -> String {
        match ExamType::from_tag(exam_type) {
            Some(t) => self.localize(t.display_name()),
            None => match self.language {
                ReportLanguage::Portuguese => "Exame".to_string(),
                ReportLanguage::English => "Exam".to_string(),
            },
        }
    }

    fn species_name(&self, species: &str) -> String {
        let name = match (species.trim().to_lowercase().as_str(), self.language) {
            ("dog", ReportLanguage::Portuguese) => "Cão",
            ("dog", ReportLanguage::English) => "Dog",
            ("cat", ReportLanguage::Portuguese) => "Gato",
            ("cat", ReportLanguage::English) => "Cat",
            _ => species,
        };
        name.to_string()
    }
}
