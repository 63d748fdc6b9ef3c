/*!
 * Static Portuguese/English glossary for veterinary diagnostic reports.
 *
 * The list is ordered as authored. The Portuguese side is the lookup key for
 * PT→EN; the EN→PT direction is derived by inverting the list with
 * lower-cased keys.
 */

use once_cell::sync::Lazy;

/// A single term pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationEntry {
    /// Portuguese term
    pub source_term: &'static str,
    /// English term
    pub target_term: &'static str,
}

const fn entry(source_term: &'static str, target_term: &'static str) -> TranslationEntry {
    TranslationEntry { source_term, target_term }
}

/// The glossary, in authored order.
pub static GLOSSARY: &[TranslationEntry] = &[
    // Patient & exam info
    entry("Paciente", "Patient"),
    entry("Raça", "Breed"),
    entry("Peso cadastrado", "Registered weight"),
    entry("Peso no exame", "Exam weight"),
    entry("Data do exame", "Exam date"),
    entry("Tipo de Exame", "Exam Type"),
    entry("Laudo", "Report"),
    entry("Imagens", "Images"),
    entry("Conclusão", "Conclusion"),
    entry("Cão", "Dog"),
    entry("Gato", "Cat"),
    // Exam types
    entry("Ultrassom Abdominal", "Abdominal Ultrasound"),
    entry("Ecocardiograma", "Echocardiogram"),
    entry("Eletrocardiograma", "Electrocardiogram"),
    entry("Radiografia", "Radiography"),
    entry("Tomografia", "Tomography"),
    // Abdominal organs
    entry("Estômago", "Stomach"),
    entry("Fígado", "Liver"),
    entry("Baço", "Spleen"),
    entry("Rim Esquerdo", "Left Kidney"),
    entry("Rim Direito", "Right Kidney"),
    entry("Vesícula Urinária", "Urinary Bladder"),
    entry("Adrenal Esquerda", "Left Adrenal"),
    entry("Adrenal Direita", "Right Adrenal"),
    entry("Duodeno", "Duodenum"),
    entry("Jejuno", "Jejunum"),
    entry("Cólon", "Colon"),
    entry("Ceco", "Cecum"),
    entry("Íleo", "Ileum"),
    entry("Linfonodos", "Lymph Nodes"),
    entry("Próstata", "Prostate"),
    entry("Testículo Direito", "Right Testicle"),
    entry("Testículo Esquerdo", "Left Testicle"),
    entry("Corpo Uterino", "Uterine Body"),
    entry("Corno Uterino Direito", "Right Uterine Horn"),
    entry("Corno Uterino Esquerdo", "Left Uterine Horn"),
    entry("Ovário Direito", "Right Ovary"),
    entry("Ovário Esquerdo", "Left Ovary"),
    // Echocardiogram structures
    entry("Valva Mitral", "Mitral Valve"),
    entry("Valva Aórtica", "Aortic Valve"),
    entry("Valva Tricúspide", "Tricuspid Valve"),
    entry("Valva Pulmonar", "Pulmonary Valve"),
    entry("Ventrículo Esquerdo (Modo M)", "Left Ventricle (M-Mode)"),
    entry("Ventrículo Direito", "Right Ventricle"),
    entry("Átrio Esquerdo", "Left Atrium"),
    entry("Átrio Direito", "Right Atrium"),
    entry("Septo Interventricular", "Interventricular Septum"),
    entry("Parede Livre VE", "LV Free Wall"),
    entry("Aorta", "Aorta"),
    entry("Artéria Pulmonar", "Pulmonary Artery"),
    entry("Doppler Aórtico", "Aortic Doppler"),
    entry("Doppler Mitral", "Mitral Doppler"),
    entry("Doppler Tricúspide", "Tricuspid Doppler"),
    entry("Derrame Pericárdico", "Pericardial Effusion"),
    entry("Função Sistólica", "Systolic Function"),
    entry("Função Diastólica", "Diastolic Function"),
    // ECG parameters
    entry("Traçado DII", "Lead II Trace"),
    entry("Análise de Ritmo", "Rhythm Analysis"),
    entry("Frequência Cardíaca", "Heart Rate"),
    entry("Intervalo PR", "PR Interval"),
    entry("Duração QRS", "QRS Duration"),
    entry("Intervalo QT", "QT Interval"),
    entry("Segmento ST", "ST Segment"),
    entry("Onda P", "P Wave"),
    entry("Onda T", "T Wave"),
    entry("Eixo Elétrico", "Electrical Axis"),
    entry("Arritmias", "Arrhythmias"),
    // Radiography views
    entry("Projeção VD (Ventro-Dorsal)", "VD Projection (Ventro-Dorsal)"),
    entry("Projeção LL (Látero-Lateral)", "LL Projection (Latero-Lateral)"),
    entry("Tórax - Campos Pulmonares", "Thorax - Pulmonary Fields"),
    entry("Tórax - Silhueta Cardíaca", "Thorax - Cardiac Silhouette"),
    entry("Tórax - Traqueia e Brônquios", "Thorax - Trachea and Bronchi"),
    entry("Tórax - Mediastino", "Thorax - Mediastinum"),
    entry("Abdômen - Órgãos", "Abdomen - Organs"),
    entry("Abdômen - Intestinos", "Abdomen - Intestines"),
    entry("Abdômen - Bexiga", "Abdomen - Bladder"),
    entry("Musculoesquelético", "Musculoskeletal"),
    entry("Coluna Vertebral", "Vertebral Column"),
    entry("Conclusão Radiográfica", "Radiographic Conclusion"),
    // Tomography scans
    entry("Região Escaneada", "Scanned Region"),
    entry("Plano de Corte", "Slice Plane"),
    entry("Uso de Contraste", "Contrast Use"),
    entry("Fase Arterial", "Arterial Phase"),
    entry("Fase Venosa", "Venous Phase"),
    entry("Fase Tardia", "Late Phase"),
    entry("Achados Crânio", "Cranial Findings"),
    entry("Achados Tórax", "Thorax Findings"),
    entry("Achados Abdômen", "Abdomen Findings"),
    entry("Achados Membros", "Limb Findings"),
    entry("Achados Coluna", "Spine Findings"),
    entry("Medidas e Dimensões", "Measurements and Dimensions"),
    entry("Conclusão Tomográfica", "Tomographic Conclusion"),
    // Common descriptors
    entry("com dimensões", "with dimensions"),
    entry("contornos", "contours"),
    entry("ecogenicidade", "echogenicity"),
    entry("ecotextura", "echotexture"),
    entry("preservados", "preserved"),
    entry("apresenta", "shows"),
    entry("alteração", "alteration"),
    entry("aumento", "enlargement"),
    entry("dimensões", "dimensions"),
    entry("normal", "normal"),
    entry("anormal", "abnormal"),
    entry("aumentado", "enlarged"),
    entry("diminuído", "decreased"),
    entry("hiperecóico", "hyperechoic"),
    entry("hipoecóico", "hypoechoic"),
    entry("isoecóico", "isoechoic"),
    entry("homogêneo", "homogeneous"),
    entry("heterogêneo", "heterogeneous"),
    entry("regular", "regular"),
    entry("irregular", "irregular"),
    entry("definidos", "defined"),
    entry("indefinidos", "undefined"),
    entry("espessamento", "thickening"),
    entry("massa", "mass"),
    entry("nódulo", "nodule"),
    entry("cisto", "cyst"),
    entry("lesão", "lesion"),
    entry("calcificação", "calcification"),
    entry("dilatação", "dilation"),
    entry("estenose", "stenosis"),
    entry("derrame", "effusion"),
    entry("líquido livre", "free fluid"),
    // Measurements
    entry("comprimento", "length"),
    entry("largura", "width"),
    entry("altura", "height"),
    entry("espessura", "thickness"),
    entry("diâmetro", "diameter"),
    entry("volume", "volume"),
    entry("área", "area"),
    // Units
    entry("cm", "cm"),
    entry("mm", "mm"),
    entry("kg", "kg"),
    entry("bpm", "bpm"),
    entry("ms", "ms"),
    // Time
    entry("segundo", "second"),
    entry("minuto", "minute"),
    entry("hora", "hour"),
    entry("dia", "day"),
    // Common report phrases
    entry("sem alterações", "no changes"),
    entry("dentro dos limites da normalidade", "within normal limits"),
    entry("compatível com", "compatible with"),
    entry("sugestivo de", "suggestive of"),
    entry("achado incidental", "incidental finding"),
    entry("recomenda-se", "it is recommended"),
    entry("acompanhamento", "follow-up"),
    entry("controle", "monitoring"),
    entry("reavaliação", "reassessment"),
];

/// PT→EN pairs, in authored order.
pub fn forward_pairs() -> Vec<(String, String)> {
    GLOSSARY
        .iter()
        .map(|e| (e.source_term.to_string(), e.target_term.to_string()))
        .collect()
}

/// EN→PT pairs built by inversion, keyed by the lower-cased English term.
pub static REVERSE_PAIRS: Lazy<Vec<(String, String)>> = Lazy::new(|| invert(&forward_pairs()));

/// Invert a pair list, lower-casing the new keys.
///
/// When two pairs share a target term the later one supplies the value while
/// the key keeps its first position.
pub fn invert(pairs: &[(String, String)]) -> Vec<(String, String)> {
    let mut inverted: Vec<(String, String)> = Vec::with_capacity(pairs.len());
    for (source, target) in pairs {
        let key = target.to_lowercase();
        match inverted.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = source.clone(),
            None => inverted.push((key, source.clone())),
        }
    }
    inverted
}
