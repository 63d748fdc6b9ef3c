/*!
 * Glossary-driven text substitution between Portuguese and English.
 *
 * Rules are applied one after another, longest phrase first, each over the
 * whole text produced by the previous rule. A replacement written by a longer
 * rule can therefore be matched again by a shorter one.
 *
 * Matching is case-insensitive and only accepts whole phrases: an occurrence
 * embedded in a larger word ("dia" inside "Mediastino") is left alone.
 */

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::errors::UnsupportedLanguageError;
use crate::exam::model::Exam;
use crate::language_utils::{capitalize_first, lowercase_first, ReportLanguage};
use crate::translation::glossary;

/// One compiled glossary rule.
#[derive(Debug, Clone)]
struct SubstitutionRule {
    phrase: String,
    replacement: String,
    pattern: Regex,
}

impl SubstitutionRule {
    fn new(phrase: &str, replacement: &str) -> Option<Self> {
        if phrase.is_empty() {
            return None;
        }

        let pattern = RegexBuilder::new(&regex::escape(phrase))
            .case_insensitive(true)
            .build();

        match pattern {
            Ok(pattern) => Some(Self {
                phrase: phrase.to_string(),
                replacement: replacement.to_string(),
                pattern,
            }),
            Err(e) => {
                warn!("Skipping glossary phrase '{}': {}", phrase, e);
                None
            }
        }
    }

    /// Replace every whole-phrase occurrence; `None` when nothing matched.
    fn apply(&self, text: &str) -> Option<String> {
        let mut result = String::with_capacity(text.len());
        let mut copied_up_to = 0;
        let mut search_from = 0;
        let mut replaced = false;

        while let Some(m) = self.pattern.find_at(text, search_from) {
            if is_whole_phrase(text, m.start(), m.end()) {
                result.push_str(&text[copied_up_to..m.start()]);
                result.push_str(&self.replacement_for(m.as_str()));
                copied_up_to = m.end();
                search_from = m.end();
                replaced = true;
            } else {
                // Retry from the next character so overlapping candidates are not lost
                search_from = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
            }

            if search_from >= text.len() {
                break;
            }
        }

        if !replaced {
            return None;
        }

        result.push_str(&text[copied_up_to..]);
        Some(result)
    }

    /// Give the replacement the case of the occurrence's first character.
    fn replacement_for(&self, occurrence: &str) -> String {
        match occurrence.chars().next() {
            Some(first) if first.is_lowercase() => lowercase_first(&self.replacement),
            Some(_) => capitalize_first(&self.replacement),
            None => self.replacement.clone(),
        }
    }
}

/// A match must not continue a word on either side.
fn is_whole_phrase(text: &str, start: usize, end: usize) -> bool {
    let matched = &text[start..end];
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();

    let starts_word = matched.chars().next().is_some_and(char::is_alphanumeric);
    let ends_word = matched.chars().next_back().is_some_and(char::is_alphanumeric);

    let clean_start = !(starts_word && before.is_some_and(char::is_alphanumeric));
    let clean_end = !(ends_word && after.is_some_and(char::is_alphanumeric));

    clean_start && clean_end
}

/// Compile pairs into rules sorted by phrase length, longest first.
///
/// The sort is stable, so equally long phrases keep their authored order.
fn compile_rules(pairs: &[(String, String)]) -> Vec<SubstitutionRule> {
    let mut rules: Vec<SubstitutionRule> = pairs
        .iter()
        .filter_map(|(phrase, replacement)| SubstitutionRule::new(phrase, replacement))
        .collect();
    rules.sort_by(|a, b| b.phrase.chars().count().cmp(&a.phrase.chars().count()));
    rules
}

/// Bidirectional glossary translator.
///
/// Immutable once built; share it freely across threads.
#[derive(Debug, Clone)]
pub struct Translator {
    to_english: Vec<SubstitutionRule>,
    to_portuguese: Vec<SubstitutionRule>,
}

impl Translator {
    /// Build a translator from PT→EN pairs; the EN→PT side is derived by inversion.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            to_english: compile_rules(pairs),
            to_portuguese: compile_rules(&glossary::invert(pairs)),
        }
    }

    /// Translator over the built-in veterinary glossary.
    pub fn standard() -> Self {
        Self {
            to_english: compile_rules(&glossary::forward_pairs()),
            to_portuguese: compile_rules(&glossary::REVERSE_PAIRS),
        }
    }

    fn rules(&self, target: ReportLanguage) -> &[SubstitutionRule] {
        match target {
            ReportLanguage::English => &self.to_english,
            ReportLanguage::Portuguese => &self.to_portuguese,
        }
    }

    /// Translate text into the target language.
    pub fn translate(&self, text: &str, target: ReportLanguage) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut translated = text.to_string();
        for rule in self.rules(target) {
            if let Some(next) = rule.apply(&translated) {
                translated = next;
            }
        }
        translated
    }

    /// Translate optional text with a language tag.
    ///
    /// Absent text comes back absent; the tag is checked first either way.
    pub fn translate_tagged(
        &self,
        text: Option<&str>,
        target_tag: &str,
    ) -> Result<Option<String>, UnsupportedLanguageError> {
        let target = ReportLanguage::parse(target_tag)?;
        Ok(text.map(|t| self.translate(t, target)))
    }

    /// Translate the structure names and findings of an exam.
    ///
    /// Returns a new exam; every other field is carried over unchanged.
    pub fn translate_report(&self, exam: &Exam, target: ReportLanguage) -> Exam {
        debug!(
            "Translating {} structure entries of exam '{}' to {}",
            exam.structures.len(),
            exam.id,
            target
        );

        let mut translated = exam.clone();
        for entry in &mut translated.structures {
            entry.structure_name = self.translate(&entry.structure_name, target);
            entry.report_text = self.translate(&entry.report_text, target);
        }
        translated
    }
}

static STANDARD_TRANSLATOR: Lazy<Translator> = Lazy::new(Translator::standard);

/// The process-wide translator over the built-in glossary.
pub fn standard_translator() -> &'static Translator {
    &STANDARD_TRANSLATOR
}

/// Translate text with the built-in glossary.
pub fn translate(text: &str, target: ReportLanguage) -> String {
    STANDARD_TRANSLATOR.translate(text, target)
}

/// Translate a structure name with the built-in glossary.
pub fn translate_structure_name(name: &str, target: ReportLanguage) -> String {
    STANDARD_TRANSLATOR.translate(name, target)
}

/// Translate optional text given a language tag.
pub fn translate_tagged(
    text: Option<&str>,
    target_tag: &str,
) -> Result<Option<String>, UnsupportedLanguageError> {
    STANDARD_TRANSLATOR.translate_tagged(text, target_tag)
}

/// Translate an exam's structure entries with the built-in glossary.
pub fn translate_report(exam: &Exam, target: ReportLanguage) -> Exam {
    STANDARD_TRANSLATOR.translate_report(exam, target)
}
