/*!
 * Offline Portuguese/English translation for report content.
 *
 * - `glossary`: the static term list and its inversion
 * - `engine`: longest-first, case-preserving phrase substitution
 */

pub use self::engine::{
    standard_translator, translate, translate_report, translate_structure_name, translate_tagged,
    Translator,
};
pub use self::glossary::{TranslationEntry, GLOSSARY};

pub mod engine;
pub mod glossary;
