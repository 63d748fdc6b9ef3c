/*!
 * Tests for language utility functions
 */

use std::str::FromStr;

use vetreport::language_utils::{available_languages, capitalize_first, ReportLanguage};

#[test]
fn test_parse_withIsoCodes_shouldAcceptBothParts() {
    assert_eq!(ReportLanguage::parse("pt").unwrap(), ReportLanguage::Portuguese);
    assert_eq!(ReportLanguage::parse("por").unwrap(), ReportLanguage::Portuguese);
    assert_eq!(ReportLanguage::parse("EN").unwrap(), ReportLanguage::English);
    assert_eq!(ReportLanguage::parse(" eng ").unwrap(), ReportLanguage::English);
}

#[test]
fn test_parse_withUnsupportedTags_shouldKeepOriginalTagInError() {
    for tag in ["klingon", "es", "", "fra", "p"] {
        let err = ReportLanguage::parse(tag).unwrap_err();
        assert_eq!(err.tag, tag);
    }
}

#[test]
fn test_fromStr_shouldMatchParse() {
    assert_eq!(ReportLanguage::from_str("pt-PT").unwrap(), ReportLanguage::Portuguese);
    assert!("de".parse::<ReportLanguage>().is_err());
}

#[test]
fn test_opposite_shouldSwapPair() {
    assert_eq!(ReportLanguage::Portuguese.opposite(), ReportLanguage::English);
    assert_eq!(ReportLanguage::English.opposite(), ReportLanguage::Portuguese);
}

#[test]
fn test_names_shouldComeFromIsoTables() {
    assert_eq!(ReportLanguage::English.english_name(), "English");
    assert_eq!(ReportLanguage::Portuguese.english_name(), "Portuguese");
    assert_eq!(ReportLanguage::Portuguese.native_name(), "Português");
}

#[test]
fn test_availableLanguages_shouldListAuthoringLanguageFirst() {
    let languages = available_languages();
    let codes: Vec<&str> = languages.iter().map(|l| l.code).collect();
    assert_eq!(codes, vec!["pt", "en"]);
}

#[test]
fn test_serde_shouldUseIsoCodes() {
    let json = serde_json::to_string(&ReportLanguage::English).unwrap();
    assert_eq!(json, "\"en\"");
    let parsed: ReportLanguage = serde_json::from_str("\"pt\"").unwrap();
    assert_eq!(parsed, ReportLanguage::Portuguese);
}

#[test]
fn test_capitalizeFirst_shouldOnlyTouchFirstCharacter() {
    assert_eq!(capitalize_first("left kidney"), "Left kidney");
    assert_eq!(capitalize_first("Baço"), "Baço");
}
