use crate::error::{LibellesError, LibellesResult};
use crate::types::TranslationValue;
use serde_yaml::Value;
use std::collections::HashSet;
use std::path::Path;

/// Content of one translation file
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedTranslations {
    /// Entries in file order
    pub entries: Vec<(String, TranslationValue)>,
    /// Keys written as bare numbers or booleans (`1:`, `true:`)
    pub plain_keys: HashSet<String>,
}

/// Parse a translation file
pub fn parse_translation_file(path: &Path) -> LibellesResult<ParsedTranslations> {
    let content =
        std::fs::read_to_string(path).map_err(|e| LibellesError::load(path, e))?;
    parse_translations(&content).map_err(|message| LibellesError::load(path, message))
}

/// Parse translation YAML content.
///
/// The document must be a mapping. A document holding only comments is an
/// empty mapping.
pub fn parse_translations(content: &str) -> Result<ParsedTranslations, String> {
    let yaml: Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;

    let mapping = match yaml {
        Value::Null => return Ok(ParsedTranslations::default()),
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(format!(
                "expected a mapping of translations, found {}",
                value_kind(&other)
            ))
        }
    };

    let mut parsed = ParsedTranslations {
        entries: Vec::with_capacity(mapping.len()),
        plain_keys: HashSet::new(),
    };
    for (key, value) in mapping {
        let text = scalar_key(&key)
            .ok_or_else(|| format!("unsupported {} key", value_kind(&key)))?;
        if !key.is_string() {
            parsed.plain_keys.insert(text.clone());
        }
        let value = match value {
            Value::String(text) => TranslationValue::Text(text),
            other => TranslationValue::Structured(other),
        };
        parsed.entries.push((text, value));
    }

    Ok(parsed)
}

/// Text of a scalar mapping key (`1:` and `true:` read as "1" and "true")
fn scalar_key(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order() {
        let yaml = r#"
# header comment
zeta: Dernier
alpha: Premier
middle: >-
    Une phrase pliée
    sur deux lignes
"#;
        let entries = parse_translations(yaml).unwrap().entries;
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "middle"]);
        assert_eq!(
            entries[2].1,
            TranslationValue::Text("Une phrase pliée sur deux lignes".to_string())
        );
    }

    #[test]
    fn test_parse_comments_only() {
        let parsed = parse_translations("# nothing here\n").unwrap();
        assert!(parsed.entries.is_empty());
        assert!(parsed.plain_keys.is_empty());
    }

    #[test]
    fn test_parse_structured_values() {
        let yaml = "count: 3\nnested:\n    a: b\n";
        let entries = parse_translations(yaml).unwrap().entries;
        assert!(matches!(entries[0].1, TranslationValue::Structured(Value::Number(_))));
        assert!(matches!(entries[1].1, TranslationValue::Structured(Value::Mapping(_))));
    }

    #[test]
    fn test_parse_scalar_keys_remembered() {
        let parsed = parse_translations("1: un\ntrue: oui\n'2': deux\n").unwrap();
        let keys: Vec<&str> = parsed.entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["1", "true", "2"]);
        assert!(parsed.plain_keys.contains("1"));
        assert!(parsed.plain_keys.contains("true"));
        assert!(!parsed.plain_keys.contains("2"));
    }

    #[test]
    fn test_parse_rejects_sequence_document() {
        let err = parse_translations("- a\n- b\n").unwrap_err();
        assert!(err.contains("sequence"));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_translations("key: [unclosed\n").is_err());
    }
}
