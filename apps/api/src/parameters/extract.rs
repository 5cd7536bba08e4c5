use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

const LEVEL_OPTIONS: &[&str] = &["beginner", "intermediate", "advanced"];
const STYLE_OPTIONS: &[&str] = &["visual", "auditory", "hands-on", "reading"];

static PARAMETER_LINE: OnceLock<Regex> = OnceLock::new();

/// Matches `[KEY] = value` anywhere in a single line. Group 1 is the key,
/// group 2 the rest of the line.
pub(crate) fn parameter_line_regex() -> &'static Regex {
    PARAMETER_LINE.get_or_init(|| {
        Regex::new(r"\[([A-Z_]+)\]\s*=\s*(.*)").expect("Invalid parameter line regex")
    })
}

/// Input widget the UI renders for a parameter.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Select,
    Number,
    Textarea,
    Text,
}

impl ParameterKind {
    /// Infers the kind from substrings of the lower-cased key. First match wins.
    pub fn infer(key: &str) -> Self {
        if key.contains("level") {
            ParameterKind::Select
        } else if key.contains("time") {
            ParameterKind::Number
        } else if key.contains("style") {
            ParameterKind::Select
        } else if key.contains("goal") {
            ParameterKind::Textarea
        } else {
            ParameterKind::Text
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Parameter {
    pub key: String,
    pub label: String,
    pub kind: ParameterKind,
    pub default_value: String,
    #[serde(skip_serializing_if = "has_no_options")]
    pub options: &'static [&'static str],
}

fn has_no_options(options: &&'static [&'static str]) -> bool {
    options.is_empty()
}

impl Parameter {
    fn new(key: String, default_value: String) -> Self {
        let kind = ParameterKind::infer(&key);
        let options: &'static [&'static str] = match kind {
            ParameterKind::Select if key.contains("level") => LEVEL_OPTIONS,
            ParameterKind::Select if key.contains("style") => STYLE_OPTIONS,
            _ => &[],
        };
        Parameter {
            label: label_for(&key),
            key,
            kind,
            default_value,
            options,
        }
    }
}

/// Scans the template line by line and returns its parameters in order of
/// first appearance. A repeated key keeps its position and takes the later
/// default value.
pub fn extract_parameters(template: &str) -> Vec<Parameter> {
    let regex = parameter_line_regex();
    let mut parameters: Vec<Parameter> = Vec::new();

    for line in template.split('\n') {
        let Some(captures) = regex.captures(line) else {
            continue;
        };
        let key = captures[1].to_lowercase();
        let default_value = captures[2].trim().to_string();

        match parameters.iter_mut().find(|p| p.key == key) {
            Some(existing) => existing.default_value = default_value,
            None => parameters.push(Parameter::new(key, default_value)),
        }
    }

    parameters
}

/// Default values keyed by parameter key.
pub fn default_values(parameters: &[Parameter]) -> HashMap<String, String> {
    parameters
        .iter()
        .map(|p| (p.key.clone(), p.default_value.clone()))
        .collect()
}

/// `learning_style` → `Learning Style`.
fn label_for(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_and_goal_extracted_with_kinds() {
        let template = "You are a tutor.\n[LEVEL] = beginner\n[GOAL] = learn\n";
        let params = extract_parameters(template);

        assert_eq!(params.len(), 2);
        assert_eq!(params[0].key, "level");
        assert_eq!(params[0].default_value, "beginner");
        assert_eq!(params[0].kind, ParameterKind::Select);
        assert_eq!(params[1].key, "goal");
        assert_eq!(params[1].default_value, "learn");
        assert_eq!(params[1].kind, ParameterKind::Textarea);

        let defaults = default_values(&params);
        assert_eq!(defaults.get("level").map(String::as_str), Some("beginner"));
        assert_eq!(defaults.get("goal").map(String::as_str), Some("learn"));
    }

    #[test]
    fn test_no_parameter_lines() {
        assert!(extract_parameters("Write a haiku about autumn.\nKeep it short.").is_empty());
        assert!(extract_parameters("").is_empty());
    }

    #[test]
    fn test_malformed_lines_ignored() {
        let template = "[level] = lowercase key\n[LEVEL 2] = space\n[] = empty\nLEVEL = no brackets\n[TOPIC] = rust";
        let params = extract_parameters(template);
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].key, "topic");
    }

    #[test]
    fn test_kind_priority_order() {
        // "level" wins over "time", "time" wins over "style"
        assert_eq!(ParameterKind::infer("time_level"), ParameterKind::Select);
        assert_eq!(ParameterKind::infer("style_time"), ParameterKind::Number);
        assert_eq!(ParameterKind::infer("learning_style"), ParameterKind::Select);
        assert_eq!(ParameterKind::infer("career_goal"), ParameterKind::Textarea);
        assert_eq!(ParameterKind::infer("available_time"), ParameterKind::Number);
        assert_eq!(ParameterKind::infer("topic"), ParameterKind::Text);
    }

    #[test]
    fn test_select_options() {
        let params = extract_parameters("[SKILL_LEVEL] = beginner\n[LEARNING_STYLE] = visual\n[TOPIC] = x");
        assert_eq!(params[0].options, LEVEL_OPTIONS);
        assert_eq!(params[1].options, STYLE_OPTIONS);
        assert!(params[2].options.is_empty());
    }

    #[test]
    fn test_default_value_trimmed() {
        let params = extract_parameters("[TOPIC]=   ownership and borrowing   \r");
        assert_eq!(params[0].default_value, "ownership and borrowing");
    }

    #[test]
    fn test_marker_mid_line() {
        let params = extract_parameters("Study plan: [STUDY_TIME] = 30");
        assert_eq!(params[0].key, "study_time");
        assert_eq!(params[0].kind, ParameterKind::Number);
        assert_eq!(params[0].default_value, "30");
    }

    #[test]
    fn test_repeated_key_keeps_first_position_last_value() {
        let params = extract_parameters("[LEVEL] = beginner\n[TOPIC] = rust\n[LEVEL] = advanced");
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].key, "level");
        assert_eq!(params[0].default_value, "advanced");
    }

    #[test]
    fn test_label() {
        assert_eq!(label_for("learning_style"), "Learning Style");
        assert_eq!(label_for("level"), "Level");
        assert_eq!(label_for("_x"), " X");
    }

    #[test]
    fn test_serialized_shape() {
        let params = extract_parameters("[LEVEL] = beginner\n[GOAL] = learn");
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json[0]["kind"], "select");
        assert_eq!(json[0]["options"][2], "advanced");
        assert_eq!(json[1]["kind"], "textarea");
        assert!(json[1].get("options").is_none());
    }
}
