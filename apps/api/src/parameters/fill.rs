use std::collections::HashMap;

use regex::Captures;
use thiserror::Error;

use super::extract::{default_values, extract_parameters, parameter_line_regex, Parameter, ParameterKind};

#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("Parameter '{key}' expects a number, got '{value}'")]
    NotANumber { key: String, value: String },
}

/// Rejects supplied values that cannot be entered through the parameter's
/// widget. Values for keys not present in the template are not checked.
pub fn validate_values(
    parameters: &[Parameter],
    values: &HashMap<String, String>,
) -> Result<(), ParameterError> {
    for parameter in parameters {
        let Some(value) = values.get(&parameter.key) else {
            continue;
        };
        let trimmed = value.trim();
        // Numeric inputs never produce NaN or infinities
        if parameter.kind == ParameterKind::Number
            && !trimmed.is_empty()
            && !matches!(trimmed.parse::<f64>(), Ok(n) if n.is_finite())
        {
            return Err(ParameterError::NotANumber {
                key: parameter.key.clone(),
                value: value.clone(),
            });
        }
    }
    Ok(())
}

/// Rewrites every `[KEY] = ...` marker in the template with the supplied
/// value for that key, falling back to the template's own default.
///
/// Each marker is rewritten up to the end of its own line only. Line
/// terminators are preserved, so a template without markers comes back
/// unchanged.
pub fn fill_template(template: &str, values: &HashMap<String, String>) -> String {
    let parameters = extract_parameters(template);
    if parameters.is_empty() {
        return template.to_string();
    }

    let mut resolved = default_values(&parameters);
    for (key, value) in values {
        if let Some(slot) = resolved.get_mut(key) {
            slot.clone_from(value);
        }
    }

    let regex = parameter_line_regex();
    let mut filled = String::with_capacity(template.len());

    for line in template.split_inclusive('\n') {
        let (body, terminator) = split_terminator(line);
        let rewritten = regex.replace_all(body, |caps: &Captures| {
            let marker = &caps[1];
            match resolved.get(&marker.to_lowercase()) {
                Some(value) => format!("[{marker}] = {value}"),
                None => caps[0].to_string(),
            }
        });
        filled.push_str(&rewritten);
        filled.push_str(terminator);
    }

    filled
}

fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}
