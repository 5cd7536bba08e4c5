use serde::Deserialize;

use crate::errors::AppError;
use crate::models::prompt::Category;

pub const MAX_TITLE_CHARS: usize = 200;

/// Body of the create and edit forms.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptInput {
    pub title: String,
    pub category: String,
    pub content: String,
}

/// A prompt form that passed validation. The title is trimmed; the content
/// is kept byte for byte since parameter lines depend on it.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidPrompt {
    pub title: String,
    pub category: Category,
    pub content: String,
}

pub fn validate_prompt_input(input: PromptInput) -> Result<ValidPrompt, AppError> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(AppError::Validation(format!(
            "title cannot exceed {MAX_TITLE_CHARS} characters"
        )));
    }
    if input.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }
    let category = input.category.parse::<Category>().map_err(AppError::Validation)?;

    Ok(ValidPrompt {
        title: title.to_string(),
        category,
        content: input.content,
    })
}

/// Parses the optional `category` query parameter. `all` and blank mean no filter.
pub fn parse_category_filter(raw: Option<&str>) -> Result<Option<Category>, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("all") => Ok(None),
        Some(v) => v.parse::<Category>().map(Some).map_err(AppError::Validation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, category: &str, content: &str) -> PromptInput {
        PromptInput {
            title: title.to_string(),
            category: category.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_valid_input() {
        let valid = validate_prompt_input(input("  Study plan ", "Technical", "[LEVEL] = beginner\n"))
            .unwrap();
        assert_eq!(valid.title, "Study plan");
        assert_eq!(valid.category, Category::Technical);
        assert_eq!(valid.content, "[LEVEL] = beginner\n");
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert!(validate_prompt_input(input("   ", "creative", "x")).is_err());
        assert!(validate_prompt_input(input("t", "creative", " \n ")).is_err());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = validate_prompt_input(input("t", "poetry", "x")).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("poetry")));
    }

    #[test]
    fn test_title_length_limit() {
        let long = "a".repeat(MAX_TITLE_CHARS + 1);
        assert!(validate_prompt_input(input(&long, "other", "x")).is_err());
        let max = "é".repeat(MAX_TITLE_CHARS);
        assert!(validate_prompt_input(input(&max, "other", "x")).is_ok());
    }

    #[test]
    fn test_category_filter() {
        assert_eq!(parse_category_filter(None).unwrap(), None);
        assert_eq!(parse_category_filter(Some("all")).unwrap(), None);
        assert_eq!(parse_category_filter(Some("")).unwrap(), None);
        assert_eq!(
            parse_category_filter(Some("marketing")).unwrap(),
            Some(Category::Marketing)
        );
        assert!(parse_category_filter(Some("nope")).is_err());
    }
}
