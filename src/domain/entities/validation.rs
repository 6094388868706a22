use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde_path_to_error::{Path, Segment};
use validator::{Validate, ValidationError};

use crate::{entities::option_fields::OptionField, errors::AppError};

// ───── Constants ──────────────────────────────────────────────────────
pub const MAX_TECH_STACK_ENTRIES: usize = 50;

// ───── Input parsing ──────────────────────────────────────────────────

/// Deserializes a raw JSON payload into an input record and validates it.
///
/// Shape problems (missing required keys, unknown or server-assigned keys,
/// wrong JSON types) and constraint problems are both reported as
/// `AppError::ValidationError`. Nothing is coerced.
pub fn parse_input<T>(value: serde_json::Value) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    let input: T = serde_path_to_error::deserialize(value).map_err(|e| deserialize_error(&e))?;
    input.validate()?;
    Ok(input)
}

/// Maps a serde error onto the wire path of the offending value, e.g.
/// `techStack[1]`, or `body` when the document itself is malformed.
pub fn deserialize_error(err: &serde_path_to_error::Error<serde_json::Error>) -> AppError {
    let mut field = wire_path(err.path());

    // Missing and unknown keys are reported by the enclosing object.
    if let Some(key) = named_key(err.inner()) {
        if !field.ends_with(key.as_str()) {
            if !field.is_empty() {
                field.push('.');
            }
            field.push_str(&key);
        }
    }

    if field.is_empty() {
        field.push_str("body");
    }
    AppError::invalid_field(field, err.inner().to_string())
}

fn wire_path(path: &Path) -> String {
    let mut out = String::new();
    for segment in path.iter() {
        match segment {
            Segment::Seq { index } => out.push_str(&format!("[{index}]")),
            Segment::Map { key } | Segment::Enum { variant: key } => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(key);
            }
            _ => {}
        }
    }
    out
}

fn named_key(err: &serde_json::Error) -> Option<String> {
    if !err.is_data() {
        return None;
    }
    let message = err.to_string();
    ["missing field `", "unknown field `"]
        .iter()
        .find_map(|prefix| message.strip_prefix(prefix))
        .and_then(|rest| rest.split('`').next())
        .map(str::to_string)
}

// ───── Field validators ───────────────────────────────────────────────

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(new_validation_error("blank", "Value cannot be blank"));
    }
    Ok(())
}

pub fn validate_tech_stack(stack: &[String]) -> Result<(), ValidationError> {
    if stack.len() > MAX_TECH_STACK_ENTRIES {
        return Err(new_validation_error("too_many_entries", "Tech stack has too many entries"));
    }
    if stack.iter().any(|tech| tech.trim().is_empty()) {
        return Err(new_validation_error("blank_entry", "Tech stack entries cannot be blank"));
    }
    Ok(())
}

/// Accepts an absolute http(s) URL or a site-relative path such as
/// `/assets/cert.pdf`.
pub fn validate_link_target(target: &str) -> Result<(), ValidationError> {
    if target.starts_with('/') && !target.starts_with("//") {
        return Ok(());
    }
    match url::Url::parse(target) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => Ok(()),
        Ok(_) => Err(new_validation_error("invalid_url_scheme", "URL must start with http:// or https://")),
        Err(_) => Err(new_validation_error("invalid_url", "Must be an http(s) URL or a path starting with /")),
    }
}

pub fn validate_optional_text(value: &OptionField<String>) -> Result<(), ValidationError> {
    if let OptionField::SetToValue(text) = value {
        validate_not_blank(text)?;
    }
    Ok(())
}

pub fn validate_optional_link_target(value: &OptionField<String>) -> Result<(), ValidationError> {
    if let OptionField::SetToValue(target) = value {
        validate_link_target(target)?;
    }
    Ok(())
}

pub(crate) fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings_are_rejected() {
        assert!(validate_not_blank("Rust").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
    }

    #[test]
    fn tech_stack_may_be_empty_but_entries_may_not() {
        assert!(validate_tech_stack(&[]).is_ok());
        assert!(validate_tech_stack(&["Rust".into(), "PostgreSQL".into()]).is_ok());
        assert!(validate_tech_stack(&["Rust".into(), " ".into()]).is_err());
    }

    #[test]
    fn link_targets_accept_http_and_site_paths() {
        assert!(validate_link_target("https://github.com/someone/project").is_ok());
        assert!(validate_link_target("http://example.com").is_ok());
        assert!(validate_link_target("/attached_assets/cert.pdf").is_ok());
        assert!(validate_link_target("//evil.example.com/x").is_err());
        assert!(validate_link_target("ftp://example.com/file").is_err());
        assert!(validate_link_target("not a url").is_err());
    }

    #[test]
    fn optional_text_only_checks_supplied_values() {
        assert!(validate_optional_text(&OptionField::Unchanged).is_ok());
        assert!(validate_optional_text(&OptionField::SetToNull).is_ok());
        assert!(validate_optional_text(&OptionField::SetToValue("".into())).is_err());
    }

    #[test]
    fn malformed_documents_are_reported_against_the_body() {
        let mut de = serde_json::Deserializer::from_str("{");
        let err = serde_path_to_error::deserialize::<_, serde_json::Value>(&mut de).unwrap_err();
        assert_eq!(deserialize_error(&err).field_errors()[0].field, "body");
    }

    #[derive(Debug, serde::Deserialize, Validate)]
    #[serde(rename_all = "camelCase", deny_unknown_fields)]
    struct Sample {
        #[allow(dead_code)]
        title: String,
        #[allow(dead_code)]
        tech_stack: Vec<String>,
    }

    fn field_of(value: serde_json::Value) -> String {
        parse_input::<Sample>(value).unwrap_err().field_errors()[0].field.clone()
    }

    #[test]
    fn wrong_types_are_reported_at_their_wire_path() {
        assert_eq!(
            field_of(serde_json::json!({"title": "T", "techStack": "Rust, Tokio"})),
            "techStack"
        );
        assert_eq!(
            field_of(serde_json::json!({"title": "T", "techStack": ["Rust", 42]})),
            "techStack[1]"
        );
        assert_eq!(field_of(serde_json::json!({"title": 7, "techStack": []})), "title");
    }

    #[test]
    fn missing_and_unknown_keys_are_named() {
        assert_eq!(field_of(serde_json::json!({"techStack": []})), "title");
        assert_eq!(
            field_of(serde_json::json!({"title": "T", "techStack": [], "createdAt": "now"})),
            "createdAt"
        );
    }
}
