//! Extraction of JSON payloads from LLM replies.
//!
//! Models asked for JSON still wrap it in markdown fences or surround it
//! with prose often enough that callers must not feed replies straight to
//! serde. [`extract_json`] peels fences and locates the outermost object;
//! [`parse_llm_json`] finishes the job with a typed deserialize.

use serde::de::DeserializeOwned;

use crate::error::WorkflowError;

/// Pull the JSON object out of an LLM reply.
///
/// Handles three shapes: a bare object, an object inside a ```json fence,
/// and an object embedded in surrounding prose. Returns the text between
/// the first `{` and the last `}` inclusive.
pub fn extract_json(reply: &str) -> Option<&str> {
    let trimmed = reply.trim();

    // Strip a markdown fence if present. The language tag after the
    // opening fence varies (json, JSON, nothing), so cut at the first
    // newline instead of matching it.
    let inner = if let Some(rest) = trimmed.strip_prefix("```") {
        let rest = rest.split_once('\n').map(|(_, body)| body).unwrap_or(rest);
        rest.rsplit_once("```").map(|(body, _)| body).unwrap_or(rest)
    } else {
        trimmed
    };

    let start = inner.find('{')?;
    let end = inner.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&inner[start..=end])
}

/// Extract and deserialize the JSON object in an LLM reply.
pub fn parse_llm_json<T: DeserializeOwned>(reply: &str) -> Result<T, WorkflowError> {
    let json = extract_json(reply).ok_or_else(|| {
        WorkflowError::InvalidResponse(format!(
            "no JSON object found in model reply ({} chars)",
            reply.len()
        ))
    })?;

    serde_json::from_str(json)
        .map_err(|e| WorkflowError::InvalidResponse(format!("model JSON did not parse: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        name: String,
    }

    #[test]
    fn test_bare_object() {
        let parsed: Payload = parse_llm_json(r#"{"name": "Acme"}"#).unwrap();
        assert_eq!(parsed.name, "Acme");
    }

    #[test]
    fn test_fenced_object() {
        let reply = "```json\n{\"name\": \"Acme\"}\n```";
        let parsed: Payload = parse_llm_json(reply).unwrap();
        assert_eq!(parsed.name, "Acme");
    }

    #[test]
    fn test_object_in_prose() {
        let reply = "Here is the analysis you asked for:\n{\"name\": \"Acme\"}\nLet me know!";
        let parsed: Payload = parse_llm_json(reply).unwrap();
        assert_eq!(parsed.name, "Acme");
    }

    #[test]
    fn test_no_object_is_error() {
        let result: Result<Payload, _> = parse_llm_json("I can't help with that.");
        assert!(matches!(result, Err(WorkflowError::InvalidResponse(_))));
    }

    #[test]
    fn test_malformed_json_is_error() {
        let result: Result<Payload, _> = parse_llm_json(r#"{"name": }"#);
        assert!(matches!(result, Err(WorkflowError::InvalidResponse(_))));
    }

    #[test]
    fn test_nested_braces_survive() {
        #[derive(Debug, Deserialize)]
        struct Outer {
            inner: Payload,
        }
        let reply = r#"Sure: {"inner": {"name": "Acme"}} done."#;
        let parsed: Outer = parse_llm_json(reply).unwrap();
        assert_eq!(parsed.inner.name, "Acme");
    }
}
